//! Condition translator: one arm per variant of the closed union.
//!
//! Combinator terms and `Inverted` recurse back into this function; term
//! order is preserved verbatim because the target API short-circuits.

use crate::ast::Condition;
use crate::compile::predicate::{damage_source, entity, item, location};
use crate::compile::provider::{bounded_int_range, enchantment_level, entity_target, number};
use crate::java::{enchantment_entry, float_lit, registry_key};

pub fn condition(c: &Condition) -> String {
    match c {
        Condition::WeatherCheck {
            raining,
            thundering,
        } => {
            let mut out = String::from("WeatherCheckLootCondition.create()");
            if let Some(raining) = raining {
                out.push_str(&format!(".raining({raining})"));
            }
            if let Some(thundering) = thundering {
                out.push_str(&format!(".thundering({thundering})"));
            }
            out
        }
        Condition::ValueCheck { value, range } => {
            format!(
                "ValueCheckLootCondition.builder({}, {})",
                number(value),
                bounded_int_range(range)
            )
        }
        Condition::TimeCheck { value, period } => {
            let mut out = format!("TimeCheckLootCondition.create({})", bounded_int_range(value));
            if let Some(period) = period {
                out.push_str(&format!(".period({period})"));
            }
            out
        }
        Condition::TableBonus {
            enchantment,
            chances,
        } => {
            let chances = chances
                .iter()
                .map(|c| float_lit(*c))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "TableBonusLootCondition.builder({}, {chances})",
                enchantment_entry(enchantment)
            )
        }
        Condition::SurvivesExplosion => "SurvivesExplosionLootCondition.builder()".to_string(),
        Condition::Reference { name } => {
            format!(
                "ReferenceLootCondition.builder({})",
                registry_key("PREDICATE", name)
            )
        }
        Condition::RandomChanceWithEnchantedBonus {
            unenchanted_chance,
            enchanted_chance,
            enchantment,
        } => {
            format!(
                "new RandomChanceWithEnchantedBonusLootCondition({}, {}, {})",
                float_lit(*unenchanted_chance),
                enchantment_level(enchanted_chance),
                enchantment_entry(enchantment)
            )
        }
        Condition::RandomChance { chance } => {
            format!("RandomChanceLootCondition.builder({})", float_lit(*chance))
        }
        Condition::MatchTool(predicate) => {
            format!("MatchToolLootCondition.builder({})", item(predicate))
        }
        Condition::LocationCheck { predicate, offset } => match offset {
            // The offset argument exists iff at least one axis appeared in
            // the source; missing axes were zero-filled at decode.
            Some([x, y, z]) => format!(
                "LocationCheckLootCondition.builder({}, new BlockPos({x}, {y}, {z}))",
                location(predicate)
            ),
            None => format!("LocationCheckLootCondition.builder({})", location(predicate)),
        },
        Condition::KilledByPlayer { inverse } => {
            let mut out = String::from("KilledByPlayerLootCondition.builder()");
            if *inverse {
                out.push_str(".invert()");
            }
            out
        }
        Condition::Inverted(term) => {
            format!("InvertedLootCondition.builder({})", condition(term))
        }
        Condition::EntityProperties {
            entity: target,
            predicate,
        } => {
            format!(
                "EntityPropertiesLootCondition.builder({}, {})",
                entity_target(target),
                entity(predicate)
            )
        }
        Condition::EnchantmentActiveCheck { active } => {
            if *active {
                "EnchantmentActiveCheckLootCondition.requireActive()".to_string()
            } else {
                "EnchantmentActiveCheckLootCondition.requireInactive()".to_string()
            }
        }
        Condition::DamageSourceProperties(predicate) => {
            format!(
                "DamageSourcePropertiesLootCondition.builder({})",
                damage_source(predicate)
            )
        }
        Condition::AnyOf(terms) => {
            format!("AnyOfLootCondition.builder({})", join_terms(terms))
        }
        Condition::AllOf(terms) => {
            format!("AllOfLootCondition.builder({})", join_terms(terms))
        }
    }
}

fn join_terms(terms: &[Condition]) -> String {
    terms
        .iter()
        .map(condition)
        .collect::<Vec<_>>()
        .join(", ")
}
