//! The condition union, discriminated by the `condition` tag.

use serde_json::{Map, Value};

use crate::ast::Condition;
use crate::decode::predicate::{damage_source, entity, item, location};
use crate::decode::provider::{bounded_int_range, enchantment_level, entity_target, number};
use crate::decode::{boolean, int, list, local_tag, num, obj, req, string};
use crate::error::{Error, NodePath, Result};

/// Decode one condition node. Unknown tags are an error naming the tag and the
/// node path; `entity_scores` is recognized but deliberately untranslated.
pub fn condition(v: &Value, path: &NodePath) -> Result<Condition> {
    let m = obj(v, path, "a condition object")?;
    let tag = string(req(m, "condition", path)?, &path.field("condition"))?;

    match local_tag(tag) {
        "weather_check" => Ok(Condition::WeatherCheck {
            raining: opt_bool(m, "raining", path)?,
            thundering: opt_bool(m, "thundering", path)?,
        }),
        "value_check" => Ok(Condition::ValueCheck {
            value: number(req(m, "value", path)?, &path.field("value"))?,
            range: bounded_int_range(req(m, "range", path)?, &path.field("range"))?,
        }),
        "time_check" => Ok(Condition::TimeCheck {
            value: bounded_int_range(req(m, "value", path)?, &path.field("value"))?,
            period: m
                .get("period")
                .map(|p| int(p, &path.field("period")))
                .transpose()?,
        }),
        "table_bonus" => {
            let chances_path = path.field("chances");
            let raw = list(req(m, "chances", path)?, &chances_path, "an array of chances")?;
            if raw.is_empty() {
                return Err(Error::Shape {
                    path: chances_path,
                    expected: "at least one chance",
                });
            }
            let mut chances = Vec::with_capacity(raw.len());
            for (i, c) in raw.iter().enumerate() {
                chances.push(num(c, &chances_path.index(i))?);
            }
            Ok(Condition::TableBonus {
                enchantment: string(req(m, "enchantment", path)?, &path.field("enchantment"))?
                    .to_string(),
                chances,
            })
        }
        "survives_explosion" => Ok(Condition::SurvivesExplosion),
        "reference" => Ok(Condition::Reference {
            name: string(req(m, "name", path)?, &path.field("name"))?.to_string(),
        }),
        "random_chance_with_enchanted_bonus" => Ok(Condition::RandomChanceWithEnchantedBonus {
            unenchanted_chance: num(
                req(m, "unenchanted_chance", path)?,
                &path.field("unenchanted_chance"),
            )?,
            enchanted_chance: enchantment_level(
                req(m, "enchanted_chance", path)?,
                &path.field("enchanted_chance"),
            )?,
            enchantment: string(req(m, "enchantment", path)?, &path.field("enchantment"))?
                .to_string(),
        }),
        "random_chance" => Ok(Condition::RandomChance {
            chance: num(req(m, "chance", path)?, &path.field("chance"))?,
        }),
        "match_tool" => Ok(Condition::MatchTool(item(
            req(m, "predicate", path)?,
            &path.field("predicate"),
        )?)),
        "location_check" => {
            let predicate = match m.get("predicate") {
                Some(p) => location(p, &path.field("predicate"))?,
                None => Default::default(),
            };
            // The offset argument exists iff at least one axis is present;
            // missing axes default to 0.
            let offset = if ["offsetX", "offsetY", "offsetZ"]
                .iter()
                .any(|k| m.contains_key(*k))
            {
                Some([
                    opt_offset(m, "offsetX", path)?,
                    opt_offset(m, "offsetY", path)?,
                    opt_offset(m, "offsetZ", path)?,
                ])
            } else {
                None
            };
            Ok(Condition::LocationCheck { predicate, offset })
        }
        "killed_by_player" => Ok(Condition::KilledByPlayer {
            inverse: opt_bool(m, "inverse", path)?.unwrap_or(false),
        }),
        "inverted" => Ok(Condition::Inverted(Box::new(condition(
            req(m, "term", path)?,
            &path.field("term"),
        )?))),
        "entity_properties" => Ok(Condition::EntityProperties {
            entity: entity_target(req(m, "entity", path)?, &path.field("entity"))?,
            predicate: match m.get("predicate") {
                Some(p) => entity(p, &path.field("predicate"))?,
                None => Default::default(),
            },
        }),
        "enchantment_active_check" => Ok(Condition::EnchantmentActiveCheck {
            active: boolean(req(m, "active", path)?, &path.field("active"))?,
        }),
        "damage_source_properties" => Ok(Condition::DamageSourceProperties(damage_source(
            req(m, "predicate", path)?,
            &path.field("predicate"),
        )?)),
        "any_of" => Ok(Condition::AnyOf(terms(m, path)?)),
        "all_of" => Ok(Condition::AllOf(terms(m, path)?)),
        "entity_scores" => Err(Error::Unsupported {
            path: path.clone(),
            feature: "entity-score conditions",
        }),
        _ => Err(Error::UnknownTag {
            path: path.clone(),
            kind: "condition",
            tag: tag.to_string(),
        }),
    }
}

/// Combinator terms: non-empty, document order preserved.
fn terms(m: &Map<String, Value>, path: &NodePath) -> Result<Vec<Condition>> {
    let terms_path = path.field("terms");
    let raw = list(req(m, "terms", path)?, &terms_path, "an array of conditions")?;
    if raw.is_empty() {
        return Err(Error::Shape {
            path: terms_path,
            expected: "at least one term",
        });
    }
    let mut out = Vec::with_capacity(raw.len());
    for (i, t) in raw.iter().enumerate() {
        out.push(condition(t, &terms_path.index(i))?);
    }
    Ok(out)
}

fn opt_bool(m: &Map<String, Value>, key: &'static str, path: &NodePath) -> Result<Option<bool>> {
    m.get(key)
        .map(|v| boolean(v, &path.field(key)))
        .transpose()
}

fn opt_offset(m: &Map<String, Value>, key: &'static str, path: &NodePath) -> Result<i64> {
    Ok(m.get(key)
        .map(|v| int(v, &path.field(key)))
        .transpose()?
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NumberProvider;
    use serde_json::json;

    fn root() -> NodePath {
        NodePath::root()
    }

    #[test]
    fn inverted_killed_by_player() {
        let v = json!({
            "condition": "minecraft:inverted",
            "term": {"condition": "minecraft:killed_by_player"}
        });
        let c = condition(&v, &root()).unwrap();
        assert_eq!(
            c,
            Condition::Inverted(Box::new(Condition::KilledByPlayer { inverse: false }))
        );
    }

    #[test]
    fn any_of_preserves_term_order() {
        let v = json!({
            "condition": "minecraft:any_of",
            "terms": [
                {"condition": "minecraft:survives_explosion"},
                {"condition": "minecraft:random_chance", "chance": 0.5},
                {"condition": "minecraft:killed_by_player", "inverse": true}
            ]
        });
        match condition(&v, &root()).unwrap() {
            Condition::AnyOf(terms) => {
                assert_eq!(terms.len(), 3);
                assert_eq!(terms[0], Condition::SurvivesExplosion);
                assert_eq!(terms[1], Condition::RandomChance { chance: 0.5 });
                assert_eq!(terms[2], Condition::KilledByPlayer { inverse: true });
            }
            other => panic!("expected AnyOf, got {other:?}"),
        }
    }

    #[test]
    fn empty_combinator_is_rejected() {
        let v = json!({"condition": "minecraft:all_of", "terms": []});
        let err = condition(&v, &root()).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn unknown_condition_tag_reports_path() {
        let v = json!({"condition": "minecraft:phase_of_moon"});
        let err = condition(&v, &root().field("conditions").index(3)).unwrap_err();
        match err {
            Error::UnknownTag { path, kind, tag } => {
                assert_eq!(path.to_string(), "$.conditions[3]");
                assert_eq!(kind, "condition");
                assert_eq!(tag, "minecraft:phase_of_moon");
            }
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn entity_scores_is_unsupported() {
        let v = json!({"condition": "minecraft:entity_scores", "entity": "this"});
        let err = condition(&v, &root()).unwrap_err();
        assert!(matches!(
            err,
            Error::Unsupported { feature: "entity-score conditions", .. }
        ));
    }

    #[test]
    fn location_check_offset_presence() {
        let none = condition(&json!({"condition": "minecraft:location_check"}), &root()).unwrap();
        assert_eq!(
            none,
            Condition::LocationCheck {
                predicate: Default::default(),
                offset: None
            }
        );

        let some = condition(
            &json!({"condition": "minecraft:location_check", "offsetY": 2}),
            &root(),
        )
        .unwrap();
        match some {
            Condition::LocationCheck { offset, .. } => assert_eq!(offset, Some([0, 2, 0])),
            other => panic!("expected LocationCheck, got {other:?}"),
        }
    }

    #[test]
    fn value_check_fields() {
        let v = json!({
            "condition": "minecraft:value_check",
            "value": {"min": 1, "max": 5},
            "range": 3
        });
        match condition(&v, &root()).unwrap() {
            Condition::ValueCheck { value, range } => {
                assert!(matches!(value, NumberProvider::Uniform { .. }));
                assert_eq!(range, crate::ast::BoundedIntRange::Exact(3));
            }
            other => panic!("expected ValueCheck, got {other:?}"),
        }
    }
}
