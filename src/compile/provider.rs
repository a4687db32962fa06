//! Leaf translators: number providers, enchantment-level values, ranges.
//!
//! Pure AST → Java expression text; nothing here can fail, every variant was
//! validated at decode.

use crate::ast::{BoundedIntRange, DoubleRange, EnchantmentLevelValue, EntityTarget, IntRange,
                 NumberProvider};
use crate::java::{double_lit, float_lit, str_lit};

pub fn number(p: &NumberProvider) -> String {
    match p {
        NumberProvider::Constant(v) => {
            format!("ConstantLootNumberProvider.create({})", float_lit(*v))
        }
        NumberProvider::Uniform { min, max } => {
            format!(
                "new UniformLootNumberProvider({}, {})",
                number(min),
                number(max)
            )
        }
        NumberProvider::Binomial { n, p } => {
            format!(
                "new BinomialLootNumberProvider({}, {})",
                number(n),
                number(p)
            )
        }
        NumberProvider::Score {
            target,
            score,
            scale,
        } => {
            let mut out = format!(
                "ScoreLootNumberProvider.create({}, {}",
                entity_target(target),
                str_lit(score)
            );
            if let Some(scale) = scale {
                out.push_str(", ");
                out.push_str(&float_lit(*scale));
            }
            out.push(')');
            out
        }
        NumberProvider::EnchantmentLevel(amount) => {
            format!(
                "new EnchantmentLevelLootNumberProvider({})",
                enchantment_level(amount)
            )
        }
    }
}

/// Named targets map onto the `LootContext.EntityTarget` constants; fixed
/// holders go through `fromString`.
pub fn entity_target(t: &EntityTarget) -> String {
    match t {
        EntityTarget::Named(name) => {
            format!("LootContext.EntityTarget.{}", name.to_uppercase())
        }
        EntityTarget::Fixed(name) => {
            format!("LootContext.EntityTarget.fromString({})", str_lit(name))
        }
    }
}

pub fn enchantment_level(v: &EnchantmentLevelValue) -> String {
    match v {
        EnchantmentLevelValue::Constant(value) => {
            format!("new EnchantmentLevelBasedValue.Constant({})", float_lit(*value))
        }
        EnchantmentLevelValue::Clamped { value, min, max } => {
            format!(
                "new EnchantmentLevelBasedValue.Clamped({}, {}, {})",
                enchantment_level(value),
                float_lit(*min),
                float_lit(*max)
            )
        }
        EnchantmentLevelValue::Fraction {
            numerator,
            denominator,
        } => {
            format!(
                "new EnchantmentLevelBasedValue.Fraction({}, {})",
                enchantment_level(numerator),
                enchantment_level(denominator)
            )
        }
        EnchantmentLevelValue::LevelsSquared { added } => {
            format!(
                "new EnchantmentLevelBasedValue.LevelsSquared({})",
                float_lit(*added)
            )
        }
        EnchantmentLevelValue::Linear {
            base,
            per_level_above_first,
        } => {
            format!(
                "new EnchantmentLevelBasedValue.Linear({}, {})",
                float_lit(*base),
                float_lit(*per_level_above_first)
            )
        }
        EnchantmentLevelValue::Lookup { values, fallback } => {
            let values = values
                .iter()
                .map(|v| float_lit(*v))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "new EnchantmentLevelBasedValue.Lookup(Arrays.asList({}), {})",
                values,
                enchantment_level(fallback)
            )
        }
    }
}

/// The all-literal paths use the cheap `create` overloads; the provider pair
/// falls back to the full constructor with `null` for open bounds.
pub fn bounded_int_range(r: &BoundedIntRange) -> String {
    match r {
        BoundedIntRange::Exact(n) => format!("BoundedIntUnaryOperator.create({n})"),
        BoundedIntRange::Literal { min, max } => {
            format!("BoundedIntUnaryOperator.create({min}, {max})")
        }
        BoundedIntRange::Provider { min, max } => {
            let bound = |b: &Option<Box<NumberProvider>>| match b {
                Some(p) => number(p),
                None => "null".to_string(),
            };
            format!(
                "new BoundedIntUnaryOperator({}, {})",
                bound(min),
                bound(max)
            )
        }
    }
}

pub fn int_range(r: &IntRange) -> String {
    match r {
        IntRange::Exact(n) => format!("NumberRange.IntRange.exactly({n})"),
        IntRange::Between { min, max } => {
            format!("NumberRange.IntRange.between({min}, {max})")
        }
    }
}

pub fn int_range_or_any(r: Option<&IntRange>) -> String {
    match r {
        Some(r) => int_range(r),
        None => "NumberRange.IntRange.ANY".to_string(),
    }
}

pub fn double_range(r: &DoubleRange) -> String {
    match r {
        DoubleRange::Exact(n) => {
            format!("NumberRange.DoubleRange.exactly({})", double_lit(*n))
        }
        DoubleRange::Between { min, max } => {
            format!(
                "NumberRange.DoubleRange.between({}, {})",
                double_lit(*min),
                double_lit(*max)
            )
        }
    }
}

pub fn double_range_or_any(r: Option<&DoubleRange>) -> String {
    match r {
        Some(r) => double_range(r),
        None => "NumberRange.DoubleRange.ANY".to_string(),
    }
}
