//! Number providers, enchantment-level values, and ranges.
//!
//! Dispatch order everywhere: bare literal first, then the `type` tag, then
//! the untagged `{min,max}` sugar. Anything left over is a shape error, never
//! a silent no-op.

use serde_json::Value;

use crate::ast::{BoundedIntRange, DoubleRange, EnchantmentLevelValue, EntityTarget, IntRange,
                 NumberProvider};
use crate::decode::{int, is_plain_int, list, local_tag, num, obj, req, string};
use crate::error::{Error, NodePath, Result};

/// Decode a `NumberProvider`.
pub fn number(v: &Value, path: &NodePath) -> Result<NumberProvider> {
    // Bare literal is sugar for Constant.
    if let Some(n) = v.as_f64() {
        return Ok(NumberProvider::Constant(n));
    }

    let m = obj(v, path, "a number or number-provider object")?;

    if let Some(tag) = m.get("type") {
        let tag = string(tag, &path.field("type"))?;
        return match local_tag(tag) {
            "constant" => Ok(NumberProvider::Constant(num(
                req(m, "value", path)?,
                &path.field("value"),
            )?)),
            "uniform" => Ok(NumberProvider::Uniform {
                min: Box::new(number(req(m, "min", path)?, &path.field("min"))?),
                max: Box::new(number(req(m, "max", path)?, &path.field("max"))?),
            }),
            "binomial" => Ok(NumberProvider::Binomial {
                n: Box::new(number(req(m, "n", path)?, &path.field("n"))?),
                p: Box::new(number(req(m, "p", path)?, &path.field("p"))?),
            }),
            "score" => {
                let target = entity_target(req(m, "target", path)?, &path.field("target"))?;
                let score = string(req(m, "score", path)?, &path.field("score"))?.to_string();
                let scale = m
                    .get("scale")
                    .map(|s| num(s, &path.field("scale")))
                    .transpose()?;
                Ok(NumberProvider::Score {
                    target,
                    score,
                    scale,
                })
            }
            "enchantment_level" => Ok(NumberProvider::EnchantmentLevel(enchantment_level(
                req(m, "amount", path)?,
                &path.field("amount"),
            )?)),
            "storage" => Err(Error::Unsupported {
                path: path.clone(),
                feature: "storage-backed number providers",
            }),
            _ => Err(Error::UnknownTag {
                path: path.clone(),
                kind: "number provider",
                tag: tag.to_string(),
            }),
        };
    }

    // Untagged {min,max} is sugar for Uniform. One-sided objects are rejected
    // rather than guessed at.
    match (m.get("min"), m.get("max")) {
        (Some(min), Some(max)) => Ok(NumberProvider::Uniform {
            min: Box::new(number(min, &path.field("min"))?),
            max: Box::new(number(max, &path.field("max"))?),
        }),
        (None, None) => Err(Error::Shape {
            path: path.clone(),
            expected: "a number, a tagged provider, or a {min,max} pair",
        }),
        _ => Err(Error::Shape {
            path: path.clone(),
            expected: "both `min` and `max` on an untagged uniform provider",
        }),
    }
}

/// Score target: a named context target, or a fixed score holder object.
pub fn entity_target(v: &Value, path: &NodePath) -> Result<EntityTarget> {
    if let Some(s) = v.as_str() {
        return Ok(EntityTarget::Named(s.to_string()));
    }
    let m = obj(v, path, "a target name or target object")?;
    let tag = string(req(m, "type", path)?, &path.field("type"))?;
    match local_tag(tag) {
        "fixed" => Ok(EntityTarget::Fixed(
            string(req(m, "name", path)?, &path.field("name"))?.to_string(),
        )),
        "context" => Ok(EntityTarget::Named(
            string(req(m, "target", path)?, &path.field("target"))?.to_string(),
        )),
        _ => Err(Error::UnknownTag {
            path: path.clone(),
            kind: "score target",
            tag: tag.to_string(),
        }),
    }
}

/// Decode an `EnchantmentLevelBasedValue` amount.
pub fn enchantment_level(v: &Value, path: &NodePath) -> Result<EnchantmentLevelValue> {
    if let Some(n) = v.as_f64() {
        return Ok(EnchantmentLevelValue::Constant(n));
    }

    let m = obj(v, path, "a number or enchantment-level-value object")?;
    let tag = string(req(m, "type", path)?, &path.field("type"))?;
    match local_tag(tag) {
        "constant" => Ok(EnchantmentLevelValue::Constant(num(
            req(m, "value", path)?,
            &path.field("value"),
        )?)),
        "clamped" => Ok(EnchantmentLevelValue::Clamped {
            value: Box::new(enchantment_level(
                req(m, "value", path)?,
                &path.field("value"),
            )?),
            min: num(req(m, "min", path)?, &path.field("min"))?,
            max: num(req(m, "max", path)?, &path.field("max"))?,
        }),
        "fraction" => Ok(EnchantmentLevelValue::Fraction {
            numerator: Box::new(enchantment_level(
                req(m, "numerator", path)?,
                &path.field("numerator"),
            )?),
            denominator: Box::new(enchantment_level(
                req(m, "denominator", path)?,
                &path.field("denominator"),
            )?),
        }),
        "levels_squared" => Ok(EnchantmentLevelValue::LevelsSquared {
            added: num(req(m, "added", path)?, &path.field("added"))?,
        }),
        "linear" => Ok(EnchantmentLevelValue::Linear {
            base: num(req(m, "base", path)?, &path.field("base"))?,
            per_level_above_first: num(
                req(m, "per_level_above_first", path)?,
                &path.field("per_level_above_first"),
            )?,
        }),
        "lookup" => {
            let values_path = path.field("values");
            let raw = list(req(m, "values", path)?, &values_path, "an array of numbers")?;
            if raw.is_empty() {
                return Err(Error::Shape {
                    path: values_path,
                    expected: "at least one lookup value",
                });
            }
            let mut values = Vec::with_capacity(raw.len());
            for (i, x) in raw.iter().enumerate() {
                values.push(num(x, &values_path.index(i))?);
            }
            Ok(EnchantmentLevelValue::Lookup {
                values,
                fallback: Box::new(enchantment_level(
                    req(m, "fallback", path)?,
                    &path.field("fallback"),
                )?),
            })
        }
        _ => Err(Error::UnknownTag {
            path: path.clone(),
            kind: "enchantment level value",
            tag: tag.to_string(),
        }),
    }
}

/// Three-way tie-break: bare integer, all-literal pair, or provider pair.
/// The all-literal pair matters because the target API has a cheaper
/// constructor for it.
pub fn bounded_int_range(v: &Value, path: &NodePath) -> Result<BoundedIntRange> {
    if let Some(n) = v.as_i64() {
        return Ok(BoundedIntRange::Exact(n));
    }

    let m = obj(v, path, "an integer or bounded-range object")?;
    let min = m.get("min");
    let max = m.get("max");

    if let (Some(a), Some(b)) = (min, max) {
        if is_plain_int(a) && is_plain_int(b) {
            return Ok(BoundedIntRange::Literal {
                min: int(a, &path.field("min"))?,
                max: int(b, &path.field("max"))?,
            });
        }
    }

    Ok(BoundedIntRange::Provider {
        min: min
            .map(|a| number(a, &path.field("min")).map(Box::new))
            .transpose()?,
        max: max
            .map(|b| number(b, &path.field("max")).map(Box::new))
            .transpose()?,
    })
}

/// Exact-vs-between keyed only on whether the value is a bare number.
pub fn int_range(v: &Value, path: &NodePath) -> Result<IntRange> {
    if let Some(n) = v.as_i64() {
        return Ok(IntRange::Exact(n));
    }
    let m = obj(v, path, "an integer or {min,max} object")?;
    Ok(IntRange::Between {
        min: int(req(m, "min", path)?, &path.field("min"))?,
        max: int(req(m, "max", path)?, &path.field("max"))?,
    })
}

pub fn double_range(v: &Value, path: &NodePath) -> Result<DoubleRange> {
    if let Some(n) = v.as_f64() {
        return Ok(DoubleRange::Exact(n));
    }
    let m = obj(v, path, "a number or {min,max} object")?;
    Ok(DoubleRange::Between {
        min: num(req(m, "min", path)?, &path.field("min"))?,
        max: num(req(m, "max", path)?, &path.field("max"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root() -> NodePath {
        NodePath::root()
    }

    #[test]
    fn bare_number_is_constant() {
        let p = number(&json!(4), &root()).unwrap();
        assert_eq!(p, NumberProvider::Constant(4.0));
    }

    #[test]
    fn untagged_min_max_equals_explicit_uniform() {
        let sugar = number(&json!({"min": 1, "max": 3}), &root()).unwrap();
        let tagged = number(
            &json!({"type": "minecraft:uniform", "min": 1, "max": 3}),
            &root(),
        )
        .unwrap();
        assert_eq!(sugar, tagged);
        assert_eq!(
            sugar,
            NumberProvider::Uniform {
                min: Box::new(NumberProvider::Constant(1.0)),
                max: Box::new(NumberProvider::Constant(3.0)),
            }
        );
    }

    #[test]
    fn one_sided_untagged_object_is_rejected() {
        let err = number(&json!({"min": 1}), &root()).unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn storage_provider_is_unsupported() {
        let err = number(&json!({"type": "minecraft:storage"}), &root()).unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
    }

    #[test]
    fn unknown_provider_tag_is_reported() {
        let err = number(&json!({"type": "minecraft:dice"}), &root()).unwrap_err();
        match err {
            Error::UnknownTag { tag, kind, .. } => {
                assert_eq!(tag, "minecraft:dice");
                assert_eq!(kind, "number provider");
            }
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn score_target_forms() {
        let named = entity_target(&json!("this"), &root()).unwrap();
        assert_eq!(named, EntityTarget::Named("this".to_string()));

        let fixed =
            entity_target(&json!({"type": "minecraft:fixed", "name": "Bob"}), &root()).unwrap();
        assert_eq!(fixed, EntityTarget::Fixed("Bob".to_string()));

        let ctx = entity_target(
            &json!({"type": "minecraft:context", "target": "attacker"}),
            &root(),
        )
        .unwrap();
        assert_eq!(ctx, EntityTarget::Named("attacker".to_string()));
    }

    #[test]
    fn lookup_needs_at_least_one_value() {
        let err = enchantment_level(
            &json!({"type": "minecraft:lookup", "values": [], "fallback": 1}),
            &root(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Shape { .. }));
    }

    #[test]
    fn bounded_range_tie_break() {
        // literal pair iff both bounds are plain integers
        let lit = bounded_int_range(&json!({"min": 1, "max": 5}), &root()).unwrap();
        assert_eq!(lit, BoundedIntRange::Literal { min: 1, max: 5 });

        let exact = bounded_int_range(&json!(7), &root()).unwrap();
        assert_eq!(exact, BoundedIntRange::Exact(7));

        let slow = bounded_int_range(
            &json!({"min": {"type": "minecraft:constant", "value": 1}, "max": 5}),
            &root(),
        )
        .unwrap();
        match slow {
            BoundedIntRange::Provider { min, max } => {
                assert_eq!(*min.unwrap(), NumberProvider::Constant(1.0));
                assert_eq!(*max.unwrap(), NumberProvider::Constant(5.0));
            }
            other => panic!("expected provider pair, got {other:?}"),
        }

        // absent bound survives as None
        let open = bounded_int_range(&json!({"min": 3.5}), &root()).unwrap();
        assert!(matches!(
            open,
            BoundedIntRange::Provider { min: Some(_), max: None }
        ));
    }
}
