//! AST → Java text.
//!
//! Leaf translators return single expressions (`String`); the pool assembler
//! and table emitter return ordered line lists so the caller decides where
//! the text goes. Lines inside the guard are tab-indented one level, builder
//! chains two, matching the splice site.

pub mod condition;
pub mod predicate;
pub mod provider;

use crate::ast::{Mode, Pool, Table};
use crate::error::{Error, Result};
use crate::java::registry_key;

/// Assemble one pool: rolls, bonus rolls, then each condition wrapped
/// individually, in document order, followed by the mode's closing statement.
pub fn pool(p: &Pool, mode: Mode) -> Vec<String> {
    let mut lines = vec!["\tLootPool.Builder lootPool = LootPool.builder()".to_string()];

    lines.push(format!("\t\t.rolls({})", provider::number(&p.rolls)));
    if let Some(bonus) = &p.bonus_rolls {
        lines.push(format!("\t\t.bonusRolls({})", provider::number(bonus)));
    }
    for c in &p.conditions {
        lines.push(format!("\t\t.conditionally({})", condition::condition(c)));
    }

    // close the builder statement on its last chained call
    if let Some(last) = lines.last_mut() {
        last.push(';');
    }

    match mode {
        Mode::Merge => lines.push("\ttableBuilder.pool(lootPool);".to_string()),
        Mode::Replace => {
            lines.push("\treturn mergePools(original, lootPool.build());".to_string())
        }
    }
    lines
}

/// Emit the whole document: a guard keyed on the target table identifier,
/// then every pool (merge) or only the first (replace).
pub fn table(t: &Table, target: &str, mode: Mode) -> Result<Vec<String>> {
    let mut lines = vec![format!(
        "if (key == {}) {{",
        registry_key("LOOT_TABLE", target)
    )];

    match mode {
        Mode::Merge => {
            for (i, p) in t.pools.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(pool(p, mode));
            }
        }
        Mode::Replace => {
            let first = t.pools.first().ok_or(Error::EmptyTable)?;
            lines.extend(pool(first, mode));
        }
    }

    lines.push("}".to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Condition, NumberProvider};

    fn sample_pool() -> Pool {
        Pool {
            rolls: NumberProvider::Constant(1.0),
            bonus_rolls: None,
            conditions: vec![Condition::RandomChance { chance: 0.5 }],
        }
    }

    #[test]
    fn merge_pool_appends_to_table_builder() {
        let lines = pool(&sample_pool(), Mode::Merge);
        assert_eq!(
            lines,
            vec![
                "\tLootPool.Builder lootPool = LootPool.builder()",
                "\t\t.rolls(ConstantLootNumberProvider.create(1F))",
                "\t\t.conditionally(RandomChanceLootCondition.builder(0.5F));",
                "\ttableBuilder.pool(lootPool);",
            ]
        );
    }

    #[test]
    fn replace_pool_returns_merged_table() {
        let lines = pool(&sample_pool(), Mode::Replace);
        assert_eq!(
            lines.last().unwrap(),
            "\treturn mergePools(original, lootPool.build());"
        );
        // same assembled pool as merge mode, different closing statement
        assert_eq!(lines[..lines.len() - 1], pool(&sample_pool(), Mode::Merge)[..3]);
    }

    #[test]
    fn bonus_rolls_come_after_rolls() {
        let p = Pool {
            rolls: NumberProvider::Constant(2.0),
            bonus_rolls: Some(NumberProvider::Constant(1.0)),
            conditions: vec![],
        };
        let lines = pool(&p, Mode::Merge);
        assert_eq!(lines[1], "\t\t.rolls(ConstantLootNumberProvider.create(2F))");
        assert_eq!(
            lines[2],
            "\t\t.bonusRolls(ConstantLootNumberProvider.create(1F));"
        );
    }

    #[test]
    fn merge_emits_every_pool_in_document_order() {
        let t = Table {
            pools: vec![sample_pool(), sample_pool()],
        };
        let lines = table(&t, "gameplay/sniffer_digging", Mode::Merge).unwrap();
        assert_eq!(
            lines[0],
            "if (key == RegistryKey.of(RegistryKeys.LOOT_TABLE, \
             Identifier.of(\"gameplay/sniffer_digging\"))) {"
        );
        assert_eq!(lines.last().unwrap(), "}");
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.contains("tableBuilder.pool"))
                .count(),
            2
        );
    }

    #[test]
    fn replace_compiles_only_the_first_pool() {
        let mut second = sample_pool();
        second.rolls = NumberProvider::Constant(9.0);
        let t = Table {
            pools: vec![sample_pool(), second],
        };
        let lines = table(&t, "blocks/stone", Mode::Replace).unwrap();
        assert!(lines.iter().any(|l| l.contains("create(1F)")));
        assert!(!lines.iter().any(|l| l.contains("create(9F)")));
        assert!(lines.iter().any(|l| l.contains("return mergePools")));
    }

    #[test]
    fn replace_on_empty_table_is_an_error() {
        let t = Table { pools: vec![] };
        let err = table(&t, "blocks/stone", Mode::Replace).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }
}
