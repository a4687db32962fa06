//! End-to-end: JSON source text in, guarded Java line list out.

use loot2java::ast::Mode;
use loot2java::compile_document;
use loot2java::error::Error;

#[test]
fn merge_emits_add_pool_statements() {
    let source = r#"{
        "pools": [
            {
                "rolls": 1,
                "conditions": [
                    {"condition": "minecraft:random_chance", "chance": 0.5}
                ]
            }
        ]
    }"#;

    let lines = compile_document(source, "gameplay/sniffer_digging", Mode::Merge).unwrap();
    assert_eq!(
        lines,
        vec![
            "if (key == RegistryKey.of(RegistryKeys.LOOT_TABLE, \
             Identifier.of(\"gameplay/sniffer_digging\"))) {",
            "\tLootPool.Builder lootPool = LootPool.builder()",
            "\t\t.rolls(ConstantLootNumberProvider.create(1F))",
            "\t\t.conditionally(RandomChanceLootCondition.builder(0.5F));",
            "\ttableBuilder.pool(lootPool);",
            "}",
        ]
    );
}

#[test]
fn replace_emits_return_statement_for_same_pool() {
    let source = r#"{
        "pools": [
            {
                "rolls": 1,
                "conditions": [
                    {"condition": "minecraft:random_chance", "chance": 0.5}
                ]
            }
        ]
    }"#;

    let merged = compile_document(source, "gameplay/fishing", Mode::Merge).unwrap();
    let replaced = compile_document(source, "gameplay/fishing", Mode::Replace).unwrap();

    // same assembled pool, different closing statement
    assert_eq!(merged[1..4], replaced[1..4]);
    assert_eq!(
        replaced[4],
        "\treturn mergePools(original, lootPool.build());"
    );
}

#[test]
fn sniffer_digging_style_table_compiles() {
    // shaped like a real datapack table: uniform roll sugar, bonus rolls,
    // nested combinator conditions
    let source = r##"{
        "pools": [
            {
                "rolls": {"min": 1, "max": 3},
                "bonus_rolls": {"type": "minecraft:binomial", "n": 2, "p": 0.25},
                "conditions": [
                    {
                        "condition": "minecraft:any_of",
                        "terms": [
                            {"condition": "minecraft:survives_explosion"},
                            {
                                "condition": "minecraft:inverted",
                                "term": {"condition": "minecraft:killed_by_player"}
                            }
                        ]
                    },
                    {
                        "condition": "minecraft:match_tool",
                        "predicate": {"items": "#minecraft:shovels", "count": {"min": 1, "max": 64}}
                    }
                ]
            },
            {"rolls": 1}
        ]
    }"##;

    let lines = compile_document(source, "gameplay/sniffer_digging", Mode::Merge).unwrap();
    let text = lines.join("\n");

    assert!(text.contains(
        ".rolls(new UniformLootNumberProvider(ConstantLootNumberProvider.create(1F), \
         ConstantLootNumberProvider.create(3F)))"
    ));
    assert!(text.contains(
        ".bonusRolls(new BinomialLootNumberProvider(ConstantLootNumberProvider.create(2F), \
         ConstantLootNumberProvider.create(0.25F)))"
    ));
    assert!(text.contains(
        "AnyOfLootCondition.builder(SurvivesExplosionLootCondition.builder(), \
         InvertedLootCondition.builder(KilledByPlayerLootCondition.builder()))"
    ));
    assert!(text.contains(
        "MatchToolLootCondition.builder(ItemPredicate.Builder.create()\
         .tag(TagKey.of(RegistryKeys.ITEM, Identifier.of(\"minecraft:shovels\")))\
         .count(NumberRange.IntRange.between(1, 64)))"
    ));
    // both pools land in the table
    assert_eq!(text.matches("tableBuilder.pool(lootPool);").count(), 2);
}

#[test]
fn invalid_json_is_a_decode_error() {
    let err = compile_document("{ not json", "blocks/stone", Mode::Merge).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn unknown_condition_tag_fails_with_its_path() {
    let source = r#"{
        "pools": [
            {"rolls": 1, "conditions": [{"condition": "minecraft:phase_of_moon"}]}
        ]
    }"#;
    let err = compile_document(source, "blocks/stone", Mode::Merge).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("$.pools[0].conditions[0]"), "{msg}");
    assert!(msg.contains("minecraft:phase_of_moon"), "{msg}");
}

#[test]
fn replace_mode_on_pool_less_table_is_explicit() {
    let err = compile_document(r#"{"pools": []}"#, "blocks/stone", Mode::Replace).unwrap_err();
    assert!(matches!(err, Error::EmptyTable));
}

#[test]
fn functions_surface_as_unsupported_not_truncated_output() {
    let source = r#"{
        "pools": [
            {"rolls": 1, "functions": [{"function": "minecraft:set_count"}]}
        ]
    }"#;
    let err = compile_document(source, "blocks/stone", Mode::Merge).unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
}
