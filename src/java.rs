//! Target-language plumbing: numeric literal conventions and the registry
//! access idiom of Fabric 1.21 (Yarn mappings).
//!
//! Every identifier that reaches emitted code goes through exactly one of the
//! wrappers below, so a list of ids renders as the same wrapper repeated,
//! comma-joined.

/// Java float literal: `4F`, `0.5F`. Integral values drop the fraction, which
/// keeps round-tripped constants readable in the generated code.
pub fn float_lit(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{}F", v as i64)
    } else {
        format!("{v}F")
    }
}

/// Java double literal: always carries a decimal point (`4.0`, `0.5`).
pub fn double_lit(v: f64) -> String {
    if v.fract() == 0.0 && v.is_finite() {
        format!("{}.0", v as i64)
    } else {
        format!("{v}")
    }
}

pub fn str_lit(s: &str) -> String {
    format!("\"{}\"", s.escape_default())
}

pub fn identifier(id: &str) -> String {
    format!("Identifier.of({})", str_lit(id))
}

/// Direct-registry lookup: `Registries.ITEM.get(Identifier.of("..."))`.
pub fn registry_get(registry: &str, id: &str) -> String {
    format!("Registries.{registry}.get({})", identifier(id))
}

/// Tag reference: `TagKey.of(RegistryKeys.ITEM, Identifier.of("..."))`.
pub fn tag_key(registry_key: &str, id: &str) -> String {
    format!("TagKey.of(RegistryKeys.{registry_key}, {})", identifier(id))
}

/// Key-typed registry reference (biomes, structures, dimensions, loot tables,
/// predicates, enchantments): `RegistryKey.of(RegistryKeys.BIOME, ...)`.
pub fn registry_key(registry_key: &str, id: &str) -> String {
    format!(
        "RegistryKey.of(RegistryKeys.{registry_key}, {})",
        identifier(id)
    )
}

/// Enchantment reference, resolved through the `registries` lookup that the
/// Fabric loot-modify callback puts in scope at the splice site.
pub fn enchantment_entry(id: &str) -> String {
    format!(
        "registries.getOrThrow(RegistryKeys.ENCHANTMENT).getOrThrow({})",
        registry_key("ENCHANTMENT", id)
    )
}
