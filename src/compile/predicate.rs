//! Predicate builders: location, item, entity, damage source.
//!
//! Each translator emits one `<X>Predicate.Builder.create()` chain with one
//! call per present sub-field, always in schema order (never JSON key order),
//! so identical inputs always produce identical text.

use crate::ast::{DamageSourcePredicate, EntityPredicate, Equipment, IdOrTag, IdSet,
                 ItemPredicate, LocationPredicate};
use crate::compile::provider::{double_range, double_range_or_any, int_range, int_range_or_any};
use crate::java::{identifier, registry_get, registry_key, str_lit, tag_key};

pub fn location(p: &LocationPredicate) -> String {
    let mut out = String::from("LocationPredicate.Builder.create()");

    if let Some(pos) = &p.position {
        for (method, axis) in [(".x", pos.x), (".y", pos.y), (".z", pos.z)] {
            if let Some(range) = axis {
                out.push_str(&format!("{method}({})", double_range(&range)));
            }
        }
    }
    if let Some(biomes) = &p.biomes {
        out.push_str(&format!(".biomes({})", keyed_list("BIOME", biomes)));
    }
    if let Some(structures) = &p.structures {
        out.push_str(&format!(
            ".structures({})",
            keyed_list("STRUCTURE", structures)
        ));
    }
    if let Some(dimension) = &p.dimension {
        out.push_str(&format!(
            ".dimension({})",
            registry_key("WORLD", dimension)
        ));
    }
    if let Some(light) = &p.light {
        out.push_str(&format!(
            ".light(LightPredicate.Builder.create().light({}))",
            int_range(light)
        ));
    }
    if let Some(smokey) = p.smokey {
        out.push_str(&format!(".smokey({smokey})"));
    }
    if let Some(can_see_sky) = p.can_see_sky {
        out.push_str(&format!(".canSeeSky({can_see_sky})"));
    }
    if let Some(block) = &p.block {
        out.push_str(&format!(
            ".block(BlockPredicate.Builder.create(){})",
            match block {
                IdOrTag::Id(id) => format!(".blocks({})", registry_get("BLOCK", id)),
                IdOrTag::Tag(tag) => format!(".tag({})", tag_key("BLOCK", tag)),
            }
        ));
    }
    if let Some(fluid) = &p.fluid {
        out.push_str(&format!(
            ".fluid(FluidPredicate.Builder.create(){})",
            match fluid {
                IdOrTag::Id(id) => format!(".fluid({})", registry_get("FLUID", id)),
                IdOrTag::Tag(tag) => format!(".tag({})", tag_key("FLUID", tag)),
            }
        ));
    }
    out
}

pub fn item(p: &ItemPredicate) -> String {
    let mut out = String::from("ItemPredicate.Builder.create()");

    if let Some(items) = &p.items {
        match items {
            IdSet::Ids(ids) => {
                let ids = ids
                    .iter()
                    .map(|id| registry_get("ITEM", id))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(".items({ids})"));
            }
            IdSet::Tag(tag) => {
                out.push_str(&format!(".tag({})", tag_key("ITEM", tag)));
            }
        }
    }
    if let Some(count) = &p.count {
        out.push_str(&format!(".count({})", int_range(count)));
    }
    out
}

pub fn entity(p: &EntityPredicate) -> String {
    let mut out = String::from("EntityPredicate.Builder.create()");

    if let Some(type_) = &p.type_ {
        out.push_str(&format!(
            ".type({})",
            match type_ {
                IdOrTag::Id(id) => registry_get("ENTITY_TYPE", id),
                IdOrTag::Tag(tag) => tag_key("ENTITY_TYPE", tag),
            }
        ));
    }
    if let Some(team) = &p.team {
        out.push_str(&format!(".team({})", str_lit(team)));
    }
    if let Some(loc) = &p.location {
        out.push_str(&format!(".location({})", location(loc)));
    }
    if let Some(loc) = &p.movement_affected_by {
        out.push_str(&format!(".movementAffectedBy({})", location(loc)));
    }
    if let Some(loc) = &p.stepping_on {
        out.push_str(&format!(".steppingOn({})", location(loc)));
    }
    if let Some(mv) = &p.movement {
        // Positional constructor; absent axes are the ANY sentinel.
        let axes = [
            mv.x,
            mv.y,
            mv.z,
            mv.speed,
            mv.horizontal_speed,
            mv.vertical_speed,
            mv.fall_distance,
        ]
        .iter()
        .map(|a| double_range_or_any(a.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
        out.push_str(&format!(".movement(new MovementPredicate({axes}))"));
    }
    if let Some(d) = &p.distance {
        let axes = [d.x, d.y, d.z, d.horizontal, d.absolute]
            .iter()
            .map(|a| double_range_or_any(a.as_ref()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(".distance(new DistancePredicate({axes}))"));
    }
    if let Some(f) = &p.flags {
        let mut flags = String::from("EntityFlagsPredicate.Builder.create()");
        for (method, value) in [
            (".onGround", f.on_ground),
            (".onFire", f.on_fire),
            (".sneaking", f.sneaking),
            (".sprinting", f.sprinting),
            (".swimming", f.swimming),
            (".flying", f.flying),
            (".isBaby", f.baby),
        ] {
            if let Some(value) = value {
                flags.push_str(&format!("{method}({value})"));
            }
        }
        out.push_str(&format!(".flags({flags})"));
    }
    if let Some(eq) = &p.equipment {
        out.push_str(&format!(".equipment({})", equipment(eq)));
    }
    if let Some(tick) = p.periodic_tick {
        out.push_str(&format!(".periodicTick({tick})"));
    }
    if let Some(v) = &p.vehicle {
        out.push_str(&format!(".vehicle({})", entity(v)));
    }
    if let Some(v) = &p.passenger {
        out.push_str(&format!(".passenger({})", entity(v)));
    }
    if let Some(v) = &p.targeted_entity {
        out.push_str(&format!(".targetedEntity({})", entity(v)));
    }
    if let Some(effects) = &p.effects {
        for (id, e) in effects {
            let opt = |b: Option<bool>| match b {
                Some(b) => format!("Optional.of({b})"),
                None => "Optional.empty()".to_string(),
            };
            out.push_str(&format!(
                ".effect(Registries.STATUS_EFFECT.getEntry({}).orElseThrow(), \
                 new EntityEffectPredicate.EffectData({}, {}, {}, {}))",
                identifier(id),
                int_range_or_any(e.amplifier.as_ref()),
                int_range_or_any(e.duration.as_ref()),
                opt(e.ambient),
                opt(e.visible),
            ));
        }
    }
    out
}

fn equipment(eq: &Equipment) -> String {
    let mut out = String::from("EntityEquipmentPredicate.Builder.create()");
    for (method, slot) in [
        (".head", &eq.head),
        (".chest", &eq.chest),
        (".legs", &eq.legs),
        (".feet", &eq.feet),
        (".body", &eq.body),
        (".mainhand", &eq.mainhand),
        (".offhand", &eq.offhand),
    ] {
        if let Some(slot) = slot {
            out.push_str(&format!("{method}({})", item(slot)));
        }
    }
    out
}

pub fn damage_source(p: &DamageSourcePredicate) -> String {
    let mut out = String::from("DamageSourcePredicate.Builder.create()");

    for (id, expected) in &p.tags {
        let ctor = if *expected { "expected" } else { "unexpected" };
        out.push_str(&format!(
            ".tag(TagPredicate.{ctor}({}))",
            tag_key("DAMAGE_TYPE", id)
        ));
    }
    if let Some(e) = &p.source_entity {
        out.push_str(&format!(".sourceEntity({})", entity(e)));
    }
    if let Some(e) = &p.direct_entity {
        out.push_str(&format!(".directEntity({})", entity(e)));
    }
    if let Some(d) = p.is_direct {
        out.push_str(&format!(".isDirect({d})"));
    }
    out
}

/// One `RegistryKey.of(...)` per id, comma-joined.
fn keyed_list(registry_key_name: &str, ids: &[String]) -> String {
    ids.iter()
        .map(|id| registry_key(registry_key_name, id))
        .collect::<Vec<_>>()
        .join(", ")
}
