//! Structured predicates: location, item, entity, damage source.
//!
//! Entity predicates recurse into location/item predicates and into
//! themselves (vehicle, passenger, targeted entity), so everything lives in
//! one module.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::ast::{DamageSourcePredicate, DistanceRanges, DoubleRange, EffectPredicate,
                 EntityFlags, EntityPredicate, Equipment, IdOrTag, IdSet, ItemPredicate,
                 LocationPredicate, MovementRanges, PositionRanges};
use crate::decode::provider::{double_range, int_range};
use crate::decode::{boolean, int, list, obj, req, string};
use crate::error::{Error, NodePath, Result};

// ————————————————————————————————————————————————————————————————————————————
// LOCATION
// ————————————————————————————————————————————————————————————————————————————

pub fn location(v: &Value, path: &NodePath) -> Result<LocationPredicate> {
    let m = obj(v, path, "a location predicate object")?;
    let mut out = LocationPredicate::default();

    if let Some(pos) = m.get("position") {
        let pos_path = path.field("position");
        let pm = obj(pos, &pos_path, "a position object")?;
        out.position = Some(PositionRanges {
            x: opt_double_range(pm, "x", &pos_path)?,
            y: opt_double_range(pm, "y", &pos_path)?,
            z: opt_double_range(pm, "z", &pos_path)?,
        });
    }
    if let Some(b) = m.get("biomes") {
        out.biomes = Some(id_list(b, &path.field("biomes"))?);
    }
    if let Some(s) = m.get("structures") {
        out.structures = Some(id_list(s, &path.field("structures"))?);
    }
    if let Some(d) = m.get("dimension") {
        out.dimension = Some(string(d, &path.field("dimension"))?.to_string());
    }
    if let Some(l) = m.get("light") {
        let light_path = path.field("light");
        let lm = obj(l, &light_path, "a light predicate object")?;
        out.light = Some(int_range(
            req(lm, "light", &light_path)?,
            &light_path.field("light"),
        )?);
    }
    if let Some(s) = m.get("smokey") {
        out.smokey = Some(boolean(s, &path.field("smokey"))?);
    }
    if let Some(c) = m.get("can_see_sky") {
        out.can_see_sky = Some(boolean(c, &path.field("can_see_sky"))?);
    }
    if let Some(b) = m.get("block") {
        out.block = Some(block_like(b, &path.field("block"), "blocks")?);
    }
    if let Some(f) = m.get("fluid") {
        out.fluid = Some(block_like(f, &path.field("fluid"), "fluids")?);
    }
    Ok(out)
}

/// Block and fluid sub-predicates share a shape: one id-or-tag under a keyed
/// field, plus `state`/`nbt` refinements this compiler does not translate.
fn block_like(v: &Value, path: &NodePath, key: &'static str) -> Result<IdOrTag> {
    let m = obj(v, path, "a block/fluid predicate object")?;
    if m.contains_key("state") {
        return Err(Error::Unsupported {
            path: path.field("state"),
            feature: "block/fluid state sub-predicates",
        });
    }
    if m.contains_key("nbt") {
        return Err(Error::Unsupported {
            path: path.field("nbt"),
            feature: "NBT sub-predicates",
        });
    }
    id_or_tag(req(m, key, path)?, &path.field(key))
}

// ————————————————————————————————————————————————————————————————————————————
// ITEM
// ————————————————————————————————————————————————————————————————————————————

pub fn item(v: &Value, path: &NodePath) -> Result<ItemPredicate> {
    let m = obj(v, path, "an item predicate object")?;
    for key in ["nbt", "components", "predicates"] {
        if m.contains_key(key) {
            return Err(Error::Unsupported {
                path: path.field(key),
                feature: "NBT/component sub-predicates",
            });
        }
    }
    let mut out = ItemPredicate::default();
    if let Some(items) = m.get("items") {
        out.items = Some(id_set(items, &path.field("items"))?);
    }
    if let Some(count) = m.get("count") {
        out.count = Some(int_range(count, &path.field("count"))?);
    }
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// ENTITY
// ————————————————————————————————————————————————————————————————————————————

pub fn entity(v: &Value, path: &NodePath) -> Result<EntityPredicate> {
    let m = obj(v, path, "an entity predicate object")?;
    if m.contains_key("nbt") {
        return Err(Error::Unsupported {
            path: path.field("nbt"),
            feature: "NBT sub-predicates",
        });
    }
    if m.contains_key("type_specific") {
        return Err(Error::Unsupported {
            path: path.field("type_specific"),
            feature: "type-specific entity sub-predicates",
        });
    }

    let mut out = EntityPredicate::default();

    if let Some(t) = m.get("type") {
        out.type_ = Some(id_or_tag(t, &path.field("type"))?);
    }
    if let Some(t) = m.get("team") {
        out.team = Some(string(t, &path.field("team"))?.to_string());
    }
    if let Some(l) = m.get("location") {
        out.location = Some(Box::new(location(l, &path.field("location"))?));
    }
    if let Some(l) = m.get("movement_affected_by") {
        out.movement_affected_by =
            Some(Box::new(location(l, &path.field("movement_affected_by"))?));
    }
    if let Some(l) = m.get("stepping_on") {
        out.stepping_on = Some(Box::new(location(l, &path.field("stepping_on"))?));
    }
    if let Some(mv) = m.get("movement") {
        let mv_path = path.field("movement");
        let mm = obj(mv, &mv_path, "a movement object")?;
        out.movement = Some(MovementRanges {
            x: opt_double_range(mm, "x", &mv_path)?,
            y: opt_double_range(mm, "y", &mv_path)?,
            z: opt_double_range(mm, "z", &mv_path)?,
            speed: opt_double_range(mm, "speed", &mv_path)?,
            horizontal_speed: opt_double_range(mm, "horizontal_speed", &mv_path)?,
            vertical_speed: opt_double_range(mm, "vertical_speed", &mv_path)?,
            fall_distance: opt_double_range(mm, "fall_distance", &mv_path)?,
        });
    }
    if let Some(d) = m.get("distance") {
        let d_path = path.field("distance");
        let dm = obj(d, &d_path, "a distance object")?;
        out.distance = Some(DistanceRanges {
            x: opt_double_range(dm, "x", &d_path)?,
            y: opt_double_range(dm, "y", &d_path)?,
            z: opt_double_range(dm, "z", &d_path)?,
            horizontal: opt_double_range(dm, "horizontal", &d_path)?,
            absolute: opt_double_range(dm, "absolute", &d_path)?,
        });
    }
    if let Some(f) = m.get("flags") {
        let f_path = path.field("flags");
        let fm = obj(f, &f_path, "a flags object")?;
        out.flags = Some(EntityFlags {
            on_ground: opt_bool(fm, "is_on_ground", &f_path)?,
            on_fire: opt_bool(fm, "is_on_fire", &f_path)?,
            sneaking: opt_bool(fm, "is_sneaking", &f_path)?,
            sprinting: opt_bool(fm, "is_sprinting", &f_path)?,
            swimming: opt_bool(fm, "is_swimming", &f_path)?,
            flying: opt_bool(fm, "is_flying", &f_path)?,
            baby: opt_bool(fm, "is_baby", &f_path)?,
        });
    }
    if let Some(e) = m.get("equipment") {
        let e_path = path.field("equipment");
        let em = obj(e, &e_path, "an equipment object")?;
        out.equipment = Some(Equipment {
            head: opt_item(em, "head", &e_path)?,
            chest: opt_item(em, "chest", &e_path)?,
            legs: opt_item(em, "legs", &e_path)?,
            feet: opt_item(em, "feet", &e_path)?,
            body: opt_item(em, "body", &e_path)?,
            mainhand: opt_item(em, "mainhand", &e_path)?,
            offhand: opt_item(em, "offhand", &e_path)?,
        });
    }
    if let Some(t) = m.get("periodic_tick") {
        out.periodic_tick = Some(int(t, &path.field("periodic_tick"))?);
    }
    if let Some(e) = m.get("vehicle") {
        out.vehicle = Some(Box::new(entity(e, &path.field("vehicle"))?));
    }
    if let Some(e) = m.get("passenger") {
        out.passenger = Some(Box::new(entity(e, &path.field("passenger"))?));
    }
    if let Some(e) = m.get("targeted_entity") {
        out.targeted_entity = Some(Box::new(entity(e, &path.field("targeted_entity"))?));
    }
    if let Some(effects) = m.get("effects") {
        let eff_path = path.field("effects");
        let em = obj(effects, &eff_path, "an effects object")?;
        let mut map = IndexMap::with_capacity(em.len());
        for (id, body) in em {
            map.insert(id.clone(), effect(body, &eff_path.field(id))?);
        }
        out.effects = Some(map);
    }

    Ok(out)
}

fn effect(v: &Value, path: &NodePath) -> Result<EffectPredicate> {
    let m = obj(v, path, "a status-effect predicate object")?;
    Ok(EffectPredicate {
        amplifier: m
            .get("amplifier")
            .map(|a| int_range(a, &path.field("amplifier")))
            .transpose()?,
        duration: m
            .get("duration")
            .map(|d| int_range(d, &path.field("duration")))
            .transpose()?,
        ambient: opt_bool(m, "ambient", path)?,
        visible: opt_bool(m, "visible", path)?,
    })
}

// ————————————————————————————————————————————————————————————————————————————
// DAMAGE SOURCE
// ————————————————————————————————————————————————————————————————————————————

pub fn damage_source(v: &Value, path: &NodePath) -> Result<DamageSourcePredicate> {
    let m = obj(v, path, "a damage-source predicate object")?;
    let mut out = DamageSourcePredicate::default();

    if let Some(tags) = m.get("tags") {
        let tags_path = path.field("tags");
        for (i, t) in list(tags, &tags_path, "an array of tag checks")?.iter().enumerate() {
            let t_path = tags_path.index(i);
            let tm = obj(t, &t_path, "a tag check object")?;
            let id = string(req(tm, "id", &t_path)?, &t_path.field("id"))?.to_string();
            let expected = boolean(req(tm, "expected", &t_path)?, &t_path.field("expected"))?;
            out.tags.push((id, expected));
        }
    }
    if let Some(e) = m.get("source_entity") {
        out.source_entity = Some(Box::new(entity(e, &path.field("source_entity"))?));
    }
    if let Some(e) = m.get("direct_entity") {
        out.direct_entity = Some(Box::new(entity(e, &path.field("direct_entity"))?));
    }
    if let Some(d) = m.get("is_direct") {
        out.is_direct = Some(boolean(d, &path.field("is_direct"))?);
    }
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// SHARED
// ————————————————————————————————————————————————————————————————————————————

/// `#` prefix selects the tag form; the prefix is stripped here, once.
pub fn id_or_tag(v: &Value, path: &NodePath) -> Result<IdOrTag> {
    let s = string(v, path)?;
    Ok(match s.strip_prefix('#') {
        Some(tag) => IdOrTag::Tag(tag.to_string()),
        None => IdOrTag::Id(s.to_string()),
    })
}

/// A single id, a list of ids, or one `#tag`.
pub fn id_set(v: &Value, path: &NodePath) -> Result<IdSet> {
    if let Some(s) = v.as_str() {
        return Ok(match s.strip_prefix('#') {
            Some(tag) => IdSet::Tag(tag.to_string()),
            None => IdSet::Ids(vec![s.to_string()]),
        });
    }
    Ok(IdSet::Ids(id_list(v, path)?))
}

/// A single id or a list of plain ids (no tags inside lists).
fn id_list(v: &Value, path: &NodePath) -> Result<Vec<String>> {
    if let Some(s) = v.as_str() {
        return Ok(vec![s.to_string()]);
    }
    let xs = list(v, path, "an id or an array of ids")?;
    let mut out = Vec::with_capacity(xs.len());
    for (i, x) in xs.iter().enumerate() {
        let item_path = path.index(i);
        let s = string(x, &item_path)?;
        if s.starts_with('#') {
            return Err(Error::Shape {
                path: item_path,
                expected: "a plain id (tags cannot appear inside id lists)",
            });
        }
        out.push(s.to_string());
    }
    Ok(out)
}

fn opt_double_range(
    m: &Map<String, Value>,
    key: &'static str,
    path: &NodePath,
) -> Result<Option<DoubleRange>> {
    m.get(key)
        .map(|v| double_range(v, &path.field(key)))
        .transpose()
}

fn opt_bool(m: &Map<String, Value>, key: &'static str, path: &NodePath) -> Result<Option<bool>> {
    m.get(key)
        .map(|v| boolean(v, &path.field(key)))
        .transpose()
}

fn opt_item(
    m: &Map<String, Value>,
    key: &'static str,
    path: &NodePath,
) -> Result<Option<ItemPredicate>> {
    m.get(key).map(|v| item(v, &path.field(key))).transpose()
}
