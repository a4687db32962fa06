// Strongly-typed loot-table model. No serde_json::Value past this point.

use indexmap::IndexMap;

/// How to produce a number at loot-evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberProvider {
    Constant(f64),
    Uniform {
        min: Box<NumberProvider>,
        max: Box<NumberProvider>,
    },
    Binomial {
        n: Box<NumberProvider>,
        p: Box<NumberProvider>,
    },
    Score {
        target: EntityTarget,
        score: String,
        scale: Option<f64>,
    },
    EnchantmentLevel(EnchantmentLevelValue),
}

/// Scoreboard lookup subject: a named context target (`this`, `attacker`, ...)
/// or a fixed score holder.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityTarget {
    Named(String),
    Fixed(String),
}

/// `EnchantmentLevelBasedValue` amount shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum EnchantmentLevelValue {
    Constant(f64),
    Clamped {
        value: Box<EnchantmentLevelValue>,
        min: f64,
        max: f64,
    },
    Fraction {
        numerator: Box<EnchantmentLevelValue>,
        denominator: Box<EnchantmentLevelValue>,
    },
    LevelsSquared {
        added: f64,
    },
    Linear {
        base: f64,
        per_level_above_first: f64,
    },
    Lookup {
        values: Vec<f64>, // non-empty, checked at decode
        fallback: Box<EnchantmentLevelValue>,
    },
}

/// Bounded int operator input. `Literal` exists because the target API has a
/// cheaper constructor when both bounds are plain integers.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundedIntRange {
    Exact(i64),
    Literal {
        min: i64,
        max: i64,
    },
    Provider {
        min: Option<Box<NumberProvider>>, // absent bound -> null
        max: Option<Box<NumberProvider>>,
    },
}

/// Inclusive integer interval. "Or any" is `Option<IntRange>` at the use site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntRange {
    Exact(i64),
    Between { min: i64, max: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoubleRange {
    Exact(f64),
    Between { min: f64, max: f64 },
}

/// A single registry reference: direct id or `#`-prefixed tag (prefix already
/// stripped at decode).
#[derive(Debug, Clone, PartialEq)]
pub enum IdOrTag {
    Id(String),
    Tag(String),
}

/// Id collections that accept one id, a list of ids, or a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum IdSet {
    Ids(Vec<String>),
    Tag(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPredicate {
    pub position: Option<PositionRanges>,
    pub biomes: Option<Vec<String>>,
    pub structures: Option<Vec<String>>,
    pub dimension: Option<String>,
    pub light: Option<IntRange>,
    pub smokey: Option<bool>,
    pub can_see_sky: Option<bool>,
    pub block: Option<IdOrTag>,
    pub fluid: Option<IdOrTag>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionRanges {
    pub x: Option<DoubleRange>,
    pub y: Option<DoubleRange>,
    pub z: Option<DoubleRange>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPredicate {
    pub items: Option<IdSet>,
    pub count: Option<IntRange>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityPredicate {
    pub type_: Option<IdOrTag>,
    pub team: Option<String>,
    pub location: Option<Box<LocationPredicate>>,
    pub movement_affected_by: Option<Box<LocationPredicate>>,
    pub stepping_on: Option<Box<LocationPredicate>>,
    pub movement: Option<MovementRanges>,
    pub distance: Option<DistanceRanges>,
    pub flags: Option<EntityFlags>,
    pub equipment: Option<Equipment>,
    pub periodic_tick: Option<i64>,
    pub vehicle: Option<Box<EntityPredicate>>,
    pub passenger: Option<Box<EntityPredicate>>,
    pub targeted_entity: Option<Box<EntityPredicate>>,
    /// Keyed by status-effect id, document order preserved.
    pub effects: Option<IndexMap<String, EffectPredicate>>,
}

/// Seven movement axes; an absent axis means the ANY sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementRanges {
    pub x: Option<DoubleRange>,
    pub y: Option<DoubleRange>,
    pub z: Option<DoubleRange>,
    pub speed: Option<DoubleRange>,
    pub horizontal_speed: Option<DoubleRange>,
    pub vertical_speed: Option<DoubleRange>,
    pub fall_distance: Option<DoubleRange>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceRanges {
    pub x: Option<DoubleRange>,
    pub y: Option<DoubleRange>,
    pub z: Option<DoubleRange>,
    pub horizontal: Option<DoubleRange>,
    pub absolute: Option<DoubleRange>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntityFlags {
    pub on_ground: Option<bool>,
    pub on_fire: Option<bool>,
    pub sneaking: Option<bool>,
    pub sprinting: Option<bool>,
    pub swimming: Option<bool>,
    pub flying: Option<bool>,
    pub baby: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    pub head: Option<ItemPredicate>,
    pub chest: Option<ItemPredicate>,
    pub legs: Option<ItemPredicate>,
    pub feet: Option<ItemPredicate>,
    pub body: Option<ItemPredicate>,
    pub mainhand: Option<ItemPredicate>,
    pub offhand: Option<ItemPredicate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectPredicate {
    pub amplifier: Option<IntRange>,
    pub duration: Option<IntRange>,
    pub ambient: Option<bool>,
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageSourcePredicate {
    /// (damage-type tag id, expected) pairs, document order.
    pub tags: Vec<(String, bool)>,
    pub source_entity: Option<Box<EntityPredicate>>,
    pub direct_entity: Option<Box<EntityPredicate>>,
    pub is_direct: Option<bool>,
}

/// The closed condition union. `Inverted` and the two combinators are the only
/// variants recursive through `Condition` itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    WeatherCheck {
        raining: Option<bool>,
        thundering: Option<bool>,
    },
    ValueCheck {
        value: NumberProvider,
        range: BoundedIntRange,
    },
    TimeCheck {
        value: BoundedIntRange,
        period: Option<i64>,
    },
    TableBonus {
        enchantment: String,
        chances: Vec<f64>,
    },
    SurvivesExplosion,
    Reference {
        name: String,
    },
    RandomChanceWithEnchantedBonus {
        unenchanted_chance: f64,
        enchanted_chance: EnchantmentLevelValue,
        enchantment: String,
    },
    RandomChance {
        chance: f64,
    },
    MatchTool(ItemPredicate),
    LocationCheck {
        predicate: LocationPredicate,
        /// Present iff at least one offset axis appeared in the input;
        /// absent axes are already zero-filled.
        offset: Option<[i64; 3]>,
    },
    KilledByPlayer {
        inverse: bool,
    },
    Inverted(Box<Condition>),
    EntityProperties {
        entity: EntityTarget,
        predicate: EntityPredicate,
    },
    EnchantmentActiveCheck {
        active: bool,
    },
    DamageSourceProperties(DamageSourcePredicate),
    AnyOf(Vec<Condition>),
    AllOf(Vec<Condition>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub rolls: NumberProvider,
    pub bonus_rolls: Option<NumberProvider>,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub pools: Vec<Pool>,
}

/// How compiled pools combine with the pre-existing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Append every compiled pool to the target table.
    Merge,
    /// Compile only the first pool and swap it in for the target table's
    /// first pool (for single-pool tables like fishing or archaeology).
    Replace,
}
