//! Vocabulary table: canonical item names with nominal durations,
//! categories, and producer associations.
//!
//! The table is flat, immutable data — adding an item is a data entry,
//! not a new type. Callers may overlay a per-session duration map on top
//! of the table without mutating it.
//!
//! # Time Representation
//! All durations are whole seconds at normal game speed.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Duration assigned to items the table does not know (seconds).
pub const FALLBACK_DURATION_SECONDS: i64 = 10;

/// Per-session duration overrides, keyed by canonical name (seconds).
///
/// Entries with non-positive values are treated as absent.
pub type DurationOverrides = HashMap<String, i64>;

/// Classification of a build-order item, used by renderers for coloring
/// and row grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Economy and supply structures (town halls, supply, gas).
    Infrastructure,
    /// Unit-producing structures.
    Production,
    /// Static defense structures.
    StaticDefense,
    /// Tech and upgrade structures.
    UpgradeBuilding,
    /// Mobile units.
    Unit,
    /// Anything else: upgrades, abilities, and unrecognized items.
    #[default]
    Other,
}

/// A single vocabulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Canonical item name (the key used throughout the pipeline).
    pub name: String,
    /// Nominal build duration (seconds).
    pub duration_seconds: i64,
    /// Item classification.
    pub category: Category,
    /// Structure that produces this item sequentially, if any.
    ///
    /// Only items with a producer participate in queue-based timing
    /// inference; everything else starts at the global watermark.
    pub producer: Option<String>,
}

/// The canonical item table.
///
/// Lookup is exact on canonical names; the name normalizer is
/// responsible for reducing input variance before lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    entries: HashMap<String, VocabularyEntry>,
}

use Category::{Infrastructure, Other, Production, StaticDefense, Unit, UpgradeBuilding};

/// (name, duration s, category, producer). LotV values at "Faster" speed.
#[rustfmt::skip]
const STANDARD_ENTRIES: &[(&str, i64, Category, Option<&str>)] = &[
    // ==================== Protoss units ====================
    ("Probe", 12, Unit, Some("Nexus")),
    ("Zealot", 27, Unit, Some("Gateway")),
    ("Stalker", 27, Unit, Some("Gateway")),
    ("Adept", 30, Unit, Some("Gateway")),
    ("Sentry", 23, Unit, Some("Gateway")),
    ("High Templar", 39, Unit, None),
    ("Dark Templar", 39, Unit, None),
    ("Immortal", 39, Unit, Some("Robotics Facility")),
    ("Colossus", 54, Unit, Some("Robotics Facility")),
    ("Disruptor", 36, Unit, None),
    ("Observer", 18, Unit, Some("Robotics Facility")),
    ("Warp Prism", 36, Unit, None),
    ("Phoenix", 25, Unit, Some("Stargate")),
    ("Void Ray", 43, Unit, Some("Stargate")),
    ("Oracle", 37, Unit, Some("Stargate")),
    ("Tempest", 43, Unit, None),
    ("Carrier", 64, Unit, None),
    ("Mothership", 89, Unit, None),
    ("Archon", 48, Unit, None), // High Templar pair + merge time
    ("Interceptor", 9, Unit, None),
    // ==================== Protoss structures ====================
    ("Pylon", 18, Infrastructure, None),
    ("Assimilator", 21, Infrastructure, None),
    ("Nexus", 71, Infrastructure, None),
    ("Gateway", 46, Production, None),
    ("Robotics Facility", 46, Production, None),
    ("Stargate", 43, Production, None),
    ("Cybernetics", 36, UpgradeBuilding, None),
    ("Cybernetics Core", 36, UpgradeBuilding, None), // alias safety
    ("Forge", 32, UpgradeBuilding, None),
    ("Twilight Council", 36, UpgradeBuilding, None),
    ("Templar Archives", 36, UpgradeBuilding, None),
    ("Dark Shrine", 71, UpgradeBuilding, None),
    ("Fleet Beacon", 43, UpgradeBuilding, None),
    ("Robotics Bay", 46, UpgradeBuilding, None),
    ("Shield Battery", 29, StaticDefense, None),
    ("Photon Cannon", 29, StaticDefense, None),
    ("Warp Gate", 7, Other, None), // morph time
    ("Stasis Ward", 4, Other, None),
    // ==================== Protoss upgrades ====================
    ("Ground Weapons Level 1", 121, Other, None),
    ("Ground Weapons Level 2", 143, Other, None),
    ("Ground Weapons Level 3", 171, Other, None),
    ("Air Weapons Level 1", 129, Other, None),
    ("Air Weapons Level 2", 154, Other, None),
    ("Air Weapons Level 3", 183, Other, None),
    ("Ground Armor Level 1", 121, Other, None),
    ("Ground Armor Level 2", 143, Other, None),
    ("Ground Armor Level 3", 171, Other, None),
    ("Air Armor Level 1", 129, Other, None),
    ("Air Armor Level 2", 154, Other, None),
    ("Air Armor Level 3", 183, Other, None),
    ("Shields Level 1", 121, Other, None),
    ("Shields Level 2", 143, Other, None),
    ("Shields Level 3", 171, Other, None),
    ("Charge", 100, Other, None),
    ("Blink", 121, Other, None),
    ("Resonating Glaives", 100, Other, None),
    ("Gravitic Boosters", 57, Other, None), // Observer speed
    ("Gravitic Drive", 57, Other, None),    // Warp Prism speed
    ("Anion Pulse-Crystals", 64, Other, None), // Phoenix range
    ("Extended Thermal Lance", 79, Other, None), // Colossus range
    ("Psionic Storm", 79, Other, None),
    ("Shadow Stride", 100, Other, None),
    ("Warp Gate Research", 100, Other, None),
    ("Chrono Boost", 0, Other, None), // marker only
    // ==================== Terran units ====================
    ("SCV", 12, Unit, Some("Command Center")),
    ("Marine", 18, Unit, Some("Barracks")),
    ("Marauder", 21, Unit, Some("Barracks")),
    ("Reaper", 32, Unit, Some("Barracks")),
    ("Ghost", 43, Unit, None),
    ("Hellion", 21, Unit, Some("Factory")),
    ("Hellbat", 9, Unit, None), // morph from Hellion
    ("Widow Mine", 21, Unit, None),
    ("Siege Tank", 32, Unit, Some("Factory")),
    ("Cyclone", 32, Unit, None),
    ("Thor", 43, Unit, Some("Factory")),
    ("Viking", 30, Unit, Some("Starport")),
    ("Medivac", 30, Unit, Some("Starport")),
    ("Liberator", 43, Unit, None),
    ("Raven", 43, Unit, None),
    ("Banshee", 43, Unit, Some("Starport")),
    ("Battlecruiser", 64, Unit, None),
    // ==================== Terran structures ====================
    ("Command Center", 71, Infrastructure, None),
    ("Supply Depot", 21, Infrastructure, None),
    ("Refinery", 21, Infrastructure, None),
    ("Barracks", 46, Production, None),
    ("Factory", 43, Production, None),
    ("Starport", 36, Production, None),
    ("Tech Lab", 18, Production, None),
    ("Reactor", 36, Production, None),
    ("Engineering Bay", 25, UpgradeBuilding, None),
    ("Armory", 46, UpgradeBuilding, None),
    ("Ghost Academy", 29, UpgradeBuilding, None),
    ("Fusion Core", 46, UpgradeBuilding, None),
    ("Missile Turret", 18, StaticDefense, None),
    ("Bunker", 29, StaticDefense, None),
    ("Sensor Tower", 18, StaticDefense, None),
    // ==================== Zerg units ====================
    ("Drone", 12, Unit, Some("Hatchery")),
    ("Overlord", 25, Unit, Some("Hatchery")),
    ("Overseer", 9, Unit, None), // morph from Overlord
    ("Queen", 36, Unit, None),
    ("Zergling", 17, Unit, Some("Spawning Pool")),
    ("Baneling", 14, Unit, None), // morph from Zergling
    ("Roach", 19, Unit, Some("Roach Warren")),
    ("Ravager", 12, Unit, None), // morph from Roach
    ("Hydralisk", 24, Unit, Some("Hydralisk Den")),
    ("Lurker", 18, Unit, None), // morph from Hydralisk
    ("Mutalisk", 33, Unit, Some("Spire")),
    ("Corruptor", 29, Unit, None),
    ("Brood Lord", 34, Unit, None), // morph from Corruptor
    ("Infestor", 36, Unit, None),
    ("Swarm Host", 29, Unit, None),
    ("Ultralisk", 39, Unit, None),
    ("Viper", 29, Unit, None),
    // ==================== Zerg structures ====================
    ("Hatchery", 71, Infrastructure, None),
    ("Lair", 57, Infrastructure, None),
    ("Hive", 71, Infrastructure, None),
    ("Extractor", 21, Infrastructure, None),
    ("Spawning Pool", 46, UpgradeBuilding, None),
    ("Roach Warren", 39, UpgradeBuilding, None),
    ("Baneling Nest", 43, UpgradeBuilding, None),
    ("Evolution Chamber", 29, UpgradeBuilding, None),
    ("Hydralisk Den", 29, UpgradeBuilding, None),
    ("Lurker Den", 57, UpgradeBuilding, None),
    ("Spire", 71, UpgradeBuilding, None),
    ("Greater Spire", 71, UpgradeBuilding, None),
    ("Infestation Pit", 36, UpgradeBuilding, None),
    ("Ultralisk Cavern", 46, UpgradeBuilding, None),
    ("Nydus Network", 43, UpgradeBuilding, None),
    ("Nydus Worm", 14, UpgradeBuilding, None),
    ("Spine Crawler", 36, StaticDefense, None),
    ("Spore Crawler", 21, StaticDefense, None),
    ("Creep Tumor", 15, Other, None),
];

static STANDARD: Lazy<Vocabulary> = Lazy::new(|| {
    let entries = STANDARD_ENTRIES
        .iter()
        .map(|&(name, duration_seconds, category, producer)| {
            (
                name.to_string(),
                VocabularyEntry {
                    name: name.to_string(),
                    duration_seconds,
                    category,
                    producer: producer.map(str::to_string),
                },
            )
        })
        .collect();
    Vocabulary { entries }
});

impl Vocabulary {
    /// Returns the built-in item table.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Looks up an entry by canonical name.
    pub fn lookup(&self, name: &str) -> Option<&VocabularyEntry> {
        self.entries.get(name)
    }

    /// Resolves a duration: positive override value if present, else
    /// table default, else [`FALLBACK_DURATION_SECONDS`].
    pub fn duration_for(&self, name: &str, overrides: &DurationOverrides) -> i64 {
        if let Some(&secs) = overrides.get(name) {
            if secs > 0 {
                return secs;
            }
        }
        self.lookup(name)
            .map(|e| e.duration_seconds)
            .unwrap_or(FALLBACK_DURATION_SECONDS)
    }

    /// Resolves a category, defaulting to [`Category::Other`] for
    /// unknown items.
    pub fn category_for(&self, name: &str) -> Category {
        self.lookup(name).map(|e| e.category).unwrap_or_default()
    }

    /// Returns the producer structure for an item, if the table knows one.
    pub fn producer_for(&self, name: &str) -> Option<&str> {
        self.lookup(name).and_then(|e| e.producer.as_deref())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
