//! Detector rules for the name normalizer.
//!
//! Each rule is a unit struct implementing [`AliasRule`]. Rules are
//! evaluated in the order of [`detectors`]; the first rule returning
//! `Some` short-circuits the chain, so rules can be tested, added, and
//! reordered independently.

use once_cell::sync::Lazy;
use regex::Regex;

use super::extract_level;

/// One normalization rule: recognizes a phrasing and produces the
/// canonical vocabulary key for it.
pub trait AliasRule: Sync {
    /// Short rule identifier.
    fn name(&self) -> &'static str;
    /// Returns the canonical name when this rule recognizes the input.
    fn apply(&self, name: &str) -> Option<String>;
}

/// The detector chain, in evaluation order: leveled upgrades first,
/// then fixed-phrase upgrades and abilities.
pub(super) fn detectors() -> &'static [&'static dyn AliasRule] {
    static DETECTORS: [&(dyn AliasRule); 12] = [
        &LeveledWeapons,
        &LeveledArmor,
        &LeveledShields,
        &WarpGateResearch,
        &ColossusRange,
        &PhoenixRange,
        &ObserverSpeed,
        &WarpPrismSpeed,
        &PsionicStorm,
        &ZealotCharge,
        &ResonatingGlaives,
        &ShadowStride,
    ];
    &DETECTORS
}

// ==================== Leveled upgrades ====================

static WEAPONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:protoss\s+)?(ground|air)\s+(?:weapons|attacks?)")
        .expect("valid weapons regex")
});
static ARMOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:protoss\s+)?(ground|air)\s+armor").expect("valid armor regex")
});
static SHIELDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:protoss\s+)?shields?").expect("valid shields regex"));

fn qualifier(m: &str) -> &'static str {
    if m.eq_ignore_ascii_case("ground") {
        "Ground"
    } else {
        "Air"
    }
}

/// `ground/air weapons +N` → `<Qualifier> Weapons Level N`.
pub struct LeveledWeapons;

impl AliasRule for LeveledWeapons {
    fn name(&self) -> &'static str {
        "leveled-weapons"
    }

    fn apply(&self, name: &str) -> Option<String> {
        let caps = WEAPONS_RE.captures(name)?;
        let level = extract_level(name)?;
        Some(format!("{} Weapons Level {level}", qualifier(&caps[1])))
    }
}

/// `ground/air armor +N` → `<Qualifier> Armor Level N`.
pub struct LeveledArmor;

impl AliasRule for LeveledArmor {
    fn name(&self) -> &'static str {
        "leveled-armor"
    }

    fn apply(&self, name: &str) -> Option<String> {
        let caps = ARMOR_RE.captures(name)?;
        let level = extract_level(name)?;
        Some(format!("{} Armor Level {level}", qualifier(&caps[1])))
    }
}

/// `shields +N` → `Shields Level N`.
pub struct LeveledShields;

impl AliasRule for LeveledShields {
    fn name(&self) -> &'static str {
        "leveled-shields"
    }

    fn apply(&self, name: &str) -> Option<String> {
        if !SHIELDS_RE.is_match(name) {
            return None;
        }
        let level = extract_level(name)?;
        Some(format!("Shields Level {level}"))
    }
}

// ==================== Fixed-phrase upgrades ====================

/// Fixed keyword detector: regex hit → fixed canonical name.
macro_rules! phrase_rule {
    ($(#[$doc:meta])* $rule:ident, $id:literal, $pattern:literal, $canonical:literal) => {
        $(#[$doc])*
        pub struct $rule;

        impl AliasRule for $rule {
            fn name(&self) -> &'static str {
                $id
            }

            fn apply(&self, name: &str) -> Option<String> {
                static RE: Lazy<Regex> =
                    Lazy::new(|| Regex::new($pattern).expect("valid phrase regex"));
                RE.is_match(name).then(|| $canonical.to_string())
            }
        }
    };
}

phrase_rule!(
    /// Any warp gate research phrasing.
    WarpGateResearch,
    "warp-gate-research",
    r"(?i)warp\s*gate.*research",
    "Warp Gate Research"
);
phrase_rule!(
    /// Colossus range upgrade.
    ColossusRange,
    "colossus-range",
    r"(?i)colossus\s*range",
    "Extended Thermal Lance"
);
phrase_rule!(
    /// Phoenix range upgrade.
    PhoenixRange,
    "phoenix-range",
    r"(?i)phoenix\s*range",
    "Anion Pulse-Crystals"
);
phrase_rule!(
    /// Observer speed upgrade.
    ObserverSpeed,
    "observer-speed",
    r"(?i)observer.*speed",
    "Gravitic Boosters"
);
phrase_rule!(
    /// Warp Prism speed upgrade.
    WarpPrismSpeed,
    "warp-prism-speed",
    r"(?i)warp\s*prism.*speed",
    "Gravitic Drive"
);
phrase_rule!(
    /// `storm` shorthand or full phrasing.
    PsionicStorm,
    "psionic-storm",
    r"(?i)^storm$|(?i)psionic\s*storm",
    "Psionic Storm"
);
phrase_rule!(
    /// Zealot charge upgrade.
    ZealotCharge,
    "zealot-charge",
    r"(?i)zealot.*charge",
    "Charge"
);
phrase_rule!(
    /// Adept attack-speed upgrade, any glaives phrasing.
    ResonatingGlaives,
    "resonating-glaives",
    r"(?i)resonating\s*glaives|(?i)\bglaives\b|(?i)adept.*glaives",
    "Resonating Glaives"
);
phrase_rule!(
    /// Dark Templar blink, either name.
    ShadowStride,
    "shadow-stride",
    r"(?i)(?:dt|dark\s*templar).*blink|(?i)shadow\s*stride",
    "Shadow Stride"
);
