//! Constants and tuning parameters for the summon tracker.

/// Name suffix carried by every adopted hero, used to recognize mod-managed
/// characters and to build the auto-summon eligibility set.
pub const NAME_TAG: &str = " [CW]";

/// Minimum simulated seconds between auto-summon policy passes.
pub const AUTO_SUMMON_INTERVAL_SECS: f32 = 0.25;

/// Healing per second granted to auto-summoned heroes.
pub const AUTO_SUMMON_HEAL_PER_SECOND: f32 = 2.0;

/// Gold cost of an auto-summon (always free).
pub const AUTO_SUMMON_GOLD_COST: i32 = 0;

// --- Formation layout ---
//
// The engine reserves class indices 0..=3 for the stock formations; the mod
// parks its heroes in the extra slots so player orders don't drag them around.

/// Extra formation slots used in field battles, one per classification.
pub const FIELD_EXTRA_FORMATIONS: [u8; 4] = [4, 5, 6, 7];

/// Extra formation slots used in sieges (ranged-capable vs. everyone else).
pub const SIEGE_EXTRA_FORMATIONS: [u8; 2] = [6, 7];

/// Field-battle target index base: 4 + the classification's numeric value.
pub const FIELD_FORMATION_BASE: u8 = 4;

/// Siege target index for ranged-capable heroes.
pub const SIEGE_RANGED_FORMATION: u8 = 7;

/// Siege target index for everyone else.
pub const SIEGE_MELEE_FORMATION: u8 = 6;

/// Number of carried weapon slots scanned for ammo.
pub const WEAPON_SLOT_COUNT: usize = 4;
