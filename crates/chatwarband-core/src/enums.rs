//! Enumeration types mirroring the host engine's vocabulary.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracked agent.
///
/// This is a shadow copy of the engine's own agent-state enumeration; the
/// tracker never invents states, it only records the engine's transitions.
/// `Active` is the sole non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentLifeState {
    #[default]
    Active,
    Killed,
    Unconscious,
    Routed,
    Deleted,
}

impl AgentLifeState {
    /// Whether the agent is still alive and in the mission.
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Formation classification with the engine's numeric class values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FormationClass {
    #[default]
    Infantry = 0,
    Ranged = 1,
    Cavalry = 2,
    HorseArcher = 3,
    Skirmisher = 4,
    HeavyInfantry = 5,
    LightCavalry = 6,
    HeavyCavalry = 7,
}

impl FormationClass {
    /// The engine's numeric class value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Whether this class fights from horseback.
    pub fn is_mounted(self) -> bool {
        matches!(
            self,
            Self::Cavalry | Self::LightCavalry | Self::HeavyCavalry | Self::HorseArcher
        )
    }

    /// Whether this class relies on a ranged weapon.
    pub fn is_ranged(self) -> bool {
        matches!(self, Self::Ranged | Self::HorseArcher)
    }
}

/// Weapon item classes relevant to formation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    OneHanded,
    TwoHanded,
    Polearm,
    Bow,
    Crossbow,
    Arrow,
    Bolt,
    Thrown,
    Shield,
}

impl WeaponClass {
    /// Whether items of this class are an ammo stack (arrows or bolts).
    pub fn is_ammo(self) -> bool {
        matches!(self, Self::Arrow | Self::Bolt)
    }

    /// Whether this is a ranged weapon class for formation purposes.
    pub fn is_ranged_weapon(self) -> bool {
        matches!(self, Self::Bow | Self::Crossbow)
    }
}

/// What kind of mission is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    #[default]
    FieldBattle,
    Siege,
    Hideout,
    /// Town/village scene with a location — summon tracking is disabled here.
    Settlement,
    Other,
}

impl MissionKind {
    /// Summoning (and retinue spawning) is only meaningful in real battles.
    pub fn is_battle(self) -> bool {
        matches!(self, Self::FieldBattle | Self::Siege)
    }
}

/// Mission mode as reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionMode {
    /// Pre-battle troop placement phase.
    Deployment,
    #[default]
    Battle,
    Stealth,
}
