//! Mission-side collaborator: the live battle the engine is running.
//!
//! The engine owns every agent; this trait exposes just enough of the
//! mission for the tracker to observe agents, place formations, and spawn
//! retinue troops. Agent data crosses the boundary as plain snapshots so
//! no engine handle is ever retained.

use thiserror::Error;

use chatwarband_core::constants::WEAPON_SLOT_COUNT;
use chatwarband_core::enums::{FormationClass, MissionKind, MissionMode, WeaponClass};
use chatwarband_core::types::{AgentId, PartyId, TroopId};

/// One carried weapon slot, as scanned for the ammo check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponSlotInfo {
    pub class: WeaponClass,
    pub amount: u16,
}

/// Point-in-time view of a live agent, taken during the formation pass.
#[derive(Debug, Clone)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub name: String,
    pub is_active: bool,
    pub is_human: bool,
    pub is_ai_controlled: bool,
    pub is_hero: bool,
    pub on_player_team: bool,
    pub has_mount: bool,
    /// Weapon classes present in the agent's spawn equipment.
    pub spawn_weapon_classes: Vec<WeaponClass>,
    /// Carried weapon slots, scanned for ammo stacks.
    pub weapon_slots: [Option<WeaponSlotInfo>; WEAPON_SLOT_COUNT],
    /// Extra-formation index the agent currently belongs to, if assigned.
    pub formation_index: Option<u8>,
}

impl AgentSnapshot {
    /// Spawn equipment carries a bow or crossbow.
    pub fn has_ranged_weapon(&self) -> bool {
        self.spawn_weapon_classes
            .iter()
            .any(|c| c.is_ranged_weapon())
    }

    /// Any carried slot holds a non-empty ammo stack.
    pub fn has_ammo(&self) -> bool {
        self.weapon_slots
            .iter()
            .flatten()
            .any(|w| w.class.is_ammo() && w.amount > 0)
    }
}

/// Request to spawn one troop into the mission via the shared spawn routine.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub troop: TroopId,
    pub party: PartyId,
    pub on_player_side: bool,
    pub with_horse: bool,
    pub is_reinforcement: bool,
    pub alarmed: bool,
}

/// A successfully spawned agent plus its engine-assigned display name.
#[derive(Debug, Clone)]
pub struct SpawnedAgent {
    pub agent: AgentId,
    pub name: String,
}

/// The engine refused to spawn a troop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("no free spawn slot for troop")]
    NoSpawnSlot,
    #[error("mission is not accepting reinforcements")]
    MissionClosed,
}

/// The live mission as seen by the tracker.
pub trait MissionControl {
    /// Simulation-clock seconds since the mission began.
    fn mission_time(&self) -> f32;

    fn kind(&self) -> MissionKind;

    fn mode(&self) -> MissionMode;

    /// Whether the agent's team is friendly to the player's team.
    fn agent_on_player_side(&self, agent: AgentId) -> bool;

    /// The formation class the agent spawned into.
    fn agent_formation_class(&self, agent: AgentId) -> FormationClass;

    /// Snapshots of all agents currently in the mission.
    fn agents(&self) -> Vec<AgentSnapshot>;

    /// Whether the player team already has the extra formation `index`.
    fn has_formation(&self, index: u8) -> bool;

    /// Create the extra formation `index` on the player team.
    fn add_formation(&mut self, index: u8);

    /// Move an agent into formation `index`.
    fn assign_formation(&mut self, agent: AgentId, index: u8);

    /// Spawn a troop through the shared spawn routine.
    fn spawn_troop(&mut self, request: &SpawnRequest) -> Result<SpawnedAgent, SpawnError>;

    /// Override an agent's display name.
    fn set_agent_name(&mut self, agent: AgentId, name: String);

    /// Scale an agent's current and maximum health.
    fn scale_agent_health(&mut self, agent: AgentId, multiplier: f32);
}
