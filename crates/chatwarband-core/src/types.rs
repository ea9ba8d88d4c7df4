//! Identity handles for externally-owned entities.
//!
//! Heroes, troop templates and parties are persistent campaign objects owned
//! by the host; agents are ephemeral mission objects whose engine handles get
//! recycled. All of them are referenced here by opaque id only.

use serde::{Deserialize, Serialize};

/// A persistent named character identity, cross-battle, owned by the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroId(pub u32);

/// A unit-template reference (the kind of troop, not a live instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TroopId(pub u32);

/// An owning faction/party reference, used for roster bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyId(pub u32);

/// Handle to a live simulated unit within one mission.
///
/// The engine recycles agent slots, so the handle carries a generation tag:
/// after the removal event for an agent fires, its `AgentId` is only valid
/// for equality comparison and must never be dereferenced through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId {
    pub index: u32,
    pub generation: u32,
}

impl AgentId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}
