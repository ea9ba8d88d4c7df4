//! Campaign-side collaborators.
//!
//! Everything that outlives a single mission — adopted-hero identity,
//! party rosters, participation statistics, equipment, formation
//! preferences — is owned by the host's campaign layer and reached
//! through these traits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chatwarband_core::enums::{AgentLifeState, FormationClass};
use chatwarband_core::types::{AgentId, HeroId, PartyId, TroopId};

/// Campaign layer: adopted-hero directory, rosters, statistics, equipment.
pub trait Campaign {
    /// Resolve a live agent to the adopted hero it embodies, if any.
    fn adopted_hero(&self, agent: AgentId) -> Option<HeroId>;

    /// Resolve a viewer's chat name to their adopted hero.
    fn adopted_hero_by_user(&self, user_name: &str) -> Option<HeroId>;

    /// All currently adopted, living heroes.
    fn adopted_heroes(&self) -> Vec<HeroId>;

    /// Full display name of a hero (includes the mod name tag).
    fn hero_name(&self, hero: HeroId) -> String;

    /// First name of a hero, if one is set.
    fn hero_first_name(&self, hero: HeroId) -> Option<String>;

    /// Display name of a troop template.
    fn troop_name(&self, troop: TroopId) -> String;

    /// The party this hero fights under in the current map event.
    fn map_event_party(&self, hero: HeroId) -> PartyId;

    /// The hero's configured retinue unit templates, in spawn order.
    fn retinue_troops(&self, hero: HeroId) -> Vec<TroopId>;

    /// Whether a troop template is a mounted unit.
    fn troop_is_mounted(&self, troop: TroopId) -> bool;

    /// Adjust a party roster count for a troop template.
    fn adjust_roster(&mut self, party: PartyId, troop: TroopId, delta: i32);

    /// Bump the hero's cross-battle participation counter. `forced` marks a
    /// player-initiated summon; incidental participation is tagged separately
    /// so it cannot corrupt streak statistics.
    fn increase_participation(&mut self, hero: HeroId, player_side: bool, forced: bool);

    /// Record the permanent death of one of the hero's retinue members.
    fn kill_retinue(&mut self, hero: HeroId, troop: TroopId);

    /// Current player formation preference for a troop template.
    fn formation_preference(&self, troop: TroopId) -> Option<FormationClass>;

    /// Set the player formation preference for a troop template.
    fn set_formation_preference(&mut self, troop: TroopId, class: FormationClass);

    // --- Equipment, used only by the thin chat-command handlers ---

    /// Number of indexed equipment slots the hero's class exposes.
    fn equipment_slot_count(&self, hero: HeroId) -> usize;

    /// Number of custom items in the hero's inventory.
    fn custom_item_count(&self, hero: HeroId) -> usize;

    /// Whether inventory item `item` (0-based) fits slot `slot` (0-based).
    fn item_fits_slot(&self, hero: HeroId, slot: usize, item: usize) -> bool;

    /// Equip inventory item into a slot, returning the item's display name.
    fn equip_item(&mut self, hero: HeroId, slot: usize, item: usize) -> String;

    /// Clear a slot, returning the removed item's name if one was equipped.
    fn unequip_slot(&mut self, hero: HeroId, slot: usize) -> Option<String>;
}

/// Parameters for one summon request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonSettings {
    pub on_player_side: bool,
    pub with_retinue: bool,
    pub heal_per_second: f32,
    pub gold_cost: i32,
    pub preferred_formation: FormationClass,
}

/// A summon request was refused (hero dead, wrong mission, cost unpaid...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SummonRejected(pub String);

/// Outbound summon-execution entry point. The tracker never spawns hero
/// agents itself; it asks this collaborator and later observes the
/// resulting agent-build event.
pub trait SummonExecutor {
    /// Attempt to summon `hero` on behalf of `requested_by`.
    fn execute(
        &mut self,
        hero: HeroId,
        settings: &SummonSettings,
        requested_by: &str,
    ) -> Result<String, SummonRejected>;
}

/// Outbound kill-effect reward entry point.
pub trait KillEffects {
    /// Apply gold/heal/experience rewards to `hero` for a kill scored by one
    /// of its agents or retinue members.
    #[allow(clippy::too_many_arguments)]
    fn apply_kill_effects(
        &mut self,
        hero: HeroId,
        killer: AgentId,
        killed: Option<AgentId>,
        final_state: AgentLifeState,
        gold_per_kill: i32,
        heal_per_kill: f32,
        experience_base: i32,
        experience_multiplier: f32,
        relative_level_scaling: f32,
        level_scaling_cap: f32,
    );
}
