//! Thin chat-command handlers: equip, unequip, side toggle.
//!
//! These are validated CRUD over a single chat command. Malformed or
//! out-of-range arguments are rejected straight back to the invoking user
//! and mutate nothing; only a fully validated request touches state.

use thiserror::Error;

use chatwarband_core::config::CommonConfig;
use chatwarband_core::types::HeroId;

use crate::campaign::Campaign;

/// A chat command was rejected before touching any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid slot, must be between 1 and {max}")]
    InvalidSlot { max: usize },
    #[error("invalid item, must be between 1 and {max}")]
    InvalidItem { max: usize },
    #[error("that item does not fit that slot")]
    ItemDoesNotFit,
    #[error("that slot is already empty")]
    SlotEmpty,
    #[error("you have not adopted a hero")]
    NoAdoptedHero,
}

/// Parse a 1-based index argument.
fn parse_index(arg: &str) -> Option<usize> {
    arg.parse::<usize>().ok().filter(|&n| n >= 1)
}

/// `equip <slot> <item>` — equip a custom inventory item into a slot.
pub fn equip(
    hero: HeroId,
    args: &str,
    campaign: &mut dyn Campaign,
) -> Result<String, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [slot_arg, item_arg] = parts.as_slice() else {
        return Err(CommandError::Usage("equip <slot number> <item number>"));
    };
    let (Some(slot), Some(item)) = (parse_index(slot_arg), parse_index(item_arg)) else {
        return Err(CommandError::Usage("equip <slot number> <item number>"));
    };

    let slot_count = campaign.equipment_slot_count(hero);
    if slot > slot_count {
        return Err(CommandError::InvalidSlot { max: slot_count });
    }
    let item_count = campaign.custom_item_count(hero);
    if item > item_count {
        return Err(CommandError::InvalidItem { max: item_count });
    }
    if !campaign.item_fits_slot(hero, slot - 1, item - 1) {
        return Err(CommandError::ItemDoesNotFit);
    }

    let name = campaign.equip_item(hero, slot - 1, item - 1);
    Ok(format!("slot {slot}: {name}"))
}

/// `unequip <slot>` — clear an equipment slot.
pub fn unequip(
    hero: HeroId,
    args: &str,
    campaign: &mut dyn Campaign,
) -> Result<String, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let [slot_arg] = parts.as_slice() else {
        return Err(CommandError::Usage("unequip <slot number>"));
    };
    let Some(slot) = parse_index(slot_arg) else {
        return Err(CommandError::Usage("unequip <slot number>"));
    };

    let slot_count = campaign.equipment_slot_count(hero);
    if slot > slot_count {
        return Err(CommandError::InvalidSlot { max: slot_count });
    }
    match campaign.unequip_slot(hero, slot - 1) {
        Some(_) => Ok(format!("slot {slot} cleared")),
        None => Err(CommandError::SlotEmpty),
    }
}

/// `autosummonchangeside` — toggle which side the user's hero auto-summons
/// onto. Absent entries default to the player's side.
pub fn toggle_auto_summon_side(
    user_name: &str,
    cfg: &mut CommonConfig,
    campaign: &dyn Campaign,
) -> Result<String, CommandError> {
    let hero = campaign
        .adopted_hero_by_user(user_name)
        .ok_or(CommandError::NoAdoptedHero)?;
    let key = campaign.hero_name(hero);
    let next = !cfg.auto_summon_side.get(&key).copied().unwrap_or(true);
    cfg.auto_summon_side.insert(key.clone(), next);
    Ok(format!(
        "{key} now summons on the {} side",
        if next { "player" } else { "enemy" }
    ))
}
