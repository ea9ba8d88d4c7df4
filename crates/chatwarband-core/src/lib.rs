//! Core types and definitions for the CHATWARBAND mod.
//!
//! This crate defines the vocabulary shared across the mod's crates:
//! identity handles, engine-mirrored enumerations, the global config
//! snapshot, constants, and feed events. It has no dependency on the
//! host engine or any runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod types;

#[cfg(test)]
mod tests;
