//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Catalog: static factions, planets and tone presets
//! - Entities: scenario inputs, Warhosts, campaigns and their episodes
//! - Value Objects: battle formats, campaign modes, rule constants, field limits

pub mod catalog;
pub mod entities;
pub mod value_objects;
