// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Property lookups and `${name}` template expansion.

pub mod expand;
pub mod store;

pub use expand::{expand_props, ExpandError, PropertyReference};
pub use store::{FilePropertyStore, MapPropertyStore, PropertyStore};
