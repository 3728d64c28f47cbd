//! Standard forms of Zelevinsky multisegments.
//!
//! This crate re-exports the building blocks used by the front ends:
//! - permutation algebra and the dot action (`perm`)
//! - dominance and the dominant chamber (`chamber`)
//! - stabilizers and double cosets (`coset`, `family`)
//! - the standard-form search (`standard_form`)
//! - text parsing and the union/intersection closure (`parse`, `closure`)
//! - the external Kazhdan-Lusztig calculator and expansion pipeline (`kit`)

pub use zelevinsky_core::*;
pub use zelevinsky_kit as kit;
pub use zelevinsky_kit::{Expansion, ExternalKl, KitConfig, KlBackend, expand, load_config};
