//! Runners around `zelevinsky-core`: the external Kazhdan-Lusztig calculator and the
//! expansion of a multisegment over its union/intersection closure.

pub mod backend;
pub mod config;
pub mod expansion;

pub use backend::{ExternalKl, KlBackend, KlPolynomial};
pub use config::{KitConfig, KlConfig, load_config};
pub use expansion::{Expansion, ExpansionTerm, expand};
