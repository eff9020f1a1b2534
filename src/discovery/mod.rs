// src/discovery/mod.rs
// =============================================================================
// This module finds animation files across the configured repositories.
//
// Submodules:
// - scan: the discovery loop (metadata -> recursive tree -> filter)
// - record: FileRecord and the path/name normalization rules
// - pacing: the pause between repositories
// - fallback: network-free guessed listing for rate-limited sessions
// =============================================================================

mod fallback;
mod pacing;
mod record;
mod scan;

pub use fallback::fallback_all;
pub use pacing::{Pacer, TokioPacer};
pub use record::FileRecord;
pub use scan::discover_all;
