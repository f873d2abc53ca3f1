// Drum kit catalog and the deterministic ranker.
// Nothing in here performs I/O; every function is pure over its inputs.

pub mod kits;
pub mod models;
pub mod preferences;
pub mod scoring;

pub use kits::{known_genres, KITS};
pub use models::{DrumKit, KitType, SkillLevel, Space};
pub use preferences::{PreferenceError, PreferenceForm, PreferenceRequest, Preferences};
pub use scoring::{pick_top_kits, rank_kits, score_kit, ScoredKit, DEFAULT_SHORTLIST_SIZE};
