//! Skill catalog module.
//!
//! Models the skill index and reads it from disk.

pub mod index;
pub mod models;

pub use index::load_index;
pub use models::SkillRecord;
