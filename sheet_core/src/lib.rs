//! sheet_core - Derived-stat engine for a D&D 5e character sheet
//!
//! This library provides:
//! - Ability modifiers and skill bonuses
//! - Hit point reconciliation
//! - Experience level and progress lookup
//! - CharacterSheet: the field state a form owns, with write-back of corrected values

pub mod config;
pub mod experience;
pub mod hit_points;
pub mod input;
pub mod modifier;
pub mod prelude;
pub mod sheet;
pub mod skills;
pub mod types;

// Re-export core types for convenience
pub use config::{default_sheet_config, ConfigError, SheetDefaults};
pub use experience::{compute_experience, ExperienceProgress, MAX_LEVEL, XP_THRESHOLDS};
pub use hit_points::{reconcile_hit_points, HitPoints};
pub use input::{parse_field, parse_field_saturating, InputError};
pub use modifier::{compute_modifier, format_modifier};
pub use sheet::{AbilityUpdate, CharacterSheet};
pub use skills::{compute_skill_bonus, skill_bonus_label, AbilityScores, ScoreSource};
pub use types::{Ability, Background, CharacterClass, Skill};
