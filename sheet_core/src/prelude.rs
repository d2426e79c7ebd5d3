//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Ability, Background, CharacterClass, Skill};
pub use crate::sheet::{AbilityUpdate, CharacterSheet};

// Engine
pub use crate::modifier::{compute_modifier, format_modifier};
pub use crate::skills::{compute_skill_bonus, AbilityScores, ScoreSource};
pub use crate::hit_points::{reconcile_hit_points, HitPoints};
pub use crate::experience::{compute_experience, ExperienceProgress};

// Config
pub use crate::config::{default_sheet_config, SheetDefaults};
