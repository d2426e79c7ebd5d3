//! CharacterSheet - the in-memory state behind the form
//!
//! The sheet owns the raw text of every editable field together with the
//! last derived values shown next to them. Editing an ability recomputes
//! its modifier and the skills bound to it straight away. Hit points and
//! experience are only reconciled when `update_health` / `update_experience`
//! run, and any correction is written back into the field text.

use crate::config::SheetDefaults;
use crate::experience::{compute_experience, ExperienceProgress};
use crate::hit_points::{reconcile_hit_points, HitPoints};
use crate::input::{parse_field, parse_field_saturating, InputError};
use crate::modifier::{compute_modifier, format_modifier};
use crate::skills::{compute_skill_bonus, skills_for, ScoreSource};
use crate::types::{cycle_option, Ability, Background, CharacterClass, Skill};

/// Result of editing an ability score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityUpdate {
    pub ability: Ability,
    /// `None` when the score text is not an integer
    pub modifier: Option<i32>,
    /// Recomputed bonuses of the skills bound to `ability`
    pub skills: Vec<(Skill, Option<i32>)>,
}

#[derive(Debug, Clone)]
pub struct CharacterSheet {
    pub name: String,
    pub class: Option<CharacterClass>,
    pub background: Option<Background>,

    ability_text: [String; 6],
    modifiers: [Option<i32>; 6],
    skill_bonuses: [Option<i32>; 18],

    current_hp_text: String,
    max_hp_text: String,
    hit_points: HitPoints,

    xp_text: String,
    experience: ExperienceProgress,
}

impl CharacterSheet {
    pub fn new(defaults: &SheetDefaults) -> Self {
        let score = defaults.ability_score;
        let modifier = compute_modifier(score);

        let mut sheet = CharacterSheet {
            name: defaults.name.clone(),
            class: None,
            background: None,
            ability_text: std::array::from_fn(|_| score.to_string()),
            modifiers: [Some(modifier); 6],
            skill_bonuses: [Some(modifier); 18],
            current_hp_text: defaults.current_hp.to_string(),
            max_hp_text: defaults.max_hp.to_string(),
            hit_points: reconcile_hit_points(defaults.current_hp, defaults.max_hp),
            xp_text: defaults.experience.to_string(),
            experience: compute_experience(defaults.experience),
        };

        // Fields start reconciled, as if Update had been pressed once
        sheet.update_health();
        sheet.update_experience();
        sheet
    }

    // ------------------------------------------------------------------
    // Abilities and skills
    // ------------------------------------------------------------------

    pub fn ability_text(&self, ability: Ability) -> &str {
        &self.ability_text[ability.index()]
    }

    /// Store new text for an ability, then recompute its modifier and
    /// the bonus of every skill bound to it
    pub fn set_ability_text(&mut self, ability: Ability, text: impl Into<String>) -> AbilityUpdate {
        self.ability_text[ability.index()] = text.into();

        let modifier = match parse_field(self.ability_text(ability)) {
            Ok(score) => Some(compute_modifier(score)),
            Err(err) => {
                tracing::debug!(ability = ability.name(), %err, "ability score unreadable");
                None
            }
        };
        self.modifiers[ability.index()] = modifier;

        let skills: Vec<(Skill, Option<i32>)> = skills_for(ability)
            .map(|skill| (skill, compute_skill_bonus(skill, &*self).ok()))
            .collect();
        for (skill, bonus) in &skills {
            self.skill_bonuses[skill.index()] = *bonus;
        }

        AbilityUpdate { ability, modifier, skills }
    }

    pub fn modifier(&self, ability: Ability) -> Option<i32> {
        self.modifiers[ability.index()]
    }

    /// "+N" / "-N", or blank when the score is not a number
    pub fn modifier_label(&self, ability: Ability) -> String {
        self.modifier(ability).map(format_modifier).unwrap_or_default()
    }

    pub fn skill_bonus(&self, skill: Skill) -> Option<i32> {
        self.skill_bonuses[skill.index()]
    }

    pub fn skill_label(&self, skill: Skill) -> String {
        self.skill_bonus(skill).map(format_modifier).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Hit points
    // ------------------------------------------------------------------

    pub fn current_hp_text(&self) -> &str {
        &self.current_hp_text
    }

    pub fn max_hp_text(&self) -> &str {
        &self.max_hp_text
    }

    pub fn set_current_hp_text(&mut self, text: impl Into<String>) {
        self.current_hp_text = text.into();
    }

    pub fn set_max_hp_text(&mut self, text: impl Into<String>) {
        self.max_hp_text = text.into();
    }

    /// Last reconciled hit points (what the HP bar shows)
    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    /// Reconcile the HP fields and write corrections back.
    ///
    /// Returns `None` and leaves everything as it was if either field
    /// is not an integer.
    pub fn update_health(&mut self) -> Option<HitPoints> {
        let (current, max) = match (
            parse_field_saturating(&self.current_hp_text),
            parse_field_saturating(&self.max_hp_text),
        ) {
            (Ok(current), Ok(max)) => (current, max),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(%err, "hit point update skipped");
                return None;
            }
        };

        let hp = reconcile_hit_points(current, max);
        if hp.max != max {
            self.max_hp_text = hp.max.to_string();
        }
        if hp.current != current {
            self.current_hp_text = hp.current.to_string();
        }
        if hp.was_corrected_from(current, max) {
            tracing::debug!(current, max, corrected = %hp, "hit points clamped");
        }

        self.hit_points = hp;
        Some(hp)
    }

    // ------------------------------------------------------------------
    // Experience
    // ------------------------------------------------------------------

    pub fn xp_text(&self) -> &str {
        &self.xp_text
    }

    pub fn set_xp_text(&mut self, text: impl Into<String>) {
        self.xp_text = text.into();
    }

    /// Last computed experience state (level and XP bar)
    pub fn experience(&self) -> ExperienceProgress {
        self.experience
    }

    pub fn level(&self) -> u8 {
        self.experience.level
    }

    pub fn level_label(&self) -> String {
        format!("Level: {}", self.experience.level)
    }

    /// Recompute level and XP bar from the XP field.
    ///
    /// Negative XP is written back as 0. Returns `None` and keeps the
    /// previous state if the field is not an integer.
    pub fn update_experience(&mut self) -> Option<ExperienceProgress> {
        let xp = match parse_field_saturating(&self.xp_text) {
            Ok(xp) => xp,
            Err(err) => {
                tracing::debug!(%err, "experience update skipped");
                return None;
            }
        };

        let progress = compute_experience(xp);
        if progress.xp != xp {
            tracing::debug!(xp, "negative experience reset to 0");
            self.xp_text = progress.xp.to_string();
        }

        self.experience = progress;
        Some(progress)
    }

    // ------------------------------------------------------------------
    // Descriptive fields
    // ------------------------------------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn cycle_class(&mut self, forward: bool) {
        self.class = cycle_option(CharacterClass::all(), self.class, forward);
    }

    pub fn cycle_background(&mut self, forward: bool) {
        self.background = cycle_option(Background::all(), self.background, forward);
    }

    pub fn class_label(&self) -> &'static str {
        self.class.map(|c| c.name()).unwrap_or("Select Class")
    }

    pub fn background_label(&self) -> &'static str {
        self.background.map(|b| b.name()).unwrap_or("Select Background")
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        CharacterSheet::new(&SheetDefaults::default())
    }
}

impl ScoreSource for CharacterSheet {
    fn score(&self, ability: Ability) -> Result<i32, InputError> {
        parse_field(self.ability_text(ability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet_defaults() {
        let sheet = CharacterSheet::default();
        assert_eq!(sheet.name, "Character Name");
        assert_eq!(sheet.class_label(), "Select Class");
        assert_eq!(sheet.background_label(), "Select Background");
        for ability in Ability::all() {
            assert_eq!(sheet.ability_text(*ability), "10");
            assert_eq!(sheet.modifier_label(*ability), "+0");
        }
        for skill in Skill::all() {
            assert_eq!(sheet.skill_label(*skill), "+0");
        }
        assert_eq!(sheet.hit_points(), HitPoints { current: 20, max: 30 });
        assert_eq!(sheet.level_label(), "Level: 1");
        assert_eq!(sheet.experience().bar_maximum, 300);
    }

    #[test]
    fn test_new_sheet_reconciles_bad_defaults() {
        let defaults = SheetDefaults {
            current_hp: 50,
            max_hp: 0,
            experience: -10,
            ..SheetDefaults::default()
        };
        let sheet = CharacterSheet::new(&defaults);
        assert_eq!(sheet.hit_points(), HitPoints { current: 1, max: 1 });
        assert_eq!(sheet.current_hp_text(), "1");
        assert_eq!(sheet.max_hp_text(), "1");
        assert_eq!(sheet.xp_text(), "0");
    }

    #[test]
    fn test_ability_edit_updates_bound_skills_only() {
        let mut sheet = CharacterSheet::default();
        let update = sheet.set_ability_text(Ability::Dexterity, "14");

        assert_eq!(update.modifier, Some(2));
        assert_eq!(
            update.skills,
            vec![
                (Skill::Acrobatics, Some(2)),
                (Skill::SleightOfHand, Some(2)),
                (Skill::Stealth, Some(2)),
            ]
        );
        assert_eq!(sheet.modifier_label(Ability::Dexterity), "+2");
        assert_eq!(sheet.skill_label(Skill::Stealth), "+2");
        assert_eq!(sheet.skill_label(Skill::Athletics), "+0");
    }

    #[test]
    fn test_constitution_has_no_skills() {
        let mut sheet = CharacterSheet::default();
        let update = sheet.set_ability_text(Ability::Constitution, "16");
        assert_eq!(update.modifier, Some(3));
        assert!(update.skills.is_empty());
    }

    #[test]
    fn test_unreadable_ability_blanks_labels() {
        let mut sheet = CharacterSheet::default();
        let update = sheet.set_ability_text(Ability::Wisdom, "1x");
        assert_eq!(update.modifier, None);
        assert_eq!(sheet.modifier_label(Ability::Wisdom), "");
        assert_eq!(sheet.skill_label(Skill::Perception), "");
        assert_eq!(sheet.ability_text(Ability::Wisdom), "1x");

        // Fixing the text restores the labels
        sheet.set_ability_text(Ability::Wisdom, "9");
        assert_eq!(sheet.modifier_label(Ability::Wisdom), "-1");
        assert_eq!(sheet.skill_label(Skill::Perception), "-1");
    }

    #[test]
    fn test_update_health_writes_back() {
        let mut sheet = CharacterSheet::default();
        sheet.set_current_hp_text("35");
        assert_eq!(sheet.update_health(), Some(HitPoints { current: 30, max: 30 }));
        assert_eq!(sheet.current_hp_text(), "30");

        sheet.set_current_hp_text("-5");
        sheet.update_health();
        assert_eq!(sheet.current_hp_text(), "0");
    }

    #[test]
    fn test_update_health_ignores_garbage() {
        let mut sheet = CharacterSheet::default();
        sheet.set_max_hp_text("lots");
        assert_eq!(sheet.update_health(), None);
        assert_eq!(sheet.hit_points(), HitPoints { current: 20, max: 30 });
        assert_eq!(sheet.max_hp_text(), "lots");
    }

    #[test]
    fn test_update_health_leaves_valid_text_untouched() {
        let mut sheet = CharacterSheet::default();
        sheet.set_current_hp_text(" 12 ");
        sheet.update_health();
        assert_eq!(sheet.current_hp_text(), " 12 ");
        assert_eq!(sheet.hit_points().current, 12);
    }

    #[test]
    fn test_oversized_hit_points_are_clamped() {
        let mut sheet = CharacterSheet::default();
        sheet.set_current_hp_text("99999999999");
        assert_eq!(sheet.update_health(), Some(HitPoints { current: 30, max: 30 }));
        assert_eq!(sheet.current_hp_text(), "30");

        sheet.set_current_hp_text("-99999999999");
        assert_eq!(sheet.update_health(), Some(HitPoints { current: 0, max: 30 }));
        assert_eq!(sheet.current_hp_text(), "0");
    }

    #[test]
    fn test_oversized_experience_reaches_max_level() {
        let mut sheet = CharacterSheet::default();
        sheet.set_xp_text("5000000000");
        let progress = sheet.update_experience().unwrap();
        assert_eq!(progress.level, 20);
        assert_eq!(progress.bar_value, 355_000);

        sheet.set_xp_text("-5000000000");
        assert_eq!(sheet.update_experience().map(|p| p.level), Some(1));
        assert_eq!(sheet.xp_text(), "0");
    }

    #[test]
    fn test_update_experience() {
        let mut sheet = CharacterSheet::default();
        sheet.set_xp_text("900");
        let progress = sheet.update_experience().unwrap();
        assert_eq!(progress.level, 3);
        assert_eq!(progress.bar_maximum, 2_700);
        assert_eq!(sheet.level_label(), "Level: 3");
    }

    #[test]
    fn test_negative_experience_written_back() {
        let mut sheet = CharacterSheet::default();
        sheet.set_xp_text("-50");
        assert_eq!(sheet.update_experience().map(|p| p.level), Some(1));
        assert_eq!(sheet.xp_text(), "0");
    }

    #[test]
    fn test_update_experience_ignores_garbage() {
        let mut sheet = CharacterSheet::default();
        sheet.set_xp_text("6500");
        sheet.update_experience();
        sheet.set_xp_text("6,600");
        assert_eq!(sheet.update_experience(), None);
        assert_eq!(sheet.level(), 5);
    }

    #[test]
    fn test_cycle_descriptive_fields() {
        let mut sheet = CharacterSheet::default();
        sheet.cycle_class(true);
        assert_eq!(sheet.class_label(), "Barbarian");
        sheet.cycle_background(false);
        assert_eq!(sheet.background_label(), "Urchin");
        sheet.set_name("Mialee");
        assert_eq!(sheet.name, "Mialee");
    }
}
