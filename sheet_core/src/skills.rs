//! Skill bonuses and the skill → ability binding table

use crate::input::InputError;
use crate::modifier::{compute_modifier, format_modifier};
use crate::types::{Ability, Skill};

/// Every skill and the ability it is bound to. Constitution has no skills.
pub static SKILL_BINDINGS: [(Skill, Ability); 18] = [
    (Skill::Athletics, Ability::Strength),
    (Skill::Acrobatics, Ability::Dexterity),
    (Skill::SleightOfHand, Ability::Dexterity),
    (Skill::Stealth, Ability::Dexterity),
    (Skill::Arcana, Ability::Intelligence),
    (Skill::History, Ability::Intelligence),
    (Skill::Investigation, Ability::Intelligence),
    (Skill::Nature, Ability::Intelligence),
    (Skill::Religion, Ability::Intelligence),
    (Skill::AnimalHandling, Ability::Wisdom),
    (Skill::Insight, Ability::Wisdom),
    (Skill::Medicine, Ability::Wisdom),
    (Skill::Perception, Ability::Wisdom),
    (Skill::Survival, Ability::Wisdom),
    (Skill::Deception, Ability::Charisma),
    (Skill::Intimidation, Ability::Charisma),
    (Skill::Performance, Ability::Charisma),
    (Skill::Persuasion, Ability::Charisma),
];

/// Look up the ability a skill is bound to
pub fn bound_ability(skill: Skill) -> Ability {
    // The table is laid out in `Skill` declaration order
    SKILL_BINDINGS[skill.index()].1
}

/// Skills bound to `ability`, in sheet order
pub fn skills_for(ability: Ability) -> impl Iterator<Item = Skill> {
    SKILL_BINDINGS
        .iter()
        .filter(move |(_, bound)| *bound == ability)
        .map(|(skill, _)| *skill)
}

/// Anything that can report the current score of an ability
pub trait ScoreSource {
    fn score(&self, ability: Ability) -> Result<i32, InputError>;
}

/// Plain integer ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores {
    pub scores: [i32; 6],
}

impl AbilityScores {
    /// All six abilities set to the same score
    pub fn uniform(score: i32) -> Self {
        AbilityScores { scores: [score; 6] }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        self.scores[ability.index()]
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        self.scores[ability.index()] = score;
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        AbilityScores::uniform(10)
    }
}

impl ScoreSource for AbilityScores {
    fn score(&self, ability: Ability) -> Result<i32, InputError> {
        Ok(self.get(ability))
    }
}

/// Skill bonus: the modifier of the skill's bound ability
pub fn compute_skill_bonus<S: ScoreSource + ?Sized>(skill: Skill, scores: &S) -> Result<i32, InputError> {
    let score = scores.score(bound_ability(skill))?;
    Ok(compute_modifier(score))
}

/// Display form of a skill bonus, blank if the bound score is not a number
pub fn skill_bonus_label<S: ScoreSource + ?Sized>(skill: Skill, scores: &S) -> String {
    match compute_skill_bonus(skill, scores) {
        Ok(bonus) => format_modifier(bonus),
        Err(err) => {
            tracing::debug!(skill = skill.name(), %err, "blank skill bonus");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Unreadable;

    impl ScoreSource for Unreadable {
        fn score(&self, _ability: Ability) -> Result<i32, InputError> {
            Err(InputError::NotAnInteger("x".to_string()))
        }
    }

    #[test]
    fn test_binding_table_matches_declaration_order() {
        for (i, (skill, _)) in SKILL_BINDINGS.iter().enumerate() {
            assert_eq!(skill.index(), i, "{} out of place", skill.name());
        }
    }

    #[test]
    fn test_binding_counts() {
        assert_eq!(skills_for(Ability::Strength).count(), 1);
        assert_eq!(skills_for(Ability::Dexterity).count(), 3);
        assert_eq!(skills_for(Ability::Constitution).count(), 0);
        assert_eq!(skills_for(Ability::Intelligence).count(), 5);
        assert_eq!(skills_for(Ability::Wisdom).count(), 5);
        assert_eq!(skills_for(Ability::Charisma).count(), 4);
    }

    #[test]
    fn test_specific_bindings() {
        assert_eq!(Skill::Stealth.ability(), Ability::Dexterity);
        assert_eq!(Skill::AnimalHandling.ability(), Ability::Wisdom);
        assert_eq!(Skill::Athletics.ability(), Ability::Strength);
        assert_eq!(Skill::Religion.ability(), Ability::Intelligence);
        assert_eq!(Skill::Persuasion.ability(), Ability::Charisma);
    }

    #[test]
    fn test_stealth_uses_dexterity() {
        let mut scores = AbilityScores::default();
        scores.set(Ability::Dexterity, 14);
        assert_eq!(compute_skill_bonus(Skill::Stealth, &scores), Ok(2));
        assert_eq!(skill_bonus_label(Skill::Stealth, &scores), "+2");
        // Unrelated skills stay at the default
        assert_eq!(skill_bonus_label(Skill::Athletics, &scores), "+0");
    }

    #[test]
    fn test_negative_bonus_label() {
        let mut scores = AbilityScores::default();
        scores.set(Ability::Charisma, 7);
        assert_eq!(skill_bonus_label(Skill::Deception, &scores), "-2");
    }

    #[test]
    fn test_unreadable_score_gives_blank_label() {
        assert!(compute_skill_bonus(Skill::Arcana, &Unreadable).is_err());
        assert_eq!(skill_bonus_label(Skill::Arcana, &Unreadable), "");
    }

    proptest! {
        #[test]
        fn skill_bonus_is_bound_modifier(scores in proptest::array::uniform6(-50i32..50), idx in 0usize..18) {
            let scores = AbilityScores { scores };
            let skill = Skill::all()[idx];
            let expected = compute_modifier(scores.get(skill.ability()));
            prop_assert_eq!(compute_skill_bonus(skill, &scores), Ok(expected));
        }
    }
}
