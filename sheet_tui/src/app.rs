//! Application state

use sheet_core::{default_sheet_config, Ability, CharacterSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sheet,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Sheet, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Sheet => "Sheet",
            Tab::Help => "Help",
        }
    }
}

/// Editable form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Class,
    Background,
    Ability(Ability),
    CurrentHp,
    MaxHp,
    Experience,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Class,
            Field::Background,
            Field::Ability(Ability::Strength),
            Field::Ability(Ability::Dexterity),
            Field::Ability(Ability::Constitution),
            Field::Ability(Ability::Intelligence),
            Field::Ability(Ability::Wisdom),
            Field::Ability(Ability::Charisma),
            Field::CurrentHp,
            Field::MaxHp,
            Field::Experience,
        ]
    }

    /// Dropdowns are cycled with ←/→ instead of typed into
    pub fn is_dropdown(&self) -> bool {
        matches!(self, Field::Class | Field::Background)
    }
}

pub struct App {
    pub current_tab: Tab,
    pub sheet: CharacterSheet,
    pub focus: usize,
    /// Outcome of the last Update action, shown in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let defaults = default_sheet_config();
        tracing::info!(name = %defaults.name, "new character sheet");
        App {
            current_tab: Tab::Sheet,
            sheet: CharacterSheet::new(&defaults),
            focus: 0,
            status: None,
        }
    }

    pub fn focused(&self) -> Field {
        let fields = Field::all();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.current_tab == Tab::Sheet && self.focused() == field
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Sheet => Tab::Help,
            Tab::Help => Tab::Sheet,
        };
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Field::all().len();
    }

    pub fn prev_field(&mut self) {
        let len = Field::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn on_left(&mut self) {
        self.cycle_dropdown(false);
    }

    pub fn on_right(&mut self) {
        self.cycle_dropdown(true);
    }

    fn cycle_dropdown(&mut self, forward: bool) {
        match self.focused() {
            Field::Class => self.sheet.cycle_class(forward),
            Field::Background => self.sheet.cycle_background(forward),
            _ => {}
        }
    }

    /// Enter runs the Update action of the HP and XP sections,
    /// and moves on to the next field elsewhere
    pub fn on_enter(&mut self) {
        match self.focused() {
            Field::CurrentHp | Field::MaxHp => self.update_health(),
            Field::Experience => self.update_experience(),
            _ => self.next_field(),
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.edit_focused(|text| text.push(c));
    }

    pub fn on_backspace(&mut self) {
        self.edit_focused(|text| {
            text.pop();
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focused() {
            Field::Name => edit(&mut self.sheet.name),
            Field::Ability(ability) => {
                let mut text = self.sheet.ability_text(ability).to_string();
                edit(&mut text);
                self.sheet.set_ability_text(ability, text);
            }
            Field::CurrentHp => {
                let mut text = self.sheet.current_hp_text().to_string();
                edit(&mut text);
                self.sheet.set_current_hp_text(text);
            }
            Field::MaxHp => {
                let mut text = self.sheet.max_hp_text().to_string();
                edit(&mut text);
                self.sheet.set_max_hp_text(text);
            }
            Field::Experience => {
                let mut text = self.sheet.xp_text().to_string();
                edit(&mut text);
                self.sheet.set_xp_text(text);
            }
            Field::Class | Field::Background => {}
        }
    }

    pub fn update_health(&mut self) {
        self.status = Some(match self.sheet.update_health() {
            Some(hp) => {
                tracing::info!(current = hp.current, max = hp.max, "hit points updated");
                format!("Hit points: {}", hp)
            }
            None => "Hit points unchanged (not a number)".to_string(),
        });
    }

    pub fn update_experience(&mut self) {
        self.status = Some(match self.sheet.update_experience() {
            Some(progress) => {
                tracing::info!(xp = progress.xp, level = progress.level, "experience updated");
                format!("Level {} ({} XP)", progress.level, progress.xp)
            }
            None => "Experience unchanged (not a number)".to_string(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
