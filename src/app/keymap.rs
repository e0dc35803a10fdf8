use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

/// Bindings for the normal (typing) mode. Only chords and non-printable
/// keys may appear here: every plain character belongs to the query.
#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(_config: &KeyConfig) -> Self {
        // Custom profiles are parsed but not yet mapped; the default
        // profile is the only one shipped.
        let mut global = HashMap::new();

        global.insert(key(KeyCode::Esc), Action::ClearQuery);
        global.insert(key(KeyCode::Enter), Action::Submit);
        global.insert(key(KeyCode::Up), Action::SuggestionPrev);
        global.insert(key(KeyCode::Down), Action::SuggestionNext);
        global.insert(key(KeyCode::Tab), Action::SuggestionNext);
        global.insert(key(KeyCode::BackTab), Action::SuggestionPrev);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('q'), Action::Quit);
        global.insert(ctrl('t'), Action::EnterThemeSelection);
        global.insert(ctrl('u'), Action::ClearQuery);

        Self { global }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.global.get(&event).cloned()
    }
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
