use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slidereel_core::SliderConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Application bindings; every other key is forwarded to the carousel by
/// its browser key code
#[derive(Debug)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&SliderConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &SliderConfig) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyBinding::simple(KeyCode::Char('q')), Action::Quit);
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Char('s')), Action::ToggleStepByStep);
        for digit in 1..=9u8 {
            let c = char::from(b'0' + digit);
            bindings.insert(
                KeyBinding::simple(KeyCode::Char(c)),
                Action::Goto(usize::from(digit - 1)),
            );
        }

        if config.keys {
            let configured = config.next_key.codes().into_iter().chain(config.prev_key.codes());
            for code in configured {
                let shadowed = bindings.iter().find(|(binding, _)| {
                    binding.modifiers == KeyModifiers::NONE
                        && dom_key_code(binding.code) == Some(code)
                });
                if let Some((_, action)) = shadowed {
                    warn!(
                        "Key conflict: key code {} already bound to {:?}, carousel will not see it",
                        code, action
                    );
                }
            }
        }

        Self { bindings }
    }

    pub fn resolve(&self, key: KeyEvent) -> Action {
        let binding = KeyBinding::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&binding) {
            return action.clone();
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }
        dom_key_code(key.code).map(Action::Key).unwrap_or(Action::None)
    }
}

/// Browser `keyCode` for a terminal key
pub fn dom_key_code(code: KeyCode) -> Option<u16> {
    let code = match code {
        KeyCode::Backspace => 8,
        KeyCode::Tab => 9,
        KeyCode::Enter => 13,
        KeyCode::Esc => 27,
        KeyCode::PageUp => 33,
        KeyCode::PageDown => 34,
        KeyCode::End => 35,
        KeyCode::Home => 36,
        KeyCode::Left => 37,
        KeyCode::Up => 38,
        KeyCode::Right => 39,
        KeyCode::Down => 40,
        KeyCode::Insert => 45,
        KeyCode::Delete => 46,
        KeyCode::F(n @ 1..=12) => 111 + u16::from(n),
        KeyCode::Char(' ') => 32,
        KeyCode::Char(c) if c.is_ascii_digit() => c as u16,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase() as u16,
        _ => return None,
    };
    Some(code)
}

/// Short label for a key code, used in the status bar hint
pub fn key_label(code: u16) -> String {
    match code {
        13 => "enter".to_string(),
        27 => "esc".to_string(),
        32 => "space".to_string(),
        37 => "←".to_string(),
        38 => "↑".to_string(),
        39 => "→".to_string(),
        40 => "↓".to_string(),
        48..=57 | 65..=90 => char::from(code as u8).to_ascii_lowercase().to_string(),
        other => format!("#{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidereel_core::config::KeyCodes;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dom_key_codes() {
        assert_eq!(dom_key_code(KeyCode::Left), Some(37));
        assert_eq!(dom_key_code(KeyCode::Right), Some(39));
        assert_eq!(dom_key_code(KeyCode::Char('a')), Some(65));
        assert_eq!(dom_key_code(KeyCode::Char('Z')), Some(90));
        assert_eq!(dom_key_code(KeyCode::Char('7')), Some(55));
        assert_eq!(dom_key_code(KeyCode::F(1)), Some(112));
        assert_eq!(dom_key_code(KeyCode::Char('é')), None);
    }

    #[test]
    fn test_app_bindings_take_precedence() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            keymap.resolve(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(keymap.resolve(press(KeyCode::Char('3'))), Action::Goto(2));
        assert_eq!(keymap.resolve(press(KeyCode::Char('s'))), Action::ToggleStepByStep);
    }

    #[test]
    fn test_other_keys_forward_key_codes() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(press(KeyCode::Right)), Action::Key(39));
        assert_eq!(keymap.resolve(press(KeyCode::Char('l'))), Action::Key(76));
        assert_eq!(
            keymap.resolve(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Action::None
        );
    }

    #[test]
    fn test_conflicting_configuration_still_builds() {
        let config = SliderConfig {
            next_key: KeyCodes::Many(vec![39, 81]),
            ..SliderConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        // 'q' keeps quitting
        assert_eq!(keymap.resolve(press(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(key_label(39), "→");
        assert_eq!(key_label(76), "l");
        assert_eq!(key_label(200), "#200");
    }
}
