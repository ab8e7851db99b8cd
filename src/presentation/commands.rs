use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

/// Maps key events to actions and picks the key shown for each action.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            display_bindings: HashMap::new(),
            input_bindings: Vec::new(),
        };

        let key = KeyEvent::new;
        let none = KeyModifiers::NONE;

        registry.register(Action::Quit, key(KeyCode::Char('q'), none), true);
        registry.register(
            Action::Quit,
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        registry.register(Action::ToggleHelp, key(KeyCode::F(1), none), true);
        registry.register(Action::ToggleHelp, key(KeyCode::Char('?'), none), false);
        registry.register(
            Action::ToggleHelp,
            key(KeyCode::Char('?'), KeyModifiers::SHIFT),
            false,
        );

        registry.register(Action::Back, key(KeyCode::Esc, none), true);
        registry.register(Action::Back, key(KeyCode::Backspace, none), false);
        registry.register(Action::Back, key(KeyCode::Left, none), false);
        registry.register(Action::Back, key(KeyCode::Char('h'), none), false);

        registry.register(Action::Select, key(KeyCode::Enter, none), true);
        registry.register(Action::Select, key(KeyCode::Char(' '), none), false);

        registry.register(Action::NavigateUp, key(KeyCode::Up, none), true);
        registry.register(Action::NavigateUp, key(KeyCode::Char('k'), none), false);
        registry.register(Action::NavigateDown, key(KeyCode::Down, none), true);
        registry.register(Action::NavigateDown, key(KeyCode::Char('j'), none), false);
        registry.register(Action::SelectFirst, key(KeyCode::Home, none), true);
        registry.register(Action::SelectFirst, key(KeyCode::Char('g'), none), false);
        registry.register(Action::SelectLast, key(KeyCode::End, none), true);
        registry.register(
            Action::SelectLast,
            key(KeyCode::Char('G'), KeyModifiers::SHIFT),
            false,
        );

        registry
    }
}

impl CommandRegistry {
    /// Builds the default bindings, then applies user overrides.
    ///
    /// Overrides take precedence over defaults and become the key shown in the
    /// footer. Entries whose key cannot be parsed are skipped.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (spec, action) in entries {
            match parse_key(spec) {
                Some(key) => {
                    registry.input_bindings.retain(|(bound, _)| !same_key(bound, &key));
                    registry.input_bindings.insert(0, (key, *action));
                    registry.display_bindings.insert(*action, key);
                    registry.reassign_display(&key, *action);
                }
                None => warn!(key = %spec, ?action, "Ignoring unparseable keybinding"),
            }
        }

        registry
    }

    /// Moves footer entries of other actions off `key`, which now belongs to `owner`.
    fn reassign_display(&mut self, key: &KeyEvent, owner: Action) {
        let displaced: Vec<Action> = self
            .display_bindings
            .iter()
            .filter(|(action, shown)| **action != owner && same_key(shown, key))
            .map(|(action, _)| *action)
            .collect();

        for action in displaced {
            let fallback = self
                .input_bindings
                .iter()
                .find(|(_, bound)| *bound == action)
                .map(|(key, _)| *key);
            match fallback {
                Some(fallback) => {
                    self.display_bindings.insert(action, fallback);
                }
                None => {
                    self.display_bindings.remove(&action);
                }
            }
        }
    }

    fn register(&mut self, action: Action, key: KeyEvent, is_primary: bool) {
        if is_primary {
            self.display_bindings.insert(action, key);
        }
        self.input_bindings.push((key, action));
    }

    /// Returns the action bound to `key`, ignoring its kind and state.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(bound, _)| same_key(bound, key))
            .map(|(_, action)| *action)
    }

    /// Returns footer entries for `actions`, in the given order.
    #[must_use]
    pub fn keybinds(&self, actions: &[Action]) -> Vec<Keybind> {
        actions
            .iter()
            .filter_map(|action| {
                self.display_bindings
                    .get(action)
                    .map(|key| Keybind::new(*key, *action, action.label()))
            })
            .collect()
    }
}

fn same_key(a: &KeyEvent, b: &KeyEvent) -> bool {
    a.code == b.code && a.modifiers == b.modifiers
}

/// Parses keys written like `Ctrl+q`, `Alt+Enter`, `G` or `F5`.
#[must_use]
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    if spec.trim() == "+" {
        return Some(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE));
    }

    let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
    // "Ctrl++" binds the plus key
    if spec.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let (key_name, modifier_names) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for name in modifier_names {
        modifiers |= match name.to_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let code = match key_name.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" | "bksp" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        lower if lower.len() > 1 && lower.starts_with('f') => {
            KeyCode::F(lower[1..].parse().ok().filter(|n| (1..=12).contains(n))?)
        }
        _ => {
            let mut chars = key_name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if c.is_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}
