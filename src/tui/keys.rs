use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }
    
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Application-level key mappings, checked before dialogs see a key
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Abort the whole dialog flow
    pub interrupt: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            interrupt: KeyBinding::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                "Abort without answering"
            ),
        }
    }
}

impl KeyMap {
    /// Check if the event should abort the running flow
    pub fn should_interrupt(&self, event: &KeyEvent) -> bool {
        self.interrupt.matches(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_requires_control() {
        let keys = KeyMap::default();
        assert!(keys.should_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!keys.should_interrupt(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
