use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::input::MoveKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement keys to key codes.
pub struct KeybindingOptions {
    /// Maps movement → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveKey, String>,
    /// Reverse lookup cache (key string → movement). Rebuilt on load.
    #[serde(skip)]
    key_to_move: HashMap<String, MoveKey>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MoveKey::Forward, "KeyW".into()),
            (MoveKey::Backward, "KeyS".into()),
            (MoveKey::Left, "KeyA".into()),
            (MoveKey::Right, "KeyD".into()),
            (MoveKey::Up, "Space".into()),
            (MoveKey::Down, "ShiftLeft".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_move: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → movement).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_move.clear();
        for (key, code) in &self.bindings {
            let _ = self.key_to_move.insert(code.clone(), *key);
        }
    }

    /// Look up the movement key for a key string.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<MoveKey> {
        self.key_to_move.get(code).copied()
    }
}
