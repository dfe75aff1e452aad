//! Keyboard chord types and the default keymap.
//!
//! Hosts translate their own input events into [`KeyChord`] values; the
//! keymap only compares chords, it never sees raw scan codes.

use serde::{Deserialize, Serialize};

use crate::PlaygroundCommand;
use core::fmt;

/// Platform-independent key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Return / Enter
    Enter,
    /// A printable character, stored lowercase
    Char(char),
}

impl KeyCode {
    fn normalized(self) -> Self {
        match self {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}

/// Modifier key set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    /// Control
    pub const CTRL: Modifiers = Modifiers { bits: 0b001 };
    /// Shift
    pub const SHIFT: Modifiers = Modifiers { bits: 0b010 };
    /// Alt / Option
    pub const ALT: Modifiers = Modifiers { bits: 0b100 };

    /// No modifiers held
    pub fn none() -> Self {
        Self { bits: 0 }
    }

    /// Combines two modifier sets
    pub fn with(self, other: Modifiers) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks whether all of `other`'s modifiers are held
    pub fn contains(&self, other: Modifiers) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks if Ctrl is held
    pub fn is_ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Checks if Shift is held
    pub fn is_shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Checks if Alt is held
    pub fn is_alt(&self) -> bool {
        self.contains(Self::ALT)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.is_ctrl() {
            parts.push("Ctrl");
        }
        if self.is_shift() {
            parts.push("Shift");
        }
        if self.is_alt() {
            parts.push("Alt");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// One keyboard combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyChord {
    /// The non-modifier key
    pub code: KeyCode,
    /// Modifiers held with it
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// Creates a chord; character codes are normalized to lowercase
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code: code.normalized(),
            modifiers,
        }
    }
}

/// Chord-to-command bindings
pub struct Keymap {
    bindings: Vec<(KeyChord, PlaygroundCommand)>,
}

impl Keymap {
    /// Creates an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Adds a binding; later bindings shadow earlier ones for the same chord
    pub fn bind(&mut self, chord: KeyChord, command: PlaygroundCommand) {
        self.bindings.insert(0, (chord, command));
    }

    /// Resolves a chord to its bound command
    pub fn lookup(&self, chord: &KeyChord) -> Option<PlaygroundCommand> {
        let normalized = KeyChord::new(chord.code, chord.modifiers);
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == normalized)
            .map(|(_, command)| command.clone())
    }
}

impl Default for Keymap {
    /// The playground bindings: Ctrl+Enter compiles, Ctrl+K clears the
    /// output, Ctrl+Shift+S checks syntax, Ctrl+Shift+A shows the AST
    fn default() -> Self {
        let mut keymap = Self::new();
        keymap.bind(
            KeyChord::new(KeyCode::Enter, Modifiers::CTRL),
            PlaygroundCommand::Compile,
        );
        keymap.bind(
            KeyChord::new(KeyCode::Char('k'), Modifiers::CTRL),
            PlaygroundCommand::ClearOutput,
        );
        keymap.bind(
            KeyChord::new(KeyCode::Char('s'), Modifiers::CTRL.with(Modifiers::SHIFT)),
            PlaygroundCommand::CheckSyntax,
        );
        keymap.bind(
            KeyChord::new(KeyCode::Char('a'), Modifiers::CTRL.with(Modifiers::SHIFT)),
            PlaygroundCommand::ShowAst,
        );
        keymap
    }
}
