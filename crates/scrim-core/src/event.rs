#![forbid(unsafe_code)]

//! Keyboard event model.
//!
//! Deliberately small: the overlay manager only acts on `Tab` and `Escape`
//! presses, but embedders typically forward their whole keyboard stream, so
//! the vocabulary covers the common keys rather than forcing callers to
//! pre-filter.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    Tab,
    Escape,
    Enter,
    Up,
    Down,
    Left,
    Right,
    Char(char),
}

/// Whether a key event is a press or a release.
///
/// Only presses carry semantics here; releases are accepted and ignored so
/// hosts that report both do not need to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A keyboard event as delivered by the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain key press with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// A key press with Shift held.
    #[must_use]
    pub const fn shift_press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::SHIFT,
            kind: KeyEventKind::Press,
        }
    }

    /// Whether this event is a press.
    #[inline]
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == KeyEventKind::Press
    }

    /// Whether Shift is held.
    #[inline]
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}
