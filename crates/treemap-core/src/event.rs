//! Pointer input events consumed by the treemap controller.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Positions are in surface coordinates, i.e. already translated so that
/// (0, 0) is the top-left corner of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer moved to position
    Move {
        /// New position
        position: Point,
    },
    /// Pointer button released
    Release {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
}

impl Event {
    /// Convenience constructor for a move event.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Convenience constructor for a release event.
    #[must_use]
    pub const fn released(x: f32, y: f32, button: MouseButton) -> Self {
        Self::Release {
            position: Point::new(x, y),
            button,
        }
    }

    /// Position the event occurred at.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::Move { position } | Self::Release { position, .. } => *position,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary (usually left) button
    Left,
    /// Secondary (usually right) button
    Right,
    /// Middle button
    Middle,
}

impl MouseButton {
    /// Map a DOM-style button index (0 = primary, 1 = middle, 2 = secondary).
    #[must_use]
    pub const fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        assert_eq!(Event::moved(1.0, 2.0).position(), Point::new(1.0, 2.0));
        assert_eq!(
            Event::released(3.0, 4.0, MouseButton::Right).position(),
            Point::new(3.0, 4.0)
        );
    }

    #[test]
    fn test_mouse_button_from_index() {
        assert_eq!(MouseButton::from_index(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_index(1), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_index(2), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_index(3), None);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::released(10.0, 20.0, MouseButton::Left);
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
