//! Pointer-driven tilt math for the parallax card.

/// Rotation applied to the card, in degrees per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

/// Pose when the pointer is outside the card.
pub const REST: Tilt = Tilt { x: 15.0, y: 15.0 };

/// Largest rotation in either direction.
pub const MAX_DEGREES: f64 = 20.0;

/// Map a pointer position inside a `width` x `height` card to a tilt.
/// The full card span covers `-MAX_DEGREES..=MAX_DEGREES` on both axes;
/// vertical pointer movement drives the X rotation and vice versa.
#[must_use]
pub fn tilt_for_pointer(px: f64, py: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return REST;
    }
    let span = MAX_DEGREES * 2.0;
    Tilt {
        x: (py / height).clamp(0.0, 1.0) * span - MAX_DEGREES,
        y: (px / width).clamp(0.0, 1.0) * span - MAX_DEGREES,
    }
}
