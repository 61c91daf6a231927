//! Derives continuous gesture strengths from tracked touch contacts.

use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::input::state::TouchPoint;

/// Drag distance in screen units that saturates a drag gesture at ±1.
pub const DRAG_RANGE: f32 = 1000.0;

/// Semantic touch gestures an axis can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// One-finger vertical drag; dragging up is positive.
    DragVert,
    /// One-finger horizontal drag; dragging right is positive.
    DragHoriz,
    /// Two-finger twist; counter-clockwise is positive.
    Rotate,
    /// Reserved two-finger pan. Always neutral.
    Plane,
}

/// Derives a strength in [-1, 1] from the tracked touch contacts.
///
/// A gesture evaluated with the wrong number of contacts yields 0 rather
/// than an error; one neutral frame beats interrupting the loop.
pub fn gesture_strength(points: &[TouchPoint], gesture: Gesture) -> f32 {
    match gesture {
        Gesture::DragVert if points.len() == 1 => {
            // Screen y grows downward, so the sign flips.
            -((points[0].last.y - points[0].start.y) / DRAG_RANGE).clamp(-1.0, 1.0)
        }
        Gesture::DragHoriz if points.len() == 1 => {
            ((points[0].last.x - points[0].start.x) / DRAG_RANGE).clamp(-1.0, 1.0)
        }
        Gesture::Rotate if points.len() == 2 => rotation_strength(&points[0], &points[1]),
        _ => 0.0,
    }
}

fn rotation_strength(a: &TouchPoint, b: &TouchPoint) -> f32 {
    let mut start = b.start - a.start;
    let mut now = b.last - a.last;
    // Canonicalize the pair so the sign does not depend on which finger
    // touched first.
    if start.x < 0.0 {
        start = -start;
        now = -now;
    }
    let turned = wrap_angle(angle_of(now) - angle_of(start));
    -(turned * 2.0 / PI).clamp(-1.0, 1.0)
}

fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Wraps an angle into (-PI, PI].
fn wrap_angle(mut angle: f32) -> f32 {
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle <= -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn point(id: u64, start: (f32, f32), last: (f32, f32)) -> TouchPoint {
        TouchPoint {
            id,
            start: pos2(start.0, start.1),
            last: pos2(last.0, last.1),
        }
    }

    #[test]
    fn vertical_drag_is_inverted_and_scaled() {
        // 500 px down is halfway to saturation, toward negative.
        let points = [point(1, (100.0, 100.0), (100.0, 600.0))];
        let s = gesture_strength(&points, Gesture::DragVert);
        assert!((s + 0.5).abs() < 1e-6);
    }

    #[test]
    fn drag_is_monotonic_and_saturates() {
        let mut previous = 0.0;
        for distance in [100.0, 400.0, 800.0, 1000.0, 2500.0] {
            let points = [point(1, (0.0, 0.0), (distance, 0.0))];
            let s = gesture_strength(&points, Gesture::DragHoriz);
            assert!(s >= previous);
            previous = s;
        }
        assert!((previous - 1.0).abs() < 1e-6);
    }

    #[test]
    fn drag_with_two_contacts_is_neutral() {
        let points = [
            point(1, (0.0, 0.0), (300.0, 0.0)),
            point(2, (50.0, 0.0), (350.0, 0.0)),
        ];
        assert_eq!(gesture_strength(&points, Gesture::DragHoriz), 0.0);
        assert_eq!(gesture_strength(&points, Gesture::DragVert), 0.0);
    }

    #[test]
    fn rotate_without_rotation_is_zero() {
        let points = [
            point(1, (0.0, 0.0), (20.0, 20.0)),
            point(2, (100.0, 0.0), (120.0, 20.0)),
        ];
        assert_eq!(gesture_strength(&points, Gesture::Rotate), 0.0);
    }

    #[test]
    fn rotate_sign_is_independent_of_finger_order() {
        // Second contact swings downward around the first: a quarter turn.
        let forward = [
            point(1, (0.0, 0.0), (0.0, 0.0)),
            point(2, (100.0, 0.0), (0.0, 100.0)),
        ];
        let reversed = [forward[1], forward[0]];
        let a = gesture_strength(&forward, Gesture::Rotate);
        let b = gesture_strength(&reversed, Gesture::Rotate);
        assert!((a - b).abs() < 1e-6);
        // Quarter turn scaled by 2/PI saturates the output.
        assert!((a.abs() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_with_one_contact_is_neutral() {
        let points = [point(1, (0.0, 0.0), (100.0, 0.0))];
        assert_eq!(gesture_strength(&points, Gesture::Rotate), 0.0);
    }

    #[test]
    fn plane_is_always_neutral() {
        let points = [
            point(1, (0.0, 0.0), (300.0, 100.0)),
            point(2, (50.0, 0.0), (350.0, 100.0)),
        ];
        assert_eq!(gesture_strength(&points, Gesture::Plane), 0.0);
    }
}
