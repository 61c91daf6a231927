//! Projects the camera basis into a small axis indicator and a dominant
//! heading label.

use egui::{Color32, Painter, Pos2, Stroke};
use std::cmp::Ordering;

/// Length of a compass arm in screen units.
pub const ARM_LENGTH: f32 = 50.0;

const ARM_WIDTH: f32 = 5.0;
const COLOR_X: Color32 = Color32::from_rgb(0xFF, 0x7F, 0x7F);
const COLOR_Y: Color32 = Color32::from_rgb(0x7F, 0xFF, 0x7F);
const COLOR_Z: Color32 = Color32::from_rgb(0x7F, 0x7F, 0xFF);

/// Camera orientation as three basis vectors in simulation space.
///
/// The simulation hands the basis over as 9 floats with component `i` of
/// vector `j` at flat index `j + 3 * i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraBasis {
    pub right: [f32; 3],
    pub up: [f32; 3],
    pub forward: [f32; 3],
}

impl CameraBasis {
    pub fn from_flat(v: &[f32; 9]) -> Self {
        Self {
            right: [v[0], v[3], v[6]],
            up: [v[1], v[4], v[7]],
            forward: [v[2], v[5], v[8]],
        }
    }
}

/// Orientation compass over the most recently pulled camera basis.
#[derive(Debug, Default)]
pub struct Compass {
    basis: CameraBasis,
}

impl Compass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_basis(&mut self, flat: &[f32; 9]) {
        self.basis = CameraBasis::from_flat(flat);
    }

    /// Names the direction the camera is mostly facing.
    ///
    /// Picks the forward component with the greatest magnitude. The
    /// strictly-greater scan keeps the lowest index on ties and leaves an
    /// all-zero vector unresolved.
    pub fn heading(&self) -> &'static str {
        let mut max = 0.0f32;
        let mut max_index = None;
        for (index, component) in self.basis.forward.iter().enumerate() {
            if component.abs() > max.abs() {
                max = *component;
                max_index = Some(index);
            }
        }
        let positive = max > 0.0;
        match max_index {
            Some(0) if positive => "Right (X+)",
            Some(0) => "Left (X-)",
            Some(1) if positive => "Up (Y+)",
            Some(1) => "Down (Y-)",
            Some(2) if positive => "Forward (Z+)",
            Some(2) => "Backwards (Z-)",
            _ => "Unknown",
        }
    }

    /// Draws the three axis arms around `center`.
    ///
    /// Arms are sorted descending by their raw z component, so the one
    /// pointing most toward the viewer is painted last and lands on top.
    /// Each arm is the vector's screen-plane part scaled to [`ARM_LENGTH`],
    /// with y negated because screen y grows downward.
    pub fn paint(&self, painter: &Painter, center: Pos2) {
        for (vector, color) in self.draw_order() {
            let tip = center + egui::vec2(vector[0], -vector[1]) * ARM_LENGTH;
            painter.line_segment([center, tip], Stroke::new(ARM_WIDTH, color));
        }
    }

    fn draw_order(&self) -> [([f32; 3], Color32); 3] {
        let mut arms = [
            (self.basis.right, COLOR_X),
            (self.basis.up, COLOR_Y),
            (self.basis.forward, COLOR_Z),
        ];
        arms.sort_by(|a, b| b.0[2].partial_cmp(&a.0[2]).unwrap_or(Ordering::Equal));
        arms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compass_with_forward(forward: [f32; 3]) -> Compass {
        let mut compass = Compass::new();
        // Flat layout: forward components sit at indices 2, 5, 8.
        let flat = [
            1.0, 0.0, forward[0], //
            0.0, 1.0, forward[1], //
            0.0, 0.0, forward[2],
        ];
        compass.set_basis(&flat);
        compass
    }

    #[test]
    fn from_flat_unpacks_interleaved_vectors() {
        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let basis = CameraBasis::from_flat(&flat);
        assert_eq!(basis.right, [0.0, 3.0, 6.0]);
        assert_eq!(basis.up, [1.0, 4.0, 7.0]);
        assert_eq!(basis.forward, [2.0, 5.0, 8.0]);
    }

    #[test]
    fn heading_names_the_dominant_forward_component() {
        assert_eq!(compass_with_forward([0.0, 0.0, 1.0]).heading(), "Forward (Z+)");
        assert_eq!(
            compass_with_forward([0.0, 0.0, -1.0]).heading(),
            "Backwards (Z-)"
        );
        assert_eq!(compass_with_forward([0.9, 0.1, 0.2]).heading(), "Right (X+)");
        assert_eq!(compass_with_forward([-0.9, 0.1, 0.2]).heading(), "Left (X-)");
        assert_eq!(compass_with_forward([0.1, 0.8, 0.2]).heading(), "Up (Y+)");
        assert_eq!(compass_with_forward([0.1, -0.8, 0.2]).heading(), "Down (Y-)");
    }

    #[test]
    fn heading_of_zero_vector_is_unknown() {
        assert_eq!(compass_with_forward([0.0, 0.0, 0.0]).heading(), "Unknown");
    }

    #[test]
    fn heading_tie_keeps_the_lowest_index() {
        assert_eq!(compass_with_forward([0.7, 0.7, 0.7]).heading(), "Right (X+)");
        assert_eq!(compass_with_forward([-0.7, 0.7, 0.7]).heading(), "Left (X-)");
    }

    #[test]
    fn arms_are_sorted_descending_by_raw_z() {
        let mut compass = Compass::new();
        // right z = 6, up z = 7, forward z = 8 in this layout.
        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        compass.set_basis(&flat);
        let order = compass.draw_order();
        assert_eq!(order[0].1, COLOR_Z);
        assert_eq!(order[1].1, COLOR_Y);
        assert_eq!(order[2].1, COLOR_X);
    }
}
