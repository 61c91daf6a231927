//! Contract to the star-field simulation.
//!
//! The simulation is an opaque collaborator: the frame loop drives it
//! through this narrow tick/query surface and never sees its internals.

pub mod drift;

pub use drift::DriftUniverse;

/// Per-frame interface to the simulated universe.
///
/// `project_stars` writes up to `buffer.len() / 3` packed
/// `{scale, screen_x, screen_y}` triples and returns how many stars were
/// actually projected. `camera_vectors` writes the current
/// right/up/forward basis with component `i` of vector `j` at flat index
/// `j + 3 * i`.
pub trait Universe {
    /// Advances the simulation by `delta` seconds of wall-clock time.
    fn tick(&mut self, delta: f32);

    /// Upper bound on the number of stars `project_stars` may emit,
    /// used to size the projection buffer.
    fn count_stars(&self) -> usize;

    fn project_stars(&mut self, buffer: &mut [f32]) -> usize;

    fn camera_vectors(&self, out: &mut [f32; 9]);

    /// Viewport size in screen units. Applied between ticks; the loop never
    /// ticks against a half-applied resize.
    fn set_size(&mut self, width: f32, height: f32);

    fn set_pitch_velocity(&mut self, value: f32);
    fn set_yaw_velocity(&mut self, value: f32);
    fn set_roll_velocity(&mut self, value: f32);
    fn set_thrust(&mut self, value: f32);
}
