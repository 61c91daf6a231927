//! Minimal built-in universe so the shipped binary exercises the whole
//! loop: a fixed pseudo-random star cloud, a camera basis integrated from
//! the velocity setters, and a plain perspective projection. It stands in
//! for a real simulation backend and models no physics beyond that.

use crate::universe::Universe;

const STAR_COUNT: usize = 400;
/// Edge length of the wrapping star field cube.
const FIELD_SIZE: f32 = 2000.0;
const FOV_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 1.0;
/// Projected sprite scale is this over camera-space depth.
const SCALE_NUMERATOR: f32 = 60.0;
const MAX_SCALE: f32 = 0.5;
/// The velocity constants fed by the controls are tuned per 60 Hz frame.
const TICKS_PER_SECOND: f32 = 60.0;

/// Built-in demo universe.
pub struct DriftUniverse {
    stars: Vec<[f32; 3]>,
    right: [f32; 3],
    up: [f32; 3],
    forward: [f32; 3],
    position: [f32; 3],
    pitch_vel: f32,
    yaw_vel: f32,
    roll_vel: f32,
    thrust: f32,
    width: f32,
    height: f32,
}

impl DriftUniverse {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            stars: star_cloud(),
            right: [1.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            forward: [0.0, 0.0, 1.0],
            position: [0.0, 0.0, 0.0],
            pitch_vel: 0.0,
            yaw_vel: 0.0,
            roll_vel: 0.0,
            thrust: 0.0,
            width,
            height,
        }
    }

    fn focal_length(&self) -> f32 {
        let half_fov = FOV_DEGREES.to_radians() / 2.0;
        self.width.min(self.height) / (2.0 * half_fov.tan())
    }

    /// Star position relative to the camera, wrapped into the field cube so
    /// flight never leaves the cloud behind.
    fn relative(&self, star: &[f32; 3]) -> [f32; 3] {
        let mut rel = [0.0f32; 3];
        for i in 0..3 {
            let half = FIELD_SIZE / 2.0;
            rel[i] = (star[i] - self.position[i] + half).rem_euclid(FIELD_SIZE) - half;
        }
        rel
    }
}

impl Universe for DriftUniverse {
    fn tick(&mut self, delta: f32) {
        let dt = delta * TICKS_PER_SECOND;
        // Each rotation turns one basis pair in its own plane, which keeps
        // the basis orthonormal without explicit re-normalization.
        rotate_pair(&mut self.forward, &mut self.up, self.pitch_vel * dt);
        rotate_pair(&mut self.forward, &mut self.right, self.yaw_vel * dt);
        rotate_pair(&mut self.right, &mut self.up, self.roll_vel * dt);
        for i in 0..3 {
            self.position[i] += self.forward[i] * self.thrust * dt;
        }
    }

    fn count_stars(&self) -> usize {
        self.stars.len()
    }

    fn project_stars(&mut self, buffer: &mut [f32]) -> usize {
        let focal = self.focal_length();
        let mut written = 0;
        for star in &self.stars {
            if (written + 1) * 3 > buffer.len() {
                break;
            }
            let rel = self.relative(star);
            let depth = dot(&rel, &self.forward);
            if depth <= NEAR_PLANE {
                continue;
            }
            let x = self.width / 2.0 + dot(&rel, &self.right) * focal / depth;
            let y = self.height / 2.0 - dot(&rel, &self.up) * focal / depth;
            if x < 0.0 || x >= self.width || y < 0.0 || y >= self.height {
                continue;
            }
            let offset = written * 3;
            buffer[offset] = (SCALE_NUMERATOR / depth).min(MAX_SCALE);
            buffer[offset + 1] = x;
            buffer[offset + 2] = y;
            written += 1;
        }
        written
    }

    fn camera_vectors(&self, out: &mut [f32; 9]) {
        for i in 0..3 {
            out[3 * i] = self.right[i];
            out[3 * i + 1] = self.up[i];
            out[3 * i + 2] = self.forward[i];
        }
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn set_pitch_velocity(&mut self, value: f32) {
        self.pitch_vel = value;
    }

    fn set_yaw_velocity(&mut self, value: f32) {
        self.yaw_vel = value;
    }

    fn set_roll_velocity(&mut self, value: f32) {
        self.roll_vel = value;
    }

    fn set_thrust(&mut self, value: f32) {
        self.thrust = value;
    }
}

/// Rotates `a` toward `b` by `angle` in the plane the two vectors span.
fn rotate_pair(a: &mut [f32; 3], b: &mut [f32; 3], angle: f32) {
    let (sin, cos) = angle.sin_cos();
    for i in 0..3 {
        let (av, bv) = (a[i], b[i]);
        a[i] = av * cos + bv * sin;
        b[i] = bv * cos - av * sin;
    }
}

fn dot(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Deterministic star cloud from a small multiplicative congruential
/// generator; good enough for scenery.
fn star_cloud() -> Vec<[f32; 3]> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((seed >> 33) as f32 / (1u64 << 31) as f32 - 0.5) * FIELD_SIZE
    };
    (0..STAR_COUNT)
        .map(|_| [next(), next(), next()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_basis_reads_back_interleaved() {
        let universe = DriftUniverse::new(800.0, 600.0);
        let mut out = [0.0f32; 9];
        universe.camera_vectors(&mut out);
        assert_eq!(out, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rotation_keeps_the_basis_orthonormal() {
        let mut universe = DriftUniverse::new(800.0, 600.0);
        universe.set_pitch_velocity(0.05);
        universe.set_yaw_velocity(0.03);
        universe.set_roll_velocity(-0.02);
        for _ in 0..600 {
            universe.tick(1.0 / 60.0);
        }
        let mut out = [0.0f32; 9];
        universe.camera_vectors(&mut out);
        let right = [out[0], out[3], out[6]];
        let up = [out[1], out[4], out[7]];
        let forward = [out[2], out[5], out[8]];
        assert!((dot(&right, &right) - 1.0).abs() < 1e-3);
        assert!((dot(&up, &up) - 1.0).abs() < 1e-3);
        assert!((dot(&forward, &forward) - 1.0).abs() < 1e-3);
        assert!(dot(&right, &up).abs() < 1e-3);
        assert!(dot(&right, &forward).abs() < 1e-3);
    }

    #[test]
    fn projection_never_exceeds_the_buffer_or_the_count() {
        let mut universe = DriftUniverse::new(800.0, 600.0);
        let count = universe.count_stars();
        let mut buffer = vec![0.0f32; count * 3];
        let projected = universe.project_stars(&mut buffer);
        assert!(projected <= count);

        // A deliberately short buffer caps the projection instead of
        // overrunning.
        let mut short = vec![0.0f32; 9];
        let projected = universe.project_stars(&mut short);
        assert!(projected <= 3);
    }

    #[test]
    fn projected_stars_land_inside_the_viewport() {
        let mut universe = DriftUniverse::new(800.0, 600.0);
        let mut buffer = vec![0.0f32; universe.count_stars() * 3];
        let projected = universe.project_stars(&mut buffer);
        for triple in buffer[..projected * 3].chunks_exact(3) {
            assert!(triple[0] > 0.0 && triple[0] <= MAX_SCALE);
            assert!((0.0..800.0).contains(&triple[1]));
            assert!((0.0..600.0).contains(&triple[2]));
        }
    }
}
