//! Frame orchestrator: one pass per display frame over
//! sample → fuse → tick → pull → render.

use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, TouchPhase, Vec2};
use tracing::warn;

use crate::config::ControlBindings;
use crate::input::gamepad::{AnalogPad, GamepadSampler};
use crate::input::{Axis, ControlQuery, FusionEngine, InputState};
use crate::render::{Compass, FpsSampler, StarPool};
use crate::universe::Universe;

const COMPASS_CENTER: Pos2 = Pos2::new(100.0, 75.0);
const FPS_LABEL_POS: Pos2 = Pos2::new(20.0, 10.0);
const HEADING_LABEL_POS: Pos2 = Pos2::new(20.0, 150.0);
const LABEL_SIZE: f32 = 20.0;

/// The four per-axis queries issued every frame. `lo`/`hi` encode each
/// axis's sign convention, so several pairs are inverted on purpose.
fn frame_queries() -> [ControlQuery; 4] {
    [
        ControlQuery {
            axis: Axis::Roll,
            lo: 0.05,
            hi: -0.05,
            normal: 0.0,
        },
        ControlQuery {
            axis: Axis::Pitch,
            lo: 0.05,
            hi: -0.05,
            normal: 0.0,
        },
        ControlQuery {
            axis: Axis::Yaw,
            lo: -0.05,
            hi: 0.05,
            normal: 0.0,
        },
        ControlQuery {
            axis: Axis::Speed,
            lo: -40.0,
            hi: 40.0,
            normal: 2.0,
        },
    ]
}

/// Fuses every control axis and forwards the results to the simulation's
/// velocity and thrust setters.
fn dispatch_controls(
    engine: &FusionEngine,
    input: &InputState,
    pad: Option<&dyn AnalogPad>,
    universe: &mut dyn Universe,
) {
    for query in frame_queries() {
        let value = engine.fuse(&query, input, pad);
        match query.axis {
            Axis::Pitch => universe.set_pitch_velocity(value),
            Axis::Yaw => universe.set_yaw_velocity(value),
            Axis::Roll => universe.set_roll_velocity(value),
            Axis::Speed => universe.set_thrust(value),
        }
    }
}

/// The per-frame visualization loop over an opaque universe simulation.
pub struct StarflightApp {
    universe: Box<dyn Universe>,
    engine: FusionEngine,
    input: InputState,
    gamepad: Option<GamepadSampler>,
    stars: StarPool,
    compass: Compass,
    fps: FpsSampler,
    star_buffer: Vec<f32>,
    last_frame: Instant,
    viewport: Vec2,
}

impl StarflightApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        universe: Box<dyn Universe>,
        bindings: ControlBindings,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        // A missing gamepad backend is a runtime condition, not a
        // configuration bug: run on without analog input.
        let gamepad = match GamepadSampler::new() {
            Ok(sampler) => Some(sampler),
            Err(e) => {
                warn!("gamepad backend unavailable: {}", e);
                None
            }
        };
        let now = Instant::now();
        Self {
            universe,
            engine: FusionEngine::new(bindings),
            input: InputState::new(),
            gamepad,
            stars: StarPool::new(),
            compass: Compass::new(),
            fps: FpsSampler::new(now),
            star_buffer: Vec::new(),
            last_frame: now,
            viewport: Vec2::ZERO,
        }
    }

    /// Feeds this frame's egui key and touch events into the input state.
    fn sample_events(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            for event in &i.events {
                match event {
                    egui::Event::Key { key, pressed, .. } => {
                        self.input.key_event(key.name(), *pressed);
                    }
                    egui::Event::Touch { id, phase, pos, .. } => match phase {
                        TouchPhase::Start => self.input.touch_start(id.0, *pos),
                        TouchPhase::Move => self.input.touch_move(id.0, *pos),
                        TouchPhase::End | TouchPhase::Cancel => self.input.touch_clear(),
                    },
                    _ => {}
                }
            }
            // Modifiers never arrive as key events, so shift is synced from
            // the modifier state instead.
            self.input.key_event("shift", i.modifiers.shift);
        });
    }
}

impl eframe::App for StarflightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.sample_events(ctx);
        if let Some(sampler) = &mut self.gamepad {
            sampler.poll();
        }

        // Resize lands in full before the tick below ever runs.
        let size = ctx.screen_rect().size();
        if size != self.viewport {
            self.universe.set_size(size.x, size.y);
            self.viewport = size;
        }

        let pad = self.gamepad.as_ref().and_then(|sampler| sampler.active_pad());
        dispatch_controls(
            &self.engine,
            &self.input,
            pad.as_ref().map(|p| p as &dyn AnalogPad),
            self.universe.as_mut(),
        );

        self.universe.tick(delta);

        let count = self.universe.count_stars();
        self.star_buffer.resize(count * 3, 0.0);
        let projected = self.universe.project_stars(&mut self.star_buffer);
        self.stars.reconcile(projected, &self.star_buffer);

        let mut basis = [0.0f32; 9];
        self.universe.camera_vectors(&mut basis);
        self.compass.set_basis(&basis);

        self.fps.tick();
        self.fps.advance(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let painter = ui.painter();
                self.stars.paint(painter);
                self.compass.paint(painter, COMPASS_CENTER);

                let fps_text = match self.fps.rate() {
                    Some(rate) => format!("FPS: {:.0}", rate),
                    None => "FPS: Unknown".to_string(),
                };
                painter.text(
                    FPS_LABEL_POS,
                    Align2::LEFT_TOP,
                    fps_text,
                    FontId::proportional(LABEL_SIZE),
                    Color32::WHITE,
                );
                painter.text(
                    HEADING_LABEL_POS,
                    Align2::LEFT_TOP,
                    format!("Direction: {}", self.compass.heading()),
                    FontId::proportional(LABEL_SIZE),
                    Color32::WHITE,
                );
            });

        // Animation loop: repaint as fast as the host allows.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlMappings;
    use egui::pos2;

    /// Universe double that records whatever the setters receive.
    #[derive(Default)]
    struct RecordingUniverse {
        pitch: Option<f32>,
        yaw: Option<f32>,
        roll: Option<f32>,
        thrust: Option<f32>,
    }

    impl Universe for RecordingUniverse {
        fn tick(&mut self, _delta: f32) {}

        fn count_stars(&self) -> usize {
            0
        }

        fn project_stars(&mut self, _buffer: &mut [f32]) -> usize {
            0
        }

        fn camera_vectors(&self, _out: &mut [f32; 9]) {}

        fn set_size(&mut self, _width: f32, _height: f32) {}

        fn set_pitch_velocity(&mut self, value: f32) {
            self.pitch = Some(value);
        }

        fn set_yaw_velocity(&mut self, value: f32) {
            self.yaw = Some(value);
        }

        fn set_roll_velocity(&mut self, value: f32) {
            self.roll = Some(value);
        }

        fn set_thrust(&mut self, value: f32) {
            self.thrust = Some(value);
        }
    }

    fn engine() -> FusionEngine {
        let bindings = ControlMappings::default_config()
            .resolve()
            .expect("default mappings must resolve");
        FusionEngine::new(bindings)
    }

    #[test]
    fn idle_frame_sends_every_resting_value() {
        let engine = engine();
        let input = InputState::new();
        let mut universe = RecordingUniverse::default();
        dispatch_controls(&engine, &input, None, &mut universe);
        assert_eq!(universe.pitch, Some(0.0));
        assert_eq!(universe.yaw, Some(0.0));
        assert_eq!(universe.roll, Some(0.0));
        assert_eq!(universe.thrust, Some(2.0));
    }

    #[test]
    fn half_range_drag_moves_pitch_halfway_to_lo() {
        let engine = engine();
        let mut input = InputState::new();
        input.touch_start(7, pos2(300.0, 100.0));
        input.touch_move(7, pos2(300.0, 600.0));
        let mut universe = RecordingUniverse::default();
        dispatch_controls(&engine, &input, None, &mut universe);
        // Pitch: normal + (lo - normal) * 0.5 with lo = 0.05.
        let pitch = universe.pitch.expect("pitch set");
        assert!((pitch - 0.025).abs() < 1e-6);
        // The other axes stay at rest.
        assert_eq!(universe.yaw, Some(0.0));
        assert_eq!(universe.thrust, Some(2.0));
    }
}
