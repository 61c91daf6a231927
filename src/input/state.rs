//! Live keyboard and touch state fed by platform input events.

use egui::Pos2;
use std::collections::HashSet;
use tracing::debug;

/// Maximum number of simultaneously tracked touch contacts.
pub const MAX_TOUCH_POINTS: usize = 2;

/// A single tracked touch contact.
///
/// `id` and `start` are fixed for the life of the contact; only `last`
/// moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub start: Pos2,
    pub last: Pos2,
}

/// Per-frame snapshot of pressed keys and active touch contacts.
///
/// Constructed once at startup and mutated only through the event entry
/// points below; everything else reads it immutably. Key names are stored
/// lowercase and the last event wins.
#[derive(Debug, Default)]
pub struct InputState {
    keys: HashSet<String>,
    touches: Vec<TouchPoint>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key transition. Names are lowercased on the way in so they
    /// match the mapping table regardless of how the platform reports them.
    pub fn key_event(&mut self, name: &str, pressed: bool) {
        let name = name.to_lowercase();
        if pressed {
            self.keys.insert(name);
        } else {
            self.keys.remove(&name);
        }
    }

    pub fn is_pressed(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    /// Registers a new touch contact. Contacts beyond the tracking limit are
    /// dropped, not queued.
    pub fn touch_start(&mut self, id: u64, pos: Pos2) {
        if self.touches.len() >= MAX_TOUCH_POINTS {
            debug!("ignoring touch {}, already tracking {}", id, MAX_TOUCH_POINTS);
            return;
        }
        self.touches.push(TouchPoint {
            id,
            start: pos,
            last: pos,
        });
    }

    /// Moves the contact with a matching id; unknown ids are ignored.
    pub fn touch_move(&mut self, id: u64, pos: Pos2) {
        if let Some(point) = self.touches.iter_mut().find(|p| p.id == id) {
            point.last = pos;
        }
    }

    /// Drops every tracked contact.
    ///
    /// Any end or cancel clears the whole set rather than just the contact
    /// that lifted. Removing a single point would leave a stale partner in
    /// the rotation-gesture math, so the coarser rule is kept on purpose at
    /// the cost of independent multi-touch lifecycles.
    pub fn touch_clear(&mut self) {
        self.touches.clear();
    }

    pub fn touches(&self) -> &[TouchPoint] {
        &self.touches
    }
}
