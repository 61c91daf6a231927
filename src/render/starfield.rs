//! Reusable pool of star sprites reconciled against the simulation's
//! projected star buffer.

use egui::{Color32, Painter, Pos2};

/// Sprite radius at scale 1.0, in screen units.
const BASE_RADIUS: f32 = 50.0;

/// One reusable star renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    id: u64,
    scale: f32,
    pos: Pos2,
}

impl StarSprite {
    /// Creation id, stable for the life of the sprite.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }
}

/// Arena of star sprites sized to the projected star count each frame.
///
/// Reconciliation reuses sprites by index, so a roughly stable star count
/// allocates nothing frame to frame.
#[derive(Debug, Default)]
pub struct StarPool {
    sprites: Vec<StarSprite>,
    next_id: u64,
}

impl StarPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes the pool to `count` sprites and applies the packed
    /// `{scale, x, y}` triples from `positions`.
    ///
    /// Indices that survive the resize keep their sprite; excess trailing
    /// sprites are dropped and missing ones created. A buffer shorter than
    /// `3 * count` positions only the prefix it covers.
    pub fn reconcile(&mut self, count: usize, positions: &[f32]) {
        if self.sprites.len() > count {
            self.sprites.truncate(count);
        }
        while self.sprites.len() < count {
            self.sprites.push(StarSprite {
                id: self.next_id,
                scale: 0.0,
                pos: Pos2::ZERO,
            });
            self.next_id += 1;
        }
        for (sprite, triple) in self.sprites.iter_mut().zip(positions.chunks_exact(3)) {
            sprite.scale = triple[0];
            sprite.pos = Pos2::new(triple[1], triple[2]);
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn sprites(&self) -> &[StarSprite] {
        &self.sprites
    }

    pub fn paint(&self, painter: &Painter) {
        for sprite in &self.sprites {
            painter.circle_filled(sprite.pos, BASE_RADIUS * sprite.scale, Color32::WHITE);
        }
    }
}
