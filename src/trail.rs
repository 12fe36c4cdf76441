//! Pointer trail behind the cursor glow.

use std::collections::VecDeque;

use crate::config::TrailConfig;

/// Hard upper bound on recorded samples, whatever the config asks for.
pub const MAX_SAMPLES: usize = 50;

/// One recorded pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Age in 60 Hz frames.
    pub age: f32,
}

/// A radial glow to paint: centre, radius and remaining life in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub life: f32,
}

/// Bounded FIFO of recent pointer samples plus the live cursor position.
#[derive(Debug, Clone)]
pub struct PointerTrail {
    samples: VecDeque<PointerSample>,
    cursor: (f32, f32),
    capacity: usize,
    max_age: f32,
    trail_radius: f32,
    cursor_radius: f32,
}

impl PointerTrail {
    pub fn new(config: &TrailConfig) -> Self {
        let capacity = config.capacity.clamp(1, MAX_SAMPLES);
        Self {
            samples: VecDeque::with_capacity(capacity),
            cursor: (-100.0, -100.0),
            capacity,
            max_age: config.max_age.max(1.0),
            trail_radius: config.trail_radius,
            cursor_radius: config.cursor_radius,
        }
    }

    /// Record a pointer move; the oldest sample goes first once full.
    pub fn push(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(PointerSample { x, y, age: 0.0 });
    }

    /// Age every sample and drop the expired ones.
    pub fn advance(&mut self, steps: f32) {
        let max_age = self.max_age;
        for sample in self.samples.iter_mut() {
            sample.age += steps;
        }
        self.samples.retain(|s| s.age < max_age);
    }

    pub fn glows(&self) -> impl Iterator<Item = Glow> + '_ {
        self.samples.iter().filter_map(move |s| {
            let life = 1.0 - s.age / self.max_age;
            (life > 0.0).then(|| Glow {
                x: s.x,
                y: s.y,
                radius: self.trail_radius * life,
                life,
            })
        })
    }

    pub fn cursor_glow(&self) -> Glow {
        Glow {
            x: self.cursor.0,
            y: self.cursor.1,
            radius: self.cursor_radius,
            life: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn samples(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }
}
