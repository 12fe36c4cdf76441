//! Falling dot rain.
//!
//! The population is allocated once. Drops that leave the bottom edge or
//! outlive `max_age` are respawned above the top edge in the same slot, so
//! a frame costs the same no matter how long the effect has been running.

use crate::config::RainConfig;
use crate::lifecycle::Size;
use crate::palette::{Rgb, NEON_CYAN, NEON_PURPLE};

/// Source of uniform samples in `[0, 1)`.
pub trait Entropy {
    fn next_unit(&mut self) -> f32;
}

impl<F: FnMut() -> f32> Entropy for F {
    fn next_unit(&mut self) -> f32 {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainDrop {
    pub x: f32,
    pub y: f32,
    /// Pixels per 60 Hz frame.
    pub speed: f32,
    /// Half the side of the drawn square.
    pub size: f32,
    pub opacity: f32,
    pub color: Rgb,
    /// Age in 60 Hz frames since (re)spawn.
    pub age: f32,
}

/// Where a freshly spawned drop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spawn {
    Scattered,
    AboveTop,
}

pub struct DotRain {
    drops: Vec<RainDrop>,
    width: f32,
    height: f32,
    max_age: f32,
    fade_start: f32,
}

impl DotRain {
    pub fn new(config: &RainConfig, size: Size, entropy: &mut impl Entropy) -> Self {
        let mut rain = Self {
            drops: Vec::with_capacity(config.count),
            width: size.width as f32,
            height: size.height as f32,
            max_age: config.max_age.max(1.0),
            fade_start: config.fade_start.clamp(0.0, 1.0),
        };
        for _ in 0..config.count {
            let drop = rain.spawn(Spawn::Scattered, entropy);
            rain.drops.push(drop);
        }
        rain
    }

    /// Move every drop down by `steps` frames, recycling the finished ones.
    pub fn advance(&mut self, steps: f32, entropy: &mut impl Entropy) {
        for i in 0..self.drops.len() {
            let drop = &mut self.drops[i];
            drop.y += drop.speed * steps;
            drop.age += steps;
            if drop.y > self.height || drop.age > self.max_age {
                let fresh = self.spawn(Spawn::AboveTop, entropy);
                self.drops[i] = fresh;
            }
        }
    }

    /// New bounds; drops keep their positions.
    pub fn resize(&mut self, size: Size) {
        self.width = size.width as f32;
        self.height = size.height as f32;
    }

    /// Opacity multiplier: 1 above the fade zone, falling to 0 at the bottom.
    pub fn fade(&self, drop: &RainDrop) -> f32 {
        let zone = self.height * self.fade_start;
        if drop.y <= zone || self.height <= zone {
            return 1.0;
        }
        (1.0 - (drop.y - zone) / (self.height - zone)).max(0.0)
    }

    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn spawn(&self, at: Spawn, entropy: &mut impl Entropy) -> RainDrop {
        let tint = entropy.next_unit();
        let x = entropy.next_unit() * self.width;
        let y = match at {
            Spawn::Scattered => entropy.next_unit() * self.height,
            Spawn::AboveTop => -entropy.next_unit() * self.height * 0.3,
        };
        RainDrop {
            x,
            y,
            speed: 0.3 + entropy.next_unit() * 0.7,
            size: 1.3 + entropy.next_unit() * 1.7,
            opacity: 0.1 + entropy.next_unit() * 0.16,
            color: NEON_PURPLE.lerp(NEON_CYAN, tint),
            age: 0.0,
        }
    }
}
