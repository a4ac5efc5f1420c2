use std::f32::consts::TAU;

use crate::config::{Config, PALETTE};
use crate::rng::Lcg;

/// Sample the canonical parametric heart curve at `t`.
///
/// Returns `(dx, dy)` in a y-down frame: `dy` is negated relative to the
/// textbook formula so the lobes sit above the cusp on a canvas. At `t = 0`
/// the curve is at the top indentation `(0, -5)`; at `t = π` it reaches the
/// bottom cusp `(0, 17)`. `dx` spans ±16.
pub fn heart_curve(t: f32) -> (f32, f32) {
    let dx = 16.0 * t.sin().powi(3);
    let dy = -(13.0 * t.cos()
        - 5.0 * (2.0 * t).cos()
        - 2.0 * (3.0 * t).cos()
        - (4.0 * t).cos());
    (dx, dy)
}

/// A single heart-shaped foliage particle.
///
/// Position, target size, color and sway parameters are fixed at generation
/// time; `size` and `delay` are the only fields the state machine mutates.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Current drawn size, grows from 0 to `target_size`
    pub size: f32,
    pub target_size: f32,
    /// Palette color this heart is drawn (and glows) in
    pub color: &'static str,
    /// Frames-worth of delay before blooming starts
    pub delay: f32,
    /// Per-particle oscillation rate
    pub sway_speed: f32,
    /// Per-particle oscillation phase so hearts move out of sync
    pub sway_offset: f32,
}

impl Particle {
    /// Sample a particle radially spread within the heart silhouette.
    ///
    /// `t` is uniform over a full turn, the radius is the square root of a
    /// uniform draw so particles fill the area evenly rather than cluster
    /// at the center.
    pub fn generate(center_x: f32, cluster_y: f32, config: &Config, rng: &mut Lcg) -> Self {
        let t = rng.range(0.0, TAU);
        let r = rng.next_f32().sqrt();

        let (dx, dy) = heart_curve(t);
        let x = center_x + dx * config.spread_x * r;
        let y = cluster_y + dy * config.spread_y * r;

        Self {
            x,
            y,
            size: 0.0,
            target_size: rng.range(config.heart_size_min, config.heart_size_max),
            color: PALETTE[rng.index(PALETTE.len())],
            delay: rng.range(0.0, config.bloom_delay_max),
            sway_speed: config.sway_speed_min + rng.range(0.0, config.sway_speed_spread),
            sway_offset: rng.range(0.0, config.sway_offset_max()),
        }
    }

    /// Count down the pre-bloom delay. Returns true while still waiting.
    pub fn tick_delay(&mut self, step: f32) -> bool {
        if self.delay > 0.0 {
            self.delay = (self.delay - step).max(0.0);
            true
        } else {
            false
        }
    }

    /// Grow toward the target size, clamped.
    pub fn grow(&mut self, step: f32) {
        self.size = (self.size + step).min(self.target_size);
    }

    pub fn is_bloomed(&self) -> bool {
        self.size >= self.target_size
    }

    /// Continuous sway offset for the given frame counter.
    pub fn sway(&self, frame: u64, amp_x: f32, amp_y: f32) -> (f32, f32) {
        let phase = frame as f32 * self.sway_speed + self.sway_offset;
        (phase.sin() * amp_x, phase.cos() * amp_y)
    }
}
