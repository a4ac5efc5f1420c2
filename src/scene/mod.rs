//! Procedural scene generation.
//!
//! The scene is generated exactly once, after the surface has been sized
//! and before the first frame. Entities live for the whole program; a
//! viewport resize does not regenerate them.

pub mod branch;
pub mod heart;

pub use branch::Branch;
pub use heart::{heart_curve, Particle};

use crate::config::Config;
use crate::rng::Lcg;

/// Anchor points derived from the logical surface size.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Horizontal center the trunk grows from
    pub center_x: f32,
    /// Bottom edge of the surface
    pub bottom_y: f32,
    /// Where the trunk top will be once fully grown
    pub trunk_top_y: f32,
}

impl Layout {
    pub fn new(logical_width: f32, logical_height: f32, config: &Config) -> Self {
        let bottom_y = logical_height;
        Self {
            center_x: logical_width / 2.0,
            bottom_y,
            trunk_top_y: bottom_y - config.trunk_height,
        }
    }
}

/// Trunk growth state.
#[derive(Debug, Clone, Copy)]
pub struct Trunk {
    /// Grown height so far
    pub h: f32,
    /// Final height
    pub max_h: f32,
}

impl Trunk {
    pub fn new(max_h: f32) -> Self {
        Self { h: 0.0, max_h }
    }

    /// Grow by `step`, clamped at the final height.
    pub fn grow(&mut self, step: f32) {
        self.h = (self.h + step).min(self.max_h);
    }

    pub fn is_grown(&self) -> bool {
        self.h >= self.max_h
    }
}

/// The full static layout plus per-entity growth state.
#[derive(Debug, Clone)]
pub struct Scene {
    pub layout: Layout,
    pub trunk: Trunk,
    pub branches: Vec<Branch>,
    pub particles: Vec<Particle>,
}

impl Scene {
    /// Generate the whole scene from the logical surface dimensions.
    pub fn generate(config: &Config, logical_width: f32, logical_height: f32, rng: &mut Lcg) -> Self {
        let layout = Layout::new(logical_width, logical_height, config);

        let branch_origin_y = layout.trunk_top_y + config.branch_origin_drop;
        let branches = (0..config.branch_count)
            .map(|_| Branch::generate(layout.center_x, branch_origin_y, config, rng))
            .collect();

        let cluster_y = layout.trunk_top_y - config.cluster_lift;
        let particles = (0..config.heart_count)
            .map(|_| Particle::generate(layout.center_x, cluster_y, config, rng))
            .collect();

        Self {
            layout,
            trunk: Trunk::new(config.trunk_height),
            branches,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_anchors() {
        let config = Config::default();
        let layout = Layout::new(640.0, 480.0, &config);
        assert_eq!(layout.center_x, 320.0);
        assert_eq!(layout.bottom_y, 480.0);
        assert_eq!(layout.trunk_top_y, 480.0 - 260.0);
    }

    #[test]
    fn test_trunk_growth_clamps() {
        let mut trunk = Trunk::new(260.0);
        for _ in 0..100 {
            trunk.grow(10.0);
            assert!(trunk.h <= trunk.max_h);
        }
        assert!(trunk.is_grown());
    }

    #[test]
    fn test_generate_counts() {
        let config = Config::default();
        let mut rng = Lcg::new(42);
        let scene = Scene::generate(&config, 640.0, 480.0, &mut rng);
        assert_eq!(scene.branches.len(), 20);
        assert_eq!(scene.particles.len(), 2500);
    }

    #[test]
    fn test_generate_deterministic() {
        let config = Config::default();
        let a = Scene::generate(&config, 640.0, 480.0, &mut Lcg::new(42));
        let b = Scene::generate(&config, 640.0, 480.0, &mut Lcg::new(42));
        for (x, y) in a.branches.iter().zip(&b.branches) {
            assert_eq!(x.angle, y.angle);
            assert_eq!(x.length, y.length);
        }
        for (x, y) in a.particles.iter().zip(&b.particles) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.target_size, y.target_size);
            assert_eq!(x.color, y.color);
        }
    }

    #[test]
    fn test_branches_anchored_below_trunk_top() {
        let config = Config::default();
        let mut rng = Lcg::new(7);
        let scene = Scene::generate(&config, 640.0, 480.0, &mut rng);
        for branch in &scene.branches {
            assert_eq!(branch.x, scene.layout.center_x);
            assert_eq!(branch.y, scene.layout.trunk_top_y + 20.0);
        }
    }

    #[test]
    fn test_cluster_sits_above_trunk_top() {
        let config = Config::default();
        let mut rng = Lcg::new(7);
        let scene = Scene::generate(&config, 800.0, 600.0, &mut rng);
        let cluster_y = scene.layout.trunk_top_y - config.cluster_lift;
        for p in &scene.particles {
            // Every particle stays within the scaled silhouette around the
            // cluster: lobe tops ~12 units up, bottom cusp 17 units down
            assert!(p.y >= cluster_y - 12.1 * config.spread_y - 1e-3);
            assert!(p.y <= cluster_y + 17.0 * config.spread_y + 1e-3);
        }
    }
}
