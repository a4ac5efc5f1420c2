use crate::config::Config;
use crate::rng::Lcg;

/// A single branch growing out of the trunk top.
///
/// Origin, angle, target length and stroke width are fixed at generation
/// time; only `current_length` mutates, and only during the branch-growth
/// phase.
#[derive(Debug, Clone, Copy)]
pub struct Branch {
    /// Origin x (trunk center)
    pub x: f32,
    /// Origin y (just below the trunk top)
    pub y: f32,
    /// Direction angle in radians, y-down frame (−π/2 is straight up)
    pub angle: f32,
    /// Target length
    pub length: f32,
    /// Grown length so far
    pub current_length: f32,
    /// Stroke width
    pub width: f32,
}

impl Branch {
    /// Sample a branch from the configured cone and length range.
    pub fn generate(origin_x: f32, origin_y: f32, config: &Config, rng: &mut Lcg) -> Self {
        let (angle_min, angle_max) = config.branch_angle_bounds();
        Self {
            x: origin_x,
            y: origin_y,
            angle: rng.range(angle_min, angle_max),
            length: rng.range(
                config.branch_length_min,
                config.branch_length_min + config.branch_length_spread,
            ),
            current_length: 0.0,
            width: config.branch_width_max - rng.range(0.0, config.branch_width_spread),
        }
    }

    /// Grow by `step`, clamped at the target length.
    pub fn grow(&mut self, step: f32) {
        self.current_length = (self.current_length + step).min(self.length);
    }

    pub fn is_grown(&self) -> bool {
        self.current_length >= self.length
    }

    /// Endpoint of the grown portion.
    pub fn tip(&self) -> (f32, f32) {
        (
            self.x + self.angle.cos() * self.current_length,
            self.y + self.angle.sin() * self.current_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn test_branch() -> Branch {
        Branch {
            x: 100.0,
            y: 200.0,
            angle: -FRAC_PI_2,
            length: 80.0,
            current_length: 0.0,
            width: 5.0,
        }
    }

    #[test]
    fn test_growth_clamps_at_target() {
        let mut branch = test_branch();
        for _ in 0..100 {
            branch.grow(6.0);
            assert!(branch.current_length <= branch.length);
        }
        assert!(branch.is_grown());
        assert_eq!(branch.current_length, branch.length);
    }

    #[test]
    fn test_growth_monotonic() {
        let mut branch = test_branch();
        let mut prev = branch.current_length;
        for _ in 0..20 {
            branch.grow(6.0);
            assert!(branch.current_length >= prev);
            prev = branch.current_length;
        }
    }

    #[test]
    fn test_tip_straight_up() {
        let mut branch = test_branch();
        branch.current_length = 50.0;
        let (tx, ty) = branch.tip();
        assert!((tx - 100.0).abs() < 1e-4);
        assert!((ty - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_generated_fields_in_range() {
        let config = crate::config::Config::default();
        let mut rng = Lcg::new(42);
        for _ in 0..500 {
            let branch = Branch::generate(320.0, 400.0, &config, &mut rng);
            assert!(branch.length >= 50.0 && branch.length < 170.0);
            assert!(branch.width > 4.0 && branch.width <= 7.0);
            assert!(branch.angle > -FRAC_PI_2 - 1.1 && branch.angle < -FRAC_PI_2 + 1.1);
            assert_eq!(branch.current_length, 0.0);
        }
    }
}
