use std::f32::consts::{PI, TAU};

/// Fixed color palette for heart foliage
pub const PALETTE: [&str; 6] = [
    "#ff0055", "#ff3366", "#ff5500", "#ffcc00", "#ff99cc", "#ffffff",
];

/// All tunable constants for the animation.
///
/// There is no external override mechanism; the defaults below are the
/// configuration surface.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Trunk and branch color
    pub trunk_color: &'static str,
    /// Half-width of the trunk base (the quad spans twice this)
    pub trunk_width: f32,
    /// Final trunk height
    pub trunk_height: f32,
    /// Trunk growth per frame
    pub trunk_growth: f32,
    /// Number of branches to generate
    pub branch_count: usize,
    /// Minimum branch length
    pub branch_length_min: f32,
    /// Random extra branch length on top of the minimum
    pub branch_length_spread: f32,
    /// Half-angle of the branch cone around straight up (radians)
    pub branch_cone: f32,
    /// Maximum branch stroke width
    pub branch_width_max: f32,
    /// Random reduction from the maximum stroke width
    pub branch_width_spread: f32,
    /// Branch origin sits this far below the trunk top
    pub branch_origin_drop: f32,
    /// Branch growth per frame
    pub branch_growth: f32,
    /// Number of heart particles to generate
    pub heart_count: usize,
    /// Minimum heart target size
    pub heart_size_min: f32,
    /// Maximum heart target size
    pub heart_size_max: f32,
    /// Heart size growth per frame once the delay is exhausted
    pub bloom_speed: f32,
    /// Pre-bloom delay is drawn uniformly from [0, this)
    pub bloom_delay_max: f32,
    /// Delay decrement per frame
    pub bloom_delay_step: f32,
    /// Heart cluster center sits this far above the trunk top
    pub cluster_lift: f32,
    /// Horizontal spread factor for the heart curve
    pub spread_x: f32,
    /// Vertical spread factor for the heart curve
    pub spread_y: f32,
    /// Horizontal sway amplitude
    pub sway_x: f32,
    /// Vertical sway amplitude
    pub sway_y: f32,
    /// Minimum per-particle sway speed
    pub sway_speed_min: f32,
    /// Random extra sway speed on top of the minimum
    pub sway_speed_spread: f32,
    /// Shadow blur radius for the heart glow
    pub glow_blur: f64,
    /// Canvas element id the engine mounts on
    pub canvas_id: &'static str,
    /// Class marking the text lines to reveal
    pub line_class: &'static str,
    /// Class added to a line to make it visible
    pub visible_class: &'static str,
    /// Delay before the first line is revealed (ms)
    pub reveal_base_ms: i32,
    /// Additional delay per subsequent line (ms)
    pub reveal_step_ms: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trunk_color: "#ffb6c1",
            trunk_width: 22.0,
            trunk_height: 260.0,
            trunk_growth: 10.0,         // Fast trunk growth
            branch_count: 20,
            branch_length_min: 50.0,
            branch_length_spread: 120.0,
            branch_cone: 1.1,           // ~63 degrees each side of vertical
            branch_width_max: 7.0,
            branch_width_spread: 3.0,
            branch_origin_drop: 20.0,
            branch_growth: 6.0,
            heart_count: 2500,          // Dense foliage
            heart_size_min: 12.0,
            heart_size_max: 25.0,
            bloom_speed: 2.5,           // Fast bloom
            bloom_delay_max: 60.0,      // Short stagger before blooming
            bloom_delay_step: 4.0,
            cluster_lift: 180.0,
            spread_x: 20.0,
            spread_y: 18.0,
            sway_x: 3.0,
            sway_y: 1.5,
            sway_speed_min: 0.01,
            sway_speed_spread: 0.02,
            glow_blur: 8.0,             // Kept low for the high heart count
            canvas_id: "treeCanvas",
            line_class: "msg-line",
            visible_class: "visible",
            reveal_base_ms: 100,
            reveal_step_ms: 800,
        }
    }
}

impl Config {
    /// Angle cone for branches: uniform within ±`branch_cone` of straight up.
    pub fn branch_angle_bounds(&self) -> (f32, f32) {
        (-PI / 2.0 - self.branch_cone, -PI / 2.0 + self.branch_cone)
    }

    /// Upper bound (exclusive) for sway phase offsets.
    pub fn sway_offset_max(&self) -> f32 {
        TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size() {
        assert_eq!(PALETTE.len(), 6);
        for color in PALETTE {
            assert!(color.starts_with('#') && color.len() == 7);
        }
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.branch_count, 20);
        assert_eq!(config.heart_count, 2500);
        assert_eq!(config.heart_size_min, 12.0);
        assert_eq!(config.heart_size_max, 25.0);
        assert_eq!(config.bloom_speed, 2.5);
        assert_eq!(config.trunk_height, 260.0);
    }

    #[test]
    fn test_branch_angle_bounds_straddle_vertical() {
        let config = Config::default();
        let (lo, hi) = config.branch_angle_bounds();
        assert!(lo < -PI / 2.0 && -PI / 2.0 < hi);
        assert!((hi - lo - 2.2).abs() < 1e-6);
    }
}
