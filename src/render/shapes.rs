//! Shape primitives: the heart path, the tapered trunk quad, and branch
//! strokes. Geometry is computed in plain functions so proportions are
//! testable off the canvas; the `draw_*` functions paint it.

use web_sys::CanvasRenderingContext2d;

use crate::config::Config;
use crate::scene::{Branch, Layout, Trunk};

/// One cubic Bezier segment: two control points, then the end anchor.
pub type CurveSegment = [(f32, f32); 3];

/// The filled heart path for a heart of the given `size` anchored at
/// `(x, y)` (the top of the lobes).
///
/// Returns the start anchor (the top cusp, indented 30% of size below the
/// lobe top) and four symmetric cubic segments: left lobe out to half-size,
/// down to the bottom point a full size below the lobe top, back up the
/// right lobe, and closing into the cusp.
pub fn heart_segments(x: f32, y: f32, size: f32) -> ((f32, f32), [CurveSegment; 4]) {
    let cusp = size * 0.3;
    let half = size / 2.0;
    let start = (x, y + cusp);
    let segments = [
        // Left lobe
        [(x, y), (x - half, y), (x - half, y + cusp)],
        // Down the left side to the bottom point
        [
            (x - half, y + (size + cusp) / 2.0),
            (x, y + size * 1.2),
            (x, y + size),
        ],
        // Back up the right side
        [
            (x, y + size * 1.2),
            (x + half, y + (size + cusp) / 2.0),
            (x + half, y + cusp),
        ],
        // Right lobe closing into the cusp
        [(x + half, y), (x, y), (x, y + cusp)],
    ];
    (start, segments)
}

/// The tapered trunk quadrilateral: full half-width at the base, half of
/// that at the grown height. Corners in draw order.
pub fn trunk_quad(center_x: f32, bottom_y: f32, half_width: f32, height: f32) -> [(f32, f32); 4] {
    [
        (center_x - half_width, bottom_y),
        (center_x + half_width, bottom_y),
        (center_x + half_width * 0.5, bottom_y - height),
        (center_x - half_width * 0.5, bottom_y - height),
    ]
}

/// Fill a heart shape in a solid color.
pub fn draw_heart(ctx: &CanvasRenderingContext2d, x: f32, y: f32, size: f32, color: &str) {
    let (start, segments) = heart_segments(x, y, size);
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.move_to(start.0 as f64, start.1 as f64);
    for [c1, c2, end] in segments {
        ctx.bezier_curve_to(
            c1.0 as f64,
            c1.1 as f64,
            c2.0 as f64,
            c2.1 as f64,
            end.0 as f64,
            end.1 as f64,
        );
    }
    ctx.fill();
    ctx.close_path();
}

/// Fill the trunk at its current grown height.
pub fn draw_trunk(ctx: &CanvasRenderingContext2d, layout: &Layout, trunk: &Trunk, config: &Config) {
    let quad = trunk_quad(layout.center_x, layout.bottom_y, config.trunk_width, trunk.h);
    ctx.set_fill_style_str(config.trunk_color);
    ctx.begin_path();
    ctx.move_to(quad[0].0 as f64, quad[0].1 as f64);
    for corner in &quad[1..] {
        ctx.line_to(corner.0 as f64, corner.1 as f64);
    }
    ctx.fill();
}

/// Stroke a branch from its origin to the tip of its grown portion.
/// Stroke color and round caps are set once per frame by the caller.
pub fn draw_branch(ctx: &CanvasRenderingContext2d, branch: &Branch) {
    let (tip_x, tip_y) = branch.tip();
    ctx.set_line_width(branch.width as f64);
    ctx.begin_path();
    ctx.move_to(branch.x as f64, branch.y as f64);
    ctx.line_to(tip_x as f64, tip_y as f64);
    ctx.stroke();
}
