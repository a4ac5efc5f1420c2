use super::shapes::{draw_branch, draw_heart, draw_trunk};
use super::surface::Surface;
use crate::anim::Phase;
use crate::config::Config;
use crate::scene::Scene;

/// Paint one frame: clear the surface, then draw the layers the current
/// phase has reached. Hearts sway off the frame counter regardless of
/// growth phase.
pub fn render_frame(
    surface: &Surface,
    scene: &Scene,
    phase: Phase,
    frame: u64,
    config: &Config,
) {
    let ctx = surface.ctx();
    let size = surface.size();
    ctx.clear_rect(0.0, 0.0, size.physical_width, size.physical_height);

    draw_trunk(ctx, &scene.layout, &scene.trunk, config);

    if phase >= Phase::Branches {
        ctx.set_stroke_style_str(config.trunk_color);
        ctx.set_line_cap("round");
        for branch in &scene.branches {
            draw_branch(ctx, branch);
        }
    }

    if phase >= Phase::Hearts {
        ctx.set_shadow_blur(config.glow_blur);
        for particle in &scene.particles {
            ctx.set_shadow_color(particle.color);
            let (sway_x, sway_y) = particle.sway(frame, config.sway_x, config.sway_y);
            draw_heart(
                ctx,
                particle.x + sway_x,
                particle.y + sway_y,
                particle.size,
                particle.color,
            );
        }
        ctx.set_shadow_blur(0.0);
    }
}
