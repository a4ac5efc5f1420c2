use super::phase::{Phase, Transition};
use crate::config::Config;
use crate::scene::Scene;

/// Global animation state: the current phase plus the frame counter the
/// sway oscillation is keyed off.
///
/// `advance` runs one frame of growth. It never revisits an entity that
/// has reached its target, and a phase transition fires on the first frame
/// where a full scan finds nothing left to grow.
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    pub phase: Phase,
    pub frame: u64,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Trunk,
            frame: 0,
        }
    }

    /// Advance growth by one frame, returning the transition if the phase
    /// stepped forward.
    pub fn advance(&mut self, scene: &mut Scene, config: &Config) -> Option<Transition> {
        match self.phase {
            Phase::Trunk => {
                scene.trunk.grow(config.trunk_growth);
                if scene.trunk.is_grown() {
                    self.phase = Phase::Branches;
                    return Some(Transition::TrunkGrown);
                }
                None
            }
            Phase::Branches => {
                let mut all_grown = true;
                for branch in &mut scene.branches {
                    if !branch.is_grown() {
                        branch.grow(config.branch_growth);
                        all_grown = false;
                    }
                }
                if all_grown {
                    self.phase = Phase::Hearts;
                    return Some(Transition::BranchesGrown);
                }
                None
            }
            Phase::Hearts => {
                let mut all_bloomed = true;
                for particle in &mut scene.particles {
                    if particle.tick_delay(config.bloom_delay_step) {
                        all_bloomed = false;
                        continue;
                    }
                    if !particle.is_bloomed() {
                        particle.grow(config.bloom_speed);
                        all_bloomed = false;
                    }
                }
                if all_bloomed {
                    self.phase = Phase::Done;
                    return Some(Transition::Bloomed);
                }
                None
            }
            Phase::Done => None,
        }
    }

    /// Called by the frame driver after each rendered frame.
    pub fn end_frame(&mut self) {
        self.frame += 1;
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}
