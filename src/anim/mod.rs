//! Animation state machine.
//!
//! Drives the growth sequence trunk -> branches -> hearts -> done, one
//! step per rendered frame, and emits a transition event whenever the
//! phase moves forward.

mod machine;
mod phase;

pub use machine::Animator;
pub use phase::{Phase, Transition};
