pub mod frame;
pub mod shapes;
pub mod surface;

pub use frame::render_frame;
pub use surface::{Surface, SurfaceSize};
