//! Rendering pipeline: compositor, frame diffing, terminal driver.

pub mod compositor;
pub mod driver;

pub use compositor::{diff, CellUpdate, Compositor, CompositorError, Hook};
pub use driver::Driver;
