//! Widget system: the render contract for leaf components.

pub mod traits;

pub use traits::Widget;
