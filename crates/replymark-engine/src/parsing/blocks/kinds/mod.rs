pub mod code_fence;
pub mod heading;
pub mod list_marker;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_marker::ListMarker;
