//! Reference generators built on the seeded core.

pub mod numbers;
pub mod picker;
pub mod teams;

pub use numbers::{NumberGenerator, SortOrder};
pub use picker::ListPicker;
pub use teams::TeamSplitter;
