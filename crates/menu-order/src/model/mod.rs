//! Pure data structures and the price arithmetic shared by every screen.

pub mod catalog;
pub mod money;
pub mod order;
pub mod pricing;
pub mod selection;

pub use catalog::*;
pub use money::*;
pub use order::*;
pub use selection::*;
