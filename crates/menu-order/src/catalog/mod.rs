//! The external catalog collaborator: a one-shot fetch returning the menu
//! document or failing.

pub mod source;

pub use source::*;
