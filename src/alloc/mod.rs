//! Ownership primitives.

pub mod twin_rc;

pub use twin_rc::TwinRc;
