//! Error and result definitions shared by the rangeset-* crates.

pub mod error;
pub mod result;

pub use result::Result;
