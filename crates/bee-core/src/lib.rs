//! # bee-core
//!
//! Small, dependency-light helpers shared by bee tools.
//!
//! This crate provides pure functions over text and bytes plus thin wrappers
//! over the host filesystem. Every string function is value-in/value-out:
//! inputs are borrowed and a fresh `String` is returned. Degenerate inputs
//! (empty delimiters, mismatched replacement lists, missing files) fall back to
//! a defined result instead of failing; the `try_*` variants report them as
//! typed errors instead.

#![deny(unsafe_code)]

pub mod binary;
pub mod error;
pub mod fs;
pub mod math;
pub mod scope;
pub mod string;
pub mod time;

pub use error::{FsError, StrError};
