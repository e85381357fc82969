//! String helpers.
//!
//! Pure functions over `&str` returning owned `String`s. Case transforms are
//! ASCII-only; cut and slice count characters, not bytes.

pub mod case;
pub mod replace;
pub mod split;
pub mod trim;

// Re-export commonly used functions.
pub use case::{capital, contains, lower, upper};
pub use replace::{replace, replace_many, try_replace_many};
pub use split::{join, split, try_join, try_split};
pub use trim::{
    DEFAULT_TRIM_SET, cut, cut_left, cut_right, slice, trim, trim_default, trim_left,
    trim_left_default, trim_right, trim_right_default,
};
