//! Utility modules.

pub mod casing;
pub mod path;
pub mod plural;

pub use casing::camelize;
pub use plural::{plural_count, plural_s};
