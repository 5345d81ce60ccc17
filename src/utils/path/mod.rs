//! Path utilities.
//!
//! Pure functions for path manipulation, except where noted.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `resolve_dir`)
//! - [`reduce`]: Namespace name reduction (`reduce_common_prefix`, `strip_extensions`)

pub mod fs;
pub mod reduce;

pub use fs::{normalize_path, resolve_dir};
pub use reduce::{
    base_name, extension_of, reduce_common_prefix, strip_extension, strip_extensions,
};
