//! Requirements manifest
//!
//! This module merges resolved pins with the user's necessary packages,
//! optionally strips CUDA build tags, and writes the requirements file.

mod overrides;
mod postfix;
mod writer;

pub use overrides::{Overrides, load_overrides, package_name};
pub use postfix::{CUDA_POSTFIX_MARKER, strip};
pub use writer::{Manifest, write_manifest};
