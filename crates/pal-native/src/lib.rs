//! Platform abstraction shims for native interop.
//!
//! The centerpiece is the errno translator: a stateless mapping
//! between the host's native `errno` values and [`PalError`], a
//! fixed, platform-independent vocabulary whose numbering is a
//! stable ABI.
//!
//! ```
//! use pal_native::{PalError, to_pal_error, to_platform_errno};
//!
//! assert_eq!(to_pal_error(libc::ENOENT), PalError::ENOENT);
//! assert_eq!(to_pal_error(0), PalError::SUCCESS);
//! assert_eq!(to_platform_errno(PalError::ENOENT), Ok(libc::ENOENT));
//! ```
//!
//! The rest are thin wrappers over libc: [`describe_error`],
//! [`realpath`], [`pathconf`], [`max_path`] and [`sync`].
//!
//! # Operating System Support
//!
//! - Linux
//! - MacOS
//! - Other Unixes, with names they don't define falling back to
//!   [`PalError::ENONSTANDARD`]
//!
//! # Features
//!
//! - `std`: Enable [`std`] support.
//! - `ffi`: Export the `extern "C"` functions in [`ffi`].
//!
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![warn(missing_docs)]
#![deny(
    clippy::alloc_instead_of_core,
    clippy::expect_used,
    clippy::implicit_saturating_sub,
    clippy::indexing_slicing,
    clippy::missing_panics_doc,
    clippy::ptr_as_ptr,
    clippy::string_slice,
    clippy::transmute_ptr_to_ptr,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    missing_docs
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod api;
mod convert;
mod errno;
mod error;
#[cfg(feature = "ffi")]
#[cfg_attr(docsrs, doc(cfg(feature = "ffi")))]
pub mod ffi;
mod pal;
mod path;
mod strerror;
mod sys;

pub use api::*;
pub use buggy::Bug;
pub use convert::{raw_to_platform_errno, to_pal_error, to_platform_errno};
pub use self::errno::{Errno, errno, set_errno};
pub use error::Error;
pub use pal::{PalError, UnknownPalError};
pub use path::{Path, PathBuf};
pub use strerror::{describe_error, describe_error_string};
