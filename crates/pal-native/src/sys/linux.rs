#![cfg(target_os = "linux")]

use core::ffi::c_int;

#[allow(clippy::wildcard_imports)]
pub use super::unix::*;
use crate::errno::{clear_errno, errno};

/// See `strerror_r(3)`.
///
/// `libc` binds glibc's XSI-compliant `__xpg_strerror_r`, never
/// the GNU variant. Before glibc 2.13 it returned -1 and set
/// `errno` instead of returning the error code, so we
/// normalize both conventions.
pub fn strerror_r(errnum: c_int, buf: &mut [u8]) -> c_int {
    clear_errno();
    // SAFETY: FFI call, no invariants. `buf` is valid for
    // `buf.len()` bytes.
    let ret = unsafe { libc::strerror_r(errnum, buf.as_mut_ptr().cast(), buf.len()) };
    if ret == -1 { errno().code() } else { ret }
}
