//! The `extern "C"` interop surface.
//!
//! Expected failures are reported the C way: `-1` or null, with
//! `errno` set. Contract violations panic in debug builds,
//! which aborts the process at this boundary.

use core::{ffi::c_char, ptr, slice};

use tracing::error;

use crate::{
    api, convert,
    errno::{Errno, set_errno},
    error::Error,
    path::Path,
    strerror,
    sys::imp,
};

/// Translates a native errno into a raw [`PalError`].
///
/// [`PalError`]: crate::PalError
#[unsafe(no_mangle)]
pub extern "C" fn pal_native_convert_error_platform_to_pal(platform_errno: i32) -> i32 {
    convert::to_pal_error(platform_errno).code()
}

/// Synthesizes a native errno from a raw [`PalError`].
///
/// Returns -1 for `ENONSTANDARD` or an unknown code.
///
/// [`PalError`]: crate::PalError
#[unsafe(no_mangle)]
pub extern "C" fn pal_native_convert_error_pal_to_platform(error: i32) -> i32 {
    match convert::raw_to_platform_errno(error) {
        Ok(errno) => errno,
        Err(err) => {
            error!(%err, error, "no native errno for `PalError`");
            -1
        }
    }
}

/// Writes a description of `platform_errno` to `buffer`.
///
/// Returns `buffer` on success, or null if `buffer` is too small
/// to hold the entire message.
///
/// # Safety
///
/// - `buffer` must be valid for writes of `buffer_size` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pal_native_strerror_r(
    platform_errno: i32,
    buffer: *mut c_char,
    buffer_size: i32,
) -> *const c_char {
    let len = match usize::try_from(buffer_size) {
        Ok(len) if len > 0 && !buffer.is_null() => len,
        _ => return ptr::null(),
    };
    // SAFETY: See the function's safety docs.
    let buf = unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>(), len) };
    strerror::describe_error(platform_errno, buf).map_or(ptr::null(), |msg| msg.as_ptr())
}

/// Resolves `path` to a canonical absolute path.
///
/// The result must be released with `free(3)`. Returns null
/// with `errno` set on failure.
///
/// # Safety
///
/// - `path` must be null or a valid, null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pal_native_realpath(path: *const c_char) -> *mut c_char {
    if path.is_null() {
        set_errno(Errno::EINVAL);
        return ptr::null_mut();
    }
    imp::realpath_raw(path)
}

/// Queries a configurable limit for `path`.
///
/// Returns -1 with `errno` set on failure, or -1 with `errno`
/// cleared if the limit is indeterminate.
///
/// # Safety
///
/// - `path` must be null or a valid, null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn pal_native_pathconf(path: *const c_char, name: i32) -> i64 {
    if path.is_null() {
        set_errno(Errno::EINVAL);
        return -1;
    }
    // SAFETY: See the function's safety docs.
    let path = unsafe { Path::from_ptr(path) };
    match api::pathconf_raw(path, name) {
        Ok(Some(limit)) => limit,
        Ok(None) => -1,
        Err(Error::Errno(err)) => {
            set_errno(err);
            -1
        }
        Err(Error::Bug(err)) => {
            error!(%err, name, "unknown `pathconf` name");
            set_errno(Errno::EINVAL);
            -1
        }
    }
}

/// Returns the maximum path length.
#[unsafe(no_mangle)]
pub extern "C" fn pal_native_get_maximum_path() -> i64 {
    api::max_path()
}

/// Flushes filesystem buffers to disk.
#[unsafe(no_mangle)]
pub extern "C" fn pal_native_sync() {
    api::sync()
}

/// Returns 1 on macOS, 0 otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn pal_native_has_osx_support() -> i32 {
    i32::from(api::has_osx_support())
}
