#![cfg(all(target_family = "unix", not(target_os = "vxworks")))]

use core::ffi::{c_char, c_int, c_long};

pub use libc::{
    _PC_CHOWN_RESTRICTED, _PC_LINK_MAX, _PC_MAX_CANON, _PC_MAX_INPUT, _PC_NAME_MAX, _PC_NO_TRUNC,
    _PC_PATH_MAX, _PC_PIPE_BUF, _PC_VDISABLE, PATH_MAX,
};

use crate::{
    errno::{Errno, clear_errno, errno},
    path::{Path, PathBuf},
};

/// Whether this is a macOS build.
pub const HAS_OSX_SUPPORT: bool = false;

/// See `realpath(3)`.
///
/// The result is allocated by libc and must be released with
/// `free(3)`.
pub fn realpath_raw(path: *const c_char) -> *mut c_char {
    // SAFETY: FFI call, no invariants. A null `resolved_path`
    // asks libc to allocate the result.
    unsafe { libc::realpath(path, core::ptr::null_mut()) }
}

/// See `realpath(3)`.
pub fn realpath(path: &Path) -> Result<PathBuf, Errno> {
    let ptr = path.with_cstr(&|path| realpath_raw(path));
    if ptr.is_null() {
        return Err(errno());
    }
    // SAFETY: `realpath` returned a valid, null-terminated
    // string that we own until it's freed below.
    let resolved = unsafe { Path::from_ptr(ptr) }.to_path_buf();
    // SAFETY: `ptr` was allocated by libc.
    unsafe { libc::free(ptr.cast()) };
    Ok(resolved)
}

/// See `pathconf(3)`.
///
/// Returns `Ok(None)` if `name` has no limit.
pub fn pathconf(path: &Path, name: c_int) -> Result<Option<c_long>, Errno> {
    // `pathconf` returns -1 without touching `errno` when
    // there's no limit, so clear it first.
    clear_errno();
    let ret = path.with_cstr(&|path| {
        // SAFETY: FFI call, no invariants.
        unsafe { libc::pathconf(path, name) }
    });
    if ret >= 0 {
        return Ok(Some(ret));
    }
    match errno() {
        err if err.code() == 0 => Ok(None),
        err => Err(err),
    }
}

/// See `strerror_r(3)`.
///
/// Returns the XSI result code: `0`, `EINVAL` or `ERANGE`.
#[cfg(not(target_os = "linux"))]
pub fn strerror_r(errnum: c_int, buf: &mut [u8]) -> c_int {
    // SAFETY: FFI call, no invariants. `buf` is valid for
    // `buf.len()` bytes.
    unsafe { libc::strerror_r(errnum, buf.as_mut_ptr().cast(), buf.len()) }
}

/// See `sync(2)`.
pub fn sync() {
    // SAFETY: FFI call, no invariants.
    unsafe { libc::sync() }
}
