//! Support for libc's `errno`.

use core::{ffi::c_int, fmt};

use crate::{convert, pal::PalError};

/// Returns the value of `errno`.
pub fn errno() -> Errno {
    Errno::new()
}

/// Sets `errno` to `err`.
pub fn set_errno(err: Errno) {
    ::errno::set_errno(err.0)
}

pub(crate) fn clear_errno() {
    ::errno::set_errno(::errno::Errno(0))
}

/// libc's `errno`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Errno(::errno::Errno);

impl Errno {
    /// `EINTR`.
    pub const EINTR: Errno = Errno::from_raw_os_error(libc::EINTR);
    /// `EINVAL`.
    pub const EINVAL: Errno = Errno::from_raw_os_error(libc::EINVAL);
    /// `ENOENT`.
    pub const ENOENT: Errno = Errno::from_raw_os_error(libc::ENOENT);
    /// `ERANGE`.
    pub const ERANGE: Errno = Errno::from_raw_os_error(libc::ERANGE);

    /// Returns `Errno`.
    fn new() -> Self {
        Self(::errno::errno())
    }

    /// Creates an `Errno` from the raw error code.
    pub const fn from_raw_os_error(err: c_int) -> Self {
        Self(::errno::Errno(err))
    }

    /// Returns the underlying code.
    pub const fn code(self) -> c_int {
        self.0.0
    }

    /// Translates the code into the platform-independent
    /// vocabulary.
    pub fn to_pal(self) -> PalError {
        convert::to_pal_error(self.code())
    }
}

impl From<Errno> for PalError {
    fn from(err: Errno) -> Self {
        err.to_pal()
    }
}

impl core::error::Error for Errno {}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
