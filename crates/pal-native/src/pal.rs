//! The platform-independent error vocabulary.
//!
//! Only the names (without the `PAL_` prefix in C headers) are
//! specified by POSIX. The values were assigned in the
//! alphabetical order the names appear in POSIX and are part of
//! the interop ABI, so they must never change. New tags are
//! appended to the end.
//!
//! Every value lies outside the ranges of native errnos (small
//! positive numbers), HRESULTs (negative) and Win32 errors
//! (`0x0000..=0xFFFF`). Correctness doesn't depend on it, but it
//! makes a raw `i32` read with the wrong vocabulary stand out.

use core::{ffi::c_int, fmt};

/// A raw `i32` is not a [`PalError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown PAL error code: {0:#x}")]
pub struct UnknownPalError(pub i32);

macro_rules! pal_errors {
    (
        $(
            $(#[$meta:meta])*
            $name:ident = $value:literal => $desc:literal,
        )*
    ) => {
        /// A stable, platform-independent error code.
        ///
        /// See the [module docs](self) for the numbering rules.
        #[repr(i32)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum PalError {
            $(
                #[doc = concat!(" ", $desc, ".")]
                $(#[$meta])*
                $name = $value,
            )*
        }

        impl PalError {
            /// Every tag, in ABI order.
            pub const ALL: &'static [PalError] = &[$(PalError::$name,)*];

            /// Decodes a raw tag.
            ///
            /// Returns `None` if `code` is not a known tag.
            pub const fn from_raw(code: i32) -> Option<Self> {
                match code {
                    $($value => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Returns the name of the tag, e.g. `"ENOENT"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }

            /// Returns the POSIX description of the tag.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$name => $desc,)*
                }
            }
        }
    };
}

pal_errors! {
    SUCCESS = 0 => "Success",

    E2BIG = 0x10001 => "Argument list too long",
    EACCES = 0x10002 => "Permission denied",
    EADDRINUSE = 0x10003 => "Address in use",
    EADDRNOTAVAIL = 0x10004 => "Address not available",
    EAFNOSUPPORT = 0x10005 => "Address family not supported",
    /// Same value as [`PalError::EWOULDBLOCK`].
    EAGAIN = 0x10006 => "Resource unavailable, try again",
    EALREADY = 0x10007 => "Connection already in progress",
    EBADF = 0x10008 => "Bad file descriptor",
    EBADMSG = 0x10009 => "Bad message",
    EBUSY = 0x1000A => "Device or resource busy",
    ECANCELED = 0x1000B => "Operation canceled",
    ECHILD = 0x1000C => "No child processes",
    ECONNABORTED = 0x1000D => "Connection aborted",
    ECONNREFUSED = 0x1000E => "Connection refused",
    ECONNRESET = 0x1000F => "Connection reset",
    EDEADLK = 0x10010 => "Resource deadlock would occur",
    EDESTADDRREQ = 0x10011 => "Destination address required",
    EDOM = 0x10012 => "Mathematics argument out of domain of function",
    EDQUOT = 0x10013 => "Disk quota exceeded",
    EEXIST = 0x10014 => "File exists",
    EFAULT = 0x10015 => "Bad address",
    EFBIG = 0x10016 => "File too large",
    EHOSTUNREACH = 0x10017 => "Host is unreachable",
    EIDRM = 0x10018 => "Identifier removed",
    EILSEQ = 0x10019 => "Illegal byte sequence",
    EINPROGRESS = 0x1001A => "Operation in progress",
    EINTR = 0x1001B => "Interrupted function",
    EINVAL = 0x1001C => "Invalid argument",
    EIO = 0x1001D => "I/O error",
    EISCONN = 0x1001E => "Socket is connected",
    EISDIR = 0x1001F => "Is a directory",
    ELOOP = 0x10020 => "Too many levels of symbolic links",
    EMFILE = 0x10021 => "File descriptor value too large",
    EMLINK = 0x10022 => "Too many links",
    EMSGSIZE = 0x10023 => "Message too large",
    EMULTIHOP = 0x10024 => "Multihop attempted",
    ENAMETOOLONG = 0x10025 => "Filename too long",
    ENETDOWN = 0x10026 => "Network is down",
    ENETRESET = 0x10027 => "Connection aborted by network",
    ENETUNREACH = 0x10028 => "Network unreachable",
    ENFILE = 0x10029 => "Too many files open in system",
    ENOBUFS = 0x1002A => "No buffer space available",
    ENODEV = 0x1002C => "No such device",
    ENOENT = 0x1002D => "No such file or directory",
    ENOEXEC = 0x1002E => "Executable file format error",
    ENOLCK = 0x1002F => "No locks available",
    ENOLINK = 0x10030 => "Link has been severed",
    ENOMEM = 0x10031 => "Not enough space",
    ENOMSG = 0x10032 => "No message of the desired type",
    ENOPROTOOPT = 0x10033 => "Protocol not available",
    ENOSPC = 0x10034 => "No space left on device",
    ENOSYS = 0x10037 => "Function not supported",
    ENOTCONN = 0x10038 => "The socket is not connected",
    ENOTDIR = 0x10039 => "Not a directory or a symbolic link to a directory",
    ENOTEMPTY = 0x1003A => "Directory not empty",
    ENOTRECOVERABLE = 0x1003B => "State not recoverable",
    ENOTSOCK = 0x1003C => "Not a socket",
    /// Same value as [`PalError::EOPNOTSUPP`].
    ENOTSUP = 0x1003D => "Not supported",
    ENOTTY = 0x1003E => "Inappropriate I/O control operation",
    ENXIO = 0x1003F => "No such device or address",
    EOVERFLOW = 0x10040 => "Value too large to be stored in data type",
    EOWNERDEAD = 0x10041 => "Previous owner died",
    EPERM = 0x10042 => "Operation not permitted",
    EPIPE = 0x10043 => "Broken pipe",
    EPROTO = 0x10044 => "Protocol error",
    EPROTONOSUPPORT = 0x10045 => "Protocol not supported",
    EPROTOTYPE = 0x10046 => "Protocol wrong type for socket",
    ERANGE = 0x10047 => "Result too large",
    EROFS = 0x10048 => "Read-only file system",
    ESPIPE = 0x10049 => "Invalid seek",
    ESRCH = 0x1004A => "No such process",
    ESTALE = 0x1004B => "Stale file handle",
    ETIMEDOUT = 0x1004D => "Connection timed out",
    ETXTBSY = 0x1004E => "Text file busy",
    EXDEV = 0x1004F => "Cross-device link",
    ESOCKTNOSUPPORT = 0x1005E => "Socket type not supported",
    EPFNOSUPPORT = 0x10060 => "Protocol family not supported",
    ESHUTDOWN = 0x1006C => "Socket shutdown",
    EHOSTDOWN = 0x10070 => "Host is down",
    ENODATA = 0x10071 => "No data available",

    /// Not part of POSIX. Returned when a native errno has no
    /// mapping.
    ENONSTANDARD = 0x1FFFF => "Unknown error",
}

impl PalError {
    // POSIX permits these to share a value with another name. We
    // always make them equal so that nobody can depend on
    // distinguishing them, which would not work on every
    // platform.

    /// Operation not supported on socket.
    pub const EOPNOTSUPP: Self = Self::ENOTSUP;
    /// Operation would block.
    pub const EWOULDBLOCK: Self = Self::EAGAIN;

    /// Returns the raw tag.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Reports whether this is [`PalError::SUCCESS`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::SUCCESS)
    }

    /// Translates a native errno. See [`to_pal_error`].
    ///
    /// [`to_pal_error`]: crate::to_pal_error
    pub fn from_platform(errno: c_int) -> Self {
        crate::convert::to_pal_error(errno)
    }
}

impl TryFrom<i32> for PalError {
    type Error = UnknownPalError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_raw(code).ok_or(UnknownPalError(code))
    }
}

impl From<PalError> for i32 {
    fn from(err: PalError) -> Self {
        err.code()
    }
}

impl fmt::Display for PalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.name())
    }
}
