//! Null-terminated path handling.

use alloc::vec::Vec;
use core::{
    ffi::{CStr, c_char},
    fmt,
    mem::MaybeUninit,
    ops::Deref,
    slice, str,
};

/// A borrowed file path.
#[repr(transparent)]
pub struct Path(
    /// NOT necessarily null terminated, since `std::path::Path`
    /// never is. A null byte anywhere but the very end makes
    /// the path invalid; see [`Path::has_interior_nul`].
    [u8],
);

impl Path {
    /// Creates a `Path`.
    ///
    /// `path` may end with a single null byte. Paths with a null
    /// byte anywhere else are rejected by the filesystem calls.
    pub fn new<S: AsRef<[u8]> + ?Sized>(path: &S) -> &Self {
        Self::from_raw_bytes(path.as_ref())
    }

    fn from_raw_bytes(path: &[u8]) -> &Self {
        // SAFETY: `&[u8]` and `&Self` have the same memory
        // layout.
        unsafe { &*(path as *const [u8] as *const Self) }
    }

    /// Create a [`Path`] from a raw pointer.
    ///
    /// # Safety
    ///
    /// - `ptr` must not be null.
    /// - `ptr` must be null terminated.
    /// - `ptr` must be valid for reads up to the null
    ///   terminator.
    /// - `ptr` must not be mutated for the duration of `'a`.
    pub unsafe fn from_ptr<'a>(ptr: *const c_char) -> &'a Self {
        debug_assert!(!ptr.is_null());

        // SAFETY: See the function's safety docs.
        let len = unsafe { libc::strlen(ptr) };
        // SAFETY: See the function's safety docs. `len+1`
        // includes the null terminator, which must exist.
        let path = unsafe {
            #[allow(clippy::arithmetic_side_effects)]
            slice::from_raw_parts(ptr.cast::<u8>(), len + 1)
        };
        Self::from_raw_bytes(path)
    }

    /// Create a [`Path`] from a [`CStr`].
    pub fn from_cstr(path: &CStr) -> &Self {
        Self::from_raw_bytes(path.to_bytes_with_nul())
    }

    /// Returns the path *without* the trailing null byte, if
    /// any.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.strip_suffix(&[0]).unwrap_or(&self.0)
    }

    /// Reports whether the path has a null byte before its end.
    ///
    /// libc would silently act on the prefix before the null
    /// byte.
    pub fn has_interior_nul(&self) -> bool {
        memchr::memchr(0, self.as_bytes()).is_some()
    }

    /// Converts the `Path` into a [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self)
    }

    /// Invokes `f` with `Path` converted to a null-terminated
    /// C-style string.
    pub fn with_cstr<R>(&self, f: &dyn Fn(*const c_char) -> R) -> R {
        if self.0.ends_with(&[0]) {
            f(self.0.as_ptr().cast())
        } else {
            self.with_cstr_no_null(f)
        }
    }

    #[cold]
    #[inline(never)]
    fn with_cstr_no_null<R>(&self, f: &dyn Fn(*const c_char) -> R) -> R {
        let path = &self.0;

        // Same as the stdlib's small C string buffer.
        const MAX_STACK: usize = 384;
        if path.len() < MAX_STACK {
            let mut buf = MaybeUninit::<[u8; MAX_STACK]>::uninit();
            // SAFETY: `buf` is a valid pointer and
            // `path.len() < buf.len()`.
            unsafe {
                let dst = buf.as_mut_ptr().cast::<u8>();
                dst.copy_from_nonoverlapping(path.as_ptr(), path.len());
                dst.add(path.len()).write(0);
            }
            f(buf.as_ptr().cast())
        } else {
            f(self.to_path_buf().as_ptr())
        }
    }
}

impl Eq for Path {}
impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        *self == *Path::new(other)
    }
}

impl PartialEq<&str> for PathBuf {
    fn eq(&self, other: &&str) -> bool {
        **self == **other
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for CStr {
    fn as_ref(&self) -> &Path {
        Path::from_cstr(self)
    }
}

#[cfg(any(test, feature = "std"))]
impl AsRef<Path> for std::path::PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path().as_ref()
    }
}

#[cfg(any(test, feature = "std"))]
impl AsRef<Path> for std::path::Path {
    fn as_ref(&self) -> &Path {
        // NB: `OsStr::as_encoded_bytes` returns the raw bytes on
        // Unixy platforms.
        Path::new(self.as_os_str().as_encoded_bytes())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match str::from_utf8(self.as_bytes()) {
            Ok(s) => s.fmt(f),
            Err(_) => write!(f, "{:?}", self.as_bytes()),
        }
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&format_args!("{self}")).finish()
    }
}

/// An owned [`Path`].
#[derive(Clone, Eq, PartialEq)]
pub struct PathBuf {
    /// NB: unlike `Path`, this *always* has a null terminator.
    buf: Vec<u8>,
}

impl PathBuf {
    /// This is a method on `PathBuf` instead of `Path` because
    /// `PathBuf` always has a null terminator.
    pub(crate) fn as_ptr(&self) -> *const c_char {
        self.buf.as_ptr().cast()
    }

    fn as_path(&self) -> &Path {
        Path::from_raw_bytes(&self.buf)
    }

    /// Returns the path as a [`CStr`].
    pub fn as_cstr(&self) -> &CStr {
        // SAFETY: `buf` always ends with exactly one null byte
        // and has no other null bytes.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.buf) }
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl<'a> From<&'a Path> for PathBuf {
    /// Truncates `path` at an interior null byte, if any.
    fn from(path: &'a Path) -> Self {
        let src = path.as_bytes();
        let src = memchr::memchr(0, src)
            .and_then(|idx| src.get(..idx))
            .unwrap_or(src);
        let mut buf = Vec::with_capacity(src.len().saturating_add(1));
        buf.extend_from_slice(src);
        buf.push(0);
        Self { buf }
    }
}

#[cfg(any(test, feature = "std"))]
impl From<PathBuf> for std::path::PathBuf {
    fn from(mut path: PathBuf) -> Self {
        use std::os::unix::ffi::OsStringExt;

        let _ = path.buf.pop();
        std::ffi::OsString::from_vec(path.buf).into()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

impl fmt::Debug for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
