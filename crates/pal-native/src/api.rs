use core::ffi::c_int;

use buggy::BugExt;
use tracing::{debug, error};

use crate::{
    errno::Errno,
    error::Error,
    path::{Path, PathBuf},
    sys::imp,
};

/// Resolves `path` to a canonical absolute path.
///
/// See `realpath(3)`.
pub fn realpath(path: impl AsRef<Path>) -> Result<PathBuf, Errno> {
    let path = check_nul(path.as_ref())?;
    imp::realpath(path).inspect_err(|err| debug!(%path, %err, "`realpath` failed"))
}

/// Rejects paths that libc would truncate at a null byte.
fn check_nul(path: &Path) -> Result<&Path, Errno> {
    if path.has_interior_nul() {
        debug!(%path, "path contains a null byte");
        return Err(Errno::EINVAL);
    }
    Ok(path)
}

/// A raw `i32` is not a [`PathConfName`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown `PathConfName`: {0}")]
pub struct UnknownPathConfName(pub i32);

/// A configurable filesystem limit.
///
/// The values are platform independent; see
/// [`PathConfName::to_native`] for the platform's `_PC_*`
/// value.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(non_camel_case_types)]
pub enum PathConfName {
    /// Maximum number of links to a file.
    LINK_MAX = 1,
    /// Maximum length of a formatted input line.
    MAX_CANON = 2,
    /// Maximum length of an input line.
    MAX_INPUT = 3,
    /// Maximum length of a filename.
    NAME_MAX = 4,
    /// Maximum length of a relative pathname.
    PATH_MAX = 5,
    /// Size of the pipe buffer.
    PIPE_BUF = 6,
    /// Whether `chown` is restricted.
    CHOWN_RESTRICTED = 7,
    /// Whether overlong filenames are an error.
    NO_TRUNC = 8,
    /// The value that disables special terminal characters.
    VDISABLE = 9,
}

impl PathConfName {
    /// Every name, in ABI order.
    pub const ALL: [Self; 9] = [
        Self::LINK_MAX,
        Self::MAX_CANON,
        Self::MAX_INPUT,
        Self::NAME_MAX,
        Self::PATH_MAX,
        Self::PIPE_BUF,
        Self::CHOWN_RESTRICTED,
        Self::NO_TRUNC,
        Self::VDISABLE,
    ];

    /// Returns the platform's `_PC_*` value.
    pub const fn to_native(self) -> c_int {
        match self {
            Self::LINK_MAX => imp::_PC_LINK_MAX,
            Self::MAX_CANON => imp::_PC_MAX_CANON,
            Self::MAX_INPUT => imp::_PC_MAX_INPUT,
            Self::NAME_MAX => imp::_PC_NAME_MAX,
            Self::PATH_MAX => imp::_PC_PATH_MAX,
            Self::PIPE_BUF => imp::_PC_PIPE_BUF,
            Self::CHOWN_RESTRICTED => imp::_PC_CHOWN_RESTRICTED,
            Self::NO_TRUNC => imp::_PC_NO_TRUNC,
            Self::VDISABLE => imp::_PC_VDISABLE,
        }
    }
}

impl TryFrom<i32> for PathConfName {
    type Error = UnknownPathConfName;

    fn try_from(name: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|v| *v as i32 == name)
            .ok_or(UnknownPathConfName(name))
    }
}

/// Queries a configurable limit for `path`.
///
/// Returns `Ok(None)` if the limit is indeterminate.
///
/// See `pathconf(3)`.
pub fn pathconf(path: impl AsRef<Path>, name: PathConfName) -> Result<Option<i64>, Errno> {
    let path = check_nul(path.as_ref())?;
    let limit = imp::pathconf(path, name.to_native())
        .inspect_err(|err| debug!(%path, ?name, %err, "`pathconf` failed"))?;
    Ok(limit.map(i64::from))
}

/// Like [`pathconf`], but accepts a raw [`PathConfName`].
///
/// # Errors
///
/// An unknown `name` is a bug in the caller: it panics in debug
/// builds and returns [`Error::Bug`] otherwise.
pub fn pathconf_raw(path: impl AsRef<Path>, name: i32) -> Result<Option<i64>, Error> {
    let name = PathConfName::try_from(name)
        .inspect_err(|err| error!(%err, "invalid `pathconf` name"))
        .assume("`name` must be a `PathConfName`")?;
    Ok(pathconf(path, name)?)
}

/// Returns the maximum path length, falling back to
/// `PATH_MAX` if the root filesystem doesn't say.
pub fn max_path() -> i64 {
    match imp::pathconf(Path::new("/\0"), imp::_PC_PATH_MAX) {
        Ok(Some(limit)) => i64::from(limit),
        res => {
            debug!(?res, "using `PATH_MAX`");
            i64::from(imp::PATH_MAX)
        }
    }
}

/// Flushes filesystem buffers to disk.
///
/// See `sync(2)`.
pub fn sync() {
    imp::sync()
}

/// Reports whether this build targets macOS.
pub const fn has_osx_support() -> bool {
    imp::HAS_OSX_SUPPORT
}

#[cfg(test)]
mod tests {
    use std::fs;

    use test_log::test;

    use super::*;
    use crate::pal::PalError;

    #[test]
    fn test_realpath() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, b"hello").unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&file, &link).unwrap();

        let want = fs::canonicalize(&file).unwrap();

        let got = realpath(&link).unwrap();
        assert_eq!(std::path::PathBuf::from(got), want);

        // `.` and `..` components are resolved too.
        let dotted = dir
            .path()
            .join(".")
            .join("..")
            .join(dir.path().file_name().unwrap())
            .join("file");
        let got = realpath(&dotted).unwrap();
        assert_eq!(std::path::PathBuf::from(got), want);
    }

    #[test]
    fn test_realpath_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let err = realpath(dir.path().join("missing")).unwrap_err();
        assert_eq!(err, Errno::ENOENT);
        assert_eq!(err.to_pal(), PalError::ENOENT);
    }

    #[test]
    fn test_realpath_interior_nul() {
        let dir = tempfile::tempdir().unwrap();
        let mut path = dir.path().as_os_str().as_encoded_bytes().to_vec();
        path.extend_from_slice(b"\0/missing");

        // The prefix exists, so libc alone would succeed.
        let err = realpath(Path::new(&path)).unwrap_err();
        assert_eq!(err, Errno::EINVAL);
        assert_eq!(err.to_pal(), PalError::EINVAL);

        // A single trailing null byte is fine.
        let mut path = dir.path().as_os_str().as_encoded_bytes().to_vec();
        path.push(0);
        let got = realpath(Path::new(&path)).unwrap();
        assert_eq!(
            std::path::PathBuf::from(got),
            fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[test]
    fn test_path_conf_name_values() {
        for (i, name) in PathConfName::ALL.into_iter().enumerate() {
            let raw = i32::try_from(i).unwrap() + 1;
            assert_eq!(name as i32, raw);
            assert_eq!(PathConfName::try_from(raw), Ok(name));
        }
        for raw in [0, 10, -1, i32::MAX] {
            assert_eq!(PathConfName::try_from(raw), Err(UnknownPathConfName(raw)));
        }
    }

    #[test]
    fn test_pathconf() {
        let dir = tempfile::tempdir().unwrap();
        let name_max = pathconf(dir.path(), PathConfName::NAME_MAX)
            .unwrap()
            .unwrap();
        assert!(name_max >= 14, "{name_max}");

        let path_max = pathconf(dir.path(), PathConfName::PATH_MAX)
            .unwrap()
            .unwrap();
        assert!(path_max >= 256, "{path_max}");

        // Every name is understood by the platform, even if it
        // has no limit.
        for name in PathConfName::ALL {
            if let Err(err) = pathconf(dir.path(), name) {
                assert_eq!(err, Errno::EINVAL, "{name:?}");
            }
        }
    }

    #[test]
    fn test_pathconf_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        let err = pathconf(dir.path().join("missing"), PathConfName::NAME_MAX).unwrap_err();
        assert_eq!(err.to_pal(), PalError::ENOENT);
    }

    #[test]
    fn test_pathconf_interior_nul() {
        let dir = tempfile::tempdir().unwrap();
        let mut path = dir.path().as_os_str().as_encoded_bytes().to_vec();
        path.extend_from_slice(b"\0/missing");

        let err = pathconf(Path::new(&path), PathConfName::NAME_MAX).unwrap_err();
        assert_eq!(err, Errno::EINVAL);

        let err = pathconf_raw(Path::new(&path), PathConfName::NAME_MAX as i32).unwrap_err();
        assert_eq!(err.to_pal(), PalError::EINVAL);
    }

    #[test]
    fn test_pathconf_raw() {
        let got = pathconf_raw("/", PathConfName::NAME_MAX as i32).unwrap();
        assert_eq!(got, pathconf("/", PathConfName::NAME_MAX).unwrap());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "PathConfName")]
    fn test_pathconf_raw_unknown_is_a_bug() {
        let _ = pathconf_raw("/", 42);
    }

    #[test]
    fn test_max_path() {
        // POSIX requires at least `_POSIX_PATH_MAX`.
        assert!(max_path() >= 256, "{}", max_path());
    }

    #[test]
    fn test_has_osx_support() {
        assert_eq!(has_osx_support(), cfg!(target_os = "macos"));
    }

    #[test]
    fn test_sync() {
        sync();
    }
}
