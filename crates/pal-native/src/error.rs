use core::convert::Infallible;

use buggy::Bug;

use crate::{errno::Errno, pal::PalError};

/// An error returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native call failed.
    #[error(transparent)]
    Errno(#[from] Errno),
    /// The caller broke an API contract.
    #[error(transparent)]
    Bug(#[from] Bug),
}

impl Error {
    /// Translates the error into the platform-independent
    /// vocabulary.
    ///
    /// A [`Bug`] is reported as [`PalError::EINVAL`].
    pub fn to_pal(&self) -> PalError {
        match self {
            Self::Errno(err) => err.to_pal(),
            Self::Bug(_) => PalError::EINVAL,
        }
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

#[cfg(test)]
mod tests {
    use buggy::BugExt;

    use super::*;

    #[test]
    fn test_to_pal() {
        let err = Error::from(Errno::ENOENT);
        assert_eq!(err.to_pal(), PalError::ENOENT);

        let err = Error::from(Errno::from_raw_os_error(libc::EACCES));
        assert_eq!(err.to_pal(), PalError::EACCES);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_bug_to_pal() {
        let err = Error::from(None::<()>.assume("unreachable").unwrap_err());
        assert_eq!(err.to_pal(), PalError::EINVAL);
    }
}
