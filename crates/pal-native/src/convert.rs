//! Translation between native errnos and [`PalError`].

use core::ffi::c_int;

use buggy::{Bug, bug};

use crate::pal::PalError;

/// Translates a native errno into a [`PalError`].
///
/// `0` is [`PalError::SUCCESS`]. Codes without a mapping,
/// including names that don't exist on this platform, are
/// [`PalError::ENONSTANDARD`].
pub fn to_pal_error(platform_errno: c_int) -> PalError {
    match platform_errno {
        0 => PalError::SUCCESS,
        libc::E2BIG => PalError::E2BIG,
        libc::EACCES => PalError::EACCES,
        libc::EADDRINUSE => PalError::EADDRINUSE,
        libc::EADDRNOTAVAIL => PalError::EADDRNOTAVAIL,
        libc::EAFNOSUPPORT => PalError::EAFNOSUPPORT,
        libc::EAGAIN => PalError::EAGAIN,
        libc::EALREADY => PalError::EALREADY,
        libc::EBADF => PalError::EBADF,
        libc::EBADMSG => PalError::EBADMSG,
        libc::EBUSY => PalError::EBUSY,
        libc::ECANCELED => PalError::ECANCELED,
        libc::ECHILD => PalError::ECHILD,
        libc::ECONNABORTED => PalError::ECONNABORTED,
        libc::ECONNREFUSED => PalError::ECONNREFUSED,
        libc::ECONNRESET => PalError::ECONNRESET,
        libc::EDEADLK => PalError::EDEADLK,
        libc::EDESTADDRREQ => PalError::EDESTADDRREQ,
        libc::EDOM => PalError::EDOM,
        libc::EDQUOT => PalError::EDQUOT,
        libc::EEXIST => PalError::EEXIST,
        libc::EFAULT => PalError::EFAULT,
        libc::EFBIG => PalError::EFBIG,
        libc::EHOSTUNREACH => PalError::EHOSTUNREACH,
        libc::EIDRM => PalError::EIDRM,
        libc::EILSEQ => PalError::EILSEQ,
        libc::EINPROGRESS => PalError::EINPROGRESS,
        libc::EINTR => PalError::EINTR,
        libc::EINVAL => PalError::EINVAL,
        libc::EIO => PalError::EIO,
        libc::EISCONN => PalError::EISCONN,
        libc::EISDIR => PalError::EISDIR,
        libc::ELOOP => PalError::ELOOP,
        libc::EMFILE => PalError::EMFILE,
        libc::EMLINK => PalError::EMLINK,
        libc::EMSGSIZE => PalError::EMSGSIZE,
        libc::EMULTIHOP => PalError::EMULTIHOP,
        libc::ENAMETOOLONG => PalError::ENAMETOOLONG,
        libc::ENETDOWN => PalError::ENETDOWN,
        libc::ENETRESET => PalError::ENETRESET,
        libc::ENETUNREACH => PalError::ENETUNREACH,
        libc::ENFILE => PalError::ENFILE,
        libc::ENOBUFS => PalError::ENOBUFS,
        libc::ENODEV => PalError::ENODEV,
        libc::ENOENT => PalError::ENOENT,
        libc::ENOEXEC => PalError::ENOEXEC,
        libc::ENOLCK => PalError::ENOLCK,
        libc::ENOLINK => PalError::ENOLINK,
        libc::ENOMEM => PalError::ENOMEM,
        libc::ENOMSG => PalError::ENOMSG,
        libc::ENOPROTOOPT => PalError::ENOPROTOOPT,
        libc::ENOSPC => PalError::ENOSPC,
        libc::ENOSYS => PalError::ENOSYS,
        libc::ENOTCONN => PalError::ENOTCONN,
        libc::ENOTDIR => PalError::ENOTDIR,
        libc::ENOTEMPTY => PalError::ENOTEMPTY,
        #[cfg(not(target_os = "netbsd"))]
        libc::ENOTRECOVERABLE => PalError::ENOTRECOVERABLE,
        libc::ENOTSOCK => PalError::ENOTSOCK,
        libc::ENOTSUP => PalError::ENOTSUP,
        libc::ENOTTY => PalError::ENOTTY,
        libc::ENXIO => PalError::ENXIO,
        libc::EOVERFLOW => PalError::EOVERFLOW,
        #[cfg(not(target_os = "netbsd"))]
        libc::EOWNERDEAD => PalError::EOWNERDEAD,
        libc::EPERM => PalError::EPERM,
        libc::EPIPE => PalError::EPIPE,
        libc::EPROTO => PalError::EPROTO,
        libc::EPROTONOSUPPORT => PalError::EPROTONOSUPPORT,
        libc::EPROTOTYPE => PalError::EPROTOTYPE,
        libc::ERANGE => PalError::ERANGE,
        libc::EROFS => PalError::EROFS,
        libc::ESPIPE => PalError::ESPIPE,
        libc::ESRCH => PalError::ESRCH,
        libc::ESTALE => PalError::ESTALE,
        libc::ETIMEDOUT => PalError::ETIMEDOUT,
        libc::ETXTBSY => PalError::ETXTBSY,
        libc::EXDEV => PalError::EXDEV,
        libc::ESOCKTNOSUPPORT => PalError::ESOCKTNOSUPPORT,
        libc::EPFNOSUPPORT => PalError::EPFNOSUPPORT,
        libc::ESHUTDOWN => PalError::ESHUTDOWN,
        libc::EHOSTDOWN => PalError::EHOSTDOWN,
        libc::ENODATA => PalError::ENODATA,

        // POSIX allows these to equal `ENOTSUP` and `EAGAIN`,
        // which is common. When they're equal the arms above
        // already matched, so these guards only fire when the
        // platform gives them their own values.
        v if v == libc::EOPNOTSUPP => PalError::EOPNOTSUPP,
        v if v == libc::EWOULDBLOCK => PalError::EWOULDBLOCK,

        _ => PalError::ENONSTANDARD,
    }
}

/// Synthesizes a native errno from a [`PalError`].
///
/// This is NOT the inverse of [`to_pal_error`]. Aliased names
/// collapse into one tag, so `platform -> pal -> platform` can
/// return a different (but equivalent) code.
///
/// # Errors
///
/// [`PalError::ENONSTANDARD`] has no native value. Passing it
/// (or a tag whose native name doesn't exist on this platform)
/// is a bug in the caller: it panics in debug builds and
/// returns [`Bug`] otherwise.
pub fn to_platform_errno(pal: PalError) -> Result<c_int, Bug> {
    let code = match pal {
        PalError::SUCCESS => 0,
        PalError::E2BIG => libc::E2BIG,
        PalError::EACCES => libc::EACCES,
        PalError::EADDRINUSE => libc::EADDRINUSE,
        PalError::EADDRNOTAVAIL => libc::EADDRNOTAVAIL,
        PalError::EAFNOSUPPORT => libc::EAFNOSUPPORT,
        PalError::EAGAIN => libc::EAGAIN,
        PalError::EALREADY => libc::EALREADY,
        PalError::EBADF => libc::EBADF,
        PalError::EBADMSG => libc::EBADMSG,
        PalError::EBUSY => libc::EBUSY,
        PalError::ECANCELED => libc::ECANCELED,
        PalError::ECHILD => libc::ECHILD,
        PalError::ECONNABORTED => libc::ECONNABORTED,
        PalError::ECONNREFUSED => libc::ECONNREFUSED,
        PalError::ECONNRESET => libc::ECONNRESET,
        PalError::EDEADLK => libc::EDEADLK,
        PalError::EDESTADDRREQ => libc::EDESTADDRREQ,
        PalError::EDOM => libc::EDOM,
        PalError::EDQUOT => libc::EDQUOT,
        PalError::EEXIST => libc::EEXIST,
        PalError::EFAULT => libc::EFAULT,
        PalError::EFBIG => libc::EFBIG,
        PalError::EHOSTUNREACH => libc::EHOSTUNREACH,
        PalError::EIDRM => libc::EIDRM,
        PalError::EILSEQ => libc::EILSEQ,
        PalError::EINPROGRESS => libc::EINPROGRESS,
        PalError::EINTR => libc::EINTR,
        PalError::EINVAL => libc::EINVAL,
        PalError::EIO => libc::EIO,
        PalError::EISCONN => libc::EISCONN,
        PalError::EISDIR => libc::EISDIR,
        PalError::ELOOP => libc::ELOOP,
        PalError::EMFILE => libc::EMFILE,
        PalError::EMLINK => libc::EMLINK,
        PalError::EMSGSIZE => libc::EMSGSIZE,
        PalError::EMULTIHOP => libc::EMULTIHOP,
        PalError::ENAMETOOLONG => libc::ENAMETOOLONG,
        PalError::ENETDOWN => libc::ENETDOWN,
        PalError::ENETRESET => libc::ENETRESET,
        PalError::ENETUNREACH => libc::ENETUNREACH,
        PalError::ENFILE => libc::ENFILE,
        PalError::ENOBUFS => libc::ENOBUFS,
        PalError::ENODEV => libc::ENODEV,
        PalError::ENOENT => libc::ENOENT,
        PalError::ENOEXEC => libc::ENOEXEC,
        PalError::ENOLCK => libc::ENOLCK,
        PalError::ENOLINK => libc::ENOLINK,
        PalError::ENOMEM => libc::ENOMEM,
        PalError::ENOMSG => libc::ENOMSG,
        PalError::ENOPROTOOPT => libc::ENOPROTOOPT,
        PalError::ENOSPC => libc::ENOSPC,
        PalError::ENOSYS => libc::ENOSYS,
        PalError::ENOTCONN => libc::ENOTCONN,
        PalError::ENOTDIR => libc::ENOTDIR,
        PalError::ENOTEMPTY => libc::ENOTEMPTY,
        #[cfg(not(target_os = "netbsd"))]
        PalError::ENOTRECOVERABLE => libc::ENOTRECOVERABLE,
        PalError::ENOTSOCK => libc::ENOTSOCK,
        PalError::ENOTSUP => libc::ENOTSUP,
        PalError::ENOTTY => libc::ENOTTY,
        PalError::ENXIO => libc::ENXIO,
        PalError::EOVERFLOW => libc::EOVERFLOW,
        #[cfg(not(target_os = "netbsd"))]
        PalError::EOWNERDEAD => libc::EOWNERDEAD,
        PalError::EPERM => libc::EPERM,
        PalError::EPIPE => libc::EPIPE,
        PalError::EPROTO => libc::EPROTO,
        PalError::EPROTONOSUPPORT => libc::EPROTONOSUPPORT,
        PalError::EPROTOTYPE => libc::EPROTOTYPE,
        PalError::ERANGE => libc::ERANGE,
        PalError::EROFS => libc::EROFS,
        PalError::ESPIPE => libc::ESPIPE,
        PalError::ESRCH => libc::ESRCH,
        PalError::ESTALE => libc::ESTALE,
        PalError::ETIMEDOUT => libc::ETIMEDOUT,
        PalError::ETXTBSY => libc::ETXTBSY,
        PalError::EXDEV => libc::EXDEV,
        PalError::ESOCKTNOSUPPORT => libc::ESOCKTNOSUPPORT,
        PalError::EPFNOSUPPORT => libc::EPFNOSUPPORT,
        PalError::ESHUTDOWN => libc::ESHUTDOWN,
        PalError::EHOSTDOWN => libc::EHOSTDOWN,
        PalError::ENODATA => libc::ENODATA,

        // Keep this list exhaustive (no `_` arm) so that adding a
        // tag fails to compile until it's mapped here. A new tag
        // probably needs an arm in `to_pal_error` as well.
        #[cfg(target_os = "netbsd")]
        PalError::ENOTRECOVERABLE | PalError::EOWNERDEAD => {
            bug!("`PalError` has no native value on this platform")
        }
        PalError::ENONSTANDARD => bug!("`ENONSTANDARD` has no native value"),
    };
    Ok(code)
}

/// Like [`to_platform_errno`], but accepts a raw tag.
///
/// # Errors
///
/// A `code` that isn't a [`PalError`] is a bug in the caller.
pub fn raw_to_platform_errno(code: i32) -> Result<c_int, Bug> {
    let Some(pal) = PalError::from_raw(code) else {
        bug!("unknown `PalError` code")
    };
    to_platform_errno(pal)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Native names that don't alias anything else in the table.
    const CANONICAL: &[(c_int, PalError)] = &[
        (libc::E2BIG, PalError::E2BIG),
        (libc::EACCES, PalError::EACCES),
        (libc::EADDRINUSE, PalError::EADDRINUSE),
        (libc::EADDRNOTAVAIL, PalError::EADDRNOTAVAIL),
        (libc::EAFNOSUPPORT, PalError::EAFNOSUPPORT),
        (libc::EAGAIN, PalError::EAGAIN),
        (libc::EALREADY, PalError::EALREADY),
        (libc::EBADF, PalError::EBADF),
        (libc::EBADMSG, PalError::EBADMSG),
        (libc::EBUSY, PalError::EBUSY),
        (libc::ECANCELED, PalError::ECANCELED),
        (libc::ECHILD, PalError::ECHILD),
        (libc::ECONNABORTED, PalError::ECONNABORTED),
        (libc::ECONNREFUSED, PalError::ECONNREFUSED),
        (libc::ECONNRESET, PalError::ECONNRESET),
        (libc::EDEADLK, PalError::EDEADLK),
        (libc::EDESTADDRREQ, PalError::EDESTADDRREQ),
        (libc::EDOM, PalError::EDOM),
        (libc::EDQUOT, PalError::EDQUOT),
        (libc::EEXIST, PalError::EEXIST),
        (libc::EFAULT, PalError::EFAULT),
        (libc::EFBIG, PalError::EFBIG),
        (libc::EHOSTUNREACH, PalError::EHOSTUNREACH),
        (libc::EIDRM, PalError::EIDRM),
        (libc::EILSEQ, PalError::EILSEQ),
        (libc::EINPROGRESS, PalError::EINPROGRESS),
        (libc::EINTR, PalError::EINTR),
        (libc::EINVAL, PalError::EINVAL),
        (libc::EIO, PalError::EIO),
        (libc::EISCONN, PalError::EISCONN),
        (libc::EISDIR, PalError::EISDIR),
        (libc::ELOOP, PalError::ELOOP),
        (libc::EMFILE, PalError::EMFILE),
        (libc::EMLINK, PalError::EMLINK),
        (libc::EMSGSIZE, PalError::EMSGSIZE),
        (libc::EMULTIHOP, PalError::EMULTIHOP),
        (libc::ENAMETOOLONG, PalError::ENAMETOOLONG),
        (libc::ENETDOWN, PalError::ENETDOWN),
        (libc::ENETRESET, PalError::ENETRESET),
        (libc::ENETUNREACH, PalError::ENETUNREACH),
        (libc::ENFILE, PalError::ENFILE),
        (libc::ENOBUFS, PalError::ENOBUFS),
        (libc::ENODEV, PalError::ENODEV),
        (libc::ENOENT, PalError::ENOENT),
        (libc::ENOEXEC, PalError::ENOEXEC),
        (libc::ENOLCK, PalError::ENOLCK),
        (libc::ENOLINK, PalError::ENOLINK),
        (libc::ENOMEM, PalError::ENOMEM),
        (libc::ENOMSG, PalError::ENOMSG),
        (libc::ENOPROTOOPT, PalError::ENOPROTOOPT),
        (libc::ENOSPC, PalError::ENOSPC),
        (libc::ENOSYS, PalError::ENOSYS),
        (libc::ENOTCONN, PalError::ENOTCONN),
        (libc::ENOTDIR, PalError::ENOTDIR),
        (libc::ENOTEMPTY, PalError::ENOTEMPTY),
        (libc::ENOTSOCK, PalError::ENOTSOCK),
        (libc::ENOTSUP, PalError::ENOTSUP),
        (libc::ENOTTY, PalError::ENOTTY),
        (libc::ENXIO, PalError::ENXIO),
        (libc::EOVERFLOW, PalError::EOVERFLOW),
        (libc::EPERM, PalError::EPERM),
        (libc::EPIPE, PalError::EPIPE),
        (libc::EPROTO, PalError::EPROTO),
        (libc::EPROTONOSUPPORT, PalError::EPROTONOSUPPORT),
        (libc::EPROTOTYPE, PalError::EPROTOTYPE),
        (libc::ERANGE, PalError::ERANGE),
        (libc::EROFS, PalError::EROFS),
        (libc::ESPIPE, PalError::ESPIPE),
        (libc::ESRCH, PalError::ESRCH),
        (libc::ESTALE, PalError::ESTALE),
        (libc::ETIMEDOUT, PalError::ETIMEDOUT),
        (libc::ETXTBSY, PalError::ETXTBSY),
        (libc::EXDEV, PalError::EXDEV),
        (libc::ESOCKTNOSUPPORT, PalError::ESOCKTNOSUPPORT),
        (libc::EPFNOSUPPORT, PalError::EPFNOSUPPORT),
        (libc::ESHUTDOWN, PalError::ESHUTDOWN),
        (libc::EHOSTDOWN, PalError::EHOSTDOWN),
        (libc::ENODATA, PalError::ENODATA),
    ];

    /// Names that some POSIX variants don't define.
    #[cfg(not(target_os = "netbsd"))]
    const OPTIONAL: &[(c_int, PalError)] = &[
        (libc::ENOTRECOVERABLE, PalError::ENOTRECOVERABLE),
        (libc::EOWNERDEAD, PalError::EOWNERDEAD),
    ];
    #[cfg(target_os = "netbsd")]
    const OPTIONAL: &[(c_int, PalError)] = &[];

    fn mapped() -> impl Iterator<Item = (c_int, PalError)> {
        CANONICAL.iter().chain(OPTIONAL).copied()
    }

    fn is_known(errno: c_int) -> bool {
        errno == 0
            || errno == libc::EOPNOTSUPP
            || errno == libc::EWOULDBLOCK
            || mapped().any(|(v, _)| v == errno)
    }

    #[test]
    fn test_to_pal_error() {
        for (i, (errno, want)) in mapped().enumerate() {
            let got = to_pal_error(errno);
            assert_eq!(got, want, "#{i}: errno {errno}");
        }
    }

    #[test]
    fn test_success() {
        assert_eq!(to_pal_error(0), PalError::SUCCESS);
        assert_eq!(to_platform_errno(PalError::SUCCESS), Ok(0));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(to_pal_error(libc::EWOULDBLOCK), PalError::EAGAIN);
        assert_eq!(to_pal_error(libc::EOPNOTSUPP), PalError::ENOTSUP);
        assert_eq!(to_pal_error(libc::EWOULDBLOCK), to_pal_error(libc::EAGAIN));
        assert_eq!(to_pal_error(libc::EOPNOTSUPP), to_pal_error(libc::ENOTSUP));

        // The way back always picks the canonical name.
        assert_eq!(to_platform_errno(PalError::EWOULDBLOCK), Ok(libc::EAGAIN));
        assert_eq!(to_platform_errno(PalError::EOPNOTSUPP), Ok(libc::ENOTSUP));
    }

    #[test]
    fn test_unknown_is_nonstandard() {
        for errno in [-1, c_int::MIN, c_int::MAX, 0x10001, 0x1FFFF] {
            assert!(!is_known(errno));
            assert_eq!(to_pal_error(errno), PalError::ENONSTANDARD, "{errno}");
        }
    }

    #[test]
    fn test_round_trip() {
        for (i, (errno, _)) in mapped().enumerate() {
            let pal = to_pal_error(errno);
            assert_eq!(to_platform_errno(pal), Ok(errno), "#{i}: {}", pal.name());
        }
    }

    #[test]
    fn test_every_tag_is_mapped() {
        for &pal in PalError::ALL {
            if pal == PalError::ENONSTANDARD {
                continue;
            }
            #[cfg(target_os = "netbsd")]
            if matches!(pal, PalError::ENOTRECOVERABLE | PalError::EOWNERDEAD) {
                continue;
            }
            let errno = to_platform_errno(pal).unwrap();
            assert_eq!(to_pal_error(errno), pal, "{}", pal.name());
        }
    }

    #[test]
    fn test_raw_to_platform_errno() {
        assert_eq!(
            raw_to_platform_errno(PalError::ENOENT.code()),
            Ok(libc::ENOENT)
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ENONSTANDARD")]
    fn test_nonstandard_is_a_bug() {
        let _ = to_platform_errno(PalError::ENONSTANDARD);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown `PalError` code")]
    fn test_raw_unknown_is_a_bug() {
        let _ = raw_to_platform_errno(0x1002B);
    }

    proptest! {
        #[test]
        fn prop_unmapped_is_nonstandard(errno in any::<c_int>()) {
            prop_assume!(!is_known(errno));
            prop_assert_eq!(to_pal_error(errno), PalError::ENONSTANDARD);
        }

        #[test]
        fn prop_mapped_is_not_nonstandard((errno, want) in prop::sample::select(CANONICAL)) {
            prop_assert_ne!(want, PalError::ENONSTANDARD);
            prop_assert_eq!(to_pal_error(errno), want);
        }
    }
}
