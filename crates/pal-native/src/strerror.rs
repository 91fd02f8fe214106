//! Thread-safe error descriptions.
//!
//! Plain `strerror` returns a pointer into a global buffer, so
//! everything here goes through the XSI `strerror_r` with a
//! buffer owned by the caller.

use alloc::{borrow::ToOwned, string::String, vec};
use core::ffi::{CStr, c_int};

use tracing::{debug, warn};

use crate::sys::imp;

/// The first buffer size tried by [`describe_error_string`].
const INITIAL_BUF_SIZE: usize = 64;

/// The largest buffer [`describe_error_string`] will allocate.
const MAX_BUF_SIZE: usize = 4096;

/// Writes a description of `platform_errno` into `buf`.
///
/// Returns `None` if `buf` is too small to hold the entire
/// message. A truncated message is never returned. Unknown codes
/// still produce a message (e.g. `"Unknown error 1234"`).
pub fn describe_error(platform_errno: c_int, buf: &mut [u8]) -> Option<&CStr> {
    if buf.is_empty() {
        return None;
    }
    match imp::strerror_r(platform_errno, buf) {
        0 | libc::EINVAL => {}
        libc::ERANGE => {
            debug!(platform_errno, len = buf.len(), "buffer too small");
            return None;
        }
        code => {
            warn!(platform_errno, code, "unexpected `strerror_r` result");
            return None;
        }
    }
    CStr::from_bytes_until_nul(buf).ok()
}

/// Returns a description of `platform_errno`.
///
/// Unlike [`describe_error`] this never fails: it retries with
/// larger buffers.
pub fn describe_error_string(platform_errno: c_int) -> String {
    let mut size = INITIAL_BUF_SIZE;
    loop {
        let mut buf = vec![0u8; size];
        if let Some(msg) = describe_error(platform_errno, &mut buf) {
            return msg.to_string_lossy().into_owned();
        }
        if size >= MAX_BUF_SIZE {
            warn!(platform_errno, size, "giving up on `strerror_r`");
            return crate::to_pal_error(platform_errno).description().to_owned();
        }
        size = size.saturating_mul(2);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use test_log::test;

    use super::*;

    #[test]
    fn test_describe_known() {
        let mut buf = [0u8; 256];
        let msg = describe_error(libc::ENOENT, &mut buf).unwrap();
        assert!(!msg.to_bytes().is_empty());
    }

    #[test]
    fn test_describe_unknown() {
        // Unknown codes are described, not rejected.
        let mut buf = [0u8; 256];
        let msg = describe_error(0x7FFF_0000, &mut buf).unwrap();
        assert!(!msg.to_bytes().is_empty());
    }

    /// A buffer that can't fit the message must not report a
    /// truncated message as success.
    #[test]
    fn test_describe_too_small() {
        let full = describe_error_string(libc::ENAMETOOLONG);
        assert!(full.len() > 4, "{full:?}");

        let mut buf = [0u8; 4];
        assert_eq!(describe_error(libc::ENAMETOOLONG, &mut buf), None);

        let mut buf = [0u8; 0];
        assert_eq!(describe_error(libc::ENAMETOOLONG, &mut buf), None);
    }

    #[test]
    fn test_describe_exact_fit() {
        let full = describe_error_string(libc::EACCES);
        // Room for the message and its null terminator.
        let mut buf = vec![0u8; full.len() + 1];
        let msg = describe_error(libc::EACCES, &mut buf).unwrap();
        assert_eq!(msg.to_str().unwrap(), full);
    }

    #[test]
    fn test_describe_concurrent() {
        let want = describe_error_string(libc::EPERM);
        let handles = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (0..100)
                        .map(|_| {
                            let mut buf = [0u8; 128];
                            describe_error(libc::EPERM, &mut buf)
                                .unwrap()
                                .to_string_lossy()
                                .into_owned()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for h in handles {
            for got in h.join().unwrap() {
                assert_eq!(got, want);
            }
        }
    }
}
