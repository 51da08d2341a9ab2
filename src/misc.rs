// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

/* misc utilities that do not really belong in any module */

use crate::error::Result;
use crate::pkcs11::*;

/// Emits a trace message when the `log` feature is enabled
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "log"))]
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

/// Emits a debug message when the `log` feature is enabled
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! map_err {
    ($map:expr, $err:tt) => {{
        $map.map_err(|e| $crate::error::Error::ck_rv_from_error($err, e))
    }};
}

/// Converts a host size into a `CK_ULONG`
pub fn to_ulong(size: usize) -> Result<CK_ULONG> {
    Ok(CK_ULONG::try_from(size)?)
}

/// Converts a `CK_ULONG` into a host size
pub fn to_usize(val: CK_ULONG) -> Result<usize> {
    Ok(usize::try_from(val)?)
}

/// Overwrites a buffer with zeros in a way the optimizer cannot elide
pub fn zeromem(mem: &mut [u8]) {
    for b in mem.iter_mut() {
        unsafe { std::ptr::write_volatile(b, 0) };
    }
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
}

/// Decodes a fixed size, blank padded UTF-8 field as found in the info
/// structures, trailing blanks (and NULs some modules use) are dropped
pub fn padded_utf8(field: &[u8]) -> Result<String> {
    let end = field
        .iter()
        .rposition(|b| *b != b' ' && *b != 0)
        .map_or(0, |p| p + 1);
    Ok(std::str::from_utf8(&field[..end])?.to_string())
}

/// Encodes a string into a fixed size, blank padded field
///
/// Fails if the string does not fit.
pub fn to_padded_utf8<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes = s.as_bytes();
    if bytes.len() > N {
        return Err(CKR_ARGUMENTS_BAD)?;
    }
    let mut field = [b' '; N];
    field[..bytes.len()].copy_from_slice(bytes);
    Ok(field)
}
