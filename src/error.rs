// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! Error type shared by every codec in this crate
//!
//! Every [Error] carries a Cryptoki return value so that a layer which
//! talks to C callers can always hand back a meaningful `CK_RV`.

use std::error;
use std::fmt;

use crate::pkcs11::*;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    origin: Option<Box<dyn error::Error + Send + Sync>>,
    errmsg: Option<String>,
    ckrv: CK_RV,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /* A Cryptoki-style error, see ckrv Error field */
    CkError,
    /* The ABI variant could not be determined, see errmsg */
    Config,
    /* Stored length does not fit the requested shape, see errmsg */
    ShapeMismatch,
    /* The value was reported as not readable by the native module */
    Unavailable,
    /* The host could not satisfy an allocation */
    Allocation,
    /* Other error, see origin */
    Nested,
}

impl Error {
    pub fn ck_rv(ckrv: CK_RV) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: None,
            ckrv: ckrv,
        }
    }

    pub fn ck_rv_from_error<E>(ckrv: CK_RV, error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::CkError,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: ckrv,
        }
    }

    pub fn ck_rv_with_errmsg(ckrv: CK_RV, errmsg: String) -> Error {
        Error {
            kind: ErrorKind::CkError,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: ckrv,
        }
    }

    pub fn config(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::Config,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: CKR_GENERAL_ERROR,
        }
    }

    pub fn config_from_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::Config,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: CKR_GENERAL_ERROR,
        }
    }

    pub fn shape_mismatch(errmsg: String) -> Error {
        Error {
            kind: ErrorKind::ShapeMismatch,
            origin: None,
            errmsg: Some(errmsg),
            ckrv: CKR_ATTRIBUTE_VALUE_INVALID,
        }
    }

    pub fn unavailable(ck_type: CK_ULONG) -> Error {
        Error {
            kind: ErrorKind::Unavailable,
            origin: None,
            errmsg: Some(format!("value of type {:#x} is unavailable", ck_type)),
            ckrv: CKR_ATTRIBUTE_SENSITIVE,
        }
    }

    pub fn allocation(size: usize) -> Error {
        Error {
            kind: ErrorKind::Allocation,
            origin: None,
            errmsg: Some(format!("failed to allocate {} bytes", size)),
            ckrv: CKR_HOST_MEMORY,
        }
    }

    pub fn other_error<E>(error: E) -> Error
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error {
            kind: ErrorKind::Nested,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: CKR_GENERAL_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_shape_mismatch(&self) -> bool {
        self.kind == ErrorKind::ShapeMismatch
    }

    pub fn is_unavailable(&self) -> bool {
        self.kind == ErrorKind::Unavailable
    }

    pub fn rv(&self) -> CK_RV {
        self.ckrv
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ref e) = self.errmsg {
            return write!(f, "{}", e);
        }
        match self.kind {
            ErrorKind::CkError => match self.ckrv {
                CKR_GENERAL_ERROR => write!(f, "CKR_GENERAL_ERROR"),
                CKR_HOST_MEMORY => write!(f, "CKR_HOST_MEMORY"),
                CKR_ARGUMENTS_BAD => write!(f, "CKR_ARGUMENTS_BAD"),
                CKR_ATTRIBUTE_TYPE_INVALID => {
                    write!(f, "CKR_ATTRIBUTE_TYPE_INVALID")
                }
                CKR_ATTRIBUTE_VALUE_INVALID => {
                    write!(f, "CKR_ATTRIBUTE_VALUE_INVALID")
                }
                CKR_MECHANISM_PARAM_INVALID => {
                    write!(f, "CKR_MECHANISM_PARAM_INVALID")
                }
                _ => write!(f, "{:#x}", self.ckrv),
            },
            _ => match self.origin {
                Some(ref o) => o.fmt(f),
                None => write!(f, "{:?} ({:#x})", self.kind, self.ckrv),
            },
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.origin {
            Some(ref o) => Some(o.as_ref()),
            None => None,
        }
    }
}

impl From<CK_RV> for Error {
    fn from(ckrv: CK_RV) -> Error {
        Error::ck_rv(ckrv)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::other_error(error)
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(error: std::num::TryFromIntError) -> Error {
        Error::ck_rv_from_error(CKR_ARGUMENTS_BAD, error)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(error: std::str::Utf8Error) -> Error {
        Error {
            kind: ErrorKind::ShapeMismatch,
            origin: Some(error.into()),
            errmsg: None,
            ckrv: CKR_ATTRIBUTE_VALUE_INVALID,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Error {
        Error::config_from_error(error)
    }
}

#[macro_export]
macro_rules! err_rv {
    ($ck_err:expr) => {
        Err($crate::error::Error::ck_rv($ck_err))
    };
}

#[macro_export]
macro_rules! err_shape {
    ($($arg:tt)*) => {
        Err($crate::error::Error::shape_mismatch(format!($($arg)*)))
    };
}
