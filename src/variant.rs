// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Selection of the native ABI variant
//!
//! A Cryptoki module is compiled with a specific `CK_ULONG` width and with
//! or without `#pragma pack(1)`. Together these choose one of four binary
//! layouts for every structure exchanged with the module. The variant is
//! detected once per process and never changes afterwards, codecs can
//! still be driven with any [Variant] explicitly.

use std::ffi::{c_ulong, c_void};
use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pkcs11::CK_ULONG;

use once_cell::sync::Lazy;

/// Width in bytes of the native `CK_ULONG`
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UlongWidth {
    W4,
    W8,
}

impl UlongWidth {
    /// Maps a byte size to a width, anything but 4 or 8 is fatal
    pub fn from_size(size: usize) -> Result<UlongWidth> {
        match size {
            4 => Ok(UlongWidth::W4),
            8 => Ok(UlongWidth::W8),
            _ => Err(Error::config(format!(
                "unsupported native CK_ULONG width: {} bytes",
                size
            ))),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            UlongWidth::W4 => 4,
            UlongWidth::W8 => 8,
        }
    }
}

/// Structure alignment the native module was compiled with
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Packing {
    /// Natural C alignment of every field
    Default,
    /// `#pragma pack(1)`, no padding at all
    Packed,
}

impl FromStr for Packing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Packing> {
        match s {
            "default" => Ok(Packing::Default),
            "packed" => Ok(Packing::Packed),
            _ => Err(Error::config(format!("unknown packing mode: {}", s))),
        }
    }
}

impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Packing::Default => write!(f, "default"),
            Packing::Packed => write!(f, "packed"),
        }
    }
}

/// One of the four native layouts
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variant {
    width: UlongWidth,
    packing: Packing,
}

impl Variant {
    pub const fn new(width: UlongWidth, packing: Packing) -> Variant {
        Variant {
            width: width,
            packing: packing,
        }
    }

    /// All four variants, useful to check that a value is handled
    /// identically under every layout
    pub fn all() -> [Variant; 4] {
        [
            Variant::new(UlongWidth::W4, Packing::Default),
            Variant::new(UlongWidth::W4, Packing::Packed),
            Variant::new(UlongWidth::W8, Packing::Default),
            Variant::new(UlongWidth::W8, Packing::Packed),
        ]
    }

    /// The variant selected for this process
    ///
    /// Evaluated once, the first caller pays for detection and every
    /// later call returns the cached outcome, including a failure.
    pub fn current() -> Result<Variant> {
        match *SELECTED {
            Ok(v) => Ok(v),
            Err(ref msg) => Err(Error::config(msg.clone())),
        }
    }

    pub fn width(&self) -> UlongWidth {
        self.width
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn is_packed(&self) -> bool {
        self.packing == Packing::Packed
    }

    /// Size of a native `CK_ULONG`
    pub fn ulong_size(&self) -> usize {
        self.width.size()
    }

    /// Size of a native pointer, always the host's
    pub fn pointer_size(&self) -> usize {
        std::mem::size_of::<*const c_void>()
    }

    /// Largest value a native `CK_ULONG` can hold
    pub fn max_ulong(&self) -> CK_ULONG {
        match self.width {
            UlongWidth::W4 => CK_ULONG::from(u32::MAX),
            UlongWidth::W8 => CK_ULONG::MAX,
        }
    }

    /// The all-ones `CK_UNAVAILABLE_INFORMATION` value at this width
    pub fn unavailable_information(&self) -> CK_ULONG {
        self.max_ulong()
    }

    /// Alignment a field of natural alignment `natural` gets
    pub fn align_of(&self, natural: usize) -> usize {
        match self.packing {
            Packing::Default => natural,
            Packing::Packed => 1,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ulong{}/{}", self.ulong_size() * 8, self.packing)
    }
}

/// What the host platform conventions say, before any override
pub fn platform_variant() -> Result<Variant> {
    if cfg!(windows) {
        /* Windows modules use 32 bit CK_ULONG and pack(1) regardless of
         * the pointer width */
        Ok(Variant::new(UlongWidth::W4, Packing::Packed))
    } else {
        let width = UlongWidth::from_size(std::mem::size_of::<c_ulong>())?;
        Ok(Variant::new(width, Packing::Default))
    }
}

/// Determines the variant from the platform and the configuration
///
/// Never defaults silently: if the width cannot be established this
/// returns a configuration error.
pub fn select_variant() -> Result<Variant> {
    #[cfg(feature = "log")]
    crate::log::init();
    let detected = platform_variant()?;
    let conf = Config::load()?;
    let width = match conf.ulong_width()? {
        Some(w) => w,
        None => detected.width(),
    };
    let packing = match conf.packing()? {
        Some(p) => p,
        None => detected.packing(),
    };
    let variant = Variant::new(width, packing);
    #[cfg(feature = "log")]
    log::info!("native ABI variant selected: {} (platform {})", variant, detected);
    Ok(variant)
}

static SELECTED: Lazy<std::result::Result<Variant, String>> =
    Lazy::new(|| select_variant().map_err(|e| e.to_string()));
