// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! Native ABI marshaling for PKCS#11 (Cryptoki) modules
//!
//! Cryptoki modules are shared libraries with a C interface whose binary
//! layout depends on how they were built: the width of `CK_ULONG` and
//! whether structures are packed. This crate converts typed Rust values
//! into the exact byte layout a module expects, keeps the unmanaged
//! memory holding them alive for as long as the native call needs it,
//! and decodes what the module writes back.
//!
//! The main entry points are:
//! - [Variant], the layout in effect ([Variant::current] detects it once
//!   per process)
//! - [CkAttribute] and [AttributeTemplate] for `CK_ATTRIBUTE` values
//! - the records in [params] for mechanism parameters
//! - [CkMechanism] for the `CK_MECHANISM` envelope
//! - the records in [info] for the information structures

pub use pkcs11;

pub mod attribute;
pub mod config;
pub mod error;
pub mod info;
pub mod layout;
pub mod mechanism;
pub mod memory;
pub mod misc;
pub mod params;
pub mod variant;

#[cfg(feature = "log")]
mod log;

pub use attribute::{
    AttrType, AttrValue, AttributeTemplate, CkAttribute, CkDate, RawAttribute,
    ValueLen,
};
pub use error::{Error, ErrorKind, Result};
pub use mechanism::{CkMechanism, RawMechanism};
pub use memory::{Buffer, NativePtr};
pub use variant::{Packing, UlongWidth, Variant};

#[cfg(test)]
mod tests;
