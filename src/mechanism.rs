// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! The `CK_MECHANISM` envelope
//!
//! A [CkMechanism] pairs a mechanism identifier with an optional
//! parameter block and owns that block: it is released exactly once,
//! either by [CkMechanism::free] or when the envelope goes out of scope.

use crate::error::Result;
use crate::layout::{read_struct, to_buffer, NativeField};
use crate::memory::{Buffer, NativePtr};
use crate::misc::to_ulong;
use crate::native_struct;
use crate::params::{decode_params, encode_params};
use crate::pkcs11::*;
use crate::trace_log;
use crate::variant::Variant;

native_struct! {
    /// The native `CK_MECHANISM` record
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RawMechanism {
        pub mechanism: CK_MECHANISM_TYPE,
        pub parameter: NativePtr,
        pub parameter_len: CK_ULONG,
    }
}

impl RawMechanism {
    /// Reads a mechanism record a module or caller handed over
    ///
    /// # Safety
    ///
    /// `ptr` must point to a record laid out for `v`.
    pub unsafe fn from_native(v: Variant, ptr: NativePtr) -> Result<RawMechanism> {
        unsafe { read_struct(v, ptr) }
    }
}

/// A mechanism with an owned parameter block
#[derive(Debug)]
pub struct CkMechanism {
    variant: Variant,
    mechanism: CK_MECHANISM_TYPE,
    params: Buffer,
}

impl CkMechanism {
    /// A mechanism without parameters
    pub fn new(v: Variant, mech: CK_MECHANISM_TYPE) -> CkMechanism {
        CkMechanism {
            variant: v,
            mechanism: mech,
            params: Buffer::empty(),
        }
    }

    /// A mechanism whose parameter is an opaque byte string (an IV, a
    /// label, ...), an empty slice means no parameter
    pub fn with_bytes(
        v: Variant,
        mech: CK_MECHANISM_TYPE,
        data: &[u8],
    ) -> Result<CkMechanism> {
        Ok(CkMechanism {
            variant: v,
            mechanism: mech,
            params: Buffer::from_slice(data)?,
        })
    }

    /// A mechanism whose parameter is a structured record
    pub fn with_params<P: NativeField>(
        v: Variant,
        mech: CK_MECHANISM_TYPE,
        params: &P,
    ) -> Result<CkMechanism> {
        let buf = encode_params(v, params)?;
        trace_log!(
            "mechanism {:#x}: {} byte parameter block under {}",
            mech,
            buf.len(),
            v
        );
        Ok(CkMechanism {
            variant: v,
            mechanism: mech,
            params: buf,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mechanism(&self) -> CK_MECHANISM_TYPE {
        self.mechanism
    }

    pub fn param_ptr(&self) -> NativePtr {
        self.params.ptr()
    }

    pub fn param_len(&self) -> usize {
        self.params.len()
    }

    /// A copy of the raw parameter bytes
    pub fn param_bytes(&self) -> Vec<u8> {
        self.params.to_vec()
    }

    /// The native record, it borrows the parameter block
    pub fn raw(&self) -> Result<RawMechanism> {
        Ok(RawMechanism {
            mechanism: self.mechanism,
            parameter: self.params.ptr(),
            parameter_len: to_ulong(self.params.len())?,
        })
    }

    /// Encodes the record itself for `CK_MECHANISM_PTR` arguments
    ///
    /// The returned block points into this envelope and must not outlive
    /// it.
    pub fn to_native(&self) -> Result<Buffer> {
        to_buffer(self.variant, &self.raw()?)
    }

    /// Decodes the parameter block, for example to read output fields
    /// after a native call
    pub fn params<P: NativeField>(&self) -> Result<P> {
        unsafe {
            decode_params(self.variant, self.params.ptr(), self.params.len())
        }
    }

    /// Wipe the parameter block before release
    pub fn set_zeroize(&mut self) {
        self.params.set_zeroize();
    }

    /// Releases the parameter block now, calling this again is a no-op
    pub fn free(&mut self) {
        self.params.free();
    }
}
