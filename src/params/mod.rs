// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Mechanism parameter blocks
//!
//! Each mechanism family has a fixed parameter record, declared in the
//! submodules with [native_struct!](crate::native_struct). Encoding
//! produces an owned unmanaged block laid out for the requested variant.
//!
//! Pointers embedded in a parameter record (IVs, additional data, public
//! values, output buffers) belong to the caller, who must keep them alive
//! until the native call returns. The parameter block never frees them.

use crate::err_shape;
use crate::error::Result;
use crate::layout::{decode_struct, struct_size, to_buffer, NativeField};
use crate::memory::{self, Buffer, NativePtr};
use crate::misc::to_ulong;
use crate::pkcs11::*;
use crate::variant::Variant;

pub mod cipher;
pub mod dh;
pub mod kdf;
pub mod other;
pub mod rsa;
pub mod tls;

pub use cipher::*;
pub use dh::*;
pub use kdf::*;
pub use other::*;
pub use rsa::*;
pub use tls::*;

/// Encodes a parameter record into a newly allocated block
pub fn encode_params<P: NativeField>(v: Variant, params: &P) -> Result<Buffer> {
    to_buffer(v, params)
}

/// Decodes a parameter record from a native block
///
/// The length must be exactly the record size for `v`.
///
/// # Safety
///
/// A non null `ptr` must point to at least `len` readable bytes.
pub unsafe fn decode_params<P: NativeField>(
    v: Variant,
    ptr: NativePtr,
    len: usize,
) -> Result<P> {
    let size = struct_size::<P>(v);
    if ptr.is_null() || len != size {
        return err_shape!(
            "parameter block of {} bytes at {:?}, expected {} bytes",
            len,
            ptr,
            size
        );
    }
    let data = unsafe { memory::read(ptr, len) };
    decode_struct(v, &data)
}

/// Pointer and length pair describing caller owned data
///
/// An empty buffer yields the null pointer and a zero length.
pub fn data_ref(buf: &Buffer) -> Result<(NativePtr, CK_ULONG)> {
    Ok((buf.ptr(), to_ulong(buf.len())?))
}
