// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Unmanaged memory management
//!
//! Every block handed to a native module is allocated here with the C
//! allocator and released here exactly once. The raw functions
//! ([allocate], [write], [read], [free]) implement the low level contract,
//! [Buffer] wraps them into an owned handle that is released when it goes
//! out of scope.

use std::ffi::c_void;
use std::fmt;

use crate::error::{Error, Result};
use crate::misc::{to_ulong, zeromem};
use crate::pkcs11::*;
use crate::{err_rv, trace_log};

/// An address in unmanaged memory
///
/// The null pointer is the "no allocation" sentinel. Holding a NativePtr
/// grants nothing, every dereference goes through an unsafe function whose
/// caller vouches for the block.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativePtr(*mut c_void);

/* A NativePtr is an address, ownership is tracked by Buffer and the
 * codecs, not by this type */
unsafe impl Send for NativePtr {}
unsafe impl Sync for NativePtr {}

impl NativePtr {
    pub const fn null() -> NativePtr {
        NativePtr(std::ptr::null_mut())
    }

    pub fn from_raw(ptr: *mut c_void) -> NativePtr {
        NativePtr(ptr)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_ptr(&self) -> *mut c_void {
        self.0
    }

    pub fn as_byte_ptr(&self) -> *mut u8 {
        self.0 as *mut u8
    }

    pub fn addr(&self) -> usize {
        self.0 as usize
    }

    /// Pointer `offset` bytes past this one
    ///
    /// # Safety
    ///
    /// The result must stay within the block this pointer belongs to.
    pub unsafe fn offset(&self, offset: usize) -> NativePtr {
        NativePtr(unsafe { (self.0 as *mut u8).add(offset) } as *mut c_void)
    }
}

impl Default for NativePtr {
    fn default() -> NativePtr {
        NativePtr::null()
    }
}

impl fmt::Debug for NativePtr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_null() {
            write!(f, "NULL")
        } else {
            write!(f, "{:#x}", self.addr())
        }
    }
}

/// Allocates `size` bytes of zeroed unmanaged memory
///
/// A zero size yields the null sentinel instead of a zero sized block so
/// that an absent value never looks like an allocated one.
pub fn allocate(size: usize) -> Result<NativePtr> {
    if size == 0 {
        return Ok(NativePtr::null());
    }
    let ptr = unsafe { libc::calloc(size, 1) };
    if ptr.is_null() {
        return Err(Error::allocation(size));
    }
    trace_log!("allocated {} bytes at {:#x}", size, ptr as usize);
    Ok(NativePtr(ptr))
}

/// Copies `bytes` to the start of the block at `ptr`
///
/// # Safety
///
/// `ptr` must come from [allocate] with a size of at least `bytes.len()`
/// and must not have been freed.
pub unsafe fn write(ptr: NativePtr, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(
            bytes.as_ptr(),
            ptr.as_byte_ptr(),
            bytes.len(),
        );
    }
}

/// Copies `length` bytes out of the block at `ptr`
///
/// The null sentinel reads as an empty vector.
///
/// # Safety
///
/// A non null `ptr` must point to at least `length` readable bytes.
pub unsafe fn read(ptr: NativePtr, length: usize) -> Vec<u8> {
    if ptr.is_null() || length == 0 {
        return Vec::new();
    }
    let mut v = Vec::<u8>::with_capacity(length);
    unsafe {
        std::ptr::copy_nonoverlapping(ptr.as_byte_ptr(), v.as_mut_ptr(), length);
        v.set_len(length);
    }
    v
}

/// Releases the block at `ptr` and returns the null sentinel
///
/// Callers store the return value back into the field that held the
/// pointer, a second call on that field is then a no-op.
///
/// # Safety
///
/// A non null `ptr` must come from [allocate] and must not have been
/// freed already.
#[must_use]
pub unsafe fn free(ptr: NativePtr) -> NativePtr {
    if !ptr.is_null() {
        trace_log!("freeing {:#x}", ptr.addr());
        unsafe { libc::free(ptr.as_ptr()) };
    }
    NativePtr::null()
}

/// An owned block of unmanaged memory
///
/// The block is released exactly once: either by [Buffer::free] or when
/// the handle is dropped, whichever comes first.
pub struct Buffer {
    ptr: NativePtr,
    len: usize,
    zeroize: bool,
}

impl Buffer {
    /// A handle owning nothing, its pointer is the null sentinel
    pub fn empty() -> Buffer {
        Buffer {
            ptr: NativePtr::null(),
            len: 0,
            zeroize: false,
        }
    }

    /// Allocates a zeroed block of `size` bytes
    pub fn zeroed(size: usize) -> Result<Buffer> {
        Ok(Buffer {
            ptr: allocate(size)?,
            len: size,
            zeroize: false,
        })
    }

    /// Allocates a block holding a copy of `data`
    pub fn from_slice(data: &[u8]) -> Result<Buffer> {
        let buf = Buffer::zeroed(data.len())?;
        unsafe { write(buf.ptr, data) };
        Ok(buf)
    }

    /// Takes ownership of a block previously released with
    /// [Buffer::into_raw]
    ///
    /// # Safety
    ///
    /// `ptr` must come from [allocate] with exactly `len` bytes and must
    /// not be owned by anything else.
    pub unsafe fn from_raw(ptr: NativePtr, len: usize) -> Buffer {
        Buffer {
            ptr: ptr,
            len: if ptr.is_null() { 0 } else { len },
            zeroize: false,
        }
    }

    /// Gives up ownership, the caller becomes responsible for calling
    /// [free] on the returned pointer
    pub fn into_raw(self) -> (NativePtr, usize) {
        let raw = (self.ptr, self.len);
        std::mem::forget(self);
        raw
    }

    /// Wipe the contents before the block is released
    pub fn set_zeroize(&mut self) {
        self.zeroize = true;
    }

    pub fn ptr(&self) -> NativePtr {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn len_ulong(&self) -> Result<CK_ULONG> {
        to_ulong(self.len)
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    pub fn as_slice(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.ptr.as_byte_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        if self.ptr.is_null() {
            return &mut [];
        }
        unsafe {
            std::slice::from_raw_parts_mut(self.ptr.as_byte_ptr(), self.len)
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Copies `data` into the block at `offset`, bounds checked
    pub fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        match offset.checked_add(data.len()) {
            Some(end) if end <= self.len => {
                self.as_mut_slice()[offset..end].copy_from_slice(data);
                Ok(())
            }
            _ => err_rv!(CKR_BUFFER_TOO_SMALL),
        }
    }

    /// Releases the block now, calling this again is a no-op
    pub fn free(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        if self.zeroize {
            zeromem(self.as_mut_slice());
        }
        self.ptr = unsafe { free(self.ptr) };
        self.len = 0;
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.free();
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
