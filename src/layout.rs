// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Native structure layout
//!
//! Every structure exchanged with a native module is described once, as a
//! Rust record whose fields implement [NativeField]. The layout of that
//! record under a given [Variant] is computed the way a C compiler would:
//! each field is placed at the next offset that satisfies its alignment
//! (always 1 for packed variants) and the total size is rounded up to the
//! largest field alignment. Records are declared with [native_struct!],
//! which generates the layout, encoder and decoder from the field list.

use std::ffi::c_void;
use std::mem::size_of;

use crate::error::{Error, Result};
use crate::memory::{self, Buffer, NativePtr};
use crate::pkcs11::*;
use crate::variant::{UlongWidth, Variant};
use crate::{debug_log, err_shape};

/// Size and alignment of a field under a specific variant
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldLayout {
    pub size: usize,
    pub align: usize,
}

fn round_up(offset: usize, align: usize) -> usize {
    if align <= 1 {
        return offset;
    }
    (offset + align - 1) / align * align
}

/// Accumulates fields in declaration order to compute a record layout
#[derive(Debug, Default)]
pub struct StructLayout {
    size: usize,
    align: usize,
}

impl StructLayout {
    pub fn new() -> StructLayout {
        StructLayout { size: 0, align: 1 }
    }

    /// Appends a field, returns the offset it lands at
    pub fn push(&mut self, field: FieldLayout) -> usize {
        let offset = round_up(self.size, field.align);
        self.size = offset + field.size;
        if field.align > self.align {
            self.align = field.align;
        }
        offset
    }

    pub fn finish(&self) -> FieldLayout {
        FieldLayout {
            size: round_up(self.size, self.align),
            align: self.align,
        }
    }
}

/// A value that has a fixed native representation
pub trait NativeField: Sized {
    fn field_layout(v: Variant) -> FieldLayout;
    fn write_field(&self, w: &mut StructWriter) -> Result<()>;
    fn read_field(r: &mut StructReader) -> Result<Self>;
}

/// Serializes records into their native byte representation
#[derive(Debug)]
pub struct StructWriter {
    variant: Variant,
    data: Vec<u8>,
}

impl StructWriter {
    pub fn new(variant: Variant) -> StructWriter {
        StructWriter {
            variant: variant,
            data: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn position(&self) -> usize {
        self.data.len()
    }

    fn pad_to(&mut self, align: usize) {
        let target = round_up(self.data.len(), align);
        self.data.resize(target, 0);
    }

    /// Writes a native `CK_ULONG`
    ///
    /// `CK_UNAVAILABLE_INFORMATION` (and any all-ones value) is written as
    /// all-ones at the native width, other values must fit the width.
    pub fn put_ulong(&mut self, val: CK_ULONG) -> Result<()> {
        let v = self.variant;
        self.pad_to(v.align_of(v.ulong_size()));
        match v.width() {
            UlongWidth::W8 => self.data.extend_from_slice(&val.to_ne_bytes()),
            UlongWidth::W4 => {
                let narrow = if val == CK_UNAVAILABLE_INFORMATION {
                    u32::MAX
                } else {
                    match u32::try_from(val) {
                        Ok(n) => n,
                        Err(_) => {
                            return Err(Error::ck_rv_with_errmsg(
                                CKR_ARGUMENTS_BAD,
                                format!(
                                    "value {:#x} does not fit a 4 byte CK_ULONG",
                                    val
                                ),
                            ))
                        }
                    }
                };
                self.data.extend_from_slice(&narrow.to_ne_bytes());
            }
        }
        Ok(())
    }

    pub fn put_u8(&mut self, val: u8) {
        self.data.push(val);
    }

    pub fn put_ptr(&mut self, ptr: NativePtr) {
        let v = self.variant;
        self.pad_to(v.align_of(v.pointer_size()));
        self.data.extend_from_slice(&ptr.addr().to_ne_bytes());
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Aligns for a nested record and returns its start offset
    pub fn begin_struct(&mut self, layout: FieldLayout) -> usize {
        self.pad_to(layout.align);
        self.data.len()
    }

    /// Adds the trailing padding of a nested record
    pub fn end_struct(&mut self, start: usize, layout: FieldLayout) -> Result<()> {
        let end = start + layout.size;
        if self.data.len() > end {
            return Err(Error::ck_rv_with_errmsg(
                CKR_GENERAL_ERROR,
                format!(
                    "record overflow: wrote {} bytes, layout has {}",
                    self.data.len() - start,
                    layout.size
                ),
            ));
        }
        self.data.resize(end, 0);
        Ok(())
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

/// Deserializes records from their native byte representation
#[derive(Debug)]
pub struct StructReader<'a> {
    variant: Variant,
    data: &'a [u8],
    pos: usize,
}

impl<'a> StructReader<'a> {
    pub fn new(variant: Variant, data: &'a [u8]) -> StructReader<'a> {
        StructReader {
            variant: variant,
            data: data,
            pos: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn align(&mut self, align: usize) {
        self.pos = round_up(self.pos, align);
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = match self.pos.checked_add(len) {
            Some(e) if e <= self.data.len() => e,
            _ => {
                return err_shape!(
                    "short record: need {} bytes at offset {}, have {}",
                    len,
                    self.pos,
                    self.data.len()
                )
            }
        };
        let s = &self.data[self.pos..end];
        self.pos = end;
        Ok(s)
    }

    /// Reads a native `CK_ULONG`, a 4 byte value is widened as is
    pub fn get_ulong(&mut self) -> Result<CK_ULONG> {
        let v = self.variant;
        self.align(v.align_of(v.ulong_size()));
        match v.width() {
            UlongWidth::W8 => {
                let mut b = [0u8; 8];
                b.copy_from_slice(self.take(8)?);
                Ok(CK_ULONG::from_ne_bytes(b))
            }
            UlongWidth::W4 => {
                let mut b = [0u8; 4];
                b.copy_from_slice(self.take(4)?);
                Ok(CK_ULONG::from(u32::from_ne_bytes(b)))
            }
        }
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn get_ptr(&mut self) -> Result<NativePtr> {
        let v = self.variant;
        self.align(v.align_of(v.pointer_size()));
        let mut b = [0u8; size_of::<usize>()];
        b.copy_from_slice(self.take(size_of::<usize>())?);
        Ok(NativePtr::from_raw(usize::from_ne_bytes(b) as *mut c_void))
    }

    pub fn get_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    pub fn begin_struct(&mut self, layout: FieldLayout) -> usize {
        self.align(layout.align);
        self.pos
    }

    pub fn end_struct(&mut self, start: usize, layout: FieldLayout) -> Result<()> {
        let end = start + layout.size;
        if self.pos > end {
            return err_shape!("record overrun at offset {}", self.pos);
        }
        if end > self.data.len() {
            return err_shape!(
                "short record: {} bytes, layout has {}",
                self.data.len() - start,
                layout.size
            );
        }
        self.pos = end;
        Ok(())
    }
}

impl NativeField for CK_ULONG {
    fn field_layout(v: Variant) -> FieldLayout {
        FieldLayout {
            size: v.ulong_size(),
            align: v.align_of(v.ulong_size()),
        }
    }

    fn write_field(&self, w: &mut StructWriter) -> Result<()> {
        w.put_ulong(*self)
    }

    fn read_field(r: &mut StructReader) -> Result<CK_ULONG> {
        r.get_ulong()
    }
}

impl NativeField for u8 {
    fn field_layout(_: Variant) -> FieldLayout {
        FieldLayout { size: 1, align: 1 }
    }

    fn write_field(&self, w: &mut StructWriter) -> Result<()> {
        w.put_u8(*self);
        Ok(())
    }

    fn read_field(r: &mut StructReader) -> Result<u8> {
        r.get_u8()
    }
}

/* CK_BBOOL, any non zero byte reads as true */
impl NativeField for bool {
    fn field_layout(_: Variant) -> FieldLayout {
        FieldLayout { size: 1, align: 1 }
    }

    fn write_field(&self, w: &mut StructWriter) -> Result<()> {
        w.put_u8(if *self { CK_TRUE } else { CK_FALSE });
        Ok(())
    }

    fn read_field(r: &mut StructReader) -> Result<bool> {
        Ok(r.get_u8()? != CK_FALSE)
    }
}

impl NativeField for NativePtr {
    fn field_layout(v: Variant) -> FieldLayout {
        FieldLayout {
            size: v.pointer_size(),
            align: v.align_of(v.pointer_size()),
        }
    }

    fn write_field(&self, w: &mut StructWriter) -> Result<()> {
        w.put_ptr(*self);
        Ok(())
    }

    fn read_field(r: &mut StructReader) -> Result<NativePtr> {
        r.get_ptr()
    }
}

impl<const N: usize> NativeField for [u8; N] {
    fn field_layout(_: Variant) -> FieldLayout {
        FieldLayout { size: N, align: 1 }
    }

    fn write_field(&self, w: &mut StructWriter) -> Result<()> {
        w.put_bytes(self);
        Ok(())
    }

    fn read_field(r: &mut StructReader) -> Result<[u8; N]> {
        let mut a = [0u8; N];
        a.copy_from_slice(r.get_bytes(N)?);
        Ok(a)
    }
}

/// Declares a record with a native layout
///
/// The struct is emitted unchanged and gets a [NativeField]
/// implementation that lays fields out in declaration order.
#[macro_export]
macro_rules! native_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::layout::NativeField for $name {
            fn field_layout(
                v: $crate::variant::Variant,
            ) -> $crate::layout::FieldLayout {
                let mut layout = $crate::layout::StructLayout::new();
                $(
                    layout.push(
                        <$fty as $crate::layout::NativeField>::field_layout(v),
                    );
                )*
                layout.finish()
            }

            fn write_field(
                &self,
                w: &mut $crate::layout::StructWriter,
            ) -> $crate::error::Result<()> {
                let layout = <Self as $crate::layout::NativeField>::field_layout(
                    w.variant(),
                );
                let start = w.begin_struct(layout);
                $(
                    $crate::layout::NativeField::write_field(&self.$field, w)?;
                )*
                w.end_struct(start, layout)
            }

            fn read_field(
                r: &mut $crate::layout::StructReader,
            ) -> $crate::error::Result<Self> {
                let layout = <Self as $crate::layout::NativeField>::field_layout(
                    r.variant(),
                );
                let start = r.begin_struct(layout);
                $(
                    let $field =
                        <$fty as $crate::layout::NativeField>::read_field(r)?;
                )*
                r.end_struct(start, layout)?;
                Ok($name { $($field),* })
            }
        }
    };
}

/// Size of a record under a variant
pub fn struct_size<T: NativeField>(v: Variant) -> usize {
    T::field_layout(v).size
}

/// Encodes a record into its native bytes
pub fn encode_struct<T: NativeField>(v: Variant, val: &T) -> Result<Vec<u8>> {
    let mut w = StructWriter::new(v);
    val.write_field(&mut w)?;
    Ok(w.finish())
}

/// Decodes a record, the input must be exactly the record size
pub fn decode_struct<T: NativeField>(v: Variant, data: &[u8]) -> Result<T> {
    let size = struct_size::<T>(v);
    if data.len() != size {
        debug_log!(
            "record length mismatch under {}: {} != {}",
            v,
            data.len(),
            size
        );
        return err_shape!(
            "record length {} does not match the expected {}",
            data.len(),
            size
        );
    }
    let mut r = StructReader::new(v, data);
    T::read_field(&mut r)
}

/// Encodes a record into a newly allocated unmanaged block
pub fn to_buffer<T: NativeField>(v: Variant, val: &T) -> Result<Buffer> {
    Buffer::from_slice(&encode_struct(v, val)?)
}

/// Encodes records as a contiguous native array
///
/// An empty slice yields an empty handle (null pointer).
pub fn encode_struct_array<T: NativeField>(
    v: Variant,
    vals: &[T],
) -> Result<Buffer> {
    if vals.is_empty() {
        return Ok(Buffer::empty());
    }
    let mut w = StructWriter::new(v);
    for val in vals {
        val.write_field(&mut w)?;
    }
    Buffer::from_slice(&w.finish())
}

/// Decodes `count` records from a contiguous native array
///
/// # Safety
///
/// A non null `ptr` must point to at least `count` records laid out for
/// `v`.
pub unsafe fn decode_struct_array<T: NativeField>(
    v: Variant,
    ptr: NativePtr,
    count: usize,
) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return err_shape!("null pointer for an array of {} records", count);
    }
    let size = struct_size::<T>(v);
    let total = match size.checked_mul(count) {
        Some(t) => t,
        None => return err_shape!("record array of {} is too large", count),
    };
    let data = unsafe { memory::read(ptr, total) };
    let mut r = StructReader::new(v, &data);
    let mut vals = Vec::with_capacity(count);
    for _ in 0..count {
        vals.push(T::read_field(&mut r)?);
    }
    Ok(vals)
}

/// Allocates a zeroed block sized for one record, for output structures
/// the native module fills in
pub fn alloc_struct<T: NativeField>(v: Variant) -> Result<Buffer> {
    Buffer::zeroed(struct_size::<T>(v))
}

/// Reads one record back from unmanaged memory
///
/// # Safety
///
/// `ptr` must point to a readable record laid out for `v`.
pub unsafe fn read_struct<T: NativeField>(
    v: Variant,
    ptr: NativePtr,
) -> Result<T> {
    if ptr.is_null() {
        return err_shape!("null pointer for a record");
    }
    let data = unsafe { memory::read(ptr, struct_size::<T>(v)) };
    decode_struct(v, &data)
}
