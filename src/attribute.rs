// Copyright 2023 Simo Sorce
// See LICENSE.txt file for terms

//! This module converts typed attribute values to and from the native
//! `CK_ATTRIBUTE` representation ([CkAttribute], [RawAttribute]) and
//! defines mappings between PKCS#11 attribute type values and the data
//! type they represent as described in the [AttrType] enumeration.
//!
//! A native attribute length is a tri-state: a null pointer with a zero
//! length is an absent value, the all-ones length is the "unavailable"
//! sentinel a module returns for sensitive or unknown attributes, anything
//! else is a present value of that length. [ValueLen] models this state
//! and the decoders never dereference the pointer of an unavailable value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::layout::{
    decode_struct_array, encode_struct_array, struct_size, StructReader,
    StructWriter,
};
use crate::memory::{self, Buffer, NativePtr};
use crate::misc::to_usize;
use crate::pkcs11::*;
use crate::variant::Variant;
use crate::{debug_log, err_rv, err_shape, map_err, native_struct};

/// List of attribute types we understand
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AttrType {
    BoolType,
    NumType,
    StringType,
    BytesType,
    UlongArrayType,
    MechanismArrayType,
    DateType,
    AttributeArrayType,
}

impl AttrType {
    /// Finds and return the attribute id and type from its CKA_ name
    pub fn attr_name_to_id_type(s: &str) -> Result<(CK_ULONG, AttrType)> {
        match Attrmap::search_by_name(s) {
            Some(a) => Ok((a.id, a.atype)),
            None => Err(Error::ck_rv_with_errmsg(
                CKR_ATTRIBUTE_TYPE_INVALID,
                format!("unknown attribute name {}", s),
            )),
        }
    }

    /// Finds the attribute type from the attribute id
    pub fn attr_id_to_attrtype(id: CK_ULONG) -> Result<AttrType> {
        match Attrmap::search_by_id(id) {
            Some(a) => Ok(a.atype),
            None => Err(CKR_ATTRIBUTE_TYPE_INVALID)?,
        }
    }
}

/// Returns the printable name of an attribute id, unknown ids are
/// rendered in hex
pub fn attr_name(id: CK_ULONG) -> String {
    match Attrmap::search_by_id(id) {
        Some(a) => a.name.to_string(),
        None => format!("{:#x}", id),
    }
}

/// Struct to map a PKCS#11 attribute to a type and a printable name
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Attrmap<'a> {
    id: CK_ULONG,
    name: &'a str,
    atype: AttrType,
}

impl PartialOrd for Attrmap<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attrmap<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Attrmap<'_> {
    /// Convenience function to efficiently search for a mapping by id
    pub fn search_by_id(id: CK_ULONG) -> Option<&'static Attrmap<'static>> {
        match &ATTRMAP.binary_search(&Attrmap {
            id: id,
            name: "",
            atype: AttrType::StringType,
        }) {
            Ok(i) => Some(&ATTRMAP[*i]),
            Err(_) => None,
        }
    }

    /// Convenience function to search for a mapping by name
    pub fn search_by_name(s: &str) -> Option<&'static Attrmap<'static>> {
        ATTRMAP.iter().find(|a| a.name == s)
    }
}

/// Helper macro to populate the static attributes map
macro_rules! attrmap_element {
    ($id:expr; as $attrtype:ident) => {
        Attrmap {
            id: $id,
            name: stringify!($id),
            atype: AttrType::$attrtype,
        }
    };
}

/// The main attributes map, list all known attributes
static ATTRMAP: [Attrmap<'_>; 108] = [
    attrmap_element!(CKA_CLASS; as NumType),
    attrmap_element!(CKA_TOKEN; as BoolType),
    attrmap_element!(CKA_PRIVATE; as BoolType),
    attrmap_element!(CKA_LABEL; as StringType),
    attrmap_element!(CKA_UNIQUE_ID; as StringType),
    attrmap_element!(CKA_APPLICATION; as StringType),
    attrmap_element!(CKA_VALUE; as BytesType),
    attrmap_element!(CKA_OBJECT_ID; as BytesType),
    attrmap_element!(CKA_CERTIFICATE_TYPE; as NumType),
    attrmap_element!(CKA_ISSUER; as BytesType),
    attrmap_element!(CKA_SERIAL_NUMBER; as BytesType),
    attrmap_element!(CKA_AC_ISSUER; as BytesType),
    attrmap_element!(CKA_OWNER; as BytesType),
    attrmap_element!(CKA_ATTR_TYPES; as BytesType),
    attrmap_element!(CKA_TRUSTED; as BoolType),
    attrmap_element!(CKA_CERTIFICATE_CATEGORY; as NumType),
    attrmap_element!(CKA_JAVA_MIDP_SECURITY_DOMAIN; as NumType),
    attrmap_element!(CKA_URL; as StringType),
    attrmap_element!(CKA_HASH_OF_SUBJECT_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_HASH_OF_ISSUER_PUBLIC_KEY; as BytesType),
    attrmap_element!(CKA_NAME_HASH_ALGORITHM; as NumType),
    attrmap_element!(CKA_CHECK_VALUE; as BytesType),
    attrmap_element!(CKA_KEY_TYPE; as NumType),
    attrmap_element!(CKA_SUBJECT; as BytesType),
    attrmap_element!(CKA_ID; as BytesType),
    attrmap_element!(CKA_SENSITIVE; as BoolType),
    attrmap_element!(CKA_ENCRYPT; as BoolType),
    attrmap_element!(CKA_DECRYPT; as BoolType),
    attrmap_element!(CKA_WRAP; as BoolType),
    attrmap_element!(CKA_UNWRAP; as BoolType),
    attrmap_element!(CKA_SIGN; as BoolType),
    attrmap_element!(CKA_SIGN_RECOVER; as BoolType),
    attrmap_element!(CKA_VERIFY; as BoolType),
    attrmap_element!(CKA_VERIFY_RECOVER; as BoolType),
    attrmap_element!(CKA_DERIVE; as BoolType),
    attrmap_element!(CKA_START_DATE; as DateType),
    attrmap_element!(CKA_END_DATE; as DateType),
    attrmap_element!(CKA_MODULUS; as BytesType),
    attrmap_element!(CKA_MODULUS_BITS; as NumType),
    attrmap_element!(CKA_PUBLIC_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIVATE_EXPONENT; as BytesType),
    attrmap_element!(CKA_PRIME_1; as BytesType),
    attrmap_element!(CKA_PRIME_2; as BytesType),
    attrmap_element!(CKA_EXPONENT_1; as BytesType),
    attrmap_element!(CKA_EXPONENT_2; as BytesType),
    attrmap_element!(CKA_COEFFICIENT; as BytesType),
    attrmap_element!(CKA_PUBLIC_KEY_INFO; as BytesType),
    attrmap_element!(CKA_PRIME; as BytesType),
    attrmap_element!(CKA_SUBPRIME; as BytesType),
    attrmap_element!(CKA_BASE; as BytesType),
    attrmap_element!(CKA_PRIME_BITS; as NumType),
    attrmap_element!(CKA_SUBPRIME_BITS; as NumType),
    attrmap_element!(CKA_VALUE_BITS; as NumType),
    attrmap_element!(CKA_VALUE_LEN; as NumType),
    attrmap_element!(CKA_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_LOCAL; as BoolType),
    attrmap_element!(CKA_NEVER_EXTRACTABLE; as BoolType),
    attrmap_element!(CKA_ALWAYS_SENSITIVE; as BoolType),
    attrmap_element!(CKA_KEY_GEN_MECHANISM; as NumType),
    attrmap_element!(CKA_MODIFIABLE; as BoolType),
    attrmap_element!(CKA_COPYABLE; as BoolType),
    attrmap_element!(CKA_DESTROYABLE; as BoolType),
    attrmap_element!(CKA_EC_PARAMS; as BytesType),
    attrmap_element!(CKA_EC_POINT; as BytesType),
    attrmap_element!(CKA_SECONDARY_AUTH; as BoolType),
    attrmap_element!(CKA_AUTH_PIN_FLAGS; as NumType),
    attrmap_element!(CKA_ALWAYS_AUTHENTICATE; as BoolType),
    attrmap_element!(CKA_WRAP_WITH_TRUSTED; as BoolType),
    attrmap_element!(CKA_OTP_FORMAT; as NumType),
    attrmap_element!(CKA_OTP_LENGTH; as NumType),
    attrmap_element!(CKA_OTP_TIME_INTERVAL; as NumType),
    attrmap_element!(CKA_OTP_USER_FRIENDLY_MODE; as BoolType),
    attrmap_element!(CKA_OTP_CHALLENGE_REQUIREMENT; as NumType),
    attrmap_element!(CKA_OTP_TIME_REQUIREMENT; as NumType),
    attrmap_element!(CKA_OTP_COUNTER_REQUIREMENT; as NumType),
    attrmap_element!(CKA_OTP_PIN_REQUIREMENT; as NumType),
    attrmap_element!(CKA_OTP_USER_IDENTIFIER; as StringType),
    attrmap_element!(CKA_OTP_SERVICE_IDENTIFIER; as StringType),
    attrmap_element!(CKA_OTP_SERVICE_LOGO; as BytesType),
    attrmap_element!(CKA_OTP_SERVICE_LOGO_TYPE; as StringType),
    attrmap_element!(CKA_OTP_COUNTER; as BytesType),
    attrmap_element!(CKA_OTP_TIME; as StringType),
    attrmap_element!(CKA_GOSTR3410_PARAMS; as BytesType),
    attrmap_element!(CKA_GOSTR3411_PARAMS; as BytesType),
    attrmap_element!(CKA_GOST28147_PARAMS; as BytesType),
    attrmap_element!(CKA_HW_FEATURE_TYPE; as NumType),
    attrmap_element!(CKA_RESET_ON_INIT; as BoolType),
    attrmap_element!(CKA_HAS_RESET; as BoolType),
    attrmap_element!(CKA_PIXEL_X; as NumType),
    attrmap_element!(CKA_PIXEL_Y; as NumType),
    attrmap_element!(CKA_RESOLUTION; as NumType),
    attrmap_element!(CKA_CHAR_ROWS; as NumType),
    attrmap_element!(CKA_CHAR_COLUMNS; as NumType),
    attrmap_element!(CKA_COLOR; as BoolType),
    attrmap_element!(CKA_BITS_PER_PIXEL; as NumType),
    attrmap_element!(CKA_CHAR_SETS; as StringType),
    attrmap_element!(CKA_ENCODING_METHODS; as StringType),
    attrmap_element!(CKA_MIME_TYPES; as StringType),
    attrmap_element!(CKA_MECHANISM_TYPE; as NumType),
    attrmap_element!(CKA_REQUIRED_CMS_ATTRIBUTES; as BytesType),
    attrmap_element!(CKA_DEFAULT_CMS_ATTRIBUTES; as BytesType),
    attrmap_element!(CKA_SUPPORTED_CMS_ATTRIBUTES; as BytesType),
    attrmap_element!(CKA_PROFILE_ID; as NumType),
    attrmap_element!(CKA_WRAP_TEMPLATE; as AttributeArrayType),
    attrmap_element!(CKA_UNWRAP_TEMPLATE; as AttributeArrayType),
    attrmap_element!(CKA_DERIVE_TEMPLATE; as AttributeArrayType),
    attrmap_element!(CKA_ALLOWED_MECHANISMS; as MechanismArrayType),
    attrmap_element!(CKA_VENDOR_DEFINED; as BytesType),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_order_of_attrmap() {
        let mut copy = ATTRMAP.clone();
        copy.sort();
        assert_eq!(ATTRMAP, copy);
    }
}

/// A validated calendar date, stored natively as eight ASCII digits
/// `YYYYMMDD`
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CkDate {
    year: u16,
    month: u8,
    day: u8,
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl CkDate {
    pub fn new(year: u16, month: u8, day: u8) -> Result<CkDate> {
        if year > 9999
            || month < 1
            || month > 12
            || day < 1
            || day > days_in_month(year, month)
        {
            return Err(Error::ck_rv_with_errmsg(
                CKR_ATTRIBUTE_VALUE_INVALID,
                format!("invalid date {:04}-{:02}-{:02}", year, month, day),
            ));
        }
        Ok(CkDate {
            year: year,
            month: month,
            day: day,
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The eight ASCII digits of the native representation
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut b = [0u8; 8];
        b.copy_from_slice(self.to_string().as_bytes());
        b
    }

    /// Parses the native representation
    ///
    /// A date made of all zeros or all blanks is how modules report an
    /// empty date, it decodes as `None`.
    pub fn from_bytes(b: &[u8]) -> Result<Option<CkDate>> {
        if b.len() != 8 {
            return err_shape!("date needs 8 bytes, got {}", b.len());
        }
        if b.iter().all(|c| *c == 0) || b.iter().all(|c| *c == b' ') {
            return Ok(None);
        }
        let s = std::str::from_utf8(b)?;
        Ok(Some(s.parse::<CkDate>()?))
    }
}

impl FromStr for CkDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<CkDate> {
        if s.len() != 8 || !s.bytes().all(|c| c.is_ascii_digit()) {
            return err_shape!("date {:?} is not in YYYYMMDD form", s);
        }
        let num = |r: std::ops::Range<usize>| -> Result<u16> {
            map_err!(s[r].parse::<u16>(), CKR_ATTRIBUTE_VALUE_INVALID)
        };
        let month = u8::try_from(num(4..6)?)?;
        let day = u8::try_from(num(6..8)?)?;
        CkDate::new(num(0..4)?, month, day)
    }
}

impl fmt::Display for CkDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// The three states of a native attribute length
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueLen {
    /// No value: null pointer and zero length
    Absent,
    /// A value of the given length, possibly zero
    Present(usize),
    /// The module could not or would not report the value
    Unavailable,
}

impl ValueLen {
    /// Classifies a raw `(pointer, length)` pair read under `v`
    pub fn from_raw(
        v: Variant,
        ptr: NativePtr,
        len: CK_ULONG,
    ) -> Result<ValueLen> {
        if len == v.unavailable_information()
            || len == CK_UNAVAILABLE_INFORMATION
        {
            return Ok(ValueLen::Unavailable);
        }
        if ptr.is_null() && len == 0 {
            return Ok(ValueLen::Absent);
        }
        Ok(ValueLen::Present(to_usize(len)?))
    }

    /// The raw length to store in a native record
    pub fn to_raw(&self) -> CK_ULONG {
        match self {
            ValueLen::Absent => 0,
            /* usize always fits a u64 on supported hosts */
            ValueLen::Present(n) => *n as CK_ULONG,
            ValueLen::Unavailable => CK_UNAVAILABLE_INFORMATION,
        }
    }
}

native_struct! {
    /// The native `CK_ATTRIBUTE` record
    ///
    /// This is a non owning view, the memory `value` points to belongs to
    /// a [CkAttribute] or to the native module.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RawAttribute {
        pub type_: CK_ATTRIBUTE_TYPE,
        pub value: NativePtr,
        pub value_len: CK_ULONG,
    }
}

fn encode_ulongs(v: Variant, vals: &[CK_ULONG]) -> Result<Vec<u8>> {
    let mut w = StructWriter::new(v);
    for val in vals {
        w.put_ulong(*val)?;
    }
    Ok(w.finish())
}

fn decode_ulongs(v: Variant, data: &[u8]) -> Result<Vec<CK_ULONG>> {
    let size = v.ulong_size();
    if data.len() % size != 0 {
        return err_shape!(
            "array length {} is not a multiple of {}",
            data.len(),
            size
        );
    }
    let mut r = StructReader::new(v, data);
    let mut vals = Vec::with_capacity(data.len() / size);
    for _ in 0..(data.len() / size) {
        vals.push(r.get_ulong()?);
    }
    Ok(vals)
}

impl RawAttribute {
    pub fn value_len(&self, v: Variant) -> Result<ValueLen> {
        ValueLen::from_raw(v, self.value, self.value_len)
    }

    /// Copies out the value bytes
    ///
    /// A length without a buffer is the answer to a size query, it
    /// carries no value and reads as `None`.
    unsafe fn value_bytes(&self, v: Variant) -> Result<Option<Vec<u8>>> {
        match self.value_len(v)? {
            ValueLen::Absent => Ok(None),
            ValueLen::Unavailable => {
                debug_log!("{} is unavailable", attr_name(self.type_));
                Err(Error::unavailable(self.type_))
            }
            ValueLen::Present(len) => {
                if self.value.is_null() {
                    return Ok(None);
                }
                Ok(Some(unsafe { memory::read(self.value, len) }))
            }
        }
    }

    /// Decodes a native `CK_ULONG`
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_ulong(&self, v: Variant) -> Result<Option<CK_ULONG>> {
        let bytes = match unsafe { self.value_bytes(v)? } {
            Some(b) => b,
            None => return Ok(None),
        };
        if bytes.len() != v.ulong_size() {
            debug_log!(
                "{}: {} bytes for a CK_ULONG under {}",
                attr_name(self.type_),
                bytes.len(),
                v
            );
            return err_shape!(
                "CK_ULONG needs {} bytes, got {}",
                v.ulong_size(),
                bytes.len()
            );
        }
        Ok(Some(StructReader::new(v, &bytes).get_ulong()?))
    }

    /// Decodes a `CK_BBOOL`, any non zero byte is true
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_bool(&self, v: Variant) -> Result<Option<bool>> {
        let bytes = match unsafe { self.value_bytes(v)? } {
            Some(b) => b,
            None => return Ok(None),
        };
        if bytes.len() != 1 {
            return err_shape!("CK_BBOOL needs 1 byte, got {}", bytes.len());
        }
        Ok(Some(bytes[0] != CK_FALSE))
    }

    /// Decodes UTF-8 text, no terminator is expected
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_string(&self, v: Variant) -> Result<Option<String>> {
        match unsafe { self.value_bytes(v)? } {
            Some(b) => Ok(Some(String::from_utf8(b).map_err(|e| {
                Error::shape_mismatch(format!("invalid UTF-8 text: {}", e))
            })?)),
            None => Ok(None),
        }
    }

    /// Copies out opaque bytes
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_bytes(&self, v: Variant) -> Result<Option<Vec<u8>>> {
        unsafe { self.value_bytes(v) }
    }

    /// Decodes a `CK_DATE`
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_date(&self, v: Variant) -> Result<Option<CkDate>> {
        match unsafe { self.value_bytes(v)? } {
            Some(b) if b.is_empty() => Ok(None),
            Some(b) => CkDate::from_bytes(&b),
            None => Ok(None),
        }
    }

    /// Decodes an array of native `CK_ULONG`s
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_ulong_array(
        &self,
        v: Variant,
    ) -> Result<Option<Vec<CK_ULONG>>> {
        match unsafe { self.value_bytes(v)? } {
            Some(b) => Ok(Some(decode_ulongs(v, &b)?)),
            None => Ok(None),
        }
    }

    /// Decodes an array of mechanism identifiers
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_mechanism_array(
        &self,
        v: Variant,
    ) -> Result<Option<Vec<CK_MECHANISM_TYPE>>> {
        unsafe { self.to_ulong_array(v) }
    }

    /// Decodes a nested array of attributes
    ///
    /// The returned records are views, their values still live where the
    /// nested pointers say.
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes.
    pub unsafe fn to_attribute_array(
        &self,
        v: Variant,
    ) -> Result<Option<Vec<RawAttribute>>> {
        let len = match self.value_len(v)? {
            ValueLen::Absent => return Ok(None),
            ValueLen::Unavailable => {
                return Err(Error::unavailable(self.type_));
            }
            ValueLen::Present(len) => len,
        };
        if self.value.is_null() {
            return Ok(None);
        }
        let size = struct_size::<RawAttribute>(v);
        if len % size != 0 {
            return err_shape!(
                "attribute array length {} is not a multiple of {}",
                len,
                size
            );
        }
        Ok(Some(unsafe {
            decode_struct_array::<RawAttribute>(v, self.value, len / size)?
        }))
    }

    /// Decodes the value according to the attribute vocabulary
    ///
    /// Unknown attribute types are returned as opaque bytes.
    ///
    /// # Safety
    ///
    /// `value` must point to at least `value_len` readable bytes, and so
    /// must every nested attribute.
    pub unsafe fn to_value(&self, v: Variant) -> Result<AttrValue> {
        let atype = match AttrType::attr_id_to_attrtype(self.type_) {
            Ok(t) => t,
            Err(_) => AttrType::BytesType,
        };
        let val = unsafe {
            match atype {
                AttrType::BoolType => self.to_bool(v)?.map(AttrValue::Bool),
                AttrType::NumType => self.to_ulong(v)?.map(AttrValue::Ulong),
                AttrType::StringType => {
                    self.to_string(v)?.map(AttrValue::String)
                }
                AttrType::BytesType => self.to_bytes(v)?.map(AttrValue::Bytes),
                AttrType::DateType => self.to_date(v)?.map(AttrValue::Date),
                AttrType::UlongArrayType => {
                    self.to_ulong_array(v)?.map(AttrValue::UlongArray)
                }
                AttrType::MechanismArrayType => self
                    .to_mechanism_array(v)?
                    .map(AttrValue::MechanismArray),
                AttrType::AttributeArrayType => {
                    match self.to_attribute_array(v)? {
                        Some(raws) => {
                            let mut vals = Vec::with_capacity(raws.len());
                            for raw in raws {
                                vals.push((raw.type_, raw.to_value(v)?));
                            }
                            Some(AttrValue::AttributeArray(vals))
                        }
                        None => None,
                    }
                }
            }
        };
        Ok(val.unwrap_or(AttrValue::Absent))
    }
}

/// A typed logical attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Absent,
    Bool(bool),
    Ulong(CK_ULONG),
    String(String),
    Bytes(Vec<u8>),
    Date(CkDate),
    UlongArray(Vec<CK_ULONG>),
    MechanismArray(Vec<CK_MECHANISM_TYPE>),
    AttributeArray(Vec<(CK_ATTRIBUTE_TYPE, AttrValue)>),
}

/// An attribute whose value lives in unmanaged memory owned by this
/// object
///
/// For nested attribute arrays the outer attribute owns the contiguous
/// array of native records (the structural block) and the nested
/// attributes, which own their own values. The structural block is
/// released first, then each nested value.
#[derive(Debug)]
pub struct CkAttribute {
    variant: Variant,
    ck_type: CK_ATTRIBUTE_TYPE,
    /* declared before `nested` so it is dropped first */
    value: Buffer,
    value_len: ValueLen,
    nested: Vec<CkAttribute>,
}

impl CkAttribute {
    fn with_buffer(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        value: Buffer,
    ) -> CkAttribute {
        let value_len = if value.is_null() {
            ValueLen::Absent
        } else {
            ValueLen::Present(value.len())
        };
        CkAttribute {
            variant: v,
            ck_type: t,
            value: value,
            value_len: value_len,
            nested: Vec::new(),
        }
    }

    fn from_slice(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: &[u8],
    ) -> Result<CkAttribute> {
        Ok(Self::with_buffer(v, t, Buffer::from_slice(val)?))
    }

    /// Creates an attribute without a value
    pub fn new(v: Variant, t: CK_ATTRIBUTE_TYPE) -> CkAttribute {
        Self::with_buffer(v, t, Buffer::empty())
    }

    /// Creates an attribute holding a native `CK_ULONG`
    pub fn from_ulong(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: CK_ULONG,
    ) -> Result<CkAttribute> {
        Self::from_slice(v, t, &encode_ulongs(v, &[val])?)
    }

    /// Creates an attribute holding a one byte `CK_BBOOL`
    pub fn from_bool(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: bool,
    ) -> Result<CkAttribute> {
        Self::from_slice(v, t, &[if val { CK_TRUE } else { CK_FALSE }])
    }

    /// Creates an attribute holding UTF-8 text without terminator
    ///
    /// No text or empty text both produce an absent value.
    pub fn from_string(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: Option<&str>,
    ) -> Result<CkAttribute> {
        match val {
            Some(s) => Self::from_slice(v, t, s.as_bytes()),
            None => Ok(Self::new(v, t)),
        }
    }

    /// Creates an attribute holding opaque bytes
    ///
    /// No bytes or an empty slice both produce an absent value.
    pub fn from_bytes(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: Option<&[u8]>,
    ) -> Result<CkAttribute> {
        match val {
            Some(b) => Self::from_slice(v, t, b),
            None => Ok(Self::new(v, t)),
        }
    }

    /// Creates an attribute holding a `CK_DATE`
    pub fn from_date(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: CkDate,
    ) -> Result<CkAttribute> {
        Self::from_slice(v, t, &val.to_bytes())
    }

    /// Creates an attribute holding an array of native `CK_ULONG`s
    pub fn from_ulong_array(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: Option<&[CK_ULONG]>,
    ) -> Result<CkAttribute> {
        match val {
            Some(a) => Self::from_slice(v, t, &encode_ulongs(v, a)?),
            None => Ok(Self::new(v, t)),
        }
    }

    /// Creates an attribute holding an array of mechanism identifiers
    pub fn from_mechanism_array(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: Option<&[CK_MECHANISM_TYPE]>,
    ) -> Result<CkAttribute> {
        Self::from_ulong_array(v, t, val)
    }

    /// Creates an attribute holding a nested array of attributes
    ///
    /// Takes ownership of the nested attributes, which must all use the
    /// same variant as the outer one.
    pub fn from_attribute_array(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: Vec<CkAttribute>,
    ) -> Result<CkAttribute> {
        if val.is_empty() {
            return Ok(Self::new(v, t));
        }
        if let Some(a) = val.iter().find(|a| a.variant != v) {
            return Err(Error::ck_rv_with_errmsg(
                CKR_ARGUMENTS_BAD,
                format!(
                    "nested attribute {} uses {} instead of {}",
                    attr_name(a.ck_type),
                    a.variant,
                    v
                ),
            ));
        }
        let raws: Vec<RawAttribute> = val.iter().map(|a| a.raw()).collect();
        let mut attr = Self::with_buffer(v, t, encode_struct_array(v, &raws)?);
        attr.nested = val;
        Ok(attr)
    }

    /// Creates an attribute with an uninitialized value buffer of `len`
    /// bytes, for a module to write into
    pub fn with_capacity(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        len: usize,
    ) -> Result<CkAttribute> {
        Ok(Self::with_buffer(v, t, Buffer::zeroed(len)?))
    }

    /// Creates an attribute from a typed logical value
    pub fn from_value(
        v: Variant,
        t: CK_ATTRIBUTE_TYPE,
        val: &AttrValue,
    ) -> Result<CkAttribute> {
        match val {
            AttrValue::Absent => Ok(Self::new(v, t)),
            AttrValue::Bool(b) => Self::from_bool(v, t, *b),
            AttrValue::Ulong(n) => Self::from_ulong(v, t, *n),
            AttrValue::String(s) => Self::from_string(v, t, Some(s.as_str())),
            AttrValue::Bytes(b) => Self::from_bytes(v, t, Some(b.as_slice())),
            AttrValue::Date(d) => Self::from_date(v, t, *d),
            AttrValue::UlongArray(a) => {
                Self::from_ulong_array(v, t, Some(a.as_slice()))
            }
            AttrValue::MechanismArray(a) => {
                Self::from_mechanism_array(v, t, Some(a.as_slice()))
            }
            AttrValue::AttributeArray(a) => {
                let mut nested = Vec::with_capacity(a.len());
                for (nt, nv) in a {
                    nested.push(Self::from_value(v, *nt, nv)?);
                }
                Self::from_attribute_array(v, t, nested)
            }
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn ck_type(&self) -> CK_ATTRIBUTE_TYPE {
        self.ck_type
    }

    pub fn name(&self) -> String {
        attr_name(self.ck_type)
    }

    pub fn value_len(&self) -> ValueLen {
        self.value_len
    }

    /// The nested attributes owned by an attribute array
    pub fn nested(&self) -> &[CkAttribute] {
        &self.nested
    }

    /// The native record describing this attribute
    ///
    /// The record borrows the value memory, it must not outlive `self`.
    pub fn raw(&self) -> RawAttribute {
        RawAttribute {
            type_: self.ck_type,
            value: self.value.ptr(),
            value_len: self.value_len.to_raw(),
        }
    }

    /// Records the length a module reported for this attribute
    ///
    /// A present length larger than the owned buffer is rejected, it
    /// would let decoders read past the allocation.
    pub fn set_value_len(&mut self, len: ValueLen) -> Result<()> {
        self.check_value_len(len)?;
        self.value_len = len;
        Ok(())
    }

    /// Fails if `len` claims more bytes than the value buffer holds
    fn check_value_len(&self, len: ValueLen) -> Result<()> {
        if let ValueLen::Present(n) = len {
            if !self.value.is_null() && n > self.value.len() {
                return err_shape!(
                    "{}: reported length {} exceeds the buffer of {}",
                    self.name(),
                    n,
                    self.value.len()
                );
            }
        }
        Ok(())
    }

    /// Wipe value buffers (nested ones included) before release
    pub fn set_zeroize(&mut self) {
        self.value.set_zeroize();
        for a in self.nested.iter_mut() {
            a.set_zeroize();
        }
    }

    /// Releases the value now, calling this again is a no-op
    pub fn free(&mut self) {
        self.value.free();
        self.value_len = ValueLen::Absent;
        /* structural block first, then the nested values */
        while let Some(mut a) = self.nested.pop() {
            a.free();
        }
    }

    pub fn to_ulong(&self) -> Result<Option<CK_ULONG>> {
        unsafe { self.raw().to_ulong(self.variant) }
    }

    pub fn to_bool(&self) -> Result<Option<bool>> {
        unsafe { self.raw().to_bool(self.variant) }
    }

    pub fn to_string(&self) -> Result<Option<String>> {
        unsafe { self.raw().to_string(self.variant) }
    }

    pub fn to_bytes(&self) -> Result<Option<Vec<u8>>> {
        unsafe { self.raw().to_bytes(self.variant) }
    }

    pub fn to_date(&self) -> Result<Option<CkDate>> {
        unsafe { self.raw().to_date(self.variant) }
    }

    pub fn to_ulong_array(&self) -> Result<Option<Vec<CK_ULONG>>> {
        unsafe { self.raw().to_ulong_array(self.variant) }
    }

    pub fn to_mechanism_array(&self) -> Result<Option<Vec<CK_MECHANISM_TYPE>>> {
        unsafe { self.raw().to_mechanism_array(self.variant) }
    }

    pub fn to_attribute_array(&self) -> Result<Option<Vec<RawAttribute>>> {
        unsafe { self.raw().to_attribute_array(self.variant) }
    }

    pub fn to_value(&self) -> Result<AttrValue> {
        unsafe { self.raw().to_value(self.variant) }
    }
}

/// A list of attributes passed to a module as a contiguous native array
///
/// Supports the two pass retrieval pattern: send a template of absent
/// values, read back the lengths the module reports, allocate buffers of
/// those sizes and send the template again.
#[derive(Debug)]
pub struct AttributeTemplate {
    variant: Variant,
    /* the native array borrows the values, drop it first */
    native: Buffer,
    attrs: Vec<CkAttribute>,
}

impl AttributeTemplate {
    pub fn new(v: Variant) -> AttributeTemplate {
        AttributeTemplate {
            variant: v,
            native: Buffer::empty(),
            attrs: Vec::new(),
        }
    }

    /// A template of absent values, the first pass of a retrieval
    pub fn from_types(
        v: Variant,
        types: &[CK_ATTRIBUTE_TYPE],
    ) -> AttributeTemplate {
        let mut tmpl = AttributeTemplate::new(v);
        tmpl.attrs = types.iter().map(|t| CkAttribute::new(v, *t)).collect();
        tmpl
    }

    pub fn push(&mut self, attr: CkAttribute) -> Result<()> {
        if attr.variant() != self.variant {
            return err_rv!(CKR_ARGUMENTS_BAD);
        }
        self.native.free();
        self.attrs.push(attr);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn attrs(&self) -> &[CkAttribute] {
        &self.attrs
    }

    pub fn find(&self, t: CK_ATTRIBUTE_TYPE) -> Option<&CkAttribute> {
        self.attrs.iter().find(|a| a.ck_type() == t)
    }

    /// Encodes the template, returns the array pointer and its count
    ///
    /// The array stays valid until the template is modified or dropped.
    pub fn to_native(&mut self) -> Result<(NativePtr, CK_ULONG)> {
        let raws: Vec<RawAttribute> =
            self.attrs.iter().map(|a| a.raw()).collect();
        self.native = encode_struct_array(self.variant, &raws)?;
        Ok((self.native.ptr(), CK_ULONG::try_from(self.attrs.len())?))
    }

    /// Reads back the lengths a module wrote into the native array
    pub fn update_from_native(&mut self) -> Result<()> {
        if self.native.is_null() {
            return Ok(());
        }
        let raws = unsafe {
            decode_struct_array::<RawAttribute>(
                self.variant,
                self.native.ptr(),
                self.attrs.len(),
            )?
        };
        /* validate everything first so a failure leaves the template
         * untouched */
        let mut lens = Vec::with_capacity(raws.len());
        for (attr, raw) in self.attrs.iter().zip(raws.iter()) {
            if attr.ck_type() != raw.type_ {
                return err_shape!(
                    "attribute {} was replaced with {}",
                    attr.name(),
                    attr_name(raw.type_)
                );
            }
            /* classify against our own buffer, the module only writes
             * the length */
            let len = ValueLen::from_raw(
                self.variant,
                attr.value.ptr(),
                raw.value_len,
            )?;
            attr.check_value_len(len)?;
            lens.push(len);
        }
        for (attr, len) in self.attrs.iter_mut().zip(lens) {
            attr.value_len = len;
        }
        Ok(())
    }

    /// Replaces every attribute with a reported length by an empty
    /// buffer of that length, unavailable attributes are left alone
    pub fn allocate_values(&mut self) -> Result<()> {
        self.native.free();
        for attr in self.attrs.iter_mut() {
            if let ValueLen::Present(n) = attr.value_len() {
                if n > 0 {
                    *attr = CkAttribute::with_capacity(
                        self.variant,
                        attr.ck_type(),
                        n,
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn into_attrs(mut self) -> Vec<CkAttribute> {
        self.native.free();
        std::mem::take(&mut self.attrs)
    }
}
