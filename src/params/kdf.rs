// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::error::Result;
use crate::memory::{Buffer, NativePtr};
use crate::native_struct;
use crate::params::data_ref;
use crate::pkcs11::*;

/// `CK_EXTRACT_PARAMS`, the bit index to extract from
pub type ExtractParams = CK_ULONG;

native_struct! {
    /// `CK_KEY_DERIVATION_STRING_DATA`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct KeyDerivationStringData {
        pub data: NativePtr,
        pub len: CK_ULONG,
    }
}

impl KeyDerivationStringData {
    pub fn new(data: &Buffer) -> Result<KeyDerivationStringData> {
        let (ptr, len) = data_ref(data)?;
        Ok(KeyDerivationStringData {
            data: ptr,
            len: len,
        })
    }
}

native_struct! {
    /// `CK_PBE_PARAMS`
    ///
    /// `init_vector` points to an 8 byte output buffer for mechanisms
    /// that also generate an IV.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct PbeParams {
        pub init_vector: NativePtr,
        pub password: NativePtr,
        pub password_len: CK_ULONG,
        pub salt: NativePtr,
        pub salt_len: CK_ULONG,
        pub iteration: CK_ULONG,
    }
}

native_struct! {
    /// `CK_PKCS5_PBKD2_PARAMS`
    ///
    /// The historical layout where `password_len` is a pointer to the
    /// length, see [Pkcs5Pbkd2Params2] for the fixed one.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Pkcs5Pbkd2Params {
        pub salt_source: CK_PKCS5_PBKDF2_SALT_SOURCE_TYPE,
        pub salt_source_data: NativePtr,
        pub salt_source_data_len: CK_ULONG,
        pub iterations: CK_ULONG,
        pub prf: CK_PKCS5_PBKD2_PSEUDO_RANDOM_FUNCTION_TYPE,
        pub prf_data: NativePtr,
        pub prf_data_len: CK_ULONG,
        pub password: NativePtr,
        pub password_len: NativePtr,
    }
}

native_struct! {
    /// `CK_PKCS5_PBKD2_PARAMS2`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Pkcs5Pbkd2Params2 {
        pub salt_source: CK_PKCS5_PBKDF2_SALT_SOURCE_TYPE,
        pub salt_source_data: NativePtr,
        pub salt_source_data_len: CK_ULONG,
        pub iterations: CK_ULONG,
        pub prf: CK_PKCS5_PBKD2_PSEUDO_RANDOM_FUNCTION_TYPE,
        pub prf_data: NativePtr,
        pub prf_data_len: CK_ULONG,
        pub password: NativePtr,
        pub password_len: CK_ULONG,
    }
}

impl Pkcs5Pbkd2Params2 {
    pub fn new(
        salt: &Buffer,
        iterations: CK_ULONG,
        prf: CK_PKCS5_PBKD2_PSEUDO_RANDOM_FUNCTION_TYPE,
        password: &Buffer,
    ) -> Result<Pkcs5Pbkd2Params2> {
        let (salt_ptr, salt_len) = data_ref(salt)?;
        let (pw_ptr, pw_len) = data_ref(password)?;
        Ok(Pkcs5Pbkd2Params2 {
            salt_source: CKZ_SALT_SPECIFIED,
            salt_source_data: salt_ptr,
            salt_source_data_len: salt_len,
            iterations: iterations,
            prf: prf,
            prf_data: NativePtr::null(),
            prf_data_len: 0,
            password: pw_ptr,
            password_len: pw_len,
        })
    }
}

native_struct! {
    /// `CK_HKDF_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct HkdfParams {
        pub extract: bool,
        pub expand: bool,
        pub prf_hash_mechanism: CK_MECHANISM_TYPE,
        pub salt_type: CK_ULONG,
        pub salt: NativePtr,
        pub salt_len: CK_ULONG,
        pub salt_key: CK_OBJECT_HANDLE,
        pub info: NativePtr,
        pub info_len: CK_ULONG,
    }
}
