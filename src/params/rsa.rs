// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::error::Result;
use crate::memory::{Buffer, NativePtr};
use crate::native_struct;
use crate::params::data_ref;
use crate::pkcs11::*;

native_struct! {
    /// `CK_RSA_PKCS_OAEP_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RsaPkcsOaepParams {
        pub hash_alg: CK_MECHANISM_TYPE,
        pub mgf: CK_RSA_PKCS_MGF_TYPE,
        pub source: CK_RSA_PKCS_OAEP_SOURCE_TYPE,
        pub source_data: NativePtr,
        pub source_data_len: CK_ULONG,
    }
}

impl RsaPkcsOaepParams {
    /// OAEP with an optional label, an empty label sets no source
    pub fn new(
        hash_alg: CK_MECHANISM_TYPE,
        mgf: CK_RSA_PKCS_MGF_TYPE,
        label: &Buffer,
    ) -> Result<RsaPkcsOaepParams> {
        let (ptr, len) = data_ref(label)?;
        Ok(RsaPkcsOaepParams {
            hash_alg: hash_alg,
            mgf: mgf,
            source: if len == 0 { 0 } else { CKZ_DATA_SPECIFIED },
            source_data: ptr,
            source_data_len: len,
        })
    }
}

native_struct! {
    /// `CK_RSA_PKCS_PSS_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RsaPkcsPssParams {
        pub hash_alg: CK_MECHANISM_TYPE,
        pub mgf: CK_RSA_PKCS_MGF_TYPE,
        pub salt_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_RSA_AES_KEY_WRAP_PARAMS`
    ///
    /// `oaep_params` points to an encoded [RsaPkcsOaepParams] block the
    /// caller keeps alive.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RsaAesKeyWrapParams {
        pub aes_key_bits: CK_ULONG,
        pub oaep_params: NativePtr,
    }
}

native_struct! {
    /// `CK_KEY_WRAP_SET_OAEP_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct KeyWrapSetOaepParams {
        pub bc: CK_BYTE,
        pub x: NativePtr,
        pub x_len: CK_ULONG,
    }
}
