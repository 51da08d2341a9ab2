// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Key agreement parameters (ECDH, X9.42 DH, KEA, GOST R 34.10)

use crate::error::Result;
use crate::memory::{Buffer, NativePtr};
use crate::native_struct;
use crate::params::data_ref;
use crate::pkcs11::*;

native_struct! {
    /// `CK_ECDH1_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ecdh1DeriveParams {
        pub kdf: CK_EC_KDF_TYPE,
        pub shared_data_len: CK_ULONG,
        pub shared_data: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
    }
}

impl Ecdh1DeriveParams {
    pub fn new(
        kdf: CK_EC_KDF_TYPE,
        shared_data: &Buffer,
        public_data: &Buffer,
    ) -> Result<Ecdh1DeriveParams> {
        let (shared_ptr, shared_len) = data_ref(shared_data)?;
        let (public_ptr, public_len) = data_ref(public_data)?;
        Ok(Ecdh1DeriveParams {
            kdf: kdf,
            shared_data_len: shared_len,
            shared_data: shared_ptr,
            public_data_len: public_len,
            public_data: public_ptr,
        })
    }
}

native_struct! {
    /// `CK_ECDH2_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ecdh2DeriveParams {
        pub kdf: CK_EC_KDF_TYPE,
        pub shared_data_len: CK_ULONG,
        pub shared_data: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
        pub private_data_len: CK_ULONG,
        pub private_data: CK_OBJECT_HANDLE,
        pub public_data_len2: CK_ULONG,
        pub public_data2: NativePtr,
    }
}

native_struct! {
    /// `CK_ECMQV_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct EcmqvDeriveParams {
        pub kdf: CK_EC_KDF_TYPE,
        pub shared_data_len: CK_ULONG,
        pub shared_data: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
        pub private_data_len: CK_ULONG,
        pub private_data: CK_OBJECT_HANDLE,
        pub public_data_len2: CK_ULONG,
        pub public_data2: NativePtr,
        pub public_key: CK_OBJECT_HANDLE,
    }
}

native_struct! {
    /// `CK_X9_42_DH1_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct X942Dh1DeriveParams {
        pub kdf: CK_X9_42_DH_KDF_TYPE,
        pub other_info_len: CK_ULONG,
        pub other_info: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
    }
}

native_struct! {
    /// `CK_X9_42_DH2_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct X942Dh2DeriveParams {
        pub kdf: CK_X9_42_DH_KDF_TYPE,
        pub other_info_len: CK_ULONG,
        pub other_info: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
        pub private_data_len: CK_ULONG,
        pub private_data: CK_OBJECT_HANDLE,
        pub public_data_len2: CK_ULONG,
        pub public_data2: NativePtr,
    }
}

native_struct! {
    /// `CK_X9_42_MQV_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct X942MqvDeriveParams {
        pub kdf: CK_X9_42_DH_KDF_TYPE,
        pub other_info_len: CK_ULONG,
        pub other_info: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
        pub private_data_len: CK_ULONG,
        pub private_data: CK_OBJECT_HANDLE,
        pub public_data_len2: CK_ULONG,
        pub public_data2: NativePtr,
        pub public_key: CK_OBJECT_HANDLE,
    }
}

native_struct! {
    /// `CK_KEA_DERIVE_PARAMS`
    ///
    /// Both random values are `random_len` bytes long.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct KeaDeriveParams {
        pub is_sender: bool,
        pub random_len: CK_ULONG,
        pub random_a: NativePtr,
        pub random_b: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
    }
}

native_struct! {
    /// `CK_ECDH_AES_KEY_WRAP_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct EcdhAesKeyWrapParams {
        pub aes_key_bits: CK_ULONG,
        pub kdf: CK_EC_KDF_TYPE,
        pub shared_data_len: CK_ULONG,
        pub shared_data: NativePtr,
    }
}

native_struct! {
    /// `CK_GOSTR3410_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Gostr3410DeriveParams {
        pub kdf: CK_EC_KDF_TYPE,
        pub public_data: NativePtr,
        pub public_data_len: CK_ULONG,
        pub ukm: NativePtr,
        pub ukm_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_GOSTR3410_KEY_WRAP_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Gostr3410KeyWrapParams {
        pub wrap_oid: NativePtr,
        pub wrap_oid_len: CK_ULONG,
        pub ukm: NativePtr,
        pub ukm_len: CK_ULONG,
        pub key: CK_OBJECT_HANDLE,
    }
}
