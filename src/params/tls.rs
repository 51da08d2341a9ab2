// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! SSL 3.0, TLS and WTLS key derivation parameters
//!
//! Several of these records point at output structures the module fills
//! in: the negotiated [Version](crate::info::Version), the key material
//! handles and IVs ([Ssl3KeyMatOut], [WtlsKeyMatOut]) or an output length.
//! Allocate those with [alloc_struct](crate::layout::alloc_struct) and
//! read them back with [read_struct](crate::layout::read_struct) once the
//! call returns.

use crate::error::Result;
use crate::memory::{Buffer, NativePtr};
use crate::native_struct;
use crate::params::data_ref;
use crate::pkcs11::*;

native_struct! {
    /// `CK_SSL3_RANDOM_DATA`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ssl3RandomData {
        pub client_random: NativePtr,
        pub client_random_len: CK_ULONG,
        pub server_random: NativePtr,
        pub server_random_len: CK_ULONG,
    }
}

impl Ssl3RandomData {
    pub fn new(client: &Buffer, server: &Buffer) -> Result<Ssl3RandomData> {
        let (client_ptr, client_len) = data_ref(client)?;
        let (server_ptr, server_len) = data_ref(server)?;
        Ok(Ssl3RandomData {
            client_random: client_ptr,
            client_random_len: client_len,
            server_random: server_ptr,
            server_random_len: server_len,
        })
    }
}

native_struct! {
    /// `CK_SSL3_MASTER_KEY_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ssl3MasterKeyDeriveParams {
        pub random_info: Ssl3RandomData,
        pub version: NativePtr,
    }
}

native_struct! {
    /// `CK_SSL3_KEY_MAT_OUT`, written by the module
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ssl3KeyMatOut {
        pub client_mac_secret: CK_OBJECT_HANDLE,
        pub server_mac_secret: CK_OBJECT_HANDLE,
        pub client_key: CK_OBJECT_HANDLE,
        pub server_key: CK_OBJECT_HANDLE,
        pub iv_client: NativePtr,
        pub iv_server: NativePtr,
    }
}

native_struct! {
    /// `CK_SSL3_KEY_MAT_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Ssl3KeyMatParams {
        pub mac_size_in_bits: CK_ULONG,
        pub key_size_in_bits: CK_ULONG,
        pub iv_size_in_bits: CK_ULONG,
        pub is_export: bool,
        pub random_info: Ssl3RandomData,
        pub returned_key_material: NativePtr,
    }
}

native_struct! {
    /// `CK_TLS_PRF_PARAMS`
    ///
    /// `output_len` points to a native `CK_ULONG` holding the output
    /// buffer size on input and the produced length on output.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct TlsPrfParams {
        pub seed: NativePtr,
        pub seed_len: CK_ULONG,
        pub label: NativePtr,
        pub label_len: CK_ULONG,
        pub output: NativePtr,
        pub output_len: NativePtr,
    }
}

native_struct! {
    /// `CK_TLS12_MASTER_KEY_DERIVE_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Tls12MasterKeyDeriveParams {
        pub random_info: Ssl3RandomData,
        pub version: NativePtr,
        pub prf_hash_mechanism: CK_MECHANISM_TYPE,
    }
}

native_struct! {
    /// `CK_TLS12_KEY_MAT_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Tls12KeyMatParams {
        pub mac_size_in_bits: CK_ULONG,
        pub key_size_in_bits: CK_ULONG,
        pub iv_size_in_bits: CK_ULONG,
        pub is_export: bool,
        pub random_info: Ssl3RandomData,
        pub returned_key_material: NativePtr,
        pub prf_hash_mechanism: CK_MECHANISM_TYPE,
    }
}

native_struct! {
    /// `CK_TLS_KDF_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct TlsKdfParams {
        pub prf_mechanism: CK_MECHANISM_TYPE,
        pub label: NativePtr,
        pub label_length: CK_ULONG,
        pub random_info: Ssl3RandomData,
        pub context_data: NativePtr,
        pub context_data_length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_TLS_MAC_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct TlsMacParams {
        pub prf_hash_mechanism: CK_MECHANISM_TYPE,
        pub mac_length: CK_ULONG,
        pub server_or_client: CK_ULONG,
    }
}

native_struct! {
    /// `CK_WTLS_RANDOM_DATA`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct WtlsRandomData {
        pub client_random: NativePtr,
        pub client_random_len: CK_ULONG,
        pub server_random: NativePtr,
        pub server_random_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_WTLS_MASTER_KEY_DERIVE_PARAMS`
    ///
    /// `version` points to a single byte written by the module.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct WtlsMasterKeyDeriveParams {
        pub digest_mechanism: CK_MECHANISM_TYPE,
        pub random_info: WtlsRandomData,
        pub version: NativePtr,
    }
}

native_struct! {
    /// `CK_WTLS_PRF_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct WtlsPrfParams {
        pub digest_mechanism: CK_MECHANISM_TYPE,
        pub seed: NativePtr,
        pub seed_len: CK_ULONG,
        pub label: NativePtr,
        pub label_len: CK_ULONG,
        pub output: NativePtr,
        pub output_len: NativePtr,
    }
}

native_struct! {
    /// `CK_WTLS_KEY_MAT_OUT`, written by the module
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct WtlsKeyMatOut {
        pub mac_secret: CK_OBJECT_HANDLE,
        pub key: CK_OBJECT_HANDLE,
        pub iv: NativePtr,
    }
}

native_struct! {
    /// `CK_WTLS_KEY_MAT_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct WtlsKeyMatParams {
        pub digest_mechanism: CK_MECHANISM_TYPE,
        pub mac_size_in_bits: CK_ULONG,
        pub key_size_in_bits: CK_ULONG,
        pub iv_size_in_bits: CK_ULONG,
        pub sequence_number: CK_ULONG,
        pub is_export: bool,
        pub random_info: WtlsRandomData,
        pub returned_key_material: NativePtr,
    }
}
