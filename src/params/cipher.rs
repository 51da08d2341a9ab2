// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Block and stream cipher parameters

use crate::error::Result;
use crate::memory::{Buffer, NativePtr};
use crate::native_struct;
use crate::params::data_ref;
use crate::pkcs11::*;

/// `CK_MAC_GENERAL_PARAMS`, the requested MAC length
pub type MacGeneralParams = CK_ULONG;

/// `CK_RC2_PARAMS`, the effective number of key bits
pub type Rc2Params = CK_ULONG;

native_struct! {
    /// `CK_AES_CTR_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct AesCtrParams {
        pub counter_bits: CK_ULONG,
        pub cb: [u8; 16],
    }
}

impl AesCtrParams {
    pub fn new(counter_bits: CK_ULONG, cb: [u8; 16]) -> AesCtrParams {
        AesCtrParams {
            counter_bits: counter_bits,
            cb: cb,
        }
    }
}

native_struct! {
    /// `CK_CAMELLIA_CTR_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct CamelliaCtrParams {
        pub counter_bits: CK_ULONG,
        pub cb: [u8; 16],
    }
}

native_struct! {
    /// `CK_AES_CBC_ENCRYPT_DATA_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct AesCbcEncryptDataParams {
        pub iv: [u8; 16],
        pub data: NativePtr,
        pub length: CK_ULONG,
    }
}

impl AesCbcEncryptDataParams {
    pub fn new(iv: [u8; 16], data: &Buffer) -> Result<AesCbcEncryptDataParams> {
        let (ptr, len) = data_ref(data)?;
        Ok(AesCbcEncryptDataParams {
            iv: iv,
            data: ptr,
            length: len,
        })
    }
}

native_struct! {
    /// `CK_DES_CBC_ENCRYPT_DATA_PARAMS`, note the 8 byte IV
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct DesCbcEncryptDataParams {
        pub iv: [u8; 8],
        pub data: NativePtr,
        pub length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_ARIA_CBC_ENCRYPT_DATA_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct AriaCbcEncryptDataParams {
        pub iv: [u8; 16],
        pub data: NativePtr,
        pub length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_CAMELLIA_CBC_ENCRYPT_DATA_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct CamelliaCbcEncryptDataParams {
        pub iv: [u8; 16],
        pub data: NativePtr,
        pub length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_SEED_CBC_ENCRYPT_DATA_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SeedCbcEncryptDataParams {
        pub iv: [u8; 16],
        pub data: NativePtr,
        pub length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_GCM_PARAMS`
    ///
    /// `iv_bits` is informational, modules use `iv_len`.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct GcmParams {
        pub iv: NativePtr,
        pub iv_len: CK_ULONG,
        pub iv_bits: CK_ULONG,
        pub aad: NativePtr,
        pub aad_len: CK_ULONG,
        pub tag_bits: CK_ULONG,
    }
}

impl GcmParams {
    pub fn new(iv: &Buffer, aad: &Buffer, tag_bits: CK_ULONG) -> Result<GcmParams> {
        let (iv_ptr, iv_len) = data_ref(iv)?;
        let (aad_ptr, aad_len) = data_ref(aad)?;
        Ok(GcmParams {
            iv: iv_ptr,
            iv_len: iv_len,
            iv_bits: iv_len * 8,
            aad: aad_ptr,
            aad_len: aad_len,
            tag_bits: tag_bits,
        })
    }
}

native_struct! {
    /// `CK_CCM_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct CcmParams {
        pub data_len: CK_ULONG,
        pub nonce: NativePtr,
        pub nonce_len: CK_ULONG,
        pub aad: NativePtr,
        pub aad_len: CK_ULONG,
        pub mac_len: CK_ULONG,
    }
}

impl CcmParams {
    pub fn new(
        data_len: CK_ULONG,
        nonce: &Buffer,
        aad: &Buffer,
        mac_len: CK_ULONG,
    ) -> Result<CcmParams> {
        let (nonce_ptr, nonce_len) = data_ref(nonce)?;
        let (aad_ptr, aad_len) = data_ref(aad)?;
        Ok(CcmParams {
            data_len: data_len,
            nonce: nonce_ptr,
            nonce_len: nonce_len,
            aad: aad_ptr,
            aad_len: aad_len,
            mac_len: mac_len,
        })
    }
}

native_struct! {
    /// `CK_RC2_CBC_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Rc2CbcParams {
        pub effective_bits: CK_ULONG,
        pub iv: [u8; 8],
    }
}

native_struct! {
    /// `CK_RC2_MAC_GENERAL_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Rc2MacGeneralParams {
        pub effective_bits: CK_ULONG,
        pub mac_length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_RC5_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Rc5Params {
        pub wordsize: CK_ULONG,
        pub rounds: CK_ULONG,
    }
}

native_struct! {
    /// `CK_RC5_CBC_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Rc5CbcParams {
        pub wordsize: CK_ULONG,
        pub rounds: CK_ULONG,
        pub iv: NativePtr,
        pub iv_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_RC5_MAC_GENERAL_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Rc5MacGeneralParams {
        pub wordsize: CK_ULONG,
        pub rounds: CK_ULONG,
        pub mac_length: CK_ULONG,
    }
}

native_struct! {
    /// `CK_CHACHA20_PARAMS`
    ///
    /// Both the counter and the nonce are given in bits.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ChaCha20Params {
        pub block_counter: NativePtr,
        pub block_counter_bits: CK_ULONG,
        pub nonce: NativePtr,
        pub nonce_bits: CK_ULONG,
    }
}

native_struct! {
    /// `CK_SALSA20_PARAMS`, the block counter is always 64 bits
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Salsa20Params {
        pub block_counter: NativePtr,
        pub nonce: NativePtr,
        pub nonce_bits: CK_ULONG,
    }
}

native_struct! {
    /// `CK_SALSA20_CHACHA20_POLY1305_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Salsa20ChaCha20Poly1305Params {
        pub nonce: NativePtr,
        pub nonce_len: CK_ULONG,
        pub aad: NativePtr,
        pub aad_len: CK_ULONG,
    }
}
