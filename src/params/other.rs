// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! OTP, KIP, CMS, Skipjack and EdDSA parameters

use crate::error::Result;
use crate::layout::{decode_struct_array, encode_struct_array};
use crate::memory::{Buffer, NativePtr};
use crate::misc::{to_ulong, to_usize};
use crate::native_struct;
use crate::pkcs11::*;
use crate::variant::Variant;

native_struct! {
    /// `CK_OTP_PARAM`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct OtpParam {
        pub param_type: CK_PARAM_TYPE,
        pub value: NativePtr,
        pub value_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_OTP_PARAMS`, also used as `CK_OTP_SIGNATURE_INFO`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct OtpParams {
        pub params: NativePtr,
        pub count: CK_ULONG,
    }
}

impl OtpParams {
    /// Encodes `list` as a native array and points a new record at it
    ///
    /// The returned buffer holds the array and must outlive any use of
    /// the record.
    pub fn encode_list(
        v: Variant,
        list: &[OtpParam],
    ) -> Result<(OtpParams, Buffer)> {
        let array = encode_struct_array(v, list)?;
        Ok((
            OtpParams {
                params: array.ptr(),
                count: to_ulong(list.len())?,
            },
            array,
        ))
    }

    /// Decodes the array this record points to
    ///
    /// # Safety
    ///
    /// `params` must point to `count` records laid out for `v`.
    pub unsafe fn decode_list(&self, v: Variant) -> Result<Vec<OtpParam>> {
        unsafe { decode_struct_array(v, self.params, to_usize(self.count)?) }
    }
}

native_struct! {
    /// `CK_KIP_PARAMS`
    ///
    /// `mechanism` points to an encoded mechanism record, see
    /// [CkMechanism::to_native](crate::mechanism::CkMechanism::to_native).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct KipParams {
        pub mechanism: NativePtr,
        pub key: CK_OBJECT_HANDLE,
        pub seed: NativePtr,
        pub seed_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_CMS_SIG_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct CmsSigParams {
        pub certificate: CK_OBJECT_HANDLE,
        pub signing_mechanism: NativePtr,
        pub digest_mechanism: NativePtr,
        pub content_type: NativePtr,
        pub requested_attributes: NativePtr,
        pub requested_attributes_len: CK_ULONG,
        pub required_attributes: NativePtr,
        pub required_attributes_len: CK_ULONG,
    }
}

native_struct! {
    /// `CK_SKIPJACK_PRIVATE_WRAP_PARAMS`
    ///
    /// The prime, base and subprime share `p_and_g_len`/`q_len`.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SkipjackPrivateWrapParams {
        pub password_len: CK_ULONG,
        pub password: NativePtr,
        pub public_data_len: CK_ULONG,
        pub public_data: NativePtr,
        pub p_and_g_len: CK_ULONG,
        pub q_len: CK_ULONG,
        pub random_len: CK_ULONG,
        pub random_a: NativePtr,
        pub prime_p: NativePtr,
        pub base_g: NativePtr,
        pub subprime_q: NativePtr,
    }
}

native_struct! {
    /// `CK_SKIPJACK_RELAYX_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SkipjackRelayxParams {
        pub old_wrapped_x_len: CK_ULONG,
        pub old_wrapped_x: NativePtr,
        pub old_password_len: CK_ULONG,
        pub old_password: NativePtr,
        pub old_public_data_len: CK_ULONG,
        pub old_public_data: NativePtr,
        pub old_random_len: CK_ULONG,
        pub old_random_a: NativePtr,
        pub new_password_len: CK_ULONG,
        pub new_password: NativePtr,
        pub new_public_data_len: CK_ULONG,
        pub new_public_data: NativePtr,
        pub new_random_len: CK_ULONG,
        pub new_random_a: NativePtr,
    }
}

native_struct! {
    /// `CK_EDDSA_PARAMS`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct EddsaParams {
        pub ph_flag: bool,
        pub context_data_len: CK_ULONG,
        pub context_data: NativePtr,
    }
}
