// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::ffi::{c_ulong, c_void};
use std::mem::{offset_of, size_of};

use crate::info::Version;
use crate::layout::{alloc_struct, encode_struct, read_struct, struct_size};
use crate::memory::{Buffer, NativePtr};
use crate::params::*;
use crate::pkcs11::*;
use crate::variant::Variant;

use super::util::*;

use serial_test::parallel;

#[allow(dead_code)]
#[repr(C)]
struct CGcmParams {
    p_iv: *mut c_void,
    ul_iv_len: c_ulong,
    ul_iv_bits: c_ulong,
    p_aad: *mut c_void,
    ul_aad_len: c_ulong,
    ul_tag_bits: c_ulong,
}

#[allow(dead_code)]
#[repr(C)]
struct CHkdfParams {
    b_extract: u8,
    b_expand: u8,
    prf_hash_mechanism: c_ulong,
    ul_salt_type: c_ulong,
    p_salt: *mut c_void,
    ul_salt_len: c_ulong,
    h_salt_key: c_ulong,
    p_info: *mut c_void,
    ul_info_len: c_ulong,
}

#[cfg(target_pointer_width = "64")]
#[test]
#[parallel]
fn test_param_sizes() {
    assert_eq!(struct_size::<GcmParams>(W8_DEFAULT), 48);
    assert_eq!(struct_size::<GcmParams>(W8_PACKED), 48);
    assert_eq!(struct_size::<GcmParams>(W4_DEFAULT), 32);
    assert_eq!(struct_size::<GcmParams>(W4_PACKED), 32);

    assert_eq!(struct_size::<RsaPkcsOaepParams>(W8_DEFAULT), 40);
    assert_eq!(struct_size::<RsaPkcsOaepParams>(W4_DEFAULT), 32);
    assert_eq!(struct_size::<RsaPkcsOaepParams>(W4_PACKED), 24);

    assert_eq!(struct_size::<AesCtrParams>(W8_DEFAULT), 24);
    assert_eq!(struct_size::<AesCtrParams>(W4_DEFAULT), 20);

    assert_eq!(struct_size::<AesCbcEncryptDataParams>(W4_DEFAULT), 32);
    assert_eq!(struct_size::<AesCbcEncryptDataParams>(W4_PACKED), 28);

    assert_eq!(struct_size::<EddsaParams>(W8_DEFAULT), 24);
    assert_eq!(struct_size::<EddsaParams>(W4_DEFAULT), 16);
    assert_eq!(struct_size::<EddsaParams>(W4_PACKED), 13);

    assert_eq!(struct_size::<HkdfParams>(W8_DEFAULT), 64);
    assert_eq!(struct_size::<HkdfParams>(W4_DEFAULT), 48);
    assert_eq!(struct_size::<HkdfParams>(W4_PACKED), 38);
}

#[cfg(all(unix, target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_params_match_host_compiler() {
    assert_eq!(struct_size::<GcmParams>(W8_DEFAULT), size_of::<CGcmParams>());
    assert_eq!(
        struct_size::<HkdfParams>(W8_DEFAULT),
        size_of::<CHkdfParams>()
    );

    let hkdf = HkdfParams {
        extract: true,
        expand: true,
        prf_hash_mechanism: CKM_SHA256,
        salt_type: CKF_HKDF_SALT_NULL,
        info_len: 9,
        ..Default::default()
    };
    let bytes = encode_struct(W8_DEFAULT, &hkdf).unwrap();
    assert_eq!(bytes[offset_of!(CHkdfParams, b_expand)], CK_TRUE);
    let off = offset_of!(CHkdfParams, prf_hash_mechanism);
    assert_eq!(&bytes[off..off + 8], &CKM_SHA256.to_ne_bytes());
    let off = offset_of!(CHkdfParams, ul_info_len);
    assert_eq!(&bytes[off..off + 8], &9u64.to_ne_bytes());
}

#[test]
#[parallel]
fn test_gcm_params() {
    let iv = Buffer::from_slice(&[0xA5; 12]).unwrap();
    let aad = Buffer::from_slice(b"header").unwrap();
    for v in Variant::all() {
        let gcm = GcmParams::new(&iv, &aad, 128).unwrap();
        /* embedded pointers refer to caller memory */
        assert_eq!(gcm.iv, iv.ptr());
        assert_eq!(gcm.iv_len, 12);
        assert_eq!(gcm.iv_bits, 96);
        assert_eq!(gcm.aad, aad.ptr());
        assert_eq!(gcm.aad_len, 6);

        let block = encode_params(v, &gcm).unwrap();
        assert_eq!(block.len(), struct_size::<GcmParams>(v));
        let back: GcmParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back, gcm);
    }

    let empty = Buffer::empty();
    let gcm = GcmParams::new(&iv, &empty, 96).unwrap();
    assert!(gcm.aad.is_null());
    assert_eq!(gcm.aad_len, 0);
}

#[test]
#[parallel]
fn test_decode_params_errors() {
    let pss = RsaPkcsPssParams {
        hash_alg: CKM_SHA256,
        mgf: CKG_MGF1_SHA256,
        salt_len: 32,
    };
    let block = encode_params(W8_DEFAULT, &pss).unwrap();
    let err = unsafe {
        decode_params::<RsaPkcsPssParams>(W8_DEFAULT, block.ptr(), block.len() - 1)
    }
    .unwrap_err();
    assert!(err.is_shape_mismatch());

    /* a block encoded for one variant does not fit another */
    let err = unsafe {
        decode_params::<RsaPkcsPssParams>(W4_DEFAULT, block.ptr(), block.len())
    }
    .unwrap_err();
    assert!(err.is_shape_mismatch());

    let err = unsafe {
        decode_params::<RsaPkcsPssParams>(W8_DEFAULT, NativePtr::null(), 24)
    }
    .unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[test]
#[parallel]
fn test_ulong_fields_narrowing() {
    let nonce = Buffer::from_slice(&[1; 7]).unwrap();
    let ccm = CcmParams::new(0x1_0000_0000, &nonce, &Buffer::empty(), 16)
        .unwrap();
    let err = encode_params(W4_PACKED, &ccm).unwrap_err();
    assert_eq!(err.rv(), CKR_ARGUMENTS_BAD);
    assert!(encode_params(W8_PACKED, &ccm).is_ok());
}

#[test]
#[parallel]
fn test_oaep_params() {
    let label = Buffer::from_slice(b"label").unwrap();
    let oaep =
        RsaPkcsOaepParams::new(CKM_SHA256, CKG_MGF1_SHA256, &label).unwrap();
    assert_eq!(oaep.source, CKZ_DATA_SPECIFIED);
    assert_eq!(oaep.source_data, label.ptr());
    assert_eq!(oaep.source_data_len, 5);

    let oaep =
        RsaPkcsOaepParams::new(CKM_SHA256, CKG_MGF1_SHA256, &Buffer::empty())
            .unwrap();
    assert_eq!(oaep.source, 0);
    assert!(oaep.source_data.is_null());

    /* the wrap record points at an encoded OAEP block */
    for v in Variant::all() {
        let oaep_block = encode_params(v, &oaep).unwrap();
        let wrap = RsaAesKeyWrapParams {
            aes_key_bits: 256,
            oaep_params: oaep_block.ptr(),
        };
        let block = encode_params(v, &wrap).unwrap();
        let back: RsaAesKeyWrapParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        let inner: RsaPkcsOaepParams =
            unsafe { read_struct(v, back.oaep_params) }.unwrap();
        assert_eq!(inner, oaep);
    }
}

#[test]
#[parallel]
fn test_derive_params() {
    let public = Buffer::from_slice(&[4; 65]).unwrap();
    let ecdh =
        Ecdh1DeriveParams::new(CKD_NULL, &Buffer::empty(), &public).unwrap();
    assert_eq!(ecdh.kdf, CKD_NULL);
    assert!(ecdh.shared_data.is_null());
    assert_eq!(ecdh.public_data_len, 65);

    let data = Buffer::from_slice(&[0x11; 32]).unwrap();
    let cbc = AesCbcEncryptDataParams::new([0; 16], &data).unwrap();
    let salt = Buffer::from_slice(b"salt").unwrap();
    let password = Buffer::from_slice(b"password").unwrap();
    let pbkdf2 = Pkcs5Pbkd2Params2::new(
        &salt,
        1000,
        CKP_PKCS5_PBKD2_HMAC_SHA256,
        &password,
    )
    .unwrap();
    assert_eq!(pbkdf2.salt_source, CKZ_SALT_SPECIFIED);
    assert_eq!(pbkdf2.password_len, 8);

    for v in Variant::all() {
        let block = encode_params(v, &ecdh).unwrap();
        let back: Ecdh1DeriveParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back, ecdh);

        let block = encode_params(v, &cbc).unwrap();
        let back: AesCbcEncryptDataParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back.data, data.ptr());
        assert_eq!(back.length, 32);

        let block = encode_params(v, &pbkdf2).unwrap();
        let back: Pkcs5Pbkd2Params2 =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back, pbkdf2);
    }
}

#[test]
#[parallel]
fn test_tls_output_fields() {
    let client = Buffer::from_slice(&[1; 32]).unwrap();
    let server = Buffer::from_slice(&[2; 32]).unwrap();
    for v in Variant::all() {
        let mut version = alloc_struct::<Version>(v).unwrap();
        let params = Tls12MasterKeyDeriveParams {
            random_info: Ssl3RandomData::new(&client, &server).unwrap(),
            version: version.ptr(),
            prf_hash_mechanism: CKM_SHA256,
        };
        let block = encode_params(v, &params).unwrap();
        let back: Tls12MasterKeyDeriveParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back.random_info.client_random, client.ptr());
        assert_eq!(back.random_info.server_random_len, 32);

        /* as the module would report TLS 1.2 */
        version.write_at(0, &[3, 3]).unwrap();
        let out: Version = unsafe { read_struct(v, back.version) }.unwrap();
        assert_eq!(out, Version::new(3, 3));
    }
}

#[test]
#[parallel]
fn test_otp_param_list() {
    let challenge = Buffer::from_slice(b"123456").unwrap();
    let list = [
        OtpParam {
            param_type: CK_OTP_CHALLENGE,
            value: challenge.ptr(),
            value_len: 6,
        },
        OtpParam {
            param_type: CK_OTP_FLAGS,
            value: NativePtr::null(),
            value_len: 0,
        },
    ];
    for v in Variant::all() {
        let (otp, array) = OtpParams::encode_list(v, &list).unwrap();
        assert_eq!(otp.count, 2);
        assert_eq!(otp.params, array.ptr());
        let block = encode_params(v, &otp).unwrap();
        let back: OtpParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        let items = unsafe { back.decode_list(v) }.unwrap();
        assert_eq!(items, list.to_vec());
    }

    let (otp, array) = OtpParams::encode_list(W8_DEFAULT, &[]).unwrap();
    assert!(array.is_null());
    assert!(otp.params.is_null());
    assert_eq!(otp.count, 0);
}

#[test]
#[parallel]
fn test_bool_fields() {
    let context = Buffer::from_slice(b"ctx").unwrap();
    let eddsa = EddsaParams {
        ph_flag: true,
        context_data_len: 3,
        context_data: context.ptr(),
    };
    for v in Variant::all() {
        let bytes = encode_struct(v, &eddsa).unwrap();
        assert_eq!(bytes[0], CK_TRUE);
        let block = encode_params(v, &eddsa).unwrap();
        let back: EddsaParams =
            unsafe { decode_params(v, block.ptr(), block.len()) }.unwrap();
        assert_eq!(back, eddsa);
    }
}
