// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use crate::layout::struct_size;
use crate::mechanism::*;
use crate::memory::Buffer;
use crate::params::*;
use crate::pkcs11::*;
use crate::variant::Variant;

use super::util::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_mechanism_without_params() {
    for v in Variant::all() {
        let mech = CkMechanism::new(v, CKM_SHA256);
        assert_eq!(mech.mechanism(), CKM_SHA256);
        assert_eq!(mech.variant(), v);
        assert!(mech.param_ptr().is_null());
        assert_eq!(mech.param_len(), 0);

        let raw = mech.raw().unwrap();
        assert!(raw.parameter.is_null());
        assert_eq!(raw.parameter_len, 0);

        let native = mech.to_native().unwrap();
        assert_eq!(native.len(), struct_size::<RawMechanism>(v));
        let back = unsafe { RawMechanism::from_native(v, native.ptr()) }
            .unwrap();
        assert_eq!(back, raw);
    }
}

#[test]
#[parallel]
fn test_mechanism_with_bytes() {
    let mech =
        CkMechanism::with_bytes(W4_PACKED, CKM_AES_CBC, &[0x42; 16]).unwrap();
    assert_eq!(mech.param_len(), 16);
    assert_eq!(mech.param_bytes(), vec![0x42; 16]);
    assert_eq!(mech.raw().unwrap().parameter_len, 16);

    let mech = CkMechanism::with_bytes(W4_PACKED, CKM_AES_CBC, &[]).unwrap();
    assert!(mech.param_ptr().is_null());
    assert_eq!(mech.param_len(), 0);
}

#[test]
#[parallel]
fn test_mechanism_with_params() {
    let iv = Buffer::from_slice(&[7; 12]).unwrap();
    let aad = Buffer::empty();
    for v in Variant::all() {
        let gcm = GcmParams::new(&iv, &aad, 128).unwrap();
        let mech = CkMechanism::with_params(v, CKM_AES_GCM, &gcm).unwrap();
        assert_eq!(mech.param_len(), struct_size::<GcmParams>(v));
        assert_eq!(mech.params::<GcmParams>().unwrap(), gcm);

        /* the wrong record type never decodes */
        let err = mech.params::<RsaPkcsPssParams>().unwrap_err();
        assert!(err.is_shape_mismatch());

        let native = mech.to_native().unwrap();
        let raw = unsafe { RawMechanism::from_native(v, native.ptr()) }
            .unwrap();
        assert_eq!(raw.mechanism, CKM_AES_GCM);
        assert_eq!(raw.parameter, mech.param_ptr());
        assert_eq!(raw.parameter_len as usize, mech.param_len());
    }
}

#[test]
#[parallel]
fn test_mechanism_release() {
    let pss = RsaPkcsPssParams {
        hash_alg: CKM_SHA256,
        mgf: CKG_MGF1_SHA256,
        salt_len: 32,
    };
    let mut mech =
        CkMechanism::with_params(W8_DEFAULT, CKM_RSA_PKCS_PSS, &pss).unwrap();
    mech.set_zeroize();
    mech.free();
    assert!(mech.param_ptr().is_null());
    assert_eq!(mech.param_len(), 0);
    /* a second release is a no-op */
    mech.free();
    assert!(mech.params::<RsaPkcsPssParams>().unwrap_err().is_shape_mismatch());
}

#[test]
#[parallel]
fn test_nested_mechanism_pointer() {
    let seed = Buffer::from_slice(b"seed").unwrap();
    for v in Variant::all() {
        let inner = CkMechanism::new(v, CKM_SHA256_HMAC);
        let inner_native = inner.to_native().unwrap();
        let kip = KipParams {
            mechanism: inner_native.ptr(),
            key: 0,
            seed: seed.ptr(),
            seed_len: 4,
        };
        let mech = CkMechanism::with_params(v, CKM_SHA256, &kip).unwrap();
        let back = mech.params::<KipParams>().unwrap();
        let raw = unsafe { RawMechanism::from_native(v, back.mechanism) }
            .unwrap();
        assert_eq!(raw.mechanism, CKM_SHA256_HMAC);
    }
}
