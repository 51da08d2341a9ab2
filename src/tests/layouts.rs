// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::ffi::{c_ulong, c_void};
use std::mem::{offset_of, size_of};

use crate::attribute::RawAttribute;
use crate::layout::*;
use crate::mechanism::RawMechanism;
use crate::memory::NativePtr;
use crate::native_struct;
use crate::pkcs11::*;

use super::util::*;

use serial_test::parallel;

native_struct! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct Sample {
        flag: bool,
        value: CK_ULONG,
        ptr: NativePtr,
    }
}

native_struct! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct Outer {
        tag: u8,
        inner: Sample,
    }
}

#[allow(dead_code)]
#[repr(C)]
struct CSample {
    flag: u8,
    value: c_ulong,
    ptr: *mut c_void,
}

#[allow(dead_code)]
#[repr(C, packed)]
struct CPackedSample {
    flag: u8,
    value: c_ulong,
    ptr: *mut c_void,
}

#[allow(dead_code)]
#[repr(C)]
struct CAttribute {
    type_: c_ulong,
    p_value: *mut c_void,
    ul_value_len: c_ulong,
}

#[cfg(target_pointer_width = "64")]
#[test]
#[parallel]
fn test_sizes_per_variant() {
    assert_eq!(struct_size::<Sample>(W8_DEFAULT), 24);
    assert_eq!(struct_size::<Sample>(W8_PACKED), 17);
    assert_eq!(struct_size::<Sample>(W4_DEFAULT), 16);
    assert_eq!(struct_size::<Sample>(W4_PACKED), 13);

    assert_eq!(struct_size::<Outer>(W8_DEFAULT), 32);
    assert_eq!(struct_size::<Outer>(W8_PACKED), 18);
    assert_eq!(struct_size::<Outer>(W4_DEFAULT), 24);
    assert_eq!(struct_size::<Outer>(W4_PACKED), 14);

    assert_eq!(struct_size::<RawAttribute>(W8_DEFAULT), 24);
    assert_eq!(struct_size::<RawAttribute>(W4_DEFAULT), 24);
    assert_eq!(struct_size::<RawAttribute>(W4_PACKED), 16);
    assert_eq!(struct_size::<RawMechanism>(W4_PACKED), 16);
}

#[cfg(all(unix, target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_matches_host_compiler() {
    assert_eq!(struct_size::<Sample>(W8_DEFAULT), size_of::<CSample>());
    assert_eq!(
        struct_size::<Sample>(W8_PACKED),
        size_of::<CPackedSample>()
    );
    assert_eq!(
        struct_size::<RawAttribute>(W8_DEFAULT),
        size_of::<CAttribute>()
    );

    let sample = Sample {
        flag: true,
        value: 0x0102030405060708,
        ptr: NativePtr::from_raw(0x1122334455667788usize as *mut c_void),
    };
    let bytes = encode_struct(W8_DEFAULT, &sample).unwrap();
    assert_eq!(bytes.len(), size_of::<CSample>());
    assert_eq!(bytes[offset_of!(CSample, flag)], 1);
    let off = offset_of!(CSample, value);
    assert_eq!(&bytes[off..off + 8], &sample.value.to_ne_bytes());
    let off = offset_of!(CSample, ptr);
    assert_eq!(&bytes[off..off + 8], &0x1122334455667788usize.to_ne_bytes());

    let bytes = encode_struct(W8_PACKED, &sample).unwrap();
    let off = offset_of!(CPackedSample, value);
    assert_eq!(&bytes[off..off + 8], &sample.value.to_ne_bytes());
}

#[cfg(all(unix, target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_read_compiler_struct() {
    let mut data = [0xAAu8; 4];
    let mut c = CAttribute {
        type_: CKA_ID as c_ulong,
        p_value: data.as_mut_ptr() as *mut c_void,
        ul_value_len: 4,
    };
    let ptr = NativePtr::from_raw(&mut c as *mut CAttribute as *mut c_void);
    let raw: RawAttribute = unsafe { read_struct(W8_DEFAULT, ptr) }.unwrap();
    assert_eq!(raw.type_, CKA_ID);
    assert_eq!(raw.value.as_ptr(), data.as_mut_ptr() as *mut c_void);
    assert_eq!(raw.value_len, 4);
    let value = unsafe { raw.to_bytes(W8_DEFAULT) }.unwrap();
    assert_eq!(value, Some(vec![0xAA; 4]));
}

#[cfg(all(target_endian = "little", target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_encoding_bytes() {
    let sample = Sample {
        flag: true,
        value: 0x11223344,
        ptr: NativePtr::null(),
    };
    let bytes = encode_struct(W4_DEFAULT, &sample).unwrap();
    assert_eq!(hex::encode(&bytes), "01000000443322110000000000000000");
    let bytes = encode_struct(W4_PACKED, &sample).unwrap();
    assert_eq!(hex::encode(&bytes), "01443322110000000000000000");
    let bytes = encode_struct(W8_PACKED, &sample).unwrap();
    assert_eq!(
        hex::encode(&bytes),
        "0144332211000000000000000000000000"
    );

    let outer = Outer {
        tag: 7,
        inner: sample,
    };
    let bytes = encode_struct(W4_PACKED, &outer).unwrap();
    assert_eq!(hex::encode(&bytes), "0701443322110000000000000000");
}

#[test]
#[parallel]
fn test_ulong_narrowing() {
    let mut w = StructWriter::new(W4_DEFAULT);
    w.put_ulong(CK_UNAVAILABLE_INFORMATION).unwrap();
    w.put_ulong(0xFFFF_FFFF).unwrap();
    assert_eq!(hex::encode(w.finish()), "ffffffffffffffff");

    let mut w = StructWriter::new(W4_PACKED);
    let err = w.put_ulong(0x1_0000_0000).unwrap_err();
    assert_eq!(err.rv(), CKR_ARGUMENTS_BAD);

    let mut w = StructWriter::new(W8_DEFAULT);
    w.put_ulong(0x1_0000_0000).unwrap();
    let data = w.finish();
    assert_eq!(data.len(), 8);
    let mut r = StructReader::new(W8_DEFAULT, &data);
    assert_eq!(r.get_ulong().unwrap(), 0x1_0000_0000);

    /* a 4 byte all-ones reads back as the narrow sentinel */
    let data = [0xFFu8; 4];
    let mut r = StructReader::new(W4_DEFAULT, &data);
    let val = r.get_ulong().unwrap();
    assert_eq!(val, W4_DEFAULT.unavailable_information());
    assert!(r.get_ulong().unwrap_err().is_shape_mismatch());
}

#[test]
#[parallel]
fn test_struct_coding() {
    let sample = Sample {
        flag: true,
        value: 42,
        ptr: NativePtr::from_raw(0x1000usize as *mut c_void),
    };
    for v in crate::variant::Variant::all() {
        let bytes = encode_struct(v, &sample).unwrap();
        assert_eq!(bytes.len(), struct_size::<Sample>(v));
        let back: Sample = decode_struct(v, &bytes).unwrap();
        assert_eq!(back, sample);

        let err = decode_struct::<Sample>(v, &bytes[1..]).unwrap_err();
        assert!(err.is_shape_mismatch());
        let mut longer = bytes.clone();
        longer.push(0);
        let err = decode_struct::<Sample>(v, &longer).unwrap_err();
        assert!(err.is_shape_mismatch());
    }
}

#[test]
#[parallel]
fn test_struct_arrays() {
    let empty: [Sample; 0] = [];
    let buf = encode_struct_array(W8_DEFAULT, &empty).unwrap();
    assert!(buf.is_null());

    let list = [
        Sample {
            flag: false,
            value: 1,
            ptr: NativePtr::null(),
        },
        Sample {
            flag: true,
            value: 2,
            ptr: NativePtr::null(),
        },
    ];
    for v in crate::variant::Variant::all() {
        let buf = encode_struct_array(v, &list).unwrap();
        assert_eq!(buf.len(), 2 * struct_size::<Sample>(v));
        let back: Vec<Sample> =
            unsafe { decode_struct_array(v, buf.ptr(), 2) }.unwrap();
        assert_eq!(back, list.to_vec());
    }

    let none: Vec<Sample> =
        unsafe { decode_struct_array(W4_DEFAULT, NativePtr::null(), 0) }
            .unwrap();
    assert!(none.is_empty());
    let err = unsafe {
        decode_struct_array::<Sample>(W4_DEFAULT, NativePtr::null(), 3)
    }
    .unwrap_err();
    assert!(err.is_shape_mismatch());
}

#[test]
#[parallel]
fn test_output_records() {
    let buf = alloc_struct::<Outer>(W8_DEFAULT).unwrap();
    assert_eq!(buf.len(), struct_size::<Outer>(W8_DEFAULT));
    let out: Outer = unsafe { read_struct(W8_DEFAULT, buf.ptr()) }.unwrap();
    assert_eq!(out, Outer::default());

    let err =
        unsafe { read_struct::<Outer>(W8_DEFAULT, NativePtr::null()) }
            .unwrap_err();
    assert!(err.is_shape_mismatch());
}
