// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use std::ffi::c_ulong;
use std::mem::size_of;

use crate::attribute::CkDate;
use crate::info::*;
use crate::layout::{decode_struct, encode_struct, struct_size};
use crate::misc::to_padded_utf8;
use crate::pkcs11::*;
use crate::variant::Variant;

use super::util::*;

use serial_test::parallel;

#[allow(dead_code)]
#[repr(C)]
struct CVersion {
    major: u8,
    minor: u8,
}

#[allow(dead_code)]
#[repr(C)]
struct CInfo {
    cryptoki_version: CVersion,
    manufacturer_id: [u8; 32],
    flags: c_ulong,
    library_description: [u8; 32],
    library_version: CVersion,
}

#[test]
#[parallel]
fn test_info_sizes() {
    assert_eq!(struct_size::<Info>(W8_DEFAULT), 88);
    assert_eq!(struct_size::<Info>(W8_PACKED), 76);
    assert_eq!(struct_size::<Info>(W4_DEFAULT), 76);
    assert_eq!(struct_size::<Info>(W4_PACKED), 72);

    assert_eq!(struct_size::<TokenInfo>(W8_DEFAULT), 208);
    assert_eq!(struct_size::<TokenInfo>(W4_DEFAULT), 160);
    assert_eq!(struct_size::<TokenInfo>(W4_PACKED), 160);

    assert_eq!(struct_size::<SlotInfo>(W8_DEFAULT), 112);
    assert_eq!(struct_size::<SlotInfo>(W4_DEFAULT), 104);

    assert_eq!(struct_size::<SessionInfo>(W8_DEFAULT), 32);
    assert_eq!(struct_size::<SessionInfo>(W4_PACKED), 16);
    assert_eq!(struct_size::<MechanismInfo>(W4_DEFAULT), 12);
    assert_eq!(struct_size::<RawDate>(W8_DEFAULT), 8);
}

#[cfg(all(target_endian = "little", target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_initialize_args_sizes() {
    assert_eq!(struct_size::<CInitializeArgs>(W8_DEFAULT), 48);
    assert_eq!(struct_size::<CInitializeArgs>(W4_DEFAULT), 48);
    assert_eq!(struct_size::<CInitializeArgs>(W4_PACKED), 44);

    let args = CInitializeArgs::os_locking();
    assert!(args.create_mutex.is_null());
    assert!(args.init_flags().contains(InitializeFlags::OsLockingOk));
    let bytes = encode_struct(W4_PACKED, &args).unwrap();
    assert_eq!(bytes.len(), 44);
    assert_eq!(bytes[32], CKF_OS_LOCKING_OK as u8);
}

#[cfg(all(unix, target_pointer_width = "64"))]
#[test]
#[parallel]
fn test_info_matches_host_compiler() {
    assert_eq!(struct_size::<Info>(W8_DEFAULT), size_of::<CInfo>());
}

#[test]
#[parallel]
fn test_info_text_fields() {
    let info = Info {
        cryptoki_version: Version::new(3, 1),
        manufacturer_id: to_padded_utf8::<32>("Example Corp").unwrap(),
        flags: 0,
        library_description: to_padded_utf8::<32>("Soft Token").unwrap(),
        library_version: Version::new(0, 3),
    };
    assert_eq!(info.cryptoki_version.to_string(), "3.1");
    for v in Variant::all() {
        let bytes = encode_struct(v, &info).unwrap();
        let back: Info = decode_struct(v, &bytes).unwrap();
        assert_eq!(back.manufacturer().unwrap(), "Example Corp");
        assert_eq!(back.description().unwrap(), "Soft Token");
        assert_eq!(back.library_version, Version::new(0, 3));
    }

    let err = to_padded_utf8::<4>("too long").unwrap_err();
    assert_eq!(err.rv(), CKR_ARGUMENTS_BAD);
}

#[test]
#[parallel]
fn test_token_info_counters() {
    let mut token = TokenInfo {
        label: to_padded_utf8::<32>("Test Token").unwrap(),
        model: to_padded_utf8::<16>("v1").unwrap(),
        flags: CKF_RNG | CKF_TOKEN_INITIALIZED | CKF_LOGIN_REQUIRED,
        max_session_count: 16,
        session_count: CK_UNAVAILABLE_INFORMATION,
        rw_session_count: 2,
        total_public_memory: CK_UNAVAILABLE_INFORMATION,
        ..Default::default()
    };
    /* some modules pad with NULs */
    token.serial_number[..4].copy_from_slice(b"0042");

    for v in Variant::all() {
        let bytes = encode_struct(v, &token).unwrap();
        assert_eq!(bytes.len(), struct_size::<TokenInfo>(v));
        let back: TokenInfo = decode_struct(v, &bytes).unwrap();
        assert_eq!(back.label().unwrap(), "Test Token");
        assert_eq!(back.model().unwrap(), "v1");
        assert_eq!(back.serial_number().unwrap(), "0042");
        assert_eq!(back.session_count(v), None);
        assert_eq!(back.rw_session_count(v), Some(2));
        assert_eq!(back.total_public_memory(v), None);
        assert_eq!(back.free_public_memory(v), Some(0));

        let flags = back.token_flags();
        assert!(flags.contains(TokenFlags::Rng));
        assert!(flags.contains(TokenFlags::TokenInitialized));
        assert!(!flags.contains(TokenFlags::WriteProtected));
    }
}

#[test]
#[parallel]
fn test_session_and_mechanism_info() {
    let session = SessionInfo {
        slot_id: 1,
        state: CKS_RW_USER_FUNCTIONS,
        flags: CKF_RW_SESSION | CKF_SERIAL_SESSION,
        device_error: 0,
    };
    assert!(session.is_rw());
    let bytes = encode_struct(W4_DEFAULT, &session).unwrap();
    let back: SessionInfo = decode_struct(W4_DEFAULT, &bytes).unwrap();
    assert_eq!(back, session);

    let mech = MechanismInfo {
        min_key_size: 16,
        max_key_size: 32,
        flags: CKF_ENCRYPT | CKF_DECRYPT | CKF_HW | 0x4000_0000,
    };
    let bytes = encode_struct(W8_PACKED, &mech).unwrap();
    let back: MechanismInfo = decode_struct(W8_PACKED, &bytes).unwrap();
    let flags = back.mechanism_flags();
    assert!(flags.contains(MechanismFlags::Encrypt | MechanismFlags::Decrypt));
    assert!(!flags.contains(MechanismFlags::Sign));
    /* unknown bits are preserved */
    assert_eq!(flags.bits(), mech.flags);
}

#[test]
#[parallel]
fn test_slot_info() {
    let slot = SlotInfo {
        slot_description: to_padded_utf8::<64>("Slot 0").unwrap(),
        manufacturer_id: to_padded_utf8::<32>("Example Corp").unwrap(),
        flags: CKF_TOKEN_PRESENT | CKF_HW_SLOT,
        hardware_version: Version::new(1, 0),
        firmware_version: Version::new(2, 5),
    };
    for v in Variant::all() {
        let bytes = encode_struct(v, &slot).unwrap();
        let back: SlotInfo = decode_struct(v, &bytes).unwrap();
        assert_eq!(back.description().unwrap(), "Slot 0");
        assert_eq!(back.manufacturer().unwrap(), "Example Corp");
        assert!(back.slot_flags().contains(SlotFlags::TokenPresent));
        assert!(!back.slot_flags().contains(SlotFlags::RemovableDevice));
        assert_eq!(back.firmware_version.to_string(), "2.5");
    }
}

#[test]
#[parallel]
fn test_raw_date() {
    let date = CkDate::new(1999, 12, 31).unwrap();
    let raw = RawDate::from_date(&date);
    assert_eq!(&raw.year, b"1999");
    assert_eq!(&raw.month, b"12");
    assert_eq!(&raw.day, b"31");
    assert_eq!(raw.to_date().unwrap(), Some(date));

    let blank = RawDate {
        year: *b"    ",
        month: *b"  ",
        day: *b"  ",
    };
    assert_eq!(blank.to_date().unwrap(), None);
    assert_eq!(RawDate::default().to_date().unwrap(), None);
}
