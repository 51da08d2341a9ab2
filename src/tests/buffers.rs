// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

use crate::error::ErrorKind;
use crate::memory::*;
use crate::pkcs11::*;

use serial_test::parallel;

#[test]
#[parallel]
fn test_raw_allocation() {
    let ptr = allocate(0).unwrap();
    assert!(ptr.is_null());

    let ptr = allocate(16).unwrap();
    assert!(!ptr.is_null());
    assert_eq!(unsafe { read(ptr, 16) }, vec![0u8; 16]);

    unsafe { write(ptr, b"native") };
    assert_eq!(unsafe { read(ptr, 6) }, b"native".to_vec());
    assert_eq!(unsafe { read(ptr.offset(2), 4) }, b"tive".to_vec());

    let ptr = unsafe { free(ptr) };
    assert!(ptr.is_null());
    /* freeing the sentinel is a no-op */
    let ptr = unsafe { free(ptr) };
    assert!(ptr.is_null());

    assert!(unsafe { read(NativePtr::null(), 8) }.is_empty());
}

#[test]
#[parallel]
fn test_allocation_failure() {
    let err = allocate(usize::MAX).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Allocation);
    assert_eq!(err.rv(), CKR_HOST_MEMORY);
}

#[test]
#[parallel]
fn test_buffer_lifecycle() {
    let mut buf = Buffer::from_slice(&[1, 2, 3]).unwrap();
    assert!(!buf.is_null());
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.len_ulong().unwrap(), 3);
    assert_eq!(buf.as_slice(), &[1, 2, 3]);

    buf.write_at(1, &[9, 9]).unwrap();
    assert_eq!(buf.to_vec(), vec![1, 9, 9]);
    let err = buf.write_at(2, &[7, 7]).unwrap_err();
    assert_eq!(err.rv(), CKR_BUFFER_TOO_SMALL);
    let err = buf.write_at(usize::MAX, &[7]).unwrap_err();
    assert_eq!(err.rv(), CKR_BUFFER_TOO_SMALL);

    buf.set_zeroize();
    buf.free();
    assert!(buf.is_null());
    assert_eq!(buf.len(), 0);
    assert!(buf.as_slice().is_empty());
    /* releasing twice is harmless */
    buf.free();
    assert!(buf.is_null());
}

#[test]
#[parallel]
fn test_buffer_empty_values() {
    let buf = Buffer::from_slice(&[]).unwrap();
    assert!(buf.is_null());
    assert_eq!(buf.len(), 0);

    let buf = Buffer::empty();
    assert!(buf.ptr().is_null());

    let buf = Buffer::zeroed(4).unwrap();
    assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
}

#[test]
#[parallel]
fn test_buffer_ownership_transfer() {
    let buf = Buffer::from_slice(b"handover").unwrap();
    let (ptr, len) = buf.into_raw();
    assert!(!ptr.is_null());
    assert_eq!(len, 8);

    /* still alive after the handle is gone */
    assert_eq!(unsafe { read(ptr, len) }, b"handover".to_vec());

    let buf = unsafe { Buffer::from_raw(ptr, len) };
    assert_eq!(buf.as_slice(), b"handover");
    drop(buf);

    let buf = unsafe { Buffer::from_raw(NativePtr::null(), 10) };
    assert_eq!(buf.len(), 0);
}

#[test]
#[parallel]
fn test_buffer_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Buffer>();
    assert_send::<crate::attribute::CkAttribute>();
    assert_send::<crate::mechanism::CkMechanism>();

    let buf = Buffer::from_slice(b"moved").unwrap();
    let handle = std::thread::spawn(move || buf.to_vec());
    assert_eq!(handle.join().unwrap(), b"moved".to_vec());
}
