// Copyright 2025 Simo Sorce
// See LICENSE.txt file for terms

//! Information structures returned by a native module
//!
//! These records are filled in by `C_GetInfo`, `C_GetSlotInfo`,
//! `C_GetTokenInfo`, `C_GetSessionInfo` and `C_GetMechanismInfo`, or
//! passed to `C_Initialize`. They use the same per variant layouts as
//! every other structure, text fields are fixed size and blank padded.

use std::fmt;

use crate::attribute::CkDate;
use crate::error::Result;
use crate::memory::NativePtr;
use crate::misc::padded_utf8;
use crate::native_struct;
use crate::pkcs11::*;
use crate::variant::Variant;

use bitflags::bitflags;

/// Maps the unavailable sentinel of `v` to `None`
pub fn ulong_info(v: Variant, val: CK_ULONG) -> Option<CK_ULONG> {
    if val == v.unavailable_information() || val == CK_UNAVAILABLE_INFORMATION
    {
        None
    } else {
        Some(val)
    }
}

native_struct! {
    /// `CK_VERSION`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Version {
        pub major: u8,
        pub minor: u8,
    }
}

impl Version {
    pub fn new(major: u8, minor: u8) -> Version {
        Version {
            major: major,
            minor: minor,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

native_struct! {
    /// `CK_DATE`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct RawDate {
        pub year: [u8; 4],
        pub month: [u8; 2],
        pub day: [u8; 2],
    }
}

impl RawDate {
    pub fn from_date(date: &CkDate) -> RawDate {
        let b = date.to_bytes();
        RawDate {
            year: [b[0], b[1], b[2], b[3]],
            month: [b[4], b[5]],
            day: [b[6], b[7]],
        }
    }

    /// An all zero or all blank date is `None`
    pub fn to_date(&self) -> Result<Option<CkDate>> {
        let mut b = [0u8; 8];
        b[0..4].copy_from_slice(&self.year);
        b[4..6].copy_from_slice(&self.month);
        b[6..8].copy_from_slice(&self.day);
        CkDate::from_bytes(&b)
    }
}

bitflags! {
    /// Flags of `CK_C_INITIALIZE_ARGS`
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct InitializeFlags: CK_FLAGS {
        /// The module must not create threads of its own
        const LibraryCantCreateOsThreads = CKF_LIBRARY_CANT_CREATE_OS_THREADS;
        /// The module may use the native OS locking primitives
        const OsLockingOk = CKF_OS_LOCKING_OK;
    }
}

bitflags! {
    /// Flags of `CK_SLOT_INFO`
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct SlotFlags: CK_FLAGS {
        const TokenPresent = CKF_TOKEN_PRESENT;
        const RemovableDevice = CKF_REMOVABLE_DEVICE;
        const HwSlot = CKF_HW_SLOT;
    }
}

bitflags! {
    /// Flags of `CK_TOKEN_INFO`
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct TokenFlags: CK_FLAGS {
        const Rng = CKF_RNG;
        const WriteProtected = CKF_WRITE_PROTECTED;
        const LoginRequired = CKF_LOGIN_REQUIRED;
        const UserPinInitialized = CKF_USER_PIN_INITIALIZED;
        const RestoreKeyNotNeeded = CKF_RESTORE_KEY_NOT_NEEDED;
        const ClockOnToken = CKF_CLOCK_ON_TOKEN;
        const ProtectedAuthenticationPath = CKF_PROTECTED_AUTHENTICATION_PATH;
        const DualCryptoOperations = CKF_DUAL_CRYPTO_OPERATIONS;
        const TokenInitialized = CKF_TOKEN_INITIALIZED;
        const SecondaryAuthentication = CKF_SECONDARY_AUTHENTICATION;
        const UserPinCountLow = CKF_USER_PIN_COUNT_LOW;
        const UserPinFinalTry = CKF_USER_PIN_FINAL_TRY;
        const UserPinLocked = CKF_USER_PIN_LOCKED;
        const UserPinToBeChanged = CKF_USER_PIN_TO_BE_CHANGED;
        const SoPinCountLow = CKF_SO_PIN_COUNT_LOW;
        const SoPinFinalTry = CKF_SO_PIN_FINAL_TRY;
        const SoPinLocked = CKF_SO_PIN_LOCKED;
        const SoPinToBeChanged = CKF_SO_PIN_TO_BE_CHANGED;
        const ErrorState = CKF_ERROR_STATE;
    }
}

bitflags! {
    /// Flags of `CK_MECHANISM_INFO`, the operations a mechanism supports
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct MechanismFlags: CK_FLAGS {
        const Hw = CKF_HW;
        const Encrypt = CKF_ENCRYPT;
        const Decrypt = CKF_DECRYPT;
        const Digest = CKF_DIGEST;
        const Sign = CKF_SIGN;
        const SignRecover = CKF_SIGN_RECOVER;
        const Verify = CKF_VERIFY;
        const VerifyRecover = CKF_VERIFY_RECOVER;
        const Generate = CKF_GENERATE;
        const GenerateKeyPair = CKF_GENERATE_KEY_PAIR;
        const Wrap = CKF_WRAP;
        const Unwrap = CKF_UNWRAP;
        const Derive = CKF_DERIVE;
        const EcFp = CKF_EC_F_P;
        const EcF2m = CKF_EC_F_2M;
        const EcParameters = CKF_EC_ECPARAMETERS;
        const EcNamedCurve = CKF_EC_NAMEDCURVE;
        const EcUncompress = CKF_EC_UNCOMPRESS;
        const EcCompress = CKF_EC_COMPRESS;
        const Extension = CKF_EXTENSION;
    }
}

native_struct! {
    /// `CK_INFO`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Info {
        pub cryptoki_version: Version,
        pub manufacturer_id: [u8; 32],
        pub flags: CK_FLAGS,
        pub library_description: [u8; 32],
        pub library_version: Version,
    }
}

impl Info {
    pub fn manufacturer(&self) -> Result<String> {
        padded_utf8(&self.manufacturer_id)
    }

    pub fn description(&self) -> Result<String> {
        padded_utf8(&self.library_description)
    }
}

native_struct! {
    /// `CK_SLOT_INFO`
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct SlotInfo {
        pub slot_description: [u8; 64],
        pub manufacturer_id: [u8; 32],
        pub flags: CK_FLAGS,
        pub hardware_version: Version,
        pub firmware_version: Version,
    }
}

impl SlotInfo {
    pub fn description(&self) -> Result<String> {
        padded_utf8(&self.slot_description)
    }

    pub fn manufacturer(&self) -> Result<String> {
        padded_utf8(&self.manufacturer_id)
    }

    pub fn slot_flags(&self) -> SlotFlags {
        SlotFlags::from_bits_retain(self.flags)
    }
}

native_struct! {
    /// `CK_TOKEN_INFO`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct TokenInfo {
        pub label: [u8; 32],
        pub manufacturer_id: [u8; 32],
        pub model: [u8; 16],
        pub serial_number: [u8; 16],
        pub flags: CK_FLAGS,
        pub max_session_count: CK_ULONG,
        pub session_count: CK_ULONG,
        pub max_rw_session_count: CK_ULONG,
        pub rw_session_count: CK_ULONG,
        pub max_pin_len: CK_ULONG,
        pub min_pin_len: CK_ULONG,
        pub total_public_memory: CK_ULONG,
        pub free_public_memory: CK_ULONG,
        pub total_private_memory: CK_ULONG,
        pub free_private_memory: CK_ULONG,
        pub hardware_version: Version,
        pub firmware_version: Version,
        pub utc_time: [u8; 16],
    }
}

impl TokenInfo {
    pub fn label(&self) -> Result<String> {
        padded_utf8(&self.label)
    }

    pub fn manufacturer(&self) -> Result<String> {
        padded_utf8(&self.manufacturer_id)
    }

    pub fn model(&self) -> Result<String> {
        padded_utf8(&self.model)
    }

    pub fn serial_number(&self) -> Result<String> {
        padded_utf8(&self.serial_number)
    }

    pub fn token_flags(&self) -> TokenFlags {
        TokenFlags::from_bits_retain(self.flags)
    }

    /* counters a module may not know about */

    pub fn session_count(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.session_count)
    }

    pub fn rw_session_count(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.rw_session_count)
    }

    pub fn total_public_memory(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.total_public_memory)
    }

    pub fn free_public_memory(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.free_public_memory)
    }

    pub fn total_private_memory(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.total_private_memory)
    }

    pub fn free_private_memory(&self, v: Variant) -> Option<CK_ULONG> {
        ulong_info(v, self.free_private_memory)
    }
}

native_struct! {
    /// `CK_SESSION_INFO`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct SessionInfo {
        pub slot_id: CK_SLOT_ID,
        pub state: CK_STATE,
        pub flags: CK_FLAGS,
        pub device_error: CK_ULONG,
    }
}

impl SessionInfo {
    pub fn is_rw(&self) -> bool {
        self.flags & CKF_RW_SESSION != 0
    }
}

native_struct! {
    /// `CK_MECHANISM_INFO`
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct MechanismInfo {
        pub min_key_size: CK_ULONG,
        pub max_key_size: CK_ULONG,
        pub flags: CK_FLAGS,
    }
}

impl MechanismInfo {
    pub fn mechanism_flags(&self) -> MechanismFlags {
        MechanismFlags::from_bits_retain(self.flags)
    }
}

native_struct! {
    /// `CK_C_INITIALIZE_ARGS`
    ///
    /// The mutex callbacks are native function pointers, this layer never
    /// calls them.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct CInitializeArgs {
        pub create_mutex: NativePtr,
        pub destroy_mutex: NativePtr,
        pub lock_mutex: NativePtr,
        pub unlock_mutex: NativePtr,
        pub flags: CK_FLAGS,
        pub reserved: NativePtr,
    }
}

impl CInitializeArgs {
    /// Arguments asking the module to use the OS locking primitives
    pub fn os_locking() -> CInitializeArgs {
        CInitializeArgs {
            flags: InitializeFlags::OsLockingOk.bits(),
            ..Default::default()
        }
    }

    pub fn init_flags(&self) -> InitializeFlags {
        InitializeFlags::from_bits_retain(self.flags)
    }
}
