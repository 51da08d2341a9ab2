// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

use crate::variant::{Packing, UlongWidth, Variant};

pub const W4_DEFAULT: Variant = Variant::new(UlongWidth::W4, Packing::Default);
pub const W4_PACKED: Variant = Variant::new(UlongWidth::W4, Packing::Packed);
pub const W8_DEFAULT: Variant = Variant::new(UlongWidth::W8, Packing::Default);
pub const W8_PACKED: Variant = Variant::new(UlongWidth::W8, Packing::Packed);

macro_rules! ret_or_panic {
    ($ret:expr) => {
        match $ret {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    };
}

/// Restores an environment variable when dropped
pub struct EnvGuard {
    name: &'static str,
    saved: Option<String>,
}

impl EnvGuard {
    pub fn set(name: &'static str, value: &str) -> EnvGuard {
        let saved = std::env::var(name).ok();
        std::env::set_var(name, value);
        EnvGuard {
            name: name,
            saved: saved,
        }
    }

    pub fn unset(name: &'static str) -> EnvGuard {
        let saved = std::env::var(name).ok();
        std::env::remove_var(name);
        EnvGuard {
            name: name,
            saved: saved,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.saved {
            Some(ref v) => std::env::set_var(self.name, v),
            None => std::env::remove_var(self.name),
        }
    }
}
