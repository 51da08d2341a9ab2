// Copyright 2024 Simo Sorce
// See LICENSE.txt file for terms

//! Optional configuration that overrides ABI variant detection
//!
//! Detection is right for the vast majority of native modules, but some
//! builds deviate (for example a 64 bit module compiled with packed
//! structures). Those can be described in a TOML file or through
//! environment variables.

use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::variant::{Packing, UlongWidth};

use serde::{Deserialize, Serialize};
use toml;

#[cfg(not(test))]
const DEFAULT_CONF_DIR: &str = {
    match option_env!("CONFDIR") {
        Some(p) => p,
        None => "/usr/local/etc",
    }
};
#[cfg(test)]
const DEFAULT_CONF_DIR: &str = "testdata";

pub const DEFAULT_CONF_NAME: &str = "abi.conf";

pub const ENV_CONF: &str = "CRYPTOKI_ABI_CONF";
pub const ENV_ULONG_SIZE: &str = "CRYPTOKI_ABI_ULONG_SIZE";
pub const ENV_PACKING: &str = "CRYPTOKI_ABI_PACKING";

/// The `[abi]` table of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Abi {
    pub ulong_size: Option<u8>,
    pub packing: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub abi: Abi,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Finds the configuration file, if any
    ///
    /// A file named by the environment has precedence and must exist,
    /// the standard locations are only used when present.
    pub fn find_conf() -> Result<Option<String>> {
        /* First check for our own env var,
         * this has the highest precedence */
        if let Ok(var) = env::var(ENV_CONF) {
            if !Path::new(&var).is_file() {
                return Err(Error::config(format!(
                    "configuration file {} not found",
                    var
                )));
            }
            return Ok(Some(var));
        }
        let datafile = match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => format!("{}/cryptoki-abi/{}", xdg, DEFAULT_CONF_NAME),
            Err(_) => match env::var("HOME") {
                Ok(home) => format!(
                    "{}/.config/cryptoki-abi/{}",
                    home, DEFAULT_CONF_NAME
                ),
                Err(_) => format!(
                    "{}/cryptoki-abi/{}",
                    DEFAULT_CONF_DIR, DEFAULT_CONF_NAME
                ),
            },
        };
        if Path::new(&datafile).is_file() {
            Ok(Some(datafile))
        } else {
            Ok(None)
        }
    }

    pub fn from_file(filename: &str) -> Result<Config> {
        let config_str = fs::read_to_string(filename)
            .map_err(Error::config_from_error)?;
        Config::from_string(&config_str)
    }

    pub fn from_string(config_str: &str) -> Result<Config> {
        let conf: Config = toml::from_str(config_str)?;
        /* validate early so a broken file never goes unnoticed */
        conf.ulong_width()?;
        conf.packing()?;
        Ok(conf)
    }

    /// Loads the configuration from the standard locations and applies
    /// environment overrides on top
    pub fn load() -> Result<Config> {
        let mut conf = match Config::find_conf()? {
            Some(filename) => Config::from_file(&filename)?,
            None => Config::new(),
        };
        conf.apply_env()?;
        Ok(conf)
    }

    /// Environment variables override anything set in the file
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(size) = env::var(ENV_ULONG_SIZE) {
            let size = size.trim().parse::<u8>().map_err(|e| {
                Error::config(format!("invalid {}: {}", ENV_ULONG_SIZE, e))
            })?;
            self.abi.ulong_size = Some(size);
        }
        if let Ok(packing) = env::var(ENV_PACKING) {
            self.abi.packing = Some(packing.trim().to_string());
        }
        self.ulong_width()?;
        self.packing()?;
        Ok(())
    }

    pub fn ulong_width(&self) -> Result<Option<UlongWidth>> {
        match self.abi.ulong_size {
            Some(size) => Ok(Some(UlongWidth::from_size(usize::from(size))?)),
            None => Ok(None),
        }
    }

    pub fn packing(&self) -> Result<Option<Packing>> {
        match self.abi.packing {
            Some(ref p) => Ok(Some(p.parse::<Packing>()?)),
            None => Ok(None),
        }
    }
}
