// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Filesystem locations consulted during early boot.
//!
//! Defaults match the platform layout. Each path can be overridden through
//! the environment (handy for tests and chroots) or loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BootError, BootResult};

pub const DEFAULT_CMDLINE: &str = "/proc/cmdline";
pub const DEFAULT_ANDROID_DT_DIR: &str = "/proc/device-tree/firmware/android/";
pub const ALT_ANDROID_DT_DIR: &str = "/dev/device-tree/firmware/android/";
pub const DEFAULT_ACPI_CFG_ROOT: &str = "/sys/devices/system/container/ACPI0004:00/firmware_node";

pub const ENV_CMDLINE: &str = "BOOTCFG_CMDLINE";
pub const ENV_DT_DIR: &str = "BOOTCFG_DT_DIR";
pub const ENV_ALT_DT_DIR: &str = "BOOTCFG_ALT_DT_DIR";
pub const ENV_ACPI_ROOT: &str = "BOOTCFG_ACPI_ROOT";

/// Paths used by cmdline import, DT discovery and ACPI synthesis.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootPaths {
    /// Kernel command line blob.
    pub cmdline: PathBuf,
    /// Kernel-provided Android DT directory. Wins whenever it exists.
    pub default_dt_dir: PathBuf,
    /// Ramdisk alternative used when the cmdline names no override.
    pub alt_dt_dir: PathBuf,
    /// ACPI firmware node used when `android.acpi.cfg.root` is absent.
    pub acpi_default_root: PathBuf,
}

impl Default for BootPaths {
    fn default() -> Self {
        Self {
            cmdline: PathBuf::from(DEFAULT_CMDLINE),
            default_dt_dir: PathBuf::from(DEFAULT_ANDROID_DT_DIR),
            alt_dt_dir: PathBuf::from(ALT_ANDROID_DT_DIR),
            acpi_default_root: PathBuf::from(DEFAULT_ACPI_CFG_ROOT),
        }
    }
}

impl BootPaths {
    /// Defaults, with any `BOOTCFG_*` variable taking precedence.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: PathBuf| {
            std::env::var_os(name)
                .map(PathBuf::from)
                .unwrap_or(fallback)
        };
        Self {
            cmdline: var(ENV_CMDLINE, defaults.cmdline),
            default_dt_dir: var(ENV_DT_DIR, defaults.default_dt_dir),
            alt_dt_dir: var(ENV_ALT_DT_DIR, defaults.alt_dt_dir),
            acpi_default_root: var(ENV_ACPI_ROOT, defaults.acpi_default_root),
        }
    }

    /// Load paths from a TOML file. Keys left out keep their defaults.
    pub fn from_toml_file(path: &Path) -> BootResult<Self> {
        let data = fs::read_to_string(path).map_err(|e| BootError::io(path, e))?;
        toml::from_str(&data).map_err(|source| BootError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
