// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

//! Boot configuration resolution for early init.
//!
//! Reads the kernel command line, finds (or synthesises from ACPI) the
//! Android device-tree directory, and expands `${prop}` references in config
//! strings once a property service exists.

/// Kernel command-line tokenizer.
pub mod bootloader;

/// Device-tree directory discovery and ACPI synthesis.
pub mod boot;

/// Path configuration (defaults, env overrides, TOML).
pub mod config;

/// Error types shared by discovery and file helpers.
pub mod error;

/// Property stores and template expansion.
pub mod props;

/// Filesystem helpers.
pub mod util;

pub use boot::{get_android_dt_dir, read_android_dt_file, DtDirResolver};
pub use bootloader::{import_kernel_cmdline, BootArgs};
pub use config::BootPaths;
pub use error::{BootError, BootResult};
pub use props::{expand_props, ExpandError, PropertyStore};
