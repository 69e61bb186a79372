// CLASSIFICATION: COMMUNITY
// Filename: dt_dir.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Android device-tree directory discovery.
//!
//! Priority, first match wins:
//!
//! 1. the kernel-provided procfs directory, if it is a directory;
//! 2. `androidboot.android_dt_dir=` from the kernel cmdline;
//! 3. the ramdisk alternative directory.
//!
//! When the candidate from (2) or (3) does not exist, the ACPI config node is
//! decoded into it. The candidate is returned even if synthesis failed, so DT
//! readers must cope with missing leaves.
//!
//! The process-wide answer is computed once and never invalidated.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, error, info, warn};
use once_cell::sync::{Lazy, OnceCell};

use crate::boot::acpi::import_acpi_cmdline;
use crate::boot::dt_synth::create_dt_file;
use crate::bootloader::args::import_kernel_cmdline;
use crate::config::BootPaths;
use crate::error::BootError;
use crate::util::fs::is_dir;

/// Cmdline key that overrides the Android DT directory.
pub const DT_DIR_OVERRIDE_KEY: &str = "androidboot.android_dt_dir";

/// Run the discovery procedure once, without caching.
pub fn discover_android_dt_dir(paths: &BootPaths, in_emulator: bool) -> PathBuf {
    if is_dir(&paths.default_dt_dir) {
        return paths.default_dt_dir.clone();
    }

    let mut dt_override = None;
    import_kernel_cmdline(paths, in_emulator, |key, value, _| {
        if key == DT_DIR_OVERRIDE_KEY {
            dt_override = Some(PathBuf::from(value));
        }
    });
    let dt_dir = dt_override.unwrap_or_else(|| paths.alt_dt_dir.clone());
    info!("Using Android DT directory {}", dt_dir.display());

    if !is_dir(&dt_dir) {
        synthesize_from_acpi(paths, in_emulator, &dt_dir);
    }
    dt_dir
}

fn synthesize_from_acpi(paths: &BootPaths, in_emulator: bool, dt_dir: &Path) {
    let mut written = 0usize;
    let mut failed = 0usize;
    let res = import_acpi_cmdline(paths, in_emulator, dt_dir, |key, value, emu, root| {
        match create_dt_file(key, value, emu, root) {
            Ok(Some(_)) => written += 1,
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                warn!("failed to synthesise DT entry {key:?}: {e}");
            }
        }
    });
    match res {
        Ok(decoded) => info!(
            "synthesised {written} DT files from {decoded} ACPI entries into {} ({failed} failed)",
            dt_dir.display()
        ),
        Err(BootError::AbsentAcpiNode { root }) => info!(
            "no ACPI config node under {}; {} left absent",
            root.display(),
            dt_dir.display()
        ),
        Err(e) => error!("ACPI import into {} failed: {e}", dt_dir.display()),
    }
}

/// Memoised DT directory for one set of [`BootPaths`].
///
/// Concurrent first callers block until the single discovery run finishes
/// and then all observe the same path.
#[derive(Debug)]
pub struct DtDirResolver {
    paths: BootPaths,
    in_emulator: bool,
    dir: OnceCell<PathBuf>,
    discoveries: AtomicUsize,
}

impl DtDirResolver {
    /// Resolver for a non-emulator boot.
    pub fn new(paths: BootPaths) -> Self {
        Self::with_emulator(paths, false)
    }

    /// Resolver whose cmdline and ACPI callbacks see `in_emulator`.
    pub fn with_emulator(paths: BootPaths, in_emulator: bool) -> Self {
        Self {
            paths,
            in_emulator,
            dir: OnceCell::new(),
            discoveries: AtomicUsize::new(0),
        }
    }

    /// Paths this resolver consults.
    pub fn paths(&self) -> &BootPaths {
        &self.paths
    }

    /// The effective DT directory, discovering it on first use.
    pub fn get(&self) -> &Path {
        self.dir.get_or_init(|| {
            self.discoveries.fetch_add(1, Ordering::SeqCst);
            discover_android_dt_dir(&self.paths, self.in_emulator)
        })
    }

    /// Number of discovery runs so far; 0 before the first [`get`](Self::get), 1 after.
    pub fn discovery_count(&self) -> usize {
        self.discoveries.load(Ordering::SeqCst)
    }

    /// Read a DT leaf below the resolved directory.
    ///
    /// Leaves are NUL-terminated, so the final byte is dropped. Missing,
    /// unreadable or empty leaves yield `None`.
    pub fn read_dt_file(&self, sub_path: &str) -> Option<String> {
        let file = self.get().join(sub_path.trim_start_matches('/'));
        let mut content = match fs::read(&file) {
            Ok(c) => c,
            Err(e) => {
                debug!("DT leaf {} unreadable: {e}", file.display());
                return None;
            }
        };
        content.pop()?;
        Some(String::from_utf8_lossy(&content).into_owned())
    }

    /// `true` when the leaf exists and equals `expected`.
    pub fn is_dt_value_expected(&self, sub_path: &str, expected: &str) -> bool {
        self.read_dt_file(sub_path)
            .map(|v| v == expected)
            .unwrap_or(false)
    }
}

static ANDROID_DT_DIR: Lazy<DtDirResolver> =
    Lazy::new(|| DtDirResolver::new(BootPaths::from_env()));

/// Process-wide Android DT directory.
pub fn get_android_dt_dir() -> &'static Path {
    ANDROID_DT_DIR.get()
}

/// Read `sub_path` under the process-wide DT directory.
pub fn read_android_dt_file(sub_path: &str) -> Option<String> {
    ANDROID_DT_DIR.read_dt_file(sub_path)
}

/// `true` when the process-wide DT leaf `sub_path` equals `expected`.
pub fn is_android_dt_value_expected(sub_path: &str, expected: &str) -> bool {
    ANDROID_DT_DIR.is_dt_value_expected(sub_path, expected)
}
