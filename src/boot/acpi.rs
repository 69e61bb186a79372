// CLASSIFICATION: COMMUNITY
// Filename: acpi.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Boot key/value pairs carried in an ACPI firmware node.
//!
//! Platforms without a kernel device tree expose a `CFG0` container device
//! whose `description` attribute holds newline-separated `key=value` lines.
//! The lines are tokenized with the cmdline rules, so `a=b=c` is dropped here
//! as well.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::bootloader::args::{cmdline_value, for_each_cmdline_entry, read_cmdline};
use crate::config::BootPaths;
use crate::error::{BootError, BootResult};
use crate::util::fs::read_text_lossy;

/// Cmdline key naming the ACPI node directory.
pub const ACPI_ROOT_KEY: &str = "android.acpi.cfg.root";
/// Substring the node's `path` attribute must contain.
pub const ACPI_CFG_SIGNATURE: &str = "CFG0";

/// ACPI node root: the cmdline override if any, else the configured default.
pub fn acpi_cfg_root(paths: &BootPaths) -> PathBuf {
    let cmdline = read_cmdline(&paths.cmdline);
    cmdline_value(&cmdline, ACPI_ROOT_KEY)
        .map(PathBuf::from)
        .unwrap_or_else(|| paths.acpi_default_root.clone())
}

/// Decode the ACPI node and hand each pair to `f` as
/// `(key, value, in_emulator, target_root)`.
///
/// Returns the number of decoded pairs. A node whose description yields no
/// pairs still counts as present and returns `Ok(0)`.
pub fn import_acpi_cmdline<F>(
    paths: &BootPaths,
    in_emulator: bool,
    target_root: &Path,
    mut f: F,
) -> BootResult<usize>
where
    F: FnMut(&str, &str, bool, &Path),
{
    let acpi_root = acpi_cfg_root(paths);
    info!("acpi cfg root: {}", acpi_root.display());

    let node_path = match read_text_lossy(&acpi_root.join("path")) {
        Ok(s) => s,
        Err(e) => {
            debug!("acpi path attribute unreadable under {}: {e}", acpi_root.display());
            String::new()
        }
    };
    if !node_path.contains(ACPI_CFG_SIGNATURE) {
        return Err(BootError::AbsentAcpiNode { root: acpi_root });
    }

    let description = match read_text_lossy(&acpi_root.join("description")) {
        Ok(s) => s,
        Err(e) => {
            warn!("acpi description unreadable under {}: {e}", acpi_root.display());
            String::new()
        }
    };
    let flattened = description.replace('\n', " ");

    let mut decoded = 0;
    for_each_cmdline_entry(&flattened, in_emulator, |key, value, emu| {
        decoded += 1;
        f(key, value, emu, target_root);
    });
    if decoded == 0 {
        // Kept as success to match existing platforms; see DESIGN.md.
        warn!(
            "acpi node {} present but its description holds no key=value pairs",
            acpi_root.display()
        );
    }
    Ok(decoded)
}
