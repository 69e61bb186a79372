// CLASSIFICATION: COMMUNITY
// Filename: dt_synth.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Materialise `android.fw.*` pairs as device-tree leaf files.
//!
//! `android.fw.display.panel=oled` under root `/dev/dt` becomes the file
//! `/dev/dt/display/panel` containing `oled\n`.

use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::error::BootResult;
use crate::util::fs::{mkdir_recursive, write_file};

pub const DT_KEY_PREFIX: &str = "android.fw.";

const DT_DIR_MODE: u32 = 0o700;

/// Leaf path for `key` under `root`, or `None` when the key is not a DT key.
///
/// Only plain name components are kept, so the result always stays below
/// `root` whatever separators or `..` the key carries.
pub fn dt_leaf_path(key: &str, root: &Path) -> Option<PathBuf> {
    let rest = key.strip_prefix(DT_KEY_PREFIX)?;
    let mut path = root.to_path_buf();
    let mut pushed = false;
    for part in rest.split('.') {
        for comp in Path::new(part).components() {
            if let Component::Normal(name) = comp {
                path.push(name);
                pushed = true;
            }
        }
    }
    pushed.then_some(path)
}

/// Write one decoded pair under `root`.
///
/// Returns the written path, or `None` if the key was ignored. The emulator
/// flag is accepted for callback compatibility; emulator boots synthesise the
/// same files.
pub fn create_dt_file(
    key: &str,
    value: &str,
    _in_emulator: bool,
    root: &Path,
) -> BootResult<Option<PathBuf>> {
    let Some(path) = dt_leaf_path(key, root) else {
        debug!("ignoring non-DT key {key:?}");
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        mkdir_recursive(parent, DT_DIR_MODE)?;
    }
    write_file(&path, &format!("{value}\n"))?;
    debug!("synthesised {} = {value:?}", path.display());
    Ok(Some(path))
}
