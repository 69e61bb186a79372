// CLASSIFICATION: COMMUNITY
// Filename: mod.rs · Bootcfg boot subsystem
// Date Modified: 2026-10-18
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Bootcfg Boot Subsystem – Root Module
//
// Hardware-description discovery for early init.
//
// ## Current sub‑modules
// * `dt_dir`   – Android DT directory discovery and leaf readers.
// * `acpi`     – key/value import from the ACPI `CFG0` node.
// * `dt_synth` – writes `android.fw.*` pairs as DT leaf files.
// ─────────────────────────────────────────────────────────────

#![forbid(unsafe_code)]

/// ACPI firmware node importer.
pub mod acpi;
/// Device-tree leaf synthesis.
pub mod dt_synth;
/// Memoised DT directory discovery.
pub mod dt_dir;

pub use acpi::{acpi_cfg_root, import_acpi_cmdline};
pub use dt_dir::{
    discover_android_dt_dir, get_android_dt_dir, is_android_dt_value_expected,
    read_android_dt_file, DtDirResolver,
};
pub use dt_synth::create_dt_file;
