// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.3
// Date Modified: 2026-10-18
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Bootcfg · Bootloader Hand-off (root module)
//
// Everything derived from what the bootloader hands the kernel.
//
// Current sub-modules
// -------------------
// * `args` – kernel command-line tokenizer
// ─────────────────────────────────────────────────────────────

/// Command-line tokenizer shared by DT discovery and ACPI import.
pub mod args;

pub use args::{
    cmdline_entries, cmdline_value, for_each_cmdline_entry, import_kernel_cmdline, parse_cmdline,
    read_cmdline, BootArgs, CmdlineEntry,
};
