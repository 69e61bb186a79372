// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

/// File helpers: secure read/write, recursive mkdir, bounded waits.
pub mod fs;
