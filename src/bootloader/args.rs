// CLASSIFICATION: COMMUNITY
// Filename: args.rs v0.3
// Date Modified: 2026-10-18
// Author: Lukas Bower
//
// ─────────────────────────────────────────────────────────────
// Bootcfg · Kernel Command-Line Tokenizer
//
// Splits the kernel command line into `key=value` pairs. The
// grammar matches what early init has always accepted:
//
//   * surrounding whitespace is trimmed
//   * tokens are separated by single spaces
//   * a token is accepted only when it splits on `=` into
//     exactly two pieces
//
// Tokens such as `quiet` or `b=2=3` are dropped without error.
// That last case is a long-standing quirk; callers relying on
// values that contain `=` never see them.
//
// # Public API
// * [`cmdline_entries`] – iterator over accepted pairs
// * [`import_kernel_cmdline`] – callback form used by init
// * [`cmdline_value`] – first value for a key
// * [`BootArgs`] – last-write-wins map view
// ─────────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::config::BootPaths;
use crate::util::fs::read_text_lossy;

/// One accepted `key=value` token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CmdlineEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

fn split_entry(token: &str) -> Option<CmdlineEntry<'_>> {
    let (key, value) = token.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some(CmdlineEntry { key, value })
}

/// Accepted entries of `cmdline` in document order. Repeated keys are
/// yielded once per occurrence.
pub fn cmdline_entries(cmdline: &str) -> impl Iterator<Item = CmdlineEntry<'_>> {
    cmdline.trim().split(' ').filter_map(split_entry)
}

/// Read the command line blob at `path`. A missing or unreadable file reads
/// as an empty command line; invalid UTF-8 is replaced, not fatal.
pub fn read_cmdline(path: &Path) -> String {
    match read_text_lossy(path) {
        Ok(s) => s,
        Err(e) => {
            debug!("cmdline {} unreadable ({e}); treating as empty", path.display());
            String::new()
        }
    }
}

/// Feed every accepted entry of `cmdline` to `f` as `(key, value, in_emulator)`.
pub fn for_each_cmdline_entry<F>(cmdline: &str, in_emulator: bool, mut f: F)
where
    F: FnMut(&str, &str, bool),
{
    for entry in cmdline_entries(cmdline) {
        f(entry.key, entry.value, in_emulator);
    }
}

/// Read the kernel command line configured in `paths` and feed each accepted
/// entry to `f`.
pub fn import_kernel_cmdline<F>(paths: &BootPaths, in_emulator: bool, f: F)
where
    F: FnMut(&str, &str, bool),
{
    let cmdline = read_cmdline(&paths.cmdline);
    for_each_cmdline_entry(&cmdline, in_emulator, f);
}

/// Value of the first accepted entry named `key`.
pub fn cmdline_value<'a>(cmdline: &'a str, key: &str) -> Option<&'a str> {
    cmdline_entries(cmdline)
        .find(|e| e.key == key)
        .map(|e| e.value)
}

/// Key/value map of boot parameters. Later occurrences replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct BootArgs {
    map: HashMap<String, String>,
}

impl BootArgs {
    /// Retrieve the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` when no `key=value` token was accepted.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Collect a raw command line into a [`BootArgs`] map.
///
/// # Examples
///
/// ```
/// use bootcfg::bootloader::args::parse_cmdline;
///
/// let args = parse_cmdline("console=ttyS0 quiet androidboot.hardware=x86");
/// assert_eq!(args.get("androidboot.hardware"), Some("x86"));
/// assert_eq!(args.get("quiet"), None);
/// ```
pub fn parse_cmdline(cmdline: &str) -> BootArgs {
    let mut map = HashMap::new();
    for_each_cmdline_entry(cmdline, false, |k, v, _| {
        map.insert(k.to_owned(), v.to_owned());
    });
    BootArgs { map }
}
