// CLASSIFICATION: COMMUNITY
// Filename: fs.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Small filesystem helpers used before the property service is up.

use std::fs::{self, DirBuilder, File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{BootError, BootResult};

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Read `path` into a string without following a final symlink.
///
/// Group- or world-writable files are refused with [`BootError::InsecureFile`].
pub fn read_file(path: &Path) -> BootResult<String> {
    let mut file = File::options()
        .read(true)
        .custom_flags(libc::O_NOFOLLOW | libc::O_CLOEXEC)
        .open(path)
        .map_err(|e| BootError::io(path, e))?;
    let meta = file.metadata().map_err(|e| BootError::io(path, e))?;
    if meta.permissions().mode() & 0o022 != 0 {
        return Err(BootError::InsecureFile {
            path: path.to_path_buf(),
        });
    }
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| BootError::io(path, e))?;
    Ok(content)
}

/// Read `path` as text, replacing invalid UTF-8 rather than failing.
///
/// Kernel and firmware attributes are raw bytes; only a real I/O error is
/// an error here.
pub fn read_text_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Create or truncate `path` with mode 0600 and write `content`.
pub fn write_file(path: &Path, content: &str) -> BootResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .custom_flags(libc::O_NOFOLLOW | libc::O_CLOEXEC)
        .open(path)
        .map_err(|e| BootError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| BootError::io(path, e))
}

/// Create `path` and any missing parents with `mode`. Existing directories
/// are not an error.
pub fn mkdir_recursive(path: &Path, mode: u32) -> BootResult<()> {
    DirBuilder::new()
        .recursive(true)
        .mode(mode)
        .create(path)
        .map_err(|e| BootError::io(path, e))
}

/// `true` when `path` exists and is a directory (symlinks followed).
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Poll until `path` exists or `timeout` elapses.
pub fn wait_for_file(path: &Path, timeout: Duration) -> BootResult<()> {
    let start = Instant::now();
    let deadline = start + timeout;
    while Instant::now() < deadline {
        if fs::metadata(path).is_ok() {
            return Ok(());
        }
        thread::sleep(WAIT_POLL_INTERVAL);
    }
    Err(BootError::Timeout {
        path: path.to_path_buf(),
        waited: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::Permissions;

    #[test]
    fn write_then_read_private_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("leaf");
        write_file(&file, "value\n").unwrap();
        assert_eq!(fs::metadata(&file).unwrap().permissions().mode() & 0o777, 0o600);
        assert_eq!(read_file(&file).unwrap(), "value\n");
    }

    #[test]
    fn lossy_read_keeps_valid_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blob");
        fs::write(&file, b"a=1 label=\xff b=2").unwrap();
        assert_eq!(read_text_lossy(&file).unwrap(), "a=1 label=\u{FFFD} b=2");
        assert!(read_text_lossy(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn refuses_world_writable_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("open");
        fs::write(&file, "x").unwrap();
        fs::set_permissions(&file, Permissions::from_mode(0o666)).unwrap();
        assert!(matches!(read_file(&file), Err(BootError::InsecureFile { .. })));
    }

    #[test]
    fn refuses_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(matches!(read_file(&link), Err(BootError::Io { .. })));
    }

    #[test]
    fn mkdir_recursive_tolerates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a/b/c");
        mkdir_recursive(&deep, 0o700).unwrap();
        mkdir_recursive(&deep, 0o700).unwrap();
        assert!(is_dir(&deep));
        assert!(!is_dir(&deep.join("missing")));
    }

    #[test]
    fn wait_for_file_sees_late_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("late");
        let writer_path = file.clone();
        let writer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            fs::write(writer_path, "").unwrap();
        });
        wait_for_file(&file, Duration::from_secs(5)).unwrap();
        writer.join().unwrap();
    }

    #[test]
    fn wait_for_file_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let res = wait_for_file(&dir.path().join("never"), Duration::from_millis(30));
        assert!(matches!(res, Err(BootError::Timeout { .. })));
    }
}
