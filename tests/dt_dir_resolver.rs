// CLASSIFICATION: COMMUNITY
// Filename: dt_dir_resolver.rs v0.1
// Date Modified: 2026-10-18
// Author: Lukas Bower

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;

use bootcfg::boot::acpi::ACPI_ROOT_KEY;
use bootcfg::boot::dt_dir::{discover_android_dt_dir, DT_DIR_OVERRIDE_KEY};
use bootcfg::{BootPaths, DtDirResolver};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sandbox(dir: &Path) -> BootPaths {
    BootPaths {
        cmdline: dir.join("cmdline"),
        default_dt_dir: dir.join("proc/device-tree/firmware/android"),
        alt_dt_dir: dir.join("dev/device-tree/firmware/android"),
        acpi_default_root: dir.join("sys/firmware_node"),
    }
}

fn acpi_node(root: &Path, path_attr: &str, description: &str) {
    fs::create_dir_all(root).unwrap();
    fs::write(root.join("path"), path_attr).unwrap();
    fs::write(root.join("description"), description).unwrap();
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(rd) = fs::read_dir(dir) {
        for ent in rd.flatten() {
            let p = ent.path();
            if p.is_dir() {
                out.extend(files_under(&p));
            } else {
                out.push(p);
            }
        }
    }
    out.sort();
    out
}

#[test]
fn synthesises_alt_tree_from_acpi() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    fs::write(&paths.cmdline, "console=ttyS0 quiet\n").unwrap();
    acpi_node(
        &paths.acpi_default_root,
        "\\_SB_.CFG0\n",
        "android.fw.compatible=android,firmware\nandroid.fw.fstab.vendor.dev=/dev/block/sda2\nandroidboot.hardware=x86\nbroken=a=b\n",
    );

    let resolver = DtDirResolver::new(paths.clone());
    assert_eq!(resolver.get(), paths.alt_dt_dir.as_path());

    let alt = &paths.alt_dt_dir;
    assert_eq!(
        files_under(alt),
        vec![alt.join("compatible"), alt.join("fstab/vendor/dev")]
    );
    assert_eq!(
        fs::read_to_string(alt.join("fstab/vendor/dev")).unwrap(),
        "/dev/block/sda2\n"
    );
    assert_eq!(
        resolver.read_dt_file("fstab/vendor/dev").as_deref(),
        Some("/dev/block/sda2")
    );
    assert!(resolver.is_dt_value_expected("compatible", "android,firmware"));
}

#[test]
fn cmdline_override_is_synthesis_target() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    let custom = dir.path().join("custom-dt");
    fs::write(
        &paths.cmdline,
        format!("{DT_DIR_OVERRIDE_KEY}={}\n", custom.display()),
    )
    .unwrap();
    acpi_node(&paths.acpi_default_root, "CFG0", "android.fw.mode=normal");

    assert_eq!(discover_android_dt_dir(&paths, false), custom);
    assert_eq!(fs::read_to_string(custom.join("mode")).unwrap(), "normal\n");
    assert!(!paths.alt_dt_dir.exists());
}

#[test]
fn acpi_root_from_cmdline_is_decoded() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    let node = dir.path().join("sys/bus/acpi/CFG0:00");
    let outside = dir.path().join("outside");
    fs::write(
        &paths.cmdline,
        format!("console=ttyS0 {ACPI_ROOT_KEY}={}\n", node.display()),
    )
    .unwrap();
    acpi_node(
        &node,
        "\\_SB_.CFG0\n",
        &format!(
            "android.fw.boot.slot=_a\nandroid.fw.x.{}=evil\n",
            outside.display()
        ),
    );
    assert!(!paths.acpi_default_root.exists());

    let alt = discover_android_dt_dir(&paths, false);
    assert_eq!(alt, paths.alt_dt_dir);
    assert_eq!(fs::read_to_string(alt.join("boot/slot")).unwrap(), "_a\n");

    let written = files_under(&alt);
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.starts_with(&alt)));
    assert!(!outside.exists());
}

#[test]
fn existing_candidate_skips_synthesis() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    fs::create_dir_all(&paths.alt_dt_dir).unwrap();
    acpi_node(&paths.acpi_default_root, "CFG0", "android.fw.mode=normal");

    assert_eq!(discover_android_dt_dir(&paths, false), paths.alt_dt_dir);
    assert!(files_under(&paths.alt_dt_dir).is_empty());
}

#[test]
fn foreign_acpi_node_creates_nothing() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    acpi_node(&paths.acpi_default_root, "\\_SB_.PCI0", "android.fw.mode=normal");

    assert_eq!(discover_android_dt_dir(&paths, false), paths.alt_dt_dir);
    assert!(!paths.alt_dt_dir.exists());
}

#[test]
fn write_failures_do_not_abort_discovery() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    acpi_node(
        &paths.acpi_default_root,
        "CFG0",
        "android.fw.a.b=1\nandroid.fw.a=2\nandroid.fw.c=3\n",
    );

    // `a` is first created as a directory, so writing the `a` leaf fails.
    assert_eq!(discover_android_dt_dir(&paths, false), paths.alt_dt_dir);
    assert_eq!(
        fs::read_to_string(paths.alt_dt_dir.join("a/b")).unwrap(),
        "1\n"
    );
    assert_eq!(fs::read_to_string(paths.alt_dt_dir.join("c")).unwrap(), "3\n");
}

#[test]
fn concurrent_first_calls_discover_once() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let paths = sandbox(dir.path());
    acpi_node(&paths.acpi_default_root, "CFG0", "android.fw.mode=normal");

    let resolver = Arc::new(DtDirResolver::new(paths.clone()));
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                resolver.get().to_path_buf()
            })
        })
        .collect();
    let results: Vec<PathBuf> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.iter().all(|p| *p == paths.alt_dt_dir));
    for _ in 0..3 {
        assert_eq!(resolver.get(), paths.alt_dt_dir.as_path());
    }
    assert_eq!(resolver.discovery_count(), 1);
}
