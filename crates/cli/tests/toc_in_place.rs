use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ATTRIBUTION: &str =
    "<!-- Table of contents is made with https://github.com/evgeniy-khist/markdown-toc -->";

const INPUT: &str = "# Title\n\n## A\n\nText.\n\n## B\n";

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn mdtoc(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdtoc"));
    cmd.env("XDG_CONFIG_HOME", home).env_remove("RUST_LOG");
    cmd.args(["--line-ending", "lf"]);
    cmd
}

#[test]
fn in_place_rewrites_file_and_prints_nothing() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, INPUT);

    mdtoc(tmp.path()).arg("-i").arg(&doc).assert().success().stdout("");

    let updated = fs::read_to_string(&doc).unwrap();
    assert!(updated.starts_with("# Title\n\n- [A](#0-1)\n- [B](#0-2)\n"));
    assert!(updated.contains("## <a id=\"0-2\"></a>B"));
}

#[test]
fn suffix_backs_up_and_implies_in_place() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, INPUT);

    mdtoc(tmp.path()).args(["-s", "orig"]).arg(&doc).assert().success().stdout("");

    assert_eq!(fs::read_to_string(tmp.path().join("doc.md.orig")).unwrap(), INPUT);
    assert!(fs::read_to_string(&doc).unwrap().contains("- [A](#0-1)"));
}

#[test]
fn repeated_runs_are_stable() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, INPUT);

    mdtoc(tmp.path()).arg("-i").arg(&doc).assert().success();
    let first = fs::read_to_string(&doc).unwrap();
    mdtoc(tmp.path()).arg("-i").arg(&doc).assert().success();

    assert_eq!(fs::read_to_string(&doc).unwrap(), first);
}

#[test]
fn toggling_attribution_leaves_no_stray_lines() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, INPUT);

    mdtoc(tmp.path()).arg("-i").arg(&doc).assert().success();
    let with = fs::read_to_string(&doc).unwrap();
    assert_eq!(with.matches(ATTRIBUTION).count(), 1);

    mdtoc(tmp.path()).args(["-i", "-n"]).arg(&doc).assert().success();
    let without = fs::read_to_string(&doc).unwrap();
    assert_eq!(
        without,
        "# Title\n\n- [A](#0-1)\n- [B](#0-2)\n\n## <a id=\"0-1\"></a>A\n\nText.\n\n## <a id=\"0-2\"></a>B\n"
    );

    mdtoc(tmp.path()).arg("-i").arg(&doc).assert().success();
    assert_eq!(fs::read_to_string(&doc).unwrap(), with);
}

#[test]
fn require_headings_leaves_file_untouched() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("plain.md");
    write_file(&doc, "plain\n");

    mdtoc(tmp.path())
        .args(["-s", "orig", "--require-headings"])
        .arg(&doc)
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&doc).unwrap(), "plain\n");
    assert!(!tmp.path().join("plain.md.orig").exists());
}
