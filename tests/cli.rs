//! End-to-end CLI tests over a temporary project tree.

use std::fs;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn curator(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("curator").unwrap();
    cmd.args(["--root", temp.path().to_str().unwrap()]);
    cmd
}

const INDEX: &str = r#"[
    {"id": "react-patterns", "name": "React Patterns", "category": "frontend", "description": "Component patterns for React"},
    {"id": "prisma-expert", "description": "Prisma ORM schemas and migrations"},
    {"id": "wordpress-theme-builder", "description": "Build WordPress themes"},
    {"id": "quantum-basket-weaving", "description": "entirely unrelated"}
]"#;

#[test]
fn analyze_writes_report_and_prints_summary() {
    let temp = TempDir::new().unwrap();
    temp.child(".agent/skills_index.json").write_str(INDEX).unwrap();

    curator(&temp)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("SKILLS ANALYSIS SUMMARY"))
        .stdout(predicate::str::contains("Total: 4 skills"));

    let report = temp.child(".skills-config/skills_analysis.json");
    report.assert(predicate::path::is_file());
    report.assert(predicate::str::contains("react-patterns"));
    report.assert(predicate::str::contains("wordpress"));
}

#[test]
fn analyze_honors_overrides() {
    let temp = TempDir::new().unwrap();
    temp.child("elsewhere/index.json").write_str(INDEX).unwrap();

    curator(&temp)
        .args(["analyze", "--index"])
        .arg(temp.child("elsewhere/index.json").path())
        .arg("--out")
        .arg(temp.child("out/report.json").path())
        .assert()
        .success();

    temp.child("out/report.json").assert(predicate::path::is_file());
}

#[test]
fn analyze_fails_without_index() {
    let temp = TempDir::new().unwrap();

    curator(&temp)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read skill index"));
}

#[test]
fn migrate_copies_mapped_and_reports_unmapped() {
    let temp = TempDir::new().unwrap();
    temp.child(".agent/skills/react-patterns/SKILL.md")
        .write_str("# react")
        .unwrap();
    temp.child(".agent/skills/some-unknown-thing/SKILL.md")
        .write_str("# ?")
        .unwrap();

    curator(&temp)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated: react-patterns → frontend/react/"))
        .stdout(predicate::str::contains("some-unknown-thing"));

    temp.child("skills/frontend/react/react-patterns/SKILL.md")
        .assert(predicate::path::is_file());
    // Unmapped skills are left where they were.
    temp.child(".agent/skills/some-unknown-thing/SKILL.md")
        .assert(predicate::path::is_file());
}

#[test]
fn migrate_fails_without_source_tree() {
    let temp = TempDir::new().unwrap();

    curator(&temp)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source directory not found"));
}

#[test]
fn link_creates_symlinks_and_is_idempotent() {
    let temp = TempDir::new().unwrap();
    temp.child("skills").create_dir_all().unwrap();
    temp.child(".claude").create_dir_all().unwrap();
    temp.child(".cursor").create_dir_all().unwrap();

    curator(&temp)
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created symlink"));

    let link = temp.child(".claude/skills");
    assert!(link.path().is_symlink());
    let first = fs::read_link(link.path()).unwrap();

    // Second run replaces the symlink with an identical one.
    curator(&temp).arg("link").assert().success();
    assert_eq!(fs::read_link(link.path()).unwrap(), first);
}

#[test]
fn link_refuses_real_directories() {
    let temp = TempDir::new().unwrap();
    temp.child("skills").create_dir_all().unwrap();
    temp.child(".claude/skills/precious.md").write_str("keep me").unwrap();

    curator(&temp)
        .arg("link")
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot replace"));

    temp.child(".claude/skills/precious.md")
        .assert(predicate::path::is_file());
}

#[test]
fn adopt_replaces_directories_with_symlinks() {
    let temp = TempDir::new().unwrap();
    temp.child("skills").create_dir_all().unwrap();
    temp.child(".claude/skills/stale.md").write_str("old copy").unwrap();

    curator(&temp)
        .arg("adopt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced directory with symlink"));

    assert!(temp.child(".claude/skills").path().is_symlink());
}

#[test]
fn status_reports_link_state() {
    let temp = TempDir::new().unwrap();
    temp.child("skills").create_dir_all().unwrap();
    temp.child(".claude").create_dir_all().unwrap();
    temp.child(".agent/skills/leftover.md").write_str("x").unwrap();

    curator(&temp).arg("link").assert().success();

    curator(&temp)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skills root:"))
        .stdout(predicate::str::contains("is a directory (not a symlink)"));
}

#[test]
fn config_file_changes_tool_dirs() {
    let temp = TempDir::new().unwrap();
    temp.child("skills").create_dir_all().unwrap();
    temp.child("backend/.claude").create_dir_all().unwrap();
    temp.child(".skills-config/curator.yaml")
        .write_str("tool_dirs:\n  - backend/.claude\n")
        .unwrap();

    curator(&temp).arg("link").assert().success();

    let link = temp.child("backend/.claude/skills");
    assert!(link.path().is_symlink());
    assert_eq!(
        fs::read_link(link.path()).unwrap(),
        std::path::PathBuf::from("../../skills")
    );
}
