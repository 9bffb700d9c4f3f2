use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_executable(path: &PathBuf, content: &str) -> std::io::Result<()> {
    fs::write(path, content)?;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

// Answers `rev-parse --abbrev-ref HEAD` with `feature/<cwd name>`, except in
// directories named `detached`, where it fails like git outside a repo.
const FAKE_GIT: &str = r#"#!/usr/bin/env bash
set -euo pipefail

here="$(basename "$PWD")"
if [[ "$*" != "rev-parse --abbrev-ref HEAD" ]]; then
  echo "unexpected args: $*" >&2
  exit 2
fi
if [[ "$here" == "detached" ]]; then
  echo "fatal: not a git repository" >&2
  exit 128
fi
printf '  feature/%s\n' "$here"
"#;

struct Workspace {
    tmp: TempDir,
    fakebin: PathBuf,
}

impl Workspace {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        for name in ["mydir", "detached", "other"] {
            fs::create_dir_all(tmp.path().join(name))?;
        }
        let fakebin = tmp.path().join("fakebin");
        fs::create_dir_all(&fakebin)?;
        write_executable(&fakebin.join("git"), FAKE_GIT)?;
        Ok(Self { tmp, fakebin })
    }

    fn root(&self) -> &Path {
        self.tmp.path()
    }

    // PATH override so our fake git is used
    fn command(&self) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin("whichbranch")?;
        let new_path = format!(
            "{}:{}",
            self.fakebin.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", new_path).current_dir(self.root());
        Ok(cmd)
    }
}

#[test]
fn test01_reports_branch_of_mydir() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .assert()
        .success()
        .stdout("Git branch is 'feature/mydir'\n");
    Ok(())
}

#[test]
fn test02_dir_flag_overrides_default() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .arg("--dir")
        .arg(ws.root().join("other"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Git branch is 'feature/other'"));
    Ok(())
}

#[test]
fn test03_git_failure_prints_static_message() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .arg("--dir")
        .arg("detached")
        .assert()
        .failure()
        .stdout("Git rev-parse failed\n")
        .stdout(predicate::str::contains("fatal").not());
    Ok(())
}

#[test]
fn test04_missing_dir_takes_failure_path() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .arg("--dir")
        .arg("no-such-dir")
        .assert()
        .failure()
        .stdout("Git rev-parse failed\n");
    Ok(())
}

#[test]
fn test05_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .arg("--output")
        .arg("json")
        .assert()
        .success()
        .stdout("{\"status\":\"ok\",\"branch\":\"feature/mydir\"}\n");
    ws.command()?
        .args(["--output", "json", "--dir", "detached"])
        .assert()
        .failure()
        .stdout("{\"status\":\"failed\"}\n");
    Ok(())
}

#[test]
fn test06_config_file_selects_program() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    let config = ws.root().join("whichbranch.toml");
    fs::write(
        &config,
        format!(
            "program = \"{}\"\ndir = \"other\"\n",
            ws.fakebin.join("git").display()
        ),
    )?;

    // no PATH override: the configured absolute program path is used
    Command::cargo_bin("whichbranch")?
        .current_dir(ws.root())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("Git branch is 'feature/other'\n");
    Ok(())
}

#[test]
fn test07_invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    let config = ws.root().join("whichbranch.toml");
    fs::write(&config, "program = \"\"\n")?;

    ws.command()?
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid config: program must not be empty"));
    Ok(())
}

#[test]
fn test08_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new()?;
    ws.command()?
        .args(["--debug", "--dir", "detached"])
        .assert()
        .failure()
        .stdout("Git rev-parse failed\n")
        .stderr(predicate::str::contains("[debug] running git"))
        .stderr(predicate::str::contains("not a git repository"));
    Ok(())
}
