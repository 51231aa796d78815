//! End-to-end tests of the `brewc` binary and its `run` entry point.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::fs;
use std::path::PathBuf;
use std::process::Command as Process;

use brewc::{run, Command, DriverConfig};
use pretty_assertions::assert_eq;

const SUM_TASK: &str = "\
import java.util.concurrent.RecursiveTask;

class SumTask extends RecursiveTask<Integer> {
    private final int[] data;

    SumTask(int[] data) {
        this.data = data;
    }

    @Override
    protected Integer compute() {
        int sum = 0;
        for (int d : data) {
            sum += d;
        }
        return sum;
    }
}
";

fn config(command: Command) -> DriverConfig {
    DriverConfig {
        command,
        colors: false,
        parallel: true,
        verbose: true,
    }
}

fn run_to_string(config: &DriverConfig) -> (String, bool) {
    let mut out = Vec::new();
    let had_errors = run(config, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), had_errors)
}

fn brewc() -> Process {
    Process::new(env!("CARGO_BIN_EXE_brewc"))
}

#[test]
fn check_directory_summary() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("SumTask.java"), SUM_TASK).unwrap();
    fs::create_dir(dir.path().join("util")).unwrap();
    fs::write(dir.path().join("util/Empty.java"), "class Empty {}").unwrap();

    let (out, had_errors) =
        run_to_string(&config(Command::Check(vec![dir.path().to_path_buf()])));
    assert!(!had_errors);
    assert!(out.ends_with("Checked 2 files: 0 errors, 0 warnings\n"), "{out}");
    assert_eq!(out.lines().filter(|l| l.starts_with("ok ")).count(), 2);
}

#[test]
fn parse_summary_of_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SumTask.java");
    fs::write(&path, SUM_TASK).unwrap();

    let (out, had_errors) = run_to_string(&config(Command::Parse(path)));
    assert!(!had_errors);
    assert!(out.contains("  Errors: 0\n"), "{out}");
    assert!(out.contains("  class SumTask (3 members)\n"), "{out}");
}

#[test]
fn missing_file_is_a_driver_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing: PathBuf = dir.path().join("Missing.java");
    let err = run(&config(Command::Tree(missing)), &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("cannot find file"), "{err}");
}

#[test]
fn binary_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("Good.java");
    let bad = dir.path().join("Bad.java");
    fs::write(&good, SUM_TASK).unwrap();
    fs::write(&bad, "class Bad { void m() { int x = ; } }").unwrap();

    let ok = brewc().arg("check").arg(&good).output().unwrap();
    assert!(ok.status.success());

    let failed = brewc()
        .args(["check", "--no-color"])
        .arg(&bad)
        .output()
        .unwrap();
    assert_eq!(failed.status.code(), Some(1));
    let stderr = String::from_utf8(failed.stderr).unwrap();
    assert!(stderr.contains(":1:32: error[E1002]: "), "{stderr}");
}

#[test]
fn binary_usage_errors() {
    let unknown = brewc().arg("frobnicate").output().unwrap();
    assert_eq!(unknown.status.code(), Some(1));
    let stderr = String::from_utf8(unknown.stderr).unwrap();
    assert!(stderr.starts_with("Unknown command: frobnicate\n"), "{stderr}");
    assert!(stderr.contains("Usage: brewc <command> [options]"), "{stderr}");

    let help = brewc().arg("--help").output().unwrap();
    assert!(help.status.success());
    assert!(String::from_utf8(help.stdout).unwrap().contains("check <path>..."));
}
