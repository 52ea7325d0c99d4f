//! The compiled binary: `.env` loading and fatal configuration errors.

use std::path::Path;
use std::process::{Command, Output};

const VARS: [&str; 5] = [
    "VERCEL_API_URL",
    "API_SECRET_KEY",
    "ORBIT_REMINDERS_LIST",
    "SYNC_INTERVAL_MINUTES",
    "RUST_LOG",
];

/// Run the binary in `dir` with none of the bridge variables inherited.
fn run_in(dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_orbit-reminders-bridge"));
    cmd.current_dir(dir).env("NO_COLOR", "1");
    for var in VARS {
        cmd.env_remove(var);
    }
    cmd.output().unwrap()
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn dotenv_file_is_loaded_before_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "VERCEL_API_URL=not-a-url\nAPI_SECRET_KEY=x\n",
    )
    .unwrap();

    let output = run_in(dir.path());
    let logs = combined(&output);

    assert!(!output.status.success());
    assert!(logs.contains("VERCEL_API_URL is invalid"), "{logs}");
}

#[test]
fn missing_configuration_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path());
    let logs = combined(&output);

    assert!(!output.status.success());
    assert!(
        logs.contains("VERCEL_API_URL environment variable is required"),
        "{logs}"
    );
}
