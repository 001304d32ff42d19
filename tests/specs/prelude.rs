//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

/// The binary lives in the `formflow` member; build it once when a plain
/// `cargo test` from the workspace root has not produced it yet.
fn formflow_binary() -> Command {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        if assert_cmd::cargo::cargo_bin("formflow").exists() {
            return;
        }
        let status = std::process::Command::new(env!("CARGO"))
            .args(["build", "--quiet", "-p", "formflow", "--bin", "formflow"])
            .status()
            .unwrap();
        assert!(status.success(), "building formflow failed");
    });
    Command::cargo_bin("formflow").unwrap()
}

/// A scratch working directory for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// The formflow binary, run from this project with logging silenced
    pub fn formflow(&self) -> Cli {
        let mut cmd = formflow_binary();
        cmd.current_dir(self.path()).env("RUST_LOG", "off");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    /// The underlying command, for `assert_cmd` assertions
    pub fn into_command(self) -> Command {
        self.cmd
    }

    /// Kill the process if it runs longer than `limit`
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.cmd.timeout(limit);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit status 0
    pub fn passes(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        Output::from(output)
    }

    /// Run and require a non-zero exit status
    pub fn fails(mut self) -> Output {
        let output = self.cmd.output().unwrap();
        assert!(
            !output.status.success(),
            "expected failure\nstdout: {}",
            String::from_utf8_lossy(&output.stdout),
        );
        Output::from(output)
    }
}

pub struct Output {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Output {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }

    pub fn code_is(self, code: i32) -> Self {
        assert_eq!(self.code, Some(code));
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Booking fields that pass validation for any date in the window
pub fn booking_args(date: &str) -> Vec<String> {
    [
        "first_name=Jane",
        "last_name=Doe",
        "email=jane@example.com",
        "phone=555-123-4567",
        "vehicle_year=2019",
        "vehicle_make=Honda",
        "vehicle_model=Civic",
        "service=remote_start",
        "time_slot=9:00 AM",
    ]
    .iter()
    .flat_map(|kv| ["--field".to_string(), kv.to_string()])
    .chain(["--field".to_string(), format!("date={date}")])
    .collect()
}

/// First bookable date under the default rules (tomorrow, skipping Sunday)
pub fn next_open_date() -> String {
    use chrono::{Datelike, Days, Utc, Weekday};

    let mut date = Utc::now().date_naive() + Days::new(1);
    if date.weekday() == Weekday::Sun {
        date = date + Days::new(1);
    }
    date.format("%Y-%m-%d").to_string()
}

/// URL of a local endpoint that accepts connections and never answers
pub fn unresponsive_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/hook", listener.local_addr().unwrap());
    std::thread::spawn(move || {
        let held: Vec<TcpStream> = listener.incoming().map_while(Result::ok).collect();
        drop(held);
    });
    url
}
