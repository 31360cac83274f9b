//! Build script for the pipeline PoC service
//!
//! Embeds version, git commit, build time and toolchain identifier at compile
//! time so `/health` can report what was deployed.
//! Priority for each value: CI env var → local probe → fallback.

use chrono::Utc;
use std::env;
use std::process::Command;

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
    println!("cargo:rerun-if-env-changed=APP_VERSION");
    println!("cargo:rerun-if-env-changed=GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_TIME");

    let version = non_empty_env("APP_VERSION")
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "1.0.0".to_string()));

    let git_commit = non_empty_env("GIT_COMMIT")
        .or_else(|| command_output("git", &["rev-parse", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    let build_time = non_empty_env("BUILD_TIME").unwrap_or_else(|| Utc::now().to_rfc3339());

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let runtime_version =
        command_output(&rustc, &["--version"]).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=APP_VERSION={}", version);
    println!("cargo:rustc-env=GIT_COMMIT={}", git_commit);
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    println!("cargo:rustc-env=RUNTIME_VERSION={}", runtime_version);
}
