//! Build script for mhcheck.
//!
//! Embeds the git commit, build date and rustc version for `mhcheck version`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    if let Some(hash) = capture("git", &["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=MHCHECK_GIT_HASH={}", hash);
    }

    if let Some(date) = capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) {
        println!("cargo:rustc-env=MHCHECK_BUILD_DATE={}", date);
    }

    // "rustc 1.80.0 (051478957 2024-07-21)" -> "1.80.0"
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = capture(&rustc, &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_string))
    {
        println!("cargo:rustc-env=MHCHECK_RUSTC_VERSION={}", version);
    }
}

/// Run a command and return its trimmed stdout if it succeeded
fn capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
