//! Custom cargo commands for the searchbox crate.
//!
//! Usage:
//!   cargo xtask check          - Quick check (check + test + clippy, native and wasm)
//!   cargo xtask test           - Run all tests
//!   cargo xtask wasm           - Build the browser bundle with wasm-pack
//!   cargo xtask fuzz [TARGET]  - Run a fuzz target for 60 seconds
//!   cargo xtask bench          - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["query_parser", "snippet_window", "widget_input"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("wasm") => wasm()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check           Quick check (cargo check for both targets, test, clippy)
  test            Run all Rust tests
  wasm            Build pkg/ with wasm-pack (--target web, wasm feature)
  fuzz [TARGET]   Run one fuzz target for 60s, or each in turn
  bench           Run benchmarks
"#
    );
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check"])?;

    println!("[2/4] cargo check (wasm)...");
    run_cargo(&[
        "check",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
    ])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Build the browser bundle
fn wasm() -> Result<()> {
    let root = project_root()?;

    // wasm-opt is disabled in Cargo.toml metadata; see the note there
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--out-dir",
            "pkg",
            "--",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("\n✓ Browser bundle in {}", root.join("pkg").display());
    Ok(())
}

/// Run fuzz targets
fn fuzz(target: Option<&str>) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(name) if FUZZ_TARGETS.contains(&name) => vec![name],
        Some(name) => bail!("Unknown fuzz target {:?}; expected one of {:?}", name, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let fuzz_dir = project_root()?.join("fuzz");
    for target in targets {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

        if !status.success() {
            bail!("Fuzz target {} failed", target);
        }
    }

    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
