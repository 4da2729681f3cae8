//! Custom cargo commands for the stdaux crate.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests at every assertion level
//!   cargo xtask check         - Quick check (baseline level only)
//!   cargo xtask bench         - Run benchmarks
//!   cargo xtask kani          - Run Kani proofs
//!   cargo xtask fuzz <target> - Run one fuzz target

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Assertion levels the suite must pass at, with the environment that selects
/// each one.
const LEVELS: &[(&str, &[(&str, &str)])] = &[
    ("0 (ndebug)", &[("STDAUX_NDEBUG", "1")]),
    ("1 (baseline)", &[]),
    ("2 (contracts)", &[("STDAUX_MORE_ASSERTS", "2")]),
];

const FUZZ_TARGETS: &[&str] = &["load_equivalence", "arith_reference"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify         Run full verification suite (markers + all levels + clippy + Kani)
  test           Run all Rust tests at assertion levels 0, 1 and 2
  check          Quick check (cargo test + clippy at the default level)
  bench          Run benchmarks
  kani           Run Kani proofs in kani-proofs/
  fuzz <target>  Run a fuzz target for 60s ({})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("stdaux Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests at every assertion level...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"], &[])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run the test suite once per assertion level.
fn test() -> Result<()> {
    for (name, envs) in LEVELS {
        println!("--- assertion level {} ---", name);
        run_cargo(&["test", "--quiet"], envs)?;
    }
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"], &[])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"], &[])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"], &[])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], &[])
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&dir)
        .status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(_) => bail!("Kani proofs failed"),
        Err(_) => {
            println!("  (cargo-kani not installed, skipping)");
            Ok(())
        }
    }
}

/// Run one fuzz target
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <{}>", FUZZ_TARGETS.join("|"));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}; expected one of {:?}", target, FUZZ_TARGETS);
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?.join("fuzz"))
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
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

fn run_cargo(args: &[&str], envs: &[(&str, &str)]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .env_remove("STDAUX_NDEBUG")
        .env_remove("STDAUX_MORE_ASSERTS")
        .envs(envs.iter().copied())
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 3 {
        bail!(
            "Expected at least 3 INVARIANT markers, found {}. Someone may have removed the compile-time checks!",
            count
        );
    }

    Ok(())
}
