use std::env;
use std::process::Command;

fn rustc_version() -> Option<String> {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8(output.stdout).ok()?;
    let trimmed = version.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    if let Some(version) = rustc_version() {
        println!("cargo:rustc-env=ARCHIVE_DEMO_RUSTC_VERSION={version}");
    }
    if let Ok(target) = env::var("TARGET") {
        println!("cargo:rustc-env=ARCHIVE_DEMO_TARGET={target}");
    }
}
