use crate::consts::UNKNOWN;

const RUSTC_VERSION: Option<&str> = option_env!("ARCHIVE_DEMO_RUSTC_VERSION");
const TARGET: Option<&str> = option_env!("ARCHIVE_DEMO_TARGET");

/// Identify the toolchain this binary was built with,
/// e.g. "rustc 1.88.0 (6b00bc388 2025-06-23) [x86_64-unknown-linux-gnu]"
pub(crate) fn runtime_version() -> String {
    format_version(RUSTC_VERSION, TARGET)
}

fn format_version(rustc: Option<&str>, target: Option<&str>) -> String {
    let rustc = rustc.map(str::trim).filter(|s| !s.is_empty());
    let target = target.map(str::trim).filter(|s| !s.is_empty());
    match (rustc, target) {
        (Some(rustc), Some(target)) => format!("{rustc} [{target}]"),
        (Some(rustc), None) => rustc.to_string(),
        (None, Some(target)) => format!("{UNKNOWN} [{target}]"),
        (None, None) => UNKNOWN.to_string(),
    }
}

/// Whether the build script managed to query the compiler
pub(crate) fn has_build_info() -> bool {
    RUSTC_VERSION.is_some()
}
