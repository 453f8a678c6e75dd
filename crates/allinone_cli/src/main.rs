//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `allinone_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("allinone_core ping={}", allinone_core::ping());
    println!("allinone_core version={}", allinone_core::core_version());
}
