use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // No rerun-if-changed hints: cargo reruns this on any package change,
    // so the id tracks the binary actually being served.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=MERGINGTON_BUILD_ID={}", build_id);
}
