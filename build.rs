use std::env;

fn main() {
    // Version string shown by --version; release builds can pin it via the environment
    let version = env::var("WIX_IMAGE_DL_BUILD_VERSION")
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap_or_default());
    println!("cargo:rustc-env=WIX_IMAGE_DL_VERSION={}", version);

    println!("cargo:rerun-if-env-changed=WIX_IMAGE_DL_BUILD_VERSION");
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=Cargo.toml");
}
