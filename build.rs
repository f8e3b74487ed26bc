fn main() {
    // Stamp the binary so startup logs identify the build
    let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_DATE={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
