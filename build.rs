fn main() {
    // Stamp the build time; the footer derives its copyright year from it
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // relay settings are baked in with option_env!
    println!("cargo:rerun-if-env-changed=CONTACT_RELAY_ENDPOINT");
    println!("cargo:rerun-if-env-changed=CONTACT_RELAY_KEY");

    let key_set = std::env::var("CONTACT_RELAY_KEY").is_ok_and(|k| !k.trim().is_empty());
    if !key_set {
        println!(
            "cargo:warning=CONTACT_RELAY_KEY is not set; the contact form will reject every submission"
        );
    }
}
