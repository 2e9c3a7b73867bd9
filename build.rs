fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // ESP-IDF link arguments are only needed for the firmware image; host
    // test builds run without the toolchain.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
