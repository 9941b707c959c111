//! Build script for ledbar-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates ledbar.ini at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ledbar_core::config::{parse_config, ParseError};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate ledbar.ini with the same parser the firmware uses
fn validate_config() {
    println!("cargo:rerun-if-changed=ledbar.ini");

    let config_path = Path::new("ledbar.ini");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: ledbar.ini not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds ledbar.ini as its default settings.         ║\n\
            ║  Please create one in the ledbar-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read ledbar.ini                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    if let Err(e) = parse_config(&content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid setting in ledbar.ini                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  {:<64} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    println!("cargo:warning=ledbar.ini validated successfully");
}

fn describe(error: ParseError) -> &'static str {
    match error {
        ParseError::InvalidColor => "fg/bg must be three comma-separated values 0-255",
        ParseError::InvalidNumber => "dt and wait must be whole numbers",
        ParseError::InvalidPower => "power must be a non-negative number",
    }
}
