//! Links the prebuilt SoftDevice Controller and MPSL archives from an nrfxlib checkout.
//!
//! The checkout is located through `NRFXLIB_PATH`. Without it nothing is linked, which keeps
//! host builds (docs, layout tests) working.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-env-changed=NRFXLIB_PATH");
    println!("cargo:rerun-if-changed=wrapper.h");

    let Some(nrfxlib) = env::var_os("NRFXLIB_PATH").map(PathBuf::from) else {
        return;
    };

    let target = env::var("TARGET").expect("TARGET is set by cargo");
    let Some(flavour) = lib_flavour(&target) else {
        println!("cargo:warning=no vendor archives for target {target}, skipping link");
        return;
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    let controller = nrfxlib
        .join("softdevice_controller/lib")
        .join(flavour)
        .join(format!("libsoftdevice_controller_{}.a", controller_variant()));
    prepare_archive(&controller, &out_dir.join("libsoftdevice_controller.a"));

    let mpsl = nrfxlib.join("mpsl/lib").join(flavour).join("libmpsl.a");
    prepare_archive(&mpsl, &out_dir.join("libmpsl.a"));

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-lib=static=softdevice_controller");
    println!("cargo:rustc-link-lib=static=mpsl");
}

/// Maps a Rust target triple to the nrfxlib `<cpu>/<float-abi>` library directory.
fn lib_flavour(target: &str) -> Option<&'static str> {
    match target {
        "thumbv7em-none-eabihf" => Some("cortex-m4/hard-float"),
        "thumbv7em-none-eabi" => Some("cortex-m4/soft-float"),
        "thumbv8m.main-none-eabihf" => Some("cortex-m33/hard-float"),
        "thumbv8m.main-none-eabi" => Some("cortex-m33/soft-float"),
        _ => None,
    }
}

fn controller_variant() -> &'static str {
    if env::var_os("CARGO_FEATURE_MULTIROLE").is_some() {
        "multirole"
    } else if env::var_os("CARGO_FEATURE_CENTRAL").is_some() {
        "central"
    } else if env::var_os("CARGO_FEATURE_PERIPHERAL").is_some() {
        "peripheral"
    } else {
        "multirole"
    }
}

/// The vendor archives ship with compressed debug sections, which rustc's linker cannot read.
/// Depending on the selected feature they are decompressed, stripped, or copied unchanged.
fn prepare_archive(src: &Path, dst: &Path) {
    println!("cargo:rerun-if-changed={}", src.display());

    #[cfg(feature = "arm-none-eabi-objcopy")]
    {
        run_objcopy(
            PathBuf::from("arm-none-eabi-objcopy"),
            "--decompress-debug-sections",
            src,
            dst,
        );
        return;
    }

    #[cfg(all(feature = "llvm-objcopy", not(feature = "arm-none-eabi-objcopy")))]
    {
        let tool_error = "Could not find `llvm-objcopy`. Install it with `rustup component add llvm-tools` \
                          or select the `arm-none-eabi-objcopy` feature.";
        let path = llvm_tools::LlvmTools::new()
            .expect(tool_error)
            .tool(&llvm_tools::exe("llvm-objcopy"))
            .expect(tool_error);
        run_objcopy(path, "--strip-debug", src, dst);
        return;
    }

    #[allow(unreachable_code)]
    {
        std::fs::copy(src, dst)
            .unwrap_or_else(|e| panic!("failed to copy {} to {}: {e}", src.display(), dst.display()));
    }
}

#[cfg(any(feature = "arm-none-eabi-objcopy", feature = "llvm-objcopy"))]
fn run_objcopy(tool: PathBuf, flag: &str, src: &Path, dst: &Path) {
    let status = std::process::Command::new(&tool)
        .arg(flag)
        .arg(src)
        .arg(dst)
        .status()
        .unwrap_or_else(|e| panic!("could not start `{}`: {e}", tool.display()));
    if !status.success() {
        panic!("`{}` failed on {}", tool.display(), src.display());
    }
}
