//! Calls out to bindgen to regenerate the `nrf-sdc-sys` bindings from the Nordic header files.

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Regenerate nrf-sdc-sys bindings from an nrfxlib checkout")]
struct Args {
    /// Path to the sdk-nrfxlib checkout
    #[arg(long, default_value = "../sdk-nrfxlib")]
    nrfxlib: PathBuf,

    /// Header aggregating the vendor headers
    #[arg(long, default_value = "crates/nrf-sdc-sys/wrapper.h")]
    header: PathBuf,

    /// Output file
    #[arg(long, default_value = "crates/nrf-sdc-sys/src/bindings.rs")]
    out: PathBuf,

    /// CPU passed to clang as `-mcpu`
    #[arg(long, default_value = "cortex-m4")]
    cpu: String,

    /// Generate for the soft-float ABI
    #[arg(long)]
    soft_float: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let header = args
        .header
        .to_str()
        .context("header path is not valid UTF-8")?
        .to_owned();
    let nrfxlib = args.nrfxlib.display();
    let float_abi = if args.soft_float { "soft" } else { "hard" };

    let bindings = bindgen::Builder::default()
        .header(header)
        .clang_arg(format!("-I{nrfxlib}"))
        .clang_arg(format!("-I{nrfxlib}/softdevice_controller/include"))
        .clang_arg(format!("-I{nrfxlib}/mpsl/include"))
        .clang_arg("-DPPI_PRESENT")
        // Standard includes belong to the host
        .clang_arg("-nostdinc")
        .clang_arg("-target")
        .clang_arg("arm")
        .clang_arg(format!("-mcpu={}", args.cpu))
        .clang_arg(format!("-mfloat-abi={float_abi}"))
        .use_core()
        .ctypes_prefix("::core::ffi")
        .formatter(bindgen::Formatter::Rustfmt)
        .generate()
        .context("bindgen failed to process the vendor headers")?;

    let rust_source = munge_doxygen(&bindings.to_string())?;

    std::fs::write(&args.out, rust_source)
        .with_context(|| format!("couldn't write bindings to {}", args.out.display()))?;
    println!("wrote {}", args.out.display());
    Ok(())
}

/// Rewrites the Doxygen markup carried over into `#[doc]` attributes into something rustdoc
/// renders.
fn munge_doxygen(source: &str) -> Result<String> {
    let mut out = source.replace("#[doc = \"@{*/\"]", "");

    let rules: [(&str, &str); 6] = [
        ("\"   \\s+- ", "\" * "),
        (r"\s*@param\s+(?P<var>[A-Za-z0-9_]+)\s+", " * `${var}` - "),
        (
            r"\s*@param\[(out|in|inout|in,out)\](\\t|\s+)(?P<var>[A-Za-z0-9_]+)\s+",
            " * `${var}` - ",
        ),
        (r"@[cp]\s+(?P<var>[A-Za-z0-9_\(\)]+)", "`${var}`"),
        (r"\\\\[cp]\s+(?P<var>[A-Za-z0-9_\(\)]+)", "`${var}`"),
        (r"\\\\ref\s+(?P<var>[A-Za-z0-9_\(\)]+)", "`${var}`"),
    ];
    for (pattern, replacement) in rules {
        let re = Regex::new(pattern).with_context(|| format!("bad pattern {pattern}"))?;
        out = re.replace_all(&out, replacement).into_owned();
    }

    Ok(out
        .replace("\" @remark", "\" NB: ")
        .replace("\"@brief", "\"")
        .replace("\" @brief", "\" ")
        .replace("\"@details", "\"")
        .replace("\" @details", "\" ")
        .replace("@name ", "# ")
        .replace("@return ", "Returns ")
        .replace("@retval ", "Returns "))
}
