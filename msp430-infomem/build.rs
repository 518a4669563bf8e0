use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context;

const DEVICES: &str = "data/devices.txt";
const HEADERS: &str = "data/headers.csv";

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={DEVICES}");
    println!("cargo:rerun-if-changed={HEADERS}");

    let out_dir = env::var("OUT_DIR").context("OUT_DIR is not set")?;
    let dest_path = Path::new(&out_dir).join("infomem.rs");
    let file = File::create(&dest_path)
        .with_context(|| format!("Failed to create '{}'.", dest_path.display()))?;

    infomem_gen::generate(Path::new(DEVICES), Path::new(HEADERS), BufWriter::new(file))
        .context("Failed to generate the information memory table.")?;

    Ok(())
}
