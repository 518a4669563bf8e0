use std::io::Write;

use crate::extract::MemoryInfo;
use crate::reconcile::InfomemTable;

const PREAMBLE: &str = "use phf::{phf_map, Map};

/* Autogenerated by infomem-gen. */
pub(crate) static INFOMEM_MAP: Map<&'static str, Option<(u16, u16, u16)>> = phf_map! {";

/// Writes `table` as a `phf_map!` literal named `INFOMEM_MAP`.
///
/// The entries are grouped by the source of their layout. Empty names are skipped.
pub fn write_table(mut output: impl Write, table: &InfomemTable) -> std::io::Result<()> {
    writeln!(output, "{PREAMBLE}")?;

    writeln!(output, "/* Autogenerated from headers. */")?;
    for (name, info) in &table.from_headers {
        write_entry(&mut output, name, Some(info))?;
    }

    writeln!(output, "/* Manual override given. */")?;
    for (name, info) in &table.from_overrides {
        write_entry(&mut output, name, Some(info))?;
    }

    writeln!(
        output,
        "/* Could not be extracted from headers (and no manual override given). */"
    )?;
    for name in &table.unresolved {
        write_entry(&mut output, name, None)?;
    }

    writeln!(output, "}};")?;

    Ok(())
}

fn write_entry(
    mut output: impl Write,
    name: &str,
    info: Option<&MemoryInfo>,
) -> std::io::Result<()> {
    if name.is_empty() {
        return Ok(());
    }

    // `{:?}` produces an escaped Rust string literal.
    match info {
        Some(info) => writeln!(
            output,
            "{name:?} => Some((0x{:X}, 0x{:X}, {})),",
            info.origin, info.length, info.sector_size
        ),
        None => writeln!(output, "{name:?} => None,"),
    }
}
