//! Generator for the MSP430 information memory lookup table.
//!
//! The debugger reports a device name for every attached MSP430. To erase the
//! information memory of such a device without touching its calibration data,
//! the location of the information memory and its segment size have to be known.
//! This crate cross-references the list of device names with a CSV export of the
//! linker headers and renders a static `phf` map from device name to
//! `Option<(origin, length, sector_size)>`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! infomem_gen::generate(
//!     Path::new("devices.txt"),
//!     Path::new("headers.csv"),
//!     std::io::stdout().lock(),
//! )?;
//! # Ok::<(), infomem_gen::GenerateError>(())
//! ```

pub mod emit;
pub mod error;
pub mod extract;
pub mod headers;
pub mod names;
pub mod overrides;
pub mod reconcile;

use std::io::Write;
use std::path::Path;

pub use error::{ExtractError, GenerateError};
pub use extract::MemoryInfo;
pub use reconcile::InfomemTable;

/// Reads both inputs and builds the reconciled table.
pub fn build_table(names: &Path, headers: &Path) -> Result<InfomemTable, GenerateError> {
    let names = names::NameList::from_path(names)?;
    let records = headers::read_headers(headers)?;

    reconcile::reconcile(&names, &records)
}

/// Generates the lookup table source and writes it to `output`.
///
/// Nothing is written unless both inputs were read and every record of a known
/// device could be parsed.
pub fn generate(names: &Path, headers: &Path, mut output: impl Write) -> Result<(), GenerateError> {
    let table = build_table(names, headers)?;

    let mut rendered = Vec::new();
    emit::write_table(&mut rendered, &table).map_err(GenerateError::Write)?;

    output.write_all(&rendered).map_err(GenerateError::Write)?;
    output.flush().map_err(GenerateError::Write)
}
