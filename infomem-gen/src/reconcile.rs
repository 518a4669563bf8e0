use std::collections::HashMap;

use crate::error::GenerateError;
use crate::extract::{extract_info, MemoryInfo};
use crate::headers::HeaderRecord;
use crate::names::NameList;
use crate::overrides::manual_override;

/// Every known device name, grouped by where its layout came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InfomemTable {
    /// Layouts extracted from the header export, in CSV order.
    pub from_headers: Vec<(String, MemoryInfo)>,
    /// Layouts taken from the manual override table, in name list order.
    pub from_overrides: Vec<(String, MemoryInfo)>,
    /// Names for which no layout is known, in name list order.
    pub unresolved: Vec<String>,
    /// Names of the header export that are not in the name list.
    ///
    /// Kept for diagnostics only, these never end up in the generated table.
    pub not_in_device_list: Vec<String>,
}

impl InfomemTable {
    /// Number of entries the generated table will contain.
    pub fn len(&self) -> usize {
        self.from_headers.len() + self.from_overrides.len() + self.unresolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cross-references the known device names with the header export.
///
/// Header data wins over a manual override, and a manual override wins over
/// the absence marker. Only records of known devices are parsed, so a broken
/// record of an unknown device does not abort the run.
pub fn reconcile(names: &NameList, records: &[HeaderRecord]) -> Result<InfomemTable, GenerateError> {
    let mut table = InfomemTable::default();
    let mut positions = HashMap::new();

    for record in records {
        if !names.contains(&record.name) {
            tracing::debug!("{} is not present in the device list.", record.name);
            table.not_in_device_list.push(record.name.clone());
            continue;
        }

        let info = extract_info(&record.origin, &record.length, &record.sectors).map_err(
            |source| GenerateError::Extract {
                source,
                name: record.name.clone(),
            },
        )?;

        // A repeated record replaces the values but keeps the first position.
        match positions.get(&record.name) {
            Some(&index) => table.from_headers[index] = (record.name.clone(), info),
            None => {
                positions.insert(record.name.clone(), table.from_headers.len());
                table.from_headers.push((record.name.clone(), info));
            }
        }
    }

    for name in names.iter() {
        if positions.contains_key(name) {
            continue;
        }

        match manual_override(name) {
            Some(info) => table.from_overrides.push((name.to_owned(), info)),
            None => table.unresolved.push(name.to_owned()),
        }
    }

    tracing::info!(
        "{} table entries: {} from headers, {} from manual overrides, {} without information memory data.",
        table.len(),
        table.from_headers.len(),
        table.from_overrides.len(),
        table.unresolved.len()
    );
    if table.is_empty() {
        tracing::warn!("The generated table has no entries.");
    }
    if !table.not_in_device_list.is_empty() {
        tracing::info!(
            "Ignored {} header record(s) of devices not in the device list.",
            table.not_in_device_list.len()
        );
    }

    Ok(table)
}
