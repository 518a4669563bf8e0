//! Information memory layouts of MSP430 devices.
//!
//! The table is generated at build time by `infomem-gen` out of the device list
//! and header export in `data/`. It maps the device name reported by the debugger
//! to the origin, length and segment size of the device's information memory.
//!
//! ```
//! let infomem = msp430_infomem::lookup("MSP430G2553")?;
//! assert_eq!(infomem.origin, 0x1000);
//!
//! // Segment A holds the DCO calibration constants.
//! let erasable = infomem.without_calibration_segment();
//! assert_eq!(erasable.segrange_command(), "erase segrange 4096 192 64");
//! # Ok::<(), msp430_infomem::InfomemError>(())
//! ```
#![warn(missing_docs)]

use std::ops::Range;

use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/infomem.rs"));

/// The information memory of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoMem {
    /// Start address.
    pub origin: u16,
    /// Size in bytes.
    pub length: u16,
    /// Size of one erasable segment in bytes.
    pub sector_size: u16,
}

/// Errors raised when looking up a device.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InfomemError {
    /// The device name is not in the table.
    #[error("The device '{0}' is unknown.")]
    UnknownDevice(String),
    /// The device is known, but its information memory layout is not.
    #[error("No information memory layout is known for the device '{0}'.")]
    NoData(String),
}

impl InfoMem {
    /// The address range covered by the information memory.
    pub fn range(&self) -> Range<u32> {
        let start = u32::from(self.origin);
        start..start + u32::from(self.length)
    }

    /// Returns whether `address` lies inside the information memory.
    pub fn contains(&self, address: u64) -> bool {
        let range = self.range();
        (u64::from(range.start)..u64::from(range.end)).contains(&address)
    }

    /// Number of erasable segments.
    pub fn segment_count(&self) -> u16 {
        self.length.checked_div(self.sector_size).unwrap_or(0)
    }

    /// The same region without its last segment.
    ///
    /// The last segment (segment A) holds the factory calibration data.
    pub fn without_calibration_segment(&self) -> InfoMem {
        InfoMem {
            length: self.length.saturating_sub(self.sector_size),
            ..*self
        }
    }

    /// The debugger monitor command which erases this region segment by segment.
    pub fn segrange_command(&self) -> String {
        format!(
            "erase segrange {} {} {}",
            self.origin, self.length, self.sector_size
        )
    }
}

/// Looks up the information memory layout of `device`.
///
/// Device names are case sensitive.
pub fn lookup(device: &str) -> Result<InfoMem, InfomemError> {
    match INFOMEM_MAP.get(device) {
        Some(Some((origin, length, sector_size))) => Ok(InfoMem {
            origin: *origin,
            length: *length,
            sector_size: *sector_size,
        }),
        Some(None) => Err(InfomemError::NoData(device.to_owned())),
        None => Err(InfomemError::UnknownDevice(device.to_owned())),
    }
}

/// All device names in the table, sorted.
pub fn known_devices() -> Vec<&'static str> {
    let mut devices = INFOMEM_MAP.keys().copied().collect::<Vec<_>>();
    devices.sort_unstable();
    devices
}

/// Decides which part of the information memory has to be erased before
/// programming an image.
///
/// Returns `None` if none of the image's `section_addresses` lies inside the
/// information memory. Otherwise the region is returned without the
/// calibration segment.
pub fn erase_plan(
    device: &str,
    section_addresses: impl IntoIterator<Item = u64>,
) -> Result<Option<InfoMem>, InfomemError> {
    let infomem = lookup(device)?;

    match section_addresses
        .into_iter()
        .find(|address| infomem.contains(*address))
    {
        Some(address) => {
            tracing::debug!(
                "Section at {:#06x} lies in the information memory of {}.",
                address,
                device
            );
            Ok(Some(infomem.without_calibration_segment()))
        }
        None => Ok(None),
    }
}
