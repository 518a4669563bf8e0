use phf::phf_map;

use crate::extract::MemoryInfo;

/// Layouts for devices that the header export does not describe.
///
/// These are the combined device names the debugger reports for the
/// value line parts, which all share the 256 byte information memory at
/// `0x1000` split into four 64 byte segments.
static MANUAL_OVERRIDES: phf::Map<&'static str, MemoryInfo> = phf_map! {
    "F20x1_G2x0x_G2x1x" => MemoryInfo::new(0x1000, 0x100, 64),
    "F20x2_G2x2x_G2x3x" => MemoryInfo::new(0x1000, 0x100, 64),
    "MSP430G2xx2" => MemoryInfo::new(0x1000, 0x100, 64),
    "MSP430G2xx3" => MemoryInfo::new(0x1000, 0x100, 64),
};

/// Returns the manually maintained layout of `name`, if there is one.
pub fn manual_override(name: &str) -> Option<MemoryInfo> {
    MANUAL_OVERRIDES.get(name).copied()
}
