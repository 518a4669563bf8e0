//! Extraction of the information memory layout out of the textual header fields.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*ORIGIN\s*=\s*0[xX]([0-9A-Fa-f]*)").unwrap());
static LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*LENGTH\s*=\s*0[xX]([0-9A-Fa-f]*)").unwrap());
static SECTORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*SIZE\s*[0-9]*\s*AS\s*[0-9]*\s*([0-9]*)-BYTE\s*SEGMENTS").unwrap()
});

/// The location and segmentation of a device's information memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryInfo {
    /// Start address of the information memory.
    pub origin: u16,
    /// Size of the information memory in bytes.
    pub length: u16,
    /// Size of one erasable segment in bytes.
    pub sector_size: u16,
}

impl MemoryInfo {
    pub const fn new(origin: u16, length: u16, sector_size: u16) -> Self {
        Self {
            origin,
            length,
            sector_size,
        }
    }
}

/// The header fields that carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Origin,
    Length,
    Sectors,
}

impl Field {
    fn regex(self) -> &'static Regex {
        match self {
            Field::Origin => &ORIGIN_RE,
            Field::Length => &LENGTH_RE,
            Field::Sectors => &SECTORS_RE,
        }
    }

    fn radix(self) -> u32 {
        match self {
            Field::Origin | Field::Length => 16,
            Field::Sectors => 10,
        }
    }

    /// A human readable form of the accepted syntax, used in diagnostics.
    pub fn pattern(self) -> &'static str {
        match self {
            Field::Origin => "ORIGIN = 0x<hex>",
            Field::Length => "LENGTH = 0x<hex>",
            Field::Sectors => "SIZE <n> AS <m> <size>-BYTE SEGMENTS",
        }
    }

    /// Pulls the value out of `text`.
    ///
    /// The pattern is anchored at the start of the text, anything following
    /// the matched part is ignored. A match without digits is a mismatch.
    pub fn parse(self, text: &str) -> Result<u16, ExtractError> {
        let digits = self
            .regex()
            .captures(text)
            .and_then(|captures| captures.get(1))
            .filter(|digits| !digits.as_str().is_empty())
            .ok_or_else(|| ExtractError::Mismatch {
                field: self,
                text: text.to_owned(),
            })?;

        u16::from_str_radix(digits.as_str(), self.radix()).map_err(|_| ExtractError::OutOfRange {
            field: self,
            text: text.to_owned(),
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Origin => "origin",
            Field::Length => "length",
            Field::Sectors => "sectors",
        })
    }
}

/// Builds a [`MemoryInfo`] out of the origin, length and sectors fields of a header record.
pub fn extract_info(origin: &str, length: &str, sectors: &str) -> Result<MemoryInfo, ExtractError> {
    Ok(MemoryInfo {
        origin: Field::Origin.parse(origin)?,
        length: Field::Length.parse(length)?,
        sector_size: Field::Sectors.parse(sectors)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn extracts_all_three_fields() {
        let info = extract_info(
            "ORIGIN = 0x2000",
            "LENGTH = 0x1000",
            "SIZE 4096 AS 1 512-BYTE SEGMENTS",
        )
        .unwrap();

        assert_eq!(info, MemoryInfo::new(0x2000, 0x1000, 512));
    }

    #[test_case("ORIGIN = 0x1000" => 0x1000; "canonical")]
    #[test_case("ORIGIN=0X10c0" => 0x10C0; "upper prefix and no spaces")]
    #[test_case("   ORIGIN   =   0x1800   " => 0x1800; "padded")]
    #[test_case("ORIGIN = 0x1000 /* INFO */" => 0x1000; "trailing text")]
    fn origin(text: &str) -> u16 {
        Field::Origin.parse(text).unwrap()
    }

    #[test_case("SIZE 256 AS 4 64-BYTE SEGMENTS" => 64)]
    #[test_case("SIZE 512 AS 4 128-BYTE SEGMENTS" => 128)]
    #[test_case("SIZE256AS4 64-BYTE SEGMENTS" => 64; "collapsed spacing")]
    fn sector_size(text: &str) -> u16 {
        Field::Sectors.parse(text).unwrap()
    }

    #[test_case(Field::Origin, "LENGTH = 0x100"; "wrong keyword")]
    #[test_case(Field::Origin, "ORIGIN = 1000"; "missing prefix")]
    #[test_case(Field::Origin, "ORIGIN = 0x"; "missing digits")]
    #[test_case(Field::Length, "x LENGTH = 0x100"; "not at start")]
    #[test_case(Field::Sectors, "SIZE 256 AS 4 SEGMENTS"; "missing segment size")]
    #[test_case(Field::Sectors, "SIZE 256 AS 464-BYTE SEGMENTS"; "segment count fused with size")]
    #[test_case(Field::Sectors, "SIZE 256 AS 4 -BYTE SEGMENTS"; "empty segment size")]
    fn mismatch(field: Field, text: &str) {
        assert_eq!(
            field.parse(text),
            Err(ExtractError::Mismatch {
                field,
                text: text.to_owned()
            })
        );
    }

    #[test]
    fn value_wider_than_16_bits() {
        assert_eq!(
            Field::Length.parse("LENGTH = 0x10000"),
            Err(ExtractError::OutOfRange {
                field: Field::Length,
                text: "LENGTH = 0x10000".to_owned()
            })
        );
    }

    #[test]
    fn mismatch_names_the_field() {
        let error = extract_info("ORIGIN = 0x1000", "LENGTH 0x100", "SIZE 256 AS 4 64-BYTE SEGMENTS")
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "The length field 'LENGTH 0x100' does not match the expected pattern `LENGTH = 0x<hex>`."
        );
    }
}
