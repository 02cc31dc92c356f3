//! Station identifier type.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid Light Rail station id.
///
/// The MTR open-data API keys stations by short decimal strings ("1",
/// "100", "920"). Ids are 1 to 4 ASCII digits with no leading zero;
/// this type guarantees that any `StationId` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use lrt_board::domain::StationId;
///
/// let siu_hong = StationId::parse("100").unwrap();
/// assert_eq!(siu_hong.as_str(), "100");
///
/// // Leading zeroes are rejected
/// assert!(StationId::parse("0100").is_err());
///
/// // Non-digits are rejected
/// assert!(StationId::parse("1a0").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationId {
    bytes: [u8; 4],
    len: u8,
}

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be 1 to 4 ASCII digits without a leading zero.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > 4 {
            return Err(InvalidStationId {
                reason: "must be 1 to 4 characters",
            });
        }

        for &b in raw {
            if !b.is_ascii_digit() {
                return Err(InvalidStationId {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        if raw[0] == b'0' {
            return Err(InvalidStationId {
                reason: "must not have a leading zero",
            });
        }

        let mut bytes = [0u8; 4];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(StationId {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII digits
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
