//! Guest MAC address allocation.

use crate::error::Result;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

const LOCALLY_ADMINISTERED: u8 = 0b0000_0010;
const MULTICAST: u8 = 0b0000_0001;

/// A 48-bit MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Wrap raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// The raw octets.
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Administratively assigned rather than drawn from a vendor block.
    pub fn is_local(&self) -> bool {
        self.0[0] & LOCALLY_ADMINISTERED != 0
    }

    /// Addresses a single interface.
    pub fn is_unicast(&self) -> bool {
        self.0[0] & MULTICAST == 0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Error parsing a colon separated MAC address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid MAC address: {0}")]
pub struct ParseMacError(String);

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(':');

        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(|| ParseMacError(s.to_string()))?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseMacError(s.to_string()));
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| ParseMacError(s.to_string()))?;
        }

        if parts.next().is_some() {
            return Err(ParseMacError(s.to_string()));
        }

        Ok(Self(octets))
    }
}

/// Generate a random locally-administered unicast MAC address.
///
/// # Errors
/// Returns [`Error::MacAllocation`](crate::Error::MacAllocation) if the OS
/// randomness source fails.
pub fn allocate() -> Result<MacAddress> {
    let mut octets = [0u8; 6];
    OsRng.try_fill_bytes(&mut octets)?;

    octets[0] = (octets[0] | LOCALLY_ADMINISTERED) & !MULTICAST;

    Ok(MacAddress(octets))
}
