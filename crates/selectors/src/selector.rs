use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Serializer};
use tiny_keccak::{Hasher, Keccak};
use crate::Error;

/// First four bytes of the Keccak-256 digest of a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Hashes the UTF-8 bytes of `signature` as given. No canonicalization is applied.
    pub fn of(signature: &str) -> Self {
        let mut output = [0; 4];
        {
            let mut hasher = Keccak::v256();
            hasher.update(signature.as_bytes());
            hasher.finalize(&mut output);
        }
        log::trace!("{} -> 0x{}", signature, hex::encode(output));
        Self(output)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Selector {
    type Err = Error;

    /// Accepts `0x` or `0X` followed by exactly eight hex digits of either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| Error::InvalidInputFormat(format!("selector {:?} must start with 0x", s)))?;

        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            Err(Error::InvalidInputFormat(format!("selector {:?} must have exactly 8 hex digits", s)))?
        }

        let mut bytes = [0; 4];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Selector of `signature` as a `0x`-prefixed, lowercase, 10 character string.
pub fn compute_selector(signature: &str) -> String {
    Selector::of(signature).to_string()
}
