use std::fmt;
use serde::Serialize;
use crate::{Error, Selector};

/// A function or error declaration such as `Transfer(address,uint256)`.
/// The text is hashed verbatim, so whitespace and type aliases are significant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn new(signature: impl Into<String>) -> Self {
        Self(signature.into())
    }

    pub fn from_parts(name: &str, types: &[&str]) -> Self {
        Self(format!("{}({})", name, types.join(",")))
    }

    pub fn from_utf8(bytes: Vec<u8>) -> Result<Self, Error> {
        let signature = String::from_utf8(bytes)?;
        Ok(Self(signature))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn selector(&self) -> Selector {
        Selector::of(self.as_str())
    }

    pub fn matches(&self, target: &Selector) -> bool {
        self.selector() == *target
    }
}

impl From<&str> for Signature {
    fn from(signature: &str) -> Self {
        Self::new(signature)
    }
}

impl From<String> for Signature {
    fn from(signature: String) -> Self {
        Self(signature)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One signature per line. Blank lines and lines starting with `#` are skipped.
pub fn parse_signature_list(text: &str) -> Vec<Signature> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Signature::from)
        .collect()
}
