use crate::{Error, Selector, Signature};
use crate::scan::matching;

/// Return data of a reverted call. Custom errors encode as selector followed by ABI-encoded arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevertData {
    selector: Selector,
    payload: Vec<u8>,
}

impl RevertData {
    pub fn parse(data: &str) -> Result<Self, Error> {
        let digits = data.strip_prefix("0x")
            .or_else(|| data.strip_prefix("0X"))
            .unwrap_or(data);
        let bytes = hex::decode(digits)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 4 {
            Err(Error::InvalidInputFormat(format!("revert data has {} bytes, needs at least 4", bytes.len())))?
        }
        let (head, payload) = bytes.split_at(4);
        let mut selector = [0; 4];
        selector.copy_from_slice(head);
        Ok(Self {
            selector: selector.into(),
            payload: payload.to_vec(),
        })
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn payload(&self) -> &[u8] {
        self.payload.as_slice()
    }

    /// Candidates whose selector equals the revert selector.
    pub fn identify<I>(&self, signatures: I) -> impl Iterator<Item = Signature>
    where
        I: IntoIterator,
        I::Item: Into<Signature>,
    {
        matching(signatures, self.selector)
    }
}
