//! Built-in candidate lists of custom errors.

use crate::{Error, Selector, Signature};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    pub name: &'static str,
    signatures: &'static [&'static str],
    target: Option<[u8; 4]>,
}

pub const FEEDBACK: Catalog = Catalog {
    name: "feedback",
    signatures: &[
        "AgentNotFound()",
        "SameAgent()",
        "UnauthorizedFeedback()",
        "FeedbackAlreadyAuthorized()",
        "FeedbackNotAuthorized()",
        "InvalidScore()",
        "FeedbackAlreadySubmitted()",
        "FeedbackNotFound()",
        "UnauthorizedSender()",
    ],
    target: Some([0x7b, 0x22, 0x17, 0x99]),
};

pub const VALIDATION: Catalog = Catalog {
    name: "validation",
    signatures: &[
        "DataHashNotAllowed()",
        "DataNotAllowed()",
        "HashNotApproved()",
        "UnauthorizedDataHash()",
        "DataHashNotApproved()",
        "NotAllowedDataHash()",
        "InvalidDataRequest()",
        "RequireDataHashApproval()",
        "DataHashNotAuthorized()",
    ],
    target: Some([0xbe, 0xab, 0x6e, 0x29]),
};

/// Errors the compiler emits for `require`/`revert` with a reason and for panics.
pub const STANDARD: Catalog = Catalog {
    name: "standard",
    signatures: &["Error(string)", "Panic(uint256)"],
    target: None,
};

pub const ALL: &[Catalog] = &[FEEDBACK, VALIDATION, STANDARD];

impl Catalog {
    pub fn get(name: &str) -> Result<Catalog, Error> {
        ALL.iter()
            .find(|catalog| catalog.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| Error::UnknownCatalog(name.to_string()))
    }

    pub fn signatures(&self) -> impl Iterator<Item = Signature> {
        self.signatures.iter().copied().map(Signature::from)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// The selector this list was collected to explain, if any.
    pub fn target(&self) -> Option<Selector> {
        self.target.map(Selector::from)
    }
}
