use serde::Serialize;
use crate::{Error, Selector, Signature};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub signature: Signature,
    pub selector: Selector,
    pub matched: bool,
}

/// Compares the selector of `signature` against a `0x`-prefixed target, ignoring hex case.
pub fn matches(signature: &str, target: &str) -> Result<bool, Error> {
    let target: Selector = target.parse()?;
    Ok(Selector::of(signature) == target)
}

/// Computes one entry per signature, in input order. Without a target nothing is marked matched.
pub fn scan<I>(signatures: I, target: Option<Selector>) -> impl Iterator<Item = Entry>
where
    I: IntoIterator,
    I::Item: Into<Signature>,
{
    signatures.into_iter().map(move |signature| {
        let signature = signature.into();
        let selector = signature.selector();
        let matched = target.map_or(false, |target| target == selector);
        if matched {
            log::debug!("{} matches {}", signature, selector);
        }
        Entry { signature, selector, matched }
    })
}

/// Lazily yields the signatures whose selector equals `target`.
/// More than one may match: a four byte selector does not identify its signature uniquely.
pub fn matching<I>(signatures: I, target: Selector) -> impl Iterator<Item = Signature>
where
    I: IntoIterator,
    I::Item: Into<Signature>,
{
    signatures.into_iter()
        .map(Into::<Signature>::into)
        .filter(move |signature| signature.matches(&target))
}
