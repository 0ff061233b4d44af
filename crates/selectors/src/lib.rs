extern crate hex;
extern crate log;
extern crate serde;
extern crate tiny_keccak;
#[macro_use]
extern crate thiserror;

pub use catalog::Catalog;
pub use error::Error;
pub use revert::RevertData;
pub use scan::{matches, matching, scan, Entry};
pub use selector::{compute_selector, Selector};
pub use signature::{parse_signature_list, Signature};

pub mod catalog;
pub mod revert;
mod error;
mod scan;
mod selector;
mod signature;
