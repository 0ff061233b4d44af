#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid input format: {0}")]
    InvalidInputFormat(String),

    #[error("signature is not valid utf-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unknown catalog: {0}")]
    UnknownCatalog(String),
}
