use thiserror::Error;

/// Wire format errors.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid public key: {0}")]
    InvalidPubkey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid blockhash: {0}")]
    InvalidBlockhash(String),

    #[error("message compile error: {0}")]
    CompileError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("signature attach error: {0}")]
    AttachError(String),
}
