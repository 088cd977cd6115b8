use thiserror::Error;

use sol_wire::WireError;

/// Faults surfaced by session operations.
///
/// `ProviderAbsent` and `UserRejected` are meant for a blocking user-facing
/// notice; the rest are reported to the operator log channel and shown as a
/// generic failure. None of them tears the session down: the state after
/// any error is `Disconnected`, `Failed`, or an unchanged `Connected`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("wallet extension is not installed")]
    ProviderAbsent,

    #[error("connection request was rejected")]
    UserRejected,

    #[error("no wallet is connected")]
    NotConnected,

    #[error("wallet provider fault: {0}")]
    ProviderFault(String),

    #[error("transaction build failed: {0}")]
    TransactionBuild(#[from] WireError),

    #[error("transaction signing failed: {0}")]
    SigningFailed(String),

    #[error("transaction submission failed: {0}")]
    SubmissionFailed(String),

    #[error("transaction confirmation failed: {0}")]
    ConfirmationFailed(String),
}
