use sol_wire::Pubkey;

/// The session's connection state.
///
/// Invariant: an address is carried if and only if the state is
/// `Connected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    /// No wallet connected. The resting state.
    Disconnected,
    /// A connection request is in flight.
    Connecting,
    /// Connected; the wallet's public key is the session address.
    Connected(Pubkey),
    /// The last explicit connect attempt hit an unexpected extension fault.
    /// Reads as not-connected everywhere; cleared by `disconnect` or a
    /// fresh `connect`.
    Failed(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected(_))
    }

    /// The connected address, if any.
    pub fn address(&self) -> Option<&Pubkey> {
        match self {
            WalletState::Connected(address) => Some(address),
            _ => None,
        }
    }
}
