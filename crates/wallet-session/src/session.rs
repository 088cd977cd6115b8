//! The wallet session state machine.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::SessionConfig;
use crate::contract::TransactionRequest;
use crate::error::SessionError;
use crate::ledger::{Commitment, LedgerConnector};
use crate::provider::{ProviderError, WalletProvider};
use crate::state::WalletState;
use sol_wire::{Pubkey, Signature, Transaction};

/// A client-side wallet connection session.
///
/// Owns the in-memory [`WalletState`] exclusively; every transition happens
/// inside the handlers below. State-mutating operations take `&mut self`,
/// so overlapping connect attempts cannot be expressed.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    config: SessionConfig,
    state: WalletState,
    loading: bool,
}

impl WalletSession {
    /// A fresh session. `provider` is whatever the host page found injected
    /// (`None` when no extension is installed). The loading flag starts set
    /// and resolves with the first [`silent_reconnect`](Self::silent_reconnect).
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, config: SessionConfig) -> Self {
        WalletSession {
            provider,
            config,
            state: WalletState::Disconnected,
            loading: true,
        }
    }

    /// Is a provider injected and self-identifying as the expected one?
    /// Pure read; an absent provider is a normal condition.
    pub fn detect_provider(&self) -> bool {
        self.phantom_provider().is_some()
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    /// True only while the initial silent reconnect is unresolved.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    /// The connected address, if any.
    pub fn address(&self) -> Option<&Pubkey> {
        self.state.address()
    }

    fn phantom_provider(&self) -> Option<Arc<dyn WalletProvider>> {
        self.provider.as_ref().filter(|p| p.is_phantom()).cloned()
    }

    /// The connection check run once at application start.
    ///
    /// Never prompts: a provider that is already connected yields its key
    /// directly, otherwise a connect flagged `only_if_trusted` is issued.
    /// Rejection of that request is the expected outcome on an untrusted
    /// site and resolves to `Disconnected` with no user-visible error; so
    /// does every fault. The loading flag resolves exactly once, whatever
    /// branch runs; later calls are no-ops.
    pub async fn silent_reconnect(&mut self) {
        if !self.loading {
            debug!("silent reconnect already resolved; ignoring");
            return;
        }

        let next = match self.phantom_provider() {
            None => {
                warn!("wallet provider not detected");
                WalletState::Disconnected
            }
            Some(provider) => {
                if provider.is_connected() {
                    match provider.public_key() {
                        Some(address) => WalletState::Connected(address),
                        None => {
                            error!("provider reports connected but exposes no public key");
                            WalletState::Disconnected
                        }
                    }
                } else {
                    self.state = WalletState::Connecting;
                    match provider.connect(true).await {
                        Ok(address) => WalletState::Connected(address),
                        Err(ProviderError::Rejected | ProviderError::NoResponse) => {
                            debug!("silent reconnect declined; site not previously trusted");
                            WalletState::Disconnected
                        }
                        Err(err) => {
                            error!(error = %err, "silent reconnect fault");
                            WalletState::Disconnected
                        }
                    }
                }
            }
        };

        self.state = next;
        self.loading = false;
    }

    /// User-initiated connect. May prompt the user.
    ///
    /// With no provider installed this is a no-op apart from the returned
    /// error, which the host surfaces as a blocking notice.
    pub async fn connect(&mut self) -> Result<Pubkey, SessionError> {
        let provider = self.phantom_provider().ok_or(SessionError::ProviderAbsent)?;

        self.state = WalletState::Connecting;
        match provider.connect(false).await {
            Ok(address) => {
                info!(%address, "wallet connected");
                self.state = WalletState::Connected(address);
                Ok(address)
            }
            Err(ProviderError::Rejected) => {
                warn!("connection request rejected");
                self.state = WalletState::Disconnected;
                Err(SessionError::UserRejected)
            }
            Err(ProviderError::NoResponse) => {
                warn!("connection request returned no response");
                self.state = WalletState::Disconnected;
                Err(SessionError::ProviderFault("no response from wallet".into()))
            }
            Err(err) => {
                error!(error = %err, "connect fault");
                self.state = WalletState::Failed(err.to_string());
                Err(SessionError::ProviderFault(err.to_string()))
            }
        }
    }

    /// User-initiated disconnect. Purely local: the extension keeps its own
    /// site-trust grant, so a reload's silent reconnect may still succeed.
    /// Idempotent.
    pub fn disconnect(&mut self) {
        if self.state.is_connected() {
            info!("wallet disconnected");
        }
        self.state = WalletState::Disconnected;
    }

    /// Build, sign, submit, and confirm the fixed contract transaction.
    ///
    /// Requires a connected wallet. Each step is a distinct suspension
    /// point; any fault aborts the rest and leaves the state untouched.
    /// There is no retry; the user re-triggers manually.
    pub async fn sign_contract(
        &self,
        connector: &dyn LedgerConnector,
    ) -> Result<Signature, SessionError> {
        let address = *self.state.address().ok_or(SessionError::NotConnected)?;
        let provider = self.phantom_provider().ok_or(SessionError::ProviderAbsent)?;

        let connection = connector
            .open(self.config.cluster, Commitment::Confirmed)
            .await
            .map_err(|e| SessionError::SubmissionFailed(format!("connection open failed: {e}")))?;

        // Finalized is stronger than the confirmed level used for submission
        // and confirmation: a blockhash read at confirmed could be undone by
        // a fork right after we reference it.
        let recent_blockhash = connection
            .latest_blockhash(Commitment::Finalized)
            .await
            .map_err(|e| SessionError::SubmissionFailed(format!("blockhash fetch failed: {e}")))?;

        let request = TransactionRequest::new(&self.config, address);
        let message = request.compile(recent_blockhash)?;
        let unsigned = Transaction::new_unsigned(message);

        let signed = match provider.sign_transaction(unsigned).await {
            Ok(tx) => tx,
            Err(ProviderError::Rejected) => {
                warn!("signing request rejected");
                return Err(SessionError::UserRejected);
            }
            Err(err) => {
                error!(error = %err, "signing fault");
                return Err(SessionError::SigningFailed(err.to_string()));
            }
        };
        if !signed.is_fully_signed() {
            error!("provider returned an unsigned transaction");
            return Err(SessionError::SigningFailed(
                "provider returned an unsigned transaction".into(),
            ));
        }

        let wire = signed.serialize();
        let signature = connection
            .send_raw_transaction(&wire)
            .await
            .map_err(|e| SessionError::SubmissionFailed(e.to_string()))?;

        let confirmed = connection
            .confirm_signature(&signature, Commitment::Confirmed)
            .await
            .map_err(|e| SessionError::ConfirmationFailed(e.to_string()))?;
        if !confirmed {
            return Err(SessionError::ConfirmationFailed(format!(
                "signature {signature} was not confirmed"
            )));
        }

        info!(%signature, "contract transaction confirmed");
        Ok(signature)
    }
}
