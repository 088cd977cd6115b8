//! The fixed contract-signing transaction.

use crate::config::SessionConfig;
use sol_wire::{AccountMeta, Blockhash, Instruction, Message, Pubkey, WireError};

/// Immutable descriptor of the single contract instruction: the connected
/// wallet signs, a fixed receiver account is named writable, and the
/// instruction carries no data. Built fresh per submission, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    program_id: Pubkey,
    signer: Pubkey,
    receiver: Pubkey,
}

impl TransactionRequest {
    pub fn new(config: &SessionConfig, signer: Pubkey) -> Self {
        TransactionRequest {
            program_id: config.program_id,
            signer,
            receiver: config.receiver,
        }
    }

    /// The instruction: signer account (signer + writable), receiver
    /// (writable, non-signing), empty data.
    pub fn instruction(&self) -> Instruction {
        Instruction::new(
            self.program_id,
            vec![
                AccountMeta::writable(self.signer, true),
                AccountMeta::writable(self.receiver, false),
            ],
            Vec::new(),
        )
    }

    /// Compile into a message with the signer as fee payer.
    pub fn compile(&self, recent_blockhash: Blockhash) -> Result<Message, WireError> {
        Message::compile(&[self.instruction()], &self.signer, recent_blockhash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONTRACT_PROGRAM_ID, CONTRACT_RECEIVER};

    fn request() -> TransactionRequest {
        TransactionRequest::new(&SessionConfig::default(), Pubkey::new([7u8; 32]))
    }

    #[test]
    fn instruction_names_fixed_program_and_receiver() {
        let ix = request().instruction();
        assert_eq!(ix.program_id, CONTRACT_PROGRAM_ID);
        assert_eq!(ix.accounts[1].pubkey, CONTRACT_RECEIVER);
        assert!(ix.data.is_empty());
    }

    #[test]
    fn signer_is_writable_signer() {
        let ix = request().instruction();
        assert_eq!(ix.accounts[0].pubkey, Pubkey::new([7u8; 32]));
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
    }

    #[test]
    fn receiver_is_writable_non_signer() {
        let ix = request().instruction();
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
    }

    #[test]
    fn compiled_message_has_signer_as_fee_payer() {
        let msg = request().compile(Blockhash::new([0xAA; 32])).unwrap();
        assert_eq!(msg.account_keys[0], Pubkey::new([7u8; 32]));
        assert_eq!(msg.header.num_required_signatures, 1);
        assert_eq!(msg.recent_blockhash.to_bytes(), [0xAA; 32]);
    }
}
