use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;
use crate::{constants::*, errors::*, state::{evaluate_quorum, QuorumOutcome}};

// Charity lifecycle
// Pending -> Approved | Disapproved; terminal states never change
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum CharityStatus {
    Pending,
    Approved,
    Disapproved,
}

// Charity record
// Seeds: ["charity", governance, charity_id]
#[account]
#[derive(InitSpace)]
pub struct Charity {
    // Governance instance that created this charity
    pub governance: Pubkey,

    pub charity_id: u64,

    // Payout identity, meaningful only when has_wallet is true
    pub wallet: Pubkey,

    // Unique across all charities ever created in this governance
    #[max_len(MAX_CHARITY_NAME_LEN)]
    pub name: String,

    // A charity without a wallet can be voted on but never approved
    pub has_wallet: bool,

    // Off-chain metadata identifier, stored verbatim
    #[max_len(MAX_CHARITY_INFO_LEN)]
    pub info: String,

    pub status: CharityStatus,

    pub proposer: Pubkey,

    // Incremental tally, one vote per validator
    pub approve_votes: u64,
    pub disapprove_votes: u64,

    pub created_at: i64,

    // 0 while pending
    pub resolved_at: i64,

    pub bump: u8,
}

impl Charity {
    pub fn assert_pending(&self) -> Result<()> {
        require!(
            self.status == CharityStatus::Pending,
            GovernanceError::NotPending
        );
        Ok(())
    }

    pub fn votes_cast(&self) -> u64 {
        self.approve_votes.saturating_add(self.disapprove_votes)
    }

    pub fn record_vote(&mut self, approve: bool) -> Result<()> {
        self.assert_pending()?;

        if approve {
            self.approve_votes = self
                .approve_votes
                .checked_add(1)
                .ok_or(GovernanceError::Overflow)?;
        } else {
            self.disapprove_votes = self
                .disapprove_votes
                .checked_add(1)
                .ok_or(GovernanceError::Overflow)?;
        }
        Ok(())
    }

    // Applies the quorum law and commits the terminal status
    // Walletless charities are rejected before any quorum math
    pub fn resolve(&mut self, total_validators: u64, now: i64) -> Result<QuorumOutcome> {
        self.assert_pending()?;
        require!(self.has_wallet, GovernanceError::MissingWallet);

        let outcome = evaluate_quorum(self.approve_votes, self.disapprove_votes, total_validators);

        self.status = match outcome {
            QuorumOutcome::Approved => CharityStatus::Approved,
            QuorumOutcome::Disapproved(_) => CharityStatus::Disapproved,
        };
        self.resolved_at = now;

        Ok(outcome)
    }
}
