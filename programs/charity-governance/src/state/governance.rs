use anchor_lang::prelude::*;
use crate::{state::Validator, constants::*, errors::*};

// Governance instance
// One per authority; several instances can coexist
#[account]
#[derive(InitSpace)]
pub struct Governance {
    // Initializing principal, validator from genesis
    pub authority: Pubkey,

    // RegistryConfig that approved charities are admitted into
    // Pubkey::default() until set_charity_registry is called
    pub registry: Pubkey,

    // Validator set
    // Fixed-size array avoids realloc; validators are never removed
    pub validators: [Validator; MAX_VALIDATORS],
    pub validator_count: u8,

    // Total charities ever created (ids start at 1, never reused)
    pub charity_count: u64,

    pub bump: u8,
}

impl Governance {
    pub fn is_validator(&self, key: &Pubkey) -> bool {
        self.validators
            .iter()
            .take(self.validator_count as usize)
            .any(|validator| &validator.pubkey == key)
    }

    pub fn assert_is_validator(&self, key: &Pubkey) -> Result<()> {
        require!(self.is_validator(key), GovernanceError::Unauthorized);
        Ok(())
    }

    pub fn add_validator(&mut self, pubkey: Pubkey, now: i64) -> Result<()> {
        require!(!self.is_validator(&pubkey), GovernanceError::AlreadyExists);
        require!(
            (self.validator_count as usize) < MAX_VALIDATORS,
            GovernanceError::MaxValidatorsReached
        );

        self.validators[self.validator_count as usize] = Validator {
            pubkey,
            added_at: now,
        };
        self.validator_count = self
            .validator_count
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok(())
    }

    pub fn total_validators(&self) -> u64 {
        self.validator_count as u64
    }

    // Id the next created charity will receive
    pub fn next_charity_id(&self) -> u64 {
        self.charity_count.saturating_add(1)
    }

    // Consumes the next id
    pub fn assign_charity_id(&mut self) -> Result<u64> {
        self.charity_count = self
            .charity_count
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;
        Ok(self.charity_count)
    }
}
