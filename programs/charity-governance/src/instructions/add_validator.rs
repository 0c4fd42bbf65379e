use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Add Validator Instruction
//
// Any validator can add another principal to the set.
// Takes effect immediately; validators are never removed.

#[derive(Accounts)]
pub struct AddValidator<'info> {
    pub validator: Signer<'info>,

    #[account(
        mut,
        seeds = [GOVERNANCE, governance.authority.as_ref()],
        bump = governance.bump,
    )]
    pub governance: Account<'info, Governance>,
}

impl<'info> AddValidator<'info> {
    pub fn add_validator(&mut self, new_validator: Pubkey) -> Result<()> {
        // SECURITY CHECKS

        // 1. Caller Is Validator
        self.governance.assert_is_validator(&self.validator.key())?;

        // 2. Not Already A Validator / capacity (inside add_validator)
        let now = Clock::get()?.unix_timestamp;
        self.governance.add_validator(new_validator, now)?;

        emit!(ValidatorAdded {
            validator: new_validator,
            added_by: self.validator.key(),
        });

        Ok(())
    }
}
