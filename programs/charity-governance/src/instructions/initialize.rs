use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Initialize Instruction
//
// Creates a governance instance for the signer.
// The signer becomes the authority and the first validator.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Governance PDA
    // Seeds: ["governance", authority]
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Governance::INIT_SPACE,
        seeds = [GOVERNANCE, authority.key().as_ref()],
        bump,
    )]
    pub governance: Account<'info, Governance>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: &InitializeBumps) -> Result<()> {
        let authority = self.authority.key();
        let now = Clock::get()?.unix_timestamp;

        self.governance.set_inner(Governance {
            authority,
            registry: Pubkey::default(),
            validators: [Validator::default(); MAX_VALIDATORS],
            validator_count: 0,
            charity_count: 0,
            bump: bumps.governance,
        });

        self.governance.add_validator(authority, now)?;

        emit!(ValidatorAdded {
            validator: authority,
            added_by: authority,
        });

        Ok(())
    }
}
