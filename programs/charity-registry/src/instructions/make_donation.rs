use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{state::*, errors::*, constants::*, events::*};

// Make Donation Instruction
//
// Moves lamports from the donor into the charity vault and credits the pool.
// Anyone may donate. The pool is updated first; any failure reverts both.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct MakeDonation<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    // Unknown ids fail here with AccountNotInitialized
    #[account(
        mut,
        seeds = [
            CHARITY_ENTRY,
            registry_config.key().as_ref(),
            &charity_id.to_le_bytes(),
        ],
        bump = charity_entry.bump,
        constraint = charity_entry.belongs_to(&registry_config.key()) @ RegistryError::CharityNotFound,
    )]
    pub charity_entry: Account<'info, CharityEntry>,

    #[account(
        mut,
        seeds = [VAULT, charity_entry.key().as_ref()],
        bump = charity_entry.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> MakeDonation<'info> {
    pub fn make_donation(&mut self, charity_id: u64, amount: u64) -> Result<()> {
        // Removed / stopped / zero / limit checks live on the entry
        self.charity_entry.record_donation(amount)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.donor.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(DonationMade {
            charity_id,
            donor: self.donor.key(),
            amount,
            donation_pool: self.charity_entry.donation_pool,
        });

        Ok(())
    }
}
