use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{state::*, errors::*, constants::*, events::*};

// Release Donation Instruction
//
// Pays native donations out of the vault to the charity's wallet.
//
// Security checks:
// 1. Caller is the registry admin
// 2. Recipient is the wallet recorded at admission
// 3. Not stopped, not paused, amount within pool (on the entry)
//
// The rent reserve is never part of the pool, so the vault stays rent-exempt.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct ReleaseDonation<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

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

    /// CHECK: must equal charity_entry.wallet, validated in the handler
    #[account(mut)]
    pub wallet: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ReleaseDonation<'info> {
    pub fn release_donation(&mut self, charity_id: u64, amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Admin Check
        self.registry_config.assert_is_admin(&self.admin.key())?;

        // 2. Recipient Check
        require_keys_eq!(
            self.wallet.key(),
            self.charity_entry.wallet,
            RegistryError::InvalidRecipient
        );

        // 3. Flags and pool balance
        let clock = Clock::get()?;
        self.charity_entry.record_release(amount, clock.unix_timestamp)?;

        let entry_key = self.charity_entry.key();
        let vault_seeds = &[
            VAULT,
            entry_key.as_ref(),
            &[self.charity_entry.vault_bump],
        ];
        let signer_seeds = &[&vault_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.wallet.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(DonationReleased {
            charity_id,
            wallet: self.charity_entry.wallet,
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
