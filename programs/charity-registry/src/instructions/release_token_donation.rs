use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount, Transfer, transfer};
use crate::{state::*, errors::*, constants::*, events::*};

// Release Token Donation Instruction
//
// Pays a token pool out of the vault's associated token account
// to a token account owned by the charity wallet. Vault PDA signs.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct ReleaseTokenDonation<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
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
        seeds = [VAULT, charity_entry.key().as_ref()],
        bump = charity_entry.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [
            TOKEN_POOL,
            charity_entry.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump = token_pool.bump,
    )]
    pub token_pool: Account<'info, TokenPool>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        constraint = wallet_token_account.owner == charity_entry.wallet @ RegistryError::InvalidRecipient,
    )]
    pub wallet_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ReleaseTokenDonation<'info> {
    pub fn release_token_donation(&mut self, charity_id: u64, amount: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Admin Check
        self.registry_config.assert_is_admin(&self.admin.key())?;

        // 2. Flags and pool balance
        let clock = Clock::get()?;
        self.token_pool
            .record_release(&self.charity_entry, amount, clock.unix_timestamp)?;

        let entry_key = self.charity_entry.key();
        let vault_seeds = &[
            VAULT,
            entry_key.as_ref(),
            &[self.charity_entry.vault_bump],
        ];
        let signer_seeds = &[&vault_seeds[..]];

        transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault_token_account.to_account_info(),
                    to: self.wallet_token_account.to_account_info(),
                    authority: self.vault.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(TokenDonationReleased {
            charity_id,
            wallet: self.charity_entry.wallet,
            mint: self.mint.key(),
            amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
