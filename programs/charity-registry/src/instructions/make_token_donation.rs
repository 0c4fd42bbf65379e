use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount, Transfer, transfer},
};
use crate::{state::*, errors::*, constants::*, events::*};

// Make Token Donation Instruction
//
// Donates a whitelisted SPL token. Tokens land in the vault's associated
// token account and are tracked in a per-(charity, mint) pool.
// The donation limit applies to each pool in that pool's own units.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct MakeTokenDonation<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

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
        seeds = [VAULT, charity_entry.key().as_ref()],
        bump = charity_entry.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub mint: Account<'info, Mint>,

    // Token pool PDA
    // Seeds: ["token_pool", charity_entry, mint]
    #[account(
        init_if_needed,
        payer = donor,
        space = ANCHOR_DISCRIMINATOR + TokenPool::INIT_SPACE,
        seeds = [
            TOKEN_POOL,
            charity_entry.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump,
    )]
    pub token_pool: Account<'info, TokenPool>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = donor,
    )]
    pub donor_token_account: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = donor,
        associated_token::mint = mint,
        associated_token::authority = vault,
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeTokenDonation<'info> {
    pub fn make_token_donation(
        &mut self,
        charity_id: u64,
        amount: u64,
        bumps: &MakeTokenDonationBumps,
    ) -> Result<()> {
        let mint = self.mint.key();

        // SECURITY CHECKS

        // 1. Whitelist Check
        require!(
            self.registry_config.is_whitelisted(&mint),
            RegistryError::AssetNotWhitelisted
        );

        // 2. First donation of this mint sets up the pool
        if !self.token_pool.is_initialized() {
            self.charity_entry.register_token_pool()?;

            self.token_pool.set_inner(TokenPool {
                charity_entry: self.charity_entry.key(),
                mint,
                donation_pool: 0,
                last_release_timestamp: 0,
                bump: bumps.token_pool,
            });
        }

        // 3. Entry flags, zero amount and limit
        self.token_pool.record_donation(&self.charity_entry, amount)?;

        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.donor_token_account.to_account_info(),
                    to: self.vault_token_account.to_account_info(),
                    authority: self.donor.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(TokenDonationMade {
            charity_id,
            donor: self.donor.key(),
            mint,
            amount,
            donation_pool: self.token_pool.donation_pool,
        });

        Ok(())
    }
}
