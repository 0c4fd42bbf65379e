use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use crate::{state::*, constants::*};

// Add Token To Whitelist Instruction
//
// Admin-only. Whitelisted mints may be donated via make_token_donation.

#[derive(Accounts)]
pub struct AddTokenToWhitelist<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    // Must be a real SPL mint
    pub mint: Account<'info, Mint>,
}

impl<'info> AddTokenToWhitelist<'info> {
    pub fn add_token_to_whitelist(&mut self) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        self.registry_config.whitelist(self.mint.key())?;

        msg!("Whitelisted mint {}", self.mint.key());
        Ok(())
    }
}
