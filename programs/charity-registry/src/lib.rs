use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod state;
pub mod constants;

pub use instructions::*;
pub use errors::*;
pub use events::*;
pub use state::*;

declare_id!("3MfuLXbMLq97dVEnQUjYzuFTUm8w5eLNFYmBS7fE3797");

#[program]
pub mod charity_registry {
    use super::*;

    // Create the registry config for the signing admin
    // voting_authority is the only key that may admit charities
    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        voting_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts.initialize_registry(voting_authority, &ctx.bumps)
    }

    // Admit an approved charity and open its donation vault
    // Called by the governance program through CPI
    pub fn admit_charity(
        ctx: Context<AdmitCharity>,
        charity_id: u64,
        name: String,
        wallet: Pubkey,
    ) -> Result<()> {
        ctx.accounts.admit_charity(charity_id, name, wallet, &ctx.bumps)
    }

    // Donate lamports to an admitted charity
    pub fn make_donation(ctx: Context<MakeDonation>, charity_id: u64, amount: u64) -> Result<()> {
        ctx.accounts.make_donation(charity_id, amount)
    }

    // Donate a whitelisted SPL token to an admitted charity
    pub fn make_token_donation(
        ctx: Context<MakeTokenDonation>,
        charity_id: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.make_token_donation(charity_id, amount, &ctx.bumps)
    }

    // Pay lamports from the vault to the charity wallet
    pub fn release_donation(
        ctx: Context<ReleaseDonation>,
        charity_id: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.release_donation(charity_id, amount)
    }

    // Pay tokens from the vault to the charity wallet's token account
    pub fn release_token_donation(
        ctx: Context<ReleaseTokenDonation>,
        charity_id: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.release_token_donation(charity_id, amount)
    }

    // Every token pool of the entry goes in remaining_accounts
    pub fn limit_donation(ctx: Context<ManageCharity>, charity_id: u64, limit: u64) -> Result<()> {
        ctx.accounts
            .limit_donation(charity_id, limit, ctx.remaining_accounts)
    }

    pub fn disable_donation_limit(ctx: Context<ManageCharity>, charity_id: u64) -> Result<()> {
        ctx.accounts.disable_donation_limit(charity_id)
    }

    // Soft delete: the entry stays, donations are refused
    pub fn remove_charity(ctx: Context<ManageCharity>, charity_id: u64) -> Result<()> {
        ctx.accounts.remove_charity(charity_id)
    }

    // Emergency brake on both donations and releases
    pub fn set_emergency_stop(
        ctx: Context<ManageCharity>,
        charity_id: u64,
        enabled: bool,
    ) -> Result<()> {
        ctx.accounts.set_emergency_stop(charity_id, enabled)
    }

    pub fn set_donation_release_pause(
        ctx: Context<ManageCharity>,
        charity_id: u64,
        paused: bool,
    ) -> Result<()> {
        ctx.accounts.set_donation_release_pause(charity_id, paused)
    }

    pub fn add_token_to_whitelist(ctx: Context<AddTokenToWhitelist>) -> Result<()> {
        ctx.accounts.add_token_to_whitelist()
    }
}
