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

declare_id!("BhfGQEqfy2edZpVr67tiTJdpK4yLmKdMyYdzdMQPv5sg");

#[program]
pub mod charity_governance {
    use super::*;

    // Create a governance instance
    // The signer becomes its authority and first validator
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps)
    }

    // Point the instance at the registry approved charities are admitted into
    // The registry must already name this governance PDA as its voting authority
    pub fn set_charity_registry(ctx: Context<SetCharityRegistry>) -> Result<()> {
        ctx.accounts.set_charity_registry()
    }

    // Add a validator; callable by any existing validator
    pub fn add_validator(ctx: Context<AddValidator>, new_validator: Pubkey) -> Result<()> {
        ctx.accounts.add_validator(new_validator)
    }

    // Propose a charity; it starts Pending with the next id
    pub fn init_charity(
        ctx: Context<InitCharity>,
        wallet: Pubkey,
        name: String,
        has_wallet: bool,
        info: String,
    ) -> Result<()> {
        ctx.accounts.init_charity(wallet, name, has_wallet, info, &ctx.bumps)
    }

    // Cast one vote on a pending charity
    pub fn vote(ctx: Context<Vote>, charity_id: u64, approve: bool) -> Result<()> {
        ctx.accounts.vote(charity_id, approve, &ctx.bumps)
    }

    // Close the vote: Approved (and admitted) or Disapproved with a reason
    pub fn resolve_charity(ctx: Context<ResolveCharity>, charity_id: u64) -> Result<()> {
        ctx.accounts.resolve_charity(charity_id)
    }
}
