use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{state::*, errors::*, constants::*, events::*};

// Admit Charity Instruction
//
// Creates the donation entry for a charity that passed its governance vote.
// Invoked by the governance program via CPI, signed by its PDA.
//
// Security checks:
// 1. Caller is the configured voting authority
// 2. Name within bounds
// 3. Wallet present
// 4. Entry does not already exist (enforced by `init`)
//
// The vault is topped up to the rent-exempt minimum here, so donations
// can never be stranded in a vault that would be reaped.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct AdmitCharity<'info> {
    // Voting authority - must match registry_config.voting_authority
    pub voting_authority: Signer<'info>,

    // Pays rent for the entry and the vault reserve
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    // Charity entry PDA
    // Seeds: ["charity_entry", registry_config, charity_id]
    // `init` rejects a second admission of the same id
    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + CharityEntry::INIT_SPACE,
        seeds = [
            CHARITY_ENTRY,
            registry_config.key().as_ref(),
            &charity_id.to_le_bytes(),
        ],
        bump,
    )]
    pub charity_entry: Account<'info, CharityEntry>,

    // Vault PDA - holds native donations
    // Seeds: ["vault", charity_entry]
    #[account(
        mut,
        seeds = [VAULT, charity_entry.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AdmitCharity<'info> {
    pub fn admit_charity(
        &mut self,
        charity_id: u64,
        name: String,
        wallet: Pubkey,
        bumps: &AdmitCharityBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Voting Authority Check
        self.registry_config
            .assert_is_voting_authority(&self.voting_authority.key())?;

        // 2. Name Length Check
        require!(
            name.len() <= MAX_CHARITY_NAME_LEN,
            RegistryError::NameTooLong
        );

        // 3. Wallet Check
        require!(wallet != Pubkey::default(), RegistryError::MissingWallet);

        let clock = Clock::get()?;

        self.charity_entry.set_inner(CharityEntry {
            registry: self.registry_config.key(),
            charity_id,
            name: name.clone(),
            wallet,
            donation_pool: 0,
            last_release_timestamp: 0,
            is_removed: false,
            is_donation_limit_enabled: false,
            donation_limit: 0,
            token_pool_count: 0,
            is_emergency_stop_enabled: false,
            is_donation_release_paused: false,
            admitted_at: clock.unix_timestamp,
            bump: bumps.charity_entry,
            vault_bump: bumps.vault,
        });

        self.registry_config.record_admission()?;

        self.fund_vault_reserve()?;

        emit!(CharityAdded {
            charity_id,
            name,
            wallet,
        });

        Ok(())
    }

    // Brings the vault up to the rent-exempt minimum
    // A vault pre-funded by a third party only receives the difference
    fn fund_vault_reserve(&self) -> Result<()> {
        let reserve = Rent::get()?.minimum_balance(0);
        let balance = self.vault.lamports();

        if balance >= reserve {
            return Ok(());
        }

        let shortfall = reserve
            .checked_sub(balance)
            .ok_or(RegistryError::Overflow)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.payer.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            ),
            shortfall,
        )
    }
}
