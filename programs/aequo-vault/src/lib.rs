use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod interest;
pub mod lending_integration;
pub mod state;

use instructions::*;
use interest::InterestSplit;

declare_id!("3CYBH1HetnddSdfTA78aHfCxWKcHUydgYFzmixHQvwKi");

#[program]
pub mod aequo_vault {
    use super::*;

    /// Create the vault for an asset and bind it to a lending reserve
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault(ctx)
    }

    /// Deposit the asset; it is supplied to the lending pool right away
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw principal and settle all pending interest
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }

    /// Pay out pending interest, principal stays deposited
    pub fn claim_interest(ctx: Context<ClaimInterest>) -> Result<()> {
        instructions::claim_interest(ctx)
    }

    /// Pick the whitelisted association receiving part of the caller's interest
    pub fn set_associated_association(
        ctx: Context<SetAssociatedAssociation>,
        association_wallet: Pubkey,
    ) -> Result<()> {
        instructions::set_associated_association(ctx, association_wallet)
    }

    /// Override the association share for the caller (max 50%)
    pub fn set_user_fees_percentage(
        ctx: Context<SetUserFeesPercentage>,
        fees_bps: u16,
    ) -> Result<()> {
        instructions::set_user_fees_percentage(ctx, fees_bps)
    }

    /// Owner only: add or remove an association from the whitelist
    pub fn set_association_whitelist(
        ctx: Context<SetAssociationWhitelist>,
        association_wallet: Pubkey,
        whitelisted: bool,
    ) -> Result<()> {
        instructions::set_association_whitelist(ctx, association_wallet, whitelisted)
    }

    /// Owner only: association share for users without a custom one (max 50%)
    pub fn set_default_fees_percentage(
        ctx: Context<SetDefaultFeesPercentage>,
        fees_bps: u16,
    ) -> Result<()> {
        instructions::set_default_fees_percentage(ctx, fees_bps)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership(ctx, new_owner)
    }

    pub fn get_user_info(ctx: Context<UserView>) -> Result<UserInfoView> {
        instructions::get_user_info(ctx)
    }

    pub fn calculate_interest(ctx: Context<UserView>) -> Result<InterestSplit> {
        instructions::calculate_interest(ctx)
    }

    /// aToken balance minus total principal
    pub fn get_global_interest(ctx: Context<VaultView>) -> Result<u64> {
        instructions::get_global_interest(ctx)
    }

    pub fn get_total_vault_value(ctx: Context<VaultView>) -> Result<u64> {
        instructions::get_total_vault_value(ctx)
    }

    pub fn get_association_total_received(ctx: Context<AssociationView>) -> Result<u64> {
        instructions::get_association_total_received(ctx)
    }
}
