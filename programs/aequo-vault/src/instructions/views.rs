use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::*,
    errors::VaultError,
    interest::{split_interest, InterestSplit},
    state::{Association, UserPosition, Vault},
};

/// Snapshot of a user's position as served to clients
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserInfoView {
    pub deposited_amount: u64,
    pub associated_association: Pubkey,
    pub pending_interest: u64,
    pub user_interest_share: u64,
    pub association_interest_share: u64,
    pub fees_percentage_bps: u16,
}

#[derive(Accounts)]
pub struct VaultView<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = a_token_treasury.key() == vault.a_token_treasury @ VaultError::InvalidTreasury,
    )]
    pub a_token_treasury: Box<Account<'info, TokenAccount>>,
}

#[derive(Accounts)]
pub struct UserView<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        constraint = a_token_treasury.key() == vault.a_token_treasury @ VaultError::InvalidTreasury,
    )]
    pub a_token_treasury: Box<Account<'info, TokenAccount>>,

    /// Omitted for a wallet that never interacted with the vault
    #[account(
        seeds = [USER_POSITION_SEED, vault.key().as_ref(), user_position.user.as_ref()],
        bump = user_position.bump,
    )]
    pub user_position: Option<Account<'info, UserPosition>>,
}

#[derive(Accounts)]
pub struct AssociationView<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        seeds = [ASSOCIATION_SEED, vault.key().as_ref(), association.association.as_ref()],
        bump = association.bump,
    )]
    pub association: Box<Account<'info, Association>>,
}

/// Pending interest of a position at the current aToken balance, split by its fee.
/// A missing position has nothing pending.
pub fn project_user_interest(
    vault: &Vault,
    user_position: Option<&UserPosition>,
    a_token_balance: u64,
) -> Result<InterestSplit> {
    let Some(user_position) = user_position else {
        return Ok(InterestSplit::default());
    };

    let index = vault.projected_index(a_token_balance)?;
    let pending = user_position.pending_interest(index)?;
    split_interest(pending, user_position.effective_fees_bps(vault.default_fees_bps))
}

/// Unknown users get a zeroed view carrying the vault's default fee.
pub fn user_info(
    vault: &Vault,
    user_position: Option<&UserPosition>,
    a_token_balance: u64,
) -> Result<UserInfoView> {
    let split = project_user_interest(vault, user_position, a_token_balance)?;

    Ok(UserInfoView {
        deposited_amount: user_position.map_or(0, |p| p.deposited_amount),
        associated_association: user_position
            .map_or(Pubkey::default(), |p| p.associated_association),
        pending_interest: split.total_interest,
        user_interest_share: split.user_share,
        association_interest_share: split.association_share,
        fees_percentage_bps: user_position.map_or(vault.default_fees_bps, |p| {
            p.effective_fees_bps(vault.default_fees_bps)
        }),
    })
}

pub fn get_user_info(ctx: Context<UserView>) -> Result<UserInfoView> {
    user_info(
        &ctx.accounts.vault,
        ctx.accounts.user_position.as_deref(),
        ctx.accounts.a_token_treasury.amount,
    )
}

pub fn calculate_interest(ctx: Context<UserView>) -> Result<InterestSplit> {
    project_user_interest(
        &ctx.accounts.vault,
        ctx.accounts.user_position.as_deref(),
        ctx.accounts.a_token_treasury.amount,
    )
}

pub fn get_global_interest(ctx: Context<VaultView>) -> Result<u64> {
    Ok(ctx
        .accounts
        .vault
        .global_interest(ctx.accounts.a_token_treasury.amount))
}

pub fn get_total_vault_value(ctx: Context<VaultView>) -> Result<u64> {
    Ok(ctx.accounts.a_token_treasury.amount)
}

pub fn get_association_total_received(ctx: Context<AssociationView>) -> Result<u64> {
    Ok(ctx.accounts.association.total_received)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_splits_pending_interest() {
        let mut vault = Vault::default();
        vault.default_fees_bps = DEFAULT_FEES_BPS;
        vault.record_deposit(1_000_000_000).unwrap();

        let mut position = UserPosition::default();
        position.record_deposit(1_000_000_000).unwrap();

        // 30 days at ~3.65% APY on 1_000 USDC
        let split = project_user_interest(&vault, Some(&position), 1_003_000_000).unwrap();

        assert_eq!(split.total_interest, 3_000_000);
        assert_eq!(split.association_share, 600_000);
        assert_eq!(split.user_share, 2_400_000);
        // read path leaves state alone
        assert_eq!(vault.interest_index, 0);
    }

    #[test]
    fn test_projection_uses_custom_fee() {
        let mut vault = Vault::default();
        vault.default_fees_bps = DEFAULT_FEES_BPS;
        vault.record_deposit(4_000).unwrap();

        let mut position = UserPosition::default();
        position.record_deposit(1_000).unwrap();
        position.custom_fees_bps = Some(MAX_FEES_BPS);

        let split = project_user_interest(&vault, Some(&position), 4_400).unwrap();

        assert_eq!(split.total_interest, 100);
        assert_eq!(split.association_share, 50);
        assert_eq!(split.user_share, 50);
    }

    #[test]
    fn test_no_interest_without_growth() {
        let mut vault = Vault::default();
        vault.record_deposit(1_000).unwrap();

        let mut position = UserPosition::default();
        position.record_deposit(1_000).unwrap();

        let split = project_user_interest(&vault, Some(&position), 1_000).unwrap();
        assert_eq!(split, InterestSplit::default());
        assert_eq!(vault.global_interest(1_000), 0);
    }

    #[test]
    fn test_unknown_user_gets_zeroed_view_with_default_fee() {
        let mut vault = Vault::default();
        vault.default_fees_bps = DEFAULT_FEES_BPS;
        vault.record_deposit(1_000).unwrap();

        let info = user_info(&vault, None, 1_500).unwrap();

        assert_eq!(info.deposited_amount, 0);
        assert_eq!(info.associated_association, Pubkey::default());
        assert_eq!(info.pending_interest, 0);
        assert_eq!(info.user_interest_share, 0);
        assert_eq!(info.association_interest_share, 0);
        assert_eq!(info.fees_percentage_bps, DEFAULT_FEES_BPS);
    }

    #[test]
    fn test_user_info_reports_custom_fee_and_association() {
        let mut vault = Vault::default();
        vault.default_fees_bps = DEFAULT_FEES_BPS;
        vault.record_deposit(2_000).unwrap();

        let mut position = UserPosition::default();
        position.record_deposit(2_000).unwrap();
        position.associated_association = Pubkey::new_unique();
        position.custom_fees_bps = Some(1000);

        let info = user_info(&vault, Some(&position), 2_200).unwrap();

        assert_eq!(info.deposited_amount, 2_000);
        assert_eq!(info.associated_association, position.associated_association);
        assert_eq!(info.pending_interest, 200);
        assert_eq!(info.association_interest_share, 20);
        assert_eq!(info.user_interest_share, 180);
        assert_eq!(info.fees_percentage_bps, 1000);
    }
}
