use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    errors::VaultError,
    events::Withdrawn,
    interest::split_interest,
    lending_integration,
    state::{Association, UserPosition, Vault},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        seeds = [USER_POSITION_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.user == user.key() @ VaultError::Unauthorized,
        constraint = user_position.deposited_amount > 0 @ VaultError::NoDeposit,
        constraint = user_position.has_association() @ VaultError::NoAssociatedAssociation,
    )]
    pub user_position: Box<Account<'info, UserPosition>>,

    #[account(
        mut,
        seeds = [ASSOCIATION_SEED, vault.key().as_ref(), user_position.associated_association.as_ref()],
        bump = association.bump,
        constraint = association.whitelisted @ VaultError::AssociationNotWhitelisted,
    )]
    pub association: Box<Account<'info, Association>>,

    /// Association's token account receiving its share
    #[account(
        mut,
        constraint = association_token_account.mint == vault.asset_mint @ VaultError::MintMismatch,
        constraint = association_token_account.owner == association.association @ VaultError::OwnerMismatch,
    )]
    pub association_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = user_token_account.mint == vault.asset_mint @ VaultError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ VaultError::OwnerMismatch,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = a_token_treasury.key() == vault.a_token_treasury @ VaultError::InvalidTreasury,
    )]
    pub a_token_treasury: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = a_token_mint.key() == vault.a_token_mint @ VaultError::InvalidATokenMint,
    )]
    pub a_token_mint: Box<Account<'info, Mint>>,

    /// CHECK: Program ID validation
    #[account(
        constraint = lending_program.key() == vault.lending_program @ VaultError::InvalidLendingProgram
    )]
    pub lending_program: AccountInfo<'info>,

    /// CHECK: validated against the vault, the lending program checks the rest
    #[account(
        mut,
        constraint = lending_reserve.key() == vault.lending_reserve @ VaultError::InvalidLendingReserve
    )]
    pub lending_reserve: AccountInfo<'info>,

    /// CHECK: validated against the vault
    #[account(
        mut,
        constraint = reserve_liquidity.key() == vault.reserve_liquidity @ VaultError::InvalidLendingReserve
    )]
    pub reserve_liquidity: AccountInfo<'info>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroWithdraw);
    require!(
        amount <= ctx.accounts.user_position.deposited_amount,
        VaultError::InsufficientBalance
    );

    let a_token_balance = ctx.accounts.a_token_treasury.amount;
    ctx.accounts.vault.sync_interest(a_token_balance)?;
    let index = ctx.accounts.vault.interest_index;
    let fees_bps = ctx
        .accounts
        .user_position
        .effective_fees_bps(ctx.accounts.vault.default_fees_bps);

    let pending = ctx.accounts.user_position.settle(index)?;
    let split = split_interest(pending, fees_bps)?;

    ctx.accounts.user_position.record_withdrawal(amount)?;
    ctx.accounts.vault.record_withdrawal(amount, &split)?;
    ctx.accounts.association.record_donation(split.association_share)?;

    let to_user = amount
        .checked_add(split.user_share)
        .ok_or(VaultError::MathOverflow)?;

    let creator = ctx.accounts.vault.creator;
    let asset_mint = ctx.accounts.vault.asset_mint;
    let vault_seeds = &[
        VAULT_SEED,
        creator.as_ref(),
        asset_mint.as_ref(),
        &[ctx.accounts.vault.bump],
    ];

    // Principal plus the user's share of the interest
    lending_integration::cpi::withdraw(
        ctx.accounts.lending_program.to_account_info(),
        ctx.accounts.lending_reserve.to_account_info(),
        ctx.accounts.a_token_mint.to_account_info(),
        ctx.accounts.reserve_liquidity.to_account_info(),
        ctx.accounts.a_token_treasury.to_account_info(),
        ctx.accounts.user_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        to_user,
        &[vault_seeds],
    )?;

    // Association share goes straight to the association
    lending_integration::cpi::withdraw(
        ctx.accounts.lending_program.to_account_info(),
        ctx.accounts.lending_reserve.to_account_info(),
        ctx.accounts.a_token_mint.to_account_info(),
        ctx.accounts.reserve_liquidity.to_account_info(),
        ctx.accounts.a_token_treasury.to_account_info(),
        ctx.accounts.association_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        split.association_share,
        &[vault_seeds],
    )?;

    msg!(
        "Withdrew {} principal, interest {} to user and {} to association {}",
        amount,
        split.user_share,
        split.association_share,
        ctx.accounts.association.association
    );

    emit!(Withdrawn {
        user: ctx.accounts.user.key(),
        principal: amount,
        user_interest: split.user_share,
        association_interest: split.association_share,
    });

    Ok(())
}
