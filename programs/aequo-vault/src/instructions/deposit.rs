use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::VaultError,
    events::Deposited,
    lending_integration,
    state::{UserPosition, Vault},
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserPosition::LEN,
        seeds = [USER_POSITION_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_position: Box<Account<'info, UserPosition>>,

    #[account(
        mut,
        constraint = user_token_account.mint == vault.asset_mint @ VaultError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ VaultError::OwnerMismatch,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = asset_treasury.key() == vault.asset_treasury @ VaultError::InvalidTreasury,
    )]
    pub asset_treasury: Box<Account<'info, TokenAccount>>,

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

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, VaultError::ZeroDeposit);

    let vault_key = ctx.accounts.vault.key();
    let user_key = ctx.accounts.user.key();

    // Fold pending yield in before the new principal starts earning
    let a_token_balance = ctx.accounts.a_token_treasury.amount;
    ctx.accounts.vault.sync_interest(a_token_balance)?;
    let index = ctx.accounts.vault.interest_index;

    let user_position = &mut ctx.accounts.user_position;
    user_position.init_if_fresh(vault_key, user_key, ctx.bumps.user_position, index);
    user_position.settle(index)?;

    // Pull the asset from the user into the staging treasury
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_token_account.to_account_info(),
                to: ctx.accounts.asset_treasury.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        amount,
    )?;

    // Supply it to the lending reserve, aTokens land in the vault's aToken treasury
    let creator = ctx.accounts.vault.creator;
    let asset_mint = ctx.accounts.vault.asset_mint;
    let vault_seeds = &[
        VAULT_SEED,
        creator.as_ref(),
        asset_mint.as_ref(),
        &[ctx.accounts.vault.bump],
    ];

    lending_integration::cpi::supply(
        ctx.accounts.lending_program.to_account_info(),
        ctx.accounts.lending_reserve.to_account_info(),
        ctx.accounts.a_token_mint.to_account_info(),
        ctx.accounts.reserve_liquidity.to_account_info(),
        ctx.accounts.asset_treasury.to_account_info(),
        ctx.accounts.a_token_treasury.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        &[vault_seeds],
    )?;

    ctx.accounts.vault.record_deposit(amount)?;
    ctx.accounts.user_position.record_deposit(amount)?;

    msg!("Deposited {} into vault {}", amount, vault_key);

    emit!(Deposited {
        user: user_key,
        amount,
    });

    Ok(())
}
