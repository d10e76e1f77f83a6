use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    errors::VaultError,
    events::VaultInitialized,
    lending_integration::{deserialize_reserve, validate_reserve},
    state::Vault,
};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// Deposited asset (usually USDC)
    pub asset_mint: Box<Account<'info, Mint>>,

    /// Receipt mint issued by the lending reserve
    pub a_token_mint: Box<Account<'info, Mint>>,

    /// Becomes the vault owner; the vault address is derived from it
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Vault::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref(), asset_mint.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    /// Vault-owned staging account for the asset
    #[account(
        init,
        payer = owner,
        seeds = [ASSET_TREASURY_SEED, vault.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = vault,
    )]
    pub asset_treasury: Box<Account<'info, TokenAccount>>,

    /// Vault-owned aToken account
    #[account(
        init,
        payer = owner,
        seeds = [A_TOKEN_TREASURY_SEED, vault.key().as_ref()],
        bump,
        token::mint = a_token_mint,
        token::authority = vault,
    )]
    pub a_token_treasury: Box<Account<'info, TokenAccount>>,

    /// Lending pool program
    /// CHECK: must be executable; the reserve is checked against it
    #[account(executable)]
    pub lending_program: AccountInfo<'info>,

    /// Reserve of the asset inside the lending program
    /// CHECK: owner and layout validated in the handler
    pub lending_reserve: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    let reserve = deserialize_reserve(
        &ctx.accounts.lending_reserve,
        &ctx.accounts.lending_program.key(),
    )?;
    validate_reserve(
        &reserve,
        &ctx.accounts.asset_mint.key(),
        &ctx.accounts.a_token_mint.key(),
    )?;
    require!(
        ctx.accounts.asset_mint.key() != ctx.accounts.a_token_mint.key(),
        VaultError::InvalidATokenMint
    );

    let vault = &mut ctx.accounts.vault;
    vault.owner = ctx.accounts.owner.key();
    vault.creator = ctx.accounts.owner.key();
    vault.asset_mint = ctx.accounts.asset_mint.key();
    vault.a_token_mint = ctx.accounts.a_token_mint.key();
    vault.lending_program = ctx.accounts.lending_program.key();
    vault.lending_reserve = ctx.accounts.lending_reserve.key();
    vault.reserve_liquidity = reserve.liquidity_supply;
    vault.asset_treasury = ctx.accounts.asset_treasury.key();
    vault.a_token_treasury = ctx.accounts.a_token_treasury.key();
    vault.total_assets = 0;
    vault.default_fees_bps = DEFAULT_FEES_BPS;
    vault.interest_index = 0;
    vault.accounted_balance = 0;
    vault.bump = ctx.bumps.vault;
    vault.asset_treasury_bump = ctx.bumps.asset_treasury;
    vault.a_token_treasury_bump = ctx.bumps.a_token_treasury;

    msg!(
        "Vault initialized for asset {} on lending program {}",
        vault.asset_mint,
        vault.lending_program
    );

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        asset_mint: vault.asset_mint,
        a_token_mint: vault.a_token_mint,
        lending_program: vault.lending_program,
        default_fees_bps: vault.default_fees_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
