use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    events::{FeesPercentageUpdated, UserFeesPercentageUpdated},
    state::{UserPosition, Vault},
};

#[derive(Accounts)]
pub struct SetDefaultFeesPercentage<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    pub owner: Signer<'info>,
}

pub fn set_default_fees_percentage(
    ctx: Context<SetDefaultFeesPercentage>,
    fees_bps: u16,
) -> Result<()> {
    require!(fees_bps <= MAX_FEES_BPS, VaultError::DefaultFeesTooHigh);

    let vault = &mut ctx.accounts.vault;
    let old_fees_bps = vault.default_fees_bps;
    vault.default_fees_bps = fees_bps;

    emit!(FeesPercentageUpdated {
        old_fees_bps,
        new_fees_bps: fees_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetUserFeesPercentage<'info> {
    #[account(
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

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Applies to every split made after this call, including interest already accrued.
pub fn set_user_fees_percentage(ctx: Context<SetUserFeesPercentage>, fees_bps: u16) -> Result<()> {
    require!(fees_bps <= MAX_FEES_BPS, VaultError::UserFeesTooHigh);

    let vault_key = ctx.accounts.vault.key();
    let user_key = ctx.accounts.user.key();
    let index = ctx.accounts.vault.interest_index;

    let user_position = &mut ctx.accounts.user_position;
    user_position.init_if_fresh(vault_key, user_key, ctx.bumps.user_position, index);
    user_position.custom_fees_bps = Some(fees_bps);

    emit!(UserFeesPercentageUpdated {
        user: user_key,
        fees_bps,
    });

    Ok(())
}
