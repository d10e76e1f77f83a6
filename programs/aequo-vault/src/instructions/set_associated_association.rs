use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    events::UserAssociationUpdated,
    state::{Association, UserPosition, Vault},
};

#[derive(Accounts)]
#[instruction(association_wallet: Pubkey)]
pub struct SetAssociatedAssociation<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        seeds = [ASSOCIATION_SEED, vault.key().as_ref(), association_wallet.as_ref()],
        bump = association.bump,
        constraint = association.whitelisted @ VaultError::AssociationNotWhitelisted,
    )]
    pub association: Box<Account<'info, Association>>,

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

pub fn set_associated_association(
    ctx: Context<SetAssociatedAssociation>,
    association_wallet: Pubkey,
) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let user_key = ctx.accounts.user.key();
    let index = ctx.accounts.vault.interest_index;

    let user_position = &mut ctx.accounts.user_position;
    user_position.init_if_fresh(vault_key, user_key, ctx.bumps.user_position, index);
    user_position.associated_association = association_wallet;

    msg!("User {} associated with {}", user_key, association_wallet);

    emit!(UserAssociationUpdated {
        user: user_key,
        association: association_wallet,
    });

    Ok(())
}
