use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    events::AssociationWhitelistUpdated,
    state::{Association, Vault},
};

#[derive(Accounts)]
#[instruction(association_wallet: Pubkey)]
pub struct SetAssociationWhitelist<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Association::LEN,
        seeds = [ASSOCIATION_SEED, vault.key().as_ref(), association_wallet.as_ref()],
        bump,
    )]
    pub association: Box<Account<'info, Association>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn set_association_whitelist(
    ctx: Context<SetAssociationWhitelist>,
    association_wallet: Pubkey,
    whitelisted: bool,
) -> Result<()> {
    let association = &mut ctx.accounts.association;

    if association.vault == Pubkey::default() {
        association.vault = ctx.accounts.vault.key();
        association.association = association_wallet;
        association.total_received = 0;
        association.bump = ctx.bumps.association;
    }
    association.whitelisted = whitelisted;

    msg!("Association {} whitelisted: {}", association_wallet, whitelisted);

    emit!(AssociationWhitelistUpdated {
        association: association_wallet,
        whitelisted,
    });

    Ok(())
}
