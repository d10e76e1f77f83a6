use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::VaultError,
    events::OwnershipTransferred,
    state::Vault,
};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.creator.as_ref(), vault.asset_mint.as_ref()],
        bump = vault.bump,
        has_one = owner @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    pub owner: Signer<'info>,
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), VaultError::InvalidOwner);

    let vault = &mut ctx.accounts.vault;
    let previous_owner = vault.owner;
    vault.owner = new_owner;

    msg!("Vault ownership transferred from {} to {}", previous_owner, new_owner);

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    Ok(())
}
