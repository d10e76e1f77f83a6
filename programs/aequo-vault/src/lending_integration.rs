use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::errors::VaultError;

/// Anchor discriminator of the lending program's `Reserve` account
pub const RESERVE_ACCOUNT_DISCRIMINATOR: [u8; 8] = [43, 242, 204, 202, 26, 247, 59, 127];

/// Instruction discriminators (`global:supply`, `global:withdraw`)
pub const SUPPLY_DISCRIMINATOR: [u8; 8] = [81, 67, 116, 61, 250, 209, 5, 198];
pub const WITHDRAW_DISCRIMINATOR: [u8; 8] = [183, 18, 70, 156, 148, 109, 161, 34];

/// Lending reserve state, mirrored from the lending program
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LendingReserve {
    pub authority: Pubkey,
    pub underlying_mint: Pubkey,
    pub a_token_mint: Pubkey,
    pub liquidity_supply: Pubkey,
    pub total_supplied: u64,
    pub bump: u8,
    pub padding: [u8; 7],
}

/// Helper to deserialize the reserve safely
pub fn deserialize_reserve(account: &AccountInfo, lending_program: &Pubkey) -> Result<LendingReserve> {
    require_keys_eq!(
        *account.owner,
        *lending_program,
        VaultError::InvalidLendingReserve
    );

    let size = std::mem::size_of::<LendingReserve>();
    if account.data_len() < 8 + size {
        return Err(VaultError::InvalidLendingReserve.into());
    }

    let data = account.try_borrow_data()?;
    require!(
        data[..8] == RESERVE_ACCOUNT_DISCRIMINATOR,
        VaultError::InvalidLendingReserve
    );

    let reserve = bytemuck::try_pod_read_unaligned::<LendingReserve>(&data[8..8 + size])
        .map_err(|_| VaultError::InvalidLendingReserve)?;

    Ok(reserve)
}

/// Check that the reserve lends `asset_mint` and issues `a_token_mint`
pub fn validate_reserve(
    reserve: &LendingReserve,
    asset_mint: &Pubkey,
    a_token_mint: &Pubkey,
) -> Result<()> {
    require_keys_eq!(
        reserve.underlying_mint,
        *asset_mint,
        VaultError::InvalidLendingReserve
    );
    require_keys_eq!(
        reserve.a_token_mint,
        *a_token_mint,
        VaultError::InvalidATokenMint
    );
    Ok(())
}

pub fn instruction_data(discriminator: [u8; 8], amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&discriminator);
    data.extend_from_slice(&amount.to_le_bytes());
    data
}

/// CPI helpers for the lending program
pub mod cpi {
    use super::*;

    /// Move `amount` of the underlying from `source` into the reserve.
    /// aTokens are minted 1:1 into `a_token_destination`.
    pub fn supply<'info>(
        lending_program: AccountInfo<'info>,
        reserve: AccountInfo<'info>,
        a_token_mint: AccountInfo<'info>,
        liquidity_supply: AccountInfo<'info>,
        source: AccountInfo<'info>,
        a_token_destination: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        invoke_reserve(
            SUPPLY_DISCRIMINATOR,
            lending_program,
            reserve,
            a_token_mint,
            liquidity_supply,
            source,
            a_token_destination,
            authority,
            token_program,
            amount,
            signer_seeds,
        )
    }

    /// Burn `amount` aTokens from `a_token_source` and send the same amount
    /// of the underlying to `destination`.
    pub fn withdraw<'info>(
        lending_program: AccountInfo<'info>,
        reserve: AccountInfo<'info>,
        a_token_mint: AccountInfo<'info>,
        liquidity_supply: AccountInfo<'info>,
        a_token_source: AccountInfo<'info>,
        destination: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        invoke_reserve(
            WITHDRAW_DISCRIMINATOR,
            lending_program,
            reserve,
            a_token_mint,
            liquidity_supply,
            a_token_source,
            destination,
            authority,
            token_program,
            amount,
            signer_seeds,
        )
    }

    // supply and withdraw share one account layout
    fn invoke_reserve<'info>(
        discriminator: [u8; 8],
        lending_program: AccountInfo<'info>,
        reserve: AccountInfo<'info>,
        a_token_mint: AccountInfo<'info>,
        liquidity_supply: AccountInfo<'info>,
        from: AccountInfo<'info>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        let accounts = vec![
            AccountMeta::new(reserve.key(), false),
            AccountMeta::new(a_token_mint.key(), false),
            AccountMeta::new(liquidity_supply.key(), false),
            AccountMeta::new(from.key(), false),
            AccountMeta::new(to.key(), false),
            AccountMeta::new_readonly(authority.key(), true),
            AccountMeta::new_readonly(token_program.key(), false),
        ];

        let instruction = solana_program::instruction::Instruction {
            program_id: lending_program.key(),
            accounts,
            data: instruction_data(discriminator, amount),
        };

        solana_program::program::invoke_signed(
            &instruction,
            &[
                reserve,
                a_token_mint,
                liquidity_supply,
                from,
                to,
                authority,
                token_program,
                lending_program,
            ],
            signer_seeds,
        )?;

        Ok(())
    }
}
