use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

declare_id!("8Gn1ejhmz4Jb91RKFAkNMTNbWj4jqEMUXzXL5ibyXWD5");

pub const RESERVE_SEED: &[u8] = b"reserve";
pub const A_TOKEN_MINT_SEED: &[u8] = b"a_token";
pub const LIQUIDITY_SUPPLY_SEED: &[u8] = b"liquidity";

#[program]
pub mod mock_lending_pool {
    use super::*;

    /// Mock lending pool for Localnet verification.
    ///
    /// NOTE: This is for LOCALNET TESTING ONLY.
    ///
    /// It mirrors the supply/withdraw surface of an Aave-style pool: supplied
    /// liquidity is held by the reserve and aTokens are minted 1:1. Interest is
    /// simulated with `accrue_yield`, which mints aTokens against donated liquidity.
    pub fn init_reserve(ctx: Context<InitReserve>) -> Result<()> {
        let reserve = &mut ctx.accounts.reserve;
        reserve.authority = ctx.accounts.authority.key();
        reserve.underlying_mint = ctx.accounts.underlying_mint.key();
        reserve.a_token_mint = ctx.accounts.a_token_mint.key();
        reserve.liquidity_supply = ctx.accounts.liquidity_supply.key();
        reserve.total_supplied = 0;
        reserve.bump = ctx.bumps.reserve;
        reserve._padding = [0u8; 7];

        msg!(
            "MockLendingPool: reserve for {} initialized",
            reserve.underlying_mint
        );

        Ok(())
    }

    pub fn supply(ctx: Context<Supply>, amount: u64) -> Result<()> {
        require!(amount > 0, MockLendingError::InvalidAmount);

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.source.to_account_info(),
                    to: ctx.accounts.liquidity_supply.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            amount,
        )?;

        let underlying_mint = ctx.accounts.reserve.underlying_mint;
        let reserve_seeds = &[
            RESERVE_SEED,
            underlying_mint.as_ref(),
            &[ctx.accounts.reserve.bump],
        ];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.a_token_mint.to_account_info(),
                    to: ctx.accounts.a_token_destination.to_account_info(),
                    authority: ctx.accounts.reserve.to_account_info(),
                },
                &[reserve_seeds],
            ),
            amount,
        )?;

        let reserve = &mut ctx.accounts.reserve;
        reserve.total_supplied = reserve
            .total_supplied
            .checked_add(amount)
            .ok_or(MockLendingError::MathOverflow)?;

        msg!("MockLendingPool: supplied {}", amount);

        Ok(())
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        require!(amount > 0, MockLendingError::InvalidAmount);
        require!(
            ctx.accounts.liquidity_supply.amount >= amount,
            MockLendingError::InsufficientLiquidity
        );

        token::burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.a_token_mint.to_account_info(),
                    from: ctx.accounts.a_token_source.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            amount,
        )?;

        let underlying_mint = ctx.accounts.reserve.underlying_mint;
        let reserve_seeds = &[
            RESERVE_SEED,
            underlying_mint.as_ref(),
            &[ctx.accounts.reserve.bump],
        ];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.liquidity_supply.to_account_info(),
                    to: ctx.accounts.destination.to_account_info(),
                    authority: ctx.accounts.reserve.to_account_info(),
                },
                &[reserve_seeds],
            ),
            amount,
        )?;

        let reserve = &mut ctx.accounts.reserve;
        reserve.total_supplied = reserve.total_supplied.saturating_sub(amount);

        msg!("MockLendingPool: withdrew {}", amount);

        Ok(())
    }

    /// Simulate interest: `donor` funds the reserve and `beneficiary` receives
    /// the same amount of aTokens.
    pub fn accrue_yield(ctx: Context<AccrueYield>, amount: u64) -> Result<()> {
        require!(amount > 0, MockLendingError::InvalidAmount);

        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.donor_token_account.to_account_info(),
                    to: ctx.accounts.liquidity_supply.to_account_info(),
                    authority: ctx.accounts.donor.to_account_info(),
                },
            ),
            amount,
        )?;

        let underlying_mint = ctx.accounts.reserve.underlying_mint;
        let reserve_seeds = &[
            RESERVE_SEED,
            underlying_mint.as_ref(),
            &[ctx.accounts.reserve.bump],
        ];

        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.a_token_mint.to_account_info(),
                    to: ctx.accounts.beneficiary.to_account_info(),
                    authority: ctx.accounts.reserve.to_account_info(),
                },
                &[reserve_seeds],
            ),
            amount,
        )?;

        msg!(
            "MockLendingPool: accrued {} to {}",
            amount,
            ctx.accounts.beneficiary.key()
        );

        Ok(())
    }
}

#[account]
#[derive(Debug)]
pub struct Reserve {
    pub authority: Pubkey,
    pub underlying_mint: Pubkey,
    pub a_token_mint: Pubkey,
    pub liquidity_supply: Pubkey,
    pub total_supplied: u64,
    pub bump: u8,
    /// Keeps the layout free of implicit padding for zero-copy readers
    pub _padding: [u8; 7],
}

impl Reserve {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        32 + // underlying_mint
        32 + // a_token_mint
        32 + // liquidity_supply
        8 + // total_supplied
        1 + // bump
        7; // _padding
}

#[derive(Accounts)]
pub struct InitReserve<'info> {
    pub underlying_mint: Account<'info, Mint>,

    #[account(
        init,
        seeds = [RESERVE_SEED, underlying_mint.key().as_ref()],
        bump,
        payer = authority,
        space = Reserve::SIZE,
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        init,
        seeds = [A_TOKEN_MINT_SEED, reserve.key().as_ref()],
        bump,
        payer = authority,
        mint::decimals = underlying_mint.decimals,
        mint::authority = reserve,
    )]
    pub a_token_mint: Account<'info, Mint>,

    #[account(
        init,
        seeds = [LIQUIDITY_SUPPLY_SEED, reserve.key().as_ref()],
        bump,
        payer = authority,
        token::mint = underlying_mint,
        token::authority = reserve,
    )]
    pub liquidity_supply: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

/// Account order is shared with `Withdraw`; callers build both with one layout.
#[derive(Accounts)]
pub struct Supply<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        mut,
        constraint = a_token_mint.key() == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub a_token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = liquidity_supply.key() == reserve.liquidity_supply @ MockLendingError::InvalidLiquiditySupply,
    )]
    pub liquidity_supply: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = source.mint == reserve.underlying_mint @ MockLendingError::MintMismatch,
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = a_token_destination.mint == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub a_token_destination: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        mut,
        constraint = a_token_mint.key() == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub a_token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = liquidity_supply.key() == reserve.liquidity_supply @ MockLendingError::InvalidLiquiditySupply,
    )]
    pub liquidity_supply: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = a_token_source.mint == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub a_token_source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == reserve.underlying_mint @ MockLendingError::MintMismatch,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct AccrueYield<'info> {
    #[account(
        seeds = [RESERVE_SEED, reserve.underlying_mint.as_ref()],
        bump = reserve.bump,
    )]
    pub reserve: Account<'info, Reserve>,

    #[account(
        mut,
        constraint = a_token_mint.key() == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub a_token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = liquidity_supply.key() == reserve.liquidity_supply @ MockLendingError::InvalidLiquiditySupply,
    )]
    pub liquidity_supply: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = donor_token_account.mint == reserve.underlying_mint @ MockLendingError::MintMismatch,
    )]
    pub donor_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary.mint == reserve.a_token_mint @ MockLendingError::MintMismatch,
    )]
    pub beneficiary: Account<'info, TokenAccount>,

    pub donor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[error_code]
pub enum MockLendingError {
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Token mint does not match the reserve.")]
    MintMismatch,
    #[msg("Liquidity supply does not match the reserve.")]
    InvalidLiquiditySupply,
    #[msg("Not enough liquidity in the reserve.")]
    InsufficientLiquidity,
    #[msg("Math overflow in amount calculation.")]
    MathOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::Discriminator;

    #[test]
    fn test_reserve_layout_is_stable() {
        // 4 pubkeys + u64 + u8 + padding, read zero-copy by integrators
        assert_eq!(Reserve::SIZE, 8 + 144);
        assert_eq!(Reserve::DISCRIMINATOR, [43, 242, 204, 202, 26, 247, 59, 127]);
    }

    #[test]
    fn test_instruction_discriminators_are_stable() {
        assert_eq!(
            instruction::Supply::DISCRIMINATOR,
            [81, 67, 116, 61, 250, 209, 5, 198]
        );
        assert_eq!(
            instruction::Withdraw::DISCRIMINATOR,
            [183, 18, 70, 156, 148, 109, 161, 34]
        );
    }
}
