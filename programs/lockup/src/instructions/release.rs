use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockupError;
use crate::state::LockupState;
use crate::utils::vesting;

pub fn release(ctx: Context<Release>) -> Result<()> {
    let lockup_state_ai = ctx.accounts.lockup_state.to_account_info();

    let st = &mut ctx.accounts.lockup_state;
    require!(!st.busy, LockupError::ReentrantCall);
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        st.beneficiary,
        LockupError::Unauthorized
    );

    // Strict destination checks (pre-created token account policy).
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        st.mint,
        LockupError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        st.beneficiary,
        LockupError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let releasable = vesting::releasable_amount(st, now)?;
    require!(releasable > 0, LockupError::NoTokensAvailable);

    require!(
        ctx.accounts.vault.amount >= releasable,
        LockupError::InsufficientBalance
    );

    // Effects before interactions: the running total moves ahead of the CPI.
    st.released_amount = st
        .released_amount
        .checked_add(releasable)
        .ok_or(LockupError::MathOverflow)?;
    st.busy = true;

    let signer_seeds: &[&[&[u8]]] = &[&[b"lockup_state", &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: lockup_state_ai,
            },
            signer_seeds,
        ),
        releasable,
    )?;

    let st = &mut ctx.accounts.lockup_state;
    st.busy = false;

    emit!(TokensReleased {
        beneficiary: st.beneficiary,
        amount: releasable,
        released_total: st.released_amount,
        total_amount: st.total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"lockup_state"], bump)]
    pub lockup_state: Account<'info, LockupState>,

    #[account(
        mut,
        seeds = [b"vault", lockup_state.key().as_ref()],
        bump,
        constraint = vault.mint == lockup_state.mint @ LockupError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
    pub total_amount: u64,
}
