use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LockupError;
use crate::state::LockupState;
use crate::utils::vesting;

pub fn create_lockup(
    ctx: Context<CreateLockup>,
    beneficiary: Pubkey,
    total_amount: u64,
    cliff_seconds: i64,
    duration_seconds: i64,
    revocable: bool,
) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let lockup_state_ai = ctx.accounts.lockup_state.to_account_info();
    let lockup_state_key = ctx.accounts.lockup_state.key();

    let st = &mut ctx.accounts.lockup_state;
    require!(!st.busy, LockupError::ReentrantCall);
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        LockupError::Unauthorized
    );

    // Duplicate creation is rejected before any parameter validation.
    require!(!st.exists(), LockupError::LockupAlreadyExists);

    require!(
        beneficiary != Pubkey::default(),
        LockupError::InvalidBeneficiary
    );
    // The beneficiary must be able to hold and claim tokens; the program's
    // own PDAs cannot.
    require!(beneficiary != lockup_state_key, LockupError::InvalidBeneficiary);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", lockup_state_key.as_ref()], &crate::ID);
    require!(beneficiary != vault_pda, LockupError::InvalidBeneficiary);

    require!(total_amount > 0, LockupError::InvalidAmount);
    vesting::validate_schedule(cliff_seconds, duration_seconds)?;

    let owner_token = &ctx.accounts.owner_token_account;
    require_keys_eq!(owner_token.mint, st.mint, LockupError::InvalidTokenMint);
    require_keys_eq!(
        owner_token.owner,
        ctx.accounts.owner.key(),
        LockupError::InvalidTokenAccount
    );

    require!(
        owner_token.amount >= total_amount,
        LockupError::InsufficientBalance
    );
    require!(
        owner_token.delegate == COption::Some(lockup_state_key),
        LockupError::InsufficientAllowance
    );
    require!(
        owner_token.delegated_amount >= total_amount,
        LockupError::InsufficientAllowance
    );

    let now = Clock::get()?.unix_timestamp;
    let vault_before = ctx.accounts.vault.amount;

    st.beneficiary = beneficiary;
    st.total_amount = total_amount;
    st.released_amount = 0;
    st.start_ts = now;
    st.cliff_seconds = cliff_seconds;
    st.duration_seconds = duration_seconds;
    st.revocable = revocable;
    st.revoked = false;
    st.vested_at_revoke = 0;
    st.busy = true;

    // Pull from the owner's token account as its approved delegate.
    let signer_seeds: &[&[&[u8]]] = &[&[b"lockup_state", &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: lockup_state_ai,
            },
            signer_seeds,
        ),
        total_amount,
    )?;

    // The vault must have received exactly what was requested; a shortfall
    // (fee-on-transfer mint) aborts the whole instruction.
    ctx.accounts.vault.reload()?;
    let received = ctx
        .accounts
        .vault
        .amount
        .checked_sub(vault_before)
        .ok_or(LockupError::MathOverflow)?;
    require!(
        received == total_amount,
        LockupError::TransferAmountMismatch
    );

    let st = &mut ctx.accounts.lockup_state;
    st.busy = false;

    emit!(LockupCreated {
        beneficiary,
        total_amount,
        start_ts: st.start_ts,
        cliff_seconds,
        duration_seconds,
        revocable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateLockup<'info> {
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
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct LockupCreated {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub duration_seconds: i64,
    pub revocable: bool,
}
