use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LockupError;
use crate::state::LockupState;

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    // A non-mint account already fails `Account<Mint>` deserialization; the
    // zero address is rejected explicitly.
    require!(
        ctx.accounts.mint.key() != Pubkey::default(),
        LockupError::InvalidTokenAddress
    );

    let st = &mut ctx.accounts.lockup_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.beneficiary = Pubkey::default();
    st.total_amount = 0;
    st.released_amount = 0;
    st.start_ts = 0;
    st.cliff_seconds = 0;
    st.duration_seconds = 0;
    st.revocable = false;
    st.revoked = false;
    st.vested_at_revoke = 0;
    st.busy = false;
    st.bump = ctx.bumps.lockup_state;

    emit!(LockupInitialized {
        mint: st.mint,
        owner: st.owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + LockupState::SIZE,
        seeds = [b"lockup_state"],
        bump
    )]
    pub lockup_state: Account<'info, LockupState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = lockup_state,
        seeds = [b"vault", lockup_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LockupInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
}
