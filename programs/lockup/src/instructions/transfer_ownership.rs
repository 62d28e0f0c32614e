use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::state::LockupState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), LockupError::InvalidOwner);

    let lockup_state_key = ctx.accounts.lockup_state.key();
    let st = &mut ctx.accounts.lockup_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        LockupError::Unauthorized
    );

    // The owner must be able to sign; the program and its PDAs cannot.
    require!(new_owner != lockup_state_key, LockupError::InvalidOwner);
    require!(new_owner != crate::ID, LockupError::InvalidOwner);
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", lockup_state_key.as_ref()], &crate::ID);
    require!(new_owner != vault_pda, LockupError::InvalidOwner);

    let old = st.owner;
    st.owner = new_owner;

    emit!(OwnershipTransferred {
        old_owner: old,
        new_owner,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [b"lockup_state"], bump)]
    pub lockup_state: Account<'info, LockupState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}
