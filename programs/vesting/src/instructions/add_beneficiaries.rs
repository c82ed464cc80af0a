use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;
use crate::error::VestingError;
use crate::state::{BeneficiaryEntry, BeneficiaryInput, Beneficiaries, VestingState};

/// Add or overwrite allotments while the set is unlocked. A repeated wallet
/// replaces its previous allotment outright (initial and current both reset);
/// amounts never accumulate.
pub fn add_beneficiaries(
    ctx: Context<AddBeneficiaries>,
    inputs: Vec<BeneficiaryInput>,
) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    require!(!st.is_locked(), VestingError::BeneficiariesLocked);

    let beneficiaries = &mut ctx.accounts.beneficiaries;
    let mut added: u8 = 0;
    let mut overwritten: u8 = 0;

    for input in inputs.iter() {
        require!(input.wallet != Pubkey::default(), VestingError::InvalidPubkey);
        require!(input.amount > 0, VestingError::InvalidAllocation);

        let existing = beneficiaries
            .entries
            .iter()
            .take(st.beneficiary_count as usize)
            .position(|e| e.wallet == input.wallet);

        match existing {
            Some(idx) => {
                let entry = &mut beneficiaries.entries[idx];
                entry.initial_amount = input.amount;
                entry.current_amount = input.amount;
                overwritten = overwritten
                    .checked_add(1)
                    .ok_or(VestingError::MathOverflow)?;
            }
            None => {
                require!(
                    (st.beneficiary_count as usize) < MAX_BENEFICIARIES,
                    VestingError::BeneficiaryListFull
                );
                let idx = st.beneficiary_count as usize;
                beneficiaries.entries[idx] = BeneficiaryEntry {
                    wallet: input.wallet,
                    initial_amount: input.amount,
                    current_amount: input.amount,
                };
                st.beneficiary_count = st
                    .beneficiary_count
                    .checked_add(1)
                    .ok_or(VestingError::MathOverflow)?;
                added = added.checked_add(1).ok_or(VestingError::MathOverflow)?;
            }
        }
    }

    emit!(BeneficiariesAdded {
        count_added: added,
        count_overwritten: overwritten,
        new_total: st.beneficiary_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiaries<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiariesAdded {
    pub count_added: u8,
    pub count_overwritten: u8,
    pub new_total: u8,
}
