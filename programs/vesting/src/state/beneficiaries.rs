use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;

/// A single beneficiary entry stored in the beneficiaries list PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeneficiaryEntry {
    pub wallet: Pubkey,
    /// Allotment fixed when the set is locked; never mutated afterwards.
    pub initial_amount: u64,
    /// Remaining unreleased amount; monotonically decreases toward zero.
    pub current_amount: u64,
}

impl BeneficiaryEntry {
    pub const SIZE: usize = 32 + 8 + 8;

    /// Total already released to this beneficiary.
    pub fn withdrawn(&self) -> u64 {
        // current_amount <= initial_amount is a ledger invariant.
        self.initial_amount.saturating_sub(self.current_amount)
    }
}

/// PDA holding the full beneficiaries list (<= 35 entries).
#[account]
pub struct Beneficiaries {
    pub entries: [BeneficiaryEntry; MAX_BENEFICIARIES],
}

impl Beneficiaries {
    pub const SIZE: usize = BeneficiaryEntry::SIZE * MAX_BENEFICIARIES;
}

/// Instruction input (wallet + allotment), replacing the parallel
/// accounts[]/amounts[] arrays of the wire interface.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeneficiaryInput {
    pub wallet: Pubkey,
    pub amount: u64,
}
