//! Fee gate: a lamport charge collected before a gated operation runs.
//!
//! Kept decoupled from the accounting core; handlers pass in the configured
//! fee and the collector account and call this first.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Collect `fee` lamports from `payer` into `collector`. A fee of zero
/// passes the gate without a transfer.
pub fn collect<'info>(
    fee: u64,
    payer: &Signer<'info>,
    collector: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    if fee == 0 {
        return Ok(());
    }
    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: payer.to_account_info(),
                to: collector.to_account_info(),
            },
        ),
        fee,
    )
}
