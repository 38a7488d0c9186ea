//! Normalization of encoded power-state requests.
//!
//! Platforms call these from their [`PowerDomainOps`] validation handlers
//! with their own level maximum and normal-world memory window; the routines
//! themselves are pure.
//!
//! [`PowerDomainOps`]: crate::ops::PowerDomainOps

use crate::error::{PmError, PmResult};
use crate::pstate::{PowerStateReq, StateType};
use crate::state::{LocalState, PWR_LVL_COUNT, PowerDomainState, PowerLevel};

/// Translates `req` into per-level target states in `out`.
///
/// The level bound is checked before any other field. Standby is only legal
/// at the core level and normalizes to core-level retention; a powerdown at
/// level `L` marks every level up to and including `L` as off and leaves
/// the rest untouched. Only the canonical zero state-id exists on the
/// platforms this layer serves, so any nonzero id is rejected.
///
/// On `Err` the contents of `out` are unspecified: the state-id check runs
/// after the per-level states are written, so a rejected request may leave
/// `out` partially populated. Callers use it only on `Ok`.
pub fn validate_power_state(
    req: PowerStateReq,
    max_lvl: usize,
    out: &mut PowerDomainState,
) -> PmResult {
    debug_assert!(max_lvl < PWR_LVL_COUNT);

    let lvl = req.power_level();
    if lvl > max_lvl {
        return Err(PmError::InvalidParams);
    }

    match req.state_type() {
        StateType::Standby => {
            // Standby never reaches beyond the calling core.
            if lvl != PowerLevel::Core as usize {
                return Err(PmError::InvalidParams);
            }
            out.set(PowerLevel::Core as usize, LocalState::Retention);
        }
        StateType::Powerdown => out.set_off_through(lvl),
    }

    if req.state_id() != 0 {
        return Err(PmError::InvalidParams);
    }

    Ok(())
}

/// Checks a candidate non-secure resume address against the normal-world
/// window `[base, base + size)`. Both boundary addresses are rejected.
pub fn validate_ns_entrypoint(entry: usize, base: usize, size: usize) -> PmResult {
    if entry > base && entry < base + size {
        Ok(())
    } else {
        Err(PmError::InvalidAddress)
    }
}
