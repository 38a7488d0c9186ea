//! Encoded power-state requests.
//!
//! Callers hand the dispatcher an opaque 32-bit `power_state` value using
//! the default PSCI layout: state-id in bits [15:0], the state type in bit
//! 16 and the target power level in bits [25:24]. The value is consumed
//! once by the platform validator and never persisted.

const STATE_ID_MASK: u32 = 0xffff;
const TYPE_SHIFT: u32 = 16;
const PWR_LVL_SHIFT: u32 = 24;
const PWR_LVL_MASK: u32 = 0x3;

/// Requested kind of low-power state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateType {
    /// Context-preserving standby (retention).
    Standby,
    /// Full power-down of the targeted levels.
    Powerdown,
}

/// An encoded power-state request as received from the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PowerStateReq(u32);

impl PowerStateReq {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Builds an encoding from its fields. Used by dispatchers that have to
    /// synthesize a request (e.g. for a default system suspend).
    pub fn from_fields(ty: StateType, lvl: usize, id: u32) -> Self {
        let ty_bit = match ty {
            StateType::Standby => 0,
            StateType::Powerdown => 1 << TYPE_SHIFT,
        };
        Self(ty_bit | ((lvl as u32 & PWR_LVL_MASK) << PWR_LVL_SHIFT) | (id & STATE_ID_MASK))
    }

    pub fn state_type(self) -> StateType {
        if self.0 >> TYPE_SHIFT & 1 == 0 {
            StateType::Standby
        } else {
            StateType::Powerdown
        }
    }

    /// Requested target level, not yet checked against the platform maximum.
    pub fn power_level(self) -> usize {
        (self.0 >> PWR_LVL_SHIFT & PWR_LVL_MASK) as usize
    }

    pub fn state_id(self) -> u32 {
        self.0 & STATE_ID_MASK
    }
}
