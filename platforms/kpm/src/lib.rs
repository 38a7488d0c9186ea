#![cfg_attr(not(test), no_std)]

//! Power-domain management interface layer for EL3 platform firmware.
//!
//! The generic PSCI dispatcher decides *when* a transition runs and
//! serializes calls per core; this crate defines *what* a platform has to
//! provide for it: the per-level power-state model, request validation, the
//! per-core hold-flag store used to release parked secondaries, and the
//! closed set of transition handlers a platform binds at link time.
//!
//! Platform crates implement [`ops::PowerDomainOps`] (and the collaborator
//! interfaces in [`intr`] and [`sys`]) with [`impl_pm_interface`]; the
//! dispatcher only ever goes through the free functions in [`ops`].

#[macro_use]
extern crate log;

pub mod error;
pub mod hold;
pub mod intr;
pub mod ops;
pub mod pstate;
pub mod state;
pub mod sys;
pub mod validator;

pub use crate_interface::impl_interface as impl_pm_interface;
