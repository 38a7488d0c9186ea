// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Power-domain sequencing for the SP q645 SoC.
//!
//! Implements [`kpm::ops::PowerDomainOps`]: hold-flag release of parked
//! secondaries, GIC teardown/bring-up ordering around off/suspend, core
//! standby, and the terminal shutdown/reset paths. The interrupt-controller
//! driver and the cold-boot loop are collaborators bound through the `kpm`
//! interfaces by the board integration.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod arch;
pub mod config;
mod pm;
mod reset;

#[cfg(test)]
mod tests;
