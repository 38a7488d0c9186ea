// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Watchdog-backed system reset.

use kpm::{intr, sys};

use crate::{arch, config};

/// G0 registers take a mask in the upper half-word and the value in the
/// lower; writing both applies only the masked bits.
const fn rf_mask_v_set(bits: u32) -> u32 {
    bits << 16 | bits
}

#[inline]
fn mmio_write_32(addr: usize, val: u32) {
    // SAFETY: `addr` is one of the device registers named in `config`.
    unsafe { (addr as *mut u32).write_volatile(val) };
}

/// Two-stage reset: the STC watchdog is armed with a one-tick countdown and
/// given a grace period to pull the reset line; if the system is somehow
/// still running afterwards, the abort at the end is the guaranteed
/// fallback. Never returns.
pub fn watchdog_reset() -> ! {
    intr::disable_cpu_interface();
    sys::console_flush();

    mmio_write_32(config::RESET_REQ, rf_mask_v_set(config::RESET_REQ_BIT));

    mmio_write_32(config::WDG_ENABLE, config::WDG_ENABLE_VAL);
    mmio_write_32(config::WDG_CTRL, config::WDG_CMD_STOP);
    mmio_write_32(config::WDG_CTRL, config::WDG_CMD_UNLOCK);
    mmio_write_32(config::WDG_CNT, config::WDG_COUNTDOWN);
    mmio_write_32(config::WDG_CTRL, config::WDG_CMD_RESUME);

    arch::dsb_sy();
    arch::isb_sy();

    sys::mdelay(config::RESET_GRACE_MS);

    arch::wfi();
    error!("system reset: watchdog did not fire");
    panic!("unhandled system reset");
}
