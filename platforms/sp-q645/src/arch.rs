// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 KylinSoft Co., Ltd. <https://www.kylinos.cn/>
// See LICENSES for license details.

//! Wrappers over the synchronization and low-power instructions the
//! transition handlers sequence. Test builds off target get recording
//! stand-ins (an event log plus a plain SCR cell) so the handler tests can
//! check sequencing; other host builds get inert no-ops.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "aarch64")] {
        use aarch64_cpu::asm;
        use aarch64_cpu::asm::barrier;
        use aarch64_cpu::registers::{MPIDR_EL1, Readable, SCR_EL3, Writeable};

        const SCR_IRQ_BIT: u64 = 1 << 1;

        #[inline]
        pub fn dsb_sy() {
            barrier::dsb(barrier::SY);
        }

        #[inline]
        pub fn isb_sy() {
            barrier::isb(barrier::SY);
        }

        #[inline]
        pub fn sev() {
            asm::sev();
        }

        #[inline]
        pub fn wfi() {
            asm::wfi();
        }

        #[inline]
        pub fn current_mpidr() -> u64 {
            MPIDR_EL1.get()
        }

        /// Unmasks the non-secure physical-interrupt wake source, returning
        /// the prior SCR_EL3 value for the caller to restore after the wait.
        #[inline]
        pub fn scr_enable_irq_wake() -> u64 {
            let saved = SCR_EL3.get();
            SCR_EL3.set(saved | SCR_IRQ_BIT);
            saved
        }

        #[inline]
        pub fn scr_restore(saved: u64) {
            SCR_EL3.set(saved);
        }
    } else if #[cfg(test)] {
        use std::sync::{Mutex, MutexGuard};

        const SCR_IRQ_BIT: u64 = 1 << 1;

        static EVENTS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());
        static SCR: Mutex<u64> = Mutex::new(0);

        fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
            // A should_panic test may poison a lock; the data is still usable.
            m.lock().unwrap_or_else(|e| e.into_inner())
        }

        fn event(name: &'static str) {
            lock(&EVENTS).push(name);
        }

        /// Returns the recorded instruction sequence and clears the log.
        pub(crate) fn drain_events() -> Vec<&'static str> {
            core::mem::take(&mut *lock(&EVENTS))
        }

        pub(crate) fn scr_seed(value: u64) {
            *lock(&SCR) = value;
        }

        pub(crate) fn scr_value() -> u64 {
            *lock(&SCR)
        }

        #[inline]
        pub fn dsb_sy() {
            event("dsb");
        }

        #[inline]
        pub fn isb_sy() {
            event("isb");
        }

        #[inline]
        pub fn sev() {
            event("sev");
        }

        #[inline]
        pub fn wfi() {
            event("wfi");
        }

        #[inline]
        pub fn current_mpidr() -> u64 {
            0
        }

        #[inline]
        pub fn scr_enable_irq_wake() -> u64 {
            let mut scr = lock(&SCR);
            let saved = *scr;
            *scr = saved | SCR_IRQ_BIT;
            saved
        }

        #[inline]
        pub fn scr_restore(saved: u64) {
            *lock(&SCR) = saved;
        }
    } else {
        #[inline]
        pub fn dsb_sy() {}

        #[inline]
        pub fn isb_sy() {}

        #[inline]
        pub fn sev() {}

        #[inline]
        pub fn wfi() {}

        #[inline]
        pub fn current_mpidr() -> u64 {
            0
        }

        #[inline]
        pub fn scr_enable_irq_wake() -> u64 {
            0
        }

        #[inline]
        pub fn scr_restore(_saved: u64) {}
    }
}
