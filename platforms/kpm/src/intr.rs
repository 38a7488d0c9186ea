//! Interrupt-controller collaborator interface.
//!
//! The transition handlers only sequence *when* the controller is torn down
//! or brought back; the driver itself belongs to the platform integration
//! and binds here at link time.

use crate_interface::{call_interface, def_interface};

#[def_interface]
pub trait IntrCtrl {
    /// Stops interrupt delivery to the calling core.
    fn disable_cpu_interface();

    /// Resumes interrupt delivery to the calling core.
    fn enable_cpu_interface();

    /// Re-initializes the calling core's private view of the distributor
    /// after its context was lost.
    fn init_pcpu_distif();

    /// Full re-initialization of the shared distributor after system-level
    /// power loss.
    fn init_distif();
}

#[inline]
pub fn disable_cpu_interface() {
    call_interface!(IntrCtrl::disable_cpu_interface)
}

#[inline]
pub fn enable_cpu_interface() {
    call_interface!(IntrCtrl::enable_cpu_interface)
}

#[inline]
pub fn init_pcpu_distif() {
    call_interface!(IntrCtrl::init_pcpu_distif)
}

#[inline]
pub fn init_distif() {
    call_interface!(IntrCtrl::init_distif)
}
