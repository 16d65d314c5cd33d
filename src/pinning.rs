// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CPU pinning of the measuring thread.
//!
//! Pinning the thread that runs the measurements to a single CPU avoids
//! migrations between cores in the middle of a timed run, which makes
//! wall-clock timings steadier on multi-core machines.

#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use crate::macros::log_debug;
use crate::macros::log_warn;
// Platforms that support `libc::sched_setaffinity()`.
#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
use nix::{
    sched::{sched_setaffinity, CpuSet},
    unistd::Pid,
};

/// Policy to pin the measuring thread to a CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuPinningPolicy {
    /// Don't pin the measuring thread to a CPU.
    No,
    /// Pin the measuring thread to a CPU, if CPU pinning is supported and
    /// implemented on this platform.
    IfSupported,
    /// Pin the measuring thread to a CPU. If CPU pinning isn't supported on
    /// this platform (or not implemented), panic.
    Always,
}

/// Applies the given pinning policy to the current thread, pinning it to
/// CPU 0.
#[cfg(all(
    not(miri),
    any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    )
))]
pub fn pin_current_thread(policy: CpuPinningPolicy) {
    match policy {
        CpuPinningPolicy::No => (),
        CpuPinningPolicy::IfSupported => {
            let mut cpu_set = CpuSet::new();
            if let Err(_e) = cpu_set.set(0) {
                log_warn!("Failed to set CPU affinity: {_e}");
            } else if let Err(_e) = sched_setaffinity(Pid::from_raw(0), &cpu_set) {
                log_warn!("Failed to set CPU affinity: {_e}");
            } else {
                log_debug!("Pinned the measuring thread to CPU #0");
            }
        }
        CpuPinningPolicy::Always => {
            let mut cpu_set = CpuSet::new();
            if let Err(e) = cpu_set.set(0) {
                panic!("Failed to set CPU affinity: {e}");
            } else if let Err(e) = sched_setaffinity(Pid::from_raw(0), &cpu_set) {
                panic!("Failed to set CPU affinity: {e}");
            } else {
                log_debug!("Pinned the measuring thread to CPU #0");
            }
        }
    }
}

/// Applies the given pinning policy to the current thread, pinning it to
/// CPU 0.
#[cfg(any(
    miri,
    not(any(
        target_os = "android",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "linux"
    ))
))]
pub fn pin_current_thread(policy: CpuPinningPolicy) {
    match policy {
        CpuPinningPolicy::No => (),
        CpuPinningPolicy::IfSupported => {
            log_warn!("Pinning threads to CPUs is not implemented on this platform.")
        }
        CpuPinningPolicy::Always => {
            panic!("Pinning threads to CPUs is not implemented on this platform.")
        }
    }
}
