// Copyright 2025 Helium Client Contributors
// SPDX-License-Identifier: Apache-2.0

/// Blocking delays for protocol timing
pub trait DelayProvider {
    /// Suspend the calling thread for at least `us` microseconds
    ///
    /// Best effort: there is no upper bound and the delay cannot be cancelled.
    fn delay_us(&self, us: u32);

    /// Suspend the calling thread for at least `ms` milliseconds
    ///
    /// The default issues `ms` separate 1 ms delays, so the overshoot grows
    /// with the requested duration. Platforms that can sleep for the whole
    /// span at once should override it.
    fn delay_ms(&self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
