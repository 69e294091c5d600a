use std::time::{Duration, Instant};

use typed_builder::TypedBuilder;

use crate::CGB_DOUBLE_SPEED_CLOCK_HZ;

/// Real-time pacing policy for the execution engine.
///
/// The engine hands every batch of charged cycles to its pacer. Pacing never
/// influences emulation results, only how fast they are produced.
pub trait Pacer {
    fn pace(&mut self, cycles: u32);
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pace(&mut self, cycles: u32) {
        (**self).pace(cycles)
    }
}

/// Runs as fast as the host allows. Used by tests and batch runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    #[inline]
    fn pace(&mut self, _cycles: u32) {}
}

/// Throttles execution to a target clock frequency by sleeping.
///
/// Sleeping once per cycle is far below the scheduler's resolution, so the
/// pacer measures emulated time against a wall-clock anchor and only sleeps
/// once the emulation is ahead by at least `min_sleep`.
#[derive(TypedBuilder, Debug)]
pub struct SleepPacer {
    #[builder(default = CGB_DOUBLE_SPEED_CLOCK_HZ)]
    frequency_hz: u32,
    #[builder(default = Duration::from_millis(1))]
    min_sleep: Duration,
    #[builder(default, setter(skip))]
    anchor: Option<Instant>,
    #[builder(default, setter(skip))]
    charged: u64,
}

impl SleepPacer {
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    /// Wall-clock time that `cycles` take at the configured frequency.
    pub fn cycles_to_duration(&self, cycles: u64) -> Duration {
        if self.frequency_hz == 0 {
            return Duration::ZERO;
        }
        let hz = u64::from(self.frequency_hz);
        let secs = cycles / hz;
        let nanos = (cycles % hz) * 1_000_000_000 / hz;
        Duration::new(secs, nanos as u32)
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self, cycles: u32) {
        let anchor = *self.anchor.get_or_insert_with(Instant::now);
        self.charged = self.charged.wrapping_add(u64::from(cycles));

        let emulated = self.cycles_to_duration(self.charged);
        let elapsed = anchor.elapsed();
        if let Some(ahead) = emulated.checked_sub(elapsed) {
            if ahead >= self.min_sleep {
                std::thread::sleep(ahead);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_pacer_defaults_to_cgb_double_speed() {
        let pacer = SleepPacer::builder().build();
        assert_eq!(pacer.frequency_hz(), CGB_DOUBLE_SPEED_CLOCK_HZ);
    }

    #[test]
    fn cycles_convert_to_wall_clock_time() {
        let pacer = SleepPacer::builder().frequency_hz(1_000).build();
        assert_eq!(pacer.cycles_to_duration(1_000), Duration::from_secs(1));
        assert_eq!(pacer.cycles_to_duration(1_500), Duration::from_millis(1_500));
        assert_eq!(pacer.cycles_to_duration(1), Duration::from_millis(1));
    }

    #[test]
    fn zero_frequency_never_sleeps() {
        let mut pacer = SleepPacer::builder().frequency_hz(0).build();
        assert_eq!(pacer.cycles_to_duration(u64::MAX), Duration::ZERO);
        let start = Instant::now();
        pacer.pace(u32::MAX);
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn sleep_pacer_holds_back_to_target_rate() {
        // 4_000 cycles at 100 kHz is 40 ms of emulated time.
        let mut pacer = SleepPacer::builder().frequency_hz(100_000).build();
        let start = Instant::now();
        for _ in 0..1_000 {
            pacer.pace(4);
        }
        assert!(start.elapsed() >= Duration::from_millis(35));
    }

    #[test]
    fn boxed_pacer_forwards() {
        let mut pacer: Box<dyn Pacer> = Box::new(NoPacer);
        pacer.pace(4);
    }
}
