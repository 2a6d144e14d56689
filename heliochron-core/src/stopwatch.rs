//! Elapsed-time bookkeeping
//!
//! Whole seconds are counted by the 1 Hz tick interrupt; this module
//! handles the sub-second ends of the measurement window. Start and stop
//! offsets come from the free-running counter below the tick, so a window
//! that straddles a counter wrap needs a borrow: when the stop offset
//! reads lower than the start offset, one second is added and 1000 ms
//! folded into the stop offset before subtracting.

/// Final result of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    /// Whole seconds counted by the tick interrupt, plus the rollover
    /// borrow when one applied
    pub seconds: u16,
    /// Millisecond remainder, 0..=999
    pub millis: u16,
}

/// Sub-second window bookkeeping for one measurement
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    start_millis: u16,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self { start_millis: 0 }
    }

    /// Record the sub-second offset at measurement start
    ///
    /// `subsec_millis` is the clock's position inside the current second,
    /// 0..=999.
    pub fn start(&mut self, subsec_millis: u16) {
        self.start_millis = subsec_millis;
    }

    /// Close the window
    ///
    /// `seconds` is the tick count accumulated since
    /// [`start`](Stopwatch::start); the result folds in the rollover
    /// borrow when the counter wrapped between the two offsets.
    pub fn stop(&self, subsec_millis: u16, seconds: u16) -> ElapsedTime {
        let mut seconds = seconds;
        let mut stop_millis = subsec_millis;
        if stop_millis < self.start_millis {
            seconds = seconds.wrapping_add(1);
            stop_millis += 1000;
        }
        ElapsedTime {
            seconds,
            millis: stop_millis - self.start_millis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_second_window() {
        let mut sw = Stopwatch::new();
        sw.start(200);
        assert_eq!(
            sw.stop(700, 0),
            ElapsedTime {
                seconds: 0,
                millis: 500
            }
        );
    }

    #[test]
    fn test_plain_multi_second_window() {
        let mut sw = Stopwatch::new();
        sw.start(100);
        assert_eq!(
            sw.stop(350, 3),
            ElapsedTime {
                seconds: 3,
                millis: 250
            }
        );
    }

    #[test]
    fn test_counter_wrap_borrows_a_second() {
        // Started at 900 ms into one second, stopped at 100 ms into a
        // later one: the wrap adds a second and the remainder is
        // 100 + 1000 - 900 = 200 ms.
        let mut sw = Stopwatch::new();
        sw.start(900);
        assert_eq!(
            sw.stop(100, 1),
            ElapsedTime {
                seconds: 2,
                millis: 200
            }
        );
    }

    #[test]
    fn test_equal_offsets_do_not_borrow() {
        let mut sw = Stopwatch::new();
        sw.start(450);
        assert_eq!(
            sw.stop(450, 7),
            ElapsedTime {
                seconds: 7,
                millis: 0
            }
        );
    }

    proptest! {
        #[test]
        fn prop_remainder_stays_below_one_second(
            start in 0u16..1000,
            stop in 0u16..1000,
            seconds in 0u16..=u16::MAX - 1,
        ) {
            let mut sw = Stopwatch::new();
            sw.start(start);
            let elapsed = sw.stop(stop, seconds);
            prop_assert!(elapsed.millis < 1000);
        }

        #[test]
        fn prop_borrow_only_on_wrap(
            start in 0u16..1000,
            stop in 0u16..1000,
            seconds in 0u16..1000,
        ) {
            let mut sw = Stopwatch::new();
            sw.start(start);
            let elapsed = sw.stop(stop, seconds);
            let expected = if stop < start { seconds + 1 } else { seconds };
            prop_assert_eq!(elapsed.seconds, expected);
        }
    }
}
