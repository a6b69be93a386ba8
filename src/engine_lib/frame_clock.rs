// src/engine_lib/frame_clock.rs

use std::time::{Duration, Instant};

/// Paces the simulation to one step per frame delay. The event loop can wake
/// many times between frames; only a wake at or past the deadline is a frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    delay: Duration,
    next_frame: Option<Instant>,
}

impl FrameClock {
    pub fn new(delay: Duration) -> Self {
        Self { delay, next_frame: None }
    }

    /// Returns true and schedules the following frame if one is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_frame {
            Some(deadline) if now < deadline => false,
            _ => {
                self.next_frame = Some(now + self.delay);
                true
            }
        }
    }

    pub fn next_frame(&self) -> Option<Instant> {
        self.next_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_lib::demo_cell::create_demo_cell;
    use crate::engine_lib::geometry::Point2;
    use crate::engine_lib::player::{MoveInput, Player};

    const DELAY: Duration = Duration::from_millis(1);

    #[test]
    fn first_wake_is_a_frame() {
        let mut clock = FrameClock::new(DELAY);
        let t0 = Instant::now();
        assert!(clock.next_frame().is_none());
        assert!(clock.tick(t0));
        assert_eq!(clock.next_frame(), Some(t0 + DELAY));
    }

    #[test]
    fn early_wakes_are_skipped() {
        let mut clock = FrameClock::new(DELAY);
        let t0 = Instant::now();
        assert!(clock.tick(t0));
        assert!(!clock.tick(t0 + Duration::from_micros(300)));
        assert!(!clock.tick(t0 + Duration::from_micros(999)));
        assert!(clock.tick(t0 + DELAY));
        assert_eq!(clock.next_frame(), Some(t0 + DELAY * 2));
    }

    #[test]
    fn extra_wakes_do_not_advance_the_player() {
        let mut clock = FrameClock::new(DELAY);
        let mut player = Player::new(Point2::ZERO, 0.0, &create_demo_cell());
        let forward = MoveInput::new(1.0, 0.0, 0.0);
        let t0 = Instant::now();

        // Two frames, each followed by a burst of input-driven wake-ups.
        for frame in 0..2u32 {
            let frame_start = t0 + DELAY * frame;
            for offset_us in [0u64, 100, 300, 700] {
                if clock.tick(frame_start + Duration::from_micros(offset_us)) {
                    player.movement(forward);
                }
            }
        }

        assert!((player.position() - Point2::new(0.0, 0.2)).length() < 1e-6);
    }
}
