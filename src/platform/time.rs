//! Frame pacing
//!
//! Sleeps away the remainder of each frame so the loop runs at a fixed rate.

use std::time::{Duration, Instant};

use crate::consts::FRAME_DURATION_SECS;

/// Paces a loop to a target frame duration
#[derive(Debug)]
pub struct FramePacer {
    frame: Duration,
    frame_start: Instant,
    /// Frames whose work took longer than the target
    overruns: u64,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(FRAME_DURATION_SECS))
    }
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            frame_start: Instant::now(),
            overruns: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// How long to sleep after `elapsed` of work. `None` on overrun.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// End the current frame: sleep for what is left, then restart the clock
    pub fn finish_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        match self.remaining(elapsed) {
            Some(rest) => std::thread::sleep(rest),
            None => {
                self.overruns += 1;
                log::trace!("Frame overran by {:?}", elapsed - self.frame);
            }
        }
        self.frame_start = Instant::now();
    }
}
