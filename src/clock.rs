use std::time::Duration;

/// Turns a host's monotonic timestamps into timesteps the scene will accept.
pub struct FrameClock {
    last: Option<Duration>,
    max_step: f32,
}

impl FrameClock {
    pub fn new(max_step: f32) -> Self {
        FrameClock {
            last: None,
            max_step,
        }
    }

    pub fn tick(&mut self, now: Duration) -> f32 {
        let dt = match self.last {
            Some(last) if now >= last => (now - last).as_secs_f32(),
            // first tick, or a timestamp that went backwards
            _ => 0.0,
        };
        self.last = Some(now);

        if dt > self.max_step {
            eprintln!("capping frame step {} to {}", dt, self.max_step);
            self.max_step
        } else {
            dt
        }
    }
}
