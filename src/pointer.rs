use crate::body::{BodyArena, BodyHandle};
use glam::Vec2;

// release velocity is scaled against an assumed display cadence, not the
// measured frame interval
const ASSUMED_FRAME_RATE: f32 = 60.0;

#[derive(Copy, Clone, Debug)]
struct Grab {
    handle: BodyHandle,
    offset: Vec2,
}

#[derive(Debug)]
pub struct PointerTracker {
    position: Vec2,
    prev_position: Vec2,
    grab: Option<Grab>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker {
            position: Vec2::ZERO,
            prev_position: Vec2::ZERO,
            grab: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn held(&self) -> Option<BodyHandle> {
        self.grab.map(|grab| grab.handle)
    }

    pub fn press(&mut self, position: Vec2, bodies: &mut BodyArena) {
        let position = match finite(position) {
            Some(position) => position,
            None => return,
        };
        self.position = position;
        self.prev_position = position;

        // topmost body under the pointer wins
        let hit = bodies
            .draw_order()
            .iter()
            .rev()
            .copied()
            .find(|&handle| bodies.get_body(handle).contains(position));

        if let Some(handle) = hit {
            let body = bodies.get_body_mut(handle);
            let offset = position - body.position;
            body.velocity = Vec2::ZERO;
            bodies.raise_to_top(handle);
            self.grab = Some(Grab { handle, offset });
        }
    }

    pub fn drag(&mut self, position: Vec2, bodies: &mut BodyArena) {
        let position = match finite(position) {
            Some(position) => position,
            None => return,
        };
        self.prev_position = self.position;
        self.position = position;

        if let Some(grab) = self.grab {
            bodies.get_body_mut(grab.handle).position = position - grab.offset;
        }
    }

    pub fn release(&mut self, throw_force: f32, bodies: &mut BodyArena) {
        if let Some(grab) = self.grab.take() {
            let body = bodies.get_body_mut(grab.handle);
            body.velocity = (self.position - self.prev_position) * throw_force / ASSUMED_FRAME_RATE;
        }
    }
}

// non-finite pointer coordinates count as "pointer far away"
fn finite(position: Vec2) -> Option<Vec2> {
    if position.is_finite() {
        Some(position)
    } else {
        None
    }
}
