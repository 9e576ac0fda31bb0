use crate::{
    body::{Body, BodyArena, BodyHandle},
    catalog::PartSpec,
    config::SceneConfig,
    intersect::aabb_overlap,
    pointer::PointerTracker,
    render::{draw_body, Surface},
};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub struct Scene {
    bodies: BodyArena,
    config: SceneConfig,
    pointer: PointerTracker,
    rng: Pcg32,
    gravity_on: bool,
    viewport: Vec2,
    visible: bool,
}

impl Scene {
    pub fn new(config: SceneConfig, catalog: &[PartSpec], viewport: Vec2) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let mut bodies = BodyArena::new();

        let count = if catalog.is_empty() {
            0
        } else {
            config.body_count_for(viewport.x)
        };

        for i in 0..count {
            let spec = &catalog[i % catalog.len()];

            // keep the spawn area inside the padded viewport
            let padding = Vec2::splat(config.spawn_padding);
            let span = (viewport - spec.size - padding * 2.0).max(Vec2::ZERO);
            let position =
                padding + Vec2::new(rng.gen::<f32>() * span.x, rng.gen::<f32>() * span.y);

            let mut body = Body::from_spec(spec, position, config.restitution);
            body.velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * config.spawn_speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * config.spawn_speed,
            );
            body.rotation = rng.gen::<f32>() * std::f32::consts::TAU;
            body.rotation_speed = (rng.gen::<f32>() - 0.5) * 0.5;
            body.float_phase = rng.gen::<f32>() * std::f32::consts::TAU;
            body.float_speed = config.float_speed + rng.gen::<f32>() * config.float_speed_jitter;
            body.target_opacity = config.target_opacity;
            bodies.add(body);
        }

        Scene {
            bodies,
            config,
            pointer: PointerTracker::new(),
            rng,
            gravity_on: false,
            viewport,
            visible: true,
        }
    }

    pub fn update(&mut self, dt: f32) {
        // large gaps (tab resume) would destabilize the integration
        let dt = dt.max(0.0).min(self.config.max_step);

        let config = self.config;
        let viewport = self.viewport;
        let gravity_on = self.gravity_on;
        let held = self.pointer.held();

        for (index, body) in self.bodies.iter_mut().enumerate() {
            // fades advance for every body, held or not
            body.fade_in(config.fade_rate * dt);

            if Some(BodyHandle(index as u32)) == held {
                continue;
            }

            if gravity_on {
                body.velocity.y += config.gravity * dt;
                body.rotation_speed *= 0.99;
            } else {
                // gentle per-body oscillation
                body.float_phase += body.float_speed * dt;
                body.velocity.y += body.float_phase.sin() * config.float_amplitude * dt;
                body.velocity.x +=
                    (body.float_phase * 0.7).cos() * config.float_amplitude * 0.5 * dt;

                body.velocity *= config.float_damping;
            }

            body.advance(dt);
            body.velocity *= config.damping;
        }

        // one pass over every free pair, in draw order
        let order = self.bodies.draw_order().to_vec();
        for i in 0..order.len() {
            if Some(order[i]) == held {
                continue;
            }
            for j in (i + 1)..order.len() {
                if Some(order[j]) == held {
                    continue;
                }
                resolve_pair(&mut self.bodies, order[i], order[j]);
            }
        }

        // boundary resolution runs last so a frame always ends in bounds,
        // even when a pair separation pushed a body outward
        if viewport.x > 0.0 && viewport.y > 0.0 {
            for (index, body) in self.bodies.iter_mut().enumerate() {
                if Some(BodyHandle(index as u32)) == held {
                    continue;
                }
                resolve_bounds(body, viewport, &config);
            }
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for &handle in self.bodies.draw_order() {
            draw_body(self.bodies.get_body(handle), surface);
        }
    }

    pub fn frame(&mut self, dt: f32, surface: &mut dyn Surface) {
        // off-screen scenes pause rather than tear down
        if !self.visible {
            return;
        }
        self.update(dt);
        self.render(surface);
    }

    pub fn set_gravity(&mut self, on: bool) {
        // repeated UI events must not stack impulses
        if self.gravity_on == on {
            return;
        }
        self.gravity_on = on;

        let held = self.pointer.held();
        for (index, body) in self.bodies.iter_mut().enumerate() {
            if Some(BodyHandle(index as u32)) == held {
                continue;
            }
            if on {
                // scatter so the drop reads as an event, not a freeze-frame
                body.velocity.y -= 50.0 + self.rng.gen::<f32>() * 150.0;
                body.velocity.x += (self.rng.gen::<f32>() - 0.5) * 200.0;
            } else {
                // lift settled bodies back off the floor
                body.velocity.y = -(100.0 + self.rng.gen::<f32>() * 200.0);
                body.velocity.x = (self.rng.gen::<f32>() - 0.5) * 100.0;
            }
        }
    }

    pub fn gravity_on(&self) -> bool {
        self.gravity_on
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.pointer.press(position, &mut self.bodies);
    }

    pub fn pointer_move(&mut self, position: Vec2) {
        self.pointer.drag(position, &mut self.bodies);
    }

    // also serves pointer-leave and touch-cancel
    pub fn pointer_up(&mut self) {
        self.pointer.release(self.config.throw_force, &mut self.bodies);
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            // degenerate viewport freezes clamping until a real size arrives
            return;
        }

        const INSET: f32 = 10.0;
        for body in self.bodies.iter_mut() {
            if body.position.x + body.size.x > viewport.x {
                body.position.x = viewport.x - body.size.x - INSET;
            }
            if body.position.y + body.size.y > viewport.y {
                body.position.y = viewport.y - body.size.y - INSET;
            }
            if body.position.x < 0.0 {
                body.position.x = INSET;
            }
            if body.position.y < 0.0 {
                body.position.y = INSET;
            }
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn bodies(&self) -> &BodyArena {
        &self.bodies
    }

    pub fn held(&self) -> Option<BodyHandle> {
        self.pointer.held()
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

fn resolve_bounds(body: &mut Body, viewport: Vec2, config: &SceneConfig) {
    let max = viewport - body.size;

    // the floor also applies friction and a resting cutoff
    if body.position.y > max.y {
        body.position.y = max.y;
        body.velocity.y *= -body.restitution;
        body.velocity.x *= config.friction;
        body.rotation_speed *= 0.8;
        if body.velocity.y.abs() < config.rest_speed {
            body.velocity.y = 0.0;
        }
    }
    if body.position.y < 0.0 {
        body.position.y = 0.0;
        body.velocity.y *= -body.restitution;
    }
    if body.position.x > max.x {
        body.position.x = max.x;
        body.velocity.x *= -body.restitution;
    }
    if body.position.x < 0.0 {
        body.position.x = 0.0;
        body.velocity.x *= -body.restitution;
    }
}

fn resolve_pair(bodies: &mut BodyArena, handle_a: BodyHandle, handle_b: BodyHandle) {
    let (a, b) = bodies.get_body_pair_mut(handle_a, handle_b);

    let overlap = match aabb_overlap(a, b) {
        Some(overlap) => overlap,
        None => return,
    };

    let total_mass = a.mass + b.mass;
    let restitution = a.restitution.min(b.restitution);

    // separate along the axis of least penetration; the positional push is
    // mass-weighted so heavier bodies move less
    if overlap.x < overlap.y {
        let sign = if a.centre().x < b.centre().x { -1.0 } else { 1.0 };
        a.position.x += sign * overlap.x * (b.mass / total_mass);
        b.position.x -= sign * overlap.x * (a.mass / total_mass);

        let rel = a.velocity.x - b.velocity.x;
        let impulse = rel * (1.0 + restitution) / total_mass;
        a.velocity.x -= impulse * b.mass;
        b.velocity.x += impulse * a.mass;
    } else {
        let sign = if a.centre().y < b.centre().y { -1.0 } else { 1.0 };
        a.position.y += sign * overlap.y * (b.mass / total_mass);
        b.position.y -= sign * overlap.y * (a.mass / total_mass);

        let rel = a.velocity.y - b.velocity.y;
        let impulse = rel * (1.0 + restitution) / total_mass;
        a.velocity.y -= impulse * b.mass;
        b.velocity.y += impulse * a.mass;
    }
}
