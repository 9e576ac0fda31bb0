use crate::catalog::PartSpec;
use crate::render::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Disc,
    Bar,
    Bracket,
    Plate,
    Bolt,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyHandle(pub u32);

#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub restitution: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub float_phase: f32,
    pub float_speed: f32,
    pub opacity: f32,
    pub target_opacity: f32,
    pub kind: PartKind,
    pub label: String,
    pub fill: Color,
    pub edge: Color,
}

impl Body {
    pub fn from_spec(spec: &PartSpec, position: Vec2, restitution: f32) -> Self {
        Body {
            position,
            size: spec.size,
            velocity: Vec2::ZERO,
            // larger parts are heavier and move less
            mass: spec.size.x * spec.size.y / 1000.0,
            restitution,
            rotation: 0.0,
            rotation_speed: 0.0,
            float_phase: 0.0,
            float_speed: 0.0,
            opacity: 0.0,
            target_opacity: 0.85,
            kind: spec.kind,
            label: spec.label.clone(),
            fill: spec.fill,
            edge: spec.edge,
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }

    pub fn fade_in(&mut self, step: f32) {
        if self.opacity < self.target_opacity {
            self.opacity = (self.opacity + step).min(self.target_opacity);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.rotation += self.rotation_speed * dt;
    }
}

#[derive(Debug)]
pub struct BodyArena {
    bodies: Vec<Body>,
    // painter's order; hit tests walk it back to front
    draw_order: Vec<BodyHandle>,
}

impl Default for BodyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyArena {
    pub fn new() -> Self {
        BodyArena {
            bodies: Vec::new(),
            draw_order: Vec::new(),
        }
    }

    pub fn add(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(body);
        self.draw_order.push(handle);
        handle
    }

    pub fn iter(&self) -> core::slice::Iter<Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<Body> {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get_body(&self, handle: BodyHandle) -> &Body {
        &self.bodies[handle.0 as usize]
    }

    pub fn get_body_mut(&mut self, handle: BodyHandle) -> &mut Body {
        &mut self.bodies[handle.0 as usize]
    }

    fn get_body_pair_mut_from_indices(
        &mut self,
        index_a: usize,
        index_b: usize,
    ) -> (&mut Body, &mut Body) {
        match index_a.cmp(&index_b) {
            std::cmp::Ordering::Less => {
                let mut iter = self.bodies.iter_mut();
                let body_a = iter.nth(index_a).unwrap();
                let body_b = iter.nth(index_b - index_a - 1).unwrap();
                (body_a, body_b)
            }
            std::cmp::Ordering::Greater => {
                let mut iter = self.bodies.iter_mut();
                let body_b = iter.nth(index_b).unwrap();
                let body_a = iter.nth(index_a - index_b - 1).unwrap();
                (body_a, body_b)
            }
            std::cmp::Ordering::Equal => {
                panic!("get_body_pair_mut called with the same index {}", index_a)
            }
        }
    }

    pub fn get_body_pair_mut(
        &mut self,
        handle_a: BodyHandle,
        handle_b: BodyHandle,
    ) -> (&mut Body, &mut Body) {
        self.get_body_pair_mut_from_indices(handle_a.0 as usize, handle_b.0 as usize)
    }

    pub fn draw_order(&self) -> &[BodyHandle] {
        &self.draw_order
    }

    pub fn raise_to_top(&mut self, handle: BodyHandle) {
        if let Some(index) = self.draw_order.iter().position(|&h| h == handle) {
            self.draw_order.remove(index);
            self.draw_order.push(handle);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::PartSpec;

    fn spec(w: f32, h: f32) -> PartSpec {
        PartSpec {
            kind: PartKind::Plate,
            label: "CP-50".to_string(),
            size: Vec2::new(w, h),
            fill: Color::rgb(0, 0, 0),
            edge: Color::rgb(0, 0, 0),
        }
    }

    #[test]
    fn test_mass_from_size() {
        let body = Body::from_spec(&spec(50.0, 20.0), Vec2::ZERO, 0.5);
        assert!((body.mass - 1.0).abs() < 1e-6);
        assert!(body.mass > 0.0);

        let small = Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5);
        assert!((small.mass - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_contains() {
        let body = Body::from_spec(&spec(40.0, 20.0), Vec2::new(100.0, 200.0), 0.5);
        assert!(body.contains(Vec2::new(100.0, 200.0)));
        assert!(body.contains(Vec2::new(140.0, 220.0)));
        assert!(body.contains(Vec2::new(120.0, 210.0)));
        assert!(!body.contains(Vec2::new(99.9, 210.0)));
        assert!(!body.contains(Vec2::new(120.0, 220.1)));
    }

    #[test]
    fn test_fade_in_stops_at_target() {
        let mut body = Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5);
        body.target_opacity = 0.85;
        for _ in 0..100 {
            body.fade_in(0.1);
        }
        assert_eq!(body.opacity, 0.85);
    }

    #[test]
    fn test_raise_to_top() {
        let mut arena = BodyArena::new();
        let a = arena.add(Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5));
        let b = arena.add(Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5));
        let c = arena.add(Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5));
        assert_eq!(arena.draw_order(), &[a, b, c]);

        arena.raise_to_top(a);
        assert_eq!(arena.draw_order(), &[b, c, a]);

        // identity order is unaffected by draw order changes
        assert_eq!(arena.len(), 3);
        assert!(arena.get_body(a).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_pair_borrow_is_disjoint() {
        let mut arena = BodyArena::new();
        let a = arena.add(Body::from_spec(&spec(10.0, 10.0), Vec2::ZERO, 0.5));
        let b = arena.add(Body::from_spec(&spec(20.0, 10.0), Vec2::new(5.0, 0.0), 0.5));

        let (body_a, body_b) = arena.get_body_pair_mut(a, b);
        body_a.velocity.x = 1.0;
        body_b.velocity.x = -1.0;
        assert_eq!(arena.get_body(a).velocity.x, 1.0);
        assert_eq!(arena.get_body(b).velocity.x, -1.0);

        let (body_b, body_a) = arena.get_body_pair_mut(b, a);
        body_b.velocity.y = 2.0;
        body_a.velocity.y = -2.0;
        assert_eq!(arena.get_body(b).velocity.y, 2.0);
        assert_eq!(arena.get_body(a).velocity.y, -2.0);
    }
}
