use crate::body::Body;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Overlap {
    pub x: f32,
    pub y: f32,
}

pub fn aabb_overlap(a: &Body, b: &Body) -> Option<Overlap> {
    let x = (a.position.x + a.size.x).min(b.position.x + b.size.x)
        - a.position.x.max(b.position.x);
    let y = (a.position.y + a.size.y).min(b.position.y + b.size.y)
        - a.position.y.max(b.position.y);

    if x > 0.0 && y > 0.0 {
        Some(Overlap { x, y })
    } else {
        None
    }
}
