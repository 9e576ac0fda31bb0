use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// downward acceleration in px/s^2 while gravity is on
    pub gravity: f32,
    /// per-frame velocity decay, both regimes
    pub damping: f32,
    /// extra per-frame decay while floating, keeps drift bounded
    pub float_damping: f32,
    pub restitution: f32,
    /// horizontal multiplier on floor contact
    pub friction: f32,
    pub float_speed: f32,
    /// added per body, scaled by a random draw, so phases diverge
    pub float_speed_jitter: f32,
    pub float_amplitude: f32,
    pub throw_force: f32,
    pub body_count: usize,
    pub narrow_body_count: usize,
    pub narrow_width: f32,
    pub spawn_padding: f32,
    pub spawn_speed: f32,
    /// timestep cap, guards against tab-resume stalls
    pub max_step: f32,
    pub target_opacity: f32,
    /// opacity gained per second of fade-in
    pub fade_rate: f32,
    /// vertical speed under which floor contact comes to rest
    pub rest_speed: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            gravity: 980.0,
            damping: 0.98,
            float_damping: 0.995,
            restitution: 0.5,
            friction: 0.8,
            float_speed: 0.3,
            float_speed_jitter: 0.2,
            float_amplitude: 30.0,
            throw_force: 800.0,
            body_count: 16,
            narrow_body_count: 10,
            narrow_width: 768.0,
            spawn_padding: 60.0,
            spawn_speed: 10.0,
            max_step: 0.05,
            target_opacity: 0.85,
            fade_rate: 2.0,
            rest_speed: 10.0,
            seed: 0x5eed,
        }
    }
}

impl SceneConfig {
    pub fn body_count_for(&self, viewport_width: f32) -> usize {
        if viewport_width < self.narrow_width {
            self.narrow_body_count
        } else {
            self.body_count
        }
    }
}
