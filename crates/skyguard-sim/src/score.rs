//! Running tally tracked by the engine, outside the ECS world.

use skyguard_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub threats_total: u32,
    pub threats_destroyed: u32,
    pub threats_grounded: u32,
    pub interceptors_launched: u32,
    pub misses: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            threats_total: self.threats_total,
            threats_destroyed: self.threats_destroyed,
            threats_grounded: self.threats_grounded,
            interceptors_launched: self.interceptors_launched,
            misses: self.misses,
        }
    }
}
