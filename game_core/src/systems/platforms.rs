use hecs::World;

use crate::{Aabb, Config, Oscillator, Time};

/// Bob every moving platform around its base height, on every level
pub fn oscillate_platforms(world: &mut World, time: &Time, config: &Config) {
    let offset = config.oscillation_offset(time.now_ms);
    for (_entity, (bounds, oscillator)) in world.query_mut::<(&mut Aabb, &Oscillator)>() {
        *bounds = bounds.with_top(oscillator.base_y + offset);
    }
}
