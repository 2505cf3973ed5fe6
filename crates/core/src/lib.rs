// Core crate: bubble model, pool, spawner, round clock and the GameState resource.
// Pure logic lives in the submodules; this file holds the Bevy glue.

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

pub mod bubble;
pub mod pool;
pub mod round;
pub mod spawn;
pub mod state;

pub use bubble::{Bubble, BubblePhase};
pub use pool::BubblePool;
pub use round::RoundState;
pub use state::{GameEvent, GameParams, GameState, Transition};

/// Deterministic RNG seed resource (set once at startup / tests for reproducible spawning).
#[derive(Resource, Debug, Copy, Clone, Default)]
pub struct RngSeed(pub u64);

// Wrapper Bevy resource for the pure-data GameConfig (keeps bb_config free of bevy dependency).
#[derive(Resource, Debug, Clone, Default)]
pub struct GameConfigRes(pub bb_config::GameConfig);

/// RNG consumed by the spawner. Seeded from [`RngSeed`].
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Builds [`GameState`] and [`SpawnRng`] from whatever config and seed the app carries.
/// Insert [`GameConfigRes`] / [`RngSeed`] before adding the plugin to override defaults.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfigRes>().init_resource::<RngSeed>();
        let cfg = app.world().resource::<GameConfigRes>().0.clone();
        let seed = app.world().resource::<RngSeed>().0;
        app.insert_resource(GameState::from_config(&cfg))
            .insert_resource(SpawnRng::from_seed(seed));
    }
}
