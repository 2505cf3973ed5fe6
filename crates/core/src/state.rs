//! Game state and the single transition function every event goes through.

use bb_config::GameConfig;
use bevy::math::Vec2;
use bevy::prelude::Resource;
use rand::Rng;

use crate::pool::BubblePool;
use crate::round::RoundState;
use crate::spawn::maybe_spawn;

/// Immutable round parameters, derived once from [`GameConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameParams {
    pub width: f32,
    pub height: f32,
    pub spawn_chance: f64,
    pub spawn_y: f32,
    pub radius_range: (f32, f32),
    pub speed_range: (f32, f32),
    pub integer_sampling: bool,
    pub burst_duration: f32,
    /// Seconds removed from a burst timer per frame tick.
    pub burst_decay: f32,
    pub round_secs: u32,
}

impl From<&GameConfig> for GameParams {
    fn from(cfg: &GameConfig) -> Self {
        Self {
            width: cfg.window.width,
            height: cfg.window.height,
            spawn_chance: cfg.spawn.chance,
            spawn_y: cfg.spawn.spawn_y,
            radius_range: (cfg.spawn.radius_range.min, cfg.spawn.radius_range.max),
            speed_range: (cfg.spawn.speed_range.min, cfg.spawn.speed_range.max),
            integer_sampling: cfg.spawn.integer_sampling,
            burst_duration: cfg.burst.duration_secs,
            burst_decay: cfg.frame_interval_secs(),
            round_secs: cfg.round.duration_secs,
        }
    }
}

impl Default for GameParams {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// Inputs to the game. Click coordinates are window space (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Tick,
    SecondElapsed,
    Click { x: f32, y: f32 },
}

/// Outcome of applying one [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Ticked {
        spawned: Option<u64>,
        exited: usize,
        removed: usize,
    },
    ClockAdvanced {
        time_left: u32,
    },
    RoundEnded {
        final_score: u32,
    },
    Hit {
        bubble: u64,
        score: u32,
    },
    Missed,
    /// Event arrived after the round ended.
    Ignored,
}

#[derive(Resource, Debug, Clone)]
pub struct GameState {
    pub bubbles: BubblePool,
    pub round: RoundState,
    pub params: GameParams,
}

impl GameState {
    pub fn new(params: GameParams) -> Self {
        Self {
            bubbles: BubblePool::new(),
            round: RoundState::new(params.round_secs),
            params,
        }
    }

    pub fn from_config(cfg: &GameConfig) -> Self {
        Self::new(GameParams::from(cfg))
    }

    pub fn is_over(&self) -> bool {
        self.round.game_over
    }

    pub fn apply<R: Rng + ?Sized>(&mut self, event: &GameEvent, rng: &mut R) -> Transition {
        if self.round.game_over {
            return Transition::Ignored;
        }
        match *event {
            GameEvent::Tick => self.tick(rng),
            GameEvent::SecondElapsed => self.second_elapsed(),
            GameEvent::Click { x, y } => self.click(x, y),
        }
    }

    /// Move and decay everything, then maybe spawn, then drop inert bubbles.
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Transition {
        let (height, decay) = (self.params.height, self.params.burst_decay);
        let exited = self
            .bubbles
            .iter_mut()
            .map(|b| b.step(height, decay))
            .filter(|exited| *exited)
            .count();
        let spawned = maybe_spawn(&mut self.bubbles, &self.params, rng);
        let removed = self.bubbles.compact();
        Transition::Ticked {
            spawned,
            exited,
            removed,
        }
    }

    fn second_elapsed(&mut self) -> Transition {
        if self.round.second_elapsed() {
            Transition::RoundEnded {
                final_score: self.round.score,
            }
        } else {
            Transition::ClockAdvanced {
                time_left: self.round.time_left,
            }
        }
    }

    fn click(&mut self, x: f32, y: f32) -> Transition {
        let point = Vec2::new(x, self.params.height - y);
        let duration = self.params.burst_duration;
        let Some(bubble) = self.bubbles.first_hit_mut(point) else {
            return Transition::Missed;
        };
        bubble.burst(duration);
        let id = bubble.id;
        let score = self.round.add_point();
        Transition::Hit { bubble: id, score }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameParams::default())
    }
}
