// Pure data configuration crate (no Bevy dependency).
// Provides: data structures, layered loading, validation producing warnings (non-fatal), and tests.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical playfield width; the window is created at this size.
    pub width: f32,
    /// Logical playfield height.
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Bubble Burst - 1 Minute Challenge".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RoundConfig {
    /// Countdown start value in whole seconds.
    pub duration_secs: u32,
    /// Period of the frame tick that drives spawning and movement.
    pub frame_interval_ms: u64,
}
impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60,
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    /// Probability of spawning one bubble per frame tick.
    pub chance: f64,
    /// Vertical spawn position. The playfield origin is bottom-left, so -50 is just below the
    /// bottom edge and new bubbles rise into view.
    pub spawn_y: f32,
    /// Half-open radius range `[min, max)`.
    pub radius_range: SpawnRange<f32>,
    /// Half-open speed range `[min, max)` in units per frame tick.
    pub speed_range: SpawnRange<f32>,
    /// Draw x / radius / speed as whole numbers.
    pub integer_sampling: bool,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            chance: 0.1,
            spawn_y: -50.0,
            radius_range: SpawnRange {
                min: 20.0,
                max: 50.0,
            },
            speed_range: SpawnRange { min: 1.0, max: 4.0 },
            integer_sampling: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BurstConfig {
    /// Length of the dissolve animation after a successful click.
    pub duration_secs: f32,
}
impl Default for BurstConfig {
    fn default() -> Self {
        Self { duration_secs: 0.3 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub round: RoundConfig,
    pub spawn: SpawnConfig,
    pub burst: BurstConfig,
    /// Number of processed events kept in the event journal.
    pub journal_capacity: usize,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            round: Default::default(),
            spawn: Default::default(),
            burst: Default::default(),
            journal_capacity: 512,
        }
    }
}

impl GameConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips missing files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Frame tick period in seconds; also the per-tick burst decay.
    pub fn frame_interval_secs(&self) -> f32 {
        self.round.frame_interval_ms as f32 / 1000.0
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.round.duration_secs == 0 {
            w.push("round.duration_secs is 0; the round ends on the first clock tick".into());
        }
        if self.round.frame_interval_ms == 0 {
            w.push("round.frame_interval_ms must be > 0".into());
        } else if self.round.frame_interval_ms > 100 {
            w.push(format!(
                "round.frame_interval_ms {} very long; motion will stutter",
                self.round.frame_interval_ms
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn.chance) {
            w.push(format!(
                "spawn.chance {} outside 0..1 (clamped)",
                self.spawn.chance
            ));
        } else if self.spawn.chance == 0.0 {
            w.push("spawn.chance is 0; nothing will spawn".into());
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!("{label} min ({}) greater than max ({})", r.min, r.max));
            }
            if (r.max - r.min).abs() < f32::EPSILON {
                w.push(format!("{label} min == max ({}) -> zero variation", r.min));
            }
        }
        check_range_f32(&mut w, "spawn.radius_range", &self.spawn.radius_range);
        if self.spawn.radius_range.min <= 0.0 {
            w.push("spawn.radius_range.min must be > 0".into());
        }
        check_range_f32(&mut w, "spawn.speed_range", &self.spawn.speed_range);
        if self.spawn.speed_range.min <= 0.0 {
            w.push("spawn.speed_range.min must be > 0; bubbles may never fall".into());
        }
        if self.spawn.integer_sampling
            && self.spawn.speed_range.max - self.spawn.speed_range.min < 1.0
        {
            w.push("spawn.speed_range narrower than 1 with integer_sampling -> constant speed".into());
        }
        if self.burst.duration_secs <= 0.0 {
            w.push("burst.duration_secs must be > 0; bursts will not animate".into());
        } else if self.burst.duration_secs < self.frame_interval_secs() {
            w.push(format!(
                "burst.duration_secs {} shorter than one frame tick",
                self.burst.duration_secs
            ));
        }
        if self.journal_capacity == 0 {
            w.push("journal_capacity is 0; processed events are not recorded".into());
        }
        w
    }
}
