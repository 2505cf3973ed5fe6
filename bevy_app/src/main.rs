/*!
Bubble Burst entry point.

* Layered config loading (`assets/config/game.ron`, `game.local.ron`, then `--config` layers).
* Validation warnings logged once the log plugin is up.
* RNG seed from `--seed` or the wall clock.
*/

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use bb_config::GameConfig;
use bb_core::{CorePlugin, GameConfigRes, RngSeed};
use bb_event_core::EventCorePlugin;
use bb_gameplay::GameplayPlugin;
use bb_rendering::RenderingPlugin;
use bevy::prelude::*;
use clap::Parser;

const BASE_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(name = "bubble_burst", version, about = "Pop falling bubbles for one minute")]
struct Cli {
    /// Extra RON config layer applied after the defaults (repeatable)
    #[arg(long = "config", value_name = "PATH")]
    config: Vec<PathBuf>,
    /// Fixed RNG seed for a reproducible round
    #[arg(long)]
    seed: Option<u64>,
}

/// Messages gathered before the log plugin exists; replayed at Startup.
#[derive(Resource, Debug, Default)]
struct StartupReport {
    info: Vec<String>,
    warnings: Vec<String>,
}

fn log_startup_report(report: Res<StartupReport>) {
    for line in &report.info {
        info!("{line}");
    }
    for w in &report.warnings {
        warn!("{w}");
    }
}

// ---------------- Config Loading ----------------

fn load_config(extra: &[PathBuf], report: &mut StartupReport) -> Result<GameConfig> {
    let layers: Vec<PathBuf> = BASE_LAYERS
        .iter()
        .map(PathBuf::from)
        .chain(extra.iter().cloned())
        .collect();
    let (cfg, used, errors) = GameConfig::load_layered(&layers);

    // Missing base layers are fine; a layer asked for on the command line is not.
    for p in extra {
        let shown = p.display().to_string();
        if !used.contains(&shown) {
            let reason = errors
                .iter()
                .find(|e| e.starts_with(&shown))
                .cloned()
                .unwrap_or_else(|| "not loaded".into());
            bail!("config layer {shown}: {reason}");
        }
    }
    for e in errors {
        report.warnings.push(format!("CONFIG LOAD ISSUE: {e}"));
    }
    if used.is_empty() {
        report
            .info
            .push("No config layers found; using defaults".into());
    } else {
        report.info.push(format!("Config layers loaded: {used:?}"));
    }
    Ok(cfg)
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

// ---------------- Main ----------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut report = StartupReport::default();

    let cfg = load_config(&cli.config, &mut report)?;

    // Log validation warnings (non-fatal)
    for w in cfg.validate() {
        report.warnings.push(format!("CONFIG WARNING: {w}"));
    }
    let seed = cli.seed.unwrap_or_else(wall_clock_seed);
    report.info.push(format!(
        "Round: {}s, frame tick {} ms, spawn chance {}, integer sampling {}, seed {seed}",
        cfg.round.duration_secs,
        cfg.round.frame_interval_ms,
        cfg.spawn.chance,
        cfg.spawn.integer_sampling,
    ));

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: false,
        ..Default::default()
    };
    let journal_capacity = cfg.journal_capacity;

    let exit = App::new()
        .insert_resource(GameConfigRes(cfg))
        .insert_resource(RngSeed(seed))
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..Default::default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(EventCorePlugin { journal_capacity })
        .add_plugins(GameplayPlugin)
        .add_plugins(RenderingPlugin)
        .add_systems(Startup, log_startup_report)
        .run();
    if let AppExit::Error(code) = exit {
        bail!("app exited with error code {code}");
    }
    Ok(())
}
