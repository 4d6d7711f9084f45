use std::{path::PathBuf, process::ExitCode, str::FromStr};

use gloam_config::{GloamConfig, LoggingConfig};
use gloam_util::{
    math::vector2::Vector2,
    world_seed::Seed,
};
use gloam_world::{
    biome::{SpawnGroup, population_random, spooky_forest::SpookyForest},
    generation::{
        feature::features::graveyard::{GraveyardFeature, builtin},
        structure::manager::TemplateManager,
    },
};
use log::{Level, LevelFilter};

mod terrain;

/// Chunks decorated along each axis.
const CHUNKS: i32 = 4;

fn init_logging(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }
    let mut builder = simplelog::ConfigBuilder::new();
    if config.timestamp {
        builder.set_time_level(LevelFilter::Error);
        let _ = builder.set_time_offset_to_local();
    } else {
        builder.set_time_level(LevelFilter::Off);
    }
    if !config.color {
        for level in Level::iter() {
            builder.set_level_color(level, None);
        }
    }
    builder.set_thread_level(if config.threads {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    });

    let level = std::env::var("RUST_LOG")
        .ok()
        .as_deref()
        .map(LevelFilter::from_str)
        .and_then(Result::ok)
        .unwrap_or(LevelFilter::Info);

    if let Err(err) = simplelog::SimpleLogger::init(level, builder.build()) {
        eprintln!("Failed to initialize logger: {err}");
    }
}

fn main() -> ExitCode {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match GloamConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => GloamConfig::default(),
    };
    init_logging(&config.logging);

    let seed = config.seed.unwrap_or_else(Seed::random);
    log::info!("Generating spooky forest with seed {}", seed.0);

    let mut manager = TemplateManager::new();
    builtin::register(&mut manager, &config.graveyard.templates);
    let graveyard = match GraveyardFeature::new(&manager, config.graveyard.clone()) {
        Ok(graveyard) => graveyard,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let forest = SpookyForest::new(config.spooky_forest.clone(), graveyard);

    let mut world = terrain::forest_floor(seed.0, CHUNKS);
    let mut graveyards = 0;
    let mut webs = 0;
    for chunk_x in 0..CHUNKS {
        for chunk_z in 0..CHUNKS {
            let chunk = Vector2::new(chunk_x, chunk_z);
            let mut random = population_random(seed.0, chunk);
            let report = forest.decorate(&mut world, &mut random, chunk);
            log::debug!("Chunk {chunk_x}, {chunk_z}: {report:?}");
            webs += report.webs;
            if report.graveyard {
                graveyards += 1;
            }
        }
    }

    log::info!(
        "Decorated {} chunks: {graveyards} graveyards, {webs} hanging webs, {} entities, {} block changes",
        CHUNKS * CHUNKS,
        world.entities().len(),
        world.mutations()
    );
    for entry in SpookyForest::spawn_entries(SpawnGroup::Monster) {
        log::debug!(
            "Monster {} weight {} in groups of {}..={}",
            entry.entity_type,
            entry.weight,
            entry.min_group,
            entry.max_group
        );
    }
    ExitCode::SUCCESS
}
