use gloam_config::{GraveyardConfig, SpookyForestConfig};
use gloam_util::math::{position::BlockPos, vector2::Vector2};
use gloam_world::{
    GenerationWorld,
    biome::{population_random, spooky_forest::SpookyForest},
    block::{Block, BlockState},
};

mod common;

use common::{GROUND_Y, flat_world, graveyard, spread_seed};

fn canopy(seed: i64) -> gloam_world::ProtoRegion {
    let mut world = flat_world(seed);
    world.fill(
        BlockPos::new(-32, GROUND_Y + 8, -32),
        BlockPos::new(63, GROUND_Y + 8, 63),
        BlockState::new(Block::OAK_LEAVES),
    );
    world
}

#[test]
fn webs_hang_under_the_canopy() {
    let config = SpookyForestConfig {
        graveyard_chance: 0.0,
        ..Default::default()
    };
    let forest = SpookyForest::new(config, graveyard(GraveyardConfig::default()));
    let seed = spread_seed(9);
    let mut world = canopy(seed);
    let chunk = Vector2::new(0, 0);

    let report = forest.decorate(&mut world, &mut population_random(seed, chunk), chunk);
    assert!(report.webs > 0);
    assert!(!report.graveyard);
    assert_eq!(
        world.count(&Block::COBWEB.default_state()),
        report.webs as usize
    );
    for x in 8..24 {
        for z in 8..24 {
            let under = BlockPos::new(x, GROUND_Y + 7, z);
            let state = world.get_block_state(&under);
            assert!(state.is_air() || state.is_of(&Block::COBWEB));
        }
    }
}

#[test]
fn decoration_stays_in_its_area() {
    let forest = SpookyForest::new(
        SpookyForestConfig::default(),
        graveyard(GraveyardConfig::default()),
    );
    let seed = spread_seed(12);
    let mut world = canopy(seed);
    let chunk = Vector2::new(0, 0);
    forest.decorate(&mut world, &mut population_random(seed, chunk), chunk);

    // nothing lands under the canopy outside the decorated quarter plus the
    // spread of a patch
    for x in -32..0 {
        for z in -32..0 {
            for y in GROUND_Y + 1..GROUND_Y + 8 {
                assert!(world.get_block_state(&BlockPos::new(x, y, z)).is_air());
            }
        }
    }
}
