//! The graveyard: a walled yard stamped from a base template and filled with
//! a loose grid of graves.
//!
//! Layout randomness (orientation, base cobwebs, grave kinds, embellishment)
//! comes from a random seeded by the world seed and the anchor chunk, so a
//! chunk always produces the same graveyard. Only the loose cobwebs on the
//! floor use the caller's random.

use std::sync::Arc;

use gloam_config::{GraveyardConfig, graveyard::GraveyardTemplates as TemplateNames};
use gloam_util::{
    math::{
        block_box::BlockBox,
        orientation::Orientation,
        position::BlockPos,
        vector3::Vector3,
    },
    random::{RandomGenerator, RandomImpl, random_for_chunk},
};
use thiserror::Error;

use embellish::{EmbellishContext, Embellishment, chest_slot};
use footprint::find_obstruction;
use grid::GraveGrid;
use terrain::{GroundLevel, estimate_ground_level};
use web_processor::WebProcessor;

use crate::{
    block::Block,
    generation::{
        feature::Feature,
        positions::chunk_pos,
        structure::{
            TemplateError,
            manager::TemplateStore,
            template::{PlacementSettings, Template},
        },
    },
    loot::{DeferredLoot, LootResolver},
    world::{BlockFlags, GenerationWorld},
};

pub mod builtin;
pub mod embellish;
pub mod footprint;
pub mod grid;
pub mod terrain;
pub mod web_processor;

/// Why a site was turned down. Nothing is written for a rejected site.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Rejection {
    #[error("disallowed block at {pos}")]
    Disallowed { pos: BlockPos },
    #[error("no ground in column {x}, {z}")]
    NoGround { x: i32, z: i32 },
    #[error("ground too uneven, deviation {deviation:.2}")]
    TooUneven { deviation: f64 },
    #[error("clearance obstructed at {pos}")]
    Obstructed { pos: BlockPos },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraveKind {
    Full,
    Upper,
    Lower,
}

impl GraveKind {
    pub const ALL: [Self; 3] = [Self::Full, Self::Upper, Self::Lower];

    pub fn random(random: &mut RandomGenerator) -> Self {
        Self::ALL[random.next_bounded_i32(Self::ALL.len() as i32) as usize]
    }
}

/// Templates of one graveyard, looked up once.
pub struct GraveyardTemplates {
    pub base: Arc<Template>,
    pub trap: Arc<Template>,
    graves: [Arc<Template>; 3],
}

impl GraveyardTemplates {
    pub fn load(store: &dyn TemplateStore, names: &TemplateNames) -> Result<Self, TemplateError> {
        Ok(Self {
            base: store.require_template(&names.base)?,
            trap: store.require_template(&names.trap)?,
            graves: [
                store.require_template(&names.grave_full)?,
                store.require_template(&names.grave_upper)?,
                store.require_template(&names.grave_lower)?,
            ],
        })
    }

    pub fn grave(&self, kind: GraveKind) -> &Template {
        match kind {
            GraveKind::Full => &self.graves[0],
            GraveKind::Upper => &self.graves[1],
            GraveKind::Lower => &self.graves[2],
        }
    }
}

/// A validated site. Built before anything is written.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementPlan {
    pub orientation: Orientation,
    pub ground: GroundLevel,
    /// Transformed size of the base.
    pub size: Vector3<i32>,
    /// Blocks outside this chunk aligned box are never written.
    pub bounds: BlockBox,
    /// Where local `(0, 0, 0)` of the base lands.
    pub origin: BlockPos,
    pub grid: GraveGrid,
}

impl PlacementPlan {
    /// Corner of the footprint at ground height.
    pub fn start(&self) -> BlockPos {
        self.ground.origin
    }

    /// First floor block, one above the ground.
    pub fn floor(&self) -> BlockPos {
        self.start().add(1, 1, 0)
    }

    pub fn settings(&self) -> PlacementSettings {
        PlacementSettings::new(self.orientation).with_bounds(self.bounds)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedGrave {
    pub kind: GraveKind,
    /// Minimum corner of the grave's footprint.
    pub corner: BlockPos,
    /// Where local `(0, 0, 0)` of the grave landed.
    pub origin: BlockPos,
    pub embellishment: Embellishment,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacementOutcome {
    pub plan: PlacementPlan,
    pub graves: Vec<PlacedGrave>,
}

pub struct GraveyardFeature {
    config: GraveyardConfig,
    templates: GraveyardTemplates,
    loot: Box<dyn LootResolver>,
}

impl GraveyardFeature {
    pub const FLAGS: BlockFlags = BlockFlags::NOTIFY_NEIGHBORS;
    /// Nudges the base so its walls line up with the validated footprint.
    const BASE_OFFSET: Vector3<i32> = Vector3::new(1, -1, 0);
    /// Decoration runs half a chunk off the chunk grid.
    const DECORATION_OFFSET: i32 = 8;

    pub fn new(store: &dyn TemplateStore, config: GraveyardConfig) -> Result<Self, TemplateError> {
        let templates = GraveyardTemplates::load(store, &config.templates)?;
        Ok(Self {
            config,
            templates,
            loot: Box::new(DeferredLoot),
        })
    }

    pub fn with_loot_resolver(mut self, loot: Box<dyn LootResolver>) -> Self {
        self.loot = loot;
        self
    }

    pub fn config(&self) -> &GraveyardConfig {
        &self.config
    }

    pub fn templates(&self) -> &GraveyardTemplates {
        &self.templates
    }

    /// The reproducible layout random of the chunk holding `anchor`.
    pub fn layout_random<W: GenerationWorld + ?Sized>(
        &self,
        world: &W,
        anchor: BlockPos,
    ) -> RandomGenerator {
        random_for_chunk(world.seed(), anchor.chunk_pos(), self.config.seed_salt)
    }

    /// Picks an orientation from `random` and validates the site around
    /// `anchor`. Only reads the world.
    pub fn plan<W: GenerationWorld + ?Sized>(
        &self,
        world: &W,
        random: &mut RandomGenerator,
        anchor: BlockPos,
    ) -> Result<PlacementPlan, Rejection> {
        let orientation = Orientation::random(random);
        let size = self.templates.base.transformed_size(orientation.rotation);
        let grave_size = self
            .templates
            .grave(GraveKind::Full)
            .transformed_size(orientation.rotation);

        let corner = anchor.add(-Self::DECORATION_OFFSET, 0, -Self::DECORATION_OFFSET);
        let chunk = corner.chunk_pos();
        let end_chunk = corner.offset(size).chunk_pos();
        let bounds = BlockBox::new(
            chunk_pos::start_block_x(chunk.x) + Self::DECORATION_OFFSET,
            world.bottom_y(),
            chunk_pos::start_block_z(chunk.y) + Self::DECORATION_OFFSET,
            chunk_pos::end_block_x(end_chunk.x) + Self::DECORATION_OFFSET,
            world.top_y(),
            chunk_pos::end_block_z(end_chunk.y) + Self::DECORATION_OFFSET,
        );
        let snapped = BlockPos::new(
            chunk_pos::get_offset_x(&chunk, Self::DECORATION_OFFSET),
            anchor.0.y - 1,
            chunk_pos::get_offset_z(&chunk, Self::DECORATION_OFFSET),
        );

        let ground =
            estimate_ground_level(world, snapped, size, self.config.max_height_deviation)?;
        let clearance_min = ground.origin.up_height(ground.max_y - ground.origin.0.y + 1);
        let clearance_max = ground.origin.offset(size);
        if let Some(pos) = find_obstruction(world, clearance_min, clearance_max) {
            return Err(Rejection::Obstructed { pos });
        }

        let origin = self
            .templates
            .base
            .zero_position_with_transform(ground.origin, &orientation)
            .offset(Self::BASE_OFFSET);
        let grid = GraveGrid::new(
            ground.origin.add(1, 1, 0),
            size,
            grave_size,
            orientation.rotation,
        );

        Ok(PlacementPlan {
            orientation,
            ground,
            size,
            bounds,
            origin,
            grid,
        })
    }

    /// Places a graveyard for the chunk holding `anchor`, or explains why
    /// the site was turned down.
    pub fn place<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        anchor: BlockPos,
    ) -> Result<PlacementOutcome, Rejection> {
        let mut layout = self.layout_random(world, anchor);
        let plan = self.plan(world, &mut layout, anchor)?;
        let settings = plan.settings();

        {
            let mut processor = WebProcessor::new(&mut layout, self.config.obstruction_chance);
            self.templates.base.place(
                world,
                plan.origin,
                &settings,
                Some(&mut processor),
                Self::FLAGS,
            );
        }

        self.scatter_webs(world, random, &plan);

        let context = EmbellishContext {
            config: &self.config,
            trap: &self.templates.trap,
            loot: self.loot.as_ref(),
            settings: &settings,
            chest_slot: chest_slot(&mut layout, &plan.orientation),
            flags: Self::FLAGS,
        };

        let mut graves = Vec::new();
        for corner in plan.grid.cells() {
            let kind = GraveKind::random(&mut layout);
            let template = self.templates.grave(kind);
            let origin = template.zero_position_with_transform(corner, &plan.orientation);
            template.place(world, origin, &settings, None, Self::FLAGS);
            let embellishment = context.embellish(world, &mut layout, template, kind, origin);
            graves.push(PlacedGrave {
                kind,
                corner,
                origin,
                embellishment,
            });
        }

        Ok(PlacementOutcome { plan, graves })
    }

    /// Loose cobwebs on empty floor cells, drawn from the caller's random.
    fn scatter_webs<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        plan: &PlacementPlan,
    ) {
        let floor = plan.floor();
        let web = Block::COBWEB.default_state();
        for x in 1..plan.size.x - 1 {
            for z in 1..plan.size.z - 1 {
                let pos = floor.add(x, 0, z);
                if world.is_air(&pos) && random.next_bounded_i32(self.config.web_chance) == 0 {
                    world.set_block_state(&pos, web, Self::FLAGS);
                }
            }
        }
    }
}

impl Feature for GraveyardFeature {
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool {
        match self.place(world, random, pos) {
            Ok(outcome) => {
                log::debug!(
                    "Placed graveyard at {} ({:?}) with {} graves",
                    outcome.plan.origin,
                    outcome.plan.orientation,
                    outcome.graves.len()
                );
                true
            }
            Err(rejection) => {
                log::debug!("Rejected graveyard at {pos}: {rejection}");
                false
            }
        }
    }
}
