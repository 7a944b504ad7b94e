//! Brick layouts for the four difficulties
//!
//! Every layout walks the same grid: rows start at a per-row x anchor and step
//! left by `BRICK_COLUMN_STRIDE` while x stays above `BRICK_MIN_X`; each new
//! row sits `BRICK_ROW_STEP` lower and takes its own color band.

use glam::Vec2;
use rand::Rng;

use super::shape::{Color, rgb};
use super::state::{Brick, Difficulty};
use crate::consts::*;

/// Color bands, top row first
pub const BAND_MAGENTA: Color = rgb(0.7, 0.0, 0.5);
pub const BAND_LIME: Color = rgb(0.5, 0.9, 0.0);
pub const BAND_TEAL: Color = rgb(0.0, 0.5, 0.7);
pub const BAND_ORCHID: Color = rgb(0.7, 0.3, 0.7);

/// Which grid cells get a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Every cell
    Every,
    /// Cells with an even index, counted across the whole layout
    EvenCells,
    /// Each cell independently with probability 1/n
    OneIn(u32),
}

/// One row of a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlan {
    /// x of the row's first (right-most) brick
    pub start_x: f32,
    /// Band color, or None for a random palette color per brick
    pub color: Option<Color>,
}

/// A full layout description
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPlan {
    pub rows: &'static [RowPlan],
    pub placement: Placement,
}

const fn row(start_x: f32, color: Option<Color>) -> RowPlan {
    RowPlan { start_x, color }
}

const EASY_ROWS: [RowPlan; 3] = [
    row(950.0, Some(BAND_MAGENTA)),
    row(900.0, Some(BAND_LIME)),
    row(950.0, Some(BAND_TEAL)),
];

const NORMAL_ROWS: [RowPlan; 4] = [
    row(950.0, Some(BAND_MAGENTA)),
    row(900.0, Some(BAND_LIME)),
    row(950.0, Some(BAND_TEAL)),
    row(900.0, Some(BAND_ORCHID)),
];

const HARD_ROWS: [RowPlan; 4] = [
    row(900.0, Some(BAND_MAGENTA)),
    row(950.0, Some(BAND_LIME)),
    row(900.0, Some(BAND_TEAL)),
    row(950.0, Some(BAND_ORCHID)),
];

const RANDOM_ROWS: [RowPlan; 4] = [row(950.0, None); 4];

/// Layout description for a difficulty
pub fn layout_plan(difficulty: Difficulty) -> LayoutPlan {
    match difficulty {
        Difficulty::Easy => LayoutPlan {
            rows: &EASY_ROWS,
            placement: Placement::Every,
        },
        Difficulty::Normal => LayoutPlan {
            rows: &NORMAL_ROWS,
            placement: Placement::EvenCells,
        },
        Difficulty::Hard => LayoutPlan {
            rows: &HARD_ROWS,
            placement: Placement::Every,
        },
        Difficulty::Random => LayoutPlan {
            rows: &RANDOM_ROWS,
            placement: Placement::OneIn(RANDOM_BRICK_ODDS),
        },
    }
}

/// Random color with each channel drawn from {0.0, 0.1, ..., 0.9}
pub fn palette_color<R: Rng>(rng: &mut R) -> Color {
    let mut channel = || rng.random_range(0..10u8) as f32 / 10.0;
    rgb(channel(), channel(), channel())
}

/// Centres of every grid cell of a layout, row by row
pub fn grid_cells(rows: &[RowPlan]) -> impl Iterator<Item = (Vec2, &RowPlan)> + '_ {
    rows.iter().enumerate().flat_map(|(row, plan)| {
        let y = BRICK_TOP_ROW_Y - row as f32 * BRICK_ROW_STEP;
        std::iter::successors(Some(plan.start_x), |x| Some(x - BRICK_COLUMN_STRIDE))
            .take_while(|&x| x > BRICK_MIN_X)
            .map(move |x| (Vec2::new(x, y), plan))
    })
}

/// Build a layout. `include` decides random placements so tests can force them.
pub fn build_layout_with<R, F>(plan: &LayoutPlan, rng: &mut R, mut include: F) -> Vec<Brick>
where
    R: Rng,
    F: FnMut(&mut R) -> bool,
{
    let mut bricks = Vec::new();
    for (index, (pos, row)) in grid_cells(plan.rows).enumerate() {
        let placed = match plan.placement {
            Placement::Every => true,
            Placement::EvenCells => index % 2 == 0,
            Placement::OneIn(_) => include(&mut *rng),
        };
        if !placed {
            continue;
        }
        let color = match row.color {
            Some(color) => color,
            None => palette_color(rng),
        };
        bricks.push(Brick::new(pos, color));
    }

    // An empty board can never be won
    if bricks.is_empty() {
        log::debug!("Layout produced no bricks, placing fallback brick");
        bricks.push(Brick::new(RANDOM_FALLBACK_BRICK, palette_color(rng)));
    }

    bricks
}

/// Build the layout for a difficulty
pub fn build_layout<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Vec<Brick> {
    let plan = layout_plan(difficulty);
    let odds = match plan.placement {
        Placement::OneIn(n) => n.max(1),
        _ => 1,
    };
    build_layout_with(&plan, rng, |rng| rng.random_ratio(1, odds))
}

/// The four brick collections
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Levels {
    pub easy: Vec<Brick>,
    pub normal: Vec<Brick>,
    pub hard: Vec<Brick>,
    pub random: Vec<Brick>,
}

impl Levels {
    /// Generate all four layouts from scratch
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self {
            easy: build_layout(Difficulty::Easy, rng),
            normal: build_layout(Difficulty::Normal, rng),
            hard: build_layout(Difficulty::Hard, rng),
            random: build_layout(Difficulty::Random, rng),
        }
    }

    pub fn get(&self, difficulty: Difficulty) -> &[Brick] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Random => &self.random,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut Vec<Brick> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Normal => &mut self.normal,
            Difficulty::Hard => &mut self.hard,
            Difficulty::Random => &mut self.random,
        }
    }

    /// Bricks still in play for a difficulty
    pub fn alive_count(&self, difficulty: Difficulty) -> usize {
        self.get(difficulty).iter().filter(|b| b.alive).count()
    }

    /// True once every brick of the layout is destroyed
    pub fn is_cleared(&self, difficulty: Difficulty) -> bool {
        self.get(difficulty).iter().all(|b| !b.alive)
    }
}
