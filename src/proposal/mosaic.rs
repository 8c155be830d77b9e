//! Decorative photo mosaic behind the question step.
//!
//! The pool is repeated `mosaic_copies` times. Each tile gets a base shape
//! from its aspect bucket and a random scale (1x 60%, 2x 30%, 3x 10%);
//! the column span is capped. Placement is left to the renderer's grid
//! auto-flow, so every assignment is valid by construction.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, ProposalConfig};
use crate::pool::{ImageDescriptor, ImageId, ImagePool};

/// Shape class of a photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectBucket {
    Wide,
    Tall,
    Square,
}

impl AspectBucket {
    /// Classify by aspect ratio. Unknown dimensions count as square.
    #[must_use]
    pub fn classify(image: &ImageDescriptor, wide_ratio: f64, tall_ratio: f64) -> Self {
        let ratio = image.aspect_ratio();
        if ratio > wide_ratio {
            AspectBucket::Wide
        } else if ratio < tall_ratio {
            AspectBucket::Tall
        } else {
            AspectBucket::Square
        }
    }

    /// Unit span `(cols, rows)` before scaling.
    #[must_use]
    pub const fn base_span(self) -> (u32, u32) {
        match self {
            AspectBucket::Wide => (2, 1),
            AspectBucket::Tall => (1, 2),
            AspectBucket::Square => (1, 1),
        }
    }
}

/// Random scale applied to a tile's base shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    Single,
    Double,
    Triple,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Single, SizeClass::Double, SizeClass::Triple];
    pub const WEIGHTS: [f32; 3] = [0.6, 0.3, 0.1];

    #[must_use]
    pub const fn scale(self) -> u32 {
        match self {
            SizeClass::Single => 1,
            SizeClass::Double => 2,
            SizeClass::Triple => 3,
        }
    }

    pub fn draw(rng: &mut GameRng) -> Self {
        rng.choose_weighted(&Self::WEIGHTS)
            .map_or(SizeClass::Single, |i| Self::ALL[i])
    }
}

/// Grid span of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSpan {
    pub cols: u32,
    pub rows: u32,
}

/// One tile of the background mosaic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicTile {
    pub image: ImageId,
    pub bucket: AspectBucket,
    pub size: SizeClass,
    pub span: TileSpan,
}

/// Build the mosaic tiles for a pool.
pub fn build_mosaic(pool: &ImagePool, config: &ProposalConfig, rng: &mut GameRng) -> Vec<MosaicTile> {
    let max_cols = config.mosaic_max_col_span.max(1);
    let mut tiles = Vec::with_capacity(pool.len() * config.mosaic_copies);

    for _ in 0..config.mosaic_copies {
        for (id, image) in pool.iter() {
            let bucket = AspectBucket::classify(image, config.wide_ratio, config.tall_ratio);
            let size = SizeClass::draw(rng);
            let (base_cols, base_rows) = bucket.base_span();
            tiles.push(MosaicTile {
                image: id,
                bucket,
                size,
                span: TileSpan {
                    cols: (base_cols * size.scale()).min(max_cols),
                    rows: base_rows * size.scale(),
                },
            });
        }
    }

    tiles
}
