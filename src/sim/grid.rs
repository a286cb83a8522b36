//! Block grid
//!
//! A fixed columns × rows array of blocks laid out once per session. Cells are
//! never added or removed; only their visibility flag changes, so indices
//! stay valid for collision iteration and rendering.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;

/// Position of a block in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    pub column: usize,
    pub row: usize,
}

impl BlockId {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub rect: Rect,
    pub visible: bool,
}

/// Layout parameters for [`BlockGrid::initialize`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub block_size: Vec2,
    pub padding: f32,
    pub offset: Vec2,
}

impl GridLayout {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            columns: config.block_columns,
            rows: config.block_rows,
            block_size: config.block_size(),
            padding: config.block_padding,
            offset: config.block_offset(),
        }
    }
}

/// The grid of blocks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    columns: usize,
    rows: usize,
    blocks: Vec<Block>,
}

impl BlockGrid {
    /// Lay out every block from its (column, row); all start visible
    pub fn initialize(layout: GridLayout) -> Self {
        let pitch = layout.block_size + Vec2::splat(layout.padding);
        let mut blocks = Vec::with_capacity(layout.columns * layout.rows);
        for column in 0..layout.columns {
            for row in 0..layout.rows {
                let pos = Vec2::new(column as f32 * pitch.x, row as f32 * pitch.y) + layout.offset;
                blocks.push(Block {
                    id: BlockId::new(column, row),
                    rect: Rect::from_pos_size(pos, layout.block_size),
                    visible: true,
                });
            }
        }

        Self {
            columns: layout.columns,
            rows: layout.rows,
            blocks,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::initialize(GridLayout::from_config(config))
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    fn index(&self, id: BlockId) -> Option<usize> {
        (id.column < self.columns && id.row < self.rows).then(|| id.column * self.rows + id.row)
    }

    pub fn get(&self, column: usize, row: usize) -> Option<&Block> {
        self.index(BlockId::new(column, row)).map(|i| &self.blocks[i])
    }

    /// All blocks, column by column
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Call `f` for every visible block, in column-major order
    pub fn for_each_visible<F: FnMut(&Block)>(&self, mut f: F) {
        self.blocks.iter().filter(|b| b.visible).for_each(|b| f(b));
    }

    /// Hide a block. Returns true if it was visible.
    pub fn hide(&mut self, id: BlockId) -> bool {
        match self.index(id) {
            Some(i) if self.blocks[i].visible => {
                self.blocks[i].visible = false;
                true
            }
            _ => false,
        }
    }

    /// Make every block visible again
    pub fn reset_all(&mut self) {
        for block in &mut self.blocks {
            block.visible = true;
        }
    }

    pub fn visible_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.visible).count()
    }

    /// True once every block has been hidden
    pub fn is_cleared(&self) -> bool {
        self.blocks.iter().all(|b| !b.visible)
    }
}
