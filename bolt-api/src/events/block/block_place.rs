use std::sync::Arc;

use crate::events::{Cancellable, Event};
use crate::math::BlockPos;
use crate::player::Player;

use super::{BlockEvent, BlockPlayerEvent};

/// Fired when a player places a block, before it lands in the world.
pub struct BlockPlaceEvent {
    /// The player placing the block.
    pub player: Arc<Player>,

    /// Where the block is being placed.
    pub block_position: BlockPos,

    /// Dimension the placement happens in.
    pub dimension_id: u8,

    pub cancelled: bool,
}

impl Event for BlockPlaceEvent {
    fn name(&self) -> &'static str {
        "block_place"
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for BlockPlaceEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl BlockEvent for BlockPlaceEvent {
    fn get_block_position(&self) -> BlockPos {
        self.block_position
    }
}

impl BlockPlayerEvent for BlockPlaceEvent {
    fn get_player(&self) -> Option<&Arc<Player>> {
        Some(&self.player)
    }
}
