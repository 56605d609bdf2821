use std::sync::Arc;

use crate::events::{Cancellable, Event};
use crate::math::BlockPos;
use crate::player::Player;

use super::{BlockEvent, BlockPlayerEvent};

/// Fired when a block is about to be broken.
pub struct BlockBreakEvent {
    /// The breaking player, or `None` for environmental causes
    /// (explosions, fire).
    pub player: Option<Arc<Player>>,

    /// The block being broken.
    pub block_position: BlockPos,

    /// Dimension the block is in.
    pub dimension_id: u8,

    pub cancelled: bool,
}

impl Event for BlockBreakEvent {
    fn name(&self) -> &'static str {
        "block_break"
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for BlockBreakEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl BlockEvent for BlockBreakEvent {
    fn get_block_position(&self) -> BlockPos {
        self.block_position
    }
}

impl BlockPlayerEvent for BlockBreakEvent {
    fn get_player(&self) -> Option<&Arc<Player>> {
        self.player.as_ref()
    }
}
