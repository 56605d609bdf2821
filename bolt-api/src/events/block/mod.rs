pub mod block_break;
pub mod block_place;

use std::sync::Arc;

use crate::math::BlockPos;
use crate::player::Player;

/// Common accessors for events about a block in the world.
pub trait BlockEvent: super::Event {
    fn get_block_position(&self) -> BlockPos;
}

/// Convenience for block events caused by a player.
pub trait BlockPlayerEvent: BlockEvent {
    fn get_player(&self) -> Option<&Arc<Player>>;
}
