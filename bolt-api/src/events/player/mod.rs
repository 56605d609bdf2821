pub mod player_chat;
pub mod player_interact;
pub mod player_join;
pub mod player_leave;
pub mod player_move;

use std::sync::Arc;

use crate::player::Player;

/// Common accessor for events about a single player.
pub trait PlayerEvent: super::Event {
    fn get_player(&self) -> &Arc<Player>;
}
