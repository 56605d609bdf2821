use std::sync::Arc;

use crate::events::{Cancellable, Event};
use crate::math::Vector3;
use crate::player::Player;

use super::PlayerEvent;

/// Fired for every position change of a player.
pub struct PlayerMoveEvent {
    /// The moving player.
    pub player: Arc<Player>,

    /// Position before the move.
    pub from: Vector3<f64>,

    /// Position after the move; cancelling keeps the player at `from`.
    pub to: Vector3<f64>,

    pub cancelled: bool,
}

impl Event for PlayerMoveEvent {
    fn name(&self) -> &'static str {
        "player_move"
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for PlayerMoveEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl PlayerEvent for PlayerMoveEvent {
    fn get_player(&self) -> &Arc<Player> {
        &self.player
    }
}
