use std::sync::Arc;

use crate::events::{Cancellable, Event};
use crate::player::Player;

use super::PlayerEvent;

/// Fired for every chat message before it is broadcast.
pub struct PlayerChatEvent {
    /// The speaking player.
    pub player: Arc<Player>,

    /// The raw chat line.
    pub message: String,

    pub cancelled: bool,
}

impl Event for PlayerChatEvent {
    fn name(&self) -> &'static str {
        "player_chat"
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for PlayerChatEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl PlayerEvent for PlayerChatEvent {
    fn get_player(&self) -> &Arc<Player> {
        &self.player
    }
}
