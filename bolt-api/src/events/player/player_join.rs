use std::sync::Arc;

use crate::events::Event;
use crate::player::Player;
use crate::text::TextComponent;

use super::PlayerEvent;

/// Fired after a player has joined the server.
pub struct PlayerJoinEvent {
    /// The player who joined.
    pub player: Arc<Player>,

    /// The join message shown to everyone; handlers may replace it.
    pub join_message: TextComponent,
}

impl Event for PlayerJoinEvent {
    fn name(&self) -> &'static str {
        "player_join"
    }
}

impl PlayerEvent for PlayerJoinEvent {
    fn get_player(&self) -> &Arc<Player> {
        &self.player
    }
}
