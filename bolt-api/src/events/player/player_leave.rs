use std::sync::Arc;

use crate::events::Event;
use crate::player::Player;
use crate::text::TextComponent;

use super::PlayerEvent;

/// Fired when a player disconnects.
pub struct PlayerLeaveEvent {
    /// The player who left.
    pub player: Arc<Player>,

    /// The leave message shown to everyone; handlers may replace it.
    pub leave_message: TextComponent,
}

impl Event for PlayerLeaveEvent {
    fn name(&self) -> &'static str {
        "player_leave"
    }
}

impl PlayerEvent for PlayerLeaveEvent {
    fn get_player(&self) -> &Arc<Player> {
        &self.player
    }
}
