use std::sync::Arc;

use crate::events::{Cancellable, Event};
use crate::math::BlockPos;
use crate::player::Player;

use super::PlayerEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClick,
    RightClick,
}

impl InteractAction {
    pub fn is_left_click(self) -> bool {
        self == Self::LeftClick
    }

    pub fn is_right_click(self) -> bool {
        self == Self::RightClick
    }
}

/// Fired when a player clicks a block or the air.
pub struct PlayerInteractEvent {
    /// The interacting player.
    pub player: Arc<Player>,

    /// The clicked block, or `None` for an air click.
    pub clicked_pos: Option<BlockPos>,

    /// Dimension the interaction happens in.
    pub dimension_id: u8,

    pub action: InteractAction,

    pub cancelled: bool,
}

impl Event for PlayerInteractEvent {
    fn name(&self) -> &'static str {
        "player_interact"
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Cancellable for PlayerInteractEvent {
    fn cancelled(&self) -> bool {
        self.cancelled
    }

    fn set_cancelled(&mut self, cancelled: bool) {
        self.cancelled = cancelled;
    }
}

impl PlayerEvent for PlayerInteractEvent {
    fn get_player(&self) -> &Arc<Player> {
        &self.player
    }
}
