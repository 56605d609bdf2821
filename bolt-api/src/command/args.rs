//! Argument consumers turn one input token into a typed [`Arg`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::context::Context;
use crate::player::Player;

/// Arguments consumed while walking a command tree, keyed by node name.
pub type ConsumedArgs = HashMap<String, Arg>;

pub enum Arg {
    /// A single raw token.
    Simple(String),
    /// Online players resolved from a name token.
    Players(Vec<Arc<Player>>),
}

pub trait ArgumentConsumer: Send + Sync {
    /// Returns `None` when the token is not acceptable for this argument.
    fn consume(&self, context: &Context, token: &str) -> Option<Arg>;
}

/// Accepts any single token verbatim.
pub struct SimpleArgConsumer;

impl ArgumentConsumer for SimpleArgConsumer {
    fn consume(&self, _context: &Context, token: &str) -> Option<Arg> {
        Some(Arg::Simple(token.to_string()))
    }
}

/// Resolves a token as the name of an online player.
pub struct PlayersArgumentConsumer;

impl ArgumentConsumer for PlayersArgumentConsumer {
    fn consume(&self, context: &Context, token: &str) -> Option<Arg> {
        context
            .get_player_by_name(token)
            .map(|player| Arg::Players(vec![player]))
    }
}
