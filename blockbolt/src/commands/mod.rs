//! The /lock command tree. Every subcommand only arms (or cancels) an
//! intent; the next right-clicked block confirms it.

mod executors;

use bolt_api::command::args::PlayersArgumentConsumer;
use bolt_api::command::tree::CommandTree;
use bolt_api::command::tree::builder::{argument, literal};

use crate::PluginState;

pub const ARG_PLAYER: &str = "player";

pub fn build_tree(state: PluginState) -> CommandTree {
    CommandTree::new(["lock", "blockbolt"], "Lock blocks and manage who can use them")
        .then(literal("add").execute(executors::AddExecutor(state.clone())))
        .then(literal("remove").execute(executors::RemoveExecutor(state.clone())))
        .then(literal("info").execute(executors::InfoExecutor(state.clone())))
        .then(
            literal("give").then(
                argument(ARG_PLAYER, PlayersArgumentConsumer)
                    .execute(executors::GiveExecutor(state.clone())),
            ),
        )
        .then(
            literal("take").then(
                argument(ARG_PLAYER, PlayersArgumentConsumer)
                    .execute(executors::TakeExecutor(state.clone())),
            ),
        )
        .then(literal("cancel").execute(executors::CancelExecutor(state)))
}
