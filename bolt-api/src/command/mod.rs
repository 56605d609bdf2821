//! Command registration and execution.
//!
//! Plugins describe a command as a [`CommandTree`](tree::CommandTree) of
//! literals and arguments with a [`CommandExecutor`] at each runnable leaf,
//! then register it through [`Context`](crate::context::Context). The host
//! parses player input against the tree and invokes the matching executor.

pub mod args;
pub mod tree;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::context::Context;
use crate::player::Player;
use crate::text::TextComponent;

use args::ConsumedArgs;

#[derive(Debug)]
pub enum CommandError {
    /// The executor rejected the invocation; the text is shown to the sender.
    CommandFailed(TextComponent),
    /// No such command, or the input did not reach a runnable node.
    InvalidUsage(TextComponent),
}

pub type CommandResult<'a> = Pin<Box<dyn Future<Output = Result<i32, CommandError>> + Send + 'a>>;

pub trait CommandExecutor: Send + Sync {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        context: &'a Arc<Context>,
        args: &'a ConsumedArgs,
    ) -> CommandResult<'a>;
}

pub enum CommandSender {
    Console,
    Player(Arc<Player>),
}

impl CommandSender {
    pub fn as_player(&self) -> Option<&Arc<Player>> {
        match self {
            Self::Player(player) => Some(player),
            Self::Console => None,
        }
    }

    pub async fn send_message(&self, message: TextComponent) {
        match self {
            Self::Player(player) => player.send_system_message(&message).await,
            Self::Console => log::info!("{}", message.content()),
        }
    }
}
