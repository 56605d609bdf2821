//! Executors for each /lock subcommand.

use std::sync::Arc;

use bolt_api::Context;
use bolt_api::command::args::{Arg, ConsumedArgs};
use bolt_api::command::{CommandExecutor, CommandResult, CommandSender};
use bolt_api::player::Player;
use bolt_api::text::{NamedColor, TextComponent};

use crate::PluginState;
use crate::commands::ARG_PLAYER;

async fn require_player<'a>(sender: &'a CommandSender) -> Option<&'a Arc<Player>> {
    let player = sender.as_player();
    if player.is_none() {
        sender
            .send_message(
                TextComponent::text("Only players can manage block locks")
                    .color_named(NamedColor::Red),
            )
            .await;
    }
    player
}

fn target_player(args: &ConsumedArgs) -> Option<Arc<Player>> {
    match args.get(ARG_PLAYER) {
        Some(Arg::Players(players)) => players.first().cloned(),
        _ => None,
    }
}

pub struct AddExecutor(pub PluginState);

impl CommandExecutor for AddExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        _args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            self.0
                .workflow
                .write()
                .await
                .register_lock_intent(player.gameprofile.id, true);
            sender
                .send_message(
                    TextComponent::text("Right-click a block to lock it.")
                        .color_named(NamedColor::Green),
                )
                .await;
            Ok(1)
        })
    }
}

pub struct RemoveExecutor(pub PluginState);

impl CommandExecutor for RemoveExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        _args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            self.0
                .workflow
                .write()
                .await
                .register_lock_intent(player.gameprofile.id, false);
            sender
                .send_message(
                    TextComponent::text("Right-click a block to remove its lock.")
                        .color_named(NamedColor::Green),
                )
                .await;
            Ok(1)
        })
    }
}

pub struct InfoExecutor(pub PluginState);

impl CommandExecutor for InfoExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        _args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            self.0
                .workflow
                .write()
                .await
                .register_info_intent(player.gameprofile.id);
            sender
                .send_message(
                    TextComponent::text("Right-click a block to see its lock status.")
                        .color_named(NamedColor::Green),
                )
                .await;
            Ok(1)
        })
    }
}

pub struct GiveExecutor(pub PluginState);

impl CommandExecutor for GiveExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            let Some(target) = target_player(args) else {
                sender
                    .send_message(
                        TextComponent::text("Specify one online player")
                            .color_named(NamedColor::Red),
                    )
                    .await;
                return Ok(0);
            };
            self.0.workflow.write().await.register_permission_intent(
                player.gameprofile.id,
                target.gameprofile.id,
                true,
            );
            sender
                .send_message(
                    TextComponent::text(format!(
                        "Right-click one of your locked blocks to give {} access.",
                        target.gameprofile.name
                    ))
                    .color_named(NamedColor::Green),
                )
                .await;
            Ok(1)
        })
    }
}

pub struct TakeExecutor(pub PluginState);

impl CommandExecutor for TakeExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            let Some(target) = target_player(args) else {
                sender
                    .send_message(
                        TextComponent::text("Specify one online player")
                            .color_named(NamedColor::Red),
                    )
                    .await;
                return Ok(0);
            };
            self.0.workflow.write().await.register_permission_intent(
                player.gameprofile.id,
                target.gameprofile.id,
                false,
            );
            sender
                .send_message(
                    TextComponent::text(format!(
                        "Right-click one of your locked blocks to revoke {}'s access.",
                        target.gameprofile.name
                    ))
                    .color_named(NamedColor::Green),
                )
                .await;
            Ok(1)
        })
    }
}

pub struct CancelExecutor(pub PluginState);

impl CommandExecutor for CancelExecutor {
    fn execute<'a>(
        &'a self,
        sender: &'a CommandSender,
        _context: &'a Arc<Context>,
        _args: &'a ConsumedArgs,
    ) -> CommandResult<'a> {
        Box::pin(async move {
            let Some(player) = require_player(sender).await else {
                return Ok(0);
            };
            self.0
                .workflow
                .write()
                .await
                .cancel_all(&player.gameprofile.id);
            sender
                .send_message(
                    TextComponent::text("Pending lock actions cancelled.")
                        .color_named(NamedColor::Yellow),
                )
                .await;
            Ok(1)
        })
    }
}
