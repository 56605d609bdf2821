//! Event handlers: intent confirmation, lock protection, activity tracking,
//! and bridge relays.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bolt_api::Context;
use bolt_api::events::{Cancellable, EventHandler};
use bolt_api::events::block::block_break::BlockBreakEvent;
use bolt_api::events::block::block_place::BlockPlaceEvent;
use bolt_api::events::player::player_chat::PlayerChatEvent;
use bolt_api::events::player::player_interact::PlayerInteractEvent;
use bolt_api::events::player::player_join::PlayerJoinEvent;
use bolt_api::events::player::player_leave::PlayerLeaveEvent;
use bolt_api::events::player::player_move::PlayerMoveEvent;
use bolt_api::text::{NamedColor, TextComponent};
use uuid::Uuid;

use crate::PluginState;
use crate::bridge::{format_chat, format_join, format_leave};

fn display_name(context: &Arc<Context>, uuid: &Uuid) -> String {
    context
        .get_player_by_uuid(uuid)
        .map(|player| player.gameprofile.name.clone())
        .unwrap_or_else(|| uuid.to_string())
}

/// Confirms pending intents: the first right-clicked block after a `/lock`
/// subcommand is the one the intent applies to.
pub struct InteractHandler {
    pub state: PluginState,
}

impl EventHandler<PlayerInteractEvent> for InteractHandler {
    fn handle_blocking<'a>(
        &'a self,
        context: &'a Arc<Context>,
        event: &'a mut PlayerInteractEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let Some(clicked_pos) = event.clicked_pos else {
                return;
            };
            if !event.action.is_right_click() {
                return;
            }
            let uuid = event.player.gameprofile.id;
            let dimension_id = event.dimension_id;

            // One click confirms at most one intent: lock/unlock first, then
            // permission transfer, then info. Each take is remove-and-return,
            // so an intent can never fire twice.
            let pending = {
                self.state
                    .workflow
                    .write()
                    .await
                    .take_pending_lock_intent(&uuid)
            };
            if let Some(intent) = pending {
                let mut locks = self.state.locks.write().await;
                let reply = if intent.add {
                    if locks.lock(dimension_id, clicked_pos, uuid) {
                        log::info!(
                            "blockbolt: {} locked a block at {:?}",
                            event.player.gameprofile.name,
                            clicked_pos,
                        );
                        TextComponent::text("Block locked. Only you and your friends can use it.")
                            .color_named(NamedColor::Green)
                    } else {
                        TextComponent::text("This block is already locked.")
                            .color_named(NamedColor::Red)
                    }
                } else {
                    let owner = locks.get(dimension_id, clicked_pos).map(|lock| lock.owner);
                    match owner {
                        Some(owner) if owner == uuid => {
                            locks.unlock(dimension_id, clicked_pos);
                            TextComponent::text("Lock removed.").color_named(NamedColor::Green)
                        }
                        Some(_) => TextComponent::text("Only the owner can remove this lock.")
                            .color_named(NamedColor::Red),
                        None => TextComponent::text("This block is not locked.")
                            .color_named(NamedColor::Yellow),
                    }
                };
                drop(locks);
                event.player.send_system_message(&reply).await;
                event.set_cancelled(true);
                return;
            }

            let pending = {
                self.state
                    .workflow
                    .write()
                    .await
                    .take_pending_permission_intent(&uuid)
            };
            if let Some(transfer) = pending {
                let mut locks = self.state.locks.write().await;
                let target_name = display_name(context, &transfer.target);
                let owner = locks.get(dimension_id, clicked_pos).map(|lock| lock.owner);
                let reply = match owner {
                    None => TextComponent::text("This block is not locked.")
                        .color_named(NamedColor::Yellow),
                    Some(owner) if owner != uuid => {
                        TextComponent::text("Only the owner can change who may use this block.")
                            .color_named(NamedColor::Red)
                    }
                    Some(_) => {
                        if transfer.grant {
                            locks.add_friend(dimension_id, clicked_pos, transfer.target);
                            TextComponent::text(format!(
                                "{target_name} can now use this block."
                            ))
                            .color_named(NamedColor::Green)
                        } else if locks.remove_friend(dimension_id, clicked_pos, &transfer.target)
                        {
                            TextComponent::text(format!(
                                "{target_name} can no longer use this block."
                            ))
                            .color_named(NamedColor::Green)
                        } else {
                            TextComponent::text(format!(
                                "{target_name} had no access to this block."
                            ))
                            .color_named(NamedColor::Yellow)
                        }
                    }
                };
                drop(locks);
                event.player.send_system_message(&reply).await;
                event.set_cancelled(true);
                return;
            }

            let pending = {
                self.state
                    .workflow
                    .write()
                    .await
                    .take_pending_info_intent(&uuid)
            };
            if pending.is_some() {
                let locks = self.state.locks.read().await;
                let reply = match locks.get(dimension_id, clicked_pos) {
                    Some(lock) => {
                        let owner = display_name(context, &lock.owner);
                        TextComponent::text(format!(
                            "Locked by {owner} ({} with access).",
                            lock.friends.len() + 1,
                        ))
                        .color_named(NamedColor::Aqua)
                    }
                    None => TextComponent::text("This block is not locked.")
                        .color_named(NamedColor::Aqua),
                };
                drop(locks);
                event.player.send_system_message(&reply).await;
                event.set_cancelled(true);
                return;
            }

            // No intent armed: a plain use of the block, gated by its lock.
            let can_access = {
                self.state
                    .locks
                    .read()
                    .await
                    .can_access(dimension_id, clicked_pos, &uuid)
            };
            if !can_access {
                event.set_cancelled(true);
                event
                    .player
                    .send_system_message(
                        &TextComponent::text("This block is locked.")
                            .color_named(NamedColor::Red),
                    )
                    .await;
            }
        })
    }
}

/// Protects locked blocks from being broken; the owner breaking their own
/// block removes the lock with it.
pub struct BlockBreakHandler {
    pub state: PluginState,
}

impl EventHandler<BlockBreakEvent> for BlockBreakHandler {
    fn handle_blocking<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        event: &'a mut BlockBreakEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let dimension_id = event.dimension_id;
            let pos = event.block_position;

            let Some(ref player) = event.player else {
                // Environmental damage never removes a lock.
                if self.state.locks.read().await.get(dimension_id, pos).is_some() {
                    event.cancelled = true;
                }
                return;
            };
            let uuid = player.gameprofile.id;
            self.state.activity.write().await.mark_active(uuid);

            let owner = {
                self.state
                    .locks
                    .read()
                    .await
                    .get(dimension_id, pos)
                    .map(|lock| lock.owner)
            };
            match owner {
                None => {}
                Some(owner) if owner == uuid => {
                    self.state.locks.write().await.unlock(dimension_id, pos);
                    player
                        .send_system_message(
                            &TextComponent::text("Lock removed together with the block.")
                                .color_named(NamedColor::Yellow),
                        )
                        .await;
                }
                Some(_) => {
                    event.cancelled = true;
                    player
                        .send_system_message(
                            &TextComponent::text("This block is locked.")
                                .color_named(NamedColor::Red),
                        )
                        .await;
                }
            }
        })
    }
}

pub struct BlockPlaceHandler {
    pub state: PluginState,
}

impl EventHandler<BlockPlaceEvent> for BlockPlaceHandler {
    fn handle<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        event: &'a BlockPlaceEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            self.state
                .activity
                .write()
                .await
                .mark_active(event.player.gameprofile.id);
        })
    }
}

pub struct JoinHandler {
    pub state: PluginState,
}

impl EventHandler<PlayerJoinEvent> for JoinHandler {
    fn handle<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        event: &'a PlayerJoinEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let name = &event.player.gameprofile.name;
            self.state
                .activity
                .write()
                .await
                .mark_active(event.player.gameprofile.id);
            self.state.relay(format_join(name)).await;
            log::info!("blockbolt: {name} joined");
        })
    }
}

/// A leaving player's confirmation can no longer arrive, so their pending
/// intents go with them. Their block locks stay.
pub struct LeaveHandler {
    pub state: PluginState,
}

impl EventHandler<PlayerLeaveEvent> for LeaveHandler {
    fn handle<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        event: &'a PlayerLeaveEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let uuid = event.player.gameprofile.id;
            let name = &event.player.gameprofile.name;
            self.state.workflow.write().await.cancel_all(&uuid);
            self.state.activity.write().await.remove(&uuid);
            self.state.relay(format_leave(name)).await;
            log::info!("blockbolt: {name} left");
        })
    }
}

pub struct ChatHandler {
    pub state: PluginState,
}

impl EventHandler<PlayerChatEvent> for ChatHandler {
    fn handle<'a>(
        &'a self,
        _context: &'a Arc<Context>,
        event: &'a PlayerChatEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            self.state
                .activity
                .write()
                .await
                .mark_active(event.player.gameprofile.id);
            self.state
                .relay(format_chat(&event.player.gameprofile.name, &event.message))
                .await;
        })
    }
}

pub struct MoveHandler {
    pub state: PluginState,
}

impl EventHandler<PlayerMoveEvent> for MoveHandler {
    fn handle<'a>(
        &'a self,
        context: &'a Arc<Context>,
        event: &'a PlayerMoveEvent,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            let was_afk = {
                self.state
                    .activity
                    .write()
                    .await
                    .mark_active(event.player.gameprofile.id)
            };
            if was_afk {
                context
                    .broadcast_message(
                        &TextComponent::text(format!(
                            "{} is no longer AFK.",
                            event.player.gameprofile.name
                        ))
                        .color_named(NamedColor::Gray),
                    )
                    .await;
            }
        })
    }
}
