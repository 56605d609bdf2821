//! BlockBolt — block locking with a two-step confirm workflow.
//!
//! `/lock add` (or `remove`, `give`, `take`, `info`) arms a pending intent
//! for the issuing player; the next block that player right-clicks confirms
//! it. This crate is structured in a decentralized way:
//! - **[store]** — pending-intent stores (the workflow state)
//! - **[locks]** — registry of locked blocks
//! - **[activity]** — last-activity and AFK tracking
//! - **[handlers]** — event handlers for confirmation, protection, relays
//! - **[bridge]** — chat bridge to an external messaging service
//! - **[commands]** — /lock command tree and executors

#![allow(improper_ctypes_definitions)]

pub mod activity;
pub mod bridge;
mod commands;
pub mod config;
mod handlers;
pub mod locks;
pub mod store;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use bolt_api::events::EventPriority;
use bolt_api::events::block::block_break::BlockBreakEvent;
use bolt_api::events::block::block_place::BlockPlaceEvent;
use bolt_api::events::player::player_chat::PlayerChatEvent;
use bolt_api::events::player::player_interact::PlayerInteractEvent;
use bolt_api::events::player::player_join::PlayerJoinEvent;
use bolt_api::events::player::player_leave::PlayerLeaveEvent;
use bolt_api::events::player::player_move::PlayerMoveEvent;
use bolt_api::text::{NamedColor, TextComponent};
use bolt_api::{Context, Plugin, PluginMetadata};
use tokio::sync::RwLock;

use activity::ActivityTracker;
use bridge::{ChatBridge, LogBridge};
use config::BlockBoltConfig;
use locks::LockRegistry;
use store::LockWorkflowState;

#[unsafe(no_mangle)]
pub static BOLT_API_VERSION: u32 = bolt_api::PLUGIN_API_VERSION;

#[unsafe(no_mangle)]
pub static METADATA: PluginMetadata<'static> = PluginMetadata {
    name: "blockbolt",
    version: env!("CARGO_PKG_VERSION"),
    authors: "BlockBolt Contributors",
    description: "Block locking with pending-intent confirmation, AFK tracking, and a chat bridge",
};

#[unsafe(no_mangle)]
pub extern "C" fn plugin() -> Box<dyn Plugin> {
    Box::new(BlockBoltPlugin::new())
}

/// Shared handle passed to command executors and event handlers.
#[derive(Clone)]
pub struct PluginState {
    pub config: BlockBoltConfig,
    pub workflow: Arc<RwLock<LockWorkflowState>>,
    pub locks: Arc<RwLock<LockRegistry>>,
    pub activity: Arc<RwLock<ActivityTracker>>,
    pub bridge: Option<Arc<dyn ChatBridge>>,
}

impl PluginState {
    pub fn new(config: BlockBoltConfig) -> Self {
        let bridge: Option<Arc<dyn ChatBridge>> = if config.discord.bridge_enabled() {
            Some(Arc::new(LogBridge {
                channel: config
                    .discord
                    .channel
                    .clone()
                    .unwrap_or_else(|| "bridge".to_string()),
            }))
        } else {
            None
        };
        Self {
            config,
            workflow: Arc::new(RwLock::new(LockWorkflowState::new())),
            locks: Arc::new(RwLock::new(LockRegistry::new())),
            activity: Arc::new(RwLock::new(ActivityTracker::new())),
            bridge,
        }
    }

    /// Sends a line over the bridge when one is configured.
    pub async fn relay(&self, line: String) {
        if let Some(bridge) = &self.bridge {
            bridge.send(&line).await;
        }
    }

    /// Flags idle players as AFK and announces them. The host is expected to
    /// drive this from its repeating-task scheduler.
    pub async fn sweep_afk(&self, context: &Arc<Context>) {
        let timeout = Duration::from_secs(self.config.afk.timeout_secs);
        let newly_afk = { self.activity.write().await.sweep_idle(timeout) };
        for uuid in newly_afk {
            let Some(player) = context.get_player_by_uuid(&uuid) else {
                continue;
            };
            context
                .broadcast_message(
                    &TextComponent::text(format!("{} is now AFK.", player.gameprofile.name))
                        .color_named(NamedColor::Gray),
                )
                .await;
        }
    }
}

pub struct BlockBoltPlugin {
    state: Option<PluginState>,
}

impl BlockBoltPlugin {
    pub fn new() -> Self {
        Self { state: None }
    }

    /// The live state, present after a successful load.
    pub fn state(&self) -> Option<&PluginState> {
        self.state.as_ref()
    }
}

impl Default for BlockBoltPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for BlockBoltPlugin {
    fn on_load(
        &mut self,
        context: Arc<Context>,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + '_>> {
        let config_path = context.get_data_folder().join("config.toml");
        let config = match BlockBoltConfig::load_or_init(&config_path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("blockbolt: Failed to load config: {e}");
                return Box::pin(async move { Err(e) });
            }
        };

        // Fresh stores on every load: pending intents and AFK flags never
        // survive a reload.
        let state = PluginState::new(config);
        self.state = Some(state.clone());

        Box::pin(async move {
            state
                .activity
                .write()
                .await
                .reset(context.players().iter().map(|p| p.gameprofile.id));

            context.register_command(commands::build_tree(state.clone())).await;

            let interact = Arc::new(handlers::InteractHandler {
                state: state.clone(),
            });
            context
                .register_event::<PlayerInteractEvent, _>(interact, EventPriority::Normal, true)
                .await;

            let block_break = Arc::new(handlers::BlockBreakHandler {
                state: state.clone(),
            });
            context
                .register_event::<BlockBreakEvent, _>(block_break, EventPriority::Normal, true)
                .await;

            let block_place = Arc::new(handlers::BlockPlaceHandler {
                state: state.clone(),
            });
            context
                .register_event::<BlockPlaceEvent, _>(block_place, EventPriority::Normal, false)
                .await;

            let join = Arc::new(handlers::JoinHandler {
                state: state.clone(),
            });
            context
                .register_event::<PlayerJoinEvent, _>(join, EventPriority::Normal, false)
                .await;

            let leave = Arc::new(handlers::LeaveHandler {
                state: state.clone(),
            });
            context
                .register_event::<PlayerLeaveEvent, _>(leave, EventPriority::Normal, false)
                .await;

            let chat = Arc::new(handlers::ChatHandler {
                state: state.clone(),
            });
            context
                .register_event::<PlayerChatEvent, _>(chat, EventPriority::Normal, false)
                .await;

            let player_move = Arc::new(handlers::MoveHandler {
                state: state.clone(),
            });
            context
                .register_event::<PlayerMoveEvent, _>(player_move, EventPriority::Normal, false)
                .await;

            if state.bridge.is_some() {
                log::info!("blockbolt: Chat bridge enabled");
            }
            log::info!("blockbolt: Loaded (/lock, lock protection, AFK tracking)");
            Ok(())
        })
    }

    fn on_unload(
        &mut self,
        _context: Arc<Context>,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + '_>> {
        self.state = None;
        Box::pin(async move {
            log::info!("blockbolt: Unloaded");
            Ok(())
        })
    }
}
