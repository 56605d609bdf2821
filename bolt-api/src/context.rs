//! The handle the host passes to a plugin on load.
//!
//! Registration and dispatch live together here so a plugin can be exercised
//! without a running server: the host (or a test) constructs a [`Context`],
//! loads the plugin, then feeds events through [`Context::fire`] and command
//! lines through [`Context::dispatch_command`].

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::command::args::ConsumedArgs;
use crate::command::tree::{CommandTree, Node, NodeKind};
use crate::command::{CommandError, CommandSender};
use crate::events::{Event, EventHandler, EventPriority};
use crate::player::Player;
use crate::text::TextComponent;

struct Registration {
    priority: EventPriority,
    blocking: bool,
    // Holds an `Arc<dyn EventHandler<E>>`, recovered by downcast in `fire`.
    handler: Box<dyn Any + Send + Sync>,
}

pub struct Context {
    data_folder: PathBuf,
    handlers: RwLock<HashMap<TypeId, Vec<Registration>>>,
    commands: RwLock<HashMap<String, Arc<CommandTree>>>,
    players: std::sync::RwLock<HashMap<Uuid, Arc<Player>>>,
}

impl Context {
    pub fn new(data_folder: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self {
            data_folder: data_folder.into(),
            handlers: RwLock::new(HashMap::new()),
            commands: RwLock::new(HashMap::new()),
            players: std::sync::RwLock::new(HashMap::new()),
        })
    }

    /// Folder the plugin may keep its configuration and data in.
    pub fn get_data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub async fn register_event<E: Event, H: EventHandler<E> + 'static>(
        &self,
        handler: Arc<H>,
        priority: EventPriority,
        blocking: bool,
    ) {
        let erased: Arc<dyn EventHandler<E>> = handler;
        let mut handlers = self.handlers.write().await;
        let list = handlers.entry(TypeId::of::<E>()).or_default();
        list.push(Registration {
            priority,
            blocking,
            handler: Box::new(erased),
        });
        list.sort_by_key(|registration| registration.priority);
    }

    /// Delivers an event: blocking handlers first, in priority order; if none
    /// of them cancelled it, non-blocking handlers observe the result.
    pub async fn fire<E: Event>(self: &Arc<Self>, event: &mut E) {
        let registrations: Vec<(bool, Arc<dyn EventHandler<E>>)> = {
            let handlers = self.handlers.read().await;
            handlers
                .get(&TypeId::of::<E>())
                .map(|list| {
                    list.iter()
                        .filter_map(|registration| {
                            registration
                                .handler
                                .downcast_ref::<Arc<dyn EventHandler<E>>>()
                                .map(|handler| (registration.blocking, handler.clone()))
                        })
                        .collect()
                })
                .unwrap_or_default()
        };

        for (blocking, handler) in &registrations {
            if *blocking {
                handler.handle_blocking(self, event).await;
            }
        }
        if event.is_cancelled() {
            return;
        }
        for (blocking, handler) in &registrations {
            if !*blocking {
                handler.handle(self, event).await;
            }
        }
    }

    pub async fn register_command(&self, tree: CommandTree) {
        let tree = Arc::new(tree);
        let mut commands = self.commands.write().await;
        for name in &tree.names {
            commands.insert(name.clone(), tree.clone());
        }
    }

    /// Parses `line` against the registered trees and runs the matching
    /// executor. The leading `/` is optional.
    pub async fn dispatch_command(
        self: &Arc<Self>,
        sender: &CommandSender,
        line: &str,
    ) -> Result<i32, CommandError> {
        let mut parts = line.trim().trim_start_matches('/').split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::InvalidUsage(TextComponent::text(
                "Empty command",
            )));
        };
        let tree = { self.commands.read().await.get(name).cloned() };
        let Some(tree) = tree else {
            return Err(CommandError::InvalidUsage(TextComponent::text(format!(
                "Unknown command '{name}'"
            ))));
        };

        let tokens: Vec<&str> = parts.collect();
        let mut args = ConsumedArgs::new();
        let executor = if tokens.is_empty() {
            tree.executor.clone()
        } else {
            walk(self, &tree.children, &tokens, &mut args)?.executor.clone()
        };
        let Some(executor) = executor else {
            return Err(CommandError::InvalidUsage(TextComponent::text(format!(
                "Usage: /{name} - {}",
                tree.description
            ))));
        };
        executor.execute(sender, self, &args).await
    }

    pub fn add_player(&self, player: Arc<Player>) {
        if let Ok(mut players) = self.players.write() {
            players.insert(player.gameprofile.id, player);
        }
    }

    pub fn remove_player(&self, id: &Uuid) -> Option<Arc<Player>> {
        self.players.write().ok()?.remove(id)
    }

    pub fn get_player_by_uuid(&self, id: &Uuid) -> Option<Arc<Player>> {
        self.players.read().ok()?.get(id).cloned()
    }

    pub fn get_player_by_name(&self, name: &str) -> Option<Arc<Player>> {
        self.players
            .read()
            .ok()?
            .values()
            .find(|player| player.gameprofile.name == name)
            .cloned()
    }

    pub fn players(&self) -> Vec<Arc<Player>> {
        self.players
            .read()
            .map(|players| players.values().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn broadcast_message(&self, message: &TextComponent) {
        for player in self.players() {
            player.send_system_message(message).await;
        }
    }
}

/// Walks one token at a time: literals win over arguments, and an argument
/// node only matches when its consumer accepts the token.
fn walk<'t>(
    context: &Context,
    nodes: &'t [Node],
    tokens: &[&str],
    args: &mut ConsumedArgs,
) -> Result<&'t Node, CommandError> {
    let Some((token, rest)) = tokens.split_first() else {
        return Err(CommandError::InvalidUsage(TextComponent::text(
            "Incomplete command",
        )));
    };

    let mut matched = nodes
        .iter()
        .find(|node| matches!(&node.kind, NodeKind::Literal(keyword) if keyword == token));
    if matched.is_none() {
        for node in nodes {
            if let NodeKind::Argument { name, consumer } = &node.kind {
                if let Some(arg) = consumer.consume(context, token) {
                    args.insert(name.clone(), arg);
                    matched = Some(node);
                    break;
                }
            }
        }
    }

    let Some(node) = matched else {
        return Err(CommandError::InvalidUsage(TextComponent::text(format!(
            "Unexpected token '{token}'"
        ))));
    };
    if rest.is_empty() {
        Ok(node)
    } else {
        walk(context, &node.children, rest, args)
    }
}
