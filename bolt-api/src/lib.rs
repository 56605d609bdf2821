//! Host-facing plugin API.
//!
//! The host game server owns the process lifecycle, the network stack, and
//! the scheduler; plugins only register callbacks against it. This crate is
//! the seam between the two:
//! - **[events]** — typed event structs and the [`EventHandler`](events::EventHandler) trait
//! - **[command]** — command tree builder and executors
//! - **[context]** — the handle a plugin registers everything through
//! - **[player]** — player handles and message delivery
//!
//! [`Context`] also carries a working dispatcher (`fire`, `dispatch_command`),
//! so a plugin can be driven end-to-end without a running server.

pub mod command;
pub mod context;
pub mod events;
pub mod math;
pub mod player;
pub mod text;

pub use context::Context;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Bumped whenever the loader contract changes; the host refuses plugins
/// built against another version.
pub const PLUGIN_API_VERSION: u32 = 1;

#[derive(Debug, Clone)]
pub struct PluginMetadata<'s> {
    /// The name of the plugin.
    pub name: &'s str,
    /// The version of the plugin.
    pub version: &'s str,
    /// The authors of the plugin.
    pub authors: &'s str,
    /// A description of the plugin.
    pub description: &'s str,
}

pub trait Plugin: Send + Sync + 'static {
    /// Called when the plugin is loaded or reloaded.
    fn on_load(
        &mut self,
        context: Arc<Context>,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + '_>>;

    /// Called when the plugin is unloaded.
    fn on_unload(
        &mut self,
        _context: Arc<Context>,
    ) -> Pin<Box<dyn Future<Output = Result<(), String>> + Send + '_>> {
        Box::pin(async move { Ok(()) })
    }
}
