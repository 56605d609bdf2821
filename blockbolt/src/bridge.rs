//! Chat bridge to an external messaging service.
//!
//! The wire client lives outside the plugin; [`ChatBridge`] is the seam the
//! handlers talk to. [`LogBridge`] is the in-repo implementation: it emits
//! outbound lines through the log so a bridge-less setup still records the
//! traffic. Inbound messages arrive via [`relay_inbound`] and are broadcast
//! to everyone online.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bolt_api::Context;
use bolt_api::text::{NamedColor, TextComponent};

pub trait ChatBridge: Send + Sync {
    fn send<'a>(&'a self, message: &'a str) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Logs outbound bridge traffic under the configured channel name.
pub struct LogBridge {
    pub channel: String,
}

impl ChatBridge for LogBridge {
    fn send<'a>(&'a self, message: &'a str) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            log::info!("blockbolt: [-> {}] {message}", self.channel);
        })
    }
}

pub fn format_join(name: &str) -> String {
    format!("**{name}** joined the game")
}

pub fn format_leave(name: &str) -> String {
    format!("**{name}** left the game")
}

pub fn format_chat(name: &str, message: &str) -> String {
    format!("**{name}**: {message}")
}

/// Broadcasts a message coming from the bridge to all online players.
pub async fn relay_inbound(context: &Arc<Context>, author: &str, content: &str) {
    context
        .broadcast_message(
            &TextComponent::text(format!("[Discord] {author}: {content}"))
                .color_named(NamedColor::Aqua),
        )
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_api::player::{MemorySink, Player};
    use uuid::Uuid;

    #[test]
    fn outbound_lines_carry_the_player_name() {
        assert_eq!(format_join("Steve"), "**Steve** joined the game");
        assert_eq!(format_leave("Steve"), "**Steve** left the game");
        assert_eq!(format_chat("Steve", "hi there"), "**Steve**: hi there");
    }

    #[tokio::test]
    async fn inbound_messages_reach_every_player() {
        let context = Context::new("/tmp/blockbolt-bridge-test");
        let sink = Arc::new(MemorySink::new());
        context.add_player(Arc::new(Player::new(
            Uuid::new_v4(),
            "Steve",
            sink.clone(),
        )));

        relay_inbound(&context, "Alex", "hello from outside").await;

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].content(),
            "[Discord] Alex: hello from outside"
        );
    }
}
