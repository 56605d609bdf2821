//! Player handles.
//!
//! A [`Player`] is the host's view of a connected user: identity, position,
//! and an outgoing message channel. Delivery goes through a [`MessageSink`]
//! so the host can attach a real connection and tests can attach a recorder.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::math::Vector3;
use crate::text::TextComponent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub id: Uuid,
    pub name: String,
}

/// Where system messages for one player end up.
pub trait MessageSink: Send + Sync {
    fn deliver(&self, message: &TextComponent);
}

/// A sink that keeps every delivered message in memory. Used by headless
/// setups and tests.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<TextComponent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<TextComponent> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl MessageSink for MemorySink {
    fn deliver(&self, message: &TextComponent) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.clone());
        }
    }
}

pub struct Player {
    pub gameprofile: GameProfile,
    position: Mutex<Vector3<f64>>,
    sink: Arc<dyn MessageSink>,
}

impl Player {
    pub fn new(id: Uuid, name: impl Into<String>, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            gameprofile: GameProfile {
                id,
                name: name.into(),
            },
            position: Mutex::new(Vector3::new(0.0, 0.0, 0.0)),
            sink,
        }
    }

    pub async fn send_system_message(&self, message: &TextComponent) {
        self.sink.deliver(message);
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
            .lock()
            .map(|p| *p)
            .unwrap_or(Vector3::new(0.0, 0.0, 0.0))
    }

    pub fn set_position(&self, position: Vector3<f64>) {
        if let Ok(mut p) = self.position.lock() {
            *p = position;
        }
    }
}
