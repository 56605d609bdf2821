//! Pending-intent stores for the two-step lock workflow.
//!
//! A `/lock` subcommand arms an intent for the issuing player; the next block
//! that player interacts with confirms it. Three independent stores back
//! this: lock/unlock intents, permission transfers, and info requests. Each
//! holds at most one entry per actor, and registering again replaces the
//! previous entry (latest intent wins). Absence of an entry is a normal
//! outcome, never an error.
//!
//! Entries are not expired by elapsed time; `requested_at` is recorded but
//! informational only. A reload constructs a fresh [`LockWorkflowState`], so
//! no intent survives one.

use std::collections::HashMap;
use std::time::SystemTime;

use uuid::Uuid;

/// One outstanding lock or info request by a player.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAction {
    /// When the intent was registered.
    pub requested_at: SystemTime,
    /// The player who issued the command.
    pub actor: Uuid,
    /// `true` to add a lock, `false` to remove one. Always `false` for info
    /// requests.
    pub add: bool,
}

/// One outstanding permission change affecting a second player.
#[derive(Debug, Clone, PartialEq)]
pub struct PermissionTransfer {
    /// When the intent was registered.
    pub requested_at: SystemTime,
    /// The player who issued the command.
    pub actor: Uuid,
    /// The player who will receive or lose access.
    pub target: Uuid,
    /// `true` grants access, `false` revokes it.
    pub grant: bool,
}

/// All pending intents, owned by the plugin instance and shared behind a
/// lock with the command executors and event handlers.
#[derive(Debug, Default)]
pub struct LockWorkflowState {
    locking: HashMap<Uuid, PendingAction>,
    permissions: HashMap<Uuid, PermissionTransfer>,
    info: HashMap<Uuid, PendingAction>,
}

impl LockWorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a lock (`add = true`) or unlock (`add = false`) intent,
    /// replacing any prior lock intent of the actor.
    pub fn register_lock_intent(&mut self, actor: Uuid, add: bool) {
        self.locking.insert(
            actor,
            PendingAction {
                requested_at: SystemTime::now(),
                actor,
                add,
            },
        );
    }

    /// Arms a permission grant (`grant = true`) or revocation for `target`,
    /// replacing any prior permission intent of the actor.
    pub fn register_permission_intent(&mut self, actor: Uuid, target: Uuid, grant: bool) {
        self.permissions.insert(
            actor,
            PermissionTransfer {
                requested_at: SystemTime::now(),
                actor,
                target,
                grant,
            },
        );
    }

    /// Arms an info request: the next interacted block reports its lock
    /// status instead of being used.
    pub fn register_info_intent(&mut self, actor: Uuid) {
        self.info.insert(
            actor,
            PendingAction {
                requested_at: SystemTime::now(),
                actor,
                add: false,
            },
        );
    }

    /// No-op when no lock intent is pending.
    pub fn cancel_lock_intent(&mut self, actor: &Uuid) {
        self.locking.remove(actor);
    }

    /// No-op when no permission intent is pending.
    pub fn cancel_permission_intent(&mut self, actor: &Uuid) {
        self.permissions.remove(actor);
    }

    /// No-op when no info intent is pending.
    pub fn cancel_info_intent(&mut self, actor: &Uuid) {
        self.info.remove(actor);
    }

    /// Drops every pending intent of `actor`, e.g. when they disconnect.
    pub fn cancel_all(&mut self, actor: &Uuid) {
        self.locking.remove(actor);
        self.permissions.remove(actor);
        self.info.remove(actor);
    }

    pub fn pending_lock_intent(&self, actor: &Uuid) -> Option<&PendingAction> {
        self.locking.get(actor)
    }

    pub fn pending_permission_intent(&self, actor: &Uuid) -> Option<&PermissionTransfer> {
        self.permissions.get(actor)
    }

    pub fn pending_info_intent(&self, actor: &Uuid) -> Option<&PendingAction> {
        self.info.get(actor)
    }

    /// Removes and returns the pending lock intent in one step, so the
    /// confirming handler fires it at most once.
    pub fn take_pending_lock_intent(&mut self, actor: &Uuid) -> Option<PendingAction> {
        self.locking.remove(actor)
    }

    /// Removes and returns the pending permission intent in one step.
    pub fn take_pending_permission_intent(&mut self, actor: &Uuid) -> Option<PermissionTransfer> {
        self.permissions.remove(actor)
    }

    /// Removes and returns the pending info intent in one step.
    pub fn take_pending_info_intent(&mut self, actor: &Uuid) -> Option<PendingAction> {
        self.info.remove(actor)
    }

    pub fn is_empty(&self) -> bool {
        self.locking.is_empty() && self.permissions.is_empty() && self.info.is_empty()
    }

    pub fn clear(&mut self) {
        self.locking.clear();
        self.permissions.clear();
        self.info.clear();
    }
}
