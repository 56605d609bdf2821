//! Per-player last-activity and AFK flags.
//!
//! Movement, chat, and block changes mark a player active. The flags are
//! rebuilt from the online player list on every plugin (re)load, since the
//! previous instance's state is gone after a reload.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use uuid::Uuid;

#[derive(Debug, Default)]
pub struct ActivityTracker {
    last_activity: HashMap<Uuid, SystemTime>,
    afk: HashMap<Uuid, bool>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the player active now. Returns `true` when this cleared an AFK
    /// flag, so the caller can announce the return.
    pub fn mark_active(&mut self, player: Uuid) -> bool {
        self.last_activity.insert(player, SystemTime::now());
        self.afk.insert(player, false) == Some(true)
    }

    pub fn set_afk(&mut self, player: Uuid, afk: bool) {
        self.afk.insert(player, afk);
    }

    pub fn is_afk(&self, player: &Uuid) -> bool {
        self.afk.get(player).copied().unwrap_or(false)
    }

    pub fn last_activity(&self, player: &Uuid) -> Option<SystemTime> {
        self.last_activity.get(player).copied()
    }

    pub fn remove(&mut self, player: &Uuid) {
        self.last_activity.remove(player);
        self.afk.remove(player);
    }

    /// Seeds fresh state for everyone currently online, as done on load.
    pub fn reset(&mut self, players: impl IntoIterator<Item = Uuid>) {
        self.last_activity.clear();
        self.afk.clear();
        let now = SystemTime::now();
        for player in players {
            self.last_activity.insert(player, now);
            self.afk.insert(player, false);
        }
    }

    /// Flags players idle for longer than `timeout` as AFK and returns the
    /// newly flagged ones. Intended to be driven by a host-scheduled tick.
    pub fn sweep_idle(&mut self, timeout: Duration) -> Vec<Uuid> {
        let now = SystemTime::now();
        let mut newly_afk = Vec::new();
        for (player, last) in &self.last_activity {
            if self.afk.get(player).copied().unwrap_or(false) {
                continue;
            }
            let idle = now.duration_since(*last).unwrap_or(Duration::ZERO);
            if idle >= timeout {
                newly_afk.push(*player);
            }
        }
        for player in &newly_afk {
            self.afk.insert(*player, true);
        }
        newly_afk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_active_reports_afk_return() {
        let mut tracker = ActivityTracker::new();
        let player = Uuid::new_v4();

        assert!(!tracker.mark_active(player));
        tracker.set_afk(player, true);
        assert!(tracker.is_afk(&player));
        assert!(tracker.mark_active(player));
        assert!(!tracker.is_afk(&player));
    }

    #[test]
    fn reset_seeds_online_players() {
        let mut tracker = ActivityTracker::new();
        let stale = Uuid::new_v4();
        let online = Uuid::new_v4();

        tracker.mark_active(stale);
        tracker.set_afk(stale, true);
        tracker.reset([online]);

        assert!(tracker.last_activity(&stale).is_none());
        assert!(!tracker.is_afk(&stale));
        assert!(tracker.last_activity(&online).is_some());
    }

    #[test]
    fn sweep_flags_idle_players_once() {
        let mut tracker = ActivityTracker::new();
        let player = Uuid::new_v4();
        tracker.mark_active(player);

        let newly_afk = tracker.sweep_idle(Duration::ZERO);
        assert_eq!(newly_afk, vec![player]);
        assert!(tracker.is_afk(&player));

        // Already flagged, not reported again.
        assert!(tracker.sweep_idle(Duration::ZERO).is_empty());
    }

    #[test]
    fn sweep_respects_timeout() {
        let mut tracker = ActivityTracker::new();
        let player = Uuid::new_v4();
        tracker.mark_active(player);

        assert!(tracker.sweep_idle(Duration::from_secs(300)).is_empty());
        assert!(!tracker.is_afk(&player));
    }

    #[test]
    fn remove_forgets_the_player() {
        let mut tracker = ActivityTracker::new();
        let player = Uuid::new_v4();

        tracker.mark_active(player);
        tracker.remove(&player);
        assert!(tracker.last_activity(&player).is_none());
        assert!(!tracker.is_afk(&player));
    }
}
