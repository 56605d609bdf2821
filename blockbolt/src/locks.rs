//! In-memory registry of locked blocks: owner plus invited friends per
//! block position and dimension. Ownership rules are enforced by the
//! confirming handlers; this store only holds the data.

use std::collections::{HashMap, HashSet};

use bolt_api::math::BlockPos;
use uuid::Uuid;

/// Key for a locked block: (dimension_id, position).
pub type LockKey = (u8, BlockPos);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLock {
    pub owner: Uuid,
    pub friends: HashSet<Uuid>,
}

#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: HashMap<LockKey, BlockLock>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the block to `owner`. Returns `false` when the block already
    /// carries a lock (including the owner's own).
    pub fn lock(&mut self, dimension_id: u8, pos: BlockPos, owner: Uuid) -> bool {
        if self.locks.contains_key(&(dimension_id, pos)) {
            return false;
        }
        self.locks.insert(
            (dimension_id, pos),
            BlockLock {
                owner,
                friends: HashSet::new(),
            },
        );
        true
    }

    pub fn unlock(&mut self, dimension_id: u8, pos: BlockPos) -> Option<BlockLock> {
        self.locks.remove(&(dimension_id, pos))
    }

    pub fn get(&self, dimension_id: u8, pos: BlockPos) -> Option<&BlockLock> {
        self.locks.get(&(dimension_id, pos))
    }

    /// Returns `false` when the block is not locked.
    pub fn add_friend(&mut self, dimension_id: u8, pos: BlockPos, friend: Uuid) -> bool {
        match self.locks.get_mut(&(dimension_id, pos)) {
            Some(lock) => {
                lock.friends.insert(friend);
                true
            }
            None => false,
        }
    }

    /// Returns `true` when the friend was present and got removed.
    pub fn remove_friend(&mut self, dimension_id: u8, pos: BlockPos, friend: &Uuid) -> bool {
        self.locks
            .get_mut(&(dimension_id, pos))
            .is_some_and(|lock| lock.friends.remove(friend))
    }

    /// Unlocked blocks are accessible to everyone.
    pub fn can_access(&self, dimension_id: u8, pos: BlockPos, user: &Uuid) -> bool {
        match self.locks.get(&(dimension_id, pos)) {
            Some(lock) => lock.owner == *user || lock.friends.contains(user),
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POS: BlockPos = BlockPos::new(10, 64, -3);

    #[test]
    fn lock_is_exclusive_per_position() {
        let mut registry = LockRegistry::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        assert!(registry.lock(0, POS, owner));
        assert!(!registry.lock(0, POS, other));
        // Same position in another dimension is a different block.
        assert!(registry.lock(1, POS, other));
    }

    #[test]
    fn access_covers_owner_friends_and_unlocked() {
        let mut registry = LockRegistry::new();
        let owner = Uuid::new_v4();
        let friend = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        assert!(registry.can_access(0, POS, &stranger));

        registry.lock(0, POS, owner);
        registry.add_friend(0, POS, friend);
        assert!(registry.can_access(0, POS, &owner));
        assert!(registry.can_access(0, POS, &friend));
        assert!(!registry.can_access(0, POS, &stranger));

        assert!(registry.remove_friend(0, POS, &friend));
        assert!(!registry.can_access(0, POS, &friend));
        assert!(!registry.remove_friend(0, POS, &friend));
    }

    #[test]
    fn friend_changes_require_a_lock() {
        let mut registry = LockRegistry::new();
        assert!(!registry.add_friend(0, POS, Uuid::new_v4()));
        assert!(!registry.remove_friend(0, POS, &Uuid::new_v4()));
    }

    #[test]
    fn unlock_returns_the_lock() {
        let mut registry = LockRegistry::new();
        let owner = Uuid::new_v4();

        registry.lock(0, POS, owner);
        let removed = registry.unlock(0, POS).unwrap();
        assert_eq!(removed.owner, owner);
        assert!(registry.is_empty());
        assert!(registry.unlock(0, POS).is_none());
    }
}
