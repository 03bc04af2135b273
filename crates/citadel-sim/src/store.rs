//! Fixed-capacity entity stores backed by parallel arrays.
//!
//! Each entity class keeps its logic, physics, and sprite records in three
//! index-aligned arrays sharing one length. Index i always refers to the
//! same entity across all three, before and after any spawn or eviction.
//! That invariant is the load-bearing contract of the whole engine, so the
//! stores are the only code allowed to grow or shrink the arrays: `spawn`
//! appends to all three or rejects at capacity, `remove_at` shifts all
//! three, and nothing else mutates their lengths.
//!
//! Removal preserves insertion order — targeting scans and the
//! "most recently spawned" spacing gate both rely on it.

use citadel_core::components::{
    OutpostLogic, OutpostPhysics, OutpostSprite, ShotAnimation, TankLogic, TankPhysics, TankSprite,
};

/// Parallel store for all live tanks.
#[derive(Debug)]
pub struct TankStore {
    capacity: usize,
    logic: Vec<TankLogic>,
    physics: Vec<TankPhysics>,
    sprites: Vec<TankSprite>,
}

impl TankStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            logic: Vec::with_capacity(capacity),
            physics: Vec::with_capacity(capacity),
            sprites: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.debug_check_aligned();
        self.logic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append one tank to all three arrays. Returns false (and creates
    /// nothing) when the store is at capacity.
    #[must_use]
    pub fn spawn(&mut self, logic: TankLogic, physics: TankPhysics, sprite: TankSprite) -> bool {
        if self.is_full() {
            return false;
        }
        self.logic.push(logic);
        self.physics.push(physics);
        self.sprites.push(sprite);
        self.debug_check_aligned();
        true
    }

    /// Remove the tank at `index` from all three arrays, shifting later
    /// entries down so the arrays stay contiguous and aligned.
    pub fn remove_at(&mut self, index: usize) {
        let _ = self.logic.remove(index);
        let _ = self.physics.remove(index);
        let _ = self.sprites.remove(index);
        self.debug_check_aligned();
    }

    pub fn clear(&mut self) {
        self.logic.clear();
        self.physics.clear();
        self.sprites.clear();
    }

    pub fn logic(&self) -> &[TankLogic] {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut [TankLogic] {
        &mut self.logic
    }

    pub fn physics(&self) -> &[TankPhysics] {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut [TankPhysics] {
        &mut self.physics
    }

    pub fn sprites(&self) -> &[TankSprite] {
        &self.sprites
    }

    pub fn sprites_mut(&mut self) -> &mut [TankSprite] {
        &mut self.sprites
    }

    fn debug_check_aligned(&self) {
        debug_assert_eq!(self.logic.len(), self.physics.len());
        debug_assert_eq!(self.logic.len(), self.sprites.len());
        debug_assert!(self.logic.len() <= self.capacity);
    }
}

/// Parallel store for all placed outposts.
#[derive(Debug)]
pub struct OutpostStore {
    capacity: usize,
    logic: Vec<OutpostLogic>,
    physics: Vec<OutpostPhysics>,
    sprites: Vec<OutpostSprite>,
}

impl OutpostStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            logic: Vec::with_capacity(capacity),
            physics: Vec::with_capacity(capacity),
            sprites: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.debug_check_aligned();
        self.logic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append one outpost to all three arrays. Returns false at capacity.
    #[must_use]
    pub fn spawn(
        &mut self,
        logic: OutpostLogic,
        physics: OutpostPhysics,
        sprite: OutpostSprite,
    ) -> bool {
        if self.is_full() {
            return false;
        }
        self.logic.push(logic);
        self.physics.push(physics);
        self.sprites.push(sprite);
        self.debug_check_aligned();
        true
    }

    /// Remove the outpost at `index` from all three arrays.
    pub fn remove_at(&mut self, index: usize) {
        let _ = self.logic.remove(index);
        let _ = self.physics.remove(index);
        let _ = self.sprites.remove(index);
        self.debug_check_aligned();
    }

    pub fn clear(&mut self) {
        self.logic.clear();
        self.physics.clear();
        self.sprites.clear();
    }

    pub fn logic(&self) -> &[OutpostLogic] {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut [OutpostLogic] {
        &mut self.logic
    }

    pub fn physics(&self) -> &[OutpostPhysics] {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut [OutpostPhysics] {
        &mut self.physics
    }

    pub fn sprites(&self) -> &[OutpostSprite] {
        &self.sprites
    }

    pub fn sprites_mut(&mut self) -> &mut [OutpostSprite] {
        &mut self.sprites
    }

    fn debug_check_aligned(&self) {
        debug_assert_eq!(self.logic.len(), self.physics.len());
        debug_assert_eq!(self.logic.len(), self.sprites.len());
        debug_assert!(self.logic.len() <= self.capacity);
    }
}

/// Fixed-capacity pool of in-flight shot animations.
///
/// One pool exists per firer class (outpost shots and tank shots age and
/// evict independently). A full pool drops new shots silently — losing a
/// muzzle flash is harmless, corrupting the arrays is not.
#[derive(Debug)]
pub struct ShotPool<V> {
    capacity: usize,
    shots: Vec<ShotAnimation<V>>,
}

impl<V> ShotPool<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            shots: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Append a shot. Returns false (dropping the shot) at capacity.
    #[must_use]
    pub fn push(&mut self, shot: ShotAnimation<V>) -> bool {
        if self.shots.len() >= self.capacity {
            return false;
        }
        self.shots.push(shot);
        true
    }

    pub fn remove_at(&mut self, index: usize) {
        let _ = self.shots.remove(index);
    }

    pub fn clear(&mut self) {
        self.shots.clear();
    }

    pub fn shots(&self) -> &[ShotAnimation<V>] {
        &self.shots
    }

    pub fn shots_mut(&mut self) -> &mut [ShotAnimation<V>] {
        &mut self.shots
    }
}
