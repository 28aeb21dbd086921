/// Insertion-ordered entity container with O(1) removal by id.
///
/// Removal leaves a hole that is compacted once holes outnumber live
/// entries, so iteration order always matches insertion order.

use std::collections::HashMap;

use crate::entities::{EntityId, Rect, Sprite};
use crate::spatial::SpatialHash;

const COMPACT_MIN_HOLES: usize = 32;

pub struct SpriteList<T> {
    slots: Vec<Option<T>>,
    index: HashMap<EntityId, usize>,
    spatial: Option<SpatialHash>,
}

impl<T: Sprite> Default for SpriteList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sprite> SpriteList<T> {
    pub fn new() -> Self {
        SpriteList {
            slots: Vec::new(),
            index: HashMap::new(),
            spatial: None,
        }
    }

    /// A list whose overlap queries go through a spatial hash.  Members
    /// must not move once inserted.
    pub fn with_spatial_hash(cell_size: f32) -> Self {
        SpriteList {
            spatial: Some(SpatialHash::new(cell_size)),
            ..Self::new()
        }
    }

    pub fn is_spatially_hashed(&self) -> bool {
        self.spatial.is_some()
    }

    /// Append `item`.  An item whose id is already present replaces it in place.
    pub fn push(&mut self, item: T) {
        let id = item.id();
        let bounds = item.bounds();
        if let Some(&slot) = self.index.get(&id) {
            if let Some(spatial) = self.spatial.as_mut() {
                if let Some(old) = &self.slots[slot] {
                    spatial.remove(id, &old.bounds());
                }
                spatial.insert(id, &bounds);
            }
            self.slots[slot] = Some(item);
            return;
        }
        if let Some(spatial) = self.spatial.as_mut() {
            spatial.insert(id, &bounds);
        }
        self.index.insert(id, self.slots.len());
        self.slots.push(Some(item));
    }

    /// Remove by id.  Removing an absent id is a no-op returning `None`.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let slot = self.index.remove(&id)?;
        let item = self.slots[slot].take();
        if let (Some(spatial), Some(item)) = (self.spatial.as_mut(), item.as_ref()) {
            spatial.remove(id, &item.bounds());
        }
        self.compact_if_sparse();
        item
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.index.get(&id).and_then(|&slot| self.slots[slot].as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        match self.index.get(&id) {
            Some(&slot) => self.slots[slot].as_mut(),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().flatten()
    }

    /// Snapshot of live ids in iteration order, for loops that remove.
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(Sprite::id).collect()
    }

    /// Ids of every member whose bounds overlap `rect`, in iteration order.
    pub fn overlapping(&self, rect: &Rect) -> Vec<EntityId> {
        match &self.spatial {
            Some(spatial) => {
                let mut hits: Vec<(usize, EntityId)> = spatial
                    .candidates(rect)
                    .into_iter()
                    .filter_map(|id| {
                        let slot = *self.index.get(&id)?;
                        let item = self.slots[slot].as_ref()?;
                        item.bounds().overlaps(rect).then_some((slot, id))
                    })
                    .collect();
                hits.sort_unstable_by_key(|&(slot, _)| slot);
                hits.into_iter().map(|(_, id)| id).collect()
            }
            None => self
                .iter()
                .filter(|item| item.bounds().overlaps(rect))
                .map(Sprite::id)
                .collect(),
        }
    }

    fn compact_if_sparse(&mut self) {
        let holes = self.slots.len() - self.index.len();
        if holes < COMPACT_MIN_HOLES || holes <= self.index.len() {
            return;
        }
        self.slots.retain(Option::is_some);
        self.index.clear();
        for (slot, item) in self.slots.iter().enumerate() {
            if let Some(item) = item {
                self.index.insert(item.id(), slot);
            }
        }
    }
}
