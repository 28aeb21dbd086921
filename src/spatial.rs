/// Uniform-grid spatial hash over entity ids.

use std::collections::{HashMap, HashSet};

use crate::entities::{EntityId, Rect};

pub struct SpatialHash {
    cell_size: f32,
    buckets: HashMap<(i32, i32), Vec<EntityId>>,
}

impl SpatialHash {
    pub fn new(cell_size: f32) -> Self {
        SpatialHash {
            cell_size,
            buckets: HashMap::new(),
        }
    }

    fn cell(&self, v: f32) -> i32 {
        (v / self.cell_size).floor() as i32
    }

    /// Every cell the rectangle touches.
    fn cells(&self, rect: &Rect) -> impl Iterator<Item = (i32, i32)> {
        let (x0, x1) = (self.cell(rect.left), self.cell(rect.right));
        let (y0, y1) = (self.cell(rect.bottom), self.cell(rect.top));
        (x0..=x1).flat_map(move |cx| (y0..=y1).map(move |cy| (cx, cy)))
    }

    pub fn insert(&mut self, id: EntityId, rect: &Rect) {
        let cells: Vec<_> = self.cells(rect).collect();
        for cell in cells {
            self.buckets.entry(cell).or_default().push(id);
        }
    }

    pub fn remove(&mut self, id: EntityId, rect: &Rect) {
        let cells: Vec<_> = self.cells(rect).collect();
        for cell in cells {
            if let Some(bucket) = self.buckets.get_mut(&cell) {
                bucket.retain(|&other| other != id);
                if bucket.is_empty() {
                    self.buckets.remove(&cell);
                }
            }
        }
    }

    /// Ids sharing at least one cell with `rect`.  Callers still need an
    /// exact overlap test.
    pub fn candidates(&self, rect: &Rect) -> Vec<EntityId> {
        let mut seen = HashSet::new();
        self.cells(rect)
            .filter_map(|cell| self.buckets.get(&cell))
            .flatten()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_only_come_from_touched_cells() {
        let mut hash = SpatialHash::new(100.0);
        hash.insert(1, &Rect::from_center(50.0, 50.0, 10.0, 10.0));
        hash.insert(2, &Rect::from_center(950.0, 950.0, 10.0, 10.0));
        hash.insert(3, &Rect::from_center(100.0, 50.0, 20.0, 10.0));

        let near = hash.candidates(&Rect::from_center(60.0, 60.0, 5.0, 5.0));
        assert_eq!(near, vec![1, 3]);

        hash.remove(3, &Rect::from_center(100.0, 50.0, 20.0, 10.0));
        let near = hash.candidates(&Rect::from_center(60.0, 60.0, 5.0, 5.0));
        assert_eq!(near, vec![1]);
        // Emptied buckets are dropped.
        assert_eq!(hash.buckets.len(), 2);
    }
}
