//! Seeding heap: array-backed binary max-heap keyed on rating.
//!
//! Built fresh for every scheduling pass and drained once into seed order.
//! Sifting is not stable: equal ratings come out in no particular order.

use crate::team::Team;

pub struct SeedingHeap {
    slots: Vec<Team>,
}

impl SeedingHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity) }
    }

    pub fn from_teams(teams: Vec<Team>) -> Self {
        let mut heap = Self::with_capacity(teams.len());
        for team in teams {
            heap.insert(team);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn insert(&mut self, team: Team) {
        self.slots.push(team);
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the highest-rated team.
    /// Panics if the heap is empty; callers must check is_empty().
    pub fn extract_max(&mut self) -> Team {
        assert!(!self.slots.is_empty(), "extract_max() called on empty heap");
        let top = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Drain into rating-descending seed order.
    pub fn into_seed_order(mut self) -> Vec<Team> {
        let mut seeds = Vec::with_capacity(self.slots.len());
        while !self.is_empty() {
            seeds.push(self.extract_max());
        }
        seeds
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].rating <= self.slots[parent].rating {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut largest = index;

            if left < len && self.slots[left].rating > self.slots[largest].rating {
                largest = left;
            }
            if right < len && self.slots[right].rating > self.slots[largest].rating {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.slots.swap(index, largest);
            index = largest;
        }
    }
}
