//! Team registry: chained hash table over a fixed bucket count.
//!
//! RULE: The registry is the only owner of mutable Team state.
//! Simulation and undo mutate teams through find_mut(); every other
//! component keeps names and works on snapshot copies.
//!
//! The hash is the sum of the name's character codes modulo the bucket
//! count. It collides often, so bucket scans must compare full names.
//! The bucket count never changes after construction: no rehashing.

use crate::team::Team;

pub struct TeamRegistry {
    buckets: Vec<Vec<Team>>,
    len:     usize,
}

impl TeamRegistry {
    /// Panics if `bucket_count` is 0; callers validate config first.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "registry needs at least one bucket");
        Self {
            buckets: vec![Vec::new(); bucket_count],
            len:     0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a name lands in.
    pub fn bucket_index(&self, name: &str) -> usize {
        let sum: u64 = name.chars().map(|c| c as u64).sum();
        (sum % self.buckets.len() as u64) as usize
    }

    /// Insert or update. An existing team with the same name has its fields
    /// replaced in place and keeps its position in the bucket.
    /// Returns true if the team is new.
    pub fn insert(&mut self, team: Team) -> bool {
        let index = self.bucket_index(&team.name);
        let bucket = &mut self.buckets[index];

        if let Some(existing) = bucket.iter_mut().find(|t| t.name == team.name) {
            *existing = team;
            return false;
        }

        log::debug!(
            "registry: '{}' -> bucket {index} (depth {})",
            team.name,
            bucket.len() + 1
        );
        bucket.push(team);
        self.len += 1;
        true
    }

    pub fn find(&self, name: &str) -> Option<&Team> {
        self.buckets[self.bucket_index(name)]
            .iter()
            .find(|t| t.name == name)
    }

    /// Live handle into registry storage, not a copy.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Team> {
        let index = self.bucket_index(name);
        self.buckets[index].iter_mut().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Owned copy of every team, bucket-major then insertion order within
    /// each bucket. Writing to the copy never touches the registry.
    pub fn snapshot(&self) -> Vec<Team> {
        let mut teams = Vec::with_capacity(self.len);
        for bucket in &self.buckets {
            teams.extend(bucket.iter().cloned());
        }
        teams
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }
}
