use std::collections::BTreeSet;

use serde::Serialize;

use super::collection::Listing;

/// Session-scoped set of saved record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bookmarks {
    ids: BTreeSet<u32>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the bookmark for `id`, returning whether it is now bookmarked.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn set(&mut self, id: u32, bookmarked: bool) {
        if bookmarked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Bookmarked entries of a derived view, keeping its order.
    pub fn filter<'r, L: Listing>(&self, derived: &[&'r L]) -> Vec<&'r L> {
        derived
            .iter()
            .copied()
            .filter(|record| self.contains(record.id()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardFixture, Job};

    #[test]
    fn toggle_adds_then_removes() {
        let mut bookmarks = Bookmarks::new();
        assert!(bookmarks.toggle(4));
        assert!(bookmarks.contains(4));
        assert!(!bookmarks.toggle(4));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn filter_keeps_view_order() {
        let fixture = BoardFixture::sample();
        let derived: Vec<&Job> = fixture.jobs().iter().collect();
        let mut bookmarks = Bookmarks::new();
        bookmarks.set(6, true);
        bookmarks.set(2, true);

        let saved: Vec<u32> = bookmarks.filter(&derived).iter().map(|job| job.id).collect();
        assert_eq!(saved, vec![2, 6]);
        assert_eq!(bookmarks.ids().collect::<Vec<_>>(), vec![2, 6]);
    }
}
