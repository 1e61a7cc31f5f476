/// The dot row under the track: one handle per reachable index, exactly one
/// active. The count is `max_index + 1`, not one dot per page of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorSet {
    count: usize,
    active: usize,
}

impl IndicatorSet {
    pub fn rebuild(max_index: usize, active: usize) -> Self {
        Self {
            count: max_index + 1,
            active: active.min(max_index),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn set_active(&mut self, index: usize) {
        self.active = index.min(self.count.saturating_sub(1));
    }

    /// Iterate the dots front to back; the item is true for the active one.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.count).map(move |i| i == self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dot_per_reachable_index() {
        let set = IndicatorSet::rebuild(4, 0);
        assert_eq!(set.count(), 5);
        assert_eq!(set.active(), 0);
    }

    #[test]
    fn degenerate_set_has_one_dot() {
        let set = IndicatorSet::rebuild(0, 0);
        assert_eq!(set.count(), 1);
        assert_eq!(set.active(), 0);
    }

    #[test]
    fn rebuild_clamps_active() {
        let set = IndicatorSet::rebuild(3, 9);
        assert_eq!(set.active(), 3);
    }

    #[test]
    fn set_active_clamps_into_range() {
        let mut set = IndicatorSet::rebuild(2, 0);
        set.set_active(7);
        assert_eq!(set.active(), 2);
    }

    #[test]
    fn iter_marks_exactly_one_active() {
        let set = IndicatorSet::rebuild(4, 2);
        let marks: Vec<bool> = set.iter().collect();
        assert_eq!(marks, vec![false, false, true, false, false]);
    }
}
