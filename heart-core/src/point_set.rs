use std::collections::HashSet;

use rand::Rng;

use crate::types::{Point2D, PointKey};

/// An insertion-ordered set of unique points.
///
/// Uniqueness is exact coordinate identity (see [`PointKey`]). Iteration
/// follows insertion order, so a field built from a seeded generator
/// replays identically.
#[derive(Debug, Default, Clone)]
pub struct PointSet {
    points: Vec<Point2D>,
    seen: HashSet<PointKey>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
        }
    }

    pub fn from_positions(positions: impl IntoIterator<Item = Point2D>) -> Self {
        let mut set = Self::new();
        set.extend(positions);
        set
    }

    /// Adds `p` unless an identical point is already present.
    ///
    /// ### Returns
    /// `true` if the point was new.
    pub fn insert(&mut self, p: Point2D) -> bool {
        if self.seen.insert(PointKey::exact(p)) {
            self.points.push(p);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, p: Point2D) -> bool {
        self.seen.contains(&PointKey::exact(p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().copied()
    }

    /// Picks one point uniformly at random, or `None` if the set is empty.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<Point2D> {
        if self.points.is_empty() {
            return None;
        }
        let i = rng.random_range(0..self.points.len());
        Some(self.points[i])
    }
}

impl Extend<Point2D> for PointSet {
    fn extend<I: IntoIterator<Item = Point2D>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn insert_rejects_exact_duplicates() {
        let mut set = PointSet::new();
        assert!(set.insert(Point2D::new(1.0, 2.0)));
        assert!(set.insert(Point2D::new(2.0, 1.0)));
        assert!(!set.insert(Point2D::new(1.0, 2.0)));

        assert_eq!(set.len(), 2);
        assert!(set.contains(Point2D::new(2.0, 1.0)));
        assert!(!set.contains(Point2D::new(2.0, 2.0)));
    }

    #[test]
    fn from_positions_keeps_first_occurrence_order() {
        let set = PointSet::from_positions([
            Point2D::new(3.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(3.0, 0.0),
            Point2D::new(2.0, 0.0),
        ]);

        let xs: Vec<f32> = set.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn choose_on_empty_set_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(PointSet::new().choose(&mut rng).is_none());
    }

    #[test]
    fn choose_returns_members() {
        let mut rng = StdRng::seed_from_u64(9);
        let set = PointSet::from_positions((0..10).map(|i| Point2D::new(i as f32, 0.0)));

        for _ in 0..100 {
            let p = set.choose(&mut rng).unwrap();
            assert!(set.contains(p));
        }
    }
}
