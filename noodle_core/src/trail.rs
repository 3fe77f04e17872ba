//! Gesture trail: the last few pointer positions, drawn as fading dots.
//!
//! Appended on every drag sample, cleared on pointer-down, and shortened by
//! one point per idle frame.

use std::collections::VecDeque;

use crate::geometry::Point;

#[derive(Clone, Debug)]
pub struct GestureTrail {
    points:   VecDeque<Point>,
    capacity: usize,
}

impl GestureTrail {
    pub fn new(capacity: usize) -> Self {
        GestureTrail { points: VecDeque::new(), capacity: capacity.max(1) }
    }

    /// Append `p`; the oldest point falls off once over capacity.
    pub fn push(&mut self, p: Point) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Drop the oldest point. Returns false when already empty.
    pub fn decay(&mut self) -> bool {
        self.points.pop_front().is_some()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize           { self.points.len() }
    pub fn is_empty(&self) -> bool       { self.points.is_empty() }
    pub fn capacity(&self) -> usize      { self.capacity }

    /// Oldest first.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// Points paired with their alpha `i / len`: the oldest is transparent,
    /// the newest nearly opaque.
    pub fn faded(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        let len = self.points.len() as f64;
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, i as f64 / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Point {
        Point::new(i as f64, 0.0)
    }

    #[test]
    fn evicts_oldest_over_capacity() {
        let mut t = GestureTrail::new(20);
        for i in 0..35 {
            t.push(p(i));
            assert!(t.len() <= 20);
        }
        assert_eq!(t.len(), 20);
        assert_eq!(t.points().next(), Some(&p(15)));
        assert_eq!(t.points().last(), Some(&p(34)));
    }

    #[test]
    fn huge_capacity_allocates_lazily() {
        let mut t = GestureTrail::new(usize::MAX);
        assert_eq!(t.capacity(), usize::MAX);
        t.push(p(1));
        t.push(p(2));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn decay_shrinks_one_per_call() {
        let mut t = GestureTrail::new(20);
        for i in 0..5 { t.push(p(i)); }
        for remaining in (0..5).rev() {
            assert!(t.decay());
            assert_eq!(t.len(), remaining);
        }
        assert!(!t.decay());
    }

    #[test]
    fn faded_alpha_rises_toward_newest() {
        let mut t = GestureTrail::new(4);
        for i in 0..4 { t.push(p(i)); }
        let alphas: Vec<f64> = t.faded().map(|(_, a)| a).collect();
        assert_eq!(alphas, vec![0.0, 0.25, 0.5, 0.75]);
    }
}
