//! Ordering of the cloud by distance to a plane.
//!
//! Distances are kept in a side array indexed like the cloud and recomputed
//! for every plane, so ranking the same cloud against different planes never
//! sees stale values. The cloud itself is not reordered; the ranking is a
//! permutation of its indices.

use crate::geometry::perpendicular_distance;
use crate::models::PlaneCoefficients;
use crate::types::Point3D;

/// The cloud's indices sorted by ascending distance to a plane.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRanking {
    /// `distances[i]` is the distance of point `i` (cloud order).
    pub distances: Vec<f64>,
    /// Point indices, nearest first.
    pub order: Vec<usize>,
}

impl DistanceRanking {
    /// Measure every point against `plane` and sort.
    pub fn compute(plane: &PlaneCoefficients, points: &[Point3D]) -> Self {
        let distances: Vec<f64> = points
            .iter()
            .map(|p| perpendicular_distance(plane, p))
            .collect();
        let mut order: Vec<usize> = (0..points.len()).collect();
        quick_sort_by_distance(&mut order, &distances);
        Self { distances, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Indices of the `count` nearest points (clamped to the cloud size).
    pub fn nearest(&self, count: usize) -> &[usize] {
        &self.order[..count.min(self.order.len())]
    }

    /// Distances in ranked order.
    pub fn sorted_distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.order.iter().map(move |&i| self.distances[i])
    }
}

/// In-place quicksort of `order` by `distances[order[_]]`.
///
/// Two-sided partitioning around the first element: the right cursor skips
/// entries `>= pivot`, the left cursor skips entries `<= pivot`, and each
/// stopping entry is moved into the hole left by the previous move. The
/// pivot lands in the final hole and both sides are sorted recursively
/// (the smaller one first, the larger one by looping).
pub fn quick_sort_by_distance(order: &mut [usize], distances: &[f64]) {
    let mut slice = order;
    while slice.len() > 1 {
        let split = partition(slice, distances);
        let (lower, rest) = std::mem::take(&mut slice).split_at_mut(split);
        let upper = &mut rest[1..];
        if lower.len() < upper.len() {
            quick_sort_by_distance(lower, distances);
            slice = upper;
        } else {
            quick_sort_by_distance(upper, distances);
            slice = lower;
        }
    }
}

/// Returns the pivot's final position.
fn partition(order: &mut [usize], distances: &[f64]) -> usize {
    let pivot_item = order[0];
    let pivot = distances[pivot_item];
    let mut left = 0;
    let mut right = order.len() - 1;

    while left < right {
        while left < right && distances[order[right]] >= pivot {
            right -= 1;
        }
        if left != right {
            order[left] = order[right];
            left += 1;
        }
        while left < right && distances[order[left]] <= pivot {
            left += 1;
        }
        if left != right {
            order[right] = order[left];
            right -= 1;
        }
    }

    order[left] = pivot_item;
    left
}
