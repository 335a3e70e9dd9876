//! Constraint bookkeeping for the left-right planarity test.
//!
//! Back edges discovered during the oracle's DFS are recorded as heights of
//! their lower endpoints. A [`Fos`] (fringe-opposed subset) keeps two height
//! sequences that must end up on opposite sides of the DFS tree path; a
//! [`Fringe`] is the ordered collection of such subsets for one subtree.
//! Merging sibling fringes either nests their constraints or proves that no
//! side assignment exists, which is exactly non-planarity.

use std::collections::VecDeque;

/// Internal non-planarity signal. Converted to `false` at the oracle
/// boundary, never visible to callers of the public API.
pub(crate) struct NonPlanar;

/// Merges two height sequences sorted descending front-to-back.
fn sorted_merge(mut a: VecDeque<usize>, mut b: VecDeque<usize>) -> VecDeque<usize> {
    if a.is_empty() {
        return b;
    }
    if b.is_empty() {
        return a;
    }
    let mut out = VecDeque::with_capacity(a.len() + b.len());
    while let (Some(&x), Some(&y)) = (a.front(), b.front()) {
        if x >= y {
            out.extend(a.pop_front());
        } else {
            out.extend(b.pop_front());
        }
    }
    out.append(&mut a);
    out.append(&mut b);
    out
}

/// Fringe-opposed subset: two sequences of back-edge heights, sorted
/// descending from front to back, whose members must sit on opposite sides
/// of the tree path. Never both empty while stored in a fringe.
#[derive(Debug, Default, Clone)]
pub(crate) struct Fos {
    left: VecDeque<usize>,
    right: VecDeque<usize>,
}

impl Fos {
    fn single(height: usize) -> Self {
        Fos {
            left: VecDeque::from([height]),
            right: VecDeque::new(),
        }
    }

    fn lowest(&self) -> usize {
        match (self.left.back(), self.right.back()) {
            (Some(&l), Some(&r)) => l.min(r),
            (Some(&l), None) => l,
            (None, Some(&r)) => r,
            (None, None) => unreachable!("emptied subsets are discarded"),
        }
    }

    /// Keeps the side reaching the lower height on the left.
    fn normalize(&mut self) {
        let swap = match (self.left.back(), self.right.back()) {
            (None, Some(_)) => true,
            (Some(&l), Some(&r)) => r < l,
            _ => false,
        };
        if swap {
            std::mem::swap(&mut self.left, &mut self.right);
        }
    }

    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Unresolved back-edge constraints of one DFS subtree. Front = most
/// recently merged subset ("H", highest lows), back = oldest ("L").
#[derive(Debug, Default, Clone)]
pub(crate) struct Fringe {
    fops: VecDeque<Fos>,
}

impl Fringe {
    /// Fringe holding a single back edge to the given height.
    pub(crate) fn single(height: usize) -> Self {
        Fringe {
            fops: VecDeque::from([Fos::single(height)]),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fops.is_empty()
    }

    /// Lowest recorded height, the subtree's cheapest way back to the root.
    pub(crate) fn low(&self) -> usize {
        self.fops
            .back()
            .map(Fos::lowest)
            .expect("low() of an empty fringe")
    }

    /// Highest recorded height.
    pub(crate) fn high(&self) -> usize {
        self.fops
            .iter()
            .flat_map(|f| f.left.front().into_iter().chain(f.right.front()))
            .copied()
            .max()
            .expect("high() of an empty fringe")
    }

    /// Total number of recorded back edges.
    pub(crate) fn size(&self) -> usize {
        self.fops.iter().map(|f| f.left.len() + f.right.len()).sum()
    }

    /// Folds `other`, the next sibling fringe in `(low, high)` order, into
    /// this one.
    ///
    /// `other` is first collapsed to a single one-sided subset; chains that
    /// only duplicate the boundary (lowest) height are dropped outright.
    /// Subsets of `self` holding a height above `other`'s low are then
    /// relabeled as opposing constraints: one side joins the collapsed
    /// chain, the other is pinned opposite it. A subset whose two sides
    /// both reach above `other`'s low admits no side assignment at all.
    pub(crate) fn merge(&mut self, other: Fringe) -> Result<(), NonPlanar> {
        let opposed_low = other.low();
        let boundary = self.low();

        let mut with = VecDeque::new();
        for mut fos in other.fops {
            fos.normalize();
            if !fos.right.is_empty() {
                return Err(NonPlanar);
            }
            if fos.left.back().is_some_and(|&h| h > boundary) {
                with = sorted_merge(with, fos.left);
            }
            // heights equal to the boundary parallel the reference chain
            // and carry no further constraint
        }

        let mut against = VecDeque::new();
        while let Some(head) = self.fops.front() {
            let left_crosses = head.left.front().is_some_and(|&h| h > opposed_low);
            let right_crosses = head.right.front().is_some_and(|&h| h > opposed_low);
            if !left_crosses && !right_crosses {
                break;
            }
            if left_crosses && right_crosses {
                return Err(NonPlanar);
            }
            let mut fos = self.fops.pop_front().expect("head checked above");
            if right_crosses {
                std::mem::swap(&mut fos.left, &mut fos.right);
            }
            against = sorted_merge(against, fos.left);
            with = sorted_merge(with, fos.right);
        }

        if !(against.is_empty() && with.is_empty()) {
            let mut fos = Fos {
                left: against,
                right: with,
            };
            fos.normalize();
            self.fops.push_front(fos);
        }
        Ok(())
    }

    /// Drops every constraint at or above `height`, working inward from the
    /// most recent subset. Entries that high point at vertices the DFS has
    /// already retreated past and cannot affect future merges.
    pub(crate) fn prune(&mut self, height: usize) {
        while let Some(head) = self.fops.front_mut() {
            let mut dropped = false;
            while head.left.front().is_some_and(|&h| h >= height) {
                head.left.pop_front();
                dropped = true;
            }
            while head.right.front().is_some_and(|&h| h >= height) {
                head.right.pop_front();
                dropped = true;
            }
            if head.is_empty() {
                self.fops.pop_front();
                continue;
            }
            head.normalize();
            if !dropped {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(f: &Fringe) -> Vec<(Vec<usize>, Vec<usize>)> {
        f.fops
            .iter()
            .map(|s| {
                (
                    s.left.iter().copied().collect(),
                    s.right.iter().copied().collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_sorted_merge_keeps_descending_order() {
        let a = VecDeque::from([7, 4, 1]);
        let b = VecDeque::from([5, 2]);
        assert_eq!(sorted_merge(a, b), VecDeque::from([7, 5, 4, 2, 1]));
    }

    #[test]
    fn test_merge_nests_disjoint_chains() {
        // back edges to 1 and 3 from different siblings nest freely
        let mut f = Fringe::single(1);
        f.merge(Fringe::single(3)).unwrap_or_else(|_| panic!());
        assert_eq!(entries(&f), vec![(vec![3], vec![]), (vec![1], vec![])]);
    }

    #[test]
    fn test_merge_drops_duplicate_boundary_height() {
        // a second chain to the common lowest height is redundant
        let mut f = Fringe::single(2);
        f.merge(Fringe::single(2)).unwrap_or_else(|_| panic!());
        assert_eq!(entries(&f), vec![(vec![2], vec![])]);
    }

    #[test]
    fn test_merge_relabels_crossing_chain_as_opposed() {
        // chain {1,4} crossed by a sibling low of 2: the 4 must oppose it
        let mut f = Fringe::default();
        f.fops.push_back(Fos {
            left: VecDeque::from([4, 1]),
            right: VecDeque::new(),
        });
        f.merge(Fringe::single(2)).unwrap_or_else(|_| panic!());
        assert_eq!(entries(&f), vec![(vec![4, 1], vec![2])]);
    }

    #[test]
    fn test_merge_detects_two_sided_crossing() {
        // both sides reach above the new low: no side assignment exists
        let mut f = Fringe::default();
        f.fops.push_back(Fos {
            left: VecDeque::from([3, 1]),
            right: VecDeque::from([4, 1]),
        });
        assert!(f.merge(Fringe::single(2)).is_err());
    }

    #[test]
    fn test_collapse_rejects_opposed_subset_in_sibling() {
        let mut other = Fringe::default();
        other.fops.push_back(Fos {
            left: VecDeque::from([3]),
            right: VecDeque::from([2]),
        });
        let mut f = Fringe::single(1);
        assert!(f.merge(other).is_err());
    }

    #[test]
    fn test_prune_discards_expired_heights() {
        let mut f = Fringe::default();
        f.fops.push_back(Fos {
            left: VecDeque::from([5, 3]),
            right: VecDeque::from([4]),
        });
        f.fops.push_back(Fos {
            left: VecDeque::from([2]),
            right: VecDeque::new(),
        });
        f.prune(4);
        assert_eq!(entries(&f), vec![(vec![3], vec![]), (vec![2], vec![])]);
        f.prune(0);
        assert!(f.is_empty());
    }
}
