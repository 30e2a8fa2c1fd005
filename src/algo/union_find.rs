/*!
# Union-Find

A disjoint-set forest over arbitrary hashable keys with path compression and union by rank.
All keys have to be registered when the structure is created; querying an unknown key
yields a [`LookupError`] instead of silently creating a new singleton set.

Every primitive step (visiting a parent pointer, rewiring it, linking two roots) is charged
to an [`OperationCounter`] so that [`Kruskal`](super::Kruskal) can report its work.

```
use wmst::algo::UnionFind;

let mut uf = UnionFind::new(["A", "B", "C"]);
assert!(uf.union(&"A", &"B").unwrap());
assert!(!uf.union(&"B", &"A").unwrap());

assert_eq!(uf.find(&"B").unwrap(), "A");
assert_eq!(uf.number_of_sets(), 2);
assert!(uf.find(&"Q").is_err());
```
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;
use thiserror::Error;

use super::OperationCounter;

/// A key was passed to [`UnionFind`] that was not registered at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node {key} is not registered in the disjoint-set structure")]
pub struct LookupError {
    pub key: String,
}

impl LookupError {
    fn of<K: Debug>(key: &K) -> Self {
        Self {
            key: format!("{key:?}"),
        }
    }
}

/// Disjoint-set forest with path compression and union by rank
#[derive(Debug, Clone)]
pub struct UnionFind<K> {
    parent: FxHashMap<K, K>,
    rank: FxHashMap<K, u32>,
    number_of_sets: usize,
    ops: OperationCounter,
}

impl<K> UnionFind<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Creates a structure where every given key forms its own singleton set.
    /// Keys given more than once are registered once.
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        let keys = keys.into_iter();
        let mut parent = FxHashMap::default();
        let mut rank = FxHashMap::default();
        parent.reserve(keys.size_hint().0);
        rank.reserve(keys.size_hint().0);

        for key in keys {
            let key = key.into();
            parent.insert(key.clone(), key.clone());
            rank.insert(key, 0);
        }

        Self {
            number_of_sets: parent.len(),
            parent,
            rank,
            ops: OperationCounter::default(),
        }
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if no keys are registered
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns *true* if `key` was registered
    pub fn contains(&self, key: &K) -> bool {
        self.parent.contains_key(key)
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.number_of_sets
    }

    /// Number of primitive steps performed so far
    pub fn operations(&self) -> u64 {
        self.ops.get()
    }

    /// Returns the representative of the set containing `key`.
    ///
    /// Afterwards every node on the path from `key` to its root points directly to the root.
    pub fn find(&mut self, key: &K) -> Result<K, LookupError> {
        let mut root = key.clone();
        loop {
            self.ops.tick();
            let parent = self.parent.get(&root).ok_or_else(|| LookupError::of(key))?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut current = key.clone();
        while current != root {
            let Some(slot) = self.parent.get_mut(&current) else {
                break;
            };
            let next = std::mem::replace(slot, root.clone());
            if next != root {
                self.ops.tick();
            }
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b` and returns *true* if they were disjoint before.
    ///
    /// The root of lower rank is attached below the other one. On equal ranks, the root of `b`
    /// is attached below the root of `a` whose rank increases by one.
    pub fn union(&mut self, a: &K, b: &K) -> Result<bool, LookupError> {
        self.ops.tick();
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;

        if root_a == root_b {
            return Ok(false);
        }

        let rank_a = self.rank_of(&root_a);
        let rank_b = self.rank_of(&root_b);

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else {
            if rank_a == rank_b {
                self.rank.insert(root_a.clone(), rank_a + 1);
            }
            self.parent.insert(root_b, root_a);
        }

        self.ops.add(3);
        self.number_of_sets -= 1;
        Ok(true)
    }

    /// Returns *true* if `a` and `b` are in the same set
    pub fn same_set(&mut self, a: &K, b: &K) -> Result<bool, LookupError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Rank of a registered root
    fn rank_of(&self, root: &K) -> u32 {
        self.rank.get(root).copied().unwrap_or_default()
    }

    /// Direct parent of a registered key (without compression)
    #[cfg(test)]
    fn parent_of(&self, key: &K) -> Option<&K> {
        self.parent.get(key)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Node;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn singletons() {
        let mut uf: UnionFind<Node> = UnionFind::new(0..5u32);

        assert_eq!(uf.len(), 5);
        assert_eq!(uf.number_of_sets(), 5);
        for u in 0..5 {
            assert_eq!(uf.find(&u).unwrap(), u);
        }
    }

    #[test]
    fn tie_break_attaches_second_below_first() {
        let mut uf: UnionFind<Node> = UnionFind::new(0..4u32);

        assert!(uf.union(&1, &0).unwrap());
        assert_eq!(uf.parent_of(&0), Some(&1));
        assert_eq!(uf.rank_of(&1), 1);

        // rank(3) = 0 < rank(1) = 1
        assert!(uf.union(&3, &0).unwrap());
        assert_eq!(uf.parent_of(&3), Some(&1));
        assert_eq!(uf.rank_of(&1), 1);

        assert!(uf.union(&2, &2).is_ok_and(|merged| !merged));
        assert_eq!(uf.number_of_sets(), 2);
    }

    #[test]
    fn union_is_idempotent() {
        let mut uf: UnionFind<Node> = UnionFind::new(0..3u32);

        assert!(uf.union(&0, &1).unwrap());
        let parents = (0..3).map(|u| *uf.parent_of(&u).unwrap()).collect_vec();

        assert!(!uf.union(&0, &1).unwrap());
        assert!(!uf.union(&1, &0).unwrap());
        assert_eq!(
            parents,
            (0..3).map(|u| *uf.parent_of(&u).unwrap()).collect_vec()
        );
        assert_eq!(uf.number_of_sets(), 2);
    }

    #[test]
    fn path_compression() {
        let n = 64u32;
        let mut uf: UnionFind<Node> = UnionFind::new(0..n);

        // merging pairs, then pairs of pairs, ... yields a binomial tree of height log(n)
        let mut step = 1;
        while step < n {
            for u in (0..n).step_by(2 * step as usize) {
                uf.union(&u, &(u + step)).unwrap();
            }
            step *= 2;
        }

        let deepest = (0..n)
            .max_by_key(|&u| {
                let mut depth = 0;
                let mut x = u;
                while *uf.parent_of(&x).unwrap() != x {
                    x = *uf.parent_of(&x).unwrap();
                    depth += 1;
                }
                depth
            })
            .unwrap();

        let root = uf.find(&deepest).unwrap();
        assert_eq!(root, 0);

        // all nodes on the former path now point directly to the root
        let mut x = deepest;
        while x != root {
            let p = *uf.parent_of(&x).unwrap();
            assert_eq!(p, root);
            x = p;
        }
    }

    #[test]
    fn unregistered_keys() {
        let mut uf = UnionFind::<String>::new(["A", "B"]);

        assert_eq!(
            uf.find(&"C".to_string()),
            Err(LookupError {
                key: "\"C\"".into()
            })
        );
        assert!(uf.union(&"A".to_string(), &"Z".to_string()).is_err());
        assert!(uf.contains(&"A".to_string()));
    }

    #[test]
    fn matches_naive_partition() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [2u32, 10, 50, 200] {
            let mut uf: UnionFind<Node> = UnionFind::new(0..n);
            let mut naive = (0..n).collect_vec();

            for _ in 0..n {
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);

                let merged = uf.union(&a, &b).unwrap();
                let (ca, cb) = (naive[a as usize], naive[b as usize]);
                assert_eq!(merged, ca != cb);

                naive.iter_mut().filter(|c| **c == cb).for_each(|c| *c = ca);

                for _ in 0..5 {
                    let x = rng.random_range(0..n);
                    let y = rng.random_range(0..n);
                    assert_eq!(
                        uf.same_set(&x, &y).unwrap(),
                        naive[x as usize] == naive[y as usize]
                    );
                }
            }

            assert_eq!(
                uf.number_of_sets(),
                naive.iter().copied().unique().count()
            );
        }
    }

    #[test]
    fn deep_chains_do_not_overflow() {
        let n = 200_000u32;
        let mut uf: UnionFind<Node> = UnionFind::new(0..n);

        // rewire manually into a single chain to exercise the iterative find
        for u in 1..n {
            uf.parent.insert(u, u - 1);
        }

        assert_eq!(uf.find(&(n - 1)).unwrap(), 0);
        assert_eq!(*uf.parent_of(&(n - 1)).unwrap(), 0);
        assert_eq!(*uf.parent_of(&(n / 2)).unwrap(), 0);
    }

    #[test]
    fn counts_operations() {
        let mut uf: UnionFind<Node> = UnionFind::new(0..4u32);
        assert_eq!(uf.operations(), 0);

        uf.union(&0, &1).unwrap();
        let after_first = uf.operations();
        assert!(after_first > 0);

        uf.find(&1).unwrap();
        assert!(uf.operations() > after_first);
    }
}
