use bitvec::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::*;

/// Streaming generator for the edges of a random spanning tree on nodes `0..n`.
///
/// The tree initially consists of `root` only. Whenever the pending edges are used up, a new
/// branch is grown: a random walk over distinct nodes that starts outside the tree and ends
/// as soon as it steps onto a tree node. The branch is then attached and its edges are yielded,
/// the attaching edge first. Yields exactly `n - 1` edges (none if `n <= 1`).
///
/// # Example
/// ```
/// use wmst::gens::RandomTree;
///
/// let mut rng = rand::rng();
/// let edges: Vec<_> = RandomTree::new(5, 0, &mut rng).collect();
/// assert_eq!(edges.len(), 4);
/// ```
pub struct RandomTree<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    sampler: Option<Uniform<Node>>,
    in_tree: BitVec,
    on_branch: BitVec,
    /// Candidates for branch starts; may contain nodes that joined the tree since
    outside: Vec<Node>,
    pending: Vec<(Node, Node)>,
}

impl<'a, R> RandomTree<'a, R>
where
    R: Rng,
{
    /// Creates a new generator for a tree of `n` nodes grown from `root`.
    ///
    /// # Panics
    /// Panics if `n > 0` and `root >= n`.
    pub fn new(n: NumNodes, root: Node, rng: &'a mut R) -> Self {
        assert!(n == 0 || root < n);

        let mut in_tree = bitvec![0; n as usize];
        if n > 0 {
            in_tree.set(root as usize, true);
        }

        Self {
            rng,
            sampler: Uniform::new(0 as Node, n).ok(),
            in_tree,
            on_branch: bitvec![0; n as usize],
            outside: (0..n).filter(|&u| u != root).collect(),
            pending: Vec::new(),
        }
    }

    /// Picks a random node outside the tree, discarding stale candidates on the way
    fn branch_start(&mut self) -> Option<Node> {
        while !self.outside.is_empty() {
            let i = self.rng.random_range(0..self.outside.len());
            let u = self.outside.swap_remove(i);
            if !self.in_tree[u as usize] {
                return Some(u);
            }
        }
        None
    }

    /// Walks from a node outside the tree until the tree is hit and queues the branch's edges.
    /// Returns *false* if all nodes are already in the tree.
    fn grow_branch(&mut self) -> bool {
        let Some(start) = self.branch_start() else {
            return false;
        };
        let Some(sampler) = self.sampler.as_ref() else {
            return false;
        };

        let mut branch = vec![start];
        self.on_branch.set(start as usize, true);

        loop {
            let u = sampler.sample(self.rng);
            if self.on_branch[u as usize] {
                continue;
            }

            branch.push(u);
            if self.in_tree[u as usize] {
                break;
            }
            self.on_branch.set(u as usize, true);
        }

        for pair in branch.windows(2) {
            self.pending.push((pair[1], pair[0]));
        }
        for &u in &branch {
            self.on_branch.set(u as usize, false);
            self.in_tree.set(u as usize, true);
        }

        true
    }
}

impl<'a, R> Iterator for RandomTree<'a, R>
where
    R: Rng,
{
    type Item = (Node, Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && !self.grow_branch() {
            return None;
        }
        self.pending.pop()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::UnionFind;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn yields_spanning_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0, 1, 2, 5, 20, 100] {
            for root in [0, n / 2] {
                if n > 0 && root >= n {
                    continue;
                }

                let edges: Vec<_> = RandomTree::new(n, root, rng).collect();
                assert_eq!(edges.len(), n.saturating_sub(1) as usize);

                let mut uf: UnionFind<Node> = UnionFind::new(0..n);
                for (u, v) in edges {
                    assert!(uf.union(&u, &v).unwrap());
                }
                assert!(uf.number_of_sets() <= 1);
            }
        }
    }

    #[test]
    fn edges_attach_to_existing_tree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        let n = 50;

        let mut reached = bitvec![0; n as usize];
        reached.set(7, true);

        // each yielded edge hangs a new node below one that is already reached
        for (parent, child) in RandomTree::new(n, 7, rng) {
            assert!(reached[parent as usize]);
            assert!(!reached[child as usize]);
            reached.set(child as usize, true);
        }
        assert!(reached.all());
    }
}
