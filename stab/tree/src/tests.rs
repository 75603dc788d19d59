use crate::*;
use stab_utils::arena::IndexLike;
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{cmp::Ordering, collections::HashSet};

fn scenario() -> IntervalTree<&'static str> {
    IntervalTree::build([
        Interval::new(0.0, 10.0, "A"),
        Interval::new(-5.0, -1.0, "B"),
        Interval::new(1.0, 4.0, "C"),
        Interval::new(6.0, 9.0, "D"),
    ])
    .unwrap()
}

fn ids<T: Clone>(tree: &IntervalTree<T>, segs: &[SegId]) -> Vec<T> {
    segs.iter().map(|s| tree[s].id.clone()).collect()
}

/// Intervals over a small integer grid, so that shared endpoints and point intervals show up.
fn random_intervals(seed: u64, count: usize) -> Vec<Interval<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let a = rng.random_range(-40..40) as f64;
            let b = rng.random_range(-40..40) as f64;
            Interval::new(a, b, i)
        })
        .collect()
}

/// Checks every structural invariant of a built tree against its input.
fn validate_tree_structure<T>(tree: &IntervalTree<T>) {
    let mut seen = HashSet::new();
    for (id, node) in tree.nodes() {
        // the two orderings hold the same intervals, each sorted
        let mut l = node.sorted_by_left.clone();
        let mut r = node.sorted_by_right.clone();
        assert!(l.windows(2).all(|w| tree[&w[0]].left <= tree[&w[1]].left));
        assert!(r.windows(2).all(|w| tree[&w[0]].right >= tree[&w[1]].right));
        l.sort();
        r.sort();
        assert_eq!(l, r);
        assert!(!l.is_empty());

        for seg in &node.sorted_by_left {
            let seg_ = &tree[seg];
            assert!(seg_.left <= node.median && node.median <= seg_.right);
            assert!(seen.insert(*seg), "interval stored twice");
        }
        if let Some(left) = node.left {
            for seg in tree.subtree_segments(left) {
                assert!(tree[&seg].right < node.median);
            }
            assert_eq!(tree[&left].parent, Some(id));
            assert_eq!(tree[&left].peer, node.peer * 2);
        }
        if let Some(right) = node.right {
            for seg in tree.subtree_segments(right) {
                assert!(tree[&seg].left > node.median);
            }
            assert_eq!(tree[&right].parent, Some(id));
            assert_eq!(tree[&right].peer, node.peer * 2 + 1);
        }

        // partition completeness, counted per node
        let below = node.children().map(|c| tree.subtree_segments(c).len()).sum::<usize>();
        assert_eq!(tree.subtree_segments(id).len(), node.segments().len() + below);

        let expected_height = 1 + node.children().map(|c| tree[&c].height).max().unwrap_or(0);
        assert_eq!(node.height, expected_height);
        let expected_depth = node.parent.map_or(0, |p| tree[&p].depth + 1);
        assert_eq!(node.depth, expected_depth);
        assert_eq!(tree.layout()[node.slot()], Some(id));
        assert_eq!(tree.slot(node.depth, node.peer), Some(id));
    }
    assert_eq!(seen.len(), tree.segments().len());
    assert_eq!(tree.height(), tree[&tree.root()].height);
    assert_eq!(tree.layout().iter().flatten().count(), tree.len());
}

#[test]
fn test_scenario_structure() {
    let tree = scenario();
    let root = &tree[&tree.root()];
    assert_eq!(root.median, 1.0);
    assert_eq!(ids(&tree, &root.sorted_by_left), vec!["A", "C"]);
    assert_eq!(ids(&tree, &root.sorted_by_right), vec!["A", "C"]);
    let left = &tree[&root.left.unwrap()];
    assert_eq!(left.median, -5.0);
    assert_eq!(ids(&tree, left.segments()), vec!["B"]);
    assert!(left.is_leaf());
    let right = &tree[&root.right.unwrap()];
    assert_eq!(right.median, 6.0);
    assert_eq!(ids(&tree, right.segments()), vec!["D"]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.layout().len(), 3);
    assert_eq!(tree.slot(1, 0), root.left);
    assert_eq!(tree.slot(1, 1), root.right);
    assert_eq!(tree.slot(2, 0), None);
    validate_tree_structure(&tree);
}

#[test]
fn test_scenario_query() {
    let tree = scenario();
    let path = tree.descend(7.0);
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].side, Ordering::Greater);
    assert_eq!(ids(&tree, &path[0].involved), vec!["A"]);
    assert_eq!(ids(&tree, &path[1].involved), vec!["D"]);
    assert_eq!(ids(&tree, &tree.stab(7.0)), vec!["A", "D"]);
    // exactly on the root median
    let path = tree.descend(1.0);
    assert_eq!(path.len(), 1);
    assert_eq!(ids(&tree, &path[0].involved), vec!["A", "C"]);
    assert!(tree.stab(20.0).is_empty());
}

#[test]
fn test_empty_input() {
    let res = IntervalTree::<()>::build([]);
    assert_eq!(res.unwrap_err(), TreeError::InvalidInput);
}

#[test]
fn test_single_interval() {
    let tree = IntervalTree::build([Interval::new(3.0, 8.0, 'x')]).unwrap();
    let root = &tree[&tree.root()];
    assert_eq!(root.median, 3.0);
    assert!(root.is_leaf());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.len(), 1);
    assert!(tree.get(&tree.root()).is_some());
    assert!(tree.get(&NodeId::new(1)).is_none());
}

#[test]
fn test_endpoints_are_ordered() {
    let seg = Interval::new(5.0, -2.0, ());
    assert_eq!((seg.left, seg.right), (-2.0, 5.0));
    assert_eq!(seg.relation(-3.0), Ordering::Greater);
    assert_eq!(seg.relation(5.0), Ordering::Equal);
    assert_eq!(seg.relation(6.0), Ordering::Less);
}

#[test]
fn test_point_intervals() {
    let tree = IntervalTree::build([
        Interval::new(2.0, 2.0, 0),
        Interval::new(2.0, 2.0, 1),
        Interval::new(0.0, 1.0, 2),
        Interval::new(3.0, 3.0, 3),
    ])
    .unwrap();
    validate_tree_structure(&tree);
    assert_eq!(tree[&tree.root()].median, 2.0);
    let mut hits = ids(&tree, &tree.stab(2.0));
    hits.sort();
    assert_eq!(hits, vec![0, 1]);
}

#[test]
fn test_reversed_fields_are_normalized() {
    let tree = IntervalTree::build([
        Interval { left: 5.0, right: 3.0, id: 0 },
        Interval { left: 9.0, right: -1.0, id: 1 },
    ])
    .unwrap();
    validate_tree_structure(&tree);
    assert_eq!((tree[&SegId::new(0)].left, tree[&SegId::new(0)].right), (3.0, 5.0));
    let mut hits = ids(&tree, &tree.stab(4.0));
    hits.sort();
    assert_eq!(hits, vec![0, 1]);
}

#[test]
fn test_nan_stabs_nothing() {
    let tree = scenario();
    assert!(tree.descend(f64::NAN).is_empty());
    assert!(tree.stab(f64::NAN).is_empty());
}

#[test]
fn test_median_is_lower_median_of_endpoints() {
    for seed in 0..40 {
        let count = 1 + (seed as usize * 11) % 70;
        let tree = IntervalTree::build(random_intervals(seed + 500, count)).unwrap();
        for (id, node) in tree.nodes() {
            let segs = tree.subtree_segments(id);
            let mut endpoints =
                segs.iter().flat_map(|s| [tree[s].left, tree[s].right]).collect::<Vec<_>>();
            endpoints.sort_by(f64::total_cmp);
            assert_eq!(node.median, endpoints[segs.len() - 1], "seed {}", seed);
        }
    }
}

#[test]
fn test_traversals() {
    let tree = IntervalTree::build(random_intervals(7, 60)).unwrap();
    let bfs = tree.bfs().collect::<Vec<_>>();
    assert_eq!(bfs.len(), tree.len());
    assert_eq!(bfs[0], tree.root());
    assert!(bfs.windows(2).all(|w| tree[&w[0]].depth <= tree[&w[1]].depth));
    let medians = tree.inorder().map(|id| tree[&id].median).collect::<Vec<_>>();
    assert_eq!(medians.len(), tree.len());
    assert!(medians.windows(2).all(|w| w[0] < w[1]));
    for id in tree.nodes().ids() {
        assert_eq!(tree.ancestors(id).count(), tree[&id].depth);
        assert_eq!(tree.ancestors(id).last().unwrap_or(id), tree.root());
    }
}

#[test]
fn test_random_trees() {
    for seed in 0..40 {
        let count = 1 + (seed as usize * 7) % 90;
        let intervals = random_intervals(seed, count);
        let tree = IntervalTree::build(intervals.clone()).unwrap();
        validate_tree_structure(&tree);

        // every child holds at most half of its parent's intervals
        for (id, node) in tree.nodes() {
            let total = tree.subtree_segments(id).len();
            for child in node.children() {
                assert!(2 * tree.subtree_segments(child).len() <= total);
            }
        }

        for x in (-42..42).map(|x| x as f64 * 0.5) {
            let mut hits = ids(&tree, &tree.stab(x));
            hits.sort();
            let expected =
                intervals.iter().filter(|seg| seg.contains(x)).map(|seg| seg.id).collect::<Vec<_>>();
            assert_eq!(hits, expected, "stabbing at {}", x);
        }
    }
}
