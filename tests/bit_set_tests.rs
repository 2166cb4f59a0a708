use skyroute::DenseBitSet;

#[test]
fn add_then_contains_over_whole_universe() {
    let max = 130;
    let mut set = DenseBitSet::new(max);
    for e in 0..=max {
        assert!(!set.contains(e));
        assert!(set.add(e));
        assert!(set.contains(e));
    }
    assert_eq!(set.cardinality(), max + 1);
}

#[test]
fn duplicate_add_returns_false_without_changing_cardinality() {
    let mut set = DenseBitSet::new(40);
    assert!(set.add(17));
    assert!(!set.add(17));
    assert_eq!(set.cardinality(), 1);
}

#[test]
fn out_of_range_add_is_rejected() {
    let mut set = DenseBitSet::new(10);
    assert!(!set.add(11));
    assert!(!set.add(usize::MAX));
    assert_eq!(set.cardinality(), 0);
    assert!(!set.contains(11));
    assert!(!set.contains(usize::MAX));
}

#[test]
fn double_complement_is_identity() {
    let mut set = DenseBitSet::new(100);
    for e in [0, 1, 33, 64, 65, 99, 100] {
        set.add(e);
    }
    assert_eq!(set.complement().complement(), set);
}

#[test]
fn union_with_complement_covers_the_universe() {
    for max in [0, 5, 63, 64, 127, 128, 200] {
        let mut set = DenseBitSet::new(max);
        for e in (0..=max).step_by(3) {
            set.add(e);
        }
        let covered = set.union(&set.complement());
        assert_eq!(covered.cardinality(), max + 1, "universe [0, {}]", max);
        // No complement member may exceed the universe.
        assert!(set.complement().iter().all(|e| e <= max));
    }
}

#[test]
fn self_difference_is_empty() {
    let mut set = DenseBitSet::new(77);
    for e in [2, 3, 5, 7, 11, 76] {
        set.add(e);
    }
    let nothing = set.difference(&set);
    assert!(nothing.is_empty());
    assert_eq!(nothing.cardinality(), 0);
}

#[test]
fn difference_removes_only_shared_members() {
    let mut a = DenseBitSet::new(30);
    let mut b = DenseBitSet::new(30);
    a.add(1);
    a.add(2);
    a.add(3);
    b.add(2);
    b.add(9);
    let d = a.difference(&b);
    assert!(d.contains(1));
    assert!(!d.contains(2));
    assert!(d.contains(3));
    assert_eq!(d.cardinality(), 2);
}

#[test]
fn union_takes_the_larger_universe() {
    let mut small = DenseBitSet::new(10);
    let mut large = DenseBitSet::new(100);
    small.add(4);
    large.add(90);
    let u = small.union(&large);
    assert_eq!(u.max_element(), 100);
    assert!(u.contains(4));
    assert!(u.contains(90));
    assert_eq!(u.cardinality(), 2);
}

// Universes ending exactly on a word boundary versus one element past it.
#[test]
fn complement_at_word_boundary_capacities() {
    for max in [62, 63, 64, 65, 127, 128] {
        let empty = DenseBitSet::new(max);
        let full = empty.complement();
        assert_eq!(full.cardinality(), max + 1, "universe [0, {}]", max);
        assert!(full.contains(max));
        assert!(!full.contains(max + 1));
        assert_eq!(full.complement().cardinality(), 0);
    }
}

#[test]
fn clear_and_is_empty() {
    let mut set = DenseBitSet::new(64);
    assert!(set.is_empty());
    set.add(64);
    assert!(!set.is_empty());
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.max_element(), 64);
    // Still usable after clearing.
    assert!(set.add(64));
}

#[test]
fn clones_do_not_alias() {
    let mut original = DenseBitSet::new(20);
    original.add(5);
    let copy = original.clone();
    original.add(6);
    assert!(copy.contains(5));
    assert!(!copy.contains(6));
    assert_eq!(copy.cardinality(), 1);
    assert_eq!(original.cardinality(), 2);
}

#[test]
fn reserve_drops_prior_membership() {
    let mut set = DenseBitSet::new(10);
    set.add(3);
    set.reserve(200);
    assert!(set.is_empty());
    assert_eq!(set.max_element(), 200);
    assert!(set.add(200));
}
