use partial_chain::{Chain, SafetyLevel};

use crate::util::{chain_three, chain_two, Second, Seed};

#[test]
fn iter_after_construction() {
    assert_eq!(Chain::of(1_i32).iter().count(), 1);
    assert_eq!(Chain::<i32>::empty().iter().count(), 0);
}

#[test]
fn iter_after_chain() {
    let all_good = chain_three(
        SafetyLevel::NoneCheck,
        Seed::Present,
        Seed::Present,
        Seed::Present,
    );
    assert!(all_good.iter().next().is_some());

    let failed = chain_three(
        SafetyLevel::NoneCheck,
        Seed::Present,
        Seed::Absent,
        Seed::Present,
    );
    assert_eq!(failed.iter().count(), 0);
}

#[test]
fn iter_is_restartable() {
    let chain = Chain::of(9_i32);

    assert_eq!(chain.iter().count(), 1);
    assert_eq!(chain.iter().count(), 1);
    assert_eq!(chain.iter().next(), Some(&9));
}

#[test]
fn partial_iter_surfaces_the_partial_value() {
    let healthy = chain_two(SafetyLevel::NoneCheck, Seed::Present, Seed::Present);
    let partial: Vec<_> = healthy.partial_iter().collect();
    assert_eq!(partial.len(), 1);
    assert!(partial[0].downcast_ref::<Second>().is_some());

    let failed = chain_two(SafetyLevel::NoneCheck, Seed::Present, Seed::Absent);
    assert!(failed.iter().next().is_none());
    assert_eq!(failed.partial_iter().count(), 1);

    assert_eq!(Chain::<i32>::empty().partial_iter().count(), 0);
}

#[test]
fn borrowed_into_iterator() {
    let chain = Chain::of(4_i32);

    let mut seen = Vec::new();
    for value in &chain {
        seen.push(*value);
    }

    assert_eq!(seen, vec![4]);
}
