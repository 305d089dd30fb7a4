#![no_main]

// Harness: order_merge
// Build two clocks from arbitrary entries and check order antisymmetry
// and that the merged clock is never behind either input.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vclock::{Order, VClock};

#[derive(Arbitrary, Debug)]
struct Input {
    left: Vec<(String, u64)>,
    right: Vec<(String, u64)>,
}

fuzz_target!(|input: Input| {
    let left: VClock = input.left.into_iter().collect();
    let right: VClock = input.right.into_iter().collect();

    assert_eq!(left.order(&right), right.order(&left).reverse());

    let mut joined = left.copy();
    joined.merge(&right);
    assert!(matches!(joined.order(&left), Order::Equal | Order::Ancestor));
    assert!(matches!(joined.order(&right), Order::Equal | Order::Ancestor));
});
