//! Module for testing using fuzzing (quickcheck)

use std::fmt::Debug;

use crate::*;
use itertools::Itertools;
use quickcheck::Arbitrary;

mod build;
mod transform;

#[cfg(miri)]
const DEFAULT_NUM_TESTS: usize = 10;
#[cfg(not(miri))]
const DEFAULT_NUM_TESTS: usize = 10000;
const DEFAULT_GEN_SIZE: usize = 100;

fn proptest_runner<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F) {
    let num_tests: usize = std::env::var("QUICKCHECK_TESTS")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_NUM_TESTS);

    let gen_size: usize = std::env::var("QUICKCHECK_GENERATOR_SIZE")
        .ok()
        .and_then(|x| x.parse::<usize>().ok())
        .unwrap_or(DEFAULT_GEN_SIZE);

    let mut gen = quickcheck::Gen::new(gen_size);

    // sample all inputs
    for _ in 0..num_tests {
        let input = A::arbitrary(&mut gen);
        let input_c = input.clone();
        let success = f(input_c);
        if !success {
            shrink_failure(f, input)
        }
    }
}

fn shrink_failure<A: Arbitrary + Debug + PartialEq, F: Fn(A) -> bool>(f: F, input: A) -> ! {
    for i in input.shrink() {
        let i_c = i.clone();
        let success = f(i_c);
        if !success {
            shrink_failure(f, i)
        }
    }
    // all shrunken inputs pass, so `input` is minimal.
    panic!(
        "[QUICKCHECK] Test case failed!\n  Minimal input:\n    {:?}",
        input
    );
}

#[allow(missing_docs)]
#[macro_export]
macro_rules! qc {
    ($name:ident, $f:ident) => {
        #[test]
        fn $name() {
            proptest_runner($f)
        }
    };
}

impl Arbitrary for Bits {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        #[rustfmt::skip]
        let len: u8 = *g
            .choose(&[
                0,
                1, 1,
                2, 2, 2,
                3, 3, 3, 3,
                4, 4, 4, 4, 4,
                5, 5, 5, 5, 5, 5,
                6, 6, 6, 6, 6, 6, 6,
                7, 7, 7, 7, 7, 7, 7, 7,
                8, 8, 8, 8, 8, 8, 8, 8, 8,
                9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
                16, 24, 31, 32,
            ])
            .unwrap();
        let x = u32::arbitrary(g);
        Bits::new(x, len)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        if self.is_empty() {
            quickcheck::empty_shrinker()
        } else {
            let shorter = Bits::new(self.repr(), self.prefix_len() - 1);
            quickcheck::single_shrinker(shorter)
        }
    }
}

/// Half-open address ranges `[start, end)` covered by a list of prefixes, sorted and merged.
fn ranges<I: IntoIterator<Item = Bits>>(prefixes: I) -> Vec<(u64, u64)> {
    prefixes
        .into_iter()
        .map(|p| {
            let start = p.repr() as u64;
            (start, start + (1u64 << (ADDR_BITS - p.prefix_len())))
        })
        .sorted()
        .coalesce(|a, b| {
            if b.0 <= a.1 {
                Ok((a.0, a.1.max(b.1)))
            } else {
                Err((a, b))
            }
        })
        .collect()
}

/// The ranges of the whole address space that are not in `ranges`.
fn complement(ranges: &[(u64, u64)]) -> Vec<(u64, u64)> {
    let mut result = Vec::new();
    let mut next = 0u64;
    for &(start, end) in ranges {
        if start > next {
            result.push((next, start));
        }
        next = end;
    }
    if next < 1u64 << ADDR_BITS {
        result.push((next, 1u64 << ADDR_BITS));
    }
    result
}

fn covered(trie: &Trie) -> Vec<(u64, u64)> {
    ranges(trie.networks())
}
