use super::*;

qc!(optimize_keeps_coverage, _optimize_keeps_coverage);
fn _optimize_keeps_coverage(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list);
    covered(&trie.clone().optimized()) == covered(&trie)
}

qc!(optimize_idempotent, _optimize_idempotent);
fn _optimize_idempotent(list: Vec<Bits>) -> bool {
    let once = Trie::build(list).optimized();
    once.clone().optimized() == once
}

qc!(optimize_canonical, _optimize_canonical);
fn _optimize_canonical(list: Vec<Bits>) -> bool {
    let forward = Trie::build(list.iter().copied()).optimized();
    let backward = Trie::build(list.iter().rev().copied()).optimized();
    let sorted = Trie::build(list.iter().copied().sorted()).optimized();
    forward == backward && forward == sorted
}

qc!(optimize_minimal, _optimize_minimal);
fn _optimize_minimal(list: Vec<Bits>) -> bool {
    // no two networks of the result can be merged into their parent.
    let trie = Trie::build(list).optimized();
    trie.networks().tuple_windows().all(|(a, b)| {
        a.prefix_len() != b.prefix_len()
            || a.is_empty()
            || Bits::new(a.repr(), a.prefix_len() - 1) != Bits::new(b.repr(), b.prefix_len() - 1)
    })
}

qc!(invert_complement, _invert_complement);
fn _invert_complement(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list);
    covered(&trie.invert()) == complement(&covered(&trie))
}

qc!(invert_twice, _invert_twice);
fn _invert_twice(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list).optimized();
    trie.invert().invert() == trie
}

qc!(invert_stays_optimized, _invert_stays_optimized);
fn _invert_stays_optimized(list: Vec<Bits>) -> bool {
    let inv = Trie::build(list).optimized().invert();
    inv.clone().optimized() == inv
}

#[cfg(feature = "serde")]
qc!(serde_roundtrip, _serde_roundtrip);
#[cfg(feature = "serde")]
fn _serde_roundtrip(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list);
    let json = serde_json::to_string(&trie).unwrap();
    serde_json::from_str::<Trie>(&json).unwrap() == trie
}
