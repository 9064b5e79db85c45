use std::net::Ipv4Addr;

use super::*;

qc!(covers_union, _covers_union);
fn _covers_union(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list.iter().copied());
    covered(&trie) == ranges(list)
}

qc!(order_does_not_matter, _order_does_not_matter);
fn _order_does_not_matter(list: Vec<Bits>) -> bool {
    let forward = Trie::build(list.iter().copied());
    let backward = Trie::build(list.iter().rev().copied());
    covered(&forward) == covered(&backward)
}

qc!(broader_absorbs, _broader_absorbs);
fn _broader_absorbs((broad, narrow): (Bits, Vec<Bits>)) -> bool {
    let narrow = narrow
        .into_iter()
        .filter(|n| broad.contains(n))
        .collect::<Vec<_>>();
    let before = Trie::build(std::iter::once(broad).chain(narrow.iter().copied()));
    let after = Trie::build(narrow.iter().copied().chain(std::iter::once(broad)));
    let alone = Trie::build([broad]);
    before == alone && after == alone
}

qc!(insert_reports_change, _insert_reports_change);
fn _insert_reports_change((list, p): (Vec<Bits>, Bits)) -> bool {
    let mut trie = Trie::build(list.iter().copied());
    let before = trie.clone();
    let inserted = trie.insert(&p);
    inserted != (trie == before)
}

qc!(contains, _contains);
fn _contains((list, addrs): (Vec<Bits>, Vec<u32>)) -> bool {
    let trie = Trie::build(list.iter().copied());
    addrs.into_iter().all(|a| {
        let want = list.iter().any(|p| p.contains(&Bits::new(a, ADDR_BITS)));
        trie.contains(Ipv4Addr::from(a)) == want
    })
}

qc!(contains_network_start, _contains_network_start);
fn _contains_network_start(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list.iter().copied());
    list.iter().all(|p| trie.contains(p.network()))
}

qc!(networks_sorted_and_disjoint, _networks_sorted_and_disjoint);
fn _networks_sorted_and_disjoint(list: Vec<Bits>) -> bool {
    let trie = Trie::build(list);
    trie.networks()
        .tuple_windows()
        .all(|(a, b)| a.repr() < b.repr() && !a.contains(&b))
}
