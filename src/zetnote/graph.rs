//! Link graph operations over the links document.
//!
//! Edges are directed: `add_edge(a, b)` records `a -> b` only. Traversal for
//! exports follows outgoing edges, so the export of `a` includes `b` but the
//! export of `b` does not include `a`.

use crate::model::{LongId, Links};
use std::collections::BTreeSet;

/// Adds `from -> to`. Returns `false` if the edge already existed.
pub fn add_edge(links: &mut Links, from: &LongId, to: &LongId) -> bool {
    let targets = links.entry(from.clone()).or_default();
    if targets.contains(to) {
        return false;
    }
    targets.push(to.clone());
    true
}

pub fn neighbors(links: &Links, id: &LongId) -> Vec<LongId> {
    links.get(id).cloned().unwrap_or_default()
}

/// Every id reachable from `root` along outgoing edges, `root` included.
pub fn reachable_closure(links: &Links, root: &LongId) -> BTreeSet<LongId> {
    let mut visited = BTreeSet::new();
    let mut stack = vec![root.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(targets) = links.get(&current) {
            stack.extend(targets.iter().filter(|t| !visited.contains(*t)).cloned());
        }
    }

    visited
}

/// Removes `id` from the graph: its own edge list and every edge pointing at it.
///
/// Returns `true` if anything changed.
pub fn cascade_remove(links: &mut Links, id: &LongId) -> bool {
    let mut changed = links.remove(id).is_some();
    for targets in links.values_mut() {
        let before = targets.len();
        targets.retain(|t| t != id);
        changed |= targets.len() != before;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LongId {
        LongId::from(s)
    }

    #[test]
    fn add_edge_is_directed_and_idempotent() {
        let mut links = Links::new();
        assert!(add_edge(&mut links, &id("a"), &id("b")));
        assert!(!add_edge(&mut links, &id("a"), &id("b")));

        assert_eq!(neighbors(&links, &id("a")), vec![id("b")]);
        assert!(neighbors(&links, &id("b")).is_empty());
    }

    #[test]
    fn add_edge_preserves_insertion_order() {
        let mut links = Links::new();
        add_edge(&mut links, &id("a"), &id("c"));
        add_edge(&mut links, &id("a"), &id("b"));
        assert_eq!(neighbors(&links, &id("a")), vec![id("c"), id("b")]);
    }

    #[test]
    fn closure_of_isolated_note_is_itself() {
        let links = Links::new();
        let closure = reachable_closure(&links, &id("a"));
        assert_eq!(closure, BTreeSet::from([id("a")]));
    }

    #[test]
    fn closure_is_transitive() {
        let mut links = Links::new();
        add_edge(&mut links, &id("a"), &id("b"));
        add_edge(&mut links, &id("b"), &id("c"));
        add_edge(&mut links, &id("x"), &id("a"));

        let closure = reachable_closure(&links, &id("a"));
        assert_eq!(closure, BTreeSet::from([id("a"), id("b"), id("c")]));
    }

    #[test]
    fn closure_terminates_on_cycles() {
        let mut links = Links::new();
        add_edge(&mut links, &id("a"), &id("b"));
        add_edge(&mut links, &id("b"), &id("a"));
        add_edge(&mut links, &id("b"), &id("b"));

        let closure = reachable_closure(&links, &id("b"));
        assert_eq!(closure, BTreeSet::from([id("a"), id("b")]));
    }

    #[test]
    fn cascade_remove_drops_key_and_incoming_edges() {
        let mut links = Links::new();
        add_edge(&mut links, &id("x"), &id("a"));
        add_edge(&mut links, &id("x"), &id("b"));
        add_edge(&mut links, &id("b"), &id("x"));
        add_edge(&mut links, &id("c"), &id("x"));

        assert!(cascade_remove(&mut links, &id("x")));

        assert!(!links.contains_key(&id("x")));
        assert!(links.values().all(|targets| !targets.contains(&id("x"))));
        assert!(links.get(&id("b")).unwrap().is_empty());
    }

    #[test]
    fn cascade_remove_is_idempotent() {
        let mut links = Links::new();
        add_edge(&mut links, &id("a"), &id("b"));
        let snapshot = links.clone();

        assert!(!cascade_remove(&mut links, &id("z")));
        assert_eq!(links, snapshot);

        assert!(cascade_remove(&mut links, &id("b")));
        assert!(!cascade_remove(&mut links, &id("b")));
    }
}
