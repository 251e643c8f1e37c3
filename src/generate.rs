use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::entity::{Id, Participant};
use crate::model::preference::PreferenceGraph;

const FIRST_NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Hugo", "Ivy", "Jack",
    "Luna", "Mia", "Noah", "Olivia", "Paul", "Quinn", "Rose", "Sam", "Tina", "Ugo",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis", "Garcia", "Taylor", "Lee",
];

/// Random preference graph: `count` participants, each ranking between 1
/// and `max_prefs` distinct others. Deterministic for a given seed.
pub fn random_graph(count: usize, max_prefs: usize, rng: &mut SmallRng) -> PreferenceGraph {
    let mut graph = PreferenceGraph::new();
    for i in 0..count {
        let first = FIRST_NAMES.choose(rng).unwrap();
        // Index suffix keeps generated names unique.
        let last = format!("{}{}", LAST_NAMES.choose(rng).unwrap(), i);
        graph.insert(Participant::new(i as Id, format!("{first} {last}")));
    }

    let ids: Vec<Id> = (0..count as Id).collect();
    for &voter in &ids {
        let others: Vec<Id> = ids.iter().copied().filter(|&id| id != voter).collect();
        if others.is_empty() {
            continue;
        }
        let picks = rng.gen_range(1..=max_prefs.min(others.len()));
        let ranking: Vec<Id> = others.choose_multiple(rng, picks).copied().collect();
        graph.set_ranking(voter, &ranking);
    }
    graph
}
