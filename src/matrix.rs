use std::collections::HashMap;

use crate::model::entity::{Id, Participant};
use crate::model::preference::{PreferenceGraph, Score, Weight};

/// Dense pairwise affinity table, indexed by the canonical participant
/// ordering (first-seen order of the graph). Row i, column j holds the
/// weight participant i assigned to participant j. The ordering travels
/// with the table so assignment and scoring always agree on indices.
#[derive(Debug, Clone)]
pub struct AffinityMatrix {
    participants: Vec<Participant>,
    index: HashMap<Id, usize>,
    weights: Vec<Weight>,
}

impl AffinityMatrix {
    pub fn from_graph(graph: &PreferenceGraph) -> AffinityMatrix {
        let participants = graph.participants().to_vec();
        let size = participants.len();
        let index: HashMap<Id, usize> = participants
            .iter()
            .enumerate()
            .map(|(pos, participant)| (participant.id, pos))
            .collect();

        let mut weights = vec![0; size * size];
        for (i, participant) in participants.iter().enumerate() {
            for (target, weight) in graph.preferences_of(participant.id) {
                // Votes for absent participants and self-votes are dropped.
                match index.get(&target) {
                    Some(&j) if j != i => weights[i * size + j] = weight,
                    _ => {}
                }
            }
        }

        AffinityMatrix { participants, index, weights }
    }

    pub fn weight(&self, i: usize, j: usize) -> Weight {
        self.weights[i * self.participants.len() + j]
    }

    /// Bidirectional affinity of the pair (i, j).
    pub fn mutual(&self, i: usize, j: usize) -> Score {
        self.weight(i, j) as Score + self.weight(j, i) as Score
    }

    pub fn participant(&self, i: usize) -> &Participant {
        &self.participants[i]
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
