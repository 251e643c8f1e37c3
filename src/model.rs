pub mod entity {
    use std::hash::{Hash, Hasher};

    pub type Id = u32;

    /// A participant to be grouped. Identity lives in `id` alone; `name`
    /// is a display attribute and may change without affecting equality
    /// or hashing.
    #[derive(Debug, Clone)]
    pub struct Participant {
        pub id: Id,
        pub name: String,
    }

    impl Participant {
        pub fn new(id: Id, name: impl Into<String>) -> Participant {
            Participant { id, name: name.into() }
        }
    }

    impl PartialEq for Participant {
        fn eq(&self, other: &Participant) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Participant {}

    impl Hash for Participant {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }
}

pub mod preference {
    use std::collections::HashMap;

    use super::entity::{Id, Participant};

    pub type Weight = u32;
    pub type Score = u64;

    /// Directed, weighted preference graph. Participants are kept in
    /// insertion order, which is the canonical ordering everywhere
    /// downstream.
    #[derive(Debug, Clone, Default)]
    pub struct PreferenceGraph {
        participants: Vec<Participant>,
        index: HashMap<Id, usize>,
        votes: HashMap<Id, HashMap<Id, Weight>>,
    }

    impl PreferenceGraph {
        pub fn new() -> PreferenceGraph {
            PreferenceGraph::default()
        }

        /// Adds a participant. Re-inserting an existing id updates the
        /// display record in place; position and identity are unchanged.
        pub fn insert(&mut self, participant: Participant) {
            match self.index.get(&participant.id) {
                Some(&pos) => self.participants[pos] = participant,
                None => {
                    self.index.insert(participant.id, self.participants.len());
                    self.participants.push(participant);
                }
            }
        }

        /// Upserts the directed edge voter -> target. Last write wins.
        pub fn set_preference(&mut self, voter: Id, target: Id, weight: Weight) {
            self.votes.entry(voter).or_default().insert(target, weight);
        }

        /// Ranked-ballot form: with n entries, the first-ranked target
        /// gets weight n, the last gets 1.
        pub fn set_ranking(&mut self, voter: Id, ranking: &[Id]) {
            let max_points = ranking.len();
            for (rank, &target) in ranking.iter().enumerate() {
                self.set_preference(voter, target, (max_points - rank) as Weight);
            }
        }

        pub fn participants(&self) -> &[Participant] {
            &self.participants
        }

        pub fn index_of(&self, id: Id) -> Option<usize> {
            self.index.get(&id).copied()
        }

        pub fn preferences_of(&self, voter: Id) -> impl Iterator<Item = (Id, Weight)> + '_ {
            self.votes
                .get(&voter)
                .into_iter()
                .flatten()
                .map(|(&target, &weight)| (target, weight))
        }

        pub fn len(&self) -> usize {
            self.participants.len()
        }

        pub fn is_empty(&self) -> bool {
            self.participants.is_empty()
        }
    }
}

pub mod group {
    use super::entity::{Id, Participant};
    use super::preference::Score;

    /// One formed group. The first member is the leader chosen at
    /// formation time; order carries no further meaning.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Group {
        pub members: Vec<Participant>,
    }

    impl Group {
        pub fn leader(&self) -> Option<&Participant> {
            self.members.first()
        }

        pub fn contains(&self, id: Id) -> bool {
            self.members.iter().any(|member| member.id == id)
        }

        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Partition {
        pub groups: Vec<Group>,
        pub total_score: Score,
    }
}
