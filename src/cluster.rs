use crate::assign;
use crate::matrix::AffinityMatrix;
use crate::model::group::{Group, Partition};
use crate::model::preference::PreferenceGraph;
use crate::plan::{ClusterError, GroupPlan};
use crate::score;

/// Forms balanced groups maximizing mutual preference affinity.
///
/// The matrix and its canonical ordering are built once and shared by
/// assignment and scoring, so the returned `total_score` is exactly what
/// [`score::rescore`] recomputes for the same graph and partition.
pub fn cluster(graph: &PreferenceGraph, group_size: usize) -> Result<Partition, ClusterError> {
    if group_size < 1 {
        return Err(ClusterError::InvalidGroupSize);
    }

    let matrix = AffinityMatrix::from_graph(graph);
    let plan = GroupPlan::balanced(matrix.len(), group_size)?;
    let index_groups = assign::assign(&matrix, &plan);
    let total_score = score::total_score(&matrix, &index_groups);

    let groups = index_groups
        .into_iter()
        .map(|members| Group {
            members: members
                .into_iter()
                .map(|i| matrix.participant(i).clone())
                .collect(),
        })
        .collect();

    Ok(Partition { groups, total_score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Participant;

    #[test]
    fn rejects_zero_group_size() {
        assert_eq!(cluster(&PreferenceGraph::new(), 0), Err(ClusterError::InvalidGroupSize));
    }

    #[test]
    fn empty_graph_clusters_to_nothing() {
        let partition = cluster(&PreferenceGraph::new(), 3).unwrap();
        assert!(partition.groups.is_empty());
        assert_eq!(partition.total_score, 0);
    }

    #[test]
    fn lone_participant_gets_a_group_of_one() {
        let mut graph = PreferenceGraph::new();
        graph.insert(Participant::new(42, "Zoe Solo"));
        let partition = cluster(&graph, 3).unwrap();
        assert_eq!(partition.groups.len(), 1);
        assert_eq!(partition.groups[0].members, [Participant::new(42, "Zoe Solo")]);
        assert_eq!(partition.total_score, 0);
    }
}
