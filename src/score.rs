use itertools::Itertools;

use crate::matrix::AffinityMatrix;
use crate::model::group::Partition;
use crate::model::preference::Score;

/// Sum of bidirectional affinities over each unordered member pair.
pub fn group_score(matrix: &AffinityMatrix, members: &[usize]) -> Score {
    members
        .iter()
        .tuple_combinations()
        .map(|(&i, &j)| matrix.mutual(i, j))
        .sum()
}

pub fn total_score(matrix: &AffinityMatrix, groups: &[Vec<usize>]) -> Score {
    groups.iter().map(|members| group_score(matrix, members)).sum()
}

/// Recomputes a partition's score from scratch against a matrix built
/// over the same ordering. Members missing from the matrix contribute
/// nothing.
pub fn rescore(matrix: &AffinityMatrix, partition: &Partition) -> Score {
    partition
        .groups
        .iter()
        .map(|group| {
            let members = group
                .members
                .iter()
                .filter_map(|member| matrix.index_of(member.id))
                .collect_vec();
            group_score(matrix, &members)
        })
        .sum()
}
