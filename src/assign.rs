use std::collections::BTreeSet;

use itertools::Itertools;

use crate::matrix::AffinityMatrix;
use crate::model::preference::Score;
use crate::plan::GroupPlan;

/// Greedy group formation over the affinity table. The ungrouped pool is
/// a BTreeSet so iteration is always in canonical index order; every tie
/// falls to the lowest index.
struct Assigner<'a> {
    matrix: &'a AffinityMatrix,
    ungrouped: BTreeSet<usize>,
}

impl<'a> Assigner<'a> {
    fn new(matrix: &'a AffinityMatrix) -> Assigner<'a> {
        Assigner {
            matrix,
            ungrouped: (0..matrix.len()).collect(),
        }
    }

    /// Bidirectional affinity of `i` to the rest of the pool.
    fn pool_score(&self, i: usize) -> Score {
        self.ungrouped
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| self.matrix.mutual(i, j))
            .sum()
    }

    fn select_leader(&self) -> Option<usize> {
        let mut best: Option<(usize, Score)> = None;
        for &i in &self.ungrouped {
            let score = self.pool_score(i);
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((i, score)),
            }
        }
        best.map(|(leader, _)| leader)
    }

    /// Top `count` pool members by affinity to the leader. The sort is
    /// stable over an ascending-index candidate list, so equal scores
    /// keep canonical order.
    fn select_partners(&self, leader: usize, count: usize) -> Vec<usize> {
        self.ungrouped
            .iter()
            .filter(|&&j| j != leader)
            .map(|&j| (j, self.matrix.mutual(leader, j)))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(count)
            .map(|(j, _)| j)
            .collect_vec()
    }

    fn form_group(&mut self, size: usize) -> Option<Vec<usize>> {
        let leader = self.select_leader()?;
        let mut members = vec![leader];
        members.extend(self.select_partners(leader, size - 1));
        for &member in &members {
            self.ungrouped.remove(&member);
        }
        Some(members)
    }
}

/// Walks the plan in order, emitting one group per planned size until the
/// pool runs dry. The result may be shorter than the plan; it never
/// contains an empty group.
pub fn assign(matrix: &AffinityMatrix, plan: &GroupPlan) -> Vec<Vec<usize>> {
    let mut assigner = Assigner::new(matrix);
    plan.sizes
        .iter()
        .map_while(|&size| assigner.form_group(size))
        .collect()
}
