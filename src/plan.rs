use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("group size must be at least 1")]
    InvalidGroupSize,
    #[error("impossible to distribute {total} participants fairly without a 1-sized group")]
    InfeasibleDistribution { total: usize, group_size: usize },
}

/// Planned sequence of group sizes for one clustering run. Every size is
/// either the requested `g` or `g - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    pub sizes: Vec<usize>,
}

impl GroupPlan {
    /// Balanced decomposition of `total` participants into groups of
    /// `group_size` or one less: the smallest r in 0..group_size such
    /// that q full groups plus r reduced ones cover the total exactly.
    ///
    /// Floor division keeps the search total-covering even when the pool
    /// is smaller than one reduced group (q goes negative and no full
    /// group is emitted); the assigner stops once everyone is placed, so
    /// an over-long plan tail is never materialized into empty groups.
    pub fn balanced(total: usize, group_size: usize) -> Result<GroupPlan, ClusterError> {
        let n = total as i64;
        let g = group_size as i64;
        for r in 0..g {
            let q = (n - r * (g - 1)).div_euclid(g);
            if q * g + r * (g - 1) == n {
                let full = q.max(0) as usize;
                let mut sizes = vec![group_size; full];
                sizes.extend(std::iter::repeat(group_size - 1).take(r as usize));
                return Ok(GroupPlan { sizes });
            }
        }
        Err(ClusterError::InfeasibleDistribution { total, group_size })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
