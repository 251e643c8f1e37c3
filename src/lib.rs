//! Greedy affinity-based group formation: builds a pairwise affinity
//! matrix from weighted participant preferences, plans balanced group
//! sizes, and fills groups by iterative leader/partner selection.

pub mod assign;
pub mod cluster;
pub mod generate;
pub mod matrix;
pub mod model;
pub mod plan;
pub mod score;

pub use cluster::cluster;
pub use matrix::AffinityMatrix;
pub use model::entity::{Id, Participant};
pub use model::group::{Group, Partition};
pub use model::preference::{PreferenceGraph, Score, Weight};
pub use plan::{ClusterError, GroupPlan};
