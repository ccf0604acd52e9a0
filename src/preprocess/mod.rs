//! Input preparation before folding.
//!
//! Matching assumes that a gene identifier occurs at most once per genome.
//! [`relabel`] gives each repeated occurrence its own identifier, keeping the
//! original identifier for one of them.

pub mod relabel;
