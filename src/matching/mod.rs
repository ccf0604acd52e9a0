//! Subgenome discovery and collapse.
//!
//! - [`find_common_window`]: finds at most one (gene, region, gene) window shared by two genomes
//! - [`collapse`]: replaces a shared window with one new gene in both genomes
//! - [`CollapseEngine`]: repeats find + collapse until nothing is shared
//!
//! ## Selection policy
//!
//! The search is greedy and does not backtrack:
//!
//! 1. Valid windows of genome A are tried in ascending start order
//! 2. A window whose first or last gene already anchored a collapse is skipped
//! 3. The first position in genome B holding an identical window is used
//! 4. A collapsed window value is never searched for again
//!
//! A window skipped in step 2 stays skipped for the rest of the run, even if
//! it would have matched. This keeps the set of detected windows reproducible.
//!
//! ## Example
//!
//! ```rust
//! use subgenome_fold::CollapseEngine;
//!
//! let regions = |r: &[&str]| r.iter().map(|s| s.to_string()).collect::<Vec<_>>();
//! let engine = CollapseEngine::new();
//! let outcome = engine
//!     .run(&[5, 7, 9], &regions(&["x", "y"]), &[7, 9, 4], &regions(&["y", "z"]))
//!     .unwrap();
//!
//! assert_eq!(outcome.moves(), 1);
//! assert_eq!(outcome.first.to_string(), "5 x 10");
//! assert_eq!(outcome.second.to_string(), "10 z 4");
//! ```
//!
//! [`find_common_window`]: matcher::find_common_window
//! [`collapse`]: collapse::collapse
//! [`CollapseEngine`]: engine::CollapseEngine

pub mod collapse;
pub mod engine;
pub mod matcher;
