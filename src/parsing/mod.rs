//! Reading and writing genome pairs.
//!
//! A genome pair file holds four lines:
//!
//! | Line | Content                                    |
//! |------|--------------------------------------------|
//! | 1    | genes of genome 1 (integers)               |
//! | 2    | intergenic region labels of genome 1       |
//! | 3    | genes of genome 2 (integers)               |
//! | 4    | intergenic region labels of genome 2       |
//!
//! Tokens are separated by whitespace. Gzip-compressed files (`.gz`) and
//! stdin (`-`) are accepted as input.
//!
//! ## Example
//!
//! ```rust
//! use subgenome_fold::parsing::pair_file::parse_pair_text;
//!
//! let pair = parse_pair_text("1 2 3\na b\n2 3 1\nc a\n").unwrap();
//! assert_eq!(pair.first.genes, vec![1, 2, 3]);
//! assert_eq!(pair.second.regions, vec!["c", "a"]);
//! ```

pub mod pair_file;
