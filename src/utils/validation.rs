//! Centralized input limits.

/// Maximum number of genes accepted for a single genome.
///
/// A full fold scans genome B once per candidate window of genome A on every
/// move, so the cost grows steeply with genome size.
pub const MAX_GENES: usize = 1_000_000;

/// Check if adding another gene would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new gene.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_gene_limit(count: usize) -> Option<String> {
    if count >= MAX_GENES {
        Some(format!(
            "Too many genes: adding another would exceed maximum of {MAX_GENES}"
        ))
    } else {
        None
    }
}

/// Whether a token can be used as a region label in the four-line format.
///
/// Labels are whitespace-delimited on disk, so they cannot be empty or contain
/// whitespace.
#[must_use]
pub fn is_valid_region_label(label: &str) -> bool {
    !label.is_empty() && !label.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_gene_limit() {
        assert!(check_gene_limit(0).is_none());
        assert!(check_gene_limit(MAX_GENES - 1).is_none());
        assert!(check_gene_limit(MAX_GENES).is_some());
    }

    #[test]
    fn test_region_label() {
        assert!(is_valid_region_label("ig_12"));
        assert!(!is_valid_region_label(""));
        assert!(!is_valid_region_label("a b"));
    }
}
