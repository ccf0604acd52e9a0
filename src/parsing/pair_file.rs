use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::warn;

use crate::core::pair::{GenomePair, GenomeRecord};
use crate::core::types::GeneId;
use crate::utils::validation::{check_gene_limit, is_valid_region_label, MAX_GENES};

/// Number of lines in a genome pair file
pub const PAIR_LINES: usize = 4;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid genome pair format: {0}")]
    InvalidFormat(String),

    #[error("Too many genes on line {line}: exceeds maximum allowed ({max})", max = MAX_GENES)]
    TooManyGenes { line: usize },
}

/// Read a genome pair file. `-` reads stdin; a `.gz` extension is decompressed.
///
/// # Errors
///
/// Returns `ParseError::Io` if the input cannot be read, or other parse errors
/// if the content is invalid.
pub fn read_pair_file(path: &Path) -> Result<GenomePair, ParseError> {
    let mut text = String::new();

    if path.as_os_str() == "-" {
        std::io::stdin().lock().read_to_string(&mut text)?;
    } else {
        let mut file = BufReader::new(File::open(path)?);
        let is_gzip = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

        if is_gzip {
            MultiGzDecoder::new(file).read_to_string(&mut text)?;
        } else {
            file.read_to_string(&mut text)?;
        }
    }

    parse_pair_text(&text)
}

/// Parse the four-line format: genes 1, regions 1, genes 2, regions 2.
///
/// Tokens are whitespace-separated; an empty line is an empty sequence.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if fewer than four lines are present or a
/// gene token is not an integer, or `ParseError::TooManyGenes` if a genome
/// exceeds the gene limit.
pub fn parse_pair_text(text: &str) -> Result<GenomePair, ParseError> {
    let lines: Vec<&str> = text.lines().collect();

    if lines.len() < PAIR_LINES {
        return Err(ParseError::InvalidFormat(format!(
            "expected {PAIR_LINES} lines (genes, regions, genes, regions), found {}",
            lines.len()
        )));
    }

    let extra = lines[PAIR_LINES..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .count();
    if extra > 0 {
        warn!("Ignoring {extra} non-empty line(s) after line {PAIR_LINES}");
    }

    // Line numbers in errors are 1-based for user friendliness
    let first = GenomeRecord::new(parse_genes(lines[0], 1)?, parse_regions(lines[1]));
    let second = GenomeRecord::new(parse_genes(lines[2], 3)?, parse_regions(lines[3]));

    Ok(GenomePair::new(first, second))
}

fn parse_genes(line: &str, line_num: usize) -> Result<Vec<GeneId>, ParseError> {
    let mut genes = Vec::new();

    for token in line.split_whitespace() {
        let gene: GeneId = token.parse().map_err(|_| {
            ParseError::InvalidFormat(format!("Invalid gene on line {line_num}: '{token}'"))
        })?;

        if check_gene_limit(genes.len()).is_some() {
            return Err(ParseError::TooManyGenes { line: line_num });
        }

        genes.push(gene);
    }

    Ok(genes)
}

fn parse_regions(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Render a genome pair in the four-line format
#[must_use]
pub fn format_pair(pair: &GenomePair) -> String {
    let mut out = String::new();
    for record in [&pair.first, &pair.second] {
        let genes: Vec<String> = record.genes.iter().map(ToString::to_string).collect();
        out.push_str(&genes.join(" "));
        out.push('\n');
        out.push_str(&record.regions.join(" "));
        out.push('\n');
    }
    out
}

/// Write a genome pair in the four-line format
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a region label could not be read
/// back (empty or containing whitespace), or `ParseError::Io` if writing fails.
pub fn write_pair<W: Write>(writer: &mut W, pair: &GenomePair) -> Result<(), ParseError> {
    if let Some(label) = [&pair.first, &pair.second]
        .iter()
        .flat_map(|record| record.regions.iter())
        .find(|label| !is_valid_region_label(label))
    {
        return Err(ParseError::InvalidFormat(format!(
            "Region label '{label}' cannot be written as a single token"
        )));
    }

    writer.write_all(format_pair(pair).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write a genome pair to `path`, or to stdout when `path` is `None`
///
/// # Errors
///
/// See [`write_pair`].
pub fn write_pair_file(path: Option<&Path>, pair: &GenomePair) -> Result<(), ParseError> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            write_pair(&mut file, pair)
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_pair(&mut handle, pair)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_text() {
        let text = "1 2 3\na b\n2 3 1\nc a\n";
        let pair = parse_pair_text(text).unwrap();

        assert_eq!(pair.first.genes, vec![1, 2, 3]);
        assert_eq!(pair.first.regions, vec!["a", "b"]);
        assert_eq!(pair.second.genes, vec![2, 3, 1]);
        assert_eq!(pair.second.regions, vec!["c", "a"]);
    }

    #[test]
    fn test_parse_signed_genes_and_extra_whitespace() {
        let text = "  -4\t7  \n r1   r2 \n7\n\n";
        let pair = parse_pair_text(text).unwrap();

        assert_eq!(pair.first.genes, vec![-4, 7]);
        assert_eq!(pair.first.regions, vec!["r1", "r2"]);
        assert_eq!(pair.second.genes, vec![7]);
        assert!(pair.second.regions.is_empty());
    }

    #[test]
    fn test_parse_too_few_lines() {
        let err = parse_pair_text("1 2\na\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_invalid_gene() {
        let err = parse_pair_text("1 2\na\n1 x\nb\n").unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.contains("line 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_too_many_genes() {
        let genes = vec!["1"; MAX_GENES + 1].join(" ");
        let text = format!("1 2\na\n{genes}\n\n");

        let err = parse_pair_text(&text).unwrap_err();
        assert!(matches!(err, ParseError::TooManyGenes { line: 3 }));
    }

    #[test]
    fn test_parse_ignores_lines_after_fourth() {
        let text = "1 2\na\n1 2\na\n9 9 9\n\nextra\n";
        let pair = parse_pair_text(text).unwrap();

        assert_eq!(pair.first.genes, vec![1, 2]);
        assert_eq!(pair.second.genes, vec![1, 2]);
        assert_eq!(pair.second.regions, vec!["a"]);
    }

    #[test]
    fn test_format_matches_input_layout() {
        let pair = GenomePair::new(
            GenomeRecord::new(vec![5, 10], vec!["x".into()]),
            GenomeRecord::new(vec![10, 4], vec!["z".into()]),
        );
        assert_eq!(format_pair(&pair), "5 10\nx\n10 4\nz\n");
    }

    #[test]
    fn test_write_rejects_unreadable_label() {
        let pair = GenomePair::new(
            GenomeRecord::new(vec![1, 2], vec!["a b".into()]),
            GenomeRecord::default(),
        );
        let mut out = Vec::new();
        assert!(write_pair(&mut out, &pair).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_then_parse() {
        let pair = GenomePair::new(
            GenomeRecord::new(vec![1, 2], vec!["s".into(), "a".into(), "e".into()]),
            GenomeRecord::new(vec![9], vec![]),
        );
        let mut out = Vec::new();
        write_pair(&mut out, &pair).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(parse_pair_text(&text).unwrap(), pair);
    }
}
