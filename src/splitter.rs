use tracing::debug;

/// One delimiter-separated snippet from the phrases file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Sequence number over non-empty chunks (1-based, assigned in file order)
    pub sequence: usize,

    /// Trimmed snippet text
    pub text: String,
}

impl Chunk {
    /// Creates a new chunk.
    #[must_use]
    pub fn new(sequence: usize, text: impl Into<String>) -> Self {
        Self {
            sequence,
            text: text.into(),
        }
    }
}

/// Result of splitting the phrases file.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Non-empty trimmed chunks in original order
    pub chunks: Vec<Chunk>,

    /// Raw piece count including pieces that were empty after trimming
    pub total_pieces: usize,
}

impl SplitReport {
    /// Number of pieces that were empty after trimming and skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.total_pieces - self.chunks.len()
    }
}

/// Splits phrases-file content on a literal delimiter.
pub struct Splitter {
    delimiter: String,
}

impl Splitter {
    /// Creates a splitter for the given literal delimiter.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Splits `content` on every occurrence of the delimiter.
    ///
    /// Each piece is trimmed of leading/trailing whitespace; pieces that are
    /// empty after trimming (trailing delimiter, consecutive delimiters) are
    /// skipped silently. Surviving chunks keep their original order and get
    /// 1-based sequence numbers.
    #[must_use]
    pub fn split(&self, content: &str) -> SplitReport {
        let pieces: Vec<&str> = content.split(&self.delimiter).collect();
        let total_pieces = pieces.len();

        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(i, piece)| Chunk::new(i + 1, piece))
            .collect();

        debug!(
            "Split into {} pieces, {} non-empty",
            total_pieces,
            chunks.len()
        );

        SplitReport {
            chunks,
            total_pieces,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(content: &str) -> SplitReport {
        Splitter::new("===DELIMITER===").split(content)
    }

    #[test]
    fn test_two_chunks_with_trailing_delimiter() {
        let report = split("a===DELIMITER===b===DELIMITER===");

        assert_eq!(report.chunks.len(), 2);
        assert_eq!(report.chunks[0].text, "a");
        assert_eq!(report.chunks[1].text, "b");
        assert_eq!(report.total_pieces, 3);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_no_delimiter_yields_single_chunk() {
        let report = split("  just one snippet\n");

        assert_eq!(report.chunks.len(), 1);
        assert_eq!(report.chunks[0].text, "just one snippet");
        assert_eq!(report.total_pieces, 1);
    }

    #[test]
    fn test_consecutive_delimiters_skipped() {
        let report = split("a===DELIMITER======DELIMITER===b");

        assert_eq!(report.chunks.len(), 2);
        assert_eq!(report.total_pieces, 3);
    }

    #[test]
    fn test_whitespace_only_piece_skipped() {
        let report = split("a===DELIMITER===   \n\t  ===DELIMITER===b");

        assert_eq!(report.chunks.len(), 2);
        assert_eq!(report.chunks[1].text, "b");
    }

    #[test]
    fn test_empty_input() {
        let report = split("");

        assert!(report.chunks.is_empty());
        assert_eq!(report.total_pieces, 1);
    }

    #[test]
    fn test_sequence_numbers_follow_file_order() {
        let report = split("first===DELIMITER===second===DELIMITER===third");

        let sequences: Vec<usize> = report.chunks.iter().map(|c| c.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_chunks_keep_interior_whitespace() {
        let report = split("fn main() {\n    println!(\"hi\");\n}\n===DELIMITER===");

        assert_eq!(report.chunks[0].text, "fn main() {\n    println!(\"hi\");\n}");
    }
}
