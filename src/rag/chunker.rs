//! Character-budget text chunking with overlap.
//!
//! Splits extracted textbook text into retrieval segments of at most
//! `chunk_size` characters, with consecutive segments overlapping by
//! `chunk_overlap` characters. Split points prefer paragraph breaks, then
//! line breaks, then sentence ends, then spaces, and only hard-cut
//! mid-word when no boundary exists in the second half of the window.

pub struct TextChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextChunker {
    /// Panics if `chunk_overlap >= chunk_size` or `chunk_size == 0`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be positive");
        assert!(
            chunk_overlap < chunk_size,
            "chunk_overlap must be smaller than chunk_size"
        );
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split `text` into segments. Deterministic; never yields an empty
    /// segment. Whitespace-only input yields no segments.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let hard_end = (start + self.chunk_size).min(chars.len());
            let end = if hard_end < chars.len() {
                self.split_point(&chars, start, hard_end)
            } else {
                hard_end
            };

            let segment: String = chars[start..end].iter().collect();
            let segment = segment.trim();
            if !segment.is_empty() {
                chunks.push(segment.to_string());
            }

            if end >= chars.len() {
                break;
            }
            // Step back by the overlap, but always make forward progress.
            start = end.saturating_sub(self.chunk_overlap).max(start + 1);
        }

        chunks
    }

    /// Pick a split point in `(floor, hard_end]` where `floor` is the
    /// midpoint of the window, so boundary preference never produces a
    /// segment smaller than half the budget.
    fn split_point(&self, chars: &[char], start: usize, hard_end: usize) -> usize {
        let floor = start + (hard_end - start) / 2;

        // Paragraph break: split after the blank line.
        for i in (floor..hard_end.saturating_sub(1)).rev() {
            if chars[i] == '\n' && chars[i + 1] == '\n' {
                return i + 2;
            }
        }

        // Line break.
        for i in (floor..hard_end).rev() {
            if chars[i] == '\n' {
                return i + 1;
            }
        }

        // Sentence end: terminator followed by whitespace.
        for i in (floor..hard_end.saturating_sub(1)).rev() {
            if matches!(chars[i], '.' | '!' | '?') && chars[i + 1].is_whitespace() {
                return i + 2;
            }
        }

        // Word boundary.
        for i in (floor..hard_end).rev() {
            if chars[i] == ' ' {
                return i + 1;
            }
        }

        // No boundary in range: hard cut.
        hard_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> String {
        (0..n)
            .map(|i| format!("This is sentence number {}.", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunker = TextChunker::new(1000, 200);
        let chunks = chunker.chunk("Resources can be renewable or non-renewable.");
        assert_eq!(
            chunks,
            vec!["Resources can be renewable or non-renewable.".to_string()]
        );
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_chunks() {
        let chunker = TextChunker::new(100, 20);
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("  \n\n \t ").is_empty());
    }

    #[test]
    fn chunks_never_exceed_the_configured_size() {
        let chunker = TextChunker::new(100, 20);
        let text = sentences(60);
        for chunk in chunker.chunk(&text) {
            assert!(chunk.chars().count() <= 100, "oversized chunk: {:?}", chunk);
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn every_chunk_is_a_substring_of_the_source() {
        let chunker = TextChunker::new(120, 30);
        let text = sentences(50);
        for chunk in chunker.chunk(&text) {
            assert!(text.contains(&chunk), "chunk not found in source: {:?}", chunk);
        }
    }

    #[test]
    fn consecutive_chunks_overlap() {
        let chunker = TextChunker::new(120, 30);
        let text = sentences(50);
        let chunks = chunker.chunk(&text);
        assert!(chunks.len() > 2);
        for pair in chunks.windows(2) {
            // The head of each chunk re-covers the tail of the previous one.
            let head: String = pair[1].chars().take(10).collect();
            assert!(
                pair[0].contains(&head),
                "no overlap between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn de_overlapped_chunks_reconstruct_the_source() {
        let chunker = TextChunker::new(120, 30);
        let text = sentences(50);
        let chars: Vec<char> = text.chars().collect();
        let chunks = chunker.chunk(&text);
        assert!(chunks.len() > 2);

        // Locate each chunk in the source (chunks appear in order), then
        // stitch together only the portion past the previous chunk's end.
        let mut reconstructed = String::new();
        let mut search_from = 0;
        let mut covered_to = 0;
        for chunk in &chunks {
            let chunk_chars: Vec<char> = chunk.chars().collect();
            let pos = (search_from..=chars.len() - chunk_chars.len())
                .find(|&i| chars[i..i + chunk_chars.len()] == chunk_chars[..])
                .expect("chunk must occur in the source");
            let begin = pos.max(covered_to);
            reconstructed.extend(&chars[begin..pos + chunk_chars.len()]);
            covered_to = pos + chunk_chars.len();
            search_from = pos;
        }

        // Only whitespace trimmed at window edges may be lost.
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&reconstructed), strip(&text));
    }

    #[test]
    fn chunk_count_tracks_step_size() {
        let chunker = TextChunker::new(1000, 200);
        let text = sentences(400);
        let len = text.chars().count();
        let chunks = chunker.chunk(&text);
        // Step is roughly size - overlap; boundary snapping shortens it.
        let expected = len.div_ceil(1000 - 200);
        assert!(
            chunks.len() >= expected && chunks.len() <= expected * 2,
            "got {} chunks for {} chars",
            chunks.len(),
            len
        );
    }

    #[test]
    fn prefers_paragraph_breaks() {
        let chunker = TextChunker::new(100, 10);
        let para_a = "a".repeat(70);
        let para_b = "b".repeat(70);
        let text = format!("{}\n\n{}", para_a, para_b);
        let chunks = chunker.chunk(&text);
        assert_eq!(chunks[0], para_a);
    }

    #[test]
    fn hard_cuts_only_without_any_boundary() {
        let chunker = TextChunker::new(50, 10);
        let text = "x".repeat(120);
        let chunks = chunker.chunk(&text);
        assert!(chunks.iter().all(|c| c.chars().count() <= 50));
        assert_eq!(chunks[0].len(), 50);
    }

    #[test]
    fn chunking_is_deterministic() {
        let chunker = TextChunker::new(90, 25);
        let text = sentences(40);
        assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
    }

    #[test]
    #[should_panic]
    fn overlap_must_be_smaller_than_size() {
        TextChunker::new(100, 100);
    }
}
