//! Chunking: split extracted text into pieces the model can summarise.
//!
//! Splitting is delegated to `text-splitter`, which picks the largest
//! semantic level whose pieces fit the budget: runs of newlines (paragraphs,
//! then lines), then Unicode sentences, then words, and only then graphemes.
//! Adjacent pieces at that level are merged back up to the budget, so chunks
//! are as large as the bound allows and a word is only cut when it is longer
//! than the bound on its own.
//!
//! Sizes are measured in characters (Unicode scalar values), not bytes, so a
//! chunk of accented text holds as many letters as a chunk of ASCII.

use crate::error::SummaryError;
use text_splitter::{ChunkConfig, TextSplitter};
use tracing::debug;

/// Split `text` into ordered, non-empty chunks of at most `max_chunk_size`
/// characters each.
///
/// Chunks are trimmed, so whitespace at chunk boundaries is not preserved;
/// everything else is, in order. Whitespace-only input yields no chunks.
pub fn split_text(text: &str, max_chunk_size: usize) -> Result<Vec<String>, SummaryError> {
    if max_chunk_size == 0 {
        return Err(SummaryError::InvalidConfig(
            "chunk size must be greater than zero".into(),
        ));
    }
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let splitter = TextSplitter::new(ChunkConfig::new(max_chunk_size));
    let chunks: Vec<String> = splitter
        .chunks(text)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .flat_map(|c| hard_split(c, max_chunk_size))
        .collect();

    debug!(
        "Split {} chars into {} chunks (max {} chars)",
        char_count(text),
        chunks.len(),
        max_chunk_size
    );
    Ok(chunks)
}

fn char_count(segment: &str) -> usize {
    segment.chars().count()
}

/// Cut `chunk` every `max` characters. Chunks already within the bound pass
/// through untouched.
fn hard_split(chunk: &str, max: usize) -> Vec<String> {
    if char_count(chunk) <= max {
        return vec![chunk.to_string()];
    }
    let chars: Vec<char> = chunk.chars().collect();
    chars
        .chunks(max)
        .map(|piece| piece.iter().collect::<String>())
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}
