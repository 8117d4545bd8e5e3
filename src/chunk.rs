/// Default maximum chunk size, in characters
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Split text into an ordered, non-overlapping, gap-free sequence of chunks.
///
/// Every chunk holds exactly `chunk_size` characters except possibly the last,
/// which holds the remainder. Counts characters rather than bytes so multibyte
/// text is never split mid-codepoint. Empty input yields no chunks; callers
/// reject empty transcripts before chunking.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for ch in text.chars() {
        current.push(ch);
        len += 1;
        if len == chunk_size {
            chunks.push(std::mem::take(&mut current));
            len = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
