use crate::SummaryOptions;

/// Build the summarization prompt for a single transcript fragment.
///
/// Pure: identical fragment and options always produce a byte-identical
/// prompt. Labels are passed through verbatim and the fragment is embedded
/// unmodified.
pub fn chunk_prompt(fragment: &str, opts: &SummaryOptions) -> String {
    let formatting = if opts.bulleted {
        "Use bullet points."
    } else {
        "Write in paragraph form."
    };

    format!(
        r#"You are a helpful assistant.

Summarize the following YouTube video transcript in {language}.

Style: {style}
Length: {length}
{formatting}

Provide:
- An engaging title
- A clear summary
- Key points extracted from the content

Transcript:
{fragment}"#,
        language = opts.language,
        style = opts.style,
        length = opts.length,
    )
}

/// Build the merge prompt from per-chunk partial summaries, in original
/// chunk order.
pub fn merge_prompt(partials: &[String]) -> String {
    let mut prompt =
        String::from("Combine and refine the following summaries into one final professional summary.\n");
    for (i, partial) in partials.iter().enumerate() {
        prompt.push_str(&format!("\nSummary {}:\n{partial}\n", i + 1));
    }
    prompt
}
