use clap::Parser;

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube video summarization service", version)]
pub struct Cli {
    /// Address to listen on (default 127.0.0.1:8080)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Gemini model used for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Maximum transcript chunk size, in characters
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Timeout for each upstream call, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Show resolved settings on startup
    #[arg(short, long)]
    pub verbose: bool,
}
