pub mod generator;
pub mod transcript;

pub use generator::MockGenerator;
pub use transcript::MockTranscriptProvider;
