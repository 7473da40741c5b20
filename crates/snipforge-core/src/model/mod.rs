pub mod prompt;
pub mod session;
pub mod snippet;

pub use prompt::ComposedPrompt;
pub use session::{GenerationSession, SessionStatus};
pub use snippet::Snippet;
