//! Centralized user-facing messaging: the `Message` vocabulary, its display
//! text, and the output macros that route between console and tracing.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Prefixed-text helper for places that need a String rather than direct
// output, such as dialoguer confirmation prompts
pub fn warning(msg: Message) -> String {
    format!("⚠️  {}", msg)
}
