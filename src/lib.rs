// Library exports for host environments embedding the prompt and for
// integration tests

pub mod config;
pub mod element;
pub mod player;
pub mod prompt;

pub use config::{ButtonFactory, ChoiceHandler, OverlayFactory, ResumePromptConfig};
pub use element::{ClickEvent, ClickHandler, Display, Element, ElementHandle, Style};
pub use player::{Player, PlayerCallback, PlayerEvent};
pub use prompt::{resume_prompt, PromptError, ResumePrompt};

// Test support (unit tests always; external consumers opt in with the
// test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
