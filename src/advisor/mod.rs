//! Remote move advisor: prompt formatting, the chat completions client, an
//! LRU memo of past answers, and the random-move fallback.

mod cache;
mod client;
mod move_advisor;
pub mod prompt;
#[cfg(test)]
mod test_support;

pub use cache::LruCache;
pub use client::{ChatClient, Credentials, MoveClient, API_KEY_VARS};
pub use move_advisor::{AdvisorKey, AdvisorStats, MoveAdvisor};
