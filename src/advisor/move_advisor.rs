use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::cache::LruCache;
use super::client::{ChatClient, Credentials, MoveClient};
use super::prompt::{parse_reply, user_prompt, SYSTEM_PROMPT};
use crate::config::AdvisorConfig;
use crate::error::AdvisorError;
use crate::game::Grid;

/// Cache key: an exact board snapshot plus the legal columns offered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdvisorKey {
    pub board: Grid,
    pub legal: Vec<usize>,
}

/// Counters for failures the advisor absorbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvisorStats {
    pub cache_hits: u64,
    pub requests: u64,
    pub fallbacks: u64,
}

enum Backend {
    Remote(Box<dyn MoveClient>),
    /// No credentials or no usable client; every miss goes to the fallback.
    FallbackOnly,
}

/// Suggests Yellow's move by asking a remote service, with a random legal
/// column as fallback and an LRU memo keyed on `(board, legal columns)`.
///
/// `suggest_move` never fails; every error is logged and replaced by the
/// fallback.
pub struct MoveAdvisor {
    backend: Backend,
    cache: LruCache<AdvisorKey, usize>,
    rng: StdRng,
    stats: AdvisorStats,
}

impl MoveAdvisor {
    /// Build an advisor backed by the chat completions service, or a
    /// fallback-only advisor when `credentials` is `None`.
    pub fn from_config(config: &AdvisorConfig, credentials: Option<Credentials>) -> Self {
        let backend = match credentials {
            Some(credentials) => {
                let source = credentials.source();
                match ChatClient::new(config, credentials) {
                    Ok(client) => {
                        info!(key = source, model = %config.model, "move advisor ready");
                        Backend::Remote(Box::new(client))
                    }
                    Err(err) => {
                        warn!(error = %err, "could not build advisor client, AI will play random moves");
                        Backend::FallbackOnly
                    }
                }
            }
            None => {
                warn!(error = %AdvisorError::Unavailable, "move advisor unavailable, AI will play random moves");
                Backend::FallbackOnly
            }
        };
        Self::with_backend(backend, config.cache_capacity)
    }

    /// Build an advisor around any request client.
    pub fn with_client(client: Box<dyn MoveClient>, cache_capacity: usize) -> Self {
        Self::with_backend(Backend::Remote(client), cache_capacity)
    }

    /// Build an advisor that only ever plays the random fallback.
    pub fn fallback_only(cache_capacity: usize) -> Self {
        Self::with_backend(Backend::FallbackOnly, cache_capacity)
    }

    fn with_backend(backend: Backend, cache_capacity: usize) -> Self {
        MoveAdvisor {
            backend,
            cache: LruCache::new(cache_capacity),
            rng: StdRng::from_os_rng(),
            stats: AdvisorStats::default(),
        }
    }

    /// Replace the fallback RNG, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, Backend::Remote(_))
    }

    pub fn stats(&self) -> AdvisorStats {
        self.stats
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    /// Pick a column from `legal`. The caller guarantees `legal` is non-empty.
    pub fn suggest_move(&mut self, board: &Grid, legal: &[usize]) -> usize {
        assert!(!legal.is_empty(), "No legal columns available");

        let key = AdvisorKey {
            board: *board,
            legal: legal.to_vec(),
        };
        if let Some(&column) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            debug!(column, "advisor cache hit");
            return column;
        }

        let column = match self.request(board, legal) {
            Ok(column) => {
                debug!(column, "advisor suggested column");
                column
            }
            Err(err) => {
                let column = self.random_column(legal);
                self.stats.fallbacks += 1;
                if is_reported_at_startup(&err) {
                    debug!(column, "advisor offline, playing random column");
                } else {
                    warn!(error = %err, column, "advisor failed, playing random column");
                }
                column
            }
        };

        self.cache.insert(key, column);
        column
    }

    fn request(&mut self, board: &Grid, legal: &[usize]) -> Result<usize, AdvisorError> {
        let client = match &self.backend {
            Backend::Remote(client) => client,
            Backend::FallbackOnly => return Err(AdvisorError::Unavailable),
        };
        self.stats.requests += 1;
        let reply = client.complete(SYSTEM_PROMPT, &user_prompt(board, legal))?;
        parse_reply(&reply, legal)
    }

    fn random_column(&mut self, legal: &[usize]) -> usize {
        legal[self.rng.random_range(0..legal.len())]
    }
}

/// Missing credentials are warned about once in `from_config`, not per move.
fn is_reported_at_startup(err: &AdvisorError) -> bool {
    matches!(err, AdvisorError::Unavailable)
}
