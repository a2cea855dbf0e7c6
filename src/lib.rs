// Indexed digit loops read closer to the counter arithmetic
#![allow(clippy::needless_range_loop)]

/// Use mimalloc as the global allocator for all binaries.
/// Better thread-local caching than glibc malloc for the per-worker
/// candidate buffers allocated on every round.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod cli;
pub mod common;
pub mod counter;
pub mod search;
pub mod target;

pub use common::error::ConfigError;
pub use counter::ValueRange;
pub use search::{Match, SearchConfig, search};
pub use target::{MatchKind, Target};
