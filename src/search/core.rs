//! Exhaustive search driver.
//!
//! Candidates are enumerated by length class, shortest first. Short classes
//! are scanned on the calling thread; from [`PARTITION_THRESHOLD`] bytes up,
//! each round fixes the high-order prefix and splits the space of the 4
//! low-order bytes into one partition per value of the most significant of
//! them. Partitions run as rayon tasks, on a dedicated pool when
//! [`SearchConfig::threads`] is set.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use sha1::{Digest, Sha1};
use tracing::{debug, info};

use crate::common::error::ConfigError;
use crate::common::output::format_bytes;
use crate::counter::{SENTINEL, ValueRange, advance, grow, normalize};
use crate::target::{MatchKind, Target, evaluate};

/// Candidate length at which rounds switch from serial to partitioned.
/// Below it a whole length class is at most 256^3 candidates, too little
/// to pay for dispatching workers.
pub const PARTITION_THRESHOLD: usize = 4;

/// Low-order bytes covered by one partitioned round.
pub const ROUND_WIDTH: usize = 4;

/// Bytes each worker advances within its partition (everything below the
/// partition digit).
const WORKER_WIDTH: usize = ROUND_WIDTH - 1;

/// Engine settings, fixed for the whole search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    pub range: ValueRange,
    /// Longest candidate length to try. `None` searches forever.
    pub max_len: Option<usize>,
    /// Size of a dedicated worker pool. `None` runs on the current rayon
    /// pool (the global one unless the caller installed another).
    pub threads: Option<usize>,
}

/// Driver state for a given candidate length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ShortCandidate,
    PartitionedSearch,
}

impl Phase {
    pub fn for_len(len: usize) -> Self {
        if len < PARTITION_THRESHOLD {
            Phase::ShortCandidate
        } else {
            Phase::PartitionedSearch
        }
    }
}

/// A preimage found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub candidate: Vec<u8>,
    pub kind: MatchKind,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found: {}{}",
            format_bytes(&self.candidate),
            self.kind.annotation()
        )
    }
}

/// Search for a preimage of `target`, hashing with SHA-1.
///
/// `on_round` is called on the coordinating thread after each partitioned
/// round with that round's ceiling candidate.
///
/// Fails only if the dedicated worker pool cannot be built.
pub fn search(
    target: &Target,
    config: &SearchConfig,
    on_round: impl FnMut(&[u8]) + Send,
) -> Result<Option<Match>, ConfigError> {
    search_with(
        config,
        move || {
            let mut hasher = Sha1::new();
            move |candidate: &[u8]| evaluate(target, candidate, &mut hasher)
        },
        on_round,
    )
}

/// Search driver with a pluggable checker.
///
/// `make_checker` is called once for the serial phase and once per partition,
/// so every worker owns private checker state (e.g. its hasher).
pub fn search_with<F, P>(
    config: &SearchConfig,
    make_checker: F,
    on_round: impl FnMut(&[u8]) + Send,
) -> Result<Option<Match>, ConfigError>
where
    F: Fn() -> P + Sync,
    P: FnMut(&[u8]) -> Option<MatchKind>,
{
    let searcher = Searcher::new(config);
    match config.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n.max(1))
                .build()
                .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;
            debug!(threads = pool.current_num_threads(), "built worker pool");
            Ok(pool.install(|| searcher.run(&make_checker, on_round)))
        }
        None => Ok(searcher.run(&make_checker, on_round)),
    }
}

struct Searcher {
    range: ValueRange,
    max_len: Option<usize>,
    /// Raised by the first worker that finds a match.
    stop: AtomicBool,
}

impl Searcher {
    fn new(config: &SearchConfig) -> Self {
        Searcher {
            range: config.range,
            max_len: config.max_len,
            stop: AtomicBool::new(false),
        }
    }

    #[inline]
    fn exhausted(&self, len: usize) -> bool {
        self.max_len.is_some_and(|max| len > max)
    }

    fn run<F, P>(&self, make_checker: &F, mut on_round: impl FnMut(&[u8])) -> Option<Match>
    where
        F: Fn() -> P + Sync,
        P: FnMut(&[u8]) -> Option<MatchKind>,
    {
        info!(range = %self.range, max_len = ?self.max_len, "starting search");

        let mut candidate = Vec::with_capacity(PARTITION_THRESHOLD + 4);
        let mut checker = make_checker();

        // ShortCandidate: every class below the threshold on this thread.
        while Phase::for_len(candidate.len()) == Phase::ShortCandidate {
            if self.exhausted(candidate.len()) {
                return None;
            }
            if let Some(kind) = checker(&candidate) {
                return Some(Match { candidate, kind });
            }
            if advance(self.range, &mut candidate) {
                self.next_class(&mut candidate);
            }
        }

        // PartitionedSearch: one round per prefix value.
        loop {
            if self.exhausted(candidate.len()) {
                return None;
            }
            let started = Instant::now();
            if let Some(found) = self.run_round(&candidate, make_checker) {
                return Some(found);
            }

            let split = candidate.len() - ROUND_WIDTH;
            candidate[split..].fill(self.range.high());
            debug!(
                ceiling = %format_bytes(&candidate),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "round finished"
            );
            on_round(&candidate);

            if advance(self.range, &mut candidate) {
                self.next_class(&mut candidate);
            }
        }
    }

    fn next_class(&self, candidate: &mut Vec<u8>) {
        grow(self.range, candidate);
        let len = candidate.len();
        info!(
            len,
            candidates = %self.range.class_size(len),
            phase = ?Phase::for_len(len),
            "entering length class"
        );
    }

    /// Scan every partition of the round whose prefix is `candidate`
    /// minus its 4 low-order bytes. Blocks until all partitions finish or
    /// one of them matches.
    fn run_round<F, P>(&self, candidate: &[u8], make_checker: &F) -> Option<Match>
    where
        F: Fn() -> P + Sync,
        P: FnMut(&[u8]) -> Option<MatchKind>,
    {
        let prefix = &candidate[..candidate.len() - ROUND_WIDTH];
        (self.range.low()..=self.range.high())
            .into_par_iter()
            .find_map_any(|digit| {
                let mut checker = make_checker();
                self.scan_partition(prefix, digit, &mut checker)
            })
    }

    /// Evaluate `prefix ++ [digit, *, *, *]` for every in-range tail.
    fn scan_partition<P>(&self, prefix: &[u8], digit: u8, checker: &mut P) -> Option<Match>
    where
        P: FnMut(&[u8]) -> Option<MatchKind>,
    {
        let mut candidate = partition_start(self.range, prefix, digit);
        let tail = candidate.len() - WORKER_WIDTH;
        loop {
            if self.stop.load(Ordering::Relaxed) {
                return None;
            }
            if let Some(kind) = checker(&candidate) {
                self.stop.store(true, Ordering::Relaxed);
                return Some(Match { candidate, kind });
            }
            // Overflow of the tail would carry into `digit`: partition done.
            if advance(self.range, &mut candidate[tail..]) {
                return None;
            }
        }
    }
}

/// First candidate of a partition: the prefix, the partition digit, and a
/// zeroed tail normalized into range.
pub fn partition_start(range: ValueRange, prefix: &[u8], digit: u8) -> Vec<u8> {
    let mut candidate = Vec::with_capacity(prefix.len() + ROUND_WIDTH);
    candidate.extend_from_slice(prefix);
    candidate.push(digit);
    candidate.extend_from_slice(&[SENTINEL; WORKER_WIDTH]);
    normalize(range, &mut candidate[prefix.len() + 1..]);
    candidate
}
