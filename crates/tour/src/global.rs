use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use once_cell::sync::Lazy;
use types::Optional;

pub struct Config;

impl Config {
    pub const SOME_OPTIONAL: i64 = 42;
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";
    pub const VERBOSE_LOG_FILTER: &'static str = "debug";
    pub const DEFAULT_FORMAT: &'static str = "text";
}

static SAMPLE_INITS: AtomicUsize = AtomicUsize::new(0);

/// The `[nil, 2, 3, nil, 5]` array from the optionals page.
///
/// Built on first access and never again, no matter how many threads race
/// to read it first. `sample_inits` reports how often the builder ran.
pub static SAMPLE_SEQUENCE: Lazy<Vec<Optional<i64>>> = Lazy::new(|| {
    let runs = SAMPLE_INITS.fetch_add(1, Ordering::SeqCst) + 1;
    debug!("building sample sequence (run {})", runs);
    vec![
        Optional::absent(),
        Optional::present(2),
        Optional::present(3),
        Optional::absent(),
        Optional::present(5),
    ]
});

pub fn sample_inits() -> usize {
    SAMPLE_INITS.load(Ordering::SeqCst)
}
