pub use eyre::Result;

mod counter;
mod report;

pub use counter::{count_words, fold, is_separator, WordCount};
pub use report::{print_top_k, top_k, RankedEntry};

/// Number of entries reported when no `-k` is given.
pub const TOPK: usize = 10;

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init()
}
