//! The "popular genes" view over the usage counters, and its reset.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::UsageStore;
use crate::usage::UsageCounters;

pub fn run(counters: &UsageCounters, n: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_popular(counters.top_n(n));
    if result.popular.is_empty() {
        result.add_message(CmdMessage::info("No searches yet."));
    }
    Ok(result)
}

/// Clear the in-memory counters and whatever the store persisted.
pub fn reset<S: UsageStore>(counters: &mut UsageCounters, store: &mut S) -> Result<CmdResult> {
    counters.reset();
    store.clear()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Search statistics cleared."));
    Ok(result)
}
