//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::OutcomeStats;
use crate::spf::OutcomeKind;

/// Logs the per-outcome counts of a run.
///
/// Kinds with a zero count are omitted.
pub fn print_outcome_statistics(stats: &OutcomeStats) {
    let total = stats.total();
    if total == 0 {
        info!("No rows resolved");
        return;
    }

    info!(
        "Outcome counts ({} rows, {} lookup failures):",
        total,
        stats.total_errors()
    );
    for kind in OutcomeKind::iter() {
        let count = stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.label(), count);
        }
    }
}
