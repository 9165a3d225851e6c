/*!
 * Compactor
 * Slides every segment toward address 0
 */

use super::process_table::ProcessTable;
use crate::core::types::Address;

/// Outcome of a compaction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompactionReport {
    /// Segments whose position changed
    pub relocated: usize,
    /// First free address after compaction
    pub free_from: Address,
}

/// Pack segments back to back from address 0, keeping their order and sizes
pub(super) fn compact(table: &mut ProcessTable) -> CompactionReport {
    let mut report = CompactionReport::default();

    for segment in table.segments_mut() {
        let size = segment.size();
        if segment.begin != report.free_from {
            segment.begin = report.free_from;
            segment.end = report.free_from + size - 1;
            report.relocated += 1;
        }
        report.free_from = segment.next_address();
    }

    report
}
