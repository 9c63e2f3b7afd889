/*!
 * State Reporter
 * Renders engine snapshots for humans and machines
 */

use crate::memory::MemorySnapshot;
use std::fmt::Write;

/// Render a snapshot as a tab-separated text table
pub fn render_table(snapshot: &MemorySnapshot) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "===== Memory State =====");
    let _ = writeln!(out, "Total Size: {} bytes", snapshot.total_size);
    let _ = writeln!(out, "Allocated: {} bytes", snapshot.allocated_size);
    let _ = writeln!(out, "Free: {} bytes", snapshot.free_size);
    let _ = writeln!(out);
    let _ = writeln!(out, "Memory Layout:");
    let _ = writeln!(out, "Address\tSize\tStatus");
    for block in &snapshot.blocks {
        let _ = writeln!(out, "{}\t{}\t{}", block.address, block.size, block.owner);
    }
    let _ = writeln!(out, "=======================");

    out
}

/// Render a snapshot as pretty-printed JSON
pub fn render_json(snapshot: &MemorySnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}
