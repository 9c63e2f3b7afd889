/*!
 * Memory Allocation Simulator - Demo Entry Point
 *
 * Runs the fixed demonstration sequence: allocate three processes, release
 * the middle one, fail a request on fragmented memory, compact, retry.
 */

use log::info;
use memsim::{report, MemoryManager};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("Memory Allocator Demo");
    println!("---------------------");

    let mut manager = MemoryManager::with_capacity(1000)?;
    print!("{}", report::render_table(&manager.snapshot()));

    println!("Step 1: Adding 3 processes");
    let proc1 = manager.allocate(200)?;
    let proc2 = manager.allocate(350)?;
    let proc3 = manager.allocate(100)?;
    info!("Running processes: {}, {}, {}", proc1, proc2, proc3);
    print!("{}", report::render_table(&manager.snapshot()));

    println!("Step 2: Removing middle process (Process {})", proc2);
    manager.release(proc2)?;
    print!("{}", report::render_table(&manager.snapshot()));

    println!("Step 3: Trying to add a process that requires 400 bytes");
    if let Err(err) = manager.allocate(400) {
        println!("Error: {}", err);
    }
    print!("{}", report::render_table(&manager.snapshot()));

    // Compact-then-retry is a caller-level strategy; the engine never
    // compacts on its own
    println!("Step 4: Performing memory compaction");
    manager.compact();
    print!("{}", report::render_table(&manager.snapshot()));

    println!("Step 5: Trying to add the same process after compaction");
    let proc4 = manager.allocate(400)?;
    info!("Process {} fits after compaction", proc4);
    print!("{}", report::render_table(&manager.snapshot()));

    println!("Final state as JSON:");
    println!("{}", report::render_json(&manager.snapshot())?);

    Ok(())
}
