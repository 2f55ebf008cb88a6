//! CLI example that walks a directory and prints every entry
//!
//! Usage:
//!   cargo run --example list_directory [path] [order]
//!
//! `order` is `depth-first` (default) or `breadth-first`. Hidden entries and
//! `target` directories are skipped along with everything below them.
//! Set `RUST_LOG=trace` to see pruned subtrees.

use std::env;

use anyhow::{Context, Result};
use tree_walk::fs::FsNode;
use tree_walk::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| ".".to_string());
    let order: TraversalOrder = match args.next() {
        Some(order) => order.parse()?,
        None => TraversalOrder::default(),
    };

    let root = FsNode::new(&path).with_context(|| format!("Failed to open {}", path))?;
    let base_depth = root.path().components().count();

    println!("Walking {} ({})", path, order);
    println!("═══════════════════════════════");

    let mut skipped = 0;
    let mut files = 0;
    let mut dirs = 0;
    let mut total_size = 0;

    let hidden = filter_fn(|n: &FsNode| {
        let name = n.name();
        let ignored = n.path().components().count() > base_depth
            && (name.starts_with('.') || (n.is_dir() && name == "target"));
        if ignored {
            skipped += 1;
        }
        ignored
    });

    for node in walk_with(root, order, hidden) {
        let depth = node.path().components().count() - base_depth;
        let indent = "  ".repeat(depth);

        if node.is_dir() {
            dirs += 1;
            println!("{}📁 {}", indent, node.name());
        } else {
            files += 1;
            let size = std::fs::symlink_metadata(node.path())
                .map(|m| m.len())
                .unwrap_or(0);
            total_size += size;
            println!("{}📄 {} ({})", indent, node.name(), format_size(size));
        }
    }

    println!("═══════════════════════════════");
    println!("Summary:");
    println!("  Directories: {}", dirs);
    println!("  Files: {}", files);
    println!("  Skipped: {}", skipped);
    println!("  Total size: {}", format_size(total_size));

    Ok(())
}

/// Format file size in human-readable format
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
