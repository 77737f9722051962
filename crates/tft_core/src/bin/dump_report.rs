//! Dev tool: decode a stored snapshot blob and print the assembled report.
//!
//! Usage: `dump_report <snapshot-file> [summary|complete]`

use std::env;
use std::fs;

use tft_core::{build_report_json, StaticNameResolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let path = args.next().ok_or("usage: dump_report <snapshot-file> [summary|complete]")?;
    let mode = args.next().unwrap_or_else(|| "summary".to_string());

    let bytes = fs::read(&path)?;
    let request = serde_json::json!({ "matchIdentifier": path, "mode": mode }).to_string();

    // Fallback-only resolver: good enough to eyeball a blob without the
    // dispatch layer's populated tables.
    let resolver = StaticNameResolver::new();

    println!("{}", build_report_json(&bytes, &request, &resolver));
    Ok(())
}
