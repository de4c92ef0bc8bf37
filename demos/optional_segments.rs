//! Expanding optional segments into every layout they denote.
//!
//! Run with: cargo run --example optional_segments

use flexlayout::{compile_all, expand, render};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let template = r"YYYY-MM-DD[\THH:mm[:ss[.SSS]]][Z]";

    println!("Variants of {template:?}:");
    for variant in expand(template)? {
        println!("  {}", render(&variant));
    }

    println!("\nLayouts:");
    for layout in &compile_all(template)? {
        println!("  {layout}");
    }

    // A nested group is only present with its parent
    let layouts = compile_all("YYYY[-MM[-DD]]")?;
    assert!(!layouts.contains("2006-02"));
    println!("\n{:?}", Vec::from(layouts));

    Ok(())
}
