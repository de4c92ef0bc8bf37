//! Customizing compilation with CompileOptions.
//!
//! Run with: cargo run --example custom_options

use flexlayout::{compile_all_with_options, CompileOptions, Dialect, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let template = "D MMM YYYY[ h:mm a]";

    // Default options (reference dialect)
    let defaults = CompileOptions::new();
    println!("Reference:");
    for layout in &compile_all_with_options(template, &defaults)? {
        println!("  {layout}");
    }

    // strftime dialect
    let strftime = CompileOptions::new().with_dialect(Dialect::Strftime);
    println!("\nStrftime:");
    for layout in &compile_all_with_options(template, &strftime)? {
        println!("  {layout}");
    }

    // Options deserialize from configuration
    let configured: CompileOptions =
        serde_json::from_str(r#"{"dialect":"strftime","max_variants":4}"#)?;
    println!("\nConfigured: {configured:?}");

    // Limits are enforced
    match compile_all_with_options("[a][b][c]", &configured) {
        Err(Error::TooManyVariants { limit }) => println!("limit of {limit} variants reached"),
        other => println!("unexpected: {other:?}"),
    }

    let shallow = CompileOptions::new().with_max_depth(2);
    if let Err(e) = compile_all_with_options("YYYY[-MM[-DD[ HH]]]", &shallow) {
        println!("{e}");
    }

    Ok(())
}
