//! Compiling a template into a single layout.
//!
//! Run with: cargo run --example simple

use chrono::NaiveDate;
use flexlayout::{compile, compile_with_options, CompileOptions, Dialect};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let template = "YYYY-MM-DD hh:mm:ss A";

    // Reference-date layout
    let layout = compile(template)?;
    println!("{template:?} -> {layout:?}");
    assert_eq!(layout, "2006-01-02 03:04:05 PM");

    // strftime layout, usable with chrono directly
    let options = CompileOptions::new().with_dialect(Dialect::Strftime);
    let layout = compile_with_options(template, &options)?;
    println!("{template:?} -> {layout:?}");

    let moment = NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|d| d.and_hms_opt(17, 8, 9))
        .ok_or("invalid date")?;
    println!("formatted: {}", moment.format(&layout));

    // Token letters meant literally must be escaped
    println!("unescaped: {:?}", compile("YYYY-MM-DD at hh")?);
    println!("escaped: {:?}", compile(r"YYYY-MM-DD \at hh")?);
    if let Err(e) = compile("DDD 'of' YYYY, Day") {
        println!("error: {e}");
    }

    Ok(())
}
