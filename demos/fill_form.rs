//! Minimal program that prints a form's fields, fills it, and re-reads it.
//!
//! Usage:
//!   cargo run --example fill_form -- template.pdf filled.pdf name=Ada agree=true

use pdfform::{Backend, FieldValue, FormAccessor};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <template.pdf> <output.pdf> [name=value ...]", args[0]);
        process::exit(1);
    }

    let (template, output) = (&args[1], &args[2]);
    let mut accessor = FormAccessor::new();

    // 1. Open the template with the default backend.
    accessor.open(template, Backend::default()).unwrap_or_else(|e| {
        eprintln!("Error opening PDF: {e}");
        process::exit(1);
    });
    if let Some(doc) = accessor.document() {
        println!("✓ Opened {template}: {} page(s)", doc.page_count());
    }

    // 2. Show current values.
    let before = accessor.extract_fields(template).unwrap_or_else(|e| {
        eprintln!("Extraction error: {e}");
        process::exit(1);
    });
    println!("✓ {} field(s)", before.len());
    for (name, value) in &before {
        println!("    {name:<24} {}", value.as_ref().map(ToString::to_string).unwrap_or_default());
    }

    // 3. Fill.
    let values = args[3..].iter().filter_map(|arg| {
        let (name, value) = arg.split_once('=')?;
        let value = match value {
            "true" => FieldValue::Bool(true),
            "false" => FieldValue::Bool(false),
            text => FieldValue::from(text),
        };
        Some((name.to_owned(), value))
    });
    match accessor.fill(template, output, values) {
        Ok(report) => {
            println!("✓ Filled {} field(s) into {output}", report.matched.len());
            for name in report.unmatched {
                println!("  ⚠ no field named '{name}'");
            }
        }
        Err(e) => {
            eprintln!("Fill error: {e}");
            process::exit(1);
        }
    }

    // 4. Checkbox changes live in the appearance state, not the value.
    if let Ok(states) = accessor.appearance_states(output) {
        for (name, state) in states {
            println!("    {name:<24} /AS /{state}");
        }
    }

    if let Err(e) = accessor.close() {
        eprintln!("Close error: {e}");
    }
}
