//! CLI tool for reading and filling PDF form fields.
//!
//! This binary demonstrates the capabilities of the pdfform crate and
//! provides a command-line interface for form extraction and filling.

use pdfform::{Backend, FieldValue, FormAccessor, FormDocument, Result};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pdfform");

    if args.len() < 3 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(program);
        process::exit(if args.len() < 3 { 1 } else { 0 });
    }

    let outcome = match args[1].as_str() {
        "extract" => run_extract(&args[2]),
        "info" => run_info(&args[2], args.get(3).map(String::as_str)),
        "fill" if args.len() >= 4 => run_fill(&args[2], &args[3], &args[4..]),
        _ => {
            print_usage(program);
            process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn print_usage(program_name: &str) {
    println!("📄 pdfform - PDF form field extraction & filling");
    println!();
    println!("USAGE:");
    println!("    {program_name} extract <pdf_file>");
    println!("    {program_name} fill <template> <output> [name=value ...]");
    println!("    {program_name} info <pdf_file> [plumber|raw]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help     Show this help message");
    println!();
    println!("In `fill`, the values `true` and `false` check or skip a checkbox;");
    println!("anything else is written as text.");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

fn run_extract(pdf_path: &str) -> Result<()> {
    let fields = FormAccessor::new().extract_fields(pdf_path)?;

    if fields.is_empty() {
        println!("ℹ️  No form fields found");
        return Ok(());
    }

    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();
    for name in names {
        match &fields[name] {
            Some(value) => println!("{name} = {value}"),
            None => println!("{name} = <unset>"),
        }
    }
    Ok(())
}

fn run_fill(template: &str, output: &str, assignments: &[String]) -> Result<()> {
    let values = assignments.iter().filter_map(|arg| match parse_assignment(arg) {
        Some(pair) => Some(pair),
        None => {
            eprintln!("⚠️  ignoring '{arg}': expected name=value");
            None
        }
    });

    let report = FormAccessor::new().fill(template, output, values)?;

    println!("✅ Filled {} field(s) into {output}", report.matched.len());
    for name in &report.unmatched {
        println!("   ⚠️  no field named '{name}'");
    }
    Ok(())
}

fn run_info(pdf_path: &str, backend: Option<&str>) -> Result<()> {
    let backend: Backend = backend.map(str::parse::<Backend>).transpose()?.unwrap_or_default();

    let mut accessor = FormAccessor::new();
    accessor.open(pdf_path, backend)?;

    if let Some(document) = accessor.document() {
        println!("🔍 {pdf_path} ({backend} backend)");
        println!("   📏 Pages: {}", document.page_count());

        match document {
            FormDocument::Plumber(doc) => {
                for (i, text) in doc.page_texts()?.iter().enumerate() {
                    println!("\n── Page {} {}", i + 1, "─".repeat(40));
                    println!("{}", text.trim_end());
                }
            }
            FormDocument::Raw(doc) => {
                println!("   📝 Form fields: {}", doc.fields().len());
            }
        }
    }

    accessor.close()
}

/// Parse `name=value`; `true`/`false` become booleans.
fn parse_assignment(arg: &str) -> Option<(String, FieldValue)> {
    let (name, value) = arg.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    let value = match value {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        text => FieldValue::from(text),
    };
    Some((name.to_owned(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_parse_booleans_and_text() {
        assert_eq!(
            parse_assignment("agree=true"),
            Some(("agree".into(), FieldValue::Bool(true)))
        );
        assert_eq!(
            parse_assignment("note=a=b"),
            Some(("note".into(), FieldValue::Text("a=b".into())))
        );
        assert_eq!(parse_assignment("=x"), None);
        assert_eq!(parse_assignment("novalue"), None);
    }
}
