use crate::cli::{Conversion, Outcome};
use crate::engine::render::render;
use crate::engine::CaseEngine;
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STYLE_SAMPLE: &str = "my_Variable  Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    total: usize,
    failed: usize,
    results: Vec<JsonConversion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonStyle {
    name: String,
    joiner: String,
    case: String,
    sample: String,
}

pub fn print_results(results: &[Conversion], colored_output: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(results, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_results(results),
    }
}

fn print_text_results(results: &[Conversion], colored_output: bool) {
    for result in results {
        match &result.outcome {
            Outcome::Converted(output) => println!("{}", output),
            Outcome::Tokens(tokens) => println!("{}", tokens.join(" ")),
            Outcome::Failed(message) => {
                if colored_output {
                    eprintln!(
                        "{} {} {}",
                        "error:".red().bold(),
                        result.input.yellow(),
                        message.dimmed()
                    );
                } else {
                    eprintln!("error: {} {}", result.input, message);
                }
            }
        }
    }
}

fn print_json_results(results: &[Conversion]) -> Result<()> {
    let json_results: Vec<JsonConversion> = results
        .iter()
        .map(|r| {
            let mut entry = JsonConversion {
                input: r.input.clone(),
                output: None,
                tokens: None,
                error: None,
            };
            match &r.outcome {
                Outcome::Converted(output) => entry.output = Some(output.clone()),
                Outcome::Tokens(tokens) => entry.tokens = Some(tokens.clone()),
                Outcome::Failed(message) => entry.error = Some(message.clone()),
            }
            entry
        })
        .collect();

    let output = JsonOutput {
        total: results.len(),
        failed: results.iter().filter(|r| r.is_failure()).count(),
        results: json_results,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_styles(engine: &CaseEngine, colored_output: bool, format: OutputFormat) -> Result<()> {
    let sample_tokens = engine.tokenize(STYLE_SAMPLE);
    let mut styles = Vec::new();

    for name in engine.style_names() {
        let style = engine.styles().get(name)?;
        styles.push(JsonStyle {
            name: name.to_string(),
            joiner: style.joiner().to_string(),
            case: style
                .word_case()
                .map(|case| case.to_string())
                .unwrap_or_else(|| "custom".to_string()),
            sample: render(&sample_tokens, style),
        });
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&styles)?);
        return Ok(());
    }

    if colored_output {
        println!("{}", "Registered styles:".bold());
    } else {
        println!("Registered styles:");
    }
    println!();

    for style in &styles {
        if colored_output {
            println!(
                "  {:<16} {} {}",
                style.name.cyan().bold(),
                format!("{:?} {}", style.joiner, style.case).dimmed(),
                style.sample.green()
            );
        } else {
            println!("  {:<16} {:?} {} {}", style.name, style.joiner, style.case, style.sample);
        }
    }

    println!();
    if colored_output {
        println!("Sample input: {}", STYLE_SAMPLE.dimmed());
    } else {
        println!("Sample input: {}", STYLE_SAMPLE);
    }
    println!(
        "Input policy: {}, noise handling: {}",
        engine.policy(),
        engine.noise_handling()
    );

    Ok(())
}

pub fn print_summary(results: &[Conversion], colored: bool) {
    let failed = results.iter().filter(|r| r.is_failure()).count();
    if failed == 0 {
        return;
    }

    let input_word = if results.len() == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} failed",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            results.len(),
            input_word
        );
    } else {
        eprintln!("✗ {} of {} {} failed", failed, results.len(), input_word);
    }
}
