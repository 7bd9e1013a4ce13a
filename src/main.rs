//! Binary entry point: definition checking and value rendering

use clap::Parser;
use optmeta::cli::{Cli, Command, OutputFormat};
use optmeta::config::{ConfigError, RegistryConfig};
use optmeta::model::{Cardinality, OptionDescriptor, ResolvedOptions};
use optmeta::report::{JsonFormatter, ReportFormatter};
use std::path::Path;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    let cli = Cli::parse();
    let color = cli.color.for_stdout();

    let code = match cli.command {
        Command::Check { definition } => run_check(&definition),
        Command::Show {
            values,
            no_headers,
            format,
        } => run_show(&values, !no_headers, format, color),
    };

    std::process::exit(code);
}

fn run_check(definition: &Path) -> i32 {
    match check_definition(definition) {
        Ok(summary) => {
            print!("{}", summary);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Definition error: {}", e);
            EXIT_ERROR
        }
    }
}

fn check_definition(definition: &Path) -> Result<String, ConfigError> {
    let registry = RegistryConfig::load(definition)?.into_registry()?;

    let mut output = String::new();
    output.push_str(&format!(
        "registry '{}' [{}]\n",
        registry.name(),
        if registry.len() == 1 {
            "1 option".to_string()
        } else {
            format!("{} options", registry.len())
        }
    ));

    for descriptor in registry.iter() {
        output.push_str(&describe(descriptor));
        output.push('\n');
    }

    Ok(output)
}

fn describe(descriptor: &OptionDescriptor) -> String {
    let mut line = format!("  {} ({})", descriptor.name(), descriptor.kind());

    match descriptor {
        OptionDescriptor::Choice(choice) => {
            let choices: Vec<String> = choice.choices().iter().map(ToString::to_string).collect();
            line.push_str(&format!(" [{}]", choices.join(", ")));
            if let Some(default) = choice.default() {
                line.push_str(&format!(" default {}", default));
            }
        }
        OptionDescriptor::List(list) => match list.cardinality() {
            Some(Cardinality::Any) => line.push_str(" [any number]"),
            Some(Cardinality::AtMost(n)) => line.push_str(&format!(" [at most {}]", n)),
            Some(Cardinality::Exactly(n)) => line.push_str(&format!(" [exactly {}]", n)),
            None => {}
        },
        _ => {
            if let Some(default) = descriptor.default() {
                line.push_str(&format!(" default {}", default));
            }
        }
    }

    if let Some(description) = descriptor.description() {
        line.push_str(&format!(" \"{}\"", description));
    }

    line
}

fn run_show(
    values: &Path,
    with_headers: bool,
    format: OutputFormat,
    color: termcolor::ColorChoice,
) -> i32 {
    let values = match load_values(values) {
        Ok(values) => values,
        Err(message) => {
            eprintln!("{}", message);
            return EXIT_ERROR;
        }
    };

    match format {
        OutputFormat::Json => {
            print!("{}", JsonFormatter::new().format(&values));
            EXIT_SUCCESS
        }
        OutputFormat::Text => {
            let formatter = ReportFormatter::new(color).with_headers(with_headers);
            match formatter.write_to_stdout(&values) {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Failed to write report: {}", e);
                    EXIT_ERROR
                }
            }
        }
    }
}

fn load_values(path: &Path) -> Result<ResolvedOptions, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}
