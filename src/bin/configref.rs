//! Regenerates the configuration schema and the configuration reference.
use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use configref::{
    cli::formatting::{format_error, format_path, format_success, format_warning},
    config::{GeneratorSettings, ProjectPaths, UserConfig},
    docs::DocsGenerator,
    tracing_config,
};

#[derive(Parser)]
#[command(name = "configref")]
#[command(about = "Generate the config schema and the config reference docs")]
struct Cli {
    /// Project root; discovered from the current directory when omitted.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Schema file, overriding the settings file.
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// Docs file, overriding the settings file.
    #[arg(long, global = true)]
    docs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the JSON schema with defaults.
    Schema,
    /// Render the schema into the docs file.
    Docs,
    /// Write the schema, then render it into the docs file.
    All,
    /// Exit with an error if the docs file is out of date.
    Check,
}

fn main() {
    if let Err(e) = tracing_config::init() {
        eprintln!("{}", format_error(&format!("Failed to initialize logging: {e}")));
    }

    match run(Cli::parse()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let root = match cli.root {
        Some(root) => root,
        None => ProjectPaths::project_root()?,
    };
    let settings = GeneratorSettings::load(&root)?;

    let mut generator = DocsGenerator::new(&settings, &root);
    if let Some(schema) = cli.schema {
        generator = generator.with_schema_file(schema);
    }
    if let Some(docs) = cli.docs {
        generator = generator.with_docs_file(docs);
    }

    match cli.command {
        Commands::Schema => {
            generator.generate_schema::<UserConfig>()?;
            println!("{} {}", format_success("Generated"), format_path(generator.schema_file()));
        }
        Commands::Docs => {
            generator.generate_docs()?;
            println!("{} {}", format_success("Updated"), format_path(generator.docs_file()));
        }
        Commands::All => {
            generator.generate_all::<UserConfig>()?;
            println!("{} {}", format_success("Generated"), format_path(generator.schema_file()));
            println!("{} {}", format_success("Updated"), format_path(generator.docs_file()));
        }
        Commands::Check => {
            if !generator.check_docs()? {
                println!(
                    "{} {}; run `configref docs`",
                    format_warning("Out of date:"),
                    format_path(generator.docs_file())
                );
                return Ok(false);
            }
            println!("{} {}", format_success("Up to date"), format_path(generator.docs_file()));
        }
    }

    Ok(true)
}
