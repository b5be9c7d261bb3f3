//! chronosql command-line interface

use chronosql::cli::{fields, output, render, validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chronosql command-line tool
#[derive(Parser)]
#[command(name = "chronosql")]
#[command(author, version, about = "Temporal SQL predicate tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, pretty)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the temporal predicate of a query file
    Render {
        /// Query file (JSON), or `-` for stdin
        file: PathBuf,

        /// Query family (event, enrollment)
        #[arg(short = 'F', long, default_value = "event")]
        family: String,

        /// Echo the parsed query to stderr before rendering
        #[arg(long)]
        show_query: bool,
    },

    /// Validate query files
    Validate {
        /// Query files to validate
        files: Vec<PathBuf>,

        /// Query family (event, enrollment)
        #[arg(short = 'F', long, default_value = "event")]
        family: String,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },

    /// List time fields and the columns they select
    Fields {
        /// Restrict the listing to one query family (event, enrollment)
        #[arg(short = 'F', long)]
        family: Option<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Set up color output
    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Render {
            file,
            family,
            show_query,
        } => {
            let config = render::RenderConfig {
                file,
                family,
                show_query,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            render::render(config)
        }

        Commands::Validate {
            files,
            family,
            strict,
        } => {
            let config = validate::ValidateConfig {
                files,
                family,
                strict,
                verbose: cli.verbose,
            };
            validate::validate(config)
        }

        Commands::Fields { family } => {
            let config = fields::FieldsConfig {
                family,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            fields::fields(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
