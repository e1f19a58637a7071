use std::fs;
use std::io::Read;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;

use codefmt_lib::config::{CONFIG_FILE, Config};
use codefmt_lib::exit_codes;
use codefmt_lib::options::FormatOptions;
use codefmt_lib::printer::CommandPrinter;
use codefmt_lib::registry::LanguageRegistry;
use codefmt_lib::service::{FormatError, FormatterService};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Show detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported languages in registration order
    Languages,

    /// Detect the language of a file or of stdin
    Detect {
        /// File to read; stdin when omitted
        path: Option<String>,
    },

    /// Format a file or stdin, auto-detecting the language unless one is given
    Format(FormatArgs),

    /// Initialize a new configuration file
    Init,
}

#[derive(Args)]
struct FormatArgs {
    /// File to read; stdin when omitted
    path: Option<String>,

    /// Language id; auto-detected when omitted
    #[arg(short, long)]
    language: Option<String>,

    /// External printer command (overrides the config file)
    #[arg(long)]
    printer_cmd: Option<String>,

    /// Write the result back to the file instead of stdout
    #[arg(short, long)]
    write: bool,

    /// Indentation: tab, 2space or 4space
    #[arg(long)]
    indent: Option<String>,

    /// Maximum line width: no, 80, 120 or 160
    #[arg(long)]
    max_line_length: Option<String>,

    /// Brace placement: collapse, expand or end-expand
    #[arg(long)]
    brace_style: Option<String>,

    /// Terminate statements with semicolons
    #[arg(long)]
    semi: Option<bool>,

    /// Prefer single quotes
    #[arg(long)]
    single_quote: Option<bool>,

    /// Trailing commas: none, es5 or all
    #[arg(long)]
    trailing_comma: Option<String>,

    /// Arrow function parentheses: avoid or always
    #[arg(long)]
    arrow_parens: Option<String>,

    /// Prefer single quotes in JSX
    #[arg(long)]
    jsx_single_quote: Option<bool>,

    /// Object property quoting: as-needed, consistent or preserve
    #[arg(long)]
    quote_props: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            exit_codes::exit::tool_error();
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let registry = LanguageRegistry::with_builtin_languages();

    match &cli.command {
        Commands::Languages => {
            for entry in registry.languages() {
                println!("{:<12} {}", entry.id, entry.title);
            }
            Ok(exit_codes::SUCCESS)
        }
        Commands::Detect { path } => {
            let text = read_input(path.as_deref())?;
            println!("{}", registry.detect_language(&text));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Format(args) => run_format(cli, &registry, args),
        Commands::Init => {
            if codefmt_lib::init::create_default_config(CONFIG_FILE)? {
                if !cli.quiet {
                    println!("{} Created {CONFIG_FILE}", "Success:".green().bold());
                }
            } else if !cli.quiet {
                println!("{CONFIG_FILE} already exists");
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_format(cli: &Cli, registry: &LanguageRegistry, args: &FormatArgs) -> anyhow::Result<i32> {
    let config = Config::load(cli.config.as_deref())?;
    let text = read_input(args.path.as_deref())?;

    let mut options = config.format.clone();
    apply_style_overrides(&mut options, args)?;
    options.language = match &args.language {
        Some(id) => id.clone(),
        None => registry.detect_language(&text).to_string(),
    };
    log::debug!("formatting as {}", options.language);

    let command = args.printer_cmd.as_deref().unwrap_or(&config.printer.command);
    let service = FormatterService::new(registry, CommandPrinter::new(command));

    match service.format(&text, &options) {
        Ok(formatted) => {
            match (&args.path, args.write) {
                (Some(path), true) => fs::write(path, &formatted)
                    .with_context(|| format!("failed to write {path}"))?,
                _ => print!("{formatted}"),
            }
            if !cli.quiet && args.write {
                println!("{} Formatted as {}", "Success:".green().bold(), options.language);
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(FormatError::Printer(err)) => {
            // The input is left untouched; surface the printer's diagnostic
            eprintln!("{} {err}", "Format error:".red().bold());
            Ok(exit_codes::FORMAT_FAILED)
        }
        Err(err) => Err(err.into()),
    }
}

fn apply_style_overrides(options: &mut FormatOptions, args: &FormatArgs) -> anyhow::Result<()> {
    if let Some(value) = &args.indent {
        options.indent = value.parse()?;
    }
    if let Some(value) = &args.max_line_length {
        options.max_line_length = value.parse()?;
    }
    if let Some(value) = &args.brace_style {
        options.brace_style = value.parse()?;
    }
    if let Some(value) = args.semi {
        options.semi = value;
    }
    if let Some(value) = args.single_quote {
        options.single_quote = value;
    }
    if let Some(value) = &args.trailing_comma {
        options.trailing_comma = value.parse()?;
    }
    if let Some(value) = &args.arrow_parens {
        options.arrow_parens = value.parse()?;
    }
    if let Some(value) = args.jsx_single_quote {
        options.jsx_single_quote = value;
    }
    if let Some(value) = &args.quote_props {
        options.quote_props = value.parse()?;
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
