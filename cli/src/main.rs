//! pdfoutline CLI - heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::render::{self, DisplayRenderer, RenderOptions, BODY_INDENT};
use pdfoutline::{
    extract_outline_with_options, ErrorMode, JsonFormat, Outline, PageSelection, PdfSource,
    RecordKind, SourceOptions,
};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(about = "Extract heading outlines from PDF documents", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Treat pages whose text cannot be extracted as empty (the outline may be partial)
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline as indented text
    Show {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Print headings and subheadings without body lines
        #[arg(long)]
        headings_only: bool,
    },

    /// Export the outline to a styled HTML document
    Html {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to <FILE stem>.html)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Export the outline to JSON
    Json {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Export the outline to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit body lines
        #[arg(long)]
        headings_only: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information and classification statistics
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mode = if cli.lenient {
        ErrorMode::Lenient
    } else {
        ErrorMode::Strict
    };

    let result = match cli.command {
        Some(Commands::Show {
            input,
            pages,
            headings_only,
        }) => cmd_show(&input, pages.as_deref(), mode, headings_only),
        Some(Commands::Html {
            input,
            output,
            title,
            pages,
        }) => cmd_html(&input, output.as_deref(), title, pages.as_deref(), mode),
        Some(Commands::Json {
            input,
            output,
            compact,
            pages,
        }) => cmd_json(&input, output.as_deref(), compact, pages.as_deref(), mode),
        Some(Commands::Markdown {
            input,
            output,
            headings_only,
            pages,
        }) => cmd_markdown(&input, output.as_deref(), headings_only, pages.as_deref(), mode),
        Some(Commands::Info { input }) => cmd_info(&input, mode),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_show(&input, None, mode, false)
            } else {
                println!("{}", "Usage: pdfoutline <FILE>".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        let source_failure = e
            .downcast_ref::<pdfoutline::Error>()
            .is_some_and(|e| e.is_source_unavailable());
        if source_failure {
            eprintln!("{}: could not open document: {}", "Error".red().bold(), e);
        } else {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn source_options(pages: Option<&str>, mode: ErrorMode) -> pdfoutline::Result<SourceOptions> {
    let selection = match pages {
        Some(p) => PageSelection::parse(p)?,
        None => PageSelection::All,
    };
    Ok(SourceOptions::new()
        .with_error_mode(mode)
        .with_pages(selection))
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn extract(input: &Path, options: SourceOptions) -> pdfoutline::Result<Outline> {
    let pb = spinner("Extracting outline...");
    let result = extract_outline_with_options(input, options);
    pb.finish_and_clear();
    result
}

fn cmd_show(
    input: &Path,
    pages: Option<&str>,
    mode: ErrorMode,
    headings_only: bool,
) -> CliResult {
    let outline = extract(input, source_options(pages, mode)?)?;

    if outline.is_empty() {
        println!("{}", "No headings found.".yellow());
        return Ok(());
    }

    let options = RenderOptions::new().with_body(!headings_only);
    for line in DisplayRenderer::new(options).render(&outline) {
        print_display_line(&line);
    }

    Ok(())
}

fn print_display_line(line: &str) {
    if line.starts_with(BODY_INDENT) {
        println!("{}", line);
    } else if line.starts_with(render::HEADING_PREFIX) {
        println!("{}", line.blue().bold());
    } else {
        println!("{}", line.yellow().bold());
    }
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    pages: Option<&str>,
    mode: ErrorMode,
) -> CliResult {
    let outline = extract(input, source_options(pages, mode)?)?;

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}.html", stem))
    });

    let title = html_title(title, &outline);
    let rendered = render::to_display_text(&outline);
    render::save_html_with_title(&rendered, &output, &title)?;

    println!(
        "{} {} ({} headings, {} subheadings)",
        "Saved to".green(),
        output.display(),
        outline.headings().count(),
        outline.subheadings().count()
    );

    Ok(())
}

/// Explicit title, else the document's own non-blank title, else the default.
fn html_title(title: Option<String>, outline: &Outline) -> String {
    title.unwrap_or_else(|| {
        outline
            .metadata
            .as_ref()
            .map_or(render::DEFAULT_TITLE, |m| m.title_or(render::DEFAULT_TITLE))
            .to_string()
    })
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pages: Option<&str>,
    mode: ErrorMode,
) -> CliResult {
    let outline = extract(input, source_options(pages, mode)?)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&outline, format)?;

    write_or_print(output, &json)
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    headings_only: bool,
    pages: Option<&str>,
    mode: ErrorMode,
) -> CliResult {
    let outline = extract(input, source_options(pages, mode)?)?;
    let options = RenderOptions::new().with_body(!headings_only);
    let markdown = render::to_markdown(&outline, &options);

    write_or_print(output, &markdown)
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_info(input: &Path, mode: ErrorMode) -> CliResult {
    let source = PdfSource::open_with_options(input, source_options(None, mode)?)?;
    let metadata = source.read_metadata();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), metadata.pdf_version);
    println!("{}: {}", "Pages".bold(), metadata.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if metadata.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref producer) = metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }

    let pb = spinner("Classifying lines...");
    let outline = pdfoutline::outline_from_source(&source);
    pb.finish_and_clear();
    let stats = outline?.stats;

    println!();
    println!("{}", "Outline Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Lines read".bold(), stats.lines_read);
    println!("{}: {}", "Dropped as noise".bold(), stats.noise_dropped);
    println!("{}: {}", "Before first heading".bold(), stats.orphans_discarded);
    println!("{}: {}", "Headings".bold(), stats.headings);
    println!("{}: {}", "Subheadings".bold(), stats.subheadings);
    println!("{}: {}", "Body lines".bold(), stats.body_lines);

    if let Some(kind) = dominant_kind(stats.headings, stats.subheadings) {
        println!("{}: {}", "Mostly".bold(), kind);
    }

    Ok(())
}

fn dominant_kind(headings: usize, subheadings: usize) -> Option<RecordKind> {
    match headings.cmp(&subheadings) {
        std::cmp::Ordering::Greater => Some(RecordKind::Heading),
        std::cmp::Ordering::Less => Some(RecordKind::Subheading),
        std::cmp::Ordering::Equal => None,
    }
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Heading outline extraction tool");
    println!();
    println!("License: MIT");
}
