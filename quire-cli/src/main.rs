//! Quire CLI - Command-line interface for editing book content as markup

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quire_core::{BlockKind, InlineStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a block kind by its kebab-case name
fn parse_kind(s: &str) -> Result<BlockKind, String> {
    BlockKind::from_name(s).ok_or_else(|| {
        let names: Vec<_> = BlockKind::ALL.iter().map(|kind| kind.name()).collect();
        format!("'{}' is not a block kind (expected one of: {})", s, names.join(", "))
    })
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new book file with a starter chapter
    New {
        /// Book title
        #[arg(short, long)]
        title: String,

        /// Author name
        #[arg(short, long)]
        author: Option<String>,

        /// Owner of the book
        #[arg(short, long, default_value = "local")]
        user: String,

        /// Output file path
        #[arg(short, long)]
        output: String,
    },

    /// Display information about a book
    Info {
        /// Book file path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a chapter or document as markup
    Render {
        /// Book or document JSON file
        input: String,

        /// Chapter id or 1-based index (books only)
        #[arg(short, long)]
        chapter: Option<String>,
    },

    /// Parse markup into document JSON
    Parse {
        /// Markup file path, or - for stdin
        input: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace a chapter's content with parsed markup
    Edit {
        /// Book file path
        input: String,

        /// Chapter id or 1-based index
        #[arg(short, long)]
        chapter: String,

        /// Markup file path, or - for stdin
        #[arg(short, long)]
        markup: String,
    },

    /// Toggle an inline style over a character range of a markup file
    Format {
        /// Markup file path, or - for stdin
        input: String,

        /// Style to toggle (bold, italic, underline)
        #[arg(short, long)]
        style: InlineStyle,

        /// Selection start, in characters
        #[arg(long)]
        start: usize,

        /// Selection end, in characters
        #[arg(long)]
        end: usize,

        /// Write the result back to the input file
        #[arg(short, long)]
        in_place: bool,
    },

    /// Change the block kind of the line under a cursor in a markup file
    Block {
        /// Markup file path, or - for stdin
        input: String,

        /// Block kind (paragraph, heading-1, heading-2, heading-3, list-item, list-numbered, quote, divider)
        #[arg(short, long, value_parser = parse_kind)]
        kind: BlockKind,

        /// Cursor position, in characters
        #[arg(long)]
        cursor: usize,

        /// Write the result back to the input file
        #[arg(short, long)]
        in_place: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quire_cli=debug,quire_core=debug"
    } else {
        "quire_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::New {
            title,
            author,
            user,
            output,
        } => commands::new(&title, author.as_deref(), &user, &output),

        Commands::Info { input, json } => commands::info(&input, json),

        Commands::Render { input, chapter } => commands::render(&input, chapter.as_deref()),

        Commands::Parse { input, output } => commands::parse(&input, output.as_deref()),

        Commands::Edit {
            input,
            chapter,
            markup,
        } => commands::edit(&input, &chapter, &markup),

        Commands::Format {
            input,
            style,
            start,
            end,
            in_place,
        } => commands::format(&input, style, start, end, in_place),

        Commands::Block {
            input,
            kind,
            cursor,
            in_place,
        } => commands::block(&input, kind, cursor, in_place),
    }
}
