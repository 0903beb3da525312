//! Folio CLI
//!
//! Shows what the style pipeline makes of a piece of CSS: the resolved style
//! of an element, the collapsed borders of a table, or whether a single
//! declaration is valid.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use folio_css::{
    DeclarationBlock, ResolvedStyle, ResolverConfig, StyleResolver, StyleValue, StyledNode,
    TableGrid, TableOptions, Validity, is_valid_key, parse_inline_style, parse_stylesheet,
};
use folio_css::validate::classify_named;

/// Folio: CSS resolution for the PDF layout engine
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Resolve a paragraph against a stylesheet
    folio resolve --css site.css --tag p --class note

    # Inline style and overrides, with a parent box for % units
    folio resolve --tag div --style 'width: 50%; padding: 1em' --parent-width 500

    # Border deltas for a 3x2 table
    folio table --rows 3 --cols 2 --default-style

    # Is this a valid value?
    folio check fontWeight 450
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the style of one element and print it as JSON
    Resolve {
        /// Stylesheets, applied in order
        #[arg(long, value_name = "FILE")]
        css: Vec<PathBuf>,

        /// Tag name of the element
        #[arg(long, default_value = "div")]
        tag: String,

        /// The element's id attribute
        #[arg(long)]
        id: Option<String>,

        /// A class of the element (repeatable)
        #[arg(long = "class", value_name = "CLASS")]
        classes: Vec<String>,

        /// The element's style attribute
        #[arg(long, value_name = "CSS")]
        style: Option<String>,

        /// Declarations applied over everything else
        #[arg(long = "override", value_name = "CSS")]
        overrides: Option<String>,

        /// Width of the parent box in points
        #[arg(long)]
        parent_width: Option<f64>,

        /// Height of the parent box in points
        #[arg(long)]
        parent_height: Option<f64>,

        /// Resolver configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the border delta of every cell of a table
    Table {
        /// Number of rows
        #[arg(long, default_value = "2")]
        rows: usize,

        /// Number of cells per row
        #[arg(long, default_value = "2")]
        cols: usize,

        /// Style attribute given to every cell
        #[arg(long, value_name = "CSS", default_value = "border-width: 1px")]
        cell_style: String,

        /// Start from the default table style
        #[arg(long)]
        default_style: bool,
    },

    /// Validate a single declaration
    Check {
        /// Style key, camelCase or kebab-case
        key: String,

        /// Raw value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            css,
            tag,
            id,
            classes,
            style,
            overrides,
            parent_width,
            parent_height,
            config,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => ResolverConfig::default(),
            };
            let sheets = css
                .iter()
                .map(|path| {
                    fs::read_to_string(path)
                        .with_context(|| format!("reading stylesheet {}", path.display()))
                        .map(|text| parse_stylesheet(&text))
                })
                .collect::<Result<Vec<_>>>()?;

            let mut node = StyledNode::new(&tag);
            node.id = id;
            node.classes = classes;
            node.inline_style = style;
            let overrides = overrides.as_deref().map(parse_inline_style);
            let ctx = config.root_context().with_parent_size(parent_width, parent_height);

            let resolver = StyleResolver::new(config);
            let resolved = resolver
                .resolve(&node, None, &sheets, overrides.as_ref(), &ctx)
                .with_context(|| format!("resolving <{tag}>"))?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::Table {
            rows,
            cols,
            cell_style,
            default_style,
        } => print_table(rows, cols, &parse_inline_style(&cell_style), default_style)?,
        Command::Check { key, value } => {
            let raw = StyleValue::from(value.as_str());
            match classify_named(&key, &raw) {
                Validity::Accepted => println!("{} {key}: {value}", "valid".green()),
                Validity::Coercible(coerced) => {
                    println!("{} {key}: {value} → {coerced}", "valid".green());
                }
                Validity::Rejected if !is_valid_key(&key) => {
                    println!("{} '{key}' is not a style key", "invalid".red());
                }
                Validity::Rejected => println!("{} {key}: {value}", "invalid".red()),
            }
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<ResolverConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn print_table(rows: usize, cols: usize, cell_style: &DeclarationBlock, default_style: bool) -> Result<()> {
    let config = ResolverConfig::default();
    let ctx = config.root_context();
    let cell = StyleResolver::new(config).resolve_block(cell_style, &ctx)?;

    let mut grid = TableGrid::new(TableOptions {
        use_default_style: default_style,
        table_style: None,
    });
    for row in 0..rows {
        let _ = grid.begin_row(&ResolvedStyle::new());
        for col in 0..cols {
            let delta = grid.begin_cell(&cell);
            println!("{}", format!("cell ({row}, {col})").bold());
            println!("{}", serde_json::to_string_pretty(&delta)?);
        }
    }
    let summary = grid.end_table();
    println!(
        "{} {} rows, {} cols, {} edges drawn, {} collapsed",
        "table".bold(),
        summary.rows,
        summary.cols,
        summary.drawn_edges,
        summary.collapsed_edges
    );
    Ok(())
}
