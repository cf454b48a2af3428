mod codepoint;
mod diagnostics;
mod group;
mod render;
mod table;
mod view;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "glyph-catalogue")]
#[command(about = "Glyph catalogue viewer generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Debug, Clone, Args)]
struct PageArgs {
    /// Catalogue table (.csv, or .json for a JSON array of rows).
    #[arg(long, default_value = "dwpi_dict.csv")]
    table: PathBuf,

    /// Font URL referenced from @font-face; the file itself is not read.
    #[arg(long, default_value = "DWPIMincho.woff2")]
    font: String,

    #[arg(long, default_value = "DWPIMincho")]
    font_family: String,

    #[arg(long, default_value = "行政事務標準当用明朝フォントビューア")]
    title: String,

    #[arg(short = 'o', long, default_value = "output.html")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = render::Format::Html)]
    format: render::Format,

    /// Only print warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort by stroke count, group, and render plain cells.
    Grouped {
        #[command(flatten)]
        args: PageArgs,

        /// Keep file order instead of sorting by stroke count.
        #[arg(long)]
        file_order: bool,
    },
    /// Keep file order and annotate keys and cells with their codes.
    Annotated {
        #[command(flatten)]
        args: PageArgs,

        #[arg(long)]
        sort_by_strokes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Grouped { args, file_order } => {
            let ordering = if file_order {
                group::Ordering::FileOrder
            } else {
                group::Ordering::ByStrokes
            };
            generate(&args, ordering, false)
        }
        Commands::Annotated {
            args,
            sort_by_strokes,
        } => {
            let ordering = if sort_by_strokes {
                group::Ordering::ByStrokes
            } else {
                group::Ordering::FileOrder
            };
            generate(&args, ordering, true)
        }
    }
}

fn generate(args: &PageArgs, ordering: group::Ordering, annotate: bool) -> Result<()> {
    diagnostics::set_quiet(args.quiet);

    // 1) Load rows.
    let rows = table::open(&args.table).load()?;
    diagnostics::info(format!(
        "Loaded {} rows from {}",
        rows.len(),
        args.table.display()
    ));
    if rows.is_empty() {
        diagnostics::warn(format!("{} contains no rows", args.table.display()));
    }

    // 2) Group.
    let groups = group::arrange(rows, ordering);
    if annotate {
        for g in &groups {
            if codepoint::codepoints(&g.key).is_empty() {
                diagnostics::warn(format!(
                    "related character {:?} is not one character or an IVS; no codepoint shown",
                    g.key
                ));
            }
        }
    }

    // 3) Build view + render.
    let page = view::build_page(
        &groups,
        &view::PageOptions {
            title: args.title.clone(),
            font_url: args.font.clone(),
            font_family: args.font_family.clone(),
            annotate,
        },
    );
    let text = args.format.renderer().render(&page)?;

    std::fs::write(&args.out, text).with_context(|| {
        diagnostics::error_message(format!("write output {}", args.out.display()))
    })?;
    diagnostics::info(format!(
        "Wrote {} ({} groups, {} glyphs)",
        args.out.display(),
        page.totals.groups,
        page.totals.glyphs
    ));

    Ok(())
}
