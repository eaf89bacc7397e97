//! Koan CLI
//!
//! Runs the rectangle, JSON, and selector exercises from the terminal.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use koan_css::{PartKind, SelectorBuilder};
use koan_shapes::Rectangle;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Koan — rectangle, JSON, and CSS selector exercises
#[derive(Parser, Debug)]
#[command(name = "koan")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Area of a 10x20 rectangle
    koan area --width 10 --height 20

    # Rebuild a rectangle from JSON
    koan rect '{"width":10,"height":20}'

    # Normalize JSON
    koan json --pretty '{"a": [1, 2]}'

    # Build a selector part by part
    koan selector -p element=a -p 'attr=href$=".png"' -p pseudo-class=focus
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the area of a rectangle
    Area {
        /// Rectangle width
        #[arg(long, allow_negative_numbers = true)]
        width: f64,
        /// Rectangle height
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },
    /// Rebuild a rectangle from JSON and print it with its area
    Rect {
        /// JSON object with `width` and `height` fields
        #[arg(value_name = "JSON")]
        json: String,
    },
    /// Validate JSON and print its canonical form
    Json {
        /// Any JSON value
        #[arg(value_name = "JSON")]
        json: String,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Build a CSS selector from parts, in the order given
    Selector {
        /// A part as KIND=VALUE; KIND is element, id, class, attr,
        /// pseudo-class, or pseudo-element
        #[arg(short = 'p', long = "part", value_name = "KIND=VALUE", value_parser = parse_part, required = true)]
        parts: Vec<(PartKind, String)>,
    },
}

/// Parse a `KIND=VALUE` selector part argument.
fn parse_part(raw: &str) -> Result<(PartKind, String)> {
    let Some((kind, value)) = raw.split_once('=') else {
        bail!("expected KIND=VALUE, got {raw:?}");
    };
    let kind = match kind {
        "element" => PartKind::Element,
        "id" => PartKind::Id,
        "class" => PartKind::Class,
        "attr" => PartKind::Attribute,
        "pseudo-class" => PartKind::PseudoClass,
        "pseudo-element" => PartKind::PseudoElement,
        other => bail!("unknown selector part kind {other:?}"),
    };
    Ok((kind, value.to_string()))
}

fn build_selector(parts: &[(PartKind, String)]) -> Result<SelectorBuilder> {
    let mut builder = SelectorBuilder::new();
    for (kind, value) in parts {
        builder = match kind {
            PartKind::Element => builder.element(value),
            PartKind::Id => builder.id(value),
            PartKind::Class => builder.class(value),
            PartKind::Attribute => builder.attr(value),
            PartKind::PseudoClass => builder.pseudo_class(value),
            PartKind::PseudoElement => builder.pseudo_element(value),
        }
        .with_context(|| format!("cannot add {kind} part {value:?}"))?;
    }
    Ok(builder)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Area { width, height } => {
            println!("{}", Rectangle::new(width, height).area());
        }
        Command::Rect { json } => {
            let rect: Rectangle =
                koan_json::from_text(&json).context("cannot rebuild rectangle")?;
            println!("{}", koan_json::to_text(&rect)?);
            println!("area: {}", rect.area());
        }
        Command::Json { json, pretty } => {
            let value: Value = koan_json::from_text(&json).context("invalid JSON input")?;
            let text = if pretty {
                koan_json::to_text_pretty(&value)?
            } else {
                koan_json::to_text(&value)?
            };
            println!("{text}");
        }
        Command::Selector { parts } => {
            println!("{}", build_selector(&parts)?);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
