#![allow(clippy::print_stderr)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use jsym::TypeDescriptor;

/// Inspect nominal type descriptors.
#[derive(Parser)]
#[command(name = "jsym", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse descriptors and print depth, binary name, and display name.
    Parse {
        /// Field descriptors, e.g. "Ljava/lang/String;" or "[[I".
        descriptors: Vec<String>,
    },
    /// Print a descriptor's constant recipe as JSON and verify the
    /// reconstruction round-trip.
    Recipe { descriptor: String },
    /// Walk a descriptor's component types down to the element.
    Component { descriptor: String },
}

fn main() -> Result<()> {
    // Initialise tracing if JSYM_LOG or RUST_LOG is set (zero cost otherwise).
    jsym::tracing_config::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Parse { descriptors } => {
            if descriptors.is_empty() {
                bail!("no descriptors given");
            }
            for text in &descriptors {
                let desc = TypeDescriptor::of_descriptor(text)
                    .with_context(|| format!("cannot parse {text:?}"))?;
                println!(
                    "{}  depth={}  binary-name={}  display={}",
                    desc.descriptor_string(),
                    desc.array_depth(),
                    desc.binary_name().as_deref().unwrap_or("-"),
                    desc.display_name(),
                );
            }
        }
        Command::Recipe { descriptor } => {
            let desc = TypeDescriptor::of_descriptor(&descriptor)
                .with_context(|| format!("cannot parse {descriptor:?}"))?;
            let recipe = desc.to_recipe();
            println!("{}", serde_json::to_string_pretty(&recipe)?);
            let rebuilt = recipe.reconstruct().context("recipe did not round-trip")?;
            if rebuilt != desc {
                bail!("reconstructed descriptor differs from the original");
            }
        }
        Command::Component { descriptor } => {
            let mut desc = TypeDescriptor::of_descriptor(&descriptor)
                .with_context(|| format!("cannot parse {descriptor:?}"))?;
            println!("{}", desc.descriptor_string());
            while desc.is_array() {
                desc = desc.component_type()?;
                println!("{}", desc.descriptor_string());
            }
        }
    }
    Ok(())
}
