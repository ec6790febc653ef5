//! Command line entry: flags, template source selection, output.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rand::Rng;

use crate::assets::{cow_file_stem, pick_random, Directory, Embedded, TemplateSource};
use crate::cowsay::DEFAULT_WRAP;
use crate::decoration::decorate;
use crate::render::{Cow, DEFAULT_COW};

#[derive(Parser, Debug)]
#[command(name = "cowsay", version, about = "A talking cow in your terminal")]
pub struct Cli {
    /// Folder where cow files are stored, or a single .cow file
    #[arg(long, env = "COWPATH", value_name = "PATH")]
    pub filepath: Option<PathBuf>,

    /// Name of the cow
    #[arg(long, default_value = DEFAULT_COW)]
    pub cow: String,

    /// Use a random cow
    #[arg(long)]
    pub random: bool,

    /// Rainbow output
    #[arg(long)]
    pub rainbow: bool,

    /// Blob output
    #[arg(long)]
    pub blob: bool,

    /// Wrap text at this column
    #[arg(long, default_value_t = DEFAULT_WRAP as i64, allow_negative_numbers = true)]
    pub wrap: i64,

    /// List all available cows
    #[arg(long)]
    pub list: bool,

    /// What the cow says
    #[arg(trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl Cli {
    fn source(&self) -> Box<dyn TemplateSource> {
        match &self.filepath {
            Some(path) => Box::new(Directory::new(path)),
            None => Box::new(Embedded::new()),
        }
    }

    /// A lone `.cow` file given with the default name speaks as itself.
    fn cow_name(&self) -> &str {
        match self.filepath.as_deref().and_then(cow_file_stem) {
            Some(stem) if self.cow == DEFAULT_COW => stem,
            _ => &self.cow,
        }
    }
}

/// Produces the bytes to print for `cli`.
pub fn execute<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Result<Vec<u8>> {
    let source = cli.source();

    if cli.list {
        let names = source.names()?;
        let mut out = String::new();
        for name in names {
            out.push_str(&name);
            out.push('\n');
        }
        return Ok(out.into_bytes());
    }

    let name = if cli.random {
        pick_random(source.as_ref(), rng)?
    } else {
        cli.cow_name().to_owned()
    };
    debug!("cow {:?}, wrap {}", name, cli.wrap);

    let msg = cli.message.join(" ");
    let out = Cow::new(&name, source.as_ref())
        .with_wrap(cli.wrap)
        .render(&msg)
        .with_context(|| format!("failed to render cow {name:?}"))?;

    Ok(decorate(out, cli.rainbow, cli.blob))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let out = execute(&cli, &mut rand::thread_rng())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&out).context("failed to write output")?;
    stdout.flush()?;
    Ok(())
}
