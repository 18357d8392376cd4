//! Dump command - save a storefront page for parser fixtures.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use steamtop_core::AppId;
use steamtop_providers::PageDumper;
use steamtop_providers::storefront::DEFAULT_DUMP_DIR;

use crate::Cli;
use crate::config::Config;

/// Arguments for the dump command.
#[derive(Args)]
pub struct DumpArgs {
    /// App id whose page to save.
    pub app_id: AppId,

    /// Output directory.
    #[arg(long, short, default_value = DEFAULT_DUMP_DIR)]
    pub out: PathBuf,

    /// Storefront language (overrides `fetch.language`).
    #[arg(long)]
    pub lang: Option<String>,
}

/// Runs the dump command.
pub async fn run(args: &DumpArgs, cli: &Cli, config: &Config) -> Result<()> {
    let mut settings = config.fetch_settings();
    if let Some(lang) = &args.lang {
        settings = settings.with_language(lang);
    }

    let path = PageDumper::new(settings)?.save(args.app_id, &args.out).await?;
    if !cli.quiet {
        println!("Saved {}", path.display());
    }
    Ok(())
}
