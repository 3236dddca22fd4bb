mod app;
mod config;
mod effects;
mod history;
mod input;
mod logging;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use portfolio_core::Catalog;
use portfolio_logging::portfolio_info;
use portfolio_site::{export_site, ExportOptions};

use config::AppConfig;
use logging::LogDestination;

const USAGE: &str = "usage: portfolio_app [--at <query>] | export <dir>";

pub fn run(args: Vec<String>) -> anyhow::Result<()> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        [] => app::run_shell(AppConfig::from_env()?, None),
        ["--at", query] => app::run_shell(AppConfig::from_env()?, Some(query)),
        ["export", dir] => run_export(PathBuf::from(dir)),
        ["--help"] | ["-h"] | ["help"] => {
            println!("{USAGE}");
            Ok(())
        }
        _ => bail!("unrecognized arguments {:?}\n{USAGE}", args),
    }
}

fn run_export(dir: PathBuf) -> anyhow::Result<()> {
    logging::initialize(LogDestination::Terminal);

    let config = AppConfig::from_env()?;
    let mut options = ExportOptions::new(config.mode, config.origin);
    options.generated_utc = Arc::new(|| chrono::Utc::now().to_rfc3339());

    let summary = export_site(&dir, &Catalog::builtin(), &options)
        .with_context(|| format!("exporting site to {}", dir.display()))?;

    if let Some(manifest) = &summary.manifest_path {
        portfolio_info!("Manifest written to {}", manifest.display());
    }
    for page in &summary.pages {
        println!("{}", page.display());
    }
    Ok(())
}
