mod compose;
mod error;
mod naming;
mod placement;
mod scan;
mod timer;

use crate::compose::{
    run,
    ComposeConfig,
    Outcome,
    DEFAULT_OUTPUT,
};

use clap::Parser;

use std::path::PathBuf;

/// Combine rain streak renders named cv<id>_v<v>_h<h>_osc<osc>.png into one strip.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Directory to scan for renders.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Where to write the combined image.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Fail if any render differs in size from the first one.
    #[arg(long)]
    strict: bool,

    /// Process renders in file name order instead of directory order.
    #[arg(long)]
    sort: bool,

    /// Print placements without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Log scan and timing details.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ComposeConfig {
        ComposeConfig{
            dir: self.dir.clone(),
            output: self.output.clone(),
            strict: self.strict,
            sort: self.sort,
            dry_run: self.dry_run,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Everything the run prints to stdout, in order.
fn console_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::NoMatches => vec!["No matching images found.".to_string()],
        Outcome::Saved{ path, .. } => vec![format!("Combined image saved as {}", path.display())],
        Outcome::DryRun{ width, height, placements } => placements
            .iter()
            .map(|p| format!("{} -> index {} x {}", p.file_name, p.index, p.x))
            .chain(std::iter::once(format!(
                "Dry run: {} images, canvas {width}x{height}", placements.len()
            )))
            .collect(),
    }
}

pub fn main() -> Result<(), String> {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = run(&args.config()).map_err(|e| e.to_string())?;
    if let Outcome::Saved{ width, height, tiles, .. } = &outcome {
        log::info!("{tiles} images into {width}x{height}");
    }
    for line in console_lines(&outcome) {
        println!("{line}");
    }
    Ok(())
}
