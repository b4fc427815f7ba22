//! Console front end: runs the rewriter over the working directory and
//! prints one line per file.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::error::Result;
use crate::report::{FileOutcome, FileStatus, RunReport};
use crate::rewriter::{Rewriter, RunEvent};

/// Run over the current working directory with the default configuration.
pub fn run() -> Result<RunReport> {
    run_with_config(Config::from_current_dir()?)
}

/// Run with an explicit configuration, printing progress to stdout.
pub fn run_with_config(config: Config) -> Result<RunReport> {
    let rewriter = Rewriter::from_config(config)?;
    let config = rewriter.config();

    let mut progress: Option<ProgressBar> = None;
    let report = rewriter.process_files_with(|event| match event {
        RunEvent::Discovered { count } => {
            println!("Scanning... Found {count} text files.");
            progress = Some(progress_bar(count));
        }
        RunEvent::Finished(outcome) => {
            if let Some(pb) = &progress {
                pb.suspend(|| print_outcome(outcome, config));
                pb.inc(1);
            } else {
                print_outcome(outcome, config);
            }
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    println!();
    println!(
        "{} Processed {} files.",
        style("Done!").green().bold(),
        report.processed_count()
    );
    println!("Check the '{}' folder.", config.output_folder);

    Ok(report)
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_outcome(outcome: &FileOutcome, config: &Config) {
    let file = &outcome.file;
    match &outcome.status {
        FileStatus::Skipped => {}
        FileStatus::Succeeded { .. } => println!(
            "{} {} -> {}",
            style("[OK]").green(),
            file.relative.display(),
            file.display_destination(config).display()
        ),
        FileStatus::Failed { error } => println!(
            "{} Could not process {}: {}",
            style("[ERROR]").red().bold(),
            file.relative.display(),
            error.reason()
        ),
    }
}
