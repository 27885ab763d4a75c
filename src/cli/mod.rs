use anyhow::Result;

use crate::{config::Config, report::write_report, scanner::collect_results};

mod args;
mod exit_status;
mod report;

pub use args::{Arguments, Paths};
pub use exit_status::ExitStatus;

/// Run the extraction pipeline for parsed arguments.
///
/// Missing positionals print the usage and succeed. Traversal failures are
/// reported as warnings; only a failed report write returns `Err`.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Paths { input, output }) = args.paths_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let config = Config::default();
    let scan = collect_results(&input, &config);
    report::print_skipped(&scan.skipped);

    write_report(&scan.results, &output)?;
    report::print_success(&scan, &output);

    Ok(ExitStatus::Success)
}
