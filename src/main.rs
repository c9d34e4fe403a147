use std::process::ExitCode;

use anyhow::Result;

use buster::cli::{handle_error, Args, CliUtils};
use buster::{plan, BustConfig};

fn main() -> ExitCode {
    let args = Args::parse_normalized();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            handle_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = BustConfig::try_from(args)?;
    CliUtils::show_detail(
        &format!("Busting \"{}\"", config.input_file.display()),
        args.verbose,
    );

    let plan = plan(&config)?;
    CliUtils::show_detail(
        &format!(
            "Source: \"{}\" in \"{}\"",
            plan.source.file_name(),
            plan.source.directory.display()
        ),
        args.verbose,
    );
    CliUtils::show_detail(&format!("MD5: {}", plan.derived.digest), args.verbose);
    CliUtils::show_detail(
        &format!("Destination: \"{}\"", plan.derived.path.display()),
        args.verbose,
    );

    if args.dry_run {
        CliUtils::show_success(
            &format!("Would create: \"{}\"", plan.derived.file_name),
            args.quiet,
        );
        return Ok(());
    }

    let outcome = plan.execute()?;
    CliUtils::show_detail(
        &format!("Wrote {} bytes", outcome.bytes_written),
        args.verbose,
    );
    CliUtils::show_success(
        &format!("File created: \"{}\"", outcome.file_name()),
        args.quiet,
    );

    Ok(())
}
