//! perfsweep - Application Entry Point
//!
//! Sweeps one algorithm across input sizes for the primary implementation
//! and its competitors, then prints or plots the report.

use std::io;

use clap::Parser;
use tracing::info;

use perfsweep::{
    cli::Args,
    config::Config,
    presenter::{default_renderer, Presenter},
    utils::init_tracing,
    BenchmarkOrchestrator, BenchmarkRequest, ProcessRunner,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    init_tracing(&config.rust_log);

    let bin_dir = args.bin_dir.clone().unwrap_or(config.storage.bin_dir);
    let output_dir = args.output_dir.clone().unwrap_or(config.storage.plots_dir);

    let request =
        BenchmarkRequest::new(args.algorithm.clone(), args.sizes(), args.competitors.clone());

    info!("running {} perf test", request.algorithm);

    let orchestrator = BenchmarkOrchestrator::new(ProcessRunner::new(bin_dir));
    let report = orchestrator.run(&request).await?;

    let competitors = orchestrator.eligible_competitors(&request);
    let presenter = Presenter::new(default_renderer(config.plot), output_dir);

    let mut stdout = io::stdout().lock();
    if let Some(path) = presenter.present(&report, args.output_mode(), &competitors, &mut stdout)? {
        info!("Plot saved to {}", path.display());
    }

    Ok(())
}
