//! perfdoc - Batch Report Generator
//!
//! Sweeps a fixed list of algorithms against the STL and writes one time
//! plot per algorithm into the plots directory.

use std::fs;
use std::io;

use tracing::{error, info};

use perfsweep::{
    config::Config,
    constants::{doc, power_of_two_sizes},
    models::PlotMode,
    presenter::{default_renderer, OutputMode, Presenter},
    utils::init_tracing,
    BenchmarkOrchestrator, BenchmarkRequest, ProcessRunner,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config.rust_log);

    fs::create_dir_all(&config.storage.plots_dir)?;

    let sizes = power_of_two_sizes(doc::MIN_SIZE_EXPONENT, doc::MAX_SIZE_EXPONENT);
    let orchestrator = BenchmarkOrchestrator::new(ProcessRunner::new(&config.storage.bin_dir));
    let presenter = Presenter::new(default_renderer(config.plot), &config.storage.plots_dir)
        .with_display_labels();

    let mut stdout = io::stdout().lock();
    let mut failed = 0usize;

    for &algorithm in doc::ALGORITHMS {
        info!("running '{}'", algorithm);

        let request = BenchmarkRequest::new(algorithm, sizes.clone(), [doc::COMPETITOR]);
        let report = orchestrator.run(&request).await?;
        let competitors = orchestrator.eligible_competitors(&request);

        if let Err(e) = presenter.present(
            &report,
            OutputMode::Plot(PlotMode::Time),
            &competitors,
            &mut stdout,
        ) {
            error!(algorithm, code = e.error_code(), "Failed to write plot: {}", e);
            failed += 1;
        }
    }

    info!(
        algorithms = doc::ALGORITHMS.len(),
        failed,
        "Batch report finished"
    );

    Ok(())
}
