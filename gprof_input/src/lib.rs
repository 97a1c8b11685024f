use anyhow::Context;
use tracing::info;

use crate::args::Args;
use crate::edges_csv::EdgeCsvWriter;
use generator_common::generator::GenerationSummary;
use generator_common::output::generate_file;

pub mod args;
pub mod edges_csv;
pub mod pbar;
#[cfg(test)]
mod tests;

pub fn run_app(app: Args) -> anyhow::Result<GenerationSummary> {
    info!("Get params...");
    let params = app.get_params();

    info!("Params:\n{:#?}", params);
    params.validate()?;
    info!("Using seed {}.", params.seed);

    let mut csv_wtr = app
        .output_edges_csv
        .as_ref()
        .map(EdgeCsvWriter::new)
        .transpose()?;
    let mut csv_result: csv::Result<()> = Ok(());

    if app.progress {
        pbar::create_progress_bar(params.edge_lines());
    }

    let summary = generate_file(&app.output, &params, |edge, weight| {
        pbar::increment_progress(1);
        if csv_result.is_ok() {
            if let Some(wtr) = csv_wtr.as_mut() {
                csv_result = wtr.write_edge(edge, weight);
            }
        }
    });

    pbar::finish_progress_bar();

    let summary = match summary.with_context(|| format!("writing {}", app.output.display())) {
        Ok(summary) => summary,
        Err(e) => {
            if let Some(wtr) = csv_wtr {
                wtr.discard();
            }
            return Err(e);
        }
    };

    if let Some(wtr) = csv_wtr {
        if let Err(e) = csv_result {
            wtr.discard();
            return Err(e).context("writing edge csv");
        }
        wtr.close()?;
    }

    info!(
        "Wrote {} edges and {} directives. Expected MST weight: {}",
        summary.edges_written, summary.directives_written, summary.total_weight
    );

    Ok(summary)
}
