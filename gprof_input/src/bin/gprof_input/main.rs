use clap::Parser;
use gprof_input::args::Args;
use gprof_input::{pbar, run_app};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let app = Args::parse();
    pbar::setup_logging(None);

    info!("Generating input for {}.", app.output.display());

    run_app(app)?;
    println!("Done");
    Ok(())
}
