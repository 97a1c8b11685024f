//! Writing a graph description for the MST server.

use std::io::Write;

use generator_core::command::Command;
use generator_core::path::Edge;
use tracing::{debug, info, instrument, warn};

use crate::error::GeneratorError;
use crate::params::GenerationParameters;

/// What a call to [`generate`] wrote.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GenerationSummary {
    /// The header line.
    pub header: Command,
    /// Number of edge lines.
    pub edges_written: u64,
    /// Number of directive lines.
    pub directives_written: usize,
    /// Sum of all edge weights.
    ///
    /// The edges form a path, which is its own minimum spanning tree,
    /// so this is the weight `Prim` and `Boruvka` should report.
    pub total_weight: u64,
    /// Seed the weights were drawn with.
    pub seed: u64,
}

/// Write the header, the weighted path and the directives to `out`.
///
/// `on_edge` is called once per edge line, in the order the lines are written.
/// The output is flushed before returning but not closed.
///
/// # Arguments
/// * `out` - Where the lines go.
/// * `params` - What to write.
/// * `on_edge` - Callback receiving each edge and its weight.
#[instrument(skip_all, fields(vertices = params.vertices, edges = params.edges))]
pub fn generate<W: Write, F: FnMut(Edge, u32)>(
    mut out: W,
    params: &GenerationParameters,
    mut on_edge: F,
) -> Result<GenerationSummary, GeneratorError> {
    params.validate()?;
    let mut weights = params.weight_sampler()?;

    if params.edges > params.vertices {
        warn!(
            "Path reaches node {} but the header only declares {} nodes, the server will reject those edges.",
            params.edges - 1,
            params.vertices
        );
    }

    let header = params.header();
    writeln!(out, "{}", header)?;
    debug!("Wrote header: {}", header);

    let mut edges_written = 0u64;
    let mut total_weight = 0u64;
    for edge in params.path() {
        let w = weights.sample();
        writeln!(out, "{}", params.edge_command(edge, w))?;
        on_edge(edge, w);
        edges_written += 1;
        total_weight += u64::from(w);
    }
    debug!("Wrote {} edges.", edges_written);

    for d in params.directives.iter() {
        writeln!(out, "{}", Command::Directive(*d))?;
    }

    out.flush()?;

    info!(
        "Generated {} edges over {} nodes (total weight {}).",
        edges_written, params.edges, total_weight
    );

    Ok(GenerationSummary {
        header,
        edges_written,
        directives_written: params.directives.len(),
        total_weight,
        seed: params.seed,
    })
}
