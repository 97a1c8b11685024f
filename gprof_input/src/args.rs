use clap::{ArgEnum, Parser, ValueHint};
use generator_common::output::DEFAULT_OUTPUT;
use generator_common::params::{EdgeFormat, GenerationParameters};
use generator_common::random::{WeightRange, MAX_WEIGHT, MIN_WEIGHT};
use generator_common::{Directive, DEFAULT_EDGES, DEFAULT_VERTICES};
use std::path::PathBuf;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum, Debug)]
pub enum Algorithm {
    Prim,
    Boruvka,
}

impl From<Algorithm> for Directive {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Prim => Directive::Prim,
            Algorithm::Boruvka => Directive::Boruvka,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ArgEnum, Debug)]
pub enum EdgeFormatMode {
    Command,
    Bare,
}

impl From<EdgeFormatMode> for EdgeFormat {
    fn from(m: EdgeFormatMode) -> Self {
        match m {
            EdgeFormatMode::Command => EdgeFormat::Command,
            EdgeFormatMode::Bare => EdgeFormat::Bare,
        }
    }
}

/// MST server input generator
#[derive(Parser, Debug)]
pub struct Args {
    /// Number of vertices declared in the header
    #[clap(short, long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: u64,
    /// Requested number of edges. The path spans node ids [0,edges) and has edges - 1 edges.
    #[clap(short, long, default_value_t = DEFAULT_EDGES)]
    pub edges: u64,
    #[clap(short, long, parse(from_os_str), value_hint = ValueHint::FilePath, default_value = DEFAULT_OUTPUT)]
    /// File to write the server input to
    pub output: PathBuf,
    /// Seed value for the edge weights
    #[clap(short, long)]
    pub seed: Option<u64>,
    /// Smallest edge weight
    #[clap(long, default_value_t = MIN_WEIGHT)]
    pub min_weight: u32,
    /// Largest edge weight
    #[clap(long, default_value_t = MAX_WEIGHT)]
    pub max_weight: u32,
    /// How to write edges: `Newedge u v w` lines, or `u v w` lines announced by the header
    #[clap(long, arg_enum, default_value_t = EdgeFormatMode::Command)]
    pub edge_format: EdgeFormatMode,
    /// Algorithm to run after the graph is loaded. Repeatable, defaults to prim then boruvka.
    #[clap(short, long = "algorithm", arg_enum)]
    pub algorithms: Vec<Algorithm>,
    /// Do not append any algorithm directives
    #[clap(long, conflicts_with = "algorithms")]
    pub no_directives: bool,
    #[clap(long, parse(from_os_str), value_hint = ValueHint::FilePath)]
    /// File to write edges to (csv: edge_i, edge_j, weight)
    pub output_edges_csv: Option<PathBuf>,
    /// Show a progress bar while writing edges
    #[clap(long)]
    pub progress: bool,
}

impl Args {
    pub fn get_weights(&self) -> WeightRange {
        WeightRange::new(self.min_weight, self.max_weight)
    }

    pub fn get_directives(&self) -> Vec<Directive> {
        if self.no_directives {
            Vec::new()
        } else if self.algorithms.is_empty() {
            Directive::DEFAULT.to_vec()
        } else {
            self.algorithms.iter().copied().map(Directive::from).collect()
        }
    }

    pub fn get_params(&self) -> GenerationParameters {
        let params = match self.seed {
            None => GenerationParameters::new(self.vertices, self.edges),
            Some(s) => GenerationParameters::from_seed(self.vertices, self.edges, s),
        };
        params
            .with_weights(self.get_weights())
            .with_edge_format(self.edge_format.into())
            .with_directives(self.get_directives())
    }
}
