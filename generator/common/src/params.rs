//! This module holds the parameters of the input file being generated.

use generator_core::command::{Command, Directive};
use generator_core::path::{Edge, PathGraph};

use crate::error::GeneratorError;
use crate::random::{self, WeightRange, WeightSampler};

/// How edge lines are written.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EdgeFormat {
    /// `Newedge u v w` lines after a `Newgraph n 0` header.
    Command,
    /// `u v w` lines after a `Newgraph n m` header announcing `m` edges.
    Bare,
}

impl Default for EdgeFormat {
    fn default() -> Self {
        EdgeFormat::Command
    }
}

/// Parameters for one generated input file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenerationParameters {
    /// Node count written into the header. Does not bound the node ids on the path.
    pub vertices: u64,
    /// Requested edge count. The path spans node ids `0..edges`.
    pub edges: u64,
    /// Seed for the weight sampler.
    pub seed: u64,
    pub weights: WeightRange,
    pub edge_format: EdgeFormat,
    /// Directive lines appended after the edges, in order.
    pub directives: Vec<Directive>,
}

impl GenerationParameters {
    /// Create parameters with a freshly generated seed.
    ///
    /// # Arguments
    /// * `vertices` - The node count for the header.
    /// * `edges` - The requested edge count.
    pub fn new(vertices: u64, edges: u64) -> Self {
        Self::from_seed(vertices, edges, random::generate_seed())
    }

    /// Create parameters with a fixed seed.
    pub fn from_seed(vertices: u64, edges: u64, seed: u64) -> Self {
        GenerationParameters {
            vertices,
            edges,
            seed,
            weights: WeightRange::default(),
            edge_format: EdgeFormat::default(),
            directives: Directive::DEFAULT.to_vec(),
        }
    }

    pub fn with_weights(mut self, weights: WeightRange) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_edge_format(mut self, edge_format: EdgeFormat) -> Self {
        self.edge_format = edge_format;
        self
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    /// Check the parameters before anything is written.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.vertices == 0 {
            return Err(GeneratorError::invalid_argument("node count must be positive"));
        }
        if self.edges < 2 {
            return Err(GeneratorError::invalid_argument(format!(
                "edge count must be at least 2 to form a path, got {}",
                self.edges
            )));
        }
        if !self.weights.is_valid() {
            return Err(GeneratorError::invalid_argument(format!(
                "weight range [{}, {}] must be non-empty and start at 1 or above",
                self.weights.min, self.weights.max
            )));
        }
        Ok(())
    }

    /// The path whose edges are written.
    pub fn path(&self) -> PathGraph {
        PathGraph::new(self.edges)
    }

    /// Number of edge lines written.
    ///
    /// This is `edges - 1`: a path over `edges` node ids has one edge fewer than it has nodes.
    pub fn edge_lines(&self) -> u64 {
        self.path().edge_count()
    }

    /// The header line.
    ///
    /// The command format keeps the literal `0` the server expects before `Newedge` lines.
    pub fn header(&self) -> Command {
        let edges = match self.edge_format {
            EdgeFormat::Command => 0,
            EdgeFormat::Bare => self.edge_lines(),
        };
        Command::NewGraph {
            vertices: self.vertices,
            edges,
        }
    }

    /// The line for a single weighted edge.
    pub fn edge_command(&self, edge: Edge, weight: u32) -> Command {
        match self.edge_format {
            EdgeFormat::Command => Command::NewEdge(edge, weight),
            EdgeFormat::Bare => Command::BareEdge(edge, weight),
        }
    }

    /// A weight sampler seeded from these parameters.
    pub fn weight_sampler(&self) -> Result<WeightSampler, GeneratorError> {
        WeightSampler::new(self.weights, self.seed)
    }
}
