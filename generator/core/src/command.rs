//! The line protocol read by the MST server.
//!
//! Each [`Command`] is exactly one line of the generated input file.
//! [`Display`](core::fmt::Display) renders the wire text without the trailing newline,
//! [`FromStr`] parses it back.

use core::fmt;
use core::str::FromStr;

use crate::path::Edge;

/// An algorithm the server should run against the graph it was just sent.
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Directive {
    /// Prim's algorithm.
    Prim,
    /// Borůvka's algorithm.
    Boruvka,
}

impl Directive {
    /// The directives appended when nothing else is requested, in order.
    pub const DEFAULT: [Directive; 2] = [Directive::Prim, Directive::Boruvka];

    /// The bare token the server expects.
    pub fn token(&self) -> &'static str {
        match self {
            Directive::Prim => "Prim",
            Directive::Boruvka => "Boruvka",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A single line of server input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Command {
    /// `Newgraph <vertices> <edges>`.
    ///
    /// With `edges == 0` the server takes edges as [`Command::NewEdge`] lines,
    /// otherwise it reads exactly `edges` [`Command::BareEdge`] lines.
    NewGraph {
        /// Number of vertices the server allocates.
        vertices: u64,
        /// Number of bare edge lines that follow.
        edges: u64,
    },
    /// `Newedge <u> <v> <weight>`.
    NewEdge(Edge, u32),
    /// `<u> <v> <weight>`.
    BareEdge(Edge, u32),
    /// A bare algorithm token.
    Directive(Directive),
}

impl Command {
    /// The edge and weight carried by this line, if it is an edge line.
    pub fn edge(&self) -> Option<(Edge, u32)> {
        match *self {
            Command::NewEdge(e, w) | Command::BareEdge(e, w) => Some((e, w)),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NewGraph { vertices, edges } => write!(f, "Newgraph {} {}", vertices, edges),
            Command::NewEdge((u, v), w) => write!(f, "Newedge {} {} {}", u, v, w),
            Command::BareEdge((u, v), w) => write!(f, "{} {} {}", u, v, w),
            Command::Directive(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Reasons a line is not a valid [`Command`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseCommandError {
    /// The line has no tokens.
    Empty,
    /// The first token is not a known command.
    UnknownCommand,
    /// A required field is absent.
    MissingField,
    /// A field is not an unsigned integer.
    InvalidNumber,
    /// Extra tokens after the last field.
    TrailingInput,
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseCommandError::Empty => "empty line",
            ParseCommandError::UnknownCommand => "unknown command",
            ParseCommandError::MissingField => "missing field",
            ParseCommandError::InvalidNumber => "field is not an unsigned integer",
            ParseCommandError::TrailingInput => "unexpected trailing input",
        };
        f.write_str(msg)
    }
}

/// Pull the next token off `tokens` and parse it as a number.
fn field<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<T, ParseCommandError> {
    tokens
        .next()
        .ok_or(ParseCommandError::MissingField)?
        .parse()
        .map_err(|_| ParseCommandError::InvalidNumber)
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_ascii_whitespace();
        let head = tokens.next().ok_or(ParseCommandError::Empty)?;

        let cmd = match head {
            "Newgraph" => Command::NewGraph {
                vertices: field(&mut tokens)?,
                edges: field(&mut tokens)?,
            },
            "Newedge" => {
                let u = field(&mut tokens)?;
                let v = field(&mut tokens)?;
                Command::NewEdge((u, v), field(&mut tokens)?)
            }
            "Prim" => Command::Directive(Directive::Prim),
            "Boruvka" => Command::Directive(Directive::Boruvka),
            _ => {
                let u = head.parse().map_err(|_| ParseCommandError::UnknownCommand)?;
                let v = field(&mut tokens)?;
                Command::BareEdge((u, v), field(&mut tokens)?)
            }
        };

        if tokens.next().is_some() {
            return Err(ParseCommandError::TrailingInput);
        }

        Ok(cmd)
    }
}
