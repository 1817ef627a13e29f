use super::InteractionGraph;
use crate::error::BfResult;
use std::io::Write;

/// Hand-off point to whatever lays out and draws the graph.
/// Implementations receive node ids and edge attributes only.
pub trait GraphRenderer {
    fn render(&mut self, graph: &InteractionGraph) -> BfResult<()>;
}

/// Writes the graph as pretty-printed JSON.
pub struct JsonGraphWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonGraphWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GraphRenderer for JsonGraphWriter<W> {
    fn render(&mut self, graph: &InteractionGraph) -> BfResult<()> {
        serde_json::to_writer_pretty(&mut self.out, graph)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes the graph in Graphviz DOT form for an external force-directed
/// engine (neato, fdp). Zero-weight edges are kept so the attraction
/// hint is available for every pair.
pub struct DotGraphWriter<W: Write> {
    out: W,
}

impl<W: Write> DotGraphWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GraphRenderer for DotGraphWriter<W> {
    fn render(&mut self, graph: &InteractionGraph) -> BfResult<()> {
        writeln!(self.out, "digraph layout {{")?;
        for node in &graph.nodes {
            writeln!(self.out, "    {};", node)?;
        }
        for e in &graph.edges {
            writeln!(
                self.out,
                "    {} -> {} [weight={}, distance_hint={}, label=\"{}\"];",
                e.from, e.to, e.weight, e.distance_hint, e.weight
            )?;
        }
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(())
    }
}
