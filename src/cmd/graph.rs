use super::resolve_layout;
use blockforge::config::GraphFormat;
use blockforge::graph::{DotGraphWriter, GraphRenderer, JsonGraphWriter};
use blockforge::loader::InstanceSet;
use blockforge::{BfResult, Scorer};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Name of the function to export
    #[arg(short, long)]
    pub function: String,

    /// Layout to export, e.g. "[2,0,1]". Identity when omitted
    #[arg(short, long)]
    pub solution: Option<String>,

    #[arg(long, value_enum, default_value_t = GraphFormat::Json)]
    pub format: GraphFormat,

    /// Output file. Stdout when omitted
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: GraphArgs, set: &InstanceSet) -> BfResult<()> {
    let instance = set.get(&args.function)?;
    let layout = resolve_layout(args.solution.as_deref(), &instance)?;
    let graph = Scorer::new(&instance).graph(&layout)?;

    info!(
        "🕸️  Graph for '{}': {} nodes, {} edges ({})",
        args.function,
        graph.node_count(),
        graph.edge_count(),
        args.format
    );

    let out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mut renderer: Box<dyn GraphRenderer> = match args.format {
        GraphFormat::Json => Box::new(JsonGraphWriter::new(out)),
        GraphFormat::Dot => Box::new(DotGraphWriter::new(out)),
    };
    renderer.render(&graph)
}
