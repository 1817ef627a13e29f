use blockforge::loader::InstanceSet;
use blockforge::BlockForgeError;
use clap::{Parser, Subcommand};
use std::process;
use tracing::{debug, error, Level};

mod cmd;
mod reports;

/// Profile-guided block layout evaluation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON instance description
    #[arg(global = true, short, long, default_value = "instance.json")]
    instance: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the functions in the instance
    List,
    /// Score a layout and break the fitness down per block
    Eval(cmd::eval::EvalArgs),
    /// Export the weighted interaction graph of a layout
    Graph(cmd::graph::GraphArgs),
    /// Score every layout of a file and rank them
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so graph exports on stdout stay clean.
    let level = if cli.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let set = InstanceSet::load_from_file(&cli.instance).unwrap_or_else(|e| {
        error!("❌ Cannot load instance '{}': {}", cli.instance, e);
        process::exit(1);
    });
    debug!("Instance holds {} functions", set.len());

    let result = match cli.command {
        Commands::List => cmd::list::run(&set),
        Commands::Eval(args) => cmd::eval::run(args, &set),
        Commands::Graph(args) => cmd::graph::run(args, &set),
        Commands::Compare(args) => cmd::compare::run(args, &set),
    };

    if let Err(e) = result {
        match &e {
            BlockForgeError::Lookup { .. } => error!("❌ {}", e),
            _ => error!("❌ FATAL: {}", e),
        }
        process::exit(1);
    }
}
