use crate::reports::{self, RankedLayout};
use blockforge::loader::InstanceSet;
use blockforge::{BfResult, BlockForgeError, Layout, Scorer};
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Name of the function to evaluate
    #[arg(short, long)]
    pub function: String,

    /// File with one layout per line ('#' starts a comment line)
    #[arg(short, long)]
    pub layouts: String,
}

pub fn run(args: CompareArgs, set: &InstanceSet) -> BfResult<()> {
    let instance = set.get(&args.function)?;
    let content = fs::read_to_string(&args.layouts)?;

    let mut lines = Vec::new();
    let mut layouts = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let layout = Layout::parse(trimmed, instance.block_count()).map_err(|e| match e {
            BlockForgeError::Validation(msg) => {
                BlockForgeError::Validation(format!("{}:{}: {}", args.layouts, idx + 1, msg))
            }
            other => other,
        })?;
        lines.push(idx + 1);
        layouts.push(layout);
    }

    if layouts.is_empty() {
        println!("No layouts found in {}.", args.layouts);
        return Ok(());
    }

    info!("⚖️  Scoring {} layouts for '{}'", layouts.len(), args.function);

    let scorer = Scorer::new(&instance);
    let scores = scorer.score_batch(&layouts)?;
    let identity = scorer.score_identity();

    let mut ranked: Vec<RankedLayout> = lines
        .into_iter()
        .zip(layouts)
        .zip(scores)
        .map(|((line, layout), fitness)| RankedLayout {
            line,
            layout,
            fitness,
        })
        .collect();

    // Larger fitness first; ties keep file order.
    ranked.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

    reports::print_ranking(&args.function, &ranked, identity);
    Ok(())
}
