use super::resolve_layout;
use crate::reports;
use blockforge::config::ReportConfig;
use blockforge::export;
use blockforge::loader::InstanceSet;
use blockforge::{BfResult, Scorer};
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub report: ReportConfig,

    /// Name of the function to evaluate
    #[arg(short, long)]
    pub function: String,

    /// Layout to evaluate, e.g. "[2,0,1]". Identity when omitted
    #[arg(short, long)]
    pub solution: Option<String>,

    /// Write the per-block breakdown to this CSV file
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: EvalArgs, set: &InstanceSet) -> BfResult<()> {
    let instance = set.get(&args.function)?;
    let layout = resolve_layout(args.solution.as_deref(), &instance)?;
    let scorer = Scorer::new(&instance);

    let fitness = scorer.score(&layout)?;
    let rows = scorer.breakdown(&layout, args.report.size_scale)?;

    let identity = if args.report.show_identity && !layout.is_identity() {
        Some(scorer.score_identity())
    } else {
        None
    };

    reports::print_evaluation(&args.function, &layout, fitness, identity);
    reports::print_breakdown(&rows, args.report.top);

    if let Some(path) = &args.csv {
        export::save_breakdown_csv(path, &rows)?;
        info!("💾 Breakdown written to {}", path);
    }

    Ok(())
}
