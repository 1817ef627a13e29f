use crate::reports::{self, FunctionSummary};
use blockforge::loader::InstanceSet;
use blockforge::{BfResult, Scorer};
use tracing::warn;

pub fn run(set: &InstanceSet) -> BfResult<()> {
    let mut rows = Vec::with_capacity(set.len());

    for (name, res) in set.iter() {
        let row = match res {
            Ok(inst) => FunctionSummary {
                name: name.to_string(),
                blocks: Some(inst.block_count()),
                total_size: Some(inst.total_size()),
                identity_fitness: Some(Scorer::new(&inst).score_identity()),
                note: if inst.is_zeros() {
                    "no calls".to_string()
                } else {
                    String::new()
                },
            },
            Err(e) => {
                warn!("Function '{}' is malformed: {}", name, e);
                FunctionSummary {
                    name: name.to_string(),
                    blocks: None,
                    total_size: None,
                    identity_fitness: None,
                    note: e.to_string(),
                }
            }
        };
        rows.push(row);
    }

    if rows.is_empty() {
        println!("Instance contains no functions.");
        return Ok(());
    }

    reports::print_function_list(&rows);
    Ok(())
}
