mod tables;

use blockforge::Layout;

pub use self::tables::{
    breakdown as print_breakdown, functions as print_function_list, ranking as print_ranking,
};

pub struct FunctionSummary {
    pub name: String,
    pub blocks: Option<usize>,
    pub total_size: Option<f64>,
    pub identity_fitness: Option<f64>,
    pub note: String,
}

pub struct RankedLayout {
    pub line: usize,
    pub layout: Layout,
    pub fitness: f64,
}

pub fn print_evaluation(name: &str, layout: &Layout, fitness: f64, identity: Option<f64>) {
    println!("\n🔎 === BLOCK LAYOUT: {} === 🔎", name);
    println!("Layout:   {}", layout);
    println!("Fitness:  {}", fitness);
    if let Some(id) = identity {
        println!("Identity: {}", id);
        println!("Gain:     {}", fitness - id);
    }
}
