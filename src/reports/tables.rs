use super::{FunctionSummary, RankedLayout};
use blockforge::scorer::BlockContribution;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::Range<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.0}", x)).unwrap_or_else(|| "-".to_string())
}

pub fn functions(rows: &[FunctionSummary]) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Function").add_attribute(Attribute::Bold),
        Cell::new("Blocks"),
        Cell::new("Size"),
        Cell::new("Identity").fg(Color::Cyan),
        Cell::new("Note"),
    ]);
    align_right(&mut table, 1..4);

    for r in rows {
        table.add_row(vec![
            Cell::new(&r.name).add_attribute(Attribute::Bold),
            Cell::new(r.blocks.map(|b| b.to_string()).unwrap_or_else(|| "-".into())),
            Cell::new(opt(r.total_size)),
            Cell::new(opt(r.identity_fitness)).fg(Color::Cyan),
            Cell::new(&r.note).fg(Color::Yellow),
        ]);
    }
    println!("\n{}", table);
}

/// Per-position contributions, in layout order. With `top > 0` only the
/// largest `top` rows are kept (still in layout order).
pub fn breakdown(rows: &[BlockContribution], top: usize) {
    let total: f64 = rows.iter().map(|r| r.contribution).sum();

    let mut shown: Vec<&BlockContribution> = rows.iter().collect();
    if top > 0 && top < shown.len() {
        shown.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
        shown.truncate(top);
        shown.sort_by_key(|r| r.position);
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Pos").add_attribute(Attribute::Bold),
        Cell::new("Block").add_attribute(Attribute::Bold),
        Cell::new("Size"),
        Cell::new("Weight"),
        Cell::new("Contribution").fg(Color::Cyan),
        Cell::new("Share"),
    ]);
    align_right(&mut table, 0..6);

    for r in shown {
        let share = if total > 0.0 {
            r.contribution / total * 100.0
        } else {
            0.0
        };
        let weight_color = if r.size_weight >= 0.66 {
            Color::Magenta
        } else if r.size_weight >= 0.33 {
            Color::Blue
        } else {
            Color::Reset
        };

        table.add_row(vec![
            Cell::new(r.position),
            Cell::new(r.block).add_attribute(Attribute::Bold),
            Cell::new(format!("{}", r.size)),
            Cell::new(format!("{:.2}", r.size_weight)).fg(weight_color),
            Cell::new(format!("{:.0}", r.contribution)).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }
    println!("\n{}", table);
}

pub fn ranking(name: &str, rows: &[RankedLayout], identity: f64) {
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Line"),
        Cell::new("Fitness").fg(Color::Cyan),
        Cell::new("vs Identity"),
        Cell::new("Layout"),
    ]);
    align_right(&mut table, 0..4);

    for (i, r) in rows.iter().enumerate() {
        let delta = r.fitness - identity;
        let delta_color = if delta > 0.0 {
            Color::Green
        } else if delta < 0.0 {
            Color::Red
        } else {
            Color::Reset
        };

        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Bold),
            Cell::new(r.line),
            Cell::new(format!("{}", r.fitness)).fg(Color::Cyan),
            Cell::new(format!("{:+}", delta)).fg(delta_color),
            Cell::new(r.layout.to_string()),
        ]);
    }

    println!("\n🏁 === RANKING: {} (identity {}) ===", name, identity);
    println!("{}", table);
}
