use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fred_navigator::charts::Chart;
use fred_navigator::index::{JobId, ParameterKey};
use fred_navigator::params::Selection;
use fred_navigator::report::TimeSeries;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_key_table(entries: &[(&ParameterKey, &JobId)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Parameters").add_attribute(Attribute::Bold),
        Cell::new("Job").fg(Color::Cyan),
    ]);

    for (key, job) in entries {
        table.add_row(vec![
            Cell::new(key).add_attribute(Attribute::Bold),
            Cell::new(job).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
    println!("{} combinations", entries.len());
}

pub fn print_points(series: &TimeSeries) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Day").add_attribute(Attribute::Bold),
        Cell::new(&series.label).fg(Color::Cyan),
    ]);
    align_right(&mut table, 0..=1);

    for p in &series.points {
        table.add_row(vec![
            Cell::new(format!("{}", p.day)),
            Cell::new(format!("{}", p.value)),
        ]);
    }
    println!("{}", table);
}

pub fn print_chart_summary(selection: &Selection, chart: &Chart) {
    println!("\n📊 === {} === 📊", chart.title);
    println!(
        "   key {} | x: {} | y: {} ({}..{}, tick {})",
        selection.key(),
        chart.x_label,
        chart.y_label,
        chart.y_axis.min,
        chart.y_axis.max,
        chart.y_axis.tick
    );

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Series").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Peak Day"),
        Cell::new("Peak").fg(Color::Red),
        Cell::new("Final Day"),
        Cell::new("Final").fg(Color::Green),
    ]);
    align_right(&mut table, 1..=5);

    let or_dash = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v));

    for s in &chart.series {
        let peak = s.peak();
        let last = s.last();
        table.add_row(vec![
            Cell::new(&s.label).add_attribute(Attribute::Bold),
            Cell::new(s.len()),
            Cell::new(or_dash(peak.map(|p| p.day))),
            Cell::new(or_dash(peak.map(|p| p.value))).fg(Color::Red),
            Cell::new(or_dash(last.map(|p| p.day))),
            Cell::new(or_dash(last.map(|p| p.value))).fg(Color::Green),
        ]);
    }
    println!("{}", table);
}
