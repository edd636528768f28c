use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use invdir_core::{BatchOutcome, Tally};
use invdir_model::CanonicalField;
use invdir_report::{RunSummary, SourceCounts};

pub fn print_summary(summary: &RunSummary) {
    println!("Records before cleaning: {}", summary.raw_total);
    println!("Records after cleaning: {}", summary.cleaned_total);
    println!("Records removed: {}", summary.removed());
    if let Some(duplicates) = summary.duplicates_removed {
        println!("Duplicates removed: {duplicates}");
    }
    if let Some(snapshot) = &summary.snapshot {
        println!("Snapshot: {} ({} records)", snapshot.path.display(), snapshot.records);
        println!("SHA-256: {}", snapshot.sha256);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Geography"),
        header_cell("Status"),
        header_cell("Read"),
        header_cell("Kept"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for batch in &summary.batches {
        let (read, kept) = match batch.outcome {
            BatchOutcome::Loaded { raw_records, kept } => (Cell::new(raw_records), Cell::new(kept)),
            _ => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(&batch.source),
            Cell::new(&batch.geography),
            status_cell(&batch.outcome),
            read,
            kept,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(summary.raw_total).add_attribute(Attribute::Bold),
        Cell::new(summary.cleaned_total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_tally("Source", &summary.stats.by_source);
    print_tally("Geography", &summary.stats.by_geography);
    print_tally("Type", &summary.stats.by_type);
    print_tally("Stage (top 10)", &summary.stats.by_stage);
    print_coverage(summary);

    let problems: Vec<_> = summary
        .batches
        .iter()
        .filter_map(|batch| match &batch.outcome {
            BatchOutcome::Loaded { .. } => None,
            BatchOutcome::Missing => Some(format!(
                "{}: file not found: {}",
                batch.source,
                batch.path.display()
            )),
            BatchOutcome::Failed { message } => Some(format!("{}: {message}", batch.source)),
        })
        .collect();
    if !problems.is_empty() {
        eprintln!("Skipped batches:");
        for problem in problems {
            eprintln!("- {problem}");
        }
    }
}

pub fn print_source_counts(counts: &SourceCounts) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Source"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (source, count) in counts.by_source.iter() {
        table.add_row(vec![Cell::new(source), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_fields(rows: &[(CanonicalField, Vec<&'static str>)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Column names")]);
    apply_table_style(&mut table);
    for (field, synonyms) in rows {
        let synonyms = if synonyms.is_empty() {
            dim_cell("(set from the source catalog)")
        } else {
            Cell::new(synonyms.join(", "))
        };
        table.add_row(vec![Cell::new(field.as_str()), synonyms]);
    }
    println!("{table}");
}

fn print_tally(title: &str, tally: &Tally) {
    if tally.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (value, count) in tally.iter() {
        table.add_row(vec![Cell::new(value), Cell::new(count)]);
    }
    println!("{table}");
}

fn print_coverage(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Contact"),
        header_cell("Records"),
        header_cell("Coverage"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for coverage in &summary.stats.coverage {
        table.add_row(vec![
            Cell::new(coverage.field.as_str()),
            Cell::new(coverage.present),
            Cell::new(format!("{:.1}%", coverage.percent)),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(outcome: &BatchOutcome) -> Cell {
    let color = match outcome {
        BatchOutcome::Loaded { .. } => Color::Green,
        BatchOutcome::Missing => Color::Yellow,
        BatchOutcome::Failed { .. } => Color::Red,
    };
    Cell::new(outcome.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
