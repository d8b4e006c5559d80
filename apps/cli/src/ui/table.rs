use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use risk_engine::domain::{BatchSample, BatchSummary, Indicator, IndicatorSet, TimelinePoint};

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

fn percent(value: f64) -> Cell {
    number(format!("{:.2}", value))
}

/// One row per indicator with its nominal range.
pub fn indicators(set: &IndicatorSet) -> Table {
    let mut table = base_table(vec!["Indicator", "Description", "Value", "Nominal range"]);
    for indicator in Indicator::ALL {
        let range = indicator.range();
        table.add_row(vec![
            Cell::new(indicator.code()),
            Cell::new(indicator.description()),
            number(set.get(indicator)),
            Cell::new(format!("{} – {}", range.min, range.max)),
        ]);
    }
    table
}

/// Named presets with their indicators and score.
pub fn presets(rows: &[(&str, IndicatorSet, f64)]) -> Table {
    let mut header = vec!["Preset"];
    header.extend(Indicator::ALL.iter().map(|i| i.code()));
    header.push("Risk (%)");

    let mut table = base_table(header);
    for (name, set, risk) in rows {
        let mut row = vec![Cell::new(name)];
        row.extend(set.to_array().iter().map(|v| number(v)));
        row.push(percent(*risk));
        table.add_row(row);
    }
    table
}

pub fn country_risks(rows: &[(&str, f64)]) -> Table {
    let mut table = base_table(vec!["Country", "Conflict Risk (%)"]);
    for (name, risk) in rows {
        table.add_row(vec![Cell::new(name), percent(*risk)]);
    }
    table
}

pub fn timeline(points: &[TimelinePoint]) -> Table {
    let mut table = base_table(vec!["Year", "Conflict Risk (%)"]);
    for point in points {
        table.add_row(vec![Cell::new(point.year), percent(point.risk)]);
    }
    table
}

pub fn batch(samples: &[BatchSample]) -> Table {
    let mut header = vec!["Scenario"];
    header.extend(Indicator::ALL.iter().map(|i| i.code()));
    header.push("Risk (%)");

    let mut table = base_table(header);
    for sample in samples {
        let ind = &sample.indicators;
        table.add_row(vec![
            number(sample.index),
            number(format!("{:.2}", ind.gti)),
            number(format!("{:.3}", ind.twsi)),
            number(format!("{:.4}", ind.mbr)),
            number(ind.afs),
            number(format!("{:.3}", ind.eds)),
            number(format!("{:.3}", ind.evi)),
            percent(sample.risk),
        ]);
    }
    table
}

pub fn batch_summary(summary: &BatchSummary) -> Table {
    let mut table = base_table(vec!["Samples", "Min (%)", "Mean (%)", "Max (%)", "Std dev"]);
    table.add_row(vec![
        number(summary.count),
        percent(summary.min),
        percent(summary.mean),
        percent(summary.max),
        number(format!("{:.4}", summary.std_dev)),
    ]);
    table
}
