use chrono_tz::Tz;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use spotwindow::{
    core::{HourWindow, NormalizedPricePoint, PriceSeries},
    error::FormattedDuration,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_series_table(
    series: &PriceSeries,
    points: &[NormalizedPricePoint],
    include_tax: bool,
    time_zone: Tz,
) -> Table {
    let midpoint = (series.min_price() + series.max_price()) / 2.0;

    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Price", "With tax", "Rate"]);
    for point in points {
        let start_time = point.start_time.with_timezone(&time_zone);
        let price_cell = Cell::new(point.price).set_alignment(CellAlignment::Right).fg(
            if point.price <= midpoint { Color::Green } else { Color::Red },
        );
        let price_cell = if point.price == series.min_price() || point.price == series.max_price() {
            price_cell.add_attribute(Attribute::Bold)
        } else {
            price_cell
        };
        table.add_row(vec![
            Cell::new(start_time.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(start_time.format("%H:%M")),
            Cell::new(point.end_time.with_timezone(&time_zone).format("%H:%M"))
                .add_attribute(Attribute::Dim),
            price_cell,
            Cell::new(point.price_with_tax).set_alignment(CellAlignment::Right),
            Cell::new(series.rate(point, include_tax)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_window_table(
    window: &HourWindow,
    series: &PriceSeries,
    include_tax: bool,
    time_zone: Tz,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Rate", "Usage", "Cost"]);
    for point in &window.associated_price_points {
        let Some(overlap) = point.interval().intersection(window.interval()) else {
            continue;
        };
        let is_partial = overlap != point.interval();
        let rate = series.rate(point, include_tax);
        let start_time = overlap.start.with_timezone(&time_zone);
        table.add_row(vec![
            Cell::new(start_time.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(start_time.format("%H:%M")),
            Cell::new(overlap.end.with_timezone(&time_zone).format("%H:%M"))
                .add_attribute(Attribute::Dim),
            Cell::new(rate).set_alignment(CellAlignment::Right),
            Cell::new(FormattedDuration(overlap.len()))
                .set_alignment(CellAlignment::Right)
                .fg(if is_partial { Color::DarkYellow } else { Color::Reset }),
            Cell::new(rate * overlap.len()).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(window.average_rate()).set_alignment(CellAlignment::Right),
        Cell::new(FormattedDuration(window.duration())).set_alignment(CellAlignment::Right),
        Cell::new(window.total_cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}
