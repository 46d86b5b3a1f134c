//! Fixed-width table rendering.
//!
//! Column widths never depend on content: longer cells are truncated and
//! shorter ones padded.

use crate::record::TrainRecord;

/// Line printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "The list of trains is empty.";

const INDEX_WIDTH: usize = 4;
const POINT_WIDTH: usize = 30;
const NUMBER_WIDTH: usize = 13;
const TIME_WIDTH: usize = 18;
const DESTINATION_WIDTH: usize = 16;

const HEADERS: [&str; 5] = [
    "№",
    "Departure point",
    "Train number",
    "Departure time",
    "Destination",
];

/// Pair each record with its 1-based position.
pub fn indexed<'a, I>(records: I) -> impl Iterator<Item = (usize, &'a TrainRecord)>
where
    I: IntoIterator<Item = &'a TrainRecord>,
{
    records.into_iter().enumerate().map(|(i, record)| (i + 1, record))
}

/// Render indexed records as a table.
///
/// Returns [`EMPTY_MESSAGE`] followed by a newline when `rows` is empty.
pub fn render<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (usize, &'a TrainRecord)>,
{
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let line = separator();
    let mut out = String::new();
    out.push_str(&line);
    out.push_str(&header());
    out.push_str(&line);
    for (index, record) in rows {
        out.push_str(&row(index, record));
    }
    out.push_str(&line);
    out
}

fn separator() -> String {
    let cells: Vec<String> = [
        INDEX_WIDTH,
        POINT_WIDTH,
        NUMBER_WIDTH,
        TIME_WIDTH,
        DESTINATION_WIDTH,
    ]
    .iter()
    .map(|width| "-".repeat(width + 2))
    .collect();
    format!("+{}+\n", cells.join("+"))
}

fn header() -> String {
    let [index, point, number, time, destination] = HEADERS;
    format!(
        "| {index:^INDEX_WIDTH$.INDEX_WIDTH$} | {point:^POINT_WIDTH$.POINT_WIDTH$} | \
         {number:^NUMBER_WIDTH$.NUMBER_WIDTH$} | {time:^TIME_WIDTH$.TIME_WIDTH$} | \
         {destination:^DESTINATION_WIDTH$.DESTINATION_WIDTH$} |\n"
    )
}

fn row(index: usize, record: &TrainRecord) -> String {
    // Index cells are truncated too, so a huge index cannot widen the table.
    let index = index.to_string();
    format!(
        "| {index:>INDEX_WIDTH$.INDEX_WIDTH$} | {:<POINT_WIDTH$.POINT_WIDTH$} | \
         {:<NUMBER_WIDTH$.NUMBER_WIDTH$} | {:>TIME_WIDTH$.TIME_WIDTH$} | \
         {:^DESTINATION_WIDTH$.DESTINATION_WIDTH$} |\n",
        record.departure_point, record.number_train, record.time_departure, record.destination,
    )
}
