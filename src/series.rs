//! Pure dataset-to-series construction, decoupled from any plot widget.
//!
//! Both apps render CSV data through the same [`build_series`] function: each
//! of the first five columns becomes one descriptor, drawn as a line plus a
//! scatter overlay with the column's positional marker.

use egui::Color32;
use egui_plot::MarkerShape;

use crate::dataset::Dataset;

/// Positional marker cycle: square, plus, triangle, plus, square.
///
/// The cycle is zipped against the column list, so columns beyond the fifth
/// produce no series at all (no wraparound).
pub const MARKER_CYCLE: [MarkerShape; 5] = [
    MarkerShape::Square,
    MarkerShape::Plus,
    MarkerShape::Up,
    MarkerShape::Plus,
    MarkerShape::Square,
];

// Matplotlib-style default cycle, one colour per column position.
const SERIES_PALETTE: [Color32; 5] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
];

/// One drawable series: a line over `(row index, value)` points plus a
/// scatter overlay using `marker`.
#[derive(Debug, Clone)]
pub struct SeriesDesc {
    /// Column name; keys the plot legend.
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub marker: MarkerShape,
}

/// Build one [`SeriesDesc`] per column for the first `min(5, columns)`
/// columns of `dataset`, in column order.
pub fn build_series(dataset: &Dataset) -> Vec<SeriesDesc> {
    dataset
        .columns()
        .iter()
        .zip(MARKER_CYCLE)
        .enumerate()
        .map(|(i, (column, marker))| SeriesDesc {
            name: column.name.clone(),
            points: column
                .values
                .iter()
                .enumerate()
                .map(|(row, &value)| [row as f64, value])
                .collect(),
            color: SERIES_PALETTE[i],
            marker,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn points_are_indexed_by_row() {
        let ds = Dataset::from_reader(Cursor::new("v\n10\n20\n30\n")).unwrap();
        let series = build_series(&ds);
        assert_eq!(series[0].points, vec![[0.0, 10.0], [1.0, 20.0], [2.0, 30.0]]);
    }
}
