//! Collapsed table borders on a flex layout engine
//!
//! The layout engine has no table model, so tables are emulated with flex
//! containers (a column of rows, each a row of cells) and every cell draws
//! its own border box. Adjacent cells would then draw shared edges twice.
//! [`TableGrid`] walks the cells in row-major order and lets the first cell
//! to reach an edge draw it; the neighbor drops its side of the edge and
//! pulls itself over the drawn one with a negative margin.
//!
//! This mirrors [§ 17.6.2 The collapsing border model](https://www.w3.org/TR/CSS2/tables.html#collapsing-borders)
//! with "first visitor wins" in place of the width/style conflict rules.

use std::collections::HashMap;

use folio_common::warning::warn_once;
use serde::Serialize;

use crate::style::{ResolvedStyle, Side, StyleKey, StyleValue};

/// Options fixed for the whole table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    /// Start from [`default_table_style`].
    pub use_default_style: bool,
    /// Style applied to every row and cell, over the default style.
    pub table_style: Option<ResolvedStyle>,
}

/// Counts gathered while walking a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    /// Rows seen.
    pub rows: usize,
    /// Widest row seen, in cells.
    pub cols: usize,
    /// Cell edges drawn.
    pub drawn_edges: usize,
    /// Cell edges suppressed because the neighbor already drew them.
    pub collapsed_edges: usize,
}

/// Who owns one edge of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct EdgeClaim {
    /// The cell draws this edge.
    drawn: bool,
    /// Width it is drawn with, in points.
    width: f64,
}

/// Border bookkeeping for one table. Coordinates are 0-based.
///
/// Rows and cells must be visited in row-major order: [`TableGrid::begin_row`]
/// before the cells of each row, [`TableGrid::begin_cell`] once per cell.
#[derive(Debug, Clone, Default)]
pub struct TableGrid {
    default_style: ResolvedStyle,
    row: Option<usize>,
    col: Option<usize>,
    rows: usize,
    cols: usize,
    borders: HashMap<(usize, usize, Side), EdgeClaim>,
}

impl TableGrid {
    /// Start a table.
    #[must_use]
    pub fn new(opts: TableOptions) -> Self {
        let mut default_style = if opts.use_default_style {
            default_table_style()
        } else {
            ResolvedStyle::new()
        };
        if let Some(table_style) = opts.table_style {
            default_style.merge(&table_style);
        }
        Self {
            default_style,
            ..Self::default()
        }
    }

    /// The style every row and cell starts from.
    #[must_use]
    pub const fn default_style(&self) -> &ResolvedStyle {
        &self.default_style
    }

    /// Current row, if one has begun.
    #[must_use]
    pub const fn current_row(&self) -> Option<usize> {
        self.row
    }

    /// Current cell within the row, if one has begun.
    #[must_use]
    pub const fn current_col(&self) -> Option<usize> {
        self.col
    }

    /// Style of the table container: the default style, then `style`, then
    /// the flex layout, with the container's own borders off.
    #[must_use]
    pub fn table_style(&self, style: &ResolvedStyle) -> ResolvedStyle {
        let mut table = self.default_style.clone().merged(style).merged(&table_layout_style());
        zero_border_widths(&mut table);
        table
    }

    /// Move to the next row and return its style.
    ///
    /// Rows never draw borders: every `border*` key is dropped and all four
    /// widths are forced to 0 before the flex layout is applied.
    pub fn begin_row(&mut self, row_style: &ResolvedStyle) -> ResolvedStyle {
        let row = self.row.map_or(0, |row| row + 1);
        self.row = Some(row);
        self.col = None;
        self.rows = self.rows.max(row + 1);

        let mut style = self.default_style.clone().merged(row_style);
        style.retain(|key, _| !key.is_border());
        zero_border_widths(&mut style);
        style.merged(&row_layout_style())
    }

    /// Move to the next cell and return its border delta: the border and
    /// margin keys to lay over the cell's style.
    ///
    /// For each side, if the neighbor across it already draws the shared
    /// edge, this side gets width 0 and a negative margin of the neighbor's
    /// width. Otherwise this cell draws the side with its own width, color
    /// and style (or the `borderWidth`/`borderColor`/`borderStyle` fallback)
    /// and claims the edge. A cell with no width for a side claims nothing.
    pub fn begin_cell(&mut self, cell_style: &ResolvedStyle) -> ResolvedStyle {
        let row = self.row.unwrap_or_else(|| {
            warn_once("table", "cell outside a row, starting row 0");
            self.rows = self.rows.max(1);
            0
        });
        self.row = Some(row);
        let col = self.col.map_or(0, |col| col + 1);
        self.col = Some(col);
        self.cols = self.cols.max(col + 1);

        let base = self.default_style.clone().merged(cell_style);
        let mut delta = ResolvedStyle::new();
        for side in Side::ALL {
            if let Some(claim) = self.neighbor_claim(row, col, side) {
                let _ = delta.insert(side.border_width(), 0);
                let margin = if claim.width.abs() < f64::EPSILON { 0.0 } else { -claim.width };
                let _ = delta.insert(side.margin(), margin);
                let _ = self.borders.insert((row, col, side), EdgeClaim { drawn: false, width: 0.0 });
                continue;
            }

            let Some(width) = side_value(&base, side.border_width(), StyleKey::BorderWidth) else {
                continue;
            };
            let _ = self.borders.insert(
                (row, col, side),
                EdgeClaim {
                    drawn: true,
                    width: width.as_number().unwrap_or_default(),
                },
            );
            let _ = delta.insert(side.border_width(), width);
            if let Some(color) = side_value(&base, side.border_color(), StyleKey::BorderColor) {
                let _ = delta.insert(side.border_color(), color);
            }
            if let Some(style) = side_value(&base, side.border_style(), StyleKey::BorderStyle) {
                let _ = delta.insert(side.border_style(), style);
            }
        }
        delta
    }

    /// Full style of the current cell: the default style, then `cell_style`,
    /// then the flex layout, then `delta` from [`TableGrid::begin_cell`].
    #[must_use]
    pub fn cell_style(&self, cell_style: &ResolvedStyle, delta: &ResolvedStyle) -> ResolvedStyle {
        self.default_style
            .clone()
            .merged(cell_style)
            .merged(&cell_layout_style())
            .merged(delta)
    }

    /// Finish the table.
    #[must_use]
    pub fn end_table(self) -> TableSummary {
        let (drawn, collapsed): (Vec<EdgeClaim>, Vec<EdgeClaim>) =
            self.borders.into_values().partition(|claim| claim.drawn);
        TableSummary {
            rows: self.rows,
            cols: self.cols,
            drawn_edges: drawn.len(),
            collapsed_edges: collapsed.len(),
        }
    }

    /// The drawn claim on the edge facing `side` of cell (`row`, `col`).
    fn neighbor_claim(&self, row: usize, col: usize, side: Side) -> Option<EdgeClaim> {
        let (row, col) = match side {
            Side::Top => (row.checked_sub(1)?, col),
            Side::Right => (row, col + 1),
            Side::Bottom => (row + 1, col),
            Side::Left => (row, col.checked_sub(1)?),
        };
        self.borders
            .get(&(row, col, side.opposite()))
            .copied()
            .filter(|claim| claim.drawn)
    }
}

fn side_value(style: &ResolvedStyle, key: StyleKey, fallback: StyleKey) -> Option<StyleValue> {
    style.get(key).or_else(|| style.get(fallback)).cloned()
}

fn zero_border_widths(style: &mut ResolvedStyle) {
    let _ = style.remove(StyleKey::BorderWidth);
    for side in Side::ALL {
        let _ = style.insert(side.border_width(), 0);
    }
}

fn padding(all: f64) -> [(StyleKey, StyleValue); 4] {
    [
        (StyleKey::PaddingTop, StyleValue::Number(all)),
        (StyleKey::PaddingRight, StyleValue::Number(all)),
        (StyleKey::PaddingBottom, StyleValue::Number(all)),
        (StyleKey::PaddingLeft, StyleValue::Number(all)),
    ]
}

fn margin(all: f64) -> [(StyleKey, StyleValue); 4] {
    Side::ALL.map(|side| (side.margin(), StyleValue::Number(all)))
}

/// Style tables start from with [`TableOptions::use_default_style`]: solid
/// black 1pt borders and 5pt padding, contents at the top left.
#[must_use]
pub fn default_table_style() -> ResolvedStyle {
    let mut style: ResolvedStyle = [
        (StyleKey::TextAlign, StyleValue::from("left")),
        (StyleKey::JustifyContent, StyleValue::from("flex-start")),
        (StyleKey::AlignItems, StyleValue::from("flex-start")),
    ]
    .into_iter()
    .chain(padding(5.0))
    .collect();
    for side in Side::ALL {
        let _ = style.insert(side.border_style(), "solid");
        let _ = style.insert(side.border_width(), 1);
        let _ = style.insert(side.border_color(), "#000000");
    }
    style
}

/// Flex layout of the table container: a full-width column of rows.
#[must_use]
pub fn table_layout_style() -> ResolvedStyle {
    [
        (StyleKey::Display, StyleValue::from("flex")),
        (StyleKey::FlexDirection, StyleValue::from("column")),
        (StyleKey::JustifyContent, StyleValue::from("flex-start")),
        (StyleKey::AlignItems, StyleValue::from("flex-start")),
        (StyleKey::Width, StyleValue::from("100%")),
    ]
    .into_iter()
    .chain(padding(1.0))
    .collect()
}

/// Flex layout of a row: a full-width, wrapping row of cells.
#[must_use]
pub fn row_layout_style() -> ResolvedStyle {
    [
        (StyleKey::Display, StyleValue::from("flex")),
        (StyleKey::FlexDirection, StyleValue::from("row")),
        (StyleKey::Width, StyleValue::from("100%")),
        (StyleKey::Height, StyleValue::from("auto")),
        (StyleKey::JustifyContent, StyleValue::from("flex-start")),
        (StyleKey::AlignItems, StyleValue::from("flex-start")),
        (StyleKey::FlexGrow, StyleValue::from(1)),
        (StyleKey::FlexWrap, StyleValue::from("wrap")),
    ]
    .into_iter()
    .chain(margin(0.0))
    .chain(padding(0.0))
    .collect()
}

/// Flex layout of a cell: an equal share of the row.
#[must_use]
pub fn cell_layout_style() -> ResolvedStyle {
    [
        (StyleKey::Display, StyleValue::from("flex")),
        (StyleKey::FlexDirection, StyleValue::from("column")),
        (StyleKey::JustifyContent, StyleValue::from("flex-start")),
        (StyleKey::AlignItems, StyleValue::from("flex-start")),
        (StyleKey::FlexGrow, StyleValue::from(1)),
        (StyleKey::FlexShrink, StyleValue::from(0)),
        (StyleKey::FlexBasis, StyleValue::from(0)),
        (StyleKey::Width, StyleValue::from("100%")),
        (StyleKey::Height, StyleValue::from("100%")),
        (StyleKey::PaddingTop, StyleValue::from(2)),
        (StyleKey::PaddingBottom, StyleValue::from(2)),
    ]
    .into_iter()
    .chain(margin(0.0))
    .collect()
}
