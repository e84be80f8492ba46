//! Demo state for the Slicing category: row picking, predicate filtering,
//! and column subsetting.

/// Values behind the filter scene's bars.
pub const POINTS: [u32; 8] = [10, 60, 20, 80, 90, 15, 55, 5];

/// The literal predicate the filter scene applies: `value > 50`.
pub const QUERY_THRESHOLD: u32 = 50;

/// Grid dimensions for the row-pick scene. Cell contents are decorative
/// and supplied by the UI layer.
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 3;
pub const GRID_HEADERS: [&str; 3] = ["A", "B", "C"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub keep: bool,
}

/// Columns for the subset scene, with the fixed kept set.
pub const COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec { name: "Name", keep: true },
    ColumnSpec { name: "Age", keep: true },
    ColumnSpec { name: "Garbage", keep: false },
    ColumnSpec { name: "Score", keep: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlicingOp {
    RowPick,
    Query,
    Subset,
}

impl SlicingOp {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            "loc_iloc" => Some(SlicingOp::RowPick),
            "query" => Some(SlicingOp::Query),
            "subset" => Some(SlicingOp::Subset),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicingDemo {
    op: SlicingOp,
    /// Row currently highlighted in the row-pick grid.
    pub picked_row: Option<usize>,
    /// Filter scene: predicate applied.
    pub filtered: bool,
    /// Subset scene: non-kept columns hidden.
    pub subset_only: bool,
}

impl SlicingDemo {
    pub fn new(op: SlicingOp) -> Self {
        Self {
            op,
            picked_row: None,
            filtered: false,
            subset_only: false,
        }
    }

    pub fn op(&self) -> SlicingOp {
        self.op
    }

    /// Picks a row; picking the already-picked row clears the pick. Rows
    /// outside the grid are ignored.
    pub fn pick_row(&mut self, row: usize) {
        if row >= GRID_ROWS {
            return;
        }
        self.picked_row = if self.picked_row == Some(row) {
            None
        } else {
            Some(row)
        };
    }

    pub fn toggle_filter(&mut self) {
        self.filtered = !self.filtered;
    }

    pub fn toggle_subset(&mut self) {
        self.subset_only = !self.subset_only;
    }

    /// Points surviving the current filter state, as (index, value).
    pub fn visible_points(&self) -> Vec<(usize, u32)> {
        POINTS
            .iter()
            .enumerate()
            .filter(|(_, &value)| !self.filtered || value > QUERY_THRESHOLD)
            .map(|(i, &value)| (i, value))
            .collect()
    }

    /// Columns visible in the current subset state.
    pub fn visible_columns(&self) -> Vec<ColumnSpec> {
        COLUMNS
            .iter()
            .filter(|col| !self.subset_only || col.keep)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_only_passing_points() {
        let mut demo = SlicingDemo::new(SlicingOp::Query);
        assert_eq!(demo.visible_points().len(), POINTS.len());

        demo.toggle_filter();
        let values: Vec<_> = demo.visible_points().iter().map(|&(_, v)| v).collect();
        assert_eq!(values, vec![60, 80, 90, 55]);

        demo.toggle_filter();
        assert_eq!(demo.visible_points().len(), POINTS.len());
    }

    #[test]
    fn test_subset_hides_non_kept_columns() {
        let mut demo = SlicingDemo::new(SlicingOp::Subset);
        demo.toggle_subset();

        let names: Vec<_> = demo.visible_columns().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Name", "Age", "Score"]);

        demo.toggle_subset();
        assert_eq!(demo.visible_columns().len(), COLUMNS.len());
    }

    #[test]
    fn test_pick_row_toggles_and_bounds() {
        let mut demo = SlicingDemo::new(SlicingOp::RowPick);
        demo.pick_row(2);
        assert_eq!(demo.picked_row, Some(2));
        demo.pick_row(2);
        assert_eq!(demo.picked_row, None);

        demo.pick_row(GRID_ROWS);
        assert_eq!(demo.picked_row, None);

        demo.pick_row(1);
        demo.pick_row(3);
        assert_eq!(demo.picked_row, Some(3));
    }
}
