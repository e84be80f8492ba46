//! Demo state for the Cleaning category.
//!
//! One machine covers all nine cleaning operations. Every scene's seed
//! data lives in the struct so a rebuild restores every scene at once;
//! which scene is drawn is decided by `op()`.

use std::collections::HashSet;

/// Floats shown by the `astype` scene, and their fixed int renditions.
pub const FLOAT_VALUES: [f64; 3] = [12.99, 45.50, 7.01];
pub const INT_VALUES: [i64; 3] = [12, 45, 7];

/// Elements shown by the `np_array` scene.
pub const ARRAY_VALUES: [i64; 3] = [1, 2, 3];

/// Header labels lifted out by the `columns` scene.
pub const HEADER_LABELS: [&str; 3] = ["Name", "Age", "City"];

/// Value filled into null rows by `fillna`.
pub const FILL_VALUE: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningOp {
    ReadCsv,
    DropDuplicates,
    FillNa,
    IsNull,
    DropNa,
    ToNumeric,
    AsType,
    NpArray,
    Columns,
}

impl CleaningOp {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            "read_csv" => Some(CleaningOp::ReadCsv),
            "drop_duplicates" => Some(CleaningOp::DropDuplicates),
            "fillna" => Some(CleaningOp::FillNa),
            "isnull" => Some(CleaningOp::IsNull),
            "dropna" => Some(CleaningOp::DropNa),
            "to_numeric" => Some(CleaningOp::ToNumeric),
            "astype" => Some(CleaningOp::AsType),
            "np_array" => Some(CleaningOp::NpArray),
            "columns" => Some(CleaningOp::Columns),
            _ => None,
        }
    }
}

/// A labeled row for the duplicate-removal scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledRow {
    pub id: u32,
    pub label: &'static str,
}

/// A row for the null-handling scenes. `filled` marks rows whose value was
/// supplied by `fillna`, so they render distinct from originally non-null
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullableRow {
    pub id: u32,
    pub value: Option<i64>,
    pub filled: bool,
}

/// A cell for the `to_numeric` scene. `nan` is set when coercion has
/// replaced an unparsable value with the NaN marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedCell {
    pub id: u32,
    pub raw: &'static str,
    pub nan: bool,
}

impl MixedCell {
    pub fn parses(&self) -> bool {
        self.raw.parse::<i64>().is_ok()
    }

    pub fn display(&self) -> &'static str {
        if self.nan {
            "NaN"
        } else {
            self.raw
        }
    }
}

const SEED_LABELED: [LabeledRow; 4] = [
    LabeledRow { id: 1, label: "Alice" },
    LabeledRow { id: 2, label: "Bob" },
    LabeledRow { id: 3, label: "Alice" },
    LabeledRow { id: 4, label: "Charlie" },
];

const SEED_NULLABLE: [NullableRow; 4] = [
    NullableRow { id: 1, value: Some(100), filled: false },
    NullableRow { id: 2, value: None, filled: false },
    NullableRow { id: 3, value: Some(300), filled: false },
    NullableRow { id: 4, value: None, filled: false },
];

const SEED_CELLS: [MixedCell; 3] = [
    MixedCell { id: 1, raw: "123", nan: false },
    MixedCell { id: 2, raw: "abc", nan: false },
    MixedCell { id: 3, raw: "456", nan: false },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CleaningDemo {
    op: CleaningOp,
    /// `read_csv`: file icon expanded into the table. One-shot per mount.
    pub csv_expanded: bool,
    pub rows: Vec<LabeledRow>,
    pub nullable: Vec<NullableRow>,
    pub cells: Vec<MixedCell>,
    pub cast_to_int: bool,
    pub as_array: bool,
    pub headers_lifted: bool,
}

impl CleaningDemo {
    pub fn new(op: CleaningOp) -> Self {
        Self {
            op,
            csv_expanded: false,
            rows: SEED_LABELED.to_vec(),
            nullable: SEED_NULLABLE.to_vec(),
            cells: SEED_CELLS.to_vec(),
            cast_to_int: false,
            as_array: false,
            headers_lifted: false,
        }
    }

    pub fn op(&self) -> CleaningOp {
        self.op
    }

    pub fn expand_csv(&mut self) {
        self.csv_expanded = true;
    }

    /// Removes later-occurring duplicates, keeping the first row with each
    /// label. Irreversible within the mount.
    pub fn drop_duplicates(&mut self) {
        let mut seen = HashSet::new();
        self.rows.retain(|row| seen.insert(row.label));
    }

    /// Replaces every null with the literal fill value and marks the row.
    pub fn fill_nulls(&mut self) {
        for row in &mut self.nullable {
            if row.value.is_none() {
                row.value = Some(FILL_VALUE);
                row.filled = true;
            }
        }
    }

    /// Removes every null row. Irreversible within the mount.
    pub fn drop_nulls(&mut self) {
        self.nullable.retain(|row| row.value.is_some());
    }

    /// Side-effect-free null detection: one flag per row, in row order.
    pub fn null_flags(&self) -> Vec<bool> {
        self.nullable.iter().map(|row| row.value.is_none()).collect()
    }

    /// Coerces to numeric: cells that fail to parse become NaN, parseable
    /// cells are left untouched.
    pub fn coerce_numeric(&mut self) {
        for cell in &mut self.cells {
            if !cell.parses() {
                cell.nan = true;
            }
        }
    }

    pub fn toggle_cast(&mut self) {
        self.cast_to_int = !self.cast_to_int;
    }

    pub fn toggle_array(&mut self) {
        self.as_array = !self.as_array;
    }

    pub fn toggle_headers(&mut self) {
        self.headers_lifted = !self.headers_lifted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_duplicates_removes_later_occurrence_only() {
        let mut demo = CleaningDemo::new(CleaningOp::DropDuplicates);
        demo.drop_duplicates();

        let ids: Vec<_> = demo.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        let labels: Vec<_> = demo.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_drop_duplicates_is_idempotent() {
        let mut demo = CleaningDemo::new(CleaningOp::DropDuplicates);
        demo.drop_duplicates();
        let once = demo.rows.clone();
        demo.drop_duplicates();
        assert_eq!(demo.rows, once);
    }

    #[test]
    fn test_fill_nulls_marks_only_originally_null_rows() {
        let mut demo = CleaningDemo::new(CleaningOp::FillNa);
        demo.fill_nulls();

        let values: Vec<_> = demo.nullable.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![Some(100), Some(0), Some(300), Some(0)]);
        let filled: Vec<_> = demo.nullable.iter().map(|r| r.filled).collect();
        assert_eq!(filled, vec![false, true, false, true]);
    }

    #[test]
    fn test_drop_nulls_keeps_complete_rows() {
        let mut demo = CleaningDemo::new(CleaningOp::DropNa);
        demo.drop_nulls();

        let values: Vec<_> = demo.nullable.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![Some(100), Some(300)]);
    }

    #[test]
    fn test_null_detection_mutates_nothing() {
        let demo = CleaningDemo::new(CleaningOp::IsNull);
        let before = demo.clone();

        assert_eq!(demo.null_flags(), vec![false, true, false, true]);
        assert_eq!(demo, before);
    }

    #[test]
    fn test_coerce_numeric_hits_only_unparsable_cells() {
        let mut demo = CleaningDemo::new(CleaningOp::ToNumeric);
        demo.coerce_numeric();

        let displays: Vec<_> = demo.cells.iter().map(|c| c.display()).collect();
        assert_eq!(displays, vec!["123", "NaN", "456"]);
    }

    #[test]
    fn test_reversible_toggles_round_trip() {
        let mut demo = CleaningDemo::new(CleaningOp::AsType);
        let seed = demo.clone();

        demo.toggle_cast();
        assert!(demo.cast_to_int);
        demo.toggle_cast();
        assert_eq!(demo, seed);

        demo.toggle_array();
        demo.toggle_headers();
        demo.toggle_array();
        demo.toggle_headers();
        assert_eq!(demo, seed);
    }

    #[test]
    fn test_expand_csv_is_one_way() {
        let mut demo = CleaningDemo::new(CleaningOp::ReadCsv);
        assert!(!demo.csv_expanded);
        demo.expand_csv();
        demo.expand_csv();
        assert!(demo.csv_expanded);
    }
}
