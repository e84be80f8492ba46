//! Demo state for the Logic category: sorting, grouping, concatenation,
//! index lookups, and quantile markers.

/// Fixed array for the argmax/argsort scene, with its literal answers.
pub const INDEX_ARRAY: [u32; 5] = [10, 50, 20, 80, 30];
pub const ARGMAX_INDEX: usize = 3;
pub const ARGSORT_ASC: [usize; 5] = [0, 2, 4, 1, 3];

/// Sorted array under the quantile markers. The marker offsets are
/// relative positions over the drawn span, not derived from the values.
pub const QUANTILE_DATA: [u32; 8] = [10, 20, 30, 40, 50, 60, 70, 80];
pub const QUANTILE_OFFSETS: [f32; 3] = [0.25, 0.50, 0.75];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRow {
    pub key: &'static str,
    pub value: u32,
}

const SEED_SORT_ROWS: [SortRow; 4] = [
    SortRow { key: "a", value: 45 },
    SortRow { key: "b", value: 90 },
    SortRow { key: "c", value: 12 },
    SortRow { key: "d", value: 67 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRow {
    pub id: u32,
    pub group: &'static str,
    pub value: u32,
}

/// Rows for the grouping scene.
pub const GROUP_ROWS: [GroupRow; 5] = [
    GroupRow { id: 1, group: "A", value: 10 },
    GroupRow { id: 2, group: "B", value: 20 },
    GroupRow { id: 3, group: "A", value: 15 },
    GroupRow { id: 4, group: "B", value: 25 },
    GroupRow { id: 5, group: "C", value: 5 },
];

/// One sum per group, in first-appearance order.
pub fn group_sums() -> Vec<(&'static str, u32)> {
    let mut sums: Vec<(&'static str, u32)> = Vec::new();
    for row in &GROUP_ROWS {
        match sums.iter_mut().find(|(group, _)| *group == row.group) {
            Some((_, sum)) => *sum += row.value,
            None => sums.push((row.group, row.value)),
        }
    }
    sums
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    GroupBy,
    SortValues,
    Concat,
    ArgmaxArgsort,
    Quantile,
}

impl LogicOp {
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        match id {
            "groupby" => Some(LogicOp::GroupBy),
            "sort_values" => Some(LogicOp::SortValues),
            "concat" => Some(LogicOp::Concat),
            "argmax_argsort" => Some(LogicOp::ArgmaxArgsort),
            "quantile" => Some(LogicOp::Quantile),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicDemo {
    op: LogicOp,
    pub rows: Vec<SortRow>,
    pub grouped: bool,
    pub concatenated: bool,
    /// Independent overlays for the argmax/argsort scene: either, both,
    /// or neither may be active.
    pub argmax_on: bool,
    pub argsort_on: bool,
    pub quantiles_shown: bool,
}

impl LogicDemo {
    pub fn new(op: LogicOp) -> Self {
        Self {
            op,
            rows: SEED_SORT_ROWS.to_vec(),
            grouped: false,
            concatenated: false,
            argmax_on: false,
            argsort_on: false,
            quantiles_shown: false,
        }
    }

    pub fn op(&self) -> LogicOp {
        self.op
    }

    /// Stable descending sort by value; idempotent.
    pub fn sort_descending(&mut self) {
        self.rows.sort_by(|a, b| b.value.cmp(&a.value));
    }

    pub fn toggle_grouped(&mut self) {
        self.grouped = !self.grouped;
    }

    pub fn toggle_concatenated(&mut self) {
        self.concatenated = !self.concatenated;
    }

    pub fn toggle_argmax(&mut self) {
        self.argmax_on = !self.argmax_on;
    }

    pub fn toggle_argsort(&mut self) {
        self.argsort_on = !self.argsort_on;
    }

    pub fn toggle_quantiles(&mut self) {
        self.quantiles_shown = !self.quantiles_shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_descending() {
        let mut demo = LogicDemo::new(LogicOp::SortValues);
        demo.sort_descending();

        let values: Vec<_> = demo.rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![90, 67, 45, 12]);
        let keys: Vec<_> = demo.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut demo = LogicDemo::new(LogicOp::SortValues);
        demo.sort_descending();
        let once = demo.rows.clone();
        demo.sort_descending();
        assert_eq!(demo.rows, once);
    }

    #[test]
    fn test_group_sums_in_first_appearance_order() {
        assert_eq!(group_sums(), vec![("A", 25), ("B", 45), ("C", 5)]);
    }

    #[test]
    fn test_argmax_and_argsort_are_independent() {
        let mut demo = LogicDemo::new(LogicOp::ArgmaxArgsort);

        demo.toggle_argmax();
        assert!(demo.argmax_on && !demo.argsort_on);

        demo.toggle_argsort();
        assert!(demo.argmax_on && demo.argsort_on);

        demo.toggle_argmax();
        assert!(!demo.argmax_on && demo.argsort_on);
    }

    #[test]
    fn test_argsort_fixture_matches_argmax_fixture() {
        // The literal answers stay consistent with the literal array.
        assert_eq!(ARGSORT_ASC[ARGSORT_ASC.len() - 1], ARGMAX_INDEX);
        assert_eq!(
            INDEX_ARRAY[ARGMAX_INDEX],
            *INDEX_ARRAY.iter().max().unwrap()
        );
    }

    #[test]
    fn test_quantile_offsets_are_positional() {
        assert_eq!(QUANTILE_OFFSETS.len(), 3);
        assert_eq!(QUANTILE_OFFSETS, [0.25, 0.50, 0.75]);
    }

    #[test]
    fn test_toggles_round_trip() {
        let mut demo = LogicDemo::new(LogicOp::GroupBy);
        let seed = demo.clone();

        demo.toggle_grouped();
        demo.toggle_concatenated();
        demo.toggle_quantiles();
        demo.toggle_grouped();
        demo.toggle_concatenated();
        demo.toggle_quantiles();
        assert_eq!(demo, seed);
    }
}
