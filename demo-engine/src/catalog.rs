//! The operation catalog: an immutable, ordered registry of every
//! operation the lab can visualize, grouped into five fixed categories.
//!
//! Lookup is total. An unknown id resolves to the catalog's first entry,
//! which is also the operation selected at startup.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Cleaning,
    Slicing,
    Engineering,
    Logic,
    Training,
}

impl Category {
    /// Canonical display order for the sidebar.
    pub const ALL: [Category; 5] = [
        Category::Cleaning,
        Category::Slicing,
        Category::Engineering,
        Category::Logic,
        Category::Training,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleaning => "Cleaning",
            Category::Slicing => "Slicing",
            Category::Engineering => "Engineering",
            Category::Logic => "Logic",
            Category::Training => "Training",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// One-line caption shown under the canvas title.
    pub description: &'static str,
    /// Longer prose explaining the operation's real-world effect.
    pub purpose: &'static str,
    /// Literal prototype shown verbatim in the info panel.
    pub code_sample: &'static str,
}

pub fn all() -> &'static [OperationDefinition] {
    CATALOG
}

/// The operation active at startup.
pub fn default_operation() -> &'static OperationDefinition {
    &CATALOG[0]
}

/// Total lookup: unknown ids fall back to the catalog's first entry.
pub fn lookup(id: &str) -> &'static OperationDefinition {
    CATALOG.iter().find(|op| op.id == id).unwrap_or(&CATALOG[0])
}

pub fn in_category(category: Category) -> impl Iterator<Item = &'static OperationDefinition> {
    CATALOG.iter().filter(move |op| op.category == category)
}

/// Checks the catalog content contract: non-empty catalog, unique ids,
/// non-empty fields. Exercised by tests and the dump binary; the
/// interactive app never needs it because the shipped catalog is static.
pub fn validate() -> Result<()> {
    validate_entries(CATALOG)
}

pub(crate) fn validate_entries(entries: &[OperationDefinition]) -> Result<()> {
    if entries.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for op in entries {
        let fields = [
            ("id", op.id),
            ("name", op.name),
            ("description", op.description),
            ("purpose", op.purpose),
            ("code_sample", op.code_sample),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(Error::EmptyField { id: op.id.to_string(), field });
            }
        }
        if !seen.insert(op.id) {
            return Err(Error::DuplicateId(op.id.to_string()));
        }
    }
    Ok(())
}

static CATALOG: &[OperationDefinition] = &[
    // Cleaning
    OperationDefinition {
        id: "read_csv",
        name: "pd.read_csv",
        category: Category::Cleaning,
        description: "A file icon unfolds into a table.",
        purpose: "Reads a raw data file (such as a CSV) and turns it into a \
                  structured DataFrame.",
        code_sample: "df = pd.read_csv('data.csv')",
    },
    OperationDefinition {
        id: "drop_duplicates",
        name: "drop_duplicates",
        category: Category::Cleaning,
        description: "Duplicate rows shatter and disappear.",
        purpose: "Removes duplicate records so that each entity appears exactly \
                  once in the dataset.",
        code_sample: "df.drop_duplicates(subset=['id'], keep='first')",
    },
    OperationDefinition {
        id: "fillna",
        name: "fillna",
        category: Category::Cleaning,
        description: "Glowing patches fly in and plug the holes.",
        purpose: "Fills missing values with a chosen constant (such as 0 or the \
                  mean) to keep the data complete.",
        code_sample: "df.fillna(value=0, inplace=True)",
    },
    OperationDefinition {
        id: "isnull",
        name: "isnull",
        category: Category::Cleaning,
        description: "A scanner highlights the empty holes.",
        purpose: "Detects and flags missing values (NaN) to expose data quality \
                  problems, without changing the data itself.",
        code_sample: "df.isnull()",
    },
    OperationDefinition {
        id: "dropna",
        name: "dropna",
        category: Category::Cleaning,
        description: "Rows with holes fall off the screen.",
        purpose: "Drops rows or columns that contain missing values, keeping only \
                  complete records.",
        code_sample: "df.dropna(axis=0)",
    },
    OperationDefinition {
        id: "to_numeric",
        name: "to_numeric",
        category: Category::Cleaning,
        description: "Non-numeric text melts into NaN.",
        purpose: "Coerces a column to a numeric type; values that cannot be \
                  parsed become NaN instead of raising.",
        code_sample: "pd.to_numeric(df['col'], errors='coerce')",
    },
    OperationDefinition {
        id: "astype",
        name: "astype",
        category: Category::Cleaning,
        description: "Floats solidify into integer blocks.",
        purpose: "Converts a column to another dtype, for example float to int \
                  or string to categorical.",
        code_sample: "df['col'] = df['col'].astype(int)",
    },
    OperationDefinition {
        id: "np_array",
        name: "np.array",
        category: Category::Cleaning,
        description: "A loose list crystallizes into a tight grid.",
        purpose: "Converts a plain Python list into a high-performance NumPy \
                  array ready for scientific computing.",
        code_sample: "arr = np.array([1, 2, 3])",
    },
    OperationDefinition {
        id: "columns",
        name: "columns",
        category: Category::Cleaning,
        description: "The header row lights up and lifts away.",
        purpose: "Reads or renames the column labels of a DataFrame.",
        code_sample: "cols = df.columns",
    },
    // Slicing
    OperationDefinition {
        id: "loc_iloc",
        name: "iloc / loc",
        category: Category::Slicing,
        description: "Pick a region by position or by label.",
        purpose: "Selects a subset of the data by integer position (iloc) or by \
                  label (loc).",
        code_sample: "df.iloc[0:5] # vs df.loc['Alice']",
    },
    OperationDefinition {
        id: "query",
        name: "query / filter",
        category: Category::Slicing,
        description: "Data passes through a conditional checkpoint.",
        purpose: "Filters rows with a boolean expression, keeping only the \
                  records that satisfy the condition.",
        code_sample: "df.query('age > 18 & active == True')",
    },
    OperationDefinition {
        id: "subset",
        name: "subset (Selection)",
        category: Category::Slicing,
        description: "Columns slide together as the rest drop out.",
        purpose: "Selects a subset of columns, focusing on the features an \
                  analysis actually needs.",
        code_sample: "df[['Name', 'Age']]",
    },
    // Engineering
    OperationDefinition {
        id: "label_encoder",
        name: "LabelEncoder",
        category: Category::Engineering,
        description: "Text labels are stamped into numbers.",
        purpose: "Encodes categorical text (such as 'cat', 'dog') as \
                  machine-readable integer codes (0, 1).",
        code_sample: "le.fit_transform(df['category'])",
    },
    OperationDefinition {
        id: "minmax_scaler",
        name: "MinMaxScaler",
        category: Category::Engineering,
        description: "Bars rescale into the 0-1 range.",
        purpose: "Normalizes features into a fixed range (usually 0 to 1) so \
                  that magnitudes are comparable across features.",
        code_sample: "scaler.fit_transform(df[['values']])",
    },
    OperationDefinition {
        id: "fit_transform",
        name: "fit_transform",
        category: Category::Engineering,
        description: "A scanner measures the data, then reshapes it at once.",
        purpose: "Learns parameters from the data (mean, variance, min/max) and \
                  applies the transformation in a single step.",
        code_sample: "scaler.fit_transform(X_train)",
    },
    OperationDefinition {
        id: "fit_resample",
        name: "fit_resample",
        category: Category::Engineering,
        description: "Minority points clone themselves.",
        purpose: "Oversamples the minority class (as in SMOTE) to balance the \
                  class distribution of a dataset.",
        code_sample: "X_res, y_res = ros.fit_resample(X, y)",
    },
    OperationDefinition {
        id: "softmax",
        name: "scipy.special.softmax",
        category: Category::Engineering,
        description: "Raw value bars become probability bars.",
        purpose: "Turns raw model outputs (logits) into a probability \
                  distribution whose values sum to 1.",
        code_sample: "probs = softmax(logits)",
    },
    OperationDefinition {
        id: "apply",
        name: "apply",
        category: Category::Engineering,
        description: "A scanning beam transforms values one by one.",
        purpose: "Applies a custom function along an axis of the DataFrame for \
                  arbitrary per-element processing.",
        code_sample: "df['col'].apply(lambda x: x * 2)",
    },
    // Logic
    OperationDefinition {
        id: "groupby",
        name: "groupby",
        category: Category::Logic,
        description: "Rows cluster by key like magnets.",
        purpose: "Splits rows into groups by one or more keys, aggregates each \
                  group (sum, mean), and recombines the results.",
        code_sample: "df.groupby('dept')['salary'].mean()",
    },
    OperationDefinition {
        id: "sort_values",
        name: "sort_values",
        category: Category::Logic,
        description: "Rows race each other into order.",
        purpose: "Sorts rows by one or more columns to expose rankings and \
                  trends in the data.",
        code_sample: "df.sort_values(by='score', ascending=False)",
    },
    OperationDefinition {
        id: "concat",
        name: "concat",
        category: Category::Logic,
        description: "Two tables snap together.",
        purpose: "Concatenates DataFrames along rows (vertically) or columns \
                  (horizontally).",
        code_sample: "pd.concat([df1, df2])",
    },
    OperationDefinition {
        id: "argmax_argsort",
        name: "np.argmax / np.argsort",
        category: Category::Logic,
        description: "The peak lights up; the indices shuffle.",
        purpose: "Returns the index of the maximum value (argmax) or the index \
                  permutation that would sort the array (argsort).",
        code_sample: "idx = np.argmax(arr)",
    },
    OperationDefinition {
        id: "quantile",
        name: "quantile",
        category: Category::Logic,
        description: "Laser lines slice the sorted data.",
        purpose: "Computes distribution quantiles (25%, median, 75%) to \
                  summarize the spread of the data.",
        code_sample: "df['col'].quantile([0.25, 0.75])",
    },
    // Training
    OperationDefinition {
        id: "train_test_split",
        name: "train_test_split",
        category: Category::Training,
        description: "Scissors cut the dataset in two.",
        purpose: "Randomly splits a dataset into training and test sets so a \
                  model can be evaluated fairly.",
        code_sample: "train, test = train_test_split(df, test_size=0.2)",
    },
    OperationDefinition {
        id: "confusion_matrix",
        name: "confusion_matrix",
        category: Category::Training,
        description: "A 2x2 grid flashes hits and misses.",
        purpose: "Compares predicted labels against true labels to score a \
                  classifier (true/false positives and negatives).",
        code_sample: "confusion_matrix(y_true, y_pred)",
    },
    OperationDefinition {
        id: "predict",
        name: "predict",
        category: Category::Training,
        description: "New data enters the black box.",
        purpose: "Runs a trained model on unseen data to produce predictions.",
        code_sample: "preds = model.predict(X_new)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_id() {
        for op in all() {
            assert_eq!(lookup(op.id).id, op.id);
        }
    }

    #[test]
    fn test_lookup_unknown_falls_back_to_first() {
        assert_eq!(lookup("no_such_op").id, all()[0].id);
        assert_eq!(lookup("").id, default_operation().id);
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(default_operation().id, "read_csv");
        assert_eq!(default_operation().category, Category::Cleaning);
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_every_category_in_catalog_order() {
        for category in Category::ALL {
            let ids: Vec<_> = in_category(category).map(|op| op.id).collect();
            let expected: Vec<_> = all()
                .iter()
                .filter(|op| op.category == category)
                .map(|op| op.id)
                .collect();
            assert_eq!(ids, expected);
            assert!(!ids.is_empty(), "category {:?} has no operations", category);
        }
    }

    #[test]
    fn test_categories_cover_catalog() {
        let total: usize = Category::ALL
            .iter()
            .map(|&category| in_category(category).count())
            .sum();
        assert_eq!(total, all().len());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let mut entries = vec![all()[0].clone(), all()[1].clone()];
        entries[1].id = entries[0].id;
        match validate_entries(&entries) {
            Err(Error::DuplicateId(id)) => assert_eq!(id, entries[0].id),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let mut entries = vec![all()[0].clone()];
        entries[0].purpose = "";
        match validate_entries(&entries) {
            Err(Error::EmptyField { field, .. }) => assert_eq!(field, "purpose"),
            other => panic!("expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        match validate_entries(&[]) {
            Err(Error::EmptyCatalog) => {}
            other => panic!("expected EmptyCatalog, got {:?}", other),
        }
    }
}
