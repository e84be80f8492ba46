//! Dumps the operation catalog as pretty-printed JSON on stdout.
//!
//! Usage:
//!   catalog_dump > catalog.json

use std::process;

use demo_engine::catalog::{self, Category, OperationDefinition};
use serde::Serialize;

#[derive(Serialize)]
struct CategoryDump {
    category: &'static str,
    operations: Vec<&'static OperationDefinition>,
}

#[derive(Serialize)]
struct CatalogDump {
    default_operation: &'static str,
    categories: Vec<CategoryDump>,
}

fn main() {
    if let Err(err) = catalog::validate() {
        eprintln!("catalog invalid: {}", err);
        process::exit(1);
    }

    let dump = CatalogDump {
        default_operation: catalog::default_operation().id,
        categories: Category::ALL
            .iter()
            .map(|&category| CategoryDump {
                category: category.label(),
                operations: catalog::in_category(category).collect(),
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&dump) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("serialization failed: {}", err);
            process::exit(1);
        }
    }
}
