//! # Catalog Commands
//!
//! Read-only access to the venue, add-on and meal catalog.

use serde::{Deserialize, Serialize};
use tracing::debug;

use planner_core::{Catalog, CatalogItem, Category};

/// One catalog section, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSection {
    pub category: Category,
    pub label: String,
    pub items: Vec<CatalogItem>,
}

/// Gets the catalog grouped by category, in display order.
pub fn get_catalog() -> Vec<CatalogSection> {
    debug!("get_catalog command");

    let catalog = Catalog::standard();
    Category::ALL
        .into_iter()
        .map(|category| CatalogSection {
            category,
            label: category.label().to_string(),
            items: catalog.items(category).to_vec(),
        })
        .collect()
}
