pub mod columns;
pub mod dataset;
pub mod format;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

pub use columns::{table_columns, table_columns_with, ColumnSet};
pub use dataset::{builtin_services, load_dataset, products, products_from, DatasetError, ServiceEntry};
pub use format::{array_text, bool_text, product_name, test_result, BoolTextOptions, Translations};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    Text(String),
    List(Vec<String>),
    Number(i64),
}

impl ColumnValue {
    /// Cell content as it is embedded into the page.
    pub fn to_html(&self) -> String {
        match self {
            ColumnValue::Text(s) => s.clone(),
            ColumnValue::List(items) => items.join(" "),
            ColumnValue::Number(n) => n.to_string(),
        }
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Number(value)
    }
}

impl From<Vec<String>> for ColumnValue {
    fn from(value: Vec<String>) -> Self {
        ColumnValue::List(value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductColumn {
    pub value: ColumnValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ProductColumn {
    pub fn new(value: impl Into<ColumnValue>) -> Self {
        Self {
            value: value.into(),
            remark: None,
            class: None,
        }
    }

    pub fn with_class(mut self, class: Option<&str>) -> Self {
        self.class = class.map(str::to_string);
        self
    }

    pub fn with_remark(mut self, remark: Option<&str>) -> Self {
        self.remark = remark.map(str::to_string);
        self
    }
}

/// One compared service, keyed by field name.
pub type Product = BTreeMap<String, ProductColumn>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub text: String,
    pub key: String,
    pub class: String,
}

/// Looks up the cell a descriptor points at. Missing keys are an empty cell, not an error.
pub fn cell<'a>(product: &'a Product, column: &TableColumn) -> Option<&'a ProductColumn> {
    product.get(&column.key)
}
