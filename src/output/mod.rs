pub mod report;

use regex::Regex;
use serde::Serialize;

use crate::product::{cell, Product, TableColumn};

pub use report::{render_page, PageOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct TableDocument<'a> {
    pub lang: &'a str,
    pub columns: &'a [TableColumn],
    pub products: &'a [Product],
}

pub fn render_json(doc: &TableDocument<'_>) -> Vec<u8> {
    let mut out = serde_json::to_vec_pretty(doc).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

pub fn tag_pattern() -> Regex {
    Regex::new(r"<[^>]*>").unwrap()
}

/// Cell markup reduced to its visible text.
pub fn strip_tags(tags: &Regex, html: &str) -> String {
    let text = tags.replace_all(html, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render_text(columns: &[TableColumn], products: &[Product]) -> Vec<u8> {
    let tags = tag_pattern();
    let mut out = String::new();
    let header = columns
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&header);
    out.push('\n');
    for product in products {
        let row = columns
            .iter()
            .map(|c| {
                cell(product, c)
                    .map(|col| strip_tags(&tags, &col.value.to_html()))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(&row);
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_html(columns: &[TableColumn], products: &[Product], options: &PageOptions) -> Vec<u8> {
    report::render_page(columns, products, options).into_bytes()
}
