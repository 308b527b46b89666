use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::i18n::Translate;

use super::format::{array_text, bool_text, product_name, test_result, BoolTextOptions};
use super::{Product, ProductColumn};

const COMMON_REMARK: &str =
    "You may not be able to use it if you use it continuously, so you can try it several times";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("dataset has no services: {path}")]
    Empty { path: String },

    #[error("dataset entry '{label}' sets quality_placeholder without quality: {path}")]
    PlaceholderWithoutQuality { path: String, label: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestOutcome {
    pub short: bool,
    pub medium: bool,
    pub long: bool,
}

/// Editorial description of one converter service, before any markup is applied.
///
/// Keys may be written snake_case or with the record's camelCase field names
/// (`testResult`, `nameClass`, ...). Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub label: String,
    pub url: String,
    #[serde(alias = "nameClass")]
    pub name_class: Option<String>,
    pub ad: Option<bool>,
    #[serde(alias = "adRemark")]
    pub ad_remark: Option<String>,
    pub client: Option<bool>,
    pub free: Option<bool>,
    pub progress: Option<bool>,
    pub quality: Option<Vec<String>>,
    #[serde(alias = "qualityPlaceholder")]
    pub quality_placeholder: Option<String>,
    pub step: Option<i64>,
    #[serde(alias = "testResult")]
    pub test_result: Option<TestOutcome>,
    pub remark: Option<String>,
    pub usable: Option<bool>,
}

impl ServiceEntry {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
            name_class: None,
            ad: None,
            ad_remark: None,
            client: None,
            free: None,
            progress: None,
            quality: None,
            quality_placeholder: None,
            step: None,
            test_result: None,
            remark: None,
            usable: None,
        }
    }

    fn left(mut self) -> Self {
        self.name_class = Some("text-left".to_string());
        self
    }

    fn ad(mut self, value: bool) -> Self {
        self.ad = Some(value);
        self
    }

    fn ad_remark(mut self, remark: &str) -> Self {
        self.ad_remark = Some(remark.to_string());
        self
    }

    fn client(mut self, value: bool) -> Self {
        self.client = Some(value);
        self
    }

    fn free(mut self, value: bool) -> Self {
        self.free = Some(value);
        self
    }

    fn progress(mut self, value: bool) -> Self {
        self.progress = Some(value);
        self
    }

    fn quality(mut self, values: &[&str]) -> Self {
        self.quality = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    fn not_selectable(mut self) -> Self {
        self.quality = Some(Vec::new());
        self.quality_placeholder = Some("not selectable".to_string());
        self
    }

    fn step(mut self, steps: i64) -> Self {
        self.step = Some(steps);
        self
    }

    fn tested(mut self, short: bool, medium: bool, long: bool) -> Self {
        self.test_result = Some(TestOutcome {
            short,
            medium,
            long,
        });
        self
    }

    fn remark(mut self, remark: &str) -> Self {
        self.remark = Some(remark.to_string());
        self
    }

    fn usable(mut self, value: bool) -> Self {
        self.usable = Some(value);
        self
    }

    /// Renders every present field; absent fields stay absent from the record.
    pub fn to_product(&self) -> Product {
        let reversed = BoolTextOptions::reversed();
        let straight = BoolTextOptions::straight();
        let mut product = Product::new();

        product.insert(
            "name".to_string(),
            ProductColumn::new(product_name(&self.label, &self.url))
                .with_class(self.name_class.as_deref()),
        );
        if let Some(v) = self.ad {
            product.insert(
                "ad".to_string(),
                ProductColumn::new(bool_text(v, Some(&reversed)))
                    .with_remark(self.ad_remark.as_deref()),
            );
        }
        if let Some(v) = self.client {
            product.insert(
                "client".to_string(),
                ProductColumn::new(bool_text(v, Some(&reversed))),
            );
        }
        if let Some(v) = self.free {
            product.insert(
                "free".to_string(),
                ProductColumn::new(bool_text(v, Some(&straight))),
            );
        }
        if let Some(v) = self.progress {
            product.insert(
                "progress".to_string(),
                ProductColumn::new(bool_text(v, Some(&straight))),
            );
        }
        if let Some(values) = self.quality.as_ref() {
            product.insert(
                "quality".to_string(),
                ProductColumn::new(array_text(
                    values.as_slice(),
                    self.quality_placeholder.as_deref(),
                )),
            );
        }
        if let Some(steps) = self.step {
            product.insert("step".to_string(), ProductColumn::new(steps));
        }
        if let Some(t) = self.test_result {
            product.insert(
                "testResult".to_string(),
                ProductColumn::new(test_result(t.short, t.medium, t.long)),
            );
        }
        if let Some(remark) = self.remark.as_deref() {
            product.insert("remark".to_string(), ProductColumn::new(remark));
        }
        if let Some(v) = self.usable {
            product.insert(
                "usable".to_string(),
                ProductColumn::new(bool_text(v, Some(&straight))),
            );
        }
        product
    }
}

/// The comparison list as published, in display order.
pub fn builtin_services() -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new("✅ https://cobalt.tools", "https://cobalt.tools/")
            .ad(false)
            .client(false)
            .free(true)
            .progress(false)
            .not_selectable()
            .step(3)
            .tested(true, true, true)
            .remark(COMMON_REMARK)
            .usable(true),
        ServiceEntry::new("✅ https://yt8s.com", "https://yt8s.com/en")
            .left()
            .ad(true)
            .client(false)
            .free(true)
            .progress(true)
            .step(5)
            .not_selectable()
            .tested(true, true, true)
            .remark(COMMON_REMARK),
        ServiceEntry::new(
            "❌ https://app.aiseo.ai",
            "https://app.aiseo.ai/tools/youtube-to-mp3",
        )
        .left()
        .ad(false)
        .client(false)
        .free(true)
        .progress(true)
        .quality(&["64", "128", "192", "256", "320"])
        .usable(true),
        ServiceEntry::new(
            "✅ https://www.macelleriamantelli.it",
            "https://www.macelleriamantelli.it/",
        )
        .left()
        .ad(true)
        .ad_remark("Click Download to be redirected to the ad page")
        .client(false)
        .free(true)
        .quality(&["64", "128", "192", "256", "320"])
        .progress(false)
        .step(4)
        .tested(true, true, true)
        .usable(true),
        ServiceEntry::new(
            "✅ https://yt1d.com",
            "https://yt1d.com/en20/youtube-to-mp3",
        )
        .left()
        .ad(true)
        .client(false)
        .free(true)
        .not_selectable()
        .progress(false)
        .step(5)
        .tested(true, true, true)
        .usable(true),
        ServiceEntry::new("villamadame", "https://www.villamadame.it/")
            .left()
            .ad(true)
            .client(false)
            .free(true)
            .quality(&["64", "128", "256", "320"])
            .usable(true),
        ServiceEntry::new(
            "clipto",
            "https://www.clipto.com/media-downloader/free-youtube-to-mp3-converter",
        )
        .left()
        .ad(false)
        .client(false)
        .free(true)
        .quality(&["m4a", "opus", "mp3"])
        .usable(true),
        ServiceEntry::new("cnvmp3", "https://cnvmp3.com/v23")
            .left()
            .ad(false)
            .client(false)
            .free(true)
            .quality(&["64", "128", "256", "320"])
            .usable(true),
        ServiceEntry::new("ytmp3", "https://ytmp3.cc/Nnht/")
            .left()
            .ad(true)
            .client(false)
            .free(true)
            .quality(&["128"])
            .usable(true),
        ServiceEntry::new("y2mate", "https://y2mate.nu/en-c3pn/")
            .left()
            .ad(false)
            .client(false)
            .free(true)
            .quality(&["128"])
            .usable(false),
        ServiceEntry::new("y2mate", "https://www.y2mate.com/en949")
            .ad(true)
            .client(false)
            .free(true)
            .quality(&["128"])
            .usable(false),
        ServiceEntry::new("yout", "https://yout.com/")
            .left()
            .ad(false)
            .client(false)
            .free(true)
            .quality(&["32", "64", "128", "192", "256", "320"])
            .usable(true),
        ServiceEntry::new("youtubemp3", "https://youtubemp3.one/")
            .ad(true)
            .client(false)
            .free(true)
            .quality(&["32"])
            .usable(false),
    ]
}

/// Built-in records. `t` is taken for symmetry with [`super::table_columns`].
pub fn products<T: Translate + ?Sized>(t: &T) -> Vec<Product> {
    products_from(&builtin_services(), t)
}

pub fn products_from<T: Translate + ?Sized>(entries: &[ServiceEntry], _t: &T) -> Vec<Product> {
    entries.iter().map(ServiceEntry::to_product).collect()
}

/// Reads a YAML sequence of service entries.
pub fn load_dataset(path: &Path) -> Result<Vec<ServiceEntry>, DatasetError> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: display.clone(),
        source,
    })?;
    let entries: Vec<ServiceEntry> =
        serde_yaml::from_str(&contents).map_err(|source| DatasetError::Parse {
            path: display.clone(),
            source,
        })?;
    if entries.is_empty() {
        return Err(DatasetError::Empty { path: display });
    }
    // A placeholder only renders for an empty quality list.
    if let Some(entry) = entries
        .iter()
        .find(|e| e.quality.is_none() && e.quality_placeholder.is_some())
    {
        return Err(DatasetError::PlaceholderWithoutQuality {
            path: display,
            label: entry.label.clone(),
        });
    }
    Ok(entries)
}
