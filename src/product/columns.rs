use crate::i18n::{Label, Multilingual, Translate};

use super::TableColumn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnSet {
    /// Columns shown on the page.
    #[default]
    Live,
    /// Live columns plus the disabled `client`, `remark` and `usable` columns.
    All,
}

struct ColumnSpec {
    en: &'static str,
    zh_cn: &'static str,
    key: &'static str,
    class: &'static str,
    live: bool,
}

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        en: "Status & Product Name",
        zh_cn: "状态 & 产品名称",
        key: "name",
        class: "text-left",
        live: true,
    },
    ColumnSpec {
        en: "Ads",
        zh_cn: "是否有广告",
        key: "ad",
        class: "text-center",
        live: true,
    },
    ColumnSpec {
        en: "Free",
        zh_cn: "是否免费",
        key: "free",
        class: "text-center",
        live: true,
    },
    ColumnSpec {
        en: "Client",
        zh_cn: "客户端",
        key: "client",
        class: "text-center",
        live: false,
    },
    ColumnSpec {
        en: "Quality(kbps)",
        zh_cn: "音质(kbps)",
        key: "quality",
        class: "text-left",
        live: true,
    },
    ColumnSpec {
        en: "TestResult",
        zh_cn: "测试结果",
        key: "testResult",
        class: "text-left",
        live: true,
    },
    ColumnSpec {
        en: "Step",
        zh_cn: "步骤",
        key: "step",
        class: "text-left",
        live: true,
    },
    ColumnSpec {
        en: "Remark",
        zh_cn: "备注",
        key: "remark",
        class: "text-left",
        live: false,
    },
    ColumnSpec {
        en: "Usable",
        zh_cn: "是否可用",
        key: "usable",
        class: "text-center",
        live: false,
    },
];

pub fn table_columns<T: Translate + ?Sized>(t: &T) -> Vec<TableColumn> {
    table_columns_with(t, ColumnSet::Live)
}

pub fn table_columns_with<T: Translate + ?Sized>(t: &T, set: ColumnSet) -> Vec<TableColumn> {
    COLUMNS
        .iter()
        .filter(|c| c.live || set == ColumnSet::All)
        .map(|c| {
            let label = Label::Multilingual(Multilingual::new([("en", c.en), ("zh-cn", c.zh_cn)]));
            TableColumn {
                text: t.t(&label),
                key: c.key.to_string(),
                class: c.class.to_string(),
            }
        })
        .collect()
}
