use std::io::Write;

use crate::i18n::{Label, Multilingual, Translate, Translator};
use crate::output::{self, OutputFormat, PageOptions, TableDocument};
use crate::product::{
    self, array_text, bool_text, product_name, test_result, BoolTextOptions, ColumnSet,
    ColumnValue, Translations,
};

const GREEN: &str = "bg-green-100 text-green-800";
const RED: &str = "bg-red-100 text-red-800";

fn english() -> Translator {
    Translator::new("en")
}

#[test]
fn bool_text_word_follows_raw_value() {
    for reverse in [false, true] {
        let opts = BoolTextOptions {
            reverse: Some(reverse),
            translations: None,
        };
        assert!(bool_text(true, Some(&opts)).ends_with(">Yes</span>"));
        assert!(bool_text(false, Some(&opts)).ends_with(">No</span>"));
    }
    assert!(bool_text(true, None).ends_with(">Yes</span>"));
    assert!(bool_text(false, None).ends_with(">No</span>"));
}

#[test]
fn bool_text_reverse_flips_colour_only() {
    let reversed = BoolTextOptions::reversed();
    assert!(bool_text(true, Some(&reversed)).contains(RED));
    assert!(bool_text(false, Some(&reversed)).contains(GREEN));

    let straight = BoolTextOptions::straight();
    assert!(bool_text(true, Some(&straight)).contains(GREEN));
    assert!(bool_text(false, Some(&straight)).contains(RED));
}

#[test]
fn bool_text_exact_markup() {
    assert_eq!(
        bool_text(true, None),
        "<span class=\"bg-green-100 text-green-800 text-xs font-medium px-2.5 py-0.5 rounded\">Yes</span>"
    );
    assert_eq!(
        bool_text(true, Some(&BoolTextOptions::reversed())),
        "<span class=\"bg-red-100 text-red-800 text-xs font-medium px-2.5 py-0.5 rounded\">Yes</span>"
    );
}

#[test]
fn partial_translations_keep_default_no() {
    let opts = BoolTextOptions {
        reverse: None,
        translations: Some(Translations {
            yes: Some("Oui".to_string()),
            no: None,
        }),
    };
    let merged = opts.merged();
    assert_eq!(merged.yes, "Oui");
    assert_eq!(merged.no, "No");
    assert!(!merged.reverse);
    assert!(bool_text(true, Some(&opts)).ends_with(">Oui</span>"));
    assert!(bool_text(false, Some(&opts)).ends_with(">No</span>"));
}

#[test]
fn bool_text_options_parse_from_yaml() {
    let opts: BoolTextOptions =
        serde_yaml::from_str("reverse: true\ntranslations:\n  no: Non\n").unwrap();
    let merged = opts.merged();
    assert!(merged.reverse);
    assert_eq!(merged.yes, "Yes");
    assert_eq!(merged.no, "Non");
}

#[test]
fn array_text_empty_renders_single_placeholder() {
    assert_eq!(
        array_text::<&str>(&[], Some("not selectable")),
        "<span class=\" text-gray-500 dark:text-gray-400 text-xs\">not selectable</span>"
    );
    assert_eq!(
        array_text::<&str>(&[], None),
        "<span class=\" text-gray-500 dark:text-gray-400 text-xs\">-</span>"
    );
}

#[test]
fn array_text_keeps_input_order() {
    let html = array_text(&["64", "128"], None);
    assert_eq!(
        html,
        "<span class=\"bg-blue-100 text-blue-800 text-xs font-medium px-2.5 py-0.5 rounded\">64</span> <span class=\"bg-blue-100 text-blue-800 text-xs font-medium px-2.5 py-0.5 rounded\">128</span>"
    );
    assert_eq!(html.matches("<span").count(), 2);
}

#[test]
fn test_result_order_and_glyphs() {
    assert_eq!(
        test_result(true, false, true),
        "<span title=\"short\">✅</span>  <span title=\"medium\">❌</span>  <span title=\"long\">✅</span> "
    );
}

#[test]
fn product_name_embeds_name_and_url() {
    let html = product_name("clipto", "https://www.clipto.com/");
    assert_eq!(
        html,
        "<a href=\"https://www.clipto.com/\" title=\"clipto\nhttps://www.clipto.com/\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-500 dark:text-blue-300 hover:underline\">clipto</a>"
    );
}

#[test]
fn live_columns_are_fixed() {
    let columns = product::table_columns(&english());
    let keys: Vec<_> = columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(
        keys,
        ["name", "ad", "free", "quality", "testResult", "step"]
    );
    assert_eq!(columns[0].text, "Status & Product Name");
    assert_eq!(columns[1].class, "text-center");
    assert_eq!(columns[3].text, "Quality(kbps)");
}

#[test]
fn all_columns_add_disabled_ones_in_place() {
    let columns = product::table_columns_with(&english(), ColumnSet::All);
    let keys: Vec<_> = columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(
        keys,
        ["name", "ad", "free", "client", "quality", "testResult", "step", "remark", "usable"]
    );
}

#[test]
fn columns_resolve_through_any_translator() {
    let zh = product::table_columns(&Translator::new("zh_CN"));
    assert_eq!(zh[0].text, "状态 & 产品名称");
    assert_eq!(zh[5].text, "步骤");

    let upper = |label: &Label| -> String { english().t(label).to_uppercase() };
    let columns = product::table_columns(&upper);
    assert_eq!(columns[1].text, "ADS");
}

#[test]
fn translator_falls_back() {
    let label = Label::from(Multilingual::new([("en", "Free"), ("zh-cn", "是否免费")]));
    assert_eq!(Translator::new("fr").t(&label), "Free");

    let only_zh = Label::from(Multilingual::new([("zh-cn", "步骤")]));
    assert_eq!(Translator::new("en").t(&only_zh), "步骤");
    assert_eq!(
        Translator::new("fr").with_fallback("zh-cn").t(&label),
        "是否免费"
    );

    assert_eq!(Translator::new("zh-cn").t(&Label::from("plain")), "plain");
}

const NOT_SELECTABLE: &[&str] = &[];

// (label, url, ad, usable, quality, step)
#[allow(clippy::type_complexity)]
const EDITORIAL: &[(&str, &str, bool, Option<bool>, &[&str], Option<i64>)] = &[
    ("✅ https://cobalt.tools", "https://cobalt.tools/", false, Some(true), NOT_SELECTABLE, Some(3)),
    ("✅ https://yt8s.com", "https://yt8s.com/en", true, None, NOT_SELECTABLE, Some(5)),
    ("❌ https://app.aiseo.ai", "https://app.aiseo.ai/tools/youtube-to-mp3", false, Some(true), &["64", "128", "192", "256", "320"], None),
    ("✅ https://www.macelleriamantelli.it", "https://www.macelleriamantelli.it/", true, Some(true), &["64", "128", "192", "256", "320"], Some(4)),
    ("✅ https://yt1d.com", "https://yt1d.com/en20/youtube-to-mp3", true, Some(true), NOT_SELECTABLE, Some(5)),
    ("villamadame", "https://www.villamadame.it/", true, Some(true), &["64", "128", "256", "320"], None),
    ("clipto", "https://www.clipto.com/media-downloader/free-youtube-to-mp3-converter", false, Some(true), &["m4a", "opus", "mp3"], None),
    ("cnvmp3", "https://cnvmp3.com/v23", false, Some(true), &["64", "128", "256", "320"], None),
    ("ytmp3", "https://ytmp3.cc/Nnht/", true, Some(true), &["128"], None),
    ("y2mate", "https://y2mate.nu/en-c3pn/", false, Some(false), &["128"], None),
    ("y2mate", "https://www.y2mate.com/en949", true, Some(false), &["128"], None),
    ("yout", "https://yout.com/", false, Some(true), &["32", "64", "128", "192", "256", "320"], None),
    ("youtubemp3", "https://youtubemp3.one/", true, Some(false), &["32"], None),
];

#[test]
fn builtin_dataset_matches_editorial_list() {
    let products = product::products(&english());
    assert_eq!(products.len(), EDITORIAL.len());

    let reversed = BoolTextOptions::reversed();
    let straight = BoolTextOptions::straight();
    for (i, (record, (label, url, ad, usable, quality, step))) in
        products.iter().zip(EDITORIAL).enumerate()
    {
        assert_eq!(
            record["name"].value,
            ColumnValue::Text(product_name(label, url)),
            "name of record {i}"
        );
        assert_eq!(
            record["ad"].value.to_html(),
            bool_text(*ad, Some(&reversed)),
            "ad of record {i}"
        );
        assert_eq!(
            record.get("usable").map(|c| c.value.to_html()),
            usable.map(|u| bool_text(u, Some(&straight))),
            "usable of record {i}"
        );
        let placeholder = quality.is_empty().then_some("not selectable");
        assert_eq!(
            record["quality"].value.to_html(),
            array_text(quality, placeholder),
            "quality of record {i}"
        );
        assert_eq!(
            record.get("step").map(|c| c.value.clone()),
            step.map(ColumnValue::Number),
            "step of record {i}"
        );
        let free = record["free"].value.to_html();
        assert!(free.contains(GREEN) && free.ends_with(">Yes</span>"), "free of record {i}");
        assert!(record["client"].value.to_html().contains(GREEN), "client of record {i}");
    }

    let first = &products[0];
    assert_eq!(first["name"].class, None);
    assert!(first["quality"].value.to_html().contains("not selectable"));
}

#[test]
fn dataset_omits_absent_fields() {
    let products = product::products(&english());
    let aiseo = &products[2];
    assert!(!aiseo.contains_key("step"));
    assert!(!aiseo.contains_key("testResult"));
    assert_eq!(aiseo["name"].class.as_deref(), Some("text-left"));

    let yt8s = &products[1];
    assert!(!yt8s.contains_key("usable"));
    let ad = yt8s["ad"].value.to_html();
    assert!(ad.contains(RED));
    assert!(ad.ends_with(">Yes</span>"));

    let mantelli = &products[3];
    assert_eq!(
        mantelli["ad"].remark.as_deref(),
        Some("Click Download to be redirected to the ad page")
    );
}

#[test]
fn dataset_loads_from_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "- label: demo\n  url: https://demo.example/\n  ad: true\n  quality: []\n  test_result: {{ short: true, medium: false, long: false }}\n- label: other\n  url: https://other.example/\n  step: 2\n"
    )
    .unwrap();

    let entries = product::load_dataset(file.path()).unwrap();
    assert_eq!(entries.len(), 2);
    let products = product::products_from(&entries, &english());
    assert!(products[0]["ad"].value.to_html().contains(RED));
    assert!(products[0]["quality"].value.to_html().contains(">-</span>"));
    assert!(products[0]["testResult"].value.to_html().contains("❌"));
    assert_eq!(products[1]["step"].value, ColumnValue::Number(2));
    assert!(!products[1].contains_key("ad"));
}

#[test]
fn dataset_errors_are_reported() {
    let missing = std::path::Path::new("/definitely/not/here.yml");
    assert!(matches!(
        product::load_dataset(missing),
        Err(product::DatasetError::Read { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[]").unwrap();
    assert!(matches!(
        product::load_dataset(file.path()),
        Err(product::DatasetError::Empty { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "- url: https://no-label.example/").unwrap();
    assert!(matches!(
        product::load_dataset(file.path()),
        Err(product::DatasetError::Parse { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "- label: a\n  url: https://a.example/\n  steps: 3").unwrap();
    assert!(matches!(
        product::load_dataset(file.path()),
        Err(product::DatasetError::Parse { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "- label: a\n  url: https://a.example/\n  test_result: {{ short: true, medium: true, long: true, extra: true }}"
    )
    .unwrap();
    assert!(matches!(
        product::load_dataset(file.path()),
        Err(product::DatasetError::Parse { .. })
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "- label: a\n  url: https://a.example/\n  quality_placeholder: none").unwrap();
    match product::load_dataset(file.path()) {
        Err(product::DatasetError::PlaceholderWithoutQuality { label, .. }) => assert_eq!(label, "a"),
        other => panic!("expected placeholder error, got {other:?}"),
    }
}

#[test]
fn dataset_accepts_record_field_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "- label: a\n  url: https://a.example/\n  nameClass: text-left\n  adRemark: popups\n  ad: true\n  quality: []\n  qualityPlaceholder: none\n  testResult: {{ short: true, medium: true, long: false }}"
    )
    .unwrap();

    let entries = product::load_dataset(file.path()).unwrap();
    let products = product::products_from(&entries, &english());
    let keys: Vec<_> = products[0].keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["ad", "name", "quality", "testResult"]);
    assert_eq!(products[0]["name"].class.as_deref(), Some("text-left"));
    assert_eq!(products[0]["ad"].remark.as_deref(), Some("popups"));
    assert!(products[0]["quality"].value.to_html().contains(">none</span>"));
    assert_eq!(
        products[0]["testResult"].value.to_html(),
        test_result(true, true, false)
    );
}

#[test]
fn robots_txt_points_at_sitemap_index() {
    let body = crate::site::robots_txt("https://example.com").unwrap();
    assert_eq!(
        body,
        "\nUser-agent: *\nAllow: /\n\nSitemap: https://example.com/sitemap-index.xml\n"
    );
    assert_eq!(
        crate::site::sitemap_url("https://example.com/docs/").unwrap().as_str(),
        "https://example.com/docs/sitemap-index.xml"
    );
    assert!(crate::site::robots_txt("not a url").is_err());
    assert!(crate::site::robots_txt("mailto:me@example.com").is_err());
}

#[test]
fn palette_renders_tailwind_colors() {
    let colors = crate::site::Palette::default().tailwind_colors();
    assert!(colors.contains("\"theme\": \"#ef4d1a\""));
    assert!(colors.contains("\"caution\": \"#ffaa2b\""));
}

#[test]
fn page_has_header_per_column_and_empty_missing_cells() {
    let t = english();
    let columns = product::table_columns(&t);
    let products = product::products(&t);
    let html = output::report::render_page(&columns, &products, &PageOptions::default());

    assert_eq!(html.matches("<th ").count(), columns.len());
    assert_eq!(html.matches("<tr class=\"hover:bg-main/60\">").count(), products.len());
    assert!(html.contains("Status &amp; Product Name"));
    assert!(html.contains("<td class=\"px-4 py-3 text-sm text-left\"></td>"));
    assert!(html.contains("\"theme\": \"#ef4d1a\""));
    assert!(html.contains(">13 services</p>"));
    assert!(html.contains(&product_name("clipto", "https://www.clipto.com/media-downloader/free-youtube-to-mp3-converter")));
}

#[test]
fn json_document_keeps_column_shape() {
    let t = english();
    let columns = product::table_columns(&t);
    let products = product::products(&t);
    let bytes = output::render_json(&TableDocument {
        lang: "en",
        columns: &columns,
        products: &products,
    });
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(doc["columns"].as_array().unwrap().len(), 6);
    assert_eq!(doc["products"][0]["step"]["value"], 3);
    assert!(doc["products"][0]["name"].get("class").is_none());
    assert_eq!(doc["products"][1]["name"]["class"], "text-left");
}

#[test]
fn text_output_strips_markup() {
    let t = english();
    let columns = product::table_columns(&t);
    let products = product::products(&t);
    let text = String::from_utf8(output::render_text(&columns, &products)).unwrap();
    let first_row = text.lines().nth(1).unwrap();
    assert_eq!(
        first_row,
        "✅ https://cobalt.tools | No | Yes | not selectable | ✅ ✅ ✅ | 3"
    );
    let aiseo = text.lines().nth(3).unwrap();
    assert!(aiseo.ends_with("| 64 128 192 256 320 |  | "));
}

#[test]
fn strip_tags_reuses_one_pattern() {
    let tags = output::tag_pattern();
    assert_eq!(
        output::strip_tags(&tags, &product_name("yout", "https://yout.com/")),
        "yout"
    );
    assert_eq!(output::strip_tags(&tags, &test_result(false, true, false)), "❌ ✅ ❌");
    assert_eq!(output::strip_tags(&tags, "3"), "3");
}

#[test]
fn config_rejects_unknown_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "lang: zh-cn\nall_colums: true").unwrap();
    let err = crate::config::load_config(file.path(), false).unwrap_err();
    assert!(err.contains("all_colums"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "language: zh-cn\nshow_hidden_columns: true").unwrap();
    let cfg = crate::config::load_config(file.path(), false).unwrap();
    assert_eq!(cfg.lang.as_deref(), Some("zh-cn"));
    assert_eq!(cfg.all_columns, Some(true));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yml");
    assert!(crate::config::load_config(&missing, true).unwrap().lang.is_none());
    assert!(crate::config::load_config(&missing, false).is_err());
}

#[test]
fn output_format_parsing() {
    assert_eq!(OutputFormat::parse(" HTML "), Some(OutputFormat::Html));
    assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse("xml"), None);
    assert_eq!(
        output::infer_format_from_path("out/table.JSON"),
        Some(OutputFormat::Json)
    );
    assert_eq!(output::infer_format_from_path("table"), None);
}
