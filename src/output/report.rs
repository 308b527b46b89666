use crate::product::{cell, Product, TableColumn};
use crate::site::Palette;

#[derive(Clone, Debug)]
pub struct PageOptions {
    pub lang: String,
    pub title: String,
    pub palette: Palette,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            title: "YouTube to MP3 Converters".to_string(),
            palette: Palette::default(),
        }
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_head_row(columns: &[TableColumn]) -> String {
    let mut out = String::new();
    out.push_str("              <tr class=\"bg-main border-b border-base/20\">\n");
    for c in columns {
        out.push_str(&format!(
            "                <th class=\"px-4 py-3 text-xs font-bold text-base uppercase tracking-wide {}\">{}</th>\n",
            c.class,
            escape_text(&c.text)
        ));
    }
    out.push_str("              </tr>\n");
    out
}

// Cell values are already markup and go in as-is.
fn render_body_rows(columns: &[TableColumn], products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str("              <tr class=\"hover:bg-main/60\">\n");
        for c in columns {
            let (class, html) = match cell(product, c) {
                Some(col) => (
                    col.class.as_deref().unwrap_or(c.class.as_str()),
                    col.value.to_html(),
                ),
                None => (c.class.as_str(), String::new()),
            };
            out.push_str(&format!(
                "                <td class=\"px-4 py-3 text-sm {class}\">{html}</td>\n"
            ));
        }
        out.push_str("              </tr>\n");
    }
    out
}

pub fn render_page(columns: &[TableColumn], products: &[Product], options: &PageOptions) -> String {
    let title = escape_text(&options.title);
    let lang = escape_text(&options.lang);
    let colors = options.palette.tailwind_colors();
    let head_row = render_head_row(columns);
    let body_rows = render_body_rows(columns, products);
    let total = products.len();

    format!(
        r####"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script id="tailwind-config">
    tailwind.config = {{
      darkMode: "class",
      theme: {{
        extend: {{
          colors: {colors}
        }}
      }}
    }};
  </script>
</head>
<body class="bg-main dark:bg-base text-base dark:text-main min-h-screen">
  <div class="flex h-full grow flex-col">
    <header class="flex items-center justify-between border-b border-theme/30 bg-white dark:bg-base px-8 py-4">
      <h2 class="text-theme text-xl font-bold tracking-tight">{title}</h2>
    </header>

    <main class="flex-1 max-w-[1280px] mx-auto w-full px-8 py-10">
      <div class="bg-white dark:bg-base border border-base/10 rounded-2xl overflow-hidden shadow-sm">
        <div class="overflow-x-auto">
          <table class="w-full border-collapse">
            <thead>
{head_row}            </thead>
            <tbody class="divide-y divide-base/10">
{body_rows}            </tbody>
          </table>
        </div>
        <div class="px-8 py-4 border-t border-base/10 bg-main">
          <p class="text-xs text-accent font-bold">{total} services</p>
        </div>
      </div>
    </main>
  </div>
</body>
</html>
"####
    )
}
