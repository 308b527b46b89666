use serde::Serialize;

/// Site colours, keyed the way the page's Tailwind config names them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub theme: &'static str,
    pub accent: &'static str,
    pub base: &'static str,
    pub main: &'static str,
    pub caution: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            theme: "#ef4d1a",
            accent: "#943e0d",
            base: "#342c28",
            main: "#faf9f6",
            caution: "#ffaa2b",
        }
    }
}

impl Palette {
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("theme", self.theme),
            ("accent", self.accent),
            ("base", self.base),
            ("main", self.main),
            ("caution", self.caution),
        ]
    }

    /// `colors` block for `tailwind.config.theme.extend`.
    pub fn tailwind_colors(&self) -> String {
        let body = self
            .entries()
            .iter()
            .map(|(name, hex)| format!("            \"{name}\": \"{hex}\""))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{{\n{body}\n          }}")
    }
}
