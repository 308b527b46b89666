use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "language")]
    pub lang: Option<String>,
    pub site: Option<String>,
    pub dataset: Option<String>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "show_hidden_columns")]
    pub all_columns: Option<bool>,
    pub no_color: Option<bool>,
}

const CONFIG_DIR: &str = ".convtable";
const CONFIG_FILE: &str = "config.yml";

fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .find_map(|key| env::var_os(key))
        .map(PathBuf::from)
}

pub fn default_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// `~/x` resolves under the home directory; anything else is taken as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"));
    match (rest, home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Reads the YAML config. Unknown keys are an error so a typo does not
/// silently fall back to a default.
pub fn load_config(path: &Path, allow_missing: bool) -> Result<ConfigFile, String> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if allow_missing {
                return Ok(ConfigFile::default());
            }
            return Err(format!("no config at '{}'", path.display()));
        }
        Err(e) => return Err(format!("cannot read config '{}': {e}", path.display())),
    };
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("bad config '{}': {e}", path.display()))
}

pub(crate) fn default_config_yaml() -> String {
    r#"# convtable config
#
# Location (default):
#   ~/.convtable/config.yml

# Display language for column headers (en, zh-cn)
lang: en

# Site root, used for the robots.txt sitemap line
# site: https://example.com/

# Service list (optional; the built-in list is used when unset)
# dataset: ./services.yml

# Output (optional; stdout when unset)
# output: ./converters.html
# output_format: html
# title: YouTube to MP3 Converters

# Include the client/remark/usable columns
all_columns: false

# Output styling
no_color: false
"#
    .to_string()
}

/// Writes the commented template unless a config already exists at `path`.
pub fn ensure_default_config_file(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create config dir '{}': {e}", dir.display()))?;
    }
    std::fs::write(path, default_config_yaml())
        .map_err(|e| format!("cannot write config '{}': {e}", path.display()))
}
