use thiserror::Error;
use url::Url;

pub const SITEMAP_FILE: &str = "sitemap-index.xml";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site URL: {url}: {source}")]
    InvalidSite {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("site URL cannot be a base: {url}")]
    NotABase { url: String },
}

/// Resolves the sitemap index against the site root. A site given with a
/// path keeps it only up to the last `/`, as URL joining does.
pub fn sitemap_url(site: &str) -> Result<Url, SiteError> {
    let base = Url::parse(site.trim()).map_err(|source| SiteError::InvalidSite {
        url: site.to_string(),
        source,
    })?;
    if base.cannot_be_a_base() {
        return Err(SiteError::NotABase {
            url: site.to_string(),
        });
    }
    base.join(SITEMAP_FILE)
        .map_err(|source| SiteError::InvalidSite {
            url: site.to_string(),
            source,
        })
}

pub fn robots_txt(site: &str) -> Result<String, SiteError> {
    let sitemap = sitemap_url(site)?;
    Ok(format!(
        "\nUser-agent: *\nAllow: /\n\nSitemap: {}\n",
        sitemap.as_str()
    ))
}
