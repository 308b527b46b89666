use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --output-format '{raw}', expected html, json, or text"
            ));
        }
    }
    if let Some(raw) = args.site.as_deref() {
        crate::site::sitemap_url(raw).map_err(|e| format!("invalid --site '{raw}': {e}"))?;
    }
    Ok(())
}
