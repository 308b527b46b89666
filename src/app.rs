use std::io::Write;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;

use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::i18n::{self, Translator};
use crate::output::{self, OutputFormat, PageOptions, TableDocument};
use crate::product::{self, ColumnSet};
use crate::site::{self, Palette};

fn print_banner() {
    const BANNER: &str = r#"
                         __        __    __
  _________  ____ _   __/ /_____ _/ /_  / /__
 / ___/ __ \/ __ \ | / / __/ __ `/ __ \/ / _ \
/ /__/ /_/ / / / / |/ / /_/ /_/ / /_/ / /  __/
\___/\____/_/ /_/|___/\__/\__,_/_.___/_/\___/
          converter comparison table
    "#;
    eprint!("{}", BANNER);
    eprintln!();
}

fn format_kv_line(label: &str, value: &str) {
    eprintln!("{} {:<10}: {}", "::".bold().yellow(), label, value);
}

fn format_opt_value<'a>(v: Option<&'a str>, default: &'a str) -> &'a str {
    match v {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    verbose: u8,
    no_color: bool,
    lang: String,
    site: Option<String>,
    dataset: Option<String>,
    output: Option<String>,
    output_format: OutputFormat,
    title: String,
    columns: ColumnSet,
    robots: bool,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let lang = i18n::normalize_lang(
        &args
            .lang
            .or(cfg.lang)
            .unwrap_or_else(|| i18n::DEFAULT_LANG.to_string()),
    );
    let site = args.site.or(cfg.site);
    let dataset = args.dataset.or(cfg.dataset);
    let output = args.output.or(cfg.output);

    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
            format!("invalid output_format '{raw}', expected html, json, or text")
        })?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Html),
    };

    let title = args
        .title
        .or(cfg.title)
        .unwrap_or_else(|| PageOptions::default().title);

    let columns = if args.all_columns || cfg.all_columns.unwrap_or(false) {
        ColumnSet::All
    } else {
        ColumnSet::Live
    };

    if args.robots && site.is_none() {
        return Err("--robots requires --site (or `site` in the config file)".to_string());
    }

    Ok(RunConfig {
        verbose: args.verbose,
        no_color,
        lang,
        site,
        dataset,
        output,
        output_format,
        title,
        columns,
        robots: args.robots,
    })
}

fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<(), String> {
    match path {
        Some(path) => {
            let path = config::expand_tilde(path);
            std::fs::write(&path, bytes)
                .map_err(|e| format!("failed to write output '{}': {e}", path.display()))
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(bytes)
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("failed to write to stdout: {e}"))
        }
    }
}

fn render(run: &RunConfig) -> Result<Vec<u8>, String> {
    if run.robots {
        let site = run.site.as_deref().unwrap_or_default();
        let body = site::robots_txt(site).map_err(|e| e.to_string())?;
        return Ok(body.into_bytes());
    }

    let t = Translator::new(&run.lang);
    let columns = product::table_columns_with(&t, run.columns);
    let products = match run.dataset.as_deref() {
        Some(path) => {
            let entries =
                product::load_dataset(&config::expand_tilde(path)).map_err(|e| e.to_string())?;
            product::products_from(&entries, &t)
        }
        None => product::products(&t),
    };

    if run.verbose > 0 {
        format_kv_line("Columns", &columns.len().to_string());
        format_kv_line("Services", &products.len().to_string());
    }
    if run.verbose > 1 {
        for c in &columns {
            eprintln!("   {} {}", c.key.bold().blue(), c.text);
        }
    }

    let bytes = match run.output_format {
        OutputFormat::Html => {
            let options = PageOptions {
                lang: run.lang.clone(),
                title: run.title.clone(),
                palette: Palette::default(),
            };
            output::render_html(&columns, &products, &options)
        }
        OutputFormat::Json => output::render_json(&TableDocument {
            lang: &run.lang,
            columns: &columns,
            products: &products,
        }),
        OutputFormat::Text => output::render_text(&columns, &products),
    };
    Ok(bytes)
}

fn run(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    if run.verbose > 0 {
        print_banner();
        format_kv_line("Language", &run.lang);
        format_kv_line("Format", run.output_format.label());
        format_kv_line("Output", format_opt_value(run.output.as_deref(), "stdout"));
        format_kv_line(
            "Dataset",
            format_opt_value(run.dataset.as_deref(), "built-in"),
        );
        format_kv_line("All cols", format_bool(run.columns == ColumnSet::All));
        eprintln!();
    }
    if !i18n::is_supported(&run.lang) {
        eprintln!(
            "{} no labels for language '{}', falling back to '{}'",
            "warning:".bold().yellow(),
            run.lang,
            i18n::DEFAULT_LANG
        );
    }

    if run.robots && run.columns == ColumnSet::All {
        eprintln!(
            "{} all_columns has no effect with --robots",
            "warning:".bold().yellow()
        );
    }

    let bytes = render(&run)?;
    write_output(run.output.as_deref(), &bytes)?;

    if run.verbose > 0 {
        if let Some(path) = run.output.as_deref() {
            eprintln!(
                "{} wrote {} bytes to {}",
                ":: Completed ::".bold().green(),
                bytes.len(),
                path
            );
        }
    }
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = match args.config.as_deref() {
            Some(p) => config::expand_tilde(p),
            None => config::default_config_path()
                .ok_or_else(|| "could not determine home directory".to_string())?,
        };
        config::ensure_default_config_file(&path)?;
        eprintln!("{} {}", "config ::".bold().green(), path.display());
        return Ok(());
    }

    let cfg = match args.config.as_deref() {
        Some(p) => config::load_config(&config::expand_tilde(p), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run_config = build_run_config(args, cfg)?;
    run(run_config)
}
