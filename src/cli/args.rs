use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "convtable",
    version,
    about = "YouTube-to-MP3 converter comparison table renderer",
    long_about = "Renders the converter comparison table as an HTML page, JSON or plain text, and the site's robots.txt.\n\nExamples:\n  convtable -o converters.html\n  convtable -l zh-cn -A text\n  convtable --robots -s https://example.com/\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "out",
        visible_alias = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered table to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'A',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format (html, json, text)."
    )]
    pub output_format: Option<String>,

    #[arg(
        long = "ttl",
        visible_alias = "title",
        value_name = "TEXT",
        help_heading = "Output",
        help = "Page title for html output."
    )]
    pub title: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.convtable/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Input",
        help = "Write the default config file if it does not exist, then exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 'd',
        long = "ds",
        visible_alias = "dataset",
        value_name = "FILE",
        help_heading = "Input",
        help = "Load the service list from a YAML file instead of the built-in list."
    )]
    pub dataset: Option<String>,

    #[arg(
        short = 'l',
        long = "lng",
        visible_alias = "lang",
        value_name = "LANG",
        help_heading = "Table",
        help = "Display language for column headers (en, zh-cn)."
    )]
    pub lang: Option<String>,

    #[arg(
        short = 'a',
        long = "ac",
        visible_alias = "all-columns",
        help_heading = "Table",
        help = "Include the disabled client/remark/usable columns."
    )]
    pub all_columns: bool,

    #[arg(
        long = "robots",
        help_heading = "Site",
        help = "Print the robots.txt body instead of the table."
    )]
    pub robots: bool,

    #[arg(
        short = 's',
        long = "st",
        visible_alias = "site",
        value_name = "URL",
        help_heading = "Site",
        help = "Site root URL used for the sitemap line (e.g. https://example.com/)."
    )]
    pub site: Option<String>,
}
