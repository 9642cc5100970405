use std::path::PathBuf;

use clap::Parser;

/// autosize-view: show an HTML document in a window that grows to fit it.
#[derive(Parser, Debug)]
#[command(name = "autosize-view", version, about)]
pub struct Args {
    /// Document to show: a URL, a path under the content directory, or
    /// inline HTML starting with `<`. A built-in sample is shown if omitted.
    pub source: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `debug`, `autosize_webview=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Measure the body's first child directly (no wrapper element).
    #[arg(long)]
    pub iframe: bool,

    /// Disable the opacity fade after each resize.
    #[arg(long)]
    pub no_animation: bool,

    /// Print the generated measurement script and exit.
    #[arg(long)]
    pub print_script: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
