//! wp-tailwind - Tailwind CSS setup for WordPress projects

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use setup_core::tui::{CleanupArgs, SetupArgs};
use setup_core::Topology;

#[derive(Parser, Debug)]
#[command(name = "wp-tailwind")]
#[command(about = "Set up a Tailwind CSS build pipeline inside a WordPress project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure Tailwind CSS for this WordPress project
    Setup(CliSetupArgs),
    /// Remove toolkit files, keeping only your project
    Cleanup(CliCleanupArgs),
}

/// Topology choices as they appear on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TopologyArg {
    Both,
    ThemeOnly,
    PluginOnly,
    Shared,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Both => Topology::Both,
            TopologyArg::ThemeOnly => Topology::ThemeOnly,
            TopologyArg::PluginOnly => Topology::PluginOnly,
            TopologyArg::Shared => Topology::Shared,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliSetupArgs {
    /// Project topology (prompted for when omitted)
    #[arg(short = 't', long)]
    pub topology: Option<TopologyArg>,

    /// Plugin folder name under wp-content/plugins
    #[arg(short, long)]
    pub plugin: Option<String>,

    /// Theme folder name under wp-content/themes
    #[arg(long)]
    pub theme: Option<String>,

    /// Output directory for the shared topology (e.g. wp-content/assets)
    #[arg(long = "shared-path")]
    pub shared_path: Option<String>,

    /// CSS output path inside the plugin folder
    #[arg(long = "plugin-css")]
    pub plugin_css: Option<String>,

    /// CSS output path inside the theme folder
    #[arg(long = "theme-css")]
    pub theme_css: Option<String>,

    /// Skip the npm install step
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliSetupArgs> for SetupArgs {
    fn from(args: CliSetupArgs) -> Self {
        SetupArgs {
            topology: args.topology.map(Into::into),
            plugin_name: args.plugin,
            theme_name: args.theme,
            shared_path: args.shared_path,
            plugin_css_path: args.plugin_css,
            theme_css_path: args.theme_css,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliCleanupArgs {
    /// Remove toolkit files without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCleanupArgs> for CleanupArgs {
    fn from(args: CliCleanupArgs) -> Self {
        CleanupArgs { yes: args.yes }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Setup(setup_args)) => setup_core::run_setup(setup_args.into()).await,
        Some(Command::Cleanup(cleanup_args)) => setup_core::run_cleanup(cleanup_args.into()).await,
        // No subcommand provided, default to interactive setup
        None => setup_core::run_setup(SetupArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
