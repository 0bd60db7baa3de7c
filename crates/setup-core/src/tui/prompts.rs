//! Interactive setup and cleanup flows

use crate::cleanup;
use crate::content;
use crate::install;
use crate::layout::{self, FileKind, LayoutPlan, SetupRequest, Topology};
use crate::manifest;
use crate::materialize::{self, ArtifactStatus, MaterializationReport};
use crate::project;
use crate::runtime;
use crate::validate::{
    validate_css_path, validate_folder_name, validate_path, CssPath, DEFAULT_CSS_PATH,
};
use crate::verify;
use anyhow::{Context, Result};
use colored::Colorize;
use console::Emoji;

static CHECK: Emoji<'_, '_> = Emoji("✓", "+");
static CROSS: Emoji<'_, '_> = Emoji("✗", "x");

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Topology to configure; prompted for when absent
    pub topology: Option<Topology>,

    /// Plugin folder name
    pub plugin_name: Option<String>,

    /// Theme folder name
    pub theme_name: Option<String>,

    /// Output path for the shared topology
    pub shared_path: Option<String>,

    /// CSS output path inside the plugin folder
    pub plugin_css_path: Option<String>,

    /// CSS output path inside the theme folder
    pub theme_css_path: Option<String>,

    /// Skip the `npm install` step
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// CLI arguments for the cleanup command
#[derive(Debug, Clone, Default)]
pub struct CleanupArgs {
    /// Remove toolkit files without asking
    pub yes: bool,
}

/// Run the interactive setup flow.
pub async fn run_setup(args: SetupArgs) -> Result<()> {
    cliclack::intro("WordPress Tailwind CSS Setup")?;

    report_toolchain()?;

    let root = std::env::current_dir().context("Cannot determine the current directory")?;
    project::ensure_wordpress_root(&root)?;
    cliclack::log::success("WordPress root directory detected")?;

    let request = collect_request(&args)?;
    let plan = layout::resolve(&request)?;

    let spinner = cliclack::spinner();
    spinner.start("Configuring project...");
    let report = materialize::apply(&root, &plan).await;
    spinner.stop(format!(
        "Configured project ({} created, {} already present)",
        report.created_count(),
        report
            .entries
            .iter()
            .filter(|e| e.status == ArtifactStatus::SkippedExisting)
            .count()
    ));

    for failure in report.failures() {
        if let ArtifactStatus::Failed(reason) = &failure.status {
            cliclack::log::warning(format!("Could not create {}: {}", failure.path, reason))?;
        }
    }

    manifest::patch_file(&root, &plan)
        .await
        .context("Could not update package.json")?;
    cliclack::log::success("Updated package.json with your configuration")?;

    if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
    } else if let Err(e) = install::install_dependencies(&root).await {
        cliclack::log::warning(format!(
            "Dependency installation failed: {}\nYou can run \"{}\" manually later.",
            e,
            install::INSTALL_COMMAND
        ))?;
    } else {
        cliclack::log::success("Dependencies installed successfully")?;
    }

    let checklist = verify::verify(&root, &plan);
    print_checklist(&checklist)?;

    print_guidance(&plan, &report)?;
    print_next_steps(&plan);

    cliclack::outro("Setup complete!")?;
    Ok(())
}

fn report_toolchain() -> Result<()> {
    let node = runtime::check_node();
    let npm = runtime::check_npm();
    if let (Some(node_v), Some(npm_v)) = (&node.version, &npm.version) {
        cliclack::log::info(format!("Node.js {} / npm v{}", node_v, npm_v))?;
    }
    for warning in runtime::toolchain_advisories() {
        cliclack::log::warning(warning)?;
    }
    Ok(())
}

/// Gather a validated SetupRequest from flags and prompts.
fn collect_request(args: &SetupArgs) -> Result<SetupRequest> {
    let topology = match args.topology {
        Some(t) => t,
        None => ask_topology()?,
    };

    let mut request = SetupRequest::new(topology);

    let wants_plugin = matches!(
        topology,
        Topology::Both | Topology::PluginOnly | Topology::Shared
    );
    let wants_theme = matches!(
        topology,
        Topology::Both | Topology::ThemeOnly | Topology::Shared
    );

    if wants_plugin {
        let name = ask_validated(
            "Enter your plugin folder name",
            args.plugin_name.as_deref(),
            |s| validate_folder_name(s).map(|_| ()),
        )?;
        request.plugin_name = Some(validate_folder_name(&name)?);
    }

    if wants_theme {
        let name = ask_validated(
            "Enter your custom theme folder name",
            args.theme_name.as_deref(),
            |s| validate_folder_name(s).map(|_| ()),
        )?;
        request.theme_name = Some(validate_folder_name(&name)?);
    }

    if topology == Topology::Shared {
        let path = ask_validated(
            "Enter path for shared CSS (e.g., wp-content/assets)",
            args.shared_path.as_deref(),
            |s| validate_path(s).map(|_| ()),
        )?;
        request.shared_path = Some(validate_path(&path)?);
    } else {
        if wants_plugin {
            request.plugin_css_path =
                ask_css_path("plugin", args.plugin_css_path.as_deref(), args.yes)?;
        }
        if wants_theme {
            request.theme_css_path =
                ask_css_path("theme", args.theme_css_path.as_deref(), args.yes)?;
        }
    }

    Ok(request)
}

fn ask_topology() -> Result<Topology> {
    let topology = cliclack::select("Choose your setup type")
        .item(
            Topology::Both,
            Topology::Both.display_name(),
            "separate CSS files",
        )
        .item(Topology::ThemeOnly, Topology::ThemeOnly.display_name(), "")
        .item(
            Topology::PluginOnly,
            Topology::PluginOnly.display_name(),
            "",
        )
        .item(
            Topology::Shared,
            Topology::Shared.display_name(),
            "single file for both theme and plugin",
        )
        .interact()?;
    Ok(topology)
}

/// Prompt until the validator accepts, or take the flag value as-is (flag
/// values still fail hard on invalid input; there is nobody to re-ask).
fn ask_validated(
    prompt: &str,
    flag_value: Option<&str>,
    check: impl Fn(&str) -> std::result::Result<(), crate::validate::InvalidInput> + 'static,
) -> Result<String> {
    if let Some(value) = flag_value {
        check(value)?;
        return Ok(value.to_string());
    }

    let answer: String = cliclack::input(prompt)
        .validate(move |input: &String| check(input).map_err(|e| e.to_string()))
        .interact()?;
    Ok(answer.trim().to_string())
}

fn ask_css_path(target: &str, flag_value: Option<&str>, yes: bool) -> Result<CssPath> {
    if let Some(value) = flag_value {
        return Ok(validate_css_path(value)?);
    }
    if yes {
        return Ok(CssPath::default_main());
    }

    let answer: String = cliclack::input(format!(
        "CSS path inside the {} folder (press Enter for default)",
        target
    ))
    .placeholder(DEFAULT_CSS_PATH)
    .default_input(DEFAULT_CSS_PATH)
    .validate(|input: &String| validate_css_path(input).map(|_| ()).map_err(|e| e.to_string()))
    .interact()?;
    Ok(validate_css_path(&answer)?)
}

fn print_checklist(checklist: &verify::ChecklistReport) -> Result<()> {
    println!();
    println!("  Verifying installation");
    for item in &checklist.items {
        if item.passed {
            println!("  {} {}", CHECK.to_string().green(), item.label);
        } else {
            println!("  {} {}", CROSS.to_string().red(), item.label);
        }
    }
    println!();

    if checklist.passed() {
        cliclack::log::success("All checks passed! Your Tailwind CSS setup is ready.")?;
    } else {
        cliclack::log::warning("Some checks failed. Please review the list above.")?;
    }
    Ok(())
}

/// Where to edit styles, and how to enqueue stylesheets the setup did not
/// wire up itself.
fn print_guidance(plan: &LayoutPlan, report: &MaterializationReport) -> Result<()> {
    println!("  {}", "CSS editing guide".bold());
    match plan.topology {
        Topology::Both => {
            println!("    src/shared.css  -> styles used by both theme and plugin");
            println!("    src/plugin.css  -> plugin-only styles (imports shared)");
            println!("    src/theme.css   -> theme-only styles (imports shared)");
        }
        _ => {
            println!("    src/input.css   -> all of your custom styles");
        }
    }
    println!();

    // Enqueue snippets: for shared output always (no example files are
    // generated), otherwise only for targets whose example file already
    // existed and was left alone.
    if let Some(shared) = &plan.shared {
        println!("  {}", "Enqueue the shared stylesheet".bold());
        println!();
        println!("  From your plugin:");
        println!(
            "{}",
            indent(&content::shared_enqueue_snippet(
                &shared.plugin_name,
                &shared.css_output
            ))
        );
        println!();
        println!("  From your theme:");
        println!(
            "{}",
            indent(&content::shared_enqueue_snippet(
                &shared.theme_name,
                &shared.css_output
            ))
        );
        println!();
        return Ok(());
    }

    let skipped_example = |path: &str| {
        report
            .entries
            .iter()
            .any(|e| e.path == path && e.status == ArtifactStatus::SkippedExisting)
    };

    for file in plan.outputs.iter().filter(|f| f.kind == FileKind::ExampleCode) {
        if !skipped_example(file.path.as_str()) {
            continue;
        }
        if let Some(plugin) = plan.plugin.as_ref().filter(|p| file.path == p.dir.join(&format!("{}.php", p.name))) {
            println!(
                "  {} already has a main file; add this to enqueue the stylesheet:",
                plugin.name
            );
            println!(
                "{}",
                indent(&content::plugin_enqueue_snippet(&plugin.name, &plugin.css_path))
            );
            println!();
        }
        if let Some(theme) = plan.theme.as_ref().filter(|t| file.path == t.dir.join("functions.php")) {
            println!(
                "  {} already has a functions.php; add this to enqueue the stylesheet:",
                theme.name
            );
            println!(
                "{}",
                indent(&content::theme_enqueue_snippet(&theme.name, &theme.css_path))
            );
            println!();
        }
    }

    Ok(())
}

fn indent(snippet: &str) -> String {
    snippet
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_next_steps(plan: &LayoutPlan) {
    println!("  {}", "Development commands".bold());
    println!("    npm run dev         (watch and rebuild)");
    println!("    npm run build:prod  (production build)");
    if plan.topology == Topology::Both {
        println!("    npm run watch:plugin / npm run watch:theme  (one target only)");
    }
    println!();
    println!("  {}", "CSS output".bold());
    for output in plan.css_outputs() {
        println!("    {}", output);
    }
    println!();
}

/// Run the cleanup flow: list, confirm, remove.
pub async fn run_cleanup(args: CleanupArgs) -> Result<()> {
    cliclack::intro("WordPress Tailwind Setup - Cleanup")?;

    let root = std::env::current_dir().context("Cannot determine the current directory")?;

    let removable = cleanup::removable_toolkit_files(&root);
    if removable.is_empty() {
        cliclack::log::info("No toolkit files found; nothing to clean up.")?;
        cliclack::outro("Already clean.")?;
        return Ok(());
    }

    println!();
    println!("  Files that will be {} (toolkit files):", "removed".red());
    for name in &removable {
        println!("    {}", name);
    }
    println!();
    println!("  Files that will be {} (your project):", "kept".green());
    for name in cleanup::kept_project_files(&root) {
        println!("    {}", name);
    }
    println!();

    let confirmed = if args.yes {
        true
    } else {
        cliclack::confirm("Remove toolkit files?")
            .initial_value(false)
            .interact()?
    };

    if !confirmed {
        cliclack::outro("Cleanup cancelled. All files remain unchanged.")?;
        return Ok(());
    }

    let report = cleanup::remove_toolkit_files(&root).await;
    for name in &report.removed {
        cliclack::log::success(format!("Removed: {}", name))?;
    }
    for (name, reason) in &report.failed {
        cliclack::log::warning(format!("Failed to remove {}: {}", name, reason))?;
    }

    cleanup::write_clean_gitignore(&root)
        .await
        .context("Could not write the clean .gitignore")?;
    cliclack::log::success("Updated .gitignore for the clean project")?;

    cliclack::outro(format!(
        "Cleanup complete! Removed {} toolkit file(s).",
        report.removed.len()
    ))?;
    Ok(())
}
