//! Topology resolution: validated inputs in, a complete LayoutPlan out

use crate::content;
use crate::layout::plan::{
    Dependency, FileKind, LayoutPlan, PlannedFile, SharedLayout, TargetLayout, Topology,
    PARALLEL_WATCHER, PARALLEL_WATCHER_VERSION,
};
use crate::validate::{CssPath, FolderName, RelPath};
use thiserror::Error;

/// A plan cannot be built from the supplied fields. The interactive
/// collector enforces the field table before calling [`resolve`], so either
/// variant indicates caller misuse rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{topology} setup requires {field}")]
    MissingField {
        topology: &'static str,
        field: &'static str,
    },

    #[error("{topology} setup does not accept {field}")]
    UnexpectedField {
        topology: &'static str,
        field: &'static str,
    },
}

/// Validated parameters for one setup run
#[derive(Debug, Clone)]
pub struct SetupRequest {
    pub topology: Topology,
    pub plugin_name: Option<FolderName>,
    pub theme_name: Option<FolderName>,
    pub shared_path: Option<RelPath>,
    /// CSS output path inside the plugin folder
    pub plugin_css_path: CssPath,
    /// CSS output path inside the theme folder
    pub theme_css_path: CssPath,
}

impl SetupRequest {
    /// Request with no names supplied and both CSS paths at their default.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            plugin_name: None,
            theme_name: None,
            shared_path: None,
            plugin_css_path: CssPath::default_main(),
            theme_css_path: CssPath::default_main(),
        }
    }
}

fn require<'a, T>(
    value: &'a Option<T>,
    topology: Topology,
    field: &'static str,
) -> Result<&'a T, ConfigError> {
    value.as_ref().ok_or(ConfigError::MissingField {
        topology: topology.slug(),
        field,
    })
}

fn forbid<T>(value: &Option<T>, topology: Topology, field: &'static str) -> Result<(), ConfigError> {
    if value.is_some() {
        return Err(ConfigError::UnexpectedField {
            topology: topology.slug(),
            field,
        });
    }
    Ok(())
}

fn plugin_target(name: &FolderName, css_path: &CssPath) -> TargetLayout {
    let dir = RelPath::plugins_dir().join(name.as_str());
    let css_output = dir.join(css_path.as_str());
    TargetLayout {
        name: name.clone(),
        dir,
        css_path: css_path.clone(),
        css_output,
    }
}

fn theme_target(name: &FolderName, css_path: &CssPath) -> TargetLayout {
    let dir = RelPath::themes_dir().join(name.as_str());
    let css_output = dir.join(css_path.as_str());
    TargetLayout {
        name: name.clone(),
        dir,
        css_path: css_path.clone(),
        css_output,
    }
}

/// Resolve a request into the full layout plan.
///
/// Fails when a field required by the topology is missing, or a forbidden
/// one was supplied (see the field table in the crate docs). Pure: no
/// filesystem access.
pub fn resolve(req: &SetupRequest) -> Result<LayoutPlan, ConfigError> {
    let t = req.topology;

    let (plugin, theme, shared) = match t {
        Topology::Both => {
            let plugin = require(&req.plugin_name, t, "a plugin folder name")?;
            let theme = require(&req.theme_name, t, "a theme folder name")?;
            forbid(&req.shared_path, t, "a shared CSS path")?;
            (
                Some(plugin_target(plugin, &req.plugin_css_path)),
                Some(theme_target(theme, &req.theme_css_path)),
                None,
            )
        }
        Topology::ThemeOnly => {
            forbid(&req.plugin_name, t, "a plugin folder name")?;
            let theme = require(&req.theme_name, t, "a theme folder name")?;
            forbid(&req.shared_path, t, "a shared CSS path")?;
            (None, Some(theme_target(theme, &req.theme_css_path)), None)
        }
        Topology::PluginOnly => {
            let plugin = require(&req.plugin_name, t, "a plugin folder name")?;
            forbid(&req.theme_name, t, "a theme folder name")?;
            forbid(&req.shared_path, t, "a shared CSS path")?;
            (Some(plugin_target(plugin, &req.plugin_css_path)), None, None)
        }
        Topology::Shared => {
            let plugin = require(&req.plugin_name, t, "a plugin folder name")?;
            let theme = require(&req.theme_name, t, "a theme folder name")?;
            let dir = require(&req.shared_path, t, "a shared CSS path")?;
            let shared = SharedLayout {
                plugin_name: plugin.clone(),
                theme_name: theme.clone(),
                dir: dir.clone(),
                css_output: dir.join("main.css"),
            };
            (None, None, Some(shared))
        }
    };

    let directories = plan_directories(&plugin, &theme, &shared);
    let outputs = plan_outputs(t, &plugin, &theme, &shared);
    let build_commands = plan_build_commands(t, &plugin, &theme, &shared);
    let gitignore_entries = plan_gitignore_entries(&plugin, &theme, &shared);

    let extra_dev_dependency = match t {
        Topology::Both => Some(Dependency {
            name: PARALLEL_WATCHER,
            version: PARALLEL_WATCHER_VERSION,
        }),
        _ => None,
    };

    Ok(LayoutPlan {
        topology: t,
        plugin,
        theme,
        shared,
        directories,
        outputs,
        build_commands,
        extra_dev_dependency,
        gitignore_entries,
    })
}

fn plan_directories(
    plugin: &Option<TargetLayout>,
    theme: &Option<TargetLayout>,
    shared: &Option<SharedLayout>,
) -> Vec<RelPath> {
    let mut dirs = Vec::new();
    let mut push = |dir: RelPath| {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    };

    for target in [plugin, theme].into_iter().flatten() {
        push(target.dir.clone());
        // Custom CSS paths may nest; ensure the output's directory too
        if let Some(parent) = target.css_output.parent() {
            push(parent);
        }
    }
    if let Some(shared) = shared {
        push(shared.dir.clone());
    }
    dirs
}

fn plan_outputs(
    topology: Topology,
    plugin: &Option<TargetLayout>,
    theme: &Option<TargetLayout>,
    shared: &Option<SharedLayout>,
) -> Vec<PlannedFile> {
    let mut outputs = Vec::new();

    // Input stylesheets the user edits
    match topology {
        Topology::Both => {
            for (path, body) in [
                ("src/shared.css", content::shared_css()),
                ("src/plugin.css", content::plugin_css()),
                ("src/theme.css", content::theme_css()),
            ] {
                outputs.push(PlannedFile {
                    path: RelPath::known(path),
                    kind: FileKind::SourceStylesheet,
                    content: body.to_string(),
                });
            }
        }
        _ => outputs.push(PlannedFile {
            path: RelPath::known("src/input.css"),
            kind: FileKind::SourceStylesheet,
            content: content::input_css().to_string(),
        }),
    }

    outputs.push(PlannedFile {
        path: RelPath::known("postcss.config.js"),
        kind: FileKind::ToolConfig,
        content: content::postcss_config().to_string(),
    });

    outputs.push(PlannedFile {
        path: RelPath::known("package.json"),
        kind: FileKind::Manifest,
        content: String::new(),
    });

    // Compiled-output placeholders
    for target in [plugin, theme].into_iter().flatten() {
        outputs.push(PlannedFile {
            path: target.css_output.clone(),
            kind: FileKind::GeneratedCss,
            content: content::initial_css().to_string(),
        });
    }
    if let Some(shared) = shared {
        outputs.push(PlannedFile {
            path: shared.css_output.clone(),
            kind: FileKind::GeneratedCss,
            content: content::initial_css().to_string(),
        });
    }

    // Example entry points; the shared topology gets enqueue guidance
    // instead of files
    if let Some(plugin) = plugin {
        outputs.push(PlannedFile {
            path: plugin.dir.join(&format!("{}.php", plugin.name)),
            kind: FileKind::ExampleCode,
            content: content::example_plugin_php(&plugin.name, &plugin.css_path),
        });
    }
    if let Some(theme) = theme {
        outputs.push(PlannedFile {
            path: theme.dir.join("functions.php"),
            kind: FileKind::ExampleCode,
            content: content::example_theme_functions_php(&theme.name, &theme.css_path),
        });
    }

    outputs.push(PlannedFile {
        path: RelPath::known(".gitignore"),
        kind: FileKind::GitIgnore,
        content: String::new(),
    });

    outputs
}

fn plan_build_commands(
    topology: Topology,
    plugin: &Option<TargetLayout>,
    theme: &Option<TargetLayout>,
    shared: &Option<SharedLayout>,
) -> Vec<(String, String)> {
    // Flag shapes (-i/-o/--watch/--minify) are the compatibility contract
    // with the tailwindcss CLI and must not change.
    let watch_cmd = |input: &str, output: &RelPath| {
        format!("tailwindcss -i {} -o ./{} --watch", input, output)
    };
    let minify_cmd = |input: &str, output: &RelPath| {
        format!(
            "NODE_ENV=production tailwindcss -i {} -o ./{} --minify",
            input, output
        )
    };

    let mut commands = Vec::new();
    let mut add = |name: &str, cmd: String| commands.push((name.to_string(), cmd));

    match topology {
        Topology::Both => {
            let plugin = plugin.as_ref().expect("Both topology resolved a plugin");
            let theme = theme.as_ref().expect("Both topology resolved a theme");
            add("build", watch_cmd("./src/plugin.css", &plugin.css_output));
            add(
                "build:prod",
                minify_cmd("./src/plugin.css", &plugin.css_output),
            );
            add(
                "build:theme",
                watch_cmd("./src/theme.css", &theme.css_output),
            );
            add(
                "build:theme:prod",
                minify_cmd("./src/theme.css", &theme.css_output),
            );
            add(
                "watch",
                "concurrently \"npm run watch:plugin\" \"npm run watch:theme\"".to_string(),
            );
            add(
                "watch:plugin",
                watch_cmd("./src/plugin.css", &plugin.css_output),
            );
            add(
                "watch:theme",
                watch_cmd("./src/theme.css", &theme.css_output),
            );
        }
        Topology::ThemeOnly => {
            let theme = theme.as_ref().expect("ThemeOnly topology resolved a theme");
            add("build", watch_cmd("./src/input.css", &theme.css_output));
            add(
                "build:prod",
                minify_cmd("./src/input.css", &theme.css_output),
            );
            add("watch", "npm run watch:theme".to_string());
            add(
                "watch:theme",
                watch_cmd("./src/input.css", &theme.css_output),
            );
        }
        Topology::PluginOnly => {
            let plugin = plugin
                .as_ref()
                .expect("PluginOnly topology resolved a plugin");
            add("build", watch_cmd("./src/input.css", &plugin.css_output));
            add(
                "build:prod",
                minify_cmd("./src/input.css", &plugin.css_output),
            );
            add("watch", "npm run watch:plugin".to_string());
            add(
                "watch:plugin",
                watch_cmd("./src/input.css", &plugin.css_output),
            );
        }
        Topology::Shared => {
            let shared = shared.as_ref().expect("Shared topology resolved a layout");
            add("build", watch_cmd("./src/input.css", &shared.css_output));
            add(
                "build:prod",
                minify_cmd("./src/input.css", &shared.css_output),
            );
            add("watch", watch_cmd("./src/input.css", &shared.css_output));
        }
    }

    add("dev", "npm run watch".to_string());
    commands
}

fn plan_gitignore_entries(
    plugin: &Option<TargetLayout>,
    theme: &Option<TargetLayout>,
    shared: &Option<SharedLayout>,
) -> Vec<String> {
    let mut entries = vec!["# Tailwind CSS".to_string(), "node_modules/".to_string()];

    if let Some(plugin) = plugin {
        entries.push(format!("wp-content/plugins/*/{}", plugin.css_path));
    }
    if let Some(theme) = theme {
        entries.push(format!("wp-content/themes/*/{}", theme.css_path));
    }
    if let Some(shared) = shared {
        entries.push(shared.css_output.as_str().to_string());
    }

    entries.push(".DS_Store".to_string());
    entries.push("*.log".to_string());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_css_path, validate_folder_name, validate_path};

    fn request(topology: Topology, plugin: Option<&str>, theme: Option<&str>, shared: Option<&str>) -> SetupRequest {
        let mut req = SetupRequest::new(topology);
        req.plugin_name = plugin.map(|p| validate_folder_name(p).unwrap());
        req.theme_name = theme.map(|t| validate_folder_name(t).unwrap());
        req.shared_path = shared.map(|s| validate_path(s).unwrap());
        req
    }

    #[test]
    fn test_both_requires_plugin_and_theme() {
        let err = resolve(&request(Topology::Both, None, Some("acme-theme"), None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field, .. } if field.contains("plugin")));

        let err = resolve(&request(Topology::Both, Some("acme"), None, None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field, .. } if field.contains("theme")));

        assert!(resolve(&request(Topology::Both, Some("acme"), Some("acme-theme"), None)).is_ok());
    }

    #[test]
    fn test_both_forbids_shared_path() {
        let err = resolve(&request(
            Topology::Both,
            Some("acme"),
            Some("acme-theme"),
            Some("wp-content/shared"),
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedField { .. }));
    }

    #[test]
    fn test_theme_only_field_table() {
        assert!(resolve(&request(Topology::ThemeOnly, None, Some("acme-theme"), None)).is_ok());

        let err = resolve(&request(Topology::ThemeOnly, Some("acme"), Some("acme-theme"), None))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedField { field, .. } if field.contains("plugin")));

        let err = resolve(&request(Topology::ThemeOnly, None, None, None)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { .. }));
    }

    #[test]
    fn test_plugin_only_field_table() {
        assert!(resolve(&request(Topology::PluginOnly, Some("acme"), None, None)).is_ok());

        let err = resolve(&request(Topology::PluginOnly, Some("acme"), Some("t"), None)).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedField { field, .. } if field.contains("theme")));
    }

    #[test]
    fn test_shared_requires_all_three() {
        assert!(resolve(&request(
            Topology::Shared,
            Some("acme"),
            Some("acme-theme"),
            Some("wp-content/shared"),
        ))
        .is_ok());

        let err = resolve(&request(Topology::Shared, Some("acme"), Some("acme-theme"), None))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field, .. } if field.contains("shared")));
    }

    #[test]
    fn test_both_scenario_watch_and_dependency() {
        let plan =
            resolve(&request(Topology::Both, Some("acme"), Some("acme-theme"), None)).unwrap();

        assert_eq!(
            plan.command("watch").unwrap(),
            "concurrently \"npm run watch:plugin\" \"npm run watch:theme\""
        );
        assert!(plan.command("watch:plugin").unwrap().contains("--watch"));
        assert!(plan.command("watch:theme").unwrap().contains("--watch"));
        assert_eq!(
            plan.extra_dev_dependency,
            Some(Dependency {
                name: "concurrently",
                version: "^8.2.2"
            })
        );

        // Default assets/css directories for both targets
        let dirs: Vec<&str> = plan.directories.iter().map(|d| d.as_str()).collect();
        assert!(dirs.contains(&"wp-content/plugins/acme"));
        assert!(dirs.contains(&"wp-content/plugins/acme/assets/css"));
        assert!(dirs.contains(&"wp-content/themes/acme-theme"));
        assert!(dirs.contains(&"wp-content/themes/acme-theme/assets/css"));
    }

    #[test]
    fn test_both_commands_use_split_inputs() {
        let plan =
            resolve(&request(Topology::Both, Some("acme"), Some("acme-theme"), None)).unwrap();

        assert_eq!(
            plan.command("build").unwrap(),
            "tailwindcss -i ./src/plugin.css -o ./wp-content/plugins/acme/assets/css/main.css --watch"
        );
        assert_eq!(
            plan.command("build:theme:prod").unwrap(),
            "NODE_ENV=production tailwindcss -i ./src/theme.css -o ./wp-content/themes/acme-theme/assets/css/main.css --minify"
        );
    }

    #[test]
    fn test_theme_only_commands() {
        let plan = resolve(&request(Topology::ThemeOnly, None, Some("acme-theme"), None)).unwrap();

        assert_eq!(
            plan.command("build").unwrap(),
            "tailwindcss -i ./src/input.css -o ./wp-content/themes/acme-theme/assets/css/main.css --watch"
        );
        assert_eq!(plan.command("watch").unwrap(), "npm run watch:theme");
        assert_eq!(plan.command("dev").unwrap(), "npm run watch");
        assert!(plan.command("watch:plugin").is_none());
        assert!(plan.extra_dev_dependency.is_none());
    }

    #[test]
    fn test_shared_scenario_single_output() {
        let plan = resolve(&request(
            Topology::Shared,
            Some("acme"),
            Some("acme-theme"),
            Some("wp-content/shared"),
        ))
        .unwrap();

        let outputs = plan.css_outputs();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].as_str(), "wp-content/shared/main.css");

        // Every tailwind invocation targets the one shared output
        for (_, cmd) in plan
            .build_commands
            .iter()
            .filter(|(_, cmd)| cmd.starts_with("tailwindcss") || cmd.contains(" tailwindcss "))
        {
            assert!(cmd.contains("-o ./wp-content/shared/main.css"));
        }

        // No example files for shared; guidance is shown instead
        assert!(!plan.outputs.iter().any(|f| f.kind == FileKind::ExampleCode));
    }

    #[test]
    fn test_custom_css_path_flows_into_plan() {
        let mut req = request(Topology::PluginOnly, Some("acme"), None, None);
        req.plugin_css_path = validate_css_path("dist/styles/app.css").unwrap();
        let plan = resolve(&req).unwrap();

        let dirs: Vec<&str> = plan.directories.iter().map(|d| d.as_str()).collect();
        assert!(dirs.contains(&"wp-content/plugins/acme/dist/styles"));
        assert!(plan
            .command("build")
            .unwrap()
            .contains("-o ./wp-content/plugins/acme/dist/styles/app.css"));
        assert!(plan
            .gitignore_entries
            .contains(&"wp-content/plugins/*/dist/styles/app.css".to_string()));
    }

    #[test]
    fn test_both_plans_split_source_trio() {
        let plan =
            resolve(&request(Topology::Both, Some("acme"), Some("acme-theme"), None)).unwrap();
        let sources: Vec<&str> = plan
            .source_stylesheets()
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(sources, ["src/shared.css", "src/plugin.css", "src/theme.css"]);
    }

    #[test]
    fn test_single_topologies_plan_input_css() {
        for (topology, plugin, theme, shared) in [
            (Topology::ThemeOnly, None, Some("t"), None),
            (Topology::PluginOnly, Some("p"), None, None),
            (Topology::Shared, Some("p"), Some("t"), Some("wp-content/shared")),
        ] {
            let plan = resolve(&request(topology, plugin, theme, shared)).unwrap();
            let sources: Vec<&str> = plan
                .source_stylesheets()
                .iter()
                .map(|p| p.as_str())
                .collect();
            assert_eq!(sources, ["src/input.css"], "topology {}", topology);
        }
    }
}
