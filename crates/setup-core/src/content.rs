//! Payload templates for generated files
//!
//! The layout engine treats every file body as an opaque string; this module
//! owns those strings. Folder names are interpolated into PHP identifiers
//! via [`FolderName::php_prefix`] so hyphenated names still produce valid
//! function names.

use crate::validate::{CssPath, FolderName, RelPath};

/// Placeholder written at each compiled-CSS output path. The watch command
/// replaces it on first run.
pub fn initial_css() -> &'static str {
    r#"/* Tailwind CSS - Generated by WordPress Tailwind Setup */
/* This file will be automatically updated when you run the watch command */

@tailwind base;
@tailwind components;
@tailwind utilities;

/* Your custom styles can be added below */
"#
}

/// Single-target input stylesheet (`src/input.css`) for theme-only,
/// plugin-only, and shared setups.
pub fn input_css() -> &'static str {
    r#"@tailwind base;
@tailwind components;
@tailwind utilities;

/* Add your custom styles below */
@layer components {
}
"#
}

/// Common WordPress base imported by both per-target inputs in a
/// theme-and-plugin setup.
pub fn shared_css() -> &'static str {
    r#"@tailwind base;
@tailwind components;
@tailwind utilities;

/* Shared WordPress-specific styles */
@layer base {
  /* WordPress admin bar compatibility */
  .admin-bar {
    @apply pt-8;
  }

  /* WordPress block editor compatibility */
  .wp-block {
    @apply max-w-none;
  }
}

@layer components {
  .wp-button {
    @apply bg-wp-blue text-white px-4 py-2 rounded hover:bg-wp-blue-dark transition-colors;
  }

  .wp-form {
    @apply space-y-4;
  }

  .wp-form label {
    @apply block text-sm font-medium text-gray-700 mb-1;
  }

  .wp-post {
    @apply bg-white rounded-lg shadow-md overflow-hidden;
  }

  .wp-nav {
    @apply flex space-x-4;
  }

  .wp-nav a {
    @apply text-gray-700 hover:text-wp-blue transition-colors;
  }
}

@layer utilities {
  .wp-container {
    @apply max-w-7xl mx-auto px-4 sm:px-6 lg:px-8;
  }

  .wp-widget {
    @apply bg-white p-6 rounded-lg shadow-sm;
  }
}
"#
}

/// Plugin-specific input (`src/plugin.css`), imports the shared base.
pub fn plugin_css() -> &'static str {
    r#"@import './shared.css';

/* Plugin-specific styles */
@layer components {
  .plugin-specific {
    @apply border border-blue-500 p-4 rounded;
  }

  .wp-admin .plugin-admin {
    @apply bg-gray-100 p-4 rounded;
  }
}

/* Add any custom plugin CSS here */
"#
}

/// Theme-specific input (`src/theme.css`), imports the shared base.
pub fn theme_css() -> &'static str {
    r#"@import './shared.css';

/* Theme-specific styles */
@layer components {
  .site-header {
    @apply bg-white shadow-lg;
  }

  .site-footer {
    @apply bg-gray-800 text-white py-8;
  }
}

/* Add any custom theme CSS here */
"#
}

/// PostCSS configuration body.
pub fn postcss_config() -> &'static str {
    r#"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#
}

/// Example plugin entry-point file, created only when no file exists at the
/// target path.
pub fn example_plugin_php(name: &FolderName, css_path: &CssPath) -> String {
    let prefix = name.php_prefix();
    format!(
        r#"<?php
/**
 * Plugin Name: {name}
 * Description: A WordPress plugin with Tailwind CSS
 * Version: 1.0.0
 */

// Prevent direct access
if (!defined('ABSPATH')) {{
    exit;
}}

// Enqueue Tailwind CSS
function {prefix}_enqueue_styles() {{
    wp_enqueue_style(
        '{name}-tailwind',
        plugin_dir_url(__FILE__) . '{css_path}',
        array(),
        '1.0.0'
    );
}}
add_action('wp_enqueue_scripts', '{prefix}_enqueue_styles');

// Example admin page
function {prefix}_admin_menu() {{
    add_options_page(
        '{name} Settings',
        '{name}',
        'manage_options',
        '{name}-settings',
        '{prefix}_admin_page'
    );
}}
add_action('admin_menu', '{prefix}_admin_menu');

function {prefix}_admin_page() {{
    ?>
    <div class="wrap">
        <h1 class="wp-heading-inline">{name} Settings</h1>
        <div class="wp-container">
            <div class="bg-white p-6 rounded-lg shadow-md">
                <h2 class="text-xl font-bold text-gray-900 mb-4">Welcome to {name}!</h2>
                <p class="text-gray-700 mb-4">This plugin is now set up with Tailwind CSS.</p>
                <button class="wp-button">Save Settings</button>
            </div>
        </div>
    </div>
    <?php
}}
"#
    )
}

/// Example theme `functions.php`, created only when the file is absent.
pub fn example_theme_functions_php(name: &FolderName, css_path: &CssPath) -> String {
    let prefix = name.php_prefix();
    format!(
        r#"<?php
/**
 * {name} Theme Functions
 * Tailwind CSS Integration
 */

// Prevent direct access
if (!defined('ABSPATH')) {{
    exit;
}}

// Enqueue Tailwind CSS
function {prefix}_enqueue_styles() {{
    wp_enqueue_style(
        '{name}-tailwind',
        get_template_directory_uri() . '/{css_path}',
        array(),
        '1.0.0'
    );
}}
add_action('wp_enqueue_scripts', '{prefix}_enqueue_styles');

// Add theme support
function {prefix}_theme_support() {{
    add_theme_support('post-thumbnails');
    add_theme_support('title-tag');
    add_theme_support('custom-logo');
}}
add_action('after_setup_theme', '{prefix}_theme_support');
"#
    )
}

/// PHP snippet enqueueing a per-plugin stylesheet from an existing plugin
/// file. Shown as guidance, never written to disk.
pub fn plugin_enqueue_snippet(name: &FolderName, css_path: &CssPath) -> String {
    let prefix = name.php_prefix();
    format!(
        r#"// Enqueue Tailwind CSS for {name}
function {prefix}_enqueue_styles() {{
    wp_enqueue_style(
        '{name}-tailwind',
        plugin_dir_url(__FILE__) . '{css_path}',
        array(),
        '1.0.0'
    );
}}
add_action('wp_enqueue_scripts', '{prefix}_enqueue_styles');"#
    )
}

/// PHP snippet enqueueing a per-theme stylesheet from an existing
/// `functions.php`.
pub fn theme_enqueue_snippet(name: &FolderName, css_path: &CssPath) -> String {
    let prefix = name.php_prefix();
    format!(
        r#"// Enqueue Tailwind CSS for {name}
function {prefix}_enqueue_styles() {{
    wp_enqueue_style(
        '{name}-tailwind',
        get_template_directory_uri() . '/{css_path}',
        array(),
        '1.0.0'
    );
}}
add_action('wp_enqueue_scripts', '{prefix}_enqueue_styles');"#
    )
}

/// PHP snippet enqueueing the shared stylesheet from a plugin or theme.
pub fn shared_enqueue_snippet(name: &FolderName, shared_output: &RelPath) -> String {
    let prefix = name.php_prefix();
    format!(
        r#"// Enqueue shared Tailwind CSS for {name}
function {prefix}_enqueue_shared_styles() {{
    wp_enqueue_style(
        '{name}-shared-tailwind',
        site_url('/{shared_output}'),
        array(),
        '1.0.0'
    );
}}
add_action('wp_enqueue_scripts', '{prefix}_enqueue_shared_styles');"#
    )
}

/// Replacement `.gitignore` written by the cleanup tool once the toolkit
/// files are removed.
pub fn clean_gitignore() -> &'static str {
    r#"# WordPress Tailwind Project - .gitignore

# Node modules
node_modules/

# Generated CSS files
wp-content/plugins/*/assets/css/*.css
wp-content/themes/*/assets/css/*.css
wp-content/plugins/*/dist/*.css
wp-content/themes/*/dist/*.css

# Logs
*.log
npm-debug.log*

# System files
.DS_Store
Thumbs.db

# IDE files
.vscode/
.idea/

# Temporary files
*.tmp
*.temp
"#
}
