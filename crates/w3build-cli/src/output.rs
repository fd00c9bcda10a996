//! Formatted output helpers for CLI commands.

use std::fmt::Write as _;

use w3build_manifest::BuildPlan;

/// Renders a build plan as an aligned key/value listing.
#[must_use]
pub fn render_plan(plan: &BuildPlan) -> String {
    let ignore = if plan.ignore_paths.is_empty() {
        "-".to_string()
    } else {
        plan.ignore_paths.join(", ")
    };
    let rows = [
        ("image", plan.output_image_name.clone()),
        ("dockerfile", plan.dockerfile.display().to_string()),
        ("build dir", plan.build_dir.display().to_string()),
        ("temp dir", plan.temp_dir.display().to_string()),
        ("ignore", ignore),
        ("args", plan.args.clone()),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<12}{value}");
    }
    out
}
