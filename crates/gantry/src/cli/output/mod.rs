//! Output formatting utilities

use console::style;

use gantry_lint::{Diagnostic, Severity};

/// Render one diagnostic in compiler style:
///
/// ```text
/// error[type-format]: unexpected whitespace after commit type
///   --> 1:5
///    | feat (login): add oauth
///    |     ^
/// ```
pub fn render_diagnostic(diag: &Diagnostic) {
    let tag = match diag.severity {
        Severity::Error => style("error").red().bold(),
        Severity::Warning => style("warning").yellow().bold(),
    };
    println!("{}[{}]: {}", tag, diag.source, diag.message);
    println!("  --> {}:{}", diag.line, diag.column);

    for context in &diag.context {
        println!("   {} {}", style("|").dim(), context);
        println!(
            "   {} {}{}",
            style("|").dim(),
            " ".repeat(diag.column.saturating_sub(1)),
            style(underline(diag)).cyan()
        );
    }
    println!();
}

/// Caret plus tildes covering the fix-it span, when one is attached
fn underline(diag: &Diagnostic) -> String {
    let width = diag
        .fix_it
        .filter(|f| f.index == diag.column && f.length > 0)
        .map_or(1, |f| f.length);
    let mut marker = String::from("^");
    marker.push_str(&"~".repeat(width.saturating_sub(1)));
    marker
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}
