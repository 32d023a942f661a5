//! Output formatting for CLI responses.

use kiosk_mcp::Registry;
use kiosk_types::{DiagnosticError, OperationKind};

/// Renders the cause and fix lines of a diagnostic, empty if it has
/// neither.
pub fn diagnostic_lines(err: &dyn DiagnosticError) -> String {
    let mut out = String::new();
    if let Some(hint) = err.hint() {
        out.push_str(&format!("  Cause: {hint}\n"));
    }
    if let Some(fix) = err.fix() {
        out.push_str(&format!("  Fix:   {fix}\n"));
    }
    out
}

/// Prints [`diagnostic_lines`] to stderr.
pub fn print_diagnostic(err: &dyn DiagnosticError) {
    let lines = diagnostic_lines(err);
    if !lines.is_empty() {
        eprint!("\n{lines}\n");
    }
}

/// Renders one operation per line: kind, name, description. Resources
/// also show their URI.
pub fn operation_table(registry: &Registry, kind: Option<OperationKind>) -> String {
    let rows: Vec<_> = registry
        .iter()
        .filter(|d| kind.map_or(true, |k| d.kind() == k))
        .collect();
    let width = rows.iter().map(|d| d.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for d in rows {
        let name = format!("{:<width$}", d.name);
        let line = match &d.uri {
            Some(uri) => format!("{:<8} {name}  {} <{uri}>", d.kind().as_str(), d.description),
            None => format!("{:<8} {name}  {}", d.kind().as_str(), d.description),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
