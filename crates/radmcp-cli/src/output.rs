//! Output formatting for CLI responses.

use serde_json::Value;

use radmcp_types::{DiagnosticError, GatewayError};

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("[OK] {message}");
}

/// Prints an informational message.
pub fn print_info(message: &str) {
    println!("[..] {message}");
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

/// Prints an error line followed by its hint and fix, when known.
pub fn print_failure(err: &GatewayError, hint: Option<&str>, fix: Option<&str>) {
    print_error(&err.to_string());
    if let Some(hint) = hint {
        eprintln!("  hint: {hint}");
    }
    if let Some(fix) = fix {
        eprintln!("  fix: {fix}");
    }
}

/// Prints a failure with its diagnostics and returns the error that
/// ends the command. `context` names what was being done.
pub fn report_failure<E>(context: &str, err: E) -> anyhow::Error
where
    E: DiagnosticError + Into<GatewayError>,
{
    let (hint, fix) = (err.hint(), err.fix());
    let err: GatewayError = err.into();
    let err = err.with_context(context);
    print_failure(&err, hint.as_deref(), fix.as_deref());
    anyhow::anyhow!("{context} failed")
}

/// Prints a tool's raw output and, when present, its parsed data.
pub fn print_tool_output(output: &str, data: Option<&Value>) {
    println!("Output:\n{}", output.trim_end());
    if let Some(data) = data {
        println!("Structured data:");
        println!(
            "{}",
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radmcp_executor::ExecutorError;

    #[test]
    fn report_failure_names_context() {
        let err = report_failure(
            "tool radius_nope",
            ExecutorError::ToolNotFound {
                name: "radius_nope".into(),
            },
        );
        assert_eq!(err.to_string(), "tool radius_nope failed");
    }
}
