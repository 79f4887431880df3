//! Error reporting for the binary

use miette::Diagnostic;
use thiserror::Error;

/// Install miette as the global report handler.
pub fn setup_error_reporting() -> Result<(), ReportingError> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .unicode(true)
                .context_lines(0)
                .build(),
        )
    }))
    .map_err(|e| ReportingError::Hook(e.to_string()))
}

#[derive(Error, Debug, Diagnostic)]
pub enum ReportingError {
    #[error("failed to install error reporting hook: {0}")]
    #[diagnostic(code(flow_demo::reporting_hook))]
    Hook(String),

    #[error("could not write the walkthrough to stdout")]
    #[diagnostic(
        code(flow_demo::output),
        help("stdout stopped accepting output")
    )]
    Output(#[source] crate::DemoError),
}

/// Render a library error through the installed miette handler.
pub fn render_output_error(err: crate::DemoError) -> miette::Report {
    miette::Report::new(ReportingError::Output(err))
}
