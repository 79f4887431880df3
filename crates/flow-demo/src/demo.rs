//! Runs the full walkthrough.

use std::io::Write;

use tracing::{debug, info_span};

use crate::{Bindings, Result, Step};

/// Executes every step in order against `out`.
pub fn run<W: Write + ?Sized>(bindings: &Bindings, out: &mut W) -> Result<()> {
    debug!(%bindings, "starting walkthrough");
    for step in Step::ALL {
        let _span = info_span!("step", name = step.name()).entered();
        step.write(bindings, out)?;
    }
    out.flush()?;
    debug!("walkthrough finished");
    Ok(())
}

/// Runs the walkthrough in memory and returns the printed lines.
pub fn transcript(bindings: &Bindings) -> Result<Vec<String>> {
    let mut buf = Vec::new();
    run(bindings, &mut buf)?;
    let text = String::from_utf8(buf)?;
    Ok(text.lines().map(str::to_string).collect())
}
