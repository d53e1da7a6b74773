use crate::emit::EmittedOutput;
use crate::error::{Error, Result};
use clio::ClioPath;
use std::io::Write;

/// Writes the generated source to `path` (`-` is stdout) in one go and returns
/// the number of bytes written. Files are created or truncated.
pub fn write_output(output: &EmittedOutput, path: ClioPath) -> Result<usize> {
    let mut out = path.create().map_err(sink_err)?;

    out.write_all(output.as_str().as_bytes())
        .map_err(Error::OutputSink)?;
    out.finish().map_err(sink_err)?;

    Ok(output.len())
}

fn sink_err(e: clio::Error) -> Error {
    Error::OutputSink(std::io::Error::other(e))
}
