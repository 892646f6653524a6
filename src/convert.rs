use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};

use crate::header::write_c_header;

/// Convert a binary file into a C header declaring its contents as a
/// `uint8_t` array.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Convert {
    /// Path to the input binary file.
    input: PathBuf,
    /// Path to the output header file. Overwritten if it exists.
    output: PathBuf,
    /// Name of the emitted array, also uppercased for the include guard.
    array_name: String,
}

impl Convert {
    pub fn run(self) -> Result<()> {
        // Read fully before touching the output path so a failed read
        // never leaves a partial or empty output file behind.
        let raw_bytes = std::fs::read(&self.input)
            .wrap_err_with(|| format!("failed to read input file '{}'", self.input.display()))?;

        let source_name = self
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut output_file = std::fs::File::create(&self.output).wrap_err_with(|| {
            format!("failed to create output file '{}'", self.output.display())
        })?;
        write_c_header(&mut output_file, &source_name, &self.array_name, &raw_bytes)
            .wrap_err_with(|| format!("failed to write output file '{}'", self.output.display()))?;

        println!(
            "Successfully converted '{}' to '{}'.",
            self.input.display(),
            self.output.display()
        );

        Ok(())
    }
}
