//! File and stdin/stdout plumbing for command input and output.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read command input from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write command output to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, data: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("Failed to write {}", p.display())),
        None => {
            println!("{}", data);
            Ok(())
        }
    }
}
