mod cli;
mod commands;
mod file_io;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { input } => {
            commands::save::detect(input.as_deref())?;
        }

        Commands::Decode {
            input,
            output,
            pretty,
        } => {
            commands::save::decode(input.as_deref(), output.as_deref(), pretty)?;
        }

        Commands::Encode {
            input,
            output,
            scheme,
        } => {
            commands::save::encode(input.as_deref(), output.as_deref(), scheme.into())?;
        }

        Commands::Convert {
            input,
            output,
            scheme,
        } => {
            commands::save::convert_save(
                input.as_deref(),
                output.as_deref(),
                scheme.map(Into::into),
            )?;
        }
    }

    Ok(())
}
