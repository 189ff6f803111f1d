use clap::Parser;

pub mod types;
pub mod validation;

pub use types::*;

/// Parses the command line and resolves secrets.
///
/// # Errors
///
/// Will return `Err` if a flag value is rejected by validation.
pub fn args_checks() -> Result<CleanArgs, String> {
    let mut args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}
