use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

pub(crate) const LEDGER_ENV: &str = "EWALLET_FILE";
pub(crate) const LEDGER_FILE_NAME: &str = "wallet.dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) ledger_path: PathBuf,
    pub(crate) color: bool,
}

/// Settings pulled out of argv before command dispatch.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArgOverrides {
    pub(crate) file: Option<PathBuf>,
    pub(crate) no_color: bool,
}

impl Config {
    /// Resolve from `--file`, then `EWALLET_FILE`, then the platform data directory.
    pub(crate) fn resolve(args: &mut Vec<String>) -> Result<Self> {
        let overrides = take_overrides(args)?;
        let ledger_path = match overrides.file {
            Some(path) => path,
            None => match std::env::var_os(LEDGER_ENV) {
                Some(path) if !path.is_empty() => PathBuf::from(path),
                _ => default_ledger_path()?,
            },
        };

        let color = !overrides.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();

        Ok(Self { ledger_path, color })
    }
}

/// Strip `--file <path>`, `-f <path>` and `--no-color` from `args`, leaving the rest in order.
pub(crate) fn take_overrides(args: &mut Vec<String>) -> Result<ArgOverrides> {
    let mut overrides = ArgOverrides::default();
    let mut rest = Vec::with_capacity(args.len());
    let mut iter = args.drain(..);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{arg} requires a path"))?;
                overrides.file = Some(PathBuf::from(crate::run::shellexpand(&path)));
            }
            "--no-color" => overrides.no_color = true,
            _ => rest.push(arg),
        }
    }

    drop(iter);
    *args = rest;
    Ok(overrides)
}

fn default_ledger_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ewallet", "EWallet")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join(LEDGER_FILE_NAME))
}
