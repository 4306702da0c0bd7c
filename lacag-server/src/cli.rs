//! Offline maintenance commands.
//!
//! These operate on the configured storage directly, without starting the
//! HTTP server.

use anyhow::Context;
use clap::Subcommand;
use lacag_core::config::ResolverConfig;
use lacag_core::routing::WalletRoutingStore;
use lacag_sdk::objects::ResolveMode;
use std::io::Write;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (the default)
    Serve,
    /// Print the wallet routing configuration as JSON
    Export,
    /// Replace the wallet routing configuration with a JSON document
    Import {
        /// Path to the document, as produced by `export`
        file: PathBuf,
    },
    /// Restore the built-in wallet routing configuration
    Reset,
    /// Show which wallet types a phone number routes to
    Resolve {
        phone: String,
        /// `first` or `all`; defaults to the configured mode
        #[arg(long)]
        mode: Option<ResolveMode>,
        /// Treat the number as local format and add the country code
        #[arg(long)]
        normalize: bool,
    },
}

/// Run a maintenance command against `store`, writing results to `out`.
pub fn run(
    command: Command,
    store: &WalletRoutingStore,
    resolver: &ResolverConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Serve => anyhow::bail!("`serve` is handled by main"),
        Command::Export => {
            let document = store.export_config()?;
            writeln!(out, "{document}")?;
        }
        Command::Import { file } => {
            let document = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            store
                .import_config(&document)
                .with_context(|| format!("failed to import {}", file.display()))?;
            writeln!(
                out,
                "imported {} wallet types",
                store.config().wallet_types.len()
            )?;
        }
        Command::Reset => {
            store.reset_to_default()?;
            writeln!(out, "wallet routing configuration reset to defaults")?;
        }
        Command::Resolve {
            phone,
            mode,
            normalize,
        } => {
            let mode = mode.unwrap_or(resolver.mode);
            let phone = if normalize {
                resolver
                    .normalize(&phone)
                    .with_context(|| format!("{phone:?} is not a phone number"))?
            } else {
                phone
            };
            let keys = store.resolve(&phone, mode);
            if keys.is_empty() {
                writeln!(out, "{phone}: no matching wallet type")?;
            } else {
                writeln!(out, "{phone}: {}", keys.join(", "))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacag_core::storage::FileStorage;
    use std::sync::Arc;

    fn run_to_string(command: Command, store: &WalletRoutingStore) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(command, store, &ResolverConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_export_import_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = WalletRoutingStore::load(Arc::new(FileStorage::new(dir.path().join("data"))));

        let exported = run_to_string(Command::Export, &store).unwrap();
        let edited = exported.replace("\"+25290\"", "\"+25290\", \"+25291\"");
        let doc = dir.path().join("routing.json");
        std::fs::write(&doc, edited).unwrap();

        let output = run_to_string(Command::Import { file: doc }, &store).unwrap();
        assert_eq!(output.trim(), "imported 4 wallet types");

        // A new process sees the imported prefixes.
        let restarted =
            WalletRoutingStore::load(Arc::new(FileStorage::new(dir.path().join("data"))));
        let output = run_to_string(
            Command::Resolve {
                phone: "0911234567".to_string(),
                mode: None,
                normalize: true,
            },
            &restarted,
        )
        .unwrap();
        assert_eq!(output.trim(), "+252911234567: MWALLET_SAHAL");

        run_to_string(Command::Reset, &restarted).unwrap();
        let output = run_to_string(
            Command::Resolve {
                phone: "+252911234567".to_string(),
                mode: Some(ResolveMode::All),
                normalize: false,
            },
            &restarted,
        )
        .unwrap();
        assert_eq!(output.trim(), "+252911234567: MWALLET_WAAFI");
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = WalletRoutingStore::load(Arc::new(FileStorage::new(dir.path())));
        let err = run_to_string(
            Command::Import {
                file: dir.path().join("absent.json"),
            },
            &store,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
