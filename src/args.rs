use std::fs;
use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use selectors::catalog::FEEDBACK;
use selectors::{parse_signature_list, Catalog, RevertData, Selector, Signature};

/// Computes 4-byte selectors of function and error signatures and looks for a target among them.
#[derive(Debug, Parser)]
#[command(name = "selector-scan", version)]
pub struct CliArgs {
    /// Signatures to hash, e.g. `FeedbackNotFound()`.
    pub signatures: Vec<String>,

    /// Selector to look for, `0x` followed by 8 hex digits.
    #[arg(short, long, env = "SELECTOR_SCAN_TARGET")]
    pub target: Option<Selector>,

    /// Built-in candidate list: feedback, validation or standard.
    #[arg(short, long, value_parser = Catalog::get)]
    pub catalog: Option<Catalog>,

    /// File with one signature per line. `#` starts a comment line.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Revert data of a failed call. Its selector replaces any `--target`.
    #[arg(short, long, value_parser = RevertData::parse)]
    pub revert: Option<RevertData>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// log4rs config file. Logs go to stderr when it does not exist.
    #[arg(long, default_value = "log4rs.yaml")]
    pub log_config: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl CliArgs {
    /// The catalog to draw from. Falls back to the feedback registry errors when no source is given.
    pub fn catalog(&self) -> Option<Catalog> {
        if self.catalog.is_none() && self.file.is_none() && self.signatures.is_empty() {
            return Some(FEEDBACK);
        }
        self.catalog
    }

    /// Catalog entries, then file entries, then positional arguments.
    pub fn candidates(&self) -> anyhow::Result<Vec<Signature>> {
        let mut signatures = vec![];

        if let Some(catalog) = self.catalog() {
            log::debug!("Using catalog {} ({} signatures)", catalog.name, catalog.len());
            signatures.extend(catalog.signatures());
        }

        if let Some(path) = &self.file {
            let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
            let text = String::from_utf8(bytes)
                .map_err(selectors::Error::from)
                .with_context(|| format!("failed to decode {}", path.display()))?;
            let listed = parse_signature_list(&text);
            log::debug!("Read {} signatures from {}", listed.len(), path.display());
            signatures.extend(listed);
        }

        signatures.extend(self.signatures.iter().map(|signature| Signature::new(signature.as_str())));
        Ok(signatures)
    }

    pub fn target(&self) -> Option<Selector> {
        if let Some(revert) = &self.revert {
            return Some(revert.selector());
        }
        self.target.or_else(|| self.catalog().and_then(|catalog| catalog.target()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::sync::Mutex;
    use selectors::catalog::{STANDARD, VALIDATION};

    // Serializes tests that read or set SELECTOR_SCAN_TARGET.
    static ENV: Mutex<()> = Mutex::new(());

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("selector-scan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_feedback() {
        let _env = ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let args = parse(&[]);
        assert_eq!(args.catalog(), Some(FEEDBACK));
        assert_eq!(args.candidates().unwrap().len(), 9);
        assert_eq!(args.target(), FEEDBACK.target());
        assert_eq!(args.format, Format::Text);
    }

    #[test]
    fn test_positional_signatures() {
        let args = parse(&["transfer(address,uint256)", "--target", "0XA9059CBB"]);
        assert_eq!(args.catalog(), None);
        assert_eq!(args.candidates().unwrap(), vec![Signature::from("transfer(address,uint256)")]);
        assert_eq!(args.target().map(|target| target.to_string()), Some("0xa9059cbb".to_string()));
    }

    #[test]
    fn test_catalog_target_can_be_overridden() {
        let _env = ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let args = parse(&["--catalog", "validation", "--target", "0x00000000"]);
        assert_eq!(args.catalog(), Some(VALIDATION));
        assert_eq!(args.target(), "0x00000000".parse().ok());

        let args = parse(&["-c", "standard"]);
        assert_eq!(args.catalog(), Some(STANDARD));
        assert_eq!(args.target(), None);
    }

    #[test]
    fn test_revert_sets_target() {
        let args = parse(&["-c", "validation", "--revert", "0xbeab6e29"]);
        assert_eq!(args.target(), "0xbeab6e29".parse().ok());

        let args = parse(&["--target", "0x7b221799", "--revert", "0xbeab6e29"]);
        assert_eq!(args.target(), "0xbeab6e29".parse().ok());
    }

    #[test]
    fn test_revert_with_env_target() {
        let _env = ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::set_var("SELECTOR_SCAN_TARGET", "0x7b221799");
        let result = CliArgs::try_parse_from(["selector-scan", "-c", "validation", "--revert", "0xbeab6e29"]);
        std::env::remove_var("SELECTOR_SCAN_TARGET");

        let args = result.unwrap();
        assert_eq!(args.target, "0x7b221799".parse().ok());
        assert_eq!(args.target(), "0xbeab6e29".parse().ok());
    }

    #[test]
    fn test_rejected_arguments() {
        let run = |args: &[&str]| CliArgs::try_parse_from(std::iter::once("selector-scan").chain(args.iter().copied()));
        assert!(run(&["--target", "7b221799"]).is_err());
        assert!(run(&["--catalog", "unknown"]).is_err());
        assert!(run(&["--revert", "0x01"]).is_err());
    }

    #[test]
    fn test_file_candidates() {
        let path = std::env::temp_dir().join(format!("selector-scan-{}.txt", std::process::id()));
        fs::write(&path, "# errors\nSameAgent()\n\nInvalidScore()\n").unwrap();

        let args = parse(&["--file", path.to_str().unwrap(), "UnauthorizedSender()"]);
        let candidates = args.candidates().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            candidates,
            vec![
                Signature::from("SameAgent()"),
                Signature::from("InvalidScore()"),
                Signature::from("UnauthorizedSender()"),
            ]
        );
    }

    #[test]
    fn test_file_not_utf8() {
        let path = std::env::temp_dir().join(format!("selector-scan-latin1-{}.txt", std::process::id()));
        fs::write(&path, [b'f', 0xe9, b'(', b')']).unwrap();

        let args = parse(&["--file", path.to_str().unwrap()]);
        let error = args.candidates().unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            error.downcast_ref::<selectors::Error>(),
            Some(selectors::Error::EncodingError(_))
        ));
    }
}
