use std::io::{self, Write};
use serde::Serialize;
use selectors::{scan, Entry, Selector, Signature};

const NAME_WIDTH: usize = 30;

#[derive(Debug, Serialize)]
pub struct Report {
    pub target: Option<Selector>,
    pub entries: Vec<Entry>,
    pub matches: Vec<Signature>,
}

impl Report {
    pub fn build(signatures: Vec<Signature>, target: Option<Selector>) -> Self {
        let entries = scan(signatures, target).collect::<Vec<_>>();
        let matches = entries.iter()
            .filter(|entry| entry.matched)
            .map(|entry| entry.signature.clone())
            .collect();

        Self {
            target,
            entries,
            matches,
        }
    }

    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let width = self.entries.iter()
            .map(|entry| entry.signature.as_str().chars().count())
            .max()
            .unwrap_or(0)
            .max(NAME_WIDTH);

        writeln!(out, "Custom Error Signatures:")?;
        writeln!(out, "{}", "=".repeat(width + 14))?;
        for entry in &self.entries {
            writeln!(out, "{:<width$} -> {}", entry.signature.as_str(), entry.selector, width = width)?;
        }

        let target = match self.target {
            Some(target) => target,
            None => return Ok(()),
        };

        writeln!(out)?;
        writeln!(out, "Looking for signature: {}", target)?;
        if self.matches.is_empty() {
            writeln!(out, "no match")?;
        }
        for signature in &self.matches {
            writeln!(out, "match: {}", signature)?;
        }
        Ok(())
    }

    pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
