use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Book;

/// Writes one compact JSON object per line, creating the output directory
/// first. Non-ASCII text (titles carry accents and typographic quotes) goes
/// out as literal UTF-8.
pub fn save_jsonl(books: &[Book], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
        }
    }
    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for book in books {
        let json = serde_json::to_string(book)?;
        writeln!(writer, "{json}")?;
    }
    writer.flush()?;
    Ok(())
}
