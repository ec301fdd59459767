use crate::error::Result;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads a source file into raw record lines.
///
/// Blank lines are skipped. Bytes that are not valid UTF-8 are replaced
/// rather than failing the read, which changes the line's byte width so a
/// fixed-width parser drops it.
pub struct LineReader {
    use_mmap: bool,
}

impl LineReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let lines = if self.use_mmap {
            self.read_lines_mmap(path)?
        } else {
            self.read_lines_buffered(path)?
        };

        debug!(path = %path.display(), lines = lines.len(), "Read source lines");
        Ok(lines)
    }

    fn read_lines_buffered(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut lines = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if let Some(line) = Self::clean_line(&String::from_utf8_lossy(&buf)) {
                lines.push(line.to_string());
            }
        }

        Ok(lines)
    }

    /// Read lines using memory-mapped I/O for large registries
    fn read_lines_mmap(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }

        // SAFETY: the mapping is read-only and dropped before returning.
        let mmap = unsafe { Mmap::map(&file)? };
        let content = String::from_utf8_lossy(&mmap);

        Ok(content
            .split('\n')
            .filter_map(Self::clean_line)
            .map(str::to_string)
            .collect())
    }

    fn clean_line(raw: &str) -> Option<&str> {
        let line = raw.trim_end_matches('\n').trim_end_matches('\r');
        if line.trim().is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}
