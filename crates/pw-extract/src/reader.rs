//! Line-oriented delimited file reader.

use crate::{ExtractError, ExtractResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Upper bound on fields per row. Matches the original service cap; real
/// output files stay far below it.
pub const MAX_FIELDS: usize = 1000;

/// Streaming reader over a delimited text file.
///
/// Rows are produced lazily and the stream is not restartable; open a
/// fresh reader to re-read a file.
#[derive(Debug)]
pub struct RowReader {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    delimiter: char,
}

impl RowReader {
    pub fn open(path: &Path, delimiter: char) -> ExtractResult<Self> {
        let file = File::open(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            delimiter,
        })
    }

    /// Next row split into fields, or `None` at end of input. Empty fields
    /// are kept so column positions stay stable.
    pub fn next_row(&mut self) -> ExtractResult<Option<Vec<String>>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(source)) => Err(ExtractError::Read {
                path: self.path.clone(),
                source,
            }),
            Some(Ok(line)) => {
                let line = line.trim_end_matches('\r');
                Ok(Some(
                    line.splitn(MAX_FIELDS, self.delimiter)
                        .map(str::to_string)
                        .collect(),
                ))
            }
        }
    }

    /// Skip `n` header rows. Running out of input early is not an error;
    /// the next `next_row` call reports end of stream.
    pub fn skip_rows(&mut self, n: usize) -> ExtractResult<()> {
        for _ in 0..n {
            if self.next_row()?.is_none() {
                break;
            }
        }
        Ok(())
    }
}
