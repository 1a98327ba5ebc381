use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use itertools::Itertools;
use log::info;
use serde::Serialize;

/// How many rows the training-data overview shows.
pub const PREVIEW_ROWS: usize = 10;

/// Head of the sample training dataset, for display only. Unrelated to the
/// evaluation pipeline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DatasetPreview {
    pub fn from_file(path: &Path, limit: usize) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let preview = Self::from_reader(BufReader::new(file), limit)?;
        info!(
            "Loaded {} preview rows from {}",
            preview.rows.len(),
            path.display()
        );
        Ok(preview)
    }

    fn from_reader(reader: impl BufRead, limit: usize) -> std::io::Result<Self> {
        let mut lines = reader.lines();
        let columns = match lines.next() {
            Some(header) => header?.split(',').map(str::to_owned).collect_vec(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for line in lines.take(limit) {
            let fields = line?.split(',').map(str::to_owned).collect_vec();
            // rows not matching the header are display noise, skip them
            if fields.len() == columns.len() {
                rows.push(fields);
            }
        }

        Ok(Self { columns, rows })
    }
}
