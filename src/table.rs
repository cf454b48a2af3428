//! Table loading for the glyph catalogue.

use crate::Result;
use crate::diagnostics;

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A single glyph record from the catalogue table.
///
/// Column names follow the published dictionary (`関連文字`, `DWPI明朝文字`,
/// `総画数`, ...); the ASCII aliases are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Row {
    /// Related character the glyph is grouped under.
    #[serde(rename = "関連文字", alias = "related")]
    pub key: String,

    /// Glyph as displayed in the viewer.
    #[serde(rename = "DWPI明朝文字", alias = "glyph")]
    pub glyph: String,

    #[serde(rename = "総画数", alias = "strokes")]
    pub strokes: u32,

    #[serde(rename = "字形ID", alias = "glyph_id", default)]
    pub glyph_id: Option<String>,

    /// Code of the correct (standard) form this glyph is an alternate of.
    #[serde(rename = "正字", alias = "correct_form", default)]
    pub correct_form: Option<String>,
}

impl Row {
    fn normalized(mut self) -> Self {
        self.glyph_id = non_blank(self.glyph_id);
        self.correct_form = non_blank(self.correct_form);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Anything that can produce catalogue rows in file order.
pub trait RowSource {
    fn load(&self) -> Result<Vec<Row>>;
}

/// Comma-separated table with a header row.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for CsvTable {
    fn load(&self) -> Result<Vec<Row>> {
        let path = self.path.display();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| diagnostics::error_message(format!("read table {}", path)))?;

        let mut rows = Vec::new();
        for (idx, record) in reader.deserialize::<Row>().enumerate() {
            // Header is line 1.
            let row = record.with_context(|| {
                diagnostics::error_message(format!(
                    "table parse error at {}:{}",
                    path,
                    idx + 2
                ))
            })?;
            rows.push(row.normalized());
        }

        Ok(rows)
    }
}

/// JSON array of row objects using the same field names as the CSV header.
#[derive(Debug, Clone)]
pub struct JsonTable {
    pub path: PathBuf,
}

impl JsonTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for JsonTable {
    fn load(&self) -> Result<Vec<Row>> {
        let path = self.path.display();
        let text = fs::read_to_string(&self.path)
            .with_context(|| diagnostics::error_message(format!("read table {}", path)))?;
        let rows: Vec<Row> = serde_json::from_str(&text).with_context(|| {
            diagnostics::error_message(format!("table parse error in {}", path))
        })?;

        Ok(rows.into_iter().map(Row::normalized).collect())
    }
}

/// Pick a source by file extension: `.json` is JSON, everything else CSV.
pub fn open(path: &Path) -> Box<dyn RowSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonTable::new(path))
    } else {
        Box::new(CsvTable::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    struct Scratch {
        path: PathBuf,
    }

    impl Scratch {
        fn new(tag: &str, name: &str, contents: &str) -> Self {
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos());
            let dir = std::env::temp_dir().join(format!(
                "glyph_catalogue_table_{tag}_{}_{}",
                std::process::id(),
                ts
            ));
            fs::create_dir_all(&dir).expect("create scratch dir");
            let path = dir.join(name);
            fs::write(&path, contents).expect("write scratch table");
            Self { path }
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            if let Some(dir) = self.path.parent() {
                let _ = fs::remove_dir_all(dir);
            }
        }
    }

    #[test]
    fn csv_rows_keep_file_order() {
        let table = Scratch::new(
            "order",
            "dict.csv",
            "関連文字,DWPI明朝文字,総画数,字形ID,正字\n\
             愛,愛,13,J1,\n\
             亜,亞,8,J2,U+4E9C\n\
             愛,𢟼,14,,\n",
        );

        let rows = CsvTable::new(&table.path).load().expect("load csv");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].key, "愛");
        assert_eq!(rows[1].glyph, "亞");
        assert_eq!(rows[1].strokes, 8);
        assert_eq!(rows[1].correct_form.as_deref(), Some("U+4E9C"));
        assert_eq!(rows[0].correct_form, None);
        assert_eq!(rows[2].glyph_id, None);
    }

    #[test]
    fn optional_columns_may_be_missing() {
        let table = Scratch::new(
            "minimal",
            "dict.csv",
            "関連文字,DWPI明朝文字,総画数,備考\n愛,愛,13,extra\n",
        );

        let rows = CsvTable::new(&table.path).load().expect("load csv");
        assert_eq!(rows[0].glyph_id, None);
        assert_eq!(rows[0].correct_form, None);
    }

    #[test]
    fn ascii_headers_are_accepted() {
        let table = Scratch::new(
            "ascii",
            "dict.csv",
            "related,glyph,strokes,glyph_id,correct_form\n愛,愛,13,J1,  \n",
        );

        let rows = CsvTable::new(&table.path).load().expect("load csv");
        assert_eq!(rows[0].glyph_id.as_deref(), Some("J1"));
        assert_eq!(rows[0].correct_form, None);
    }

    #[test]
    fn non_numeric_stroke_count_is_an_error() {
        let table = Scratch::new(
            "bad_strokes",
            "dict.csv",
            "関連文字,DWPI明朝文字,総画数\n愛,愛,many\n",
        );

        let err = CsvTable::new(&table.path).load().unwrap_err();
        assert!(format!("{err:#}").contains("dict.csv:2"), "got: {err:#}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("glyph_catalogue_no_such_table.csv");
        assert!(CsvTable::new(missing).load().is_err());
    }

    #[test]
    fn json_tables_load_through_open() {
        let table = Scratch::new(
            "json",
            "dict.json",
            r#"[{"related": "愛", "glyph": "愛", "strokes": 13, "correct_form": null},
                {"関連文字": "亜", "DWPI明朝文字": "亞", "総画数": 8, "字形ID": "J2"}]"#,
        );

        let rows = open(&table.path).load().expect("load json");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].glyph_id.as_deref(), Some("J2"));
        assert_eq!(rows[0].correct_form, None);
    }
}
