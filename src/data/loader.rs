use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Order, SalesDataset};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the dataset.
///
/// All variants are fatal for the affected load: either the file parses
/// completely or no dataset is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: cannot interpret '{value}' as an order date")]
    Date { row: usize, value: String },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a sales dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the four required columns
/// * `.json` – records orientation, `[{ "order_date": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<SalesDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv_reader(open(path)?),
        "json" => load_json_reader(open(path)?),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Raw record
// ---------------------------------------------------------------------------

/// One row as it appears in the source file.  Columns beyond these four are
/// ignored.
#[derive(Debug, Deserialize)]
struct RawOrder {
    order_date: String,
    pizza_size: String,
    unit_price: f64,
    pizza_ingredients: String,
}

impl RawOrder {
    fn into_order(self, row: usize) -> Result<Order, LoadError> {
        let date = parse_order_date(&self.order_date).ok_or_else(|| LoadError::Date {
            row,
            value: self.order_date.clone(),
        })?;
        Ok(Order::new(
            date,
            self.pizza_size,
            self.unit_price,
            self.pizza_ingredients,
        ))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming at least `order_date`, `pizza_size`,
/// `unit_price` and `pizza_ingredients`.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<SalesDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);

    let mut orders = Vec::new();
    for (row_no, result) in reader.deserialize::<RawOrder>().enumerate() {
        let raw = result?;
        orders.push(raw.into_order(row_no)?);
    }

    Ok(SalesDataset::from_orders(orders))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "order_date": "05/01/2015 13:04:00",
///     "pizza_size": "M",
///     "unit_price": 13.25,
///     "pizza_ingredients": "Mozzarella Cheese, Tomatoes, Basil"
///   },
///   ...
/// ]
/// ```
pub fn load_json_reader<R: Read>(reader: R) -> Result<SalesDataset, LoadError> {
    let raw: Vec<RawOrder> = serde_json::from_reader(reader)?;

    let mut orders = Vec::with_capacity(raw.len());
    for (row_no, record) in raw.into_iter().enumerate() {
        orders.push(record.into_order(row_no)?);
    }

    Ok(SalesDataset::from_orders(orders))
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Datetime formats, day-first before month-first so an ambiguous `DD/MM`
/// value resolves to the day-first reading.
const DATETIME_FORMATS: [&str; 6] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only formats, same ordering rules; parsed values land at midnight.
const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse a mixed-format order date.  Returns `None` when no tolerated
/// format matches.
pub fn parse_order_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Load cache
// ---------------------------------------------------------------------------

/// Write-once memoisation handle around [`load_file`].
///
/// The file is read at most once per cache instance; later calls hand back
/// the stored dataset without touching the filesystem.
pub struct DatasetCache {
    path: PathBuf,
    loaded: Option<SalesDataset>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetCache {
            path: path.into(),
            loaded: None,
        }
    }

    /// Return the cached dataset, loading it on the first call.
    pub fn get_or_load(&mut self) -> Result<&SalesDataset, LoadError> {
        if self.loaded.is_none() {
            let dataset = load_file(&self.path)?;
            log::info!(
                "loaded {} orders ({} sizes, {} toppings) from {}",
                dataset.len(),
                dataset.sizes.len(),
                dataset.toppings.len(),
                self.path.display()
            );
            self.loaded = Some(dataset);
        }
        // populated above
        Ok(self.loaded.as_ref().expect("dataset cache populated"))
    }
}
