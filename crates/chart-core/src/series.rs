// File: crates/chart-core/src/series.rs
// Summary: Series model and normalization of loosely-shaped dashboard records.
// Notes:
// - Records arrive as JSON objects (or CSV rows) whose label/value fields vary
//   by page: `user`/`count` for posts per author, `date`/`views` for traffic,
//   `category`/`value` for breakdowns. Normalization picks the first present
//   alias and applies per-field defaults.
// - One validation policy for every chart kind: input that carries no
//   recognized field at all is rejected as `InvalidData`.

use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{Map, Value};

use crate::error::{ChartError, Result};

/// Label used when a record has no label field.
pub const UNKNOWN_LABEL: &str = "Unknown";

const LABEL_FIELDS: &[&str] = &["label", "date", "user", "category", "name"];
const VALUE_FIELDS: &[&str] = &["value", "count", "views", "engagement"];
const SECONDARY_FIELDS: &[&str] = &["secondary", "secondaryValue", "engagement"];

static NEXT_SERIES_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one data set. A freshly built series gets a new id; clones share it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(u64);

impl SeriesId {
    fn next() -> Self {
        Self(NEXT_SERIES_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 { self.0 }
}

/// One data sample. Only its position in the series identifies it.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
    pub secondary: Option<f64>,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value: finite_or_zero(value), secondary: None }
    }

    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary).filter(|v| v.is_finite());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    id: SeriesId,
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { id: SeriesId::next(), points }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self::new(pairs.into_iter().map(|(l, v)| SeriesPoint::new(l, v)).collect())
    }

    /// Normalize JSON records into a series.
    ///
    /// Returns `InvalidData` when the input is non-empty and no record has a
    /// recognized label or numeric field.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let mut recognized = false;
        let mut points = Vec::with_capacity(records.len());
        for record in records {
            let (point, any) = match record.as_object() {
                Some(obj) => normalize_record(obj),
                None => (SeriesPoint::new(UNKNOWN_LABEL, 0.0), false),
            };
            recognized |= any;
            points.push(point);
        }
        if !points.is_empty() && !recognized {
            tracing::warn!(records = points.len(), "no record carries a recognized label or value field");
            return Err(ChartError::InvalidData(format!(
                "expected one of {:?} or {:?} on at least one record",
                LABEL_FIELDS, VALUE_FIELDS
            )));
        }
        Ok(Self::new(points))
    }

    /// Parse a JSON array of records (or `{ "data": [...] }`, as the analytics endpoints return).
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        match value {
            Value::Array(items) => Self::from_records(&items),
            Value::Object(mut obj) => match obj.remove("data") {
                Some(Value::Array(items)) => Self::from_records(&items),
                _ => Err(ChartError::InvalidData("expected an array of records".to_string())),
            },
            _ => Err(ChartError::InvalidData("expected an array of records".to_string())),
        }
    }

    /// Read CSV rows with a header line; each row is normalized like a JSON record.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let obj: Map<String, Value> = headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.to_string(), Value::String(v.to_string())))
                .collect();
            records.push(Value::Object(obj));
        }
        Self::from_records(&records)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| ChartError::FileRead { path: path.to_path_buf(), source })?;
        Self::from_csv_reader(file)
    }

    pub fn id(&self) -> SeriesId { self.id }
    pub fn points(&self) -> &[SeriesPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&SeriesPoint> { self.points.get(index) }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// `(min, max)` over values, or `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn total(&self) -> f64 {
        self.values().sum()
    }
}

impl FromIterator<SeriesPoint> for Series {
    fn from_iter<T: IntoIterator<Item = SeriesPoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn normalize_record(obj: &Map<String, Value>) -> (SeriesPoint, bool) {
    let label = LABEL_FIELDS.iter().find_map(|f| field(obj, f).and_then(label_of));
    let value = VALUE_FIELDS
        .iter()
        .find_map(|f| field(obj, f).and_then(number_of).map(|v| (*f, v)));
    let secondary = SECONDARY_FIELDS
        .iter()
        .filter(|f| value.map_or(true, |(used, _)| !used.eq_ignore_ascii_case(f)))
        .find_map(|f| field(obj, f).and_then(number_of));

    let recognized = label.is_some() || value.is_some();
    let point = SeriesPoint {
        label: label.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        value: value.map_or(0.0, |(_, v)| v),
        secondary,
    };
    (point, recognized)
}

fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name)
        .or_else(|| obj.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v))
}

fn label_of(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_of(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aliases_and_defaults() {
        let s = Series::from_records(&[
            json!({"user": "A", "count": 10}),
            json!({"date": "2024-01", "views": "7", "engagement": 3}),
            json!({"count": 2}),
            json!({"category": "News"}),
        ])
        .unwrap();
        let p = s.points();
        assert_eq!((p[0].label.as_str(), p[0].value), ("A", 10.0));
        assert_eq!((p[1].label.as_str(), p[1].value, p[1].secondary), ("2024-01", 7.0, Some(3.0)));
        assert_eq!((p[2].label.as_str(), p[2].value), (UNKNOWN_LABEL, 2.0));
        assert_eq!((p[3].label.as_str(), p[3].value), ("News", 0.0));
    }

    #[test]
    fn engagement_as_primary_is_not_reused_as_secondary() {
        let s = Series::from_records(&[json!({"date": "d", "engagement": 4})]).unwrap();
        assert_eq!(s.points()[0].value, 4.0);
        assert_eq!(s.points()[0].secondary, None);
    }

    #[test]
    fn unrecognized_shape_is_invalid() {
        let err = Series::from_records(&[json!({"foo": 1}), json!(3)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn empty_input_is_not_invalid() {
        assert!(Series::from_records(&[]).unwrap().is_empty());
    }

    #[test]
    fn csv_rows_normalize() {
        let csv = "date,views\n2024-01-01,5\n2024-01-02,oops\n";
        let s = Series::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[1].value, 0.0);
    }

    #[test]
    fn clones_share_identity_new_series_do_not() {
        let a = Series::from_pairs([("a", 1.0)]);
        let b = a.clone();
        let c = Series::from_pairs([("a", 1.0)]);
        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
    }

    #[test]
    fn value_range_and_total() {
        let s = Series::from_pairs([("a", 3.0), ("b", -1.0), ("c", 8.0)]);
        assert_eq!(s.value_range(), Some((-1.0, 8.0)));
        assert_eq!(s.total(), 10.0);
        assert_eq!(Series::empty().value_range(), None);
    }
}
