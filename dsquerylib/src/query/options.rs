//! Query criteria: which columns to select, how to order rows and which
//! rows to keep.
//!
//! All three criteria are plain text. Cell values are never coerced to
//! numbers or dates, so ordering is lexical and filtering is exact string
//! equality.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::record::Record;
use crate::error::DsqueryError;
use crate::Result;

/// Columns to project into the output, in output order.
///
/// An empty selection (the default) means "every column, in file order".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectCriteria {
    pub columns: Vec<String>,
}

impl SelectCriteria {
    /// Select the given columns, in the given order
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.columns.is_empty()
    }

    /// Project a record onto the selected columns.
    ///
    /// Every selected name yields one value, so a column selected twice
    /// appears twice. Columns missing from the record come back as empty
    /// strings.
    pub fn project(&self, record: &Record) -> Record {
        if self.is_all() {
            return record.clone();
        }
        let mut projected = Record::new();
        for column in &self.columns {
            projected.push(column.clone(), record.get(column));
        }
        projected
    }
}

/// Composite ascending sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCriteria {
    pub columns: Vec<String>,
}

impl OrderCriteria {
    /// Order by the given columns, first column most significant
    pub fn by<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Compare two records on the order columns, lexically.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.columns
            .iter()
            .map(|column| a.get(column).cmp(b.get(column)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort; ties keep their encounter order.
    pub fn sort(&self, records: &mut [Record]) {
        if self.is_empty() {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// A single `column=value` equality check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub column: String,
    pub value: String,
}

impl FilterPredicate {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// A missing column reads as the empty string.
    pub fn matches(&self, record: &Record) -> bool {
        record.get(&self.column) == self.value
    }
}

impl FromStr for FilterPredicate {
    type Err = DsqueryError;

    /// Parse `column=value`, splitting on the first `=`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('=') {
            Some((column, value)) => Ok(Self::new(column, value)),
            None => Err(DsqueryError::InvalidFilter(s.to_string())),
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column, self.value)
    }
}

/// Conjunction of equality predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub predicates: Vec<FilterPredicate>,
}

impl FilterCriteria {
    /// Parse a list of `column=value` strings.
    pub fn parse<I, S>(filters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let predicates = filters
            .into_iter()
            .map(|f| f.as_ref().parse())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { predicates })
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when the record satisfies every predicate.
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}
