//! The query engine: read a datastore directory and produce result rows.
//!
//! The pipeline for one invocation is:
//! 1. List the files under the root directory
//! 2. Parse every file into records, concatenated in listing order
//! 3. Sort by the order criteria (stable, lexical)
//! 4. Keep records matching every filter predicate
//! 5. Project onto the select criteria and render

use std::path::Path;

use crate::config::QueryConfig;
use crate::data::reader::read_datastore;
use crate::data::record::Record;
use crate::output::render::render_rows;
use crate::source::listing::{DirectoryLister, FileFilter, FsLister};
use crate::Result;

use super::options::{FilterCriteria, OrderCriteria, SelectCriteria};

/// A reusable datastore query.
///
/// Criteria are fixed at construction; each call to [`Query::execute`]
/// reads the directory afresh.
///
/// # Example
///
/// ```rust
/// use dsquerylib::Query;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(
///     dir.path().join("datastore.csv"),
///     "\"TITLE\"|\"REV\"\n\"the matrix\"|\"4.00\"\n\"unbreakable\"|\"6.00\"\n",
/// )
/// .unwrap();
///
/// let query = Query::new(["REV", "TITLE"], ["TITLE"], ["REV=6.00"]).unwrap();
/// assert_eq!(query.execute(dir.path()).unwrap(), vec!["6.00, unbreakable"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    select: SelectCriteria,
    order: OrderCriteria,
    filter: FilterCriteria,
    files: FileFilter,
}

impl Query {
    /// Build a query from select columns, order columns and `column=value`
    /// filters. Empty lists mean all columns, encounter order and no
    /// filtering.
    pub fn new<S, O, F>(
        select: impl IntoIterator<Item = S>,
        order: impl IntoIterator<Item = O>,
        filter: impl IntoIterator<Item = F>,
    ) -> Result<Self>
    where
        S: Into<String>,
        O: Into<String>,
        F: AsRef<str>,
    {
        Ok(Self {
            select: SelectCriteria::columns(select),
            order: OrderCriteria::by(order),
            filter: FilterCriteria::parse(filter)?,
            files: FileFilter::default(),
        })
    }

    /// Builder: restrict which listed files are read.
    pub fn files(mut self, files: FileFilter) -> Self {
        self.files = files;
        self
    }

    /// Run against `root` on the local filesystem and render each row.
    pub fn execute(&self, root: impl AsRef<Path>) -> Result<Vec<String>> {
        self.execute_with(&FsLister::new(), root)
    }

    /// Run against `root` using the given lister and render each row.
    pub fn execute_with<L>(&self, lister: &L, root: impl AsRef<Path>) -> Result<Vec<String>>
    where
        L: DirectoryLister + ?Sized,
    {
        let records = self.records_with(lister, root)?;
        Ok(render_rows(&records))
    }

    /// Run against `root` on the local filesystem, returning projected records.
    pub fn records(&self, root: impl AsRef<Path>) -> Result<Vec<Record>> {
        self.records_with(&FsLister::new(), root)
    }

    /// Run against `root` using the given lister, returning projected records.
    pub fn records_with<L>(&self, lister: &L, root: impl AsRef<Path>) -> Result<Vec<Record>>
    where
        L: DirectoryLister + ?Sized,
    {
        let mut records = self.load(lister, root.as_ref())?;

        self.order.sort(&mut records);

        Ok(records
            .iter()
            .filter(|r| self.filter.matches(r))
            .map(|r| self.select.project(r))
            .collect())
    }

    /// List and parse every datastore file under `root`.
    fn load<L>(&self, lister: &L, root: &Path) -> Result<Vec<Record>>
    where
        L: DirectoryLister + ?Sized,
    {
        if !lister.exists(root) {
            log::warn!("datastore directory {} does not exist", root.display());
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for path in lister.list_entries(root)? {
            if !self.files.is_empty() && !self.files.matches(&path) {
                log::debug!("skipping {} (file filter)", path.display());
                continue;
            }
            records.extend(read_datastore(&path)?);
        }
        Ok(records)
    }
}

/// Query the configured default datastore directory.
///
/// Builds a [`Query`] from the criteria and runs it against
/// `config.output_directory`.
pub fn query_datastore<S, O, F>(
    config: &QueryConfig,
    select: impl IntoIterator<Item = S>,
    order: impl IntoIterator<Item = O>,
    filter: impl IntoIterator<Item = F>,
) -> Result<Vec<String>>
where
    S: Into<String>,
    O: Into<String>,
    F: AsRef<str>,
{
    Query::new(select, order, filter)?.execute(config.output_directory())
}
