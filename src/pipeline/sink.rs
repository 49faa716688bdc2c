use std::io;

use crate::actions::ResultObject;
use crate::report::{ErrorKind, ReportedError};

/// Receives results and errors as soon as they are produced
pub trait Sink {
    /// Emit one result object.
    ///
    /// # Errors
    /// Returns an I/O error if the result cannot be written.
    fn emit(&mut self, result: ResultObject) -> io::Result<()>;

    /// Report one non-fatal error.
    ///
    /// # Errors
    /// Returns an I/O error if the report cannot be written.
    fn report(&mut self, error: ReportedError) -> io::Result<()>;
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn emit(&mut self, result: ResultObject) -> io::Result<()> {
        (**self).emit(result)
    }

    fn report(&mut self, error: ReportedError) -> io::Result<()> {
        (**self).report(error)
    }
}

/// Sink that keeps everything in memory, in arrival order
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub results: Vec<ResultObject>,
    pub errors: Vec<ReportedError>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Kinds of the reported errors, in order
    #[must_use]
    pub fn error_kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(ReportedError::kind).collect()
    }
}

impl Sink for CollectingSink {
    fn emit(&mut self, result: ResultObject) -> io::Result<()> {
        self.results.push(result);
        Ok(())
    }

    fn report(&mut self, error: ReportedError) -> io::Result<()> {
        self.errors.push(error);
        Ok(())
    }
}
