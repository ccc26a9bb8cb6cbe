use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::PlotEngine;
use crate::error::PlotResult;

use super::{Plotter, PlotterConfig};

/// Cloneable handle for hosts that call the plotter from several threads.
///
/// At most one request is in flight per engine instance: every call holds the
/// lock for its full duration.
pub struct SharedPlotter<E: PlotEngine> {
    inner: Arc<Mutex<Plotter<E>>>,
}

impl<E: PlotEngine> Clone for SharedPlotter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: PlotEngine> SharedPlotter<E> {
    pub fn new(config: PlotterConfig) -> PlotResult<Self> {
        Ok(Self::from_plotter(Plotter::new(config)?))
    }

    #[must_use]
    pub fn from_plotter(plotter: Plotter<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(plotter)),
        }
    }

    /// Runs `f` with exclusive access to the plotter.
    pub fn with<R>(&self, f: impl FnOnce(&mut Plotter<E>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Finishes the shared plotter; every handle observes `UseAfterFinish` afterwards.
    pub fn finish(&self) -> PlotResult<E> {
        self.inner.lock().finish()
    }
}
