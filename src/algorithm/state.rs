//! Placement state machine shared by every algorithm
//!
//! `Init → Placing(i) → {Placing(i+1) | Fallback(i) | Error}`, ending in
//! `Done` once the expected number of records exists. Ordinary fit or
//! overlap difficulty goes through `Fallback`; only geometry failures reach
//! `Error`.

use crate::io::error::{LayoutError, Result, computation_error};
use crate::model::PlacementRecord;

/// Current phase of a placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    /// No record emitted yet
    Init,
    /// Waiting for record `i`
    Placing(usize),
    /// Record `i` came from a recovery path; waiting for record `i + 1`
    Fallback(usize),
    /// Every expected record exists
    Done,
    /// A non-recoverable failure ended the run
    Error,
}

/// Records produced by a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOutcome {
    /// Placement records in paint order
    pub records: Vec<PlacementRecord>,
    /// Records produced through a recovery path
    pub fallback_count: usize,
}

/// Accumulates placement records and enforces the phase transitions
#[derive(Debug, Clone)]
pub struct PlacementRun {
    phase: PlacementPhase,
    expected: usize,
    records: Vec<PlacementRecord>,
    fallback_count: usize,
}

impl PlacementRun {
    /// Start a run that must produce exactly `expected` records
    pub fn new(expected: usize) -> Self {
        Self {
            phase: PlacementPhase::Init,
            expected,
            records: Vec::with_capacity(expected),
            fallback_count: 0,
        }
    }

    /// Current phase
    pub const fn phase(&self) -> PlacementPhase {
        self.phase
    }

    /// Records emitted so far
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Number of records emitted so far
    pub fn placed(&self) -> usize {
        self.records.len()
    }

    /// Number of records still expected
    pub fn remaining(&self) -> usize {
        self.expected.saturating_sub(self.records.len())
    }

    /// Records emitted through a recovery path so far
    pub const fn fallback_count(&self) -> usize {
        self.fallback_count
    }

    /// Emit a record produced by the primary algorithm
    ///
    /// # Errors
    ///
    /// Returns a computation error if the run already finished or failed
    pub fn place(&mut self, record: PlacementRecord) -> Result<()> {
        let index = self.next_index()?;
        tracing::trace!(index, item = %record.item_id, "placed");
        self.push(record);
        Ok(())
    }

    /// Emit a record produced by a recovery path
    ///
    /// # Errors
    ///
    /// Returns a computation error if the run already finished or failed
    pub fn fall_back(&mut self, record: PlacementRecord) -> Result<()> {
        let index = self.next_index()?;
        tracing::debug!(index, item = %record.item_id, "placed through fallback");
        self.fallback_count += 1;
        self.push(record);
        if self.phase != PlacementPhase::Done {
            self.phase = PlacementPhase::Fallback(index);
        }
        Ok(())
    }

    /// Move to the error phase and hand the error back for propagation
    pub fn fail(&mut self, error: LayoutError) -> LayoutError {
        self.phase = PlacementPhase::Error;
        error
    }

    /// Close the run
    ///
    /// # Errors
    ///
    /// Returns a computation error unless the run reached `Done`
    pub fn finish(self) -> Result<PlacementOutcome> {
        if self.phase != PlacementPhase::Done {
            return Err(computation_error(
                "placement run",
                &format!(
                    "finished in phase {:?} with {} of {} records",
                    self.phase,
                    self.records.len(),
                    self.expected
                ),
            ));
        }
        Ok(PlacementOutcome {
            records: self.records,
            fallback_count: self.fallback_count,
        })
    }

    fn next_index(&self) -> Result<usize> {
        match self.phase {
            PlacementPhase::Init => Ok(0),
            PlacementPhase::Placing(i) => Ok(i),
            PlacementPhase::Fallback(i) => Ok(i + 1),
            PlacementPhase::Done | PlacementPhase::Error => Err(computation_error(
                "placement run",
                &format!(
                    "record emitted in phase {:?} (expected {})",
                    self.phase, self.expected
                ),
            )),
        }
    }

    fn push(&mut self, record: PlacementRecord) {
        self.records.push(record);
        let next = self.records.len();
        self.phase = if next >= self.expected {
            PlacementPhase::Done
        } else {
            PlacementPhase::Placing(next)
        };
    }
}
