//! Event records and the output dataset
//!
//! One [`EventRecord`] captures one generated decay: the sampled parent
//! mass, the parent four-vector in the lab frame, and both lab-frame
//! daughters. Records are immutable once produced and independent of each
//! other; the [`EventLog`] keeps them in generation order.
//!
//! # Dataset contract
//!
//! Each record serializes flat as 13 named double-precision fields:
//!
//! ```text
//! mz, px_e, py_e, pz_e, E_e, px_p, py_p, pz_p, E_p, px_Z, py_Z, pz_Z, E_Z
//! ```
//!
//! (daughter-minus = "e", daughter-plus = "p", parent = "Z"). This is the
//! contract the external analysis step consumes; field names are pinned by
//! serde renames and covered by tests.

use crate::kinematics::FourVector;
use serde::{Deserialize, Serialize};
use std::io;

/// One generated decay event
///
/// Invariant: the parent four-vector equals the sum of the two daughter
/// four-vectors component-wise, within numerical tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Sampled parent invariant mass
    pub mz: f64,

    /// Daughter-minus momentum and energy
    pub px_e: f64,
    pub py_e: f64,
    pub pz_e: f64,
    #[serde(rename = "E_e")]
    pub e_e: f64,

    /// Daughter-plus momentum and energy
    pub px_p: f64,
    pub py_p: f64,
    pub pz_p: f64,
    #[serde(rename = "E_p")]
    pub e_p: f64,

    /// Parent momentum and energy
    #[serde(rename = "px_Z")]
    pub px_z: f64,
    #[serde(rename = "py_Z")]
    pub py_z: f64,
    #[serde(rename = "pz_Z")]
    pub pz_z: f64,
    #[serde(rename = "E_Z")]
    pub e_z: f64,
}

impl EventRecord {
    /// Assemble a record from the sampled mass and the three lab-frame vectors
    pub fn new(
        mz: f64,
        parent: FourVector,
        daughter_minus: FourVector,
        daughter_plus: FourVector,
    ) -> Self {
        Self {
            mz,
            px_e: daughter_minus.px(),
            py_e: daughter_minus.py(),
            pz_e: daughter_minus.pz(),
            e_e: daughter_minus.e(),
            px_p: daughter_plus.px(),
            py_p: daughter_plus.py(),
            pz_p: daughter_plus.pz(),
            e_p: daughter_plus.e(),
            px_z: parent.px(),
            py_z: parent.py(),
            pz_z: parent.pz(),
            e_z: parent.e(),
        }
    }

    /// Parent four-vector in the lab frame
    pub fn parent(&self) -> FourVector {
        FourVector::new(self.px_z, self.py_z, self.pz_z, self.e_z)
    }

    /// Daughter-minus four-vector in the lab frame
    pub fn daughter_minus(&self) -> FourVector {
        FourVector::new(self.px_e, self.py_e, self.pz_e, self.e_e)
    }

    /// Daughter-plus four-vector in the lab frame
    pub fn daughter_plus(&self) -> FourVector {
        FourVector::new(self.px_p, self.py_p, self.pz_p, self.e_p)
    }
}

/// Ordered log of generated events
///
/// # Example
/// ```
/// use decay_generator_core_rs::EventLog;
///
/// let log = EventLog::new();
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create an empty log with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append a record to the log
    pub fn push(&mut self, record: EventRecord) {
        self.records.push(record);
    }

    /// Get the number of records logged
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records in generation order
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Iterate over records in generation order
    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    /// Write the dataset as JSON Lines, one record per line
    ///
    /// I/O failures are propagated to the caller unchanged; the generator
    /// core never retries sink errors (retry policy belongs to the I/O
    /// layer consuming the dataset).
    pub fn write_jsonl<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for record in &self.records {
            serde_json::to_writer(&mut writer, record).map_err(io::Error::from)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}
