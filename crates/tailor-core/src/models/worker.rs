//! The actor performing workflow operations.

use serde::{Deserialize, Serialize};

use super::Department;

/// A department worker acting on orders from a station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    /// Department whose queue this worker serves
    pub station: Department,
}

impl Worker {
    pub fn new(id: impl Into<String>, name: impl Into<String>, station: Department) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            station,
        }
    }
}
