//! Mutation response envelopes

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Response to a single insert
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsertResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: bool,
    /// Kind of object that was created
    #[serde(default)]
    pub object: String,
    /// Identifier of the new record
    #[serde(default)]
    pub id: i64,
}

/// Response to a bulk insert
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsertMultipleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: bool,
    /// Kind of object that was created
    #[serde(default)]
    pub object: String,
    /// Identifiers of the new records, in payload order
    #[serde(default)]
    pub id: Vec<i64>,
}

/// Response to a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: bool,
}

fn check_flags(success: bool, error: bool) -> Result<()> {
    if success && !error {
        Ok(())
    } else {
        Err(Error::Rejected { success, error })
    }
}

macro_rules! envelope_checks {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// `true` when the API reported success and no error
                pub fn is_success(&self) -> bool {
                    self.success && !self.error
                }

                /// Turn a business-level failure into [`Error::Rejected`]
                pub fn into_result(self) -> Result<Self> {
                    check_flags(self.success, self.error)?;
                    Ok(self)
                }
            }
        )+
    };
}

envelope_checks!(InsertResponse, InsertMultipleResponse, DeleteResponse);
