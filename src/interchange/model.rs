use crate::models::work_session::WorkSession;
use serde::{Deserialize, Serialize};

/// Flat interchange shape of a session: `ID,CheckIn,CheckOut`.
/// An open session has an empty (CSV) or null (JSON) check-out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    #[serde(rename = "ID", default)]
    pub id: Option<i64>,
    #[serde(rename = "CheckIn")]
    pub check_in: String,
    #[serde(rename = "CheckOut", default)]
    pub check_out: Option<String>,
}

impl From<&WorkSession> for SessionRecord {
    fn from(s: &WorkSession) -> Self {
        Self {
            id: Some(s.id),
            check_in: s.check_in_str(),
            check_out: s.check_out.map(|_| s.check_out_str()),
        }
    }
}

pub(crate) const CSV_HEADERS: [&str; 3] = ["ID", "CheckIn", "CheckOut"];
