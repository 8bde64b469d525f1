use serde::{Deserialize, Serialize};

/// Reply of `GET /isenabled`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnabledReply {
    pub result: bool,
}
