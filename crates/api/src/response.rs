//! Response envelope for the admin endpoints.
//!
//! Public content endpoints return the entity JSON directly; admin endpoints
//! wrap their payload as `{ "data": ... }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
