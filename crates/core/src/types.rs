/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (news dates, achievement dates, form dates) carry no zone.
pub type Date = chrono::NaiveDate;
