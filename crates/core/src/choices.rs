//! Fixed choice lists stored as short text columns.
//!
//! Each list is an enum whose `as_str` value is what the database stores.
//! The `validate_*` functions plug into `#[validate(custom(...))]` on the
//! create/update DTOs so that an unknown value is reported as a 400 that
//! names the allowed values.

use std::borrow::Cow;

use validator::ValidationError;

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $validate_fn:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),+
        }

        impl $name {
            /// Every stored value, in declaration order.
            pub const ALL: &'static [&'static str] = &[$($val),+];

            /// The value stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $val ),+
                }
            }

            /// Parse a stored value. Matching is exact.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Validator hook rejecting values outside the list.
        pub fn $validate_fn(value: &str) -> Result<(), ValidationError> {
            check_choice(value, $name::ALL)
        }
    };
}

define_choice_enum! {
    /// News item category.
    NewsCategory, validate_news_category {
        News = "news",
        Events = "events",
        Announcement = "announcement",
        StudentActivity = "student_activity",
        Research = "research",
    }
}

define_choice_enum! {
    /// Career opening category.
    CareerCategory, validate_career_category {
        Teaching = "teaching",
        NonTeaching = "non-teaching",
    }
}

define_choice_enum! {
    /// Applicant gender on career forms.
    Gender, validate_gender {
        Male = "M",
        Female = "F",
        Other = "O",
    }
}

define_choice_enum! {
    /// Applicant marital status on career forms.
    MaritalStatus, validate_marital_status {
        Single = "single",
        Married = "married",
        Divorced = "divorced",
        Widowed = "widowed",
    }
}

define_choice_enum! {
    /// Grievance handling status. Any transition between values is allowed.
    GrievanceStatus, validate_grievance_status {
        Pending = "pending",
        InReview = "in_review",
        Resolved = "resolved",
        Rejected = "rejected",
    }
}

define_choice_enum! {
    /// Suffix shown after a statistic number.
    StatSuffix, validate_stat_suffix {
        Plus = "+",
        Percent = "%",
    }
}

/// Code attached to `ValidationError`s raised for out-of-list values.
pub const INVALID_CHOICE: &str = "invalid_choice";

fn check_choice(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new(INVALID_CHOICE);
    err.message = Some(Cow::Owned(format!(
        "must be one of: {}",
        allowed.join(", ")
    )));
    Err(err)
}

/// Render `number` with its optional suffix, e.g. `95%` or `1200+`.
pub fn display_value(number: impl std::fmt::Display, suffix: Option<&str>) -> String {
    format!("{number}{}", suffix.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_stored_values() {
        for value in NewsCategory::ALL {
            let parsed = NewsCategory::parse(value).unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
        assert_eq!(CareerCategory::parse("non-teaching"), Some(CareerCategory::NonTeaching));
        assert_eq!(GrievanceStatus::parse("Pending"), None);
    }

    #[test]
    fn invalid_choice_names_allowed_values() {
        let err = validate_marital_status("complicated").unwrap_err();
        assert_eq!(err.code, INVALID_CHOICE);
        assert_eq!(
            err.message.as_deref(),
            Some("must be one of: single, married, divorced, widowed")
        );
    }

    #[test]
    fn valid_choice_passes() {
        assert!(validate_gender("F").is_ok());
        assert!(validate_stat_suffix("%").is_ok());
        assert!(validate_stat_suffix("#").is_err());
    }

    #[test]
    fn serde_uses_stored_value() {
        let json = serde_json::to_string(&GrievanceStatus::InReview).unwrap();
        assert_eq!(json, "\"in_review\"");
    }

    #[test]
    fn display_value_appends_suffix() {
        assert_eq!(display_value(95, Some("%")), "95%");
        assert_eq!(display_value(1200, None), "1200");
    }
}
