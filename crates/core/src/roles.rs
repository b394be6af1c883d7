//! Role names seeded by the `roles` migration.

/// Full access, including user management.
pub const ROLE_ADMIN: &str = "admin";

/// Content editing through the admin API, no user management.
pub const ROLE_EDITOR: &str = "editor";

/// Whether `role` may use the admin content endpoints.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_roles() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_EDITOR));
        assert!(!is_staff("viewer"));
        assert!(!is_staff(""));
    }
}
