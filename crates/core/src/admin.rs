//! Declarative admin configuration for every managed model.
//!
//! The admin client renders its list pages and inline editors from this
//! registry (`GET /api/v1/admin/models`), so adding a column to a list view
//! is a change here only.

use serde::Serialize;

/// List, filter and search configuration for one model.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelAdmin {
    /// Resource key, matching the public API path segment.
    pub model: &'static str,
    pub verbose_name: &'static str,
    pub list_display: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    /// Child collections edited inline on the parent's page.
    pub inlines: &'static [&'static str],
    pub ordering: &'static [&'static str],
}

const NONE: &[&str] = &[];

pub const MODEL_ADMINS: &[ModelAdmin] = &[
    ModelAdmin {
        model: "departments",
        verbose_name: "Department",
        list_display: &["name", "slug", "ug", "pg", "phd", "created_at", "updated_at"],
        list_filter: &["ug", "pg", "phd", "created_at"],
        search_fields: &["name", "about", "vision", "mission"],
        inlines: &[
            "about",
            "statistics",
            "quick-links",
            "programs",
            "curriculum",
            "benefits",
            "ctas",
            "po-pso-peo",
            "facilities",
            "banners",
        ],
        ordering: &["name"],
    },
    ModelAdmin {
        model: "department-contacts",
        verbose_name: "Department contact",
        list_display: &["name", "position", "email", "phone", "heading"],
        list_filter: NONE,
        search_fields: &["name", "position", "email", "phone"],
        inlines: NONE,
        ordering: &["name"],
    },
    ModelAdmin {
        model: "courses",
        verbose_name: "Course",
        list_display: &["name", "slug", "department", "ug", "pg", "phd"],
        list_filter: &["department", "ug", "pg", "phd"],
        search_fields: &["name", "about_the_course"],
        inlines: &[
            "about",
            "quick-links",
            "subjects",
            "labs",
            "curriculum",
            "benefits",
            "contacts",
            "ctas",
            "banners",
        ],
        ordering: &["name"],
    },
    ModelAdmin {
        model: "designations",
        verbose_name: "Designation",
        list_display: &["name", "unique_id"],
        list_filter: NONE,
        search_fields: &["name"],
        inlines: NONE,
        ordering: &["name"],
    },
    ModelAdmin {
        model: "faculty",
        verbose_name: "Faculty",
        list_display: &["name", "designation", "department", "mail_id", "phone_number"],
        list_filter: &["department", "designation"],
        search_fields: &["name", "mail_id", "qualification"],
        inlines: &["banners"],
        ordering: &["name"],
    },
    ModelAdmin {
        model: "committee-categories",
        verbose_name: "Committee category",
        list_display: &["name", "unique_id"],
        list_filter: NONE,
        search_fields: &["name"],
        inlines: NONE,
        ordering: &["name"],
    },
    ModelAdmin {
        model: "committee-members",
        verbose_name: "Committee member",
        list_display: &["name_of_member", "designation", "position", "category"],
        list_filter: &["category"],
        search_fields: &["name_of_member", "designation", "position"],
        inlines: NONE,
        ordering: &["category", "position", "name_of_member"],
    },
    ModelAdmin {
        model: "news-events",
        verbose_name: "News / event",
        list_display: &["heading", "date", "category", "department", "is_published", "is_featured"],
        list_filter: &["category", "department", "is_published", "is_featured", "date"],
        search_fields: &["heading", "content"],
        inlines: &["tags", "images"],
        ordering: &["-date", "-created_at"],
    },
    ModelAdmin {
        model: "news-tags",
        verbose_name: "Tag",
        list_display: &["tag_name", "unique_id"],
        list_filter: NONE,
        search_fields: &["tag_name"],
        inlines: NONE,
        ordering: &["tag_name"],
    },
    ModelAdmin {
        model: "page-metadata",
        verbose_name: "Meta data",
        list_display: &["page_id", "title", "url"],
        list_filter: &["locale", "type"],
        search_fields: &["page_id", "title", "description"],
        inlines: NONE,
        ordering: &["page_id"],
    },
    ModelAdmin {
        model: "college-achievements",
        verbose_name: "College achievement",
        list_display: &["department", "course", "date", "description"],
        list_filter: &["department", "course", "date"],
        search_fields: &["description", "department__name", "course__name"],
        inlines: NONE,
        ordering: &["-date"],
    },
    ModelAdmin {
        model: "student-achievements",
        verbose_name: "Student achievement",
        list_display: &["department", "course", "date", "description"],
        list_filter: &["department", "course", "date"],
        search_fields: &["description", "department__name", "course__name"],
        inlines: NONE,
        ordering: &["-date"],
    },
    ModelAdmin {
        model: "companies",
        verbose_name: "Company",
        list_display: &["name", "website"],
        list_filter: NONE,
        search_fields: &["name", "description"],
        inlines: NONE,
        ordering: &["name"],
    },
    ModelAdmin {
        model: "career-openings",
        verbose_name: "Career opening",
        list_display: &["current_opening", "category", "department", "is_active"],
        list_filter: &["category", "department", "is_active"],
        search_fields: &["current_opening", "opening_position", "description"],
        inlines: NONE,
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: "career-successes",
        verbose_name: "Career success",
        list_display: &["student_name", "company", "department", "batch"],
        list_filter: &["department", "company", "batch"],
        search_fields: &["student_name", "description"],
        inlines: NONE,
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: "placement-stats",
        verbose_name: "Placement statistic",
        list_display: &["placement_name", "placement_number", "suffix"],
        list_filter: NONE,
        search_fields: &["placement_name", "text"],
        inlines: NONE,
        ordering: &["created_at"],
    },
    ModelAdmin {
        model: "research-stats",
        verbose_name: "Research statistic",
        list_display: &["research_name", "number", "suffix"],
        list_filter: NONE,
        search_fields: &["research_name", "text"],
        inlines: NONE,
        ordering: &["created_at"],
    },
    ModelAdmin {
        model: "contact-forms",
        verbose_name: "Contact form",
        list_display: &["name", "email", "phone", "is_mail_sent", "created_at"],
        list_filter: &["is_mail_sent", "created_at"],
        search_fields: &["name", "email", "phone"],
        inlines: NONE,
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: "career-forms",
        verbose_name: "Career form",
        list_display: &["name", "email", "current_opening", "department", "created_at"],
        list_filter: &["department", "gender", "marital_status"],
        search_fields: &["name", "email", "phone", "current_opening"],
        inlines: NONE,
        ordering: &["-created_at"],
    },
    ModelAdmin {
        model: "grievances",
        verbose_name: "Grievance",
        list_display: &["reference_number", "name", "status", "department", "created_at"],
        list_filter: &["status", "department", "committee_category", "faculty"],
        search_fields: &["name", "email", "phone", "details", "reference_number"],
        inlines: NONE,
        ordering: &["-created_at"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn model_keys_are_unique() {
        let keys: HashSet<&str> = MODEL_ADMINS.iter().map(|m| m.model).collect();
        assert_eq!(keys.len(), MODEL_ADMINS.len());
    }

    #[test]
    fn every_model_lists_something() {
        for admin in MODEL_ADMINS {
            assert!(!admin.list_display.is_empty(), "{} has no columns", admin.model);
            assert!(!admin.search_fields.is_empty(), "{} has no search", admin.model);
        }
    }

    #[test]
    fn department_inlines_include_programs() {
        let dept = MODEL_ADMINS
            .iter()
            .find(|m| m.model == "departments")
            .unwrap();
        assert!(dept.inlines.contains(&"programs"));
    }
}
