use serde::Serialize;

use crate::models::account::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(href: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { href, label, icon }
}

const JOB_SEEKER_NAV: &[NavItem] = &[
    item("/dashboard/jobseeker", "Dashboard", "layout-dashboard"),
    item("/profile", "My Profile", "user"),
    item("/profile/public", "Public Profile", "file-text"),
    item("/search", "Browse Jobs", "search"),
];

const EMPLOYER_NAV: &[NavItem] = &[
    item("/dashboard/employer", "Dashboard", "layout-dashboard"),
    item("/search", "Find Candidates", "search"),
    item("/dashboard/employer/saved", "Saved Candidates", "bookmark"),
    item("/dashboard/employer/company", "Company Profile", "building-2"),
];

const ADMIN_NAV: &[NavItem] = &[
    item("/dashboard/admin", "Dashboard", "layout-dashboard"),
    item("/dashboard/admin/users", "User Management", "users"),
    item("/dashboard/admin/categories", "Categories & Roles", "tags"),
    item("/dashboard/admin/analytics", "Analytics", "bar-chart-3"),
];

impl Role {
    /// Sidebar entries for the role's dashboard.
    pub fn navigation(self) -> &'static [NavItem] {
        match self {
            Role::JobSeeker => JOB_SEEKER_NAV,
            Role::Employer => EMPLOYER_NAV,
            Role::Admin => ADMIN_NAV,
        }
    }

    pub fn dashboard_href(self) -> &'static str {
        self.navigation()[0].href
    }
}
