//! Literal defaults for the school site.

use indexmap::IndexMap;

use asic_types::{AdminTheme, CorsSettings, NavGroup, NavItem, Sidebar};

pub const DEFAULT_DB_NAME: &str = "asic_school_db";
pub const DEFAULT_DB_USER: &str = "asic_user";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Password that older deployments shipped as a built-in default. It is no
/// longer applied, only detected by the deployment checks.
pub const LEGACY_DB_PASSWORD: &str = "Asic@2025";

pub const SITE_URL: &str = "https://asic-school.vercel.app";

pub const CORS_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    SITE_URL,
];

/// Hosts accepted in debug mode when `ALLOWED_HOSTS` is empty.
pub const DEBUG_LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

pub fn cors() -> CorsSettings {
    CorsSettings::new(CORS_ALLOWED_ORIGINS, true)
}

pub fn admin_theme() -> AdminTheme {
    let primary_colors: IndexMap<String, String> = [
        ("50", "#f0f9ff"),
        ("100", "#e0f2fe"),
        ("200", "#bae6fd"),
        ("300", "#7dd3fc"),
        ("400", "#38bdf8"),
        ("500", "#0ea5e9"),
        ("600", "#0284c7"),
        ("700", "#0369a1"),
        ("800", "#075985"),
        ("900", "#0c4a6e"),
        ("950", "#082f49"),
    ]
    .into_iter()
    .map(|(shade, hex)| (shade.to_string(), hex.to_string()))
    .collect();

    AdminTheme {
        site_title: "ASIC Mawana".to_string(),
        site_header: "Anglo Sanskrit Inter College".to_string(),
        site_url: SITE_URL.to_string(),
        site_symbol: "school".to_string(),
        show_history: true,
        show_view_on_site: true,
        theme: None,
        primary_colors,
        sidebar: Sidebar {
            show_search: true,
            show_all_applications: true,
            navigation: navigation(),
        },
    }
}

fn navigation() -> Vec<NavGroup> {
    vec![
        NavGroup::new(
            "Dashboard",
            false,
            vec![
                NavItem::new("Home", "dashboard", "/admin/"),
                NavItem::new("View Website", "public", SITE_URL),
            ],
        ),
        NavGroup::new(
            "College Management",
            true,
            vec![
                NavItem::new("Gallery", "photo_library", "/admin/api/galleryimage/"),
                NavItem::new("Staff Members", "people", "/admin/api/staff/"),
                NavItem::new("Management", "business", "/admin/api/managementmember/"),
                NavItem::new("Activities", "event", "/admin/api/activity/"),
            ],
        ),
        NavGroup::new(
            "Applications",
            true,
            vec![
                NavItem::new(
                    "Student Registrations",
                    "school",
                    "/admin/api/studentregistration/",
                ),
                NavItem::new("Contact Messages", "mail", "/admin/api/contactsubmission/"),
            ],
        ),
        NavGroup::new(
            "System",
            true,
            vec![
                NavItem::new("Users", "person", "/admin/auth/user/"),
                NavItem::new("Groups", "group", "/admin/auth/group/"),
            ],
        ),
    ]
}
