//! # Admin Shell
//!
//! Pages reachable from the admin sidebar, the registry of features that
//! are announced but not built yet, and the sidebar's own state.

use serde::{Deserialize, Serialize};

/// Features that render the shared "coming soon" page, keyed by their
/// registry key (`ab-testing`, `audit-log`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminFeature {
    AbTesting,
    PaymentGateway,
    RewardsProgram,
    ContentModeration,
    RoleManagement,
    RevenueForecast,
    GeographicMap,
    ApiManagement,
    AuditLog,
    AlertRules,
    ReportBuilder,
    SupportTickets,
    DatabaseBackup,
}

/// Everything the "coming soon" page shows for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub planned: [&'static str; 4],
}

impl AdminFeature {
    pub fn all() -> &'static [AdminFeature] {
        &[
            AdminFeature::AbTesting,
            AdminFeature::PaymentGateway,
            AdminFeature::RewardsProgram,
            AdminFeature::ContentModeration,
            AdminFeature::RoleManagement,
            AdminFeature::RevenueForecast,
            AdminFeature::GeographicMap,
            AdminFeature::ApiManagement,
            AdminFeature::AuditLog,
            AdminFeature::AlertRules,
            AdminFeature::ReportBuilder,
            AdminFeature::SupportTickets,
            AdminFeature::DatabaseBackup,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            AdminFeature::AbTesting => "ab-testing",
            AdminFeature::PaymentGateway => "payment-gateway",
            AdminFeature::RewardsProgram => "rewards-program",
            AdminFeature::ContentModeration => "content-moderation",
            AdminFeature::RoleManagement => "role-management",
            AdminFeature::RevenueForecast => "revenue-forecast",
            AdminFeature::GeographicMap => "geographic-map",
            AdminFeature::ApiManagement => "api-management",
            AdminFeature::AuditLog => "audit-log",
            AdminFeature::AlertRules => "alert-rules",
            AdminFeature::ReportBuilder => "report-builder",
            AdminFeature::SupportTickets => "support-tickets",
            AdminFeature::DatabaseBackup => "database-backup",
        }
    }

    pub fn from_key(key: &str) -> Option<AdminFeature> {
        AdminFeature::all().iter().copied().find(|f| f.key() == key)
    }

    pub fn info(&self) -> FeatureInfo {
        match self {
            AdminFeature::AbTesting => FeatureInfo {
                title: "A/B Testing Management",
                description: "Create and manage A/B tests for platform features",
                planned: [
                    "Create and manage multiple A/B tests",
                    "Real-time performance tracking",
                    "Statistical significance analysis",
                    "Automatic winner selection",
                ],
            },
            AdminFeature::PaymentGateway => FeatureInfo {
                title: "Payment Gateway Configuration",
                description: "Configure payment processors and transaction settings",
                planned: [
                    "Multiple payment processor support",
                    "Transaction fee configuration",
                    "Automatic reconciliation",
                    "Fraud detection settings",
                ],
            },
            AdminFeature::RewardsProgram => FeatureInfo {
                title: "Rewards & Loyalty Program",
                description: "Manage customer and laborer reward programs",
                planned: [
                    "Points and tier management",
                    "Reward redemption tracking",
                    "Gamification elements",
                    "Performance-based bonuses",
                ],
            },
            AdminFeature::ContentModeration => FeatureInfo {
                title: "Content Moderation Queue",
                description: "Review and moderate user-generated content",
                planned: [
                    "Automated content filtering",
                    "Manual review queue",
                    "User reporting system",
                    "Content guidelines enforcement",
                ],
            },
            AdminFeature::RoleManagement => FeatureInfo {
                title: "Role-Based Access Control",
                description: "Manage user roles and permissions",
                planned: [
                    "Custom role creation",
                    "Granular permission control",
                    "Role assignment management",
                    "Access audit trails",
                ],
            },
            AdminFeature::RevenueForecast => FeatureInfo {
                title: "Revenue Forecasting",
                description: "Predictive revenue analytics and forecasting",
                planned: [
                    "ML-powered revenue predictions",
                    "Seasonal trend analysis",
                    "Growth scenario modeling",
                    "Interactive forecast charts",
                ],
            },
            AdminFeature::GeographicMap => FeatureInfo {
                title: "Geographic Distribution",
                description: "View user distribution across Albania",
                planned: [
                    "Interactive map of Albania",
                    "User density heat maps",
                    "City-level analytics",
                    "Geographic targeting tools",
                ],
            },
            AdminFeature::ApiManagement => FeatureInfo {
                title: "API Management & Monitoring",
                description: "Monitor API usage, keys, and performance",
                planned: [
                    "API key generation and management",
                    "Rate limiting configuration",
                    "Usage analytics and monitoring",
                    "Developer documentation",
                ],
            },
            AdminFeature::AuditLog => FeatureInfo {
                title: "Audit Log Viewer",
                description: "View complete system activity audit trail",
                planned: [
                    "Complete activity logging",
                    "Advanced search and filtering",
                    "User action tracking",
                    "Compliance reporting",
                ],
            },
            AdminFeature::AlertRules => FeatureInfo {
                title: "Automated Alert Configuration",
                description: "Configure automated alerts and notifications",
                planned: [
                    "Custom alert rule creation",
                    "Multi-channel notifications",
                    "Threshold-based triggers",
                    "Alert escalation workflows",
                ],
            },
            AdminFeature::ReportBuilder => FeatureInfo {
                title: "Custom Report Builder",
                description: "Build custom reports with drag-and-drop",
                planned: [
                    "Drag-and-drop report designer",
                    "Custom data source selection",
                    "Scheduled report generation",
                    "Export in multiple formats",
                ],
            },
            AdminFeature::SupportTickets => FeatureInfo {
                title: "Support Ticket System",
                description: "Manage customer support tickets",
                planned: [
                    "Ticket creation and assignment",
                    "Priority and status management",
                    "SLA tracking",
                    "Customer satisfaction surveys",
                ],
            },
            AdminFeature::DatabaseBackup => FeatureInfo {
                title: "Database Backup Management",
                description: "Schedule and manage database backups",
                planned: [
                    "Automated backup scheduling",
                    "Point-in-time recovery",
                    "Backup verification",
                    "Cloud storage integration",
                ],
            },
        }
    }
}

/// Pages rendered inside the admin layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminPage {
    Dashboard,
    Users,
    Gigs,
    Verification,
    Financial,
    Analytics,
    Settings,
    RealtimeAnalytics,
    BulkNotifications,
    AdvancedReporting,
    Announcements,
    Feature(AdminFeature),
}

impl AdminPage {
    const BUILT: [AdminPage; 11] = [
        AdminPage::Dashboard,
        AdminPage::Users,
        AdminPage::Gigs,
        AdminPage::Verification,
        AdminPage::Financial,
        AdminPage::Analytics,
        AdminPage::Settings,
        AdminPage::RealtimeAnalytics,
        AdminPage::BulkNotifications,
        AdminPage::AdvancedReporting,
        AdminPage::Announcements,
    ];

    pub fn all() -> Vec<AdminPage> {
        AdminPage::BUILT
            .iter()
            .copied()
            .chain(AdminFeature::all().iter().copied().map(AdminPage::Feature))
            .collect()
    }

    pub fn id(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "admin-dashboard",
            AdminPage::Users => "admin-users",
            AdminPage::Gigs => "admin-gigs",
            AdminPage::Verification => "admin-verification",
            AdminPage::Financial => "admin-financial",
            AdminPage::Analytics => "admin-analytics",
            AdminPage::Settings => "admin-settings",
            AdminPage::RealtimeAnalytics => "admin-realtime-analytics",
            AdminPage::BulkNotifications => "admin-bulk-notifications",
            AdminPage::AdvancedReporting => "admin-advanced-reporting",
            AdminPage::Announcements => "admin-announcements",
            AdminPage::Feature(feature) => match feature {
                AdminFeature::AbTesting => "admin-ab-testing",
                AdminFeature::PaymentGateway => "admin-payment-gateway",
                AdminFeature::RewardsProgram => "admin-rewards-program",
                AdminFeature::ContentModeration => "admin-content-moderation",
                AdminFeature::RoleManagement => "admin-role-management",
                AdminFeature::RevenueForecast => "admin-revenue-forecast",
                AdminFeature::GeographicMap => "admin-geographic-map",
                AdminFeature::ApiManagement => "admin-api-management",
                AdminFeature::AuditLog => "admin-audit-log",
                AdminFeature::AlertRules => "admin-alert-rules",
                AdminFeature::ReportBuilder => "admin-report-builder",
                AdminFeature::SupportTickets => "admin-support-tickets",
                AdminFeature::DatabaseBackup => "admin-database-backup",
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Admin Control Center",
            AdminPage::Users => "User Management",
            AdminPage::Gigs => "Gig Management",
            AdminPage::Verification => "Laborer Verification",
            AdminPage::Financial => "Financial Management",
            AdminPage::Analytics => "Analytics",
            AdminPage::Settings => "System Settings",
            AdminPage::RealtimeAnalytics => "Real-time Analytics",
            AdminPage::BulkNotifications => "Bulk Notifications",
            AdminPage::AdvancedReporting => "Advanced Reporting",
            AdminPage::Announcements => "Platform Announcements",
            AdminPage::Feature(feature) => feature.info().title,
        }
    }
}

/// Admin entries that are not wired into the layout at all and fall back to
/// a bare "coming soon" page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderPage {
    Reviews,
    Disputes,
    Support,
    ActivityLog,
    SystemHealth,
}

impl PlaceholderPage {
    pub fn all() -> &'static [PlaceholderPage] {
        &[
            PlaceholderPage::Reviews,
            PlaceholderPage::Disputes,
            PlaceholderPage::Support,
            PlaceholderPage::ActivityLog,
            PlaceholderPage::SystemHealth,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            PlaceholderPage::Reviews => "admin-reviews",
            PlaceholderPage::Disputes => "admin-disputes",
            PlaceholderPage::Support => "admin-support",
            PlaceholderPage::ActivityLog => "admin-activity-log",
            PlaceholderPage::SystemHealth => "admin-system-health",
        }
    }

    /// "admin-activity-log" -> "Activity Log".
    pub fn title(&self) -> String {
        self.id()
            .trim_start_matches("admin-")
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: AdminPage,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

fn item(page: AdminPage, label: &'static str) -> NavItem {
    NavItem { page, label }
}

/// The sidebar, top to bottom.
pub fn nav_sections() -> Vec<NavSection> {
    use AdminFeature as F;
    use AdminPage as P;

    vec![
        NavSection {
            title: "Main",
            items: vec![item(P::Dashboard, "Dashboard")],
        },
        NavSection {
            title: "Core Management",
            items: vec![
                item(P::Users, "User Management"),
                item(P::Gigs, "Gig Management"),
                item(P::Verification, "Laborer Verification"),
                item(P::Financial, "Financial Management"),
                item(P::Analytics, "Analytics"),
                item(P::Settings, "System Settings"),
            ],
        },
        NavSection {
            title: "Analytics & Reports",
            items: vec![
                item(P::RealtimeAnalytics, "Real-time Analytics"),
                item(P::AdvancedReporting, "Advanced Reporting"),
                item(P::Feature(F::RevenueForecast), "Revenue Forecast"),
                item(P::Feature(F::ReportBuilder), "Custom Reports"),
            ],
        },
        NavSection {
            title: "Communication",
            items: vec![
                item(P::BulkNotifications, "Bulk Notifications"),
                item(P::Announcements, "Platform Announcements"),
                item(P::Feature(F::SupportTickets), "Support Tickets"),
            ],
        },
        NavSection {
            title: "Platform Features",
            items: vec![
                item(P::Feature(F::AbTesting), "A/B Testing"),
                item(P::Feature(F::RewardsProgram), "Rewards Program"),
                item(P::Feature(F::ContentModeration), "Content Moderation"),
                item(P::Feature(F::GeographicMap), "Geographic Map"),
            ],
        },
        NavSection {
            title: "System & Security",
            items: vec![
                item(P::Feature(F::RoleManagement), "Role Management"),
                item(P::Feature(F::PaymentGateway), "Payment Config"),
                item(P::Feature(F::ApiManagement), "API Management"),
                item(P::Feature(F::AuditLog), "Audit Log"),
                item(P::Feature(F::AlertRules), "Alert Rules"),
                item(P::Feature(F::DatabaseBackup), "DB Backups"),
            ],
        },
    ]
}

/// Sidebar state owned by the admin shell. It lives as long as the user
/// stays on admin pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLayoutState {
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
}

impl Default for AdminLayoutState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            mobile_menu_open: false,
        }
    }
}

impl AdminLayoutState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_mobile_menu(&mut self, open: bool) {
        self.mobile_menu_open = open;
    }

    /// Picking a sidebar entry closes the mobile drawer.
    pub fn on_item_selected(&mut self) {
        self.mobile_menu_open = false;
    }
}
