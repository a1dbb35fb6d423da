//! Premium modules and the bundle plan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checkout::format_price;

/// Identifier of a premium module (e.g. `"messaging"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Create a module id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A module that can be purchased on its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumModule {
    /// Module id
    pub id: ModuleId,
    /// Display name
    pub name: String,
    /// One-line pitch shown under the name
    pub summary: String,
    /// Longer description for the detail view
    pub description: String,
    /// Monthly price in cents
    pub monthly_price_cents: u32,
    /// Feature bullets
    pub highlights: Vec<String>,
}

impl PremiumModule {
    /// Plan description handed to checkout.
    #[must_use]
    pub fn plan_description(&self) -> String {
        format!("{} - {}", self.name, format_price(self.monthly_price_cents))
    }
}

/// The all-modules bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlePlan {
    /// Display name
    pub name: String,
    /// One-line pitch
    pub summary: String,
    /// Monthly price in cents
    pub monthly_price_cents: u32,
}

impl BundlePlan {
    /// Plan description handed to checkout.
    #[must_use]
    pub fn plan_description(&self) -> String {
        format!("{} - {}", self.name, format_price(self.monthly_price_cents))
    }
}

/// Modules on sale plus the bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCatalog {
    /// Modules in display order
    pub modules: Vec<PremiumModule>,
    /// Bundle covering every module
    pub bundle: BundlePlan,
}

impl ModuleCatalog {
    /// The modules currently offered on CodeSphere.
    pub fn standard() -> Self {
        fn module(
            id: &str,
            name: &str,
            summary: &str,
            description: &str,
            monthly_price_cents: u32,
            highlights: &[&str],
        ) -> PremiumModule {
            PremiumModule {
                id: ModuleId::new(id),
                name: name.to_string(),
                summary: summary.to_string(),
                description: description.to_string(),
                monthly_price_cents,
                highlights: highlights.iter().map(|h| (*h).to_string()).collect(),
            }
        }

        let modules = vec![
            module(
                "messaging",
                "Messaging Pro",
                "Message anyone, not just your connections",
                "Send direct messages to any member, see read receipts and keep unlimited history.",
                499,
                &["Unlimited direct messages", "Read receipts", "Full message history"],
            ),
            module(
                "jobs",
                "Jobs Pro",
                "Stand out to recruiters",
                "Feature your applications, see who viewed your postings and get salary insights.",
                999,
                &["Featured applications", "Posting analytics", "Salary insights"],
            ),
            module(
                "analytics",
                "Profile Analytics",
                "Know who is looking",
                "Track profile views, post reach and follower growth over time.",
                699,
                &["Profile view history", "Post reach", "Follower trends"],
            ),
            module(
                "organizations",
                "Organizations Plus",
                "Run your organization like a pro",
                "Admin roles, member insights and branded organization pages.",
                1499,
                &["Admin roles", "Member insights", "Custom branding"],
            ),
            module(
                "newsletters",
                "Newsletters",
                "Publish to your audience",
                "Write newsletters, schedule issues and track subscriber engagement.",
                599,
                &["Scheduled issues", "Subscriber analytics"],
            ),
            module(
                "challenges",
                "Challenges",
                "Host coding challenges",
                "Create challenges, rank submissions and award badges to winners.",
                799,
                &["Custom challenges", "Leaderboards", "Winner badges"],
            ),
        ];

        Self {
            modules,
            bundle: BundlePlan {
                name: "Premium Bundle".to_string(),
                summary: "Every premium module for one monthly price".to_string(),
                monthly_price_cents: 2499,
            },
        }
    }

    /// Look up a module by id.
    pub fn get(&self, id: &ModuleId) -> Option<&PremiumModule> {
        self.modules.iter().find(|module| &module.id == id)
    }

    /// Combined monthly price of every module bought separately.
    pub fn separate_total_cents(&self) -> u32 {
        self.modules
            .iter()
            .map(|module| module.monthly_price_cents)
            .fold(0u32, u32::saturating_add)
    }

    /// Monthly savings of the bundle over buying each module.
    pub fn bundle_savings_cents(&self) -> u32 {
        self.separate_total_cents()
            .saturating_sub(self.bundle.monthly_price_cents)
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
