//! Closing-matters checklist — the fixed catalog of accounts and
//! subscriptions to cancel, grouped by category.

/// One account or service to close.
#[derive(Debug, Clone)]
pub struct ClosingItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: Option<String>,
    pub completed: bool,
}

/// A group of related closure items (utilities, telco, ...).
#[derive(Debug, Clone)]
pub struct ClosingCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<ClosingItem>,
}

impl ClosingCategory {
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }
}

fn item(id: &str, name: &str, description: &str, link: &str) -> ClosingItem {
    ClosingItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        link: Some(link.into()),
        completed: false,
    }
}

/// The fixed closing catalog — 12 items across 4 categories, matching
/// module 4's total.
pub fn seed_closing() -> Vec<ClosingCategory> {
    vec![
        ClosingCategory {
            id: "utilities".into(),
            title: "Utilities".into(),
            items: vec![
                item(
                    "sp-group",
                    "SP Group (Electricity & Gas)",
                    "Close or transfer the utilities account",
                    "https://www.spgroup.com.sg",
                ),
                item(
                    "pub",
                    "PUB (Water)",
                    "Close or transfer the water account",
                    "https://www.pub.gov.sg",
                ),
            ],
        },
        ClosingCategory {
            id: "telco".into(),
            title: "Telecommunications".into(),
            items: vec![
                item(
                    "singtel",
                    "Singtel",
                    "Cancel mobile, broadband, and TV services",
                    "https://www.singtel.com",
                ),
                item(
                    "starhub",
                    "StarHub",
                    "Cancel mobile, broadband, and TV services",
                    "https://www.starhub.com",
                ),
                item(
                    "m1",
                    "M1",
                    "Cancel mobile and broadband services",
                    "https://www.m1.com.sg",
                ),
            ],
        },
        ClosingCategory {
            id: "subscriptions".into(),
            title: "Subscriptions".into(),
            items: vec![
                item(
                    "netflix",
                    "Netflix",
                    "Cancel subscription through account settings",
                    "https://www.netflix.com/cancelplan",
                ),
                item(
                    "spotify",
                    "Spotify",
                    "Cancel subscription through account page",
                    "https://www.spotify.com/account",
                ),
                item(
                    "disney",
                    "Disney+",
                    "Cancel subscription through account settings",
                    "https://www.disneyplus.com",
                ),
            ],
        },
        ClosingCategory {
            id: "social".into(),
            title: "Social Media & Digital".into(),
            items: vec![
                item(
                    "facebook",
                    "Facebook / Meta",
                    "Memorialize or remove account using legacy contact",
                    "https://www.facebook.com/help/contact/305593649477238",
                ),
                item(
                    "instagram",
                    "Instagram",
                    "Request memorialization or account removal",
                    "https://help.instagram.com/264154560391256",
                ),
                item(
                    "google",
                    "Google Account",
                    "Use Inactive Account Manager or request removal",
                    "https://support.google.com/accounts/troubleshooter/6357590",
                ),
                item(
                    "linkedin",
                    "LinkedIn",
                    "Request account closure through support",
                    "https://www.linkedin.com/help/linkedin/answer/2842",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_module_total() {
        let categories = seed_closing();
        let total: usize = categories.iter().map(|c| c.items.len()).sum();
        assert_eq!(total, 12);
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn item_ids_are_unique() {
        let categories = seed_closing();
        let mut ids: Vec<&str> = categories
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id.as_str()))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn nothing_completed_at_seed() {
        assert!(
            seed_closing()
                .iter()
                .all(|c| c.completed_count() == 0)
        );
    }
}
