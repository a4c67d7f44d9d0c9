//! The routed pages of the site.
//!
//! A page is addressed by its slug under the language segment
//! (`/{lang}/{slug}`) and shows its title followed by every key of the
//! dictionary namespaces it lists.

use crate::i18n::{keys_in_namespace, Key};

#[derive(Debug, PartialEq, Eq)]
pub struct Page {
    /// Route under the language segment; empty for the home page
    pub slug: &'static str,

    /// Link text in navigation
    pub label: Key,

    /// Page heading
    pub title: Key,

    /// Dictionary namespaces rendered as the page body, in order
    pub sections: &'static [&'static str],
}

pub const PAGES: &[Page] = &[
    Page {
        slug: "",
        label: Key::NavHome,
        title: Key::HeroSlide1Title,
        sections: &[
            "hero",
            "quicklinks",
            "detailed",
            "about.title",
            "about.description",
            "about.vision",
            "about.mission",
            "projects",
            "faq",
            "cta",
        ],
    },
    Page {
        slug: "about",
        label: Key::PanelAbout,
        title: Key::AboutHeroTitle,
        sections: &[
            "about.hero",
            "about.section",
            "timeline",
            "vision",
            "mission",
            "scope",
            "values",
            "about.values",
            "about.cta",
        ],
    },
    Page {
        slug: "why-petra",
        label: Key::PanelWhyPetra,
        title: Key::WhyPetraHeroTitle,
        sections: &["whyPetra", "pillars"],
    },
    Page {
        slug: "governance",
        label: Key::PanelGovernance,
        title: Key::PanelGovernance,
        sections: &[],
    },
    Page {
        slug: "sustainability",
        label: Key::PanelSustainability,
        title: Key::PanelSustainability,
        sections: &[],
    },
    Page {
        slug: "ethics-governance",
        label: Key::PanelEthics,
        title: Key::PanelEthics,
        sections: &[],
    },
    Page {
        slug: "our-values",
        label: Key::PanelValues,
        title: Key::PanelValues,
        sections: &["values"],
    },
    Page {
        slug: "activities",
        label: Key::PanelActivities,
        title: Key::ActivitiesHeroTitle,
        sections: &["activities"],
    },
    Page {
        slug: "services",
        label: Key::PanelServices,
        title: Key::ServicesPageHeroTitle,
        sections: &["services", "detailed"],
    },
    Page {
        slug: "safety",
        label: Key::PanelSafety,
        title: Key::SafetyPageHeroTitle,
        sections: &["safety.page", "safetySystems", "vehicleControl", "fms"],
    },
    Page {
        slug: "contact",
        label: Key::NavContact,
        title: Key::ContactHeroTitle,
        sections: &["contact"],
    },
];

impl Page {
    /// Find the page for the path below the language segment.
    ///
    /// Matching is exact apart from surrounding slashes; `""` is home.
    pub fn from_route(rest: &str) -> Option<&'static Page> {
        let slug = rest.trim_matches('/');
        PAGES.iter().find(|page| page.slug == slug)
    }

    pub fn home() -> &'static Page {
        &PAGES[0]
    }

    /// Path below the language segment (`/about`, or `/` for home).
    pub fn route(&self) -> String {
        format!("/{}", self.slug)
    }

    /// Body keys in render order, without the title and without repeats.
    pub fn body_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = Vec::new();
        for namespace in self.sections {
            for key in keys_in_namespace(namespace) {
                if key != self.title && !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route_home() {
        assert_eq!(Page::from_route(""), Some(Page::home()));
        assert_eq!(Page::from_route("/"), Some(Page::home()));
    }

    #[test]
    fn test_from_route_pages() {
        assert_eq!(Page::from_route("about").unwrap().title, Key::AboutHeroTitle);
        assert_eq!(Page::from_route("why-petra/").unwrap().slug, "why-petra");
        assert_eq!(Page::from_route("contact").unwrap().label, Key::NavContact);
    }

    #[test]
    fn test_from_route_unknown() {
        assert_eq!(Page::from_route("careers"), None);
        assert_eq!(Page::from_route("about/team"), None);
        assert_eq!(Page::from_route("About"), None);
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, page) in PAGES.iter().enumerate() {
            assert!(PAGES[i + 1..].iter().all(|other| other.slug != page.slug));
        }
    }

    #[test]
    fn test_every_section_has_keys() {
        for page in PAGES {
            for namespace in page.sections {
                assert!(
                    !keys_in_namespace(namespace).is_empty(),
                    "{} lists empty namespace {}",
                    page.route(),
                    namespace
                );
            }
        }
    }

    #[test]
    fn test_body_keys_skip_title() {
        let about = Page::from_route("about").unwrap();
        let keys = about.body_keys();
        assert!(!keys.contains(&Key::AboutHeroTitle));
        assert!(keys.contains(&Key::AboutHeroSubtitle));
        assert!(keys.contains(&Key::Timeline2019));
    }

    #[test]
    fn test_body_keys_have_no_repeats() {
        for page in PAGES {
            let keys = page.body_keys();
            let mut sorted = keys.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), keys.len(), "{}", page.route());
        }
    }

    #[test]
    fn test_route() {
        assert_eq!(Page::home().route(), "/");
        assert_eq!(Page::from_route("safety").unwrap().route(), "/safety");
    }
}
