//! Static site content

/// Hero headline and rotating taglines
pub const HERO_NAME: &str = "Njoku Obinna";
pub const HERO_TAGLINES: &[&str] = &["Web Designer", "Graphic Designer", "Video Editor"];
pub const HERO_INTRO: &str = "Creative digital solutions for your business: websites, \
brand identities and video that tell your story.";

pub const ABOUT_TEXT: &str = "I am a multidisciplinary creative based in Lagos, Nigeria, \
working across web design, graphic design and video editing. I care about clean layouts, \
strong visual identity and content that converts.";

/// Skill name and proficiency percentage
pub const SKILLS: &[(&str, u16)] = &[
    ("UI/UX Design", 65),
    ("Web Development", 80),
    ("Graphic Design", 90),
    ("Video Editing", 82),
    ("Branding", 86),
    ("Photo Editing", 76),
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Design & Development",
        description: "Custom, responsive websites that combine stunning design with seamless functionality across all devices.",
    },
    Service {
        title: "Graphic Design",
        description: "Creative visual solutions that communicate your brand message effectively through logos, branding, and marketing materials.",
    },
    Service {
        title: "Video Editing",
        description: "Professional video editing services including color grading, motion graphics, and engaging storytelling.",
    },
    Service {
        title: "Mobile-First Design",
        description: "User-focused mobile interfaces that prioritize performance, usability and conversion optimization.",
    },
    Service {
        title: "Photo Editing",
        description: "Professional photo enhancement, retouching, and composite creation for commercial and personal projects.",
    },
    Service {
        title: "E-commerce Solutions",
        description: "Custom online stores with intuitive shopping experiences, secure payment gateways, and inventory management.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioCategory {
    Web,
    Graphic,
    Video,
}

pub struct PortfolioItem {
    pub title: &'static str,
    pub category: PortfolioCategory,
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Modern Website Design",
        category: PortfolioCategory::Web,
    },
    PortfolioItem {
        title: "UI/UX Design Project",
        category: PortfolioCategory::Web,
    },
    PortfolioItem {
        title: "April Graphic Design",
        category: PortfolioCategory::Graphic,
    },
    PortfolioItem {
        title: "Custom Web Development",
        category: PortfolioCategory::Web,
    },
    PortfolioItem {
        title: "Brand Identity Design",
        category: PortfolioCategory::Graphic,
    },
    PortfolioItem {
        title: "Portfolio Video Showreel",
        category: PortfolioCategory::Video,
    },
];

/// Filter applied to the portfolio list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioFilter {
    #[default]
    All,
    Web,
    Graphic,
    Video,
}

impl PortfolioFilter {
    pub const ALL: [PortfolioFilter; 4] = [Self::All, Self::Web, Self::Graphic, Self::Video];

    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Web,
            Self::Web => Self::Graphic,
            Self::Graphic => Self::Video,
            Self::Video => Self::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::All => Self::Video,
            Self::Web => Self::All,
            Self::Graphic => Self::Web,
            Self::Video => Self::Graphic,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Web => "Web",
            Self::Graphic => "Graphic",
            Self::Video => "Video",
        }
    }

    pub fn matches(&self, category: PortfolioCategory) -> bool {
        match self {
            Self::All => true,
            Self::Web => category == PortfolioCategory::Web,
            Self::Graphic => category == PortfolioCategory::Graphic,
            Self::Video => category == PortfolioCategory::Video,
        }
    }

    /// Portfolio items passing this filter
    pub fn items(&self) -> impl Iterator<Item = &'static PortfolioItem> + '_ {
        PORTFOLIO_ITEMS
            .iter()
            .filter(move |item| self.matches(item.category))
    }
}

/// (title, detail) pairs for the contact info panel
pub const CONTACT_INFO: &[(&str, &str)] = &[
    ("Email", "realitycontents101@gmail.com"),
    ("Phone", "+2349167416203"),
    ("Location", "Lagos, Nigeria"),
];

/// (network, url) pairs for the social links
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/in/obinna-njoku"),
    ("Instagram", "https://www.instagram.com/realitycontents"),
    ("WhatsApp", "https://wa.me/2349167416203"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle_round_trips() {
        for filter in PortfolioFilter::ALL {
            assert_eq!(filter.next().prev(), filter);
        }
        assert_eq!(PortfolioFilter::Video.next(), PortfolioFilter::All);
    }

    #[test]
    fn test_all_filter_shows_everything() {
        assert_eq!(PortfolioFilter::All.items().count(), PORTFOLIO_ITEMS.len());
    }

    #[test]
    fn test_category_filters_partition_items() {
        let total: usize = [
            PortfolioFilter::Web,
            PortfolioFilter::Graphic,
            PortfolioFilter::Video,
        ]
        .iter()
        .map(|f| f.items().count())
        .sum();
        assert_eq!(total, PORTFOLIO_ITEMS.len());

        assert!(PortfolioFilter::Video
            .items()
            .all(|item| item.category == PortfolioCategory::Video));
        assert_eq!(PortfolioFilter::Web.items().count(), 3);
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILLS.iter().all(|(_, level)| *level <= 100));
    }
}
