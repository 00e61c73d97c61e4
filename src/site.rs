use crate::nav::{NavAction, NavTarget};

pub const OWNER: &str = "Pahuldeep Singh";
pub const GITHUB_URL: &str = "https://github.com/pahuldeepp";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/pahuldeep-singh-b7aa22181/";

pub const CONTACT_EMAIL: &str = "pahuldeepsingh12@gmail.com";
pub const CONTACT_PHONE: &str = "431-388-6323";
pub const CONTACT_PHONE_URI: &str = "tel:+14313886323";
pub const CONTACT_LOCATION: &str = "Canada";

/// Role titles cycled by the home section, in display order.
pub const TITLES: [&str; 6] = [
    "A Master's Degree Student",
    "A Full Stack Developer",
    "A Software Engineer",
    "A Senior FullStack Developer",
    "A Senior Technical Support Analyst",
    "AI and ML Researcher",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechIcon {
    pub name: &'static str,
    /// devicon font class
    pub class: &'static str,
    pub color: &'static str,
}

impl TechIcon {
    const fn new(name: &'static str, class: &'static str, color: &'static str) -> Self {
        Self { name, class, color }
    }
}

pub const TECH_ICONS: [TechIcon; 12] = [
    TechIcon::new("React", "devicon-react-original", "#61DAFB"),
    TechIcon::new("Node.js", "devicon-nodejs-plain", "#5FA04E"),
    TechIcon::new("TypeScript", "devicon-typescript-plain", "#3178C6"),
    TechIcon::new("Docker", "devicon-docker-plain", "#2496ED"),
    TechIcon::new("JavaScript", "devicon-javascript-plain", "#F7DF1E"),
    TechIcon::new("Python", "devicon-python-plain", "#3776AB"),
    TechIcon::new("Kubernetes", "devicon-kubernetes-plain", "#326CE5"),
    TechIcon::new("Terraform", "devicon-terraform-plain", "#844FBA"),
    TechIcon::new("Angular", "devicon-angularjs-plain", "#DD0031"),
    TechIcon::new("PostgreSQL", "devicon-postgresql-plain", "#4169E1"),
    TechIcon::new("Redux", "devicon-redux-original", "#764ABC"),
    TechIcon::new("Git", "devicon-git-plain", "#F05032"),
];

pub const NAV_ACTIONS: [NavAction; 4] = [
    NavAction::new("Home", None, NavTarget::Root),
    NavAction::new("About", None, NavTarget::Anchor("#about")),
    NavAction::new("Contact", None, NavTarget::Anchor("#contact")),
    NavAction::new(
        "LinkedIn",
        Some("devicon-linkedin-plain"),
        NavTarget::External(LINKEDIN_URL),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_unique() {
        for (i, a) in TECH_ICONS.iter().enumerate() {
            for b in &TECH_ICONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_icon_colors_are_hex() {
        for icon in TECH_ICONS {
            assert_eq!(icon.color.len(), 7, "{}", icon.name);
            assert!(icon.color.starts_with('#'));
            assert!(icon.color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_nav_actions_cover_sections() {
        let hrefs = NAV_ACTIONS.iter().map(|a| a.target.href()).collect::<Vec<_>>();
        assert!(hrefs.contains(&"/"));
        assert!(hrefs.contains(&"#about"));
        assert!(hrefs.contains(&"#contact"));
    }
}
