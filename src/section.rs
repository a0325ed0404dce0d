use std::str::FromStr;

/// Navigable page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Element id of the section anchor.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| format!("no such section: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_in_order() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "skills", "experience", "portfolio", "contact"]
        );
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("contact".parse::<Section>(), Ok(Section::Contact));
        assert_eq!("#skills".parse::<Section>(), Ok(Section::Skills));
        assert!("blog".parse::<Section>().is_err());
        for section in Section::ALL {
            assert_eq!(section.href().parse::<Section>(), Ok(section));
        }
    }
}
