//! Site sections and page identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five site sections reachable from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Projects,
    Certs,
    Contact,
}

/// File name served for the home section.
pub const HOME_FILE: &str = "index.html";

impl Page {
    /// All sections, in listing order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Certs,
        Page::Contact,
    ];

    /// Section name as typed after `cd`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Certs => "certs",
            Self::Contact => "contact",
        }
    }

    /// Exact (already lower-cased) name lookup.
    pub fn from_name(name: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Default destination file for this section.
    pub fn default_destination(self) -> &'static str {
        match self {
            Self::Home => HOME_FILE,
            Self::About => "about.html",
            Self::Projects => "projects.html",
            Self::Certs => "certs.html",
            Self::Contact => "contact.html",
        }
    }

    /// Resolve the section a hosting page represents from its path.
    ///
    /// Only the file name counts; query strings and fragments are ignored.
    /// Anything unrecognized is treated as the home page.
    pub fn from_path(path: &str) -> Page {
        let file = path.rsplit('/').next().unwrap_or_default();
        let file = if file.is_empty() { HOME_FILE } else { file };
        let clean = file
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        if clean == HOME_FILE {
            return Page::Home;
        }

        let stem = clean.replacen(".html", "", 1);
        Page::from_name(&stem).unwrap_or(Page::Home)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), Some(page));
        }
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Page::from_name("About"), None);
        assert_eq!(Page::from_name("abou"), None);
    }

    #[test]
    fn index_is_home() {
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/site/INDEX.HTML"), Page::Home);
    }

    #[test]
    fn empty_path_is_home() {
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/blog/"), Page::Home);
    }

    #[test]
    fn section_files_resolve() {
        assert_eq!(Page::from_path("/about.html"), Page::About);
        assert_eq!(Page::from_path("projects.html"), Page::Projects);
        assert_eq!(Page::from_path("/deep/nested/certs.html"), Page::Certs);
        assert_eq!(Page::from_path("/Contact.HTML"), Page::Contact);
    }

    #[test]
    fn query_and_fragment_ignored() {
        assert_eq!(Page::from_path("/about.html?ref=nav"), Page::About);
        assert_eq!(Page::from_path("/certs.html#aws"), Page::Certs);
    }

    #[test]
    fn unknown_file_defaults_home() {
        assert_eq!(Page::from_path("/blog.html"), Page::Home);
        assert_eq!(Page::from_path("/about.php"), Page::Home);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Page::Projects.to_string(), "projects");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_path_resolves(path in "\\PC{0,40}") {
                let _ = Page::from_path(&path);
            }

            #[test]
            fn section_file_under_any_directory(dir in "[a-z/]{0,12}", idx in 0usize..5) {
                let page = Page::ALL[idx];
                let path = format!("{dir}/{}.html", page.name());
                prop_assert_eq!(Page::from_path(&path), page);
            }
        }
    }
}
