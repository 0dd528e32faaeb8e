// src/specs/roster.rs
use crate::core::net::wiki_url;

/// One tracked player and the page their goal tables live on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub url: String,
}

impl Player {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}

const ROSTER: &[(&str, &str)] = &[
    ("Cristiano Ronaldo", "/wiki/Cristiano_Ronaldo"),
    ("Lionel Messi", "/wiki/Lionel_Messi"),
    ("Robert Lewandowski", "/wiki/Robert_Lewandowski"),
    ("Neymar Jr", "/wiki/Neymar"),
    ("Erling Haaland", "/wiki/Erling_Haaland"),
    ("Kylian Mbappé", "/wiki/Kylian_Mbapp%C3%A9"),
    ("Harry Kane", "/wiki/Harry_Kane"),
    ("Luis Suárez", "/wiki/Luis_Su%C3%A1rez"),
];

/// The active players charted by default, in display order.
pub fn active_players() -> Vec<Player> {
    ROSTER.iter().map(|(name, path)| Player::new(*name, wiki_url(path))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_expected_players() {
        let names: Vec<String> = active_players().into_iter().map(|p| p.name).collect();
        for expected in ["Cristiano Ronaldo", "Lionel Messi", "Kylian Mbappé", "Harry Kane"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn links_point_at_wikipedia() {
        for p in active_players() {
            assert!(p.url.starts_with("https://en.wikipedia.org/wiki/"), "{}", p.url);
        }
    }
}
