// src/domain/card.rs
use serde::{Deserialize, Serialize};

/// One record of the card collection.
///
/// Cards are loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub img: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub meaning: String,
}

impl Card {
    /// Split the meaning on line breaks.
    ///
    /// Blank lines between text stay as empty entries; leading and trailing
    /// blank lines are dropped.
    pub fn meaning_paragraphs(&self) -> Vec<&str> {
        let lines: Vec<&str> = self.meaning.lines().map(str::trim).collect();
        let start = lines
            .iter()
            .position(|line| !line.is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(start, |last| last + 1);
        lines[start..end].to_vec()
    }

    /// Case-insensitive substring match on the name.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn card(name: &str, meaning: &str) -> Card {
        Card {
            id: "1".to_string(),
            name: name.to_string(),
            img: "p1.png".to_string(),
            photo: None,
            meaning: meaning.to_string(),
        }
    }

    #[test]
    fn given_meaning_with_line_breaks_when_splitting_then_returns_paragraphs() {
        let card = card("La Strega", "Riga1\nRiga2");
        assert_eq!(card.meaning_paragraphs(), vec!["Riga1", "Riga2"]);
    }

    #[test]
    fn given_meaning_with_blank_lines_when_splitting_then_keeps_inner_gaps() {
        let card = card("La Strega", "Riga1\n\n  \r\nRiga2\n");
        assert_eq!(card.meaning_paragraphs(), vec!["Riga1", "", "", "Riga2"]);
    }

    #[test]
    fn given_meaning_with_outer_blank_lines_when_splitting_then_trims_them() {
        let card = card("La Strega", "\n  \nRiga1\n\nRiga2\n\n");
        assert_eq!(card.meaning_paragraphs(), vec!["Riga1", "", "Riga2"]);
    }

    #[test]
    fn given_blank_meaning_when_splitting_then_returns_nothing() {
        let card = card("La Strega", "\n \n");
        assert!(card.meaning_paragraphs().is_empty());
    }

    #[rstest]
    #[case("prof", true)]
    #[case("il professore", true)]
    #[case("", true)]
    #[case("strega", false)]
    fn given_lowercase_needle_when_matching_name_then_ignores_case(
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        let card = card("Il Professore", "...");
        assert_eq!(card.name_matches(needle), expected);
    }

    #[test]
    fn given_card_json_without_photo_when_deserializing_then_photo_is_none() {
        let json = r#"{"id":"1","name":"Il Professore","img":"p1.png","meaning":"..."}"#;
        let card: Card = serde_json::from_str(json).expect("valid card");
        assert_eq!(card.photo, None);
    }

    #[test]
    fn given_card_json_with_unknown_field_when_deserializing_then_fails() {
        let json = r#"{"id":"1","name":"X","img":"x.png","meaning":"...","rarity":3}"#;
        assert!(serde_json::from_str::<Card>(json).is_err());
    }
}
