//! Render functions for each kind of record
//!
//! Every function here is pure: record in, markup out.

use super::markup::{Element, Node};
use crate::constants::STAT_LABELS;
use crate::data_fetcher::models::{Match, MatchStatistics, Player};

/// Number of columns in the player table.
pub const PLAYER_COLUMNS: usize = 6;

/// One table row: id, name, age, position, jersey number, injury status.
pub fn player_row(player: &Player) -> Node {
    let cells = [
        player.id.to_string(),
        player.name.clone(),
        player.age.to_string(),
        player.position.to_string(),
        player.jersey_number.to_string(),
        player.injury_status.to_string(),
    ];

    Element::new("tr")
        .class("player-row")
        .attr("data-player-id", player.id.to_string())
        .children(cells.into_iter().map(|cell| Element::new("td").text(cell).into()))
        .into()
}

/// Placeholder row spanning the whole player table.
pub fn player_placeholder(message: &str) -> Node {
    Element::new("tr")
        .class("placeholder-row")
        .child(
            Element::new("td")
                .attr("colspan", PLAYER_COLUMNS.to_string())
                .class("placeholder")
                .text(message),
        )
        .into()
}

/// Fixture card. Styling differs between played and upcoming matches.
pub fn match_card(fixture: &Match) -> Node {
    let state_class = if fixture.is_completed {
        "completed"
    } else {
        "upcoming"
    };

    let mut card = Element::new("div")
        .class(format!("match-card {state_class}"))
        .attr("data-match-id", fixture.id.to_string())
        .child(Element::new("h3").class("opponent").text(fixture.opponent_name.clone()))
        .child(Element::new("p").class("match-date").text(fixture.match_date.to_string()))
        .child(Element::new("p").class("venue").text(fixture.venue.clone()))
        .child(Element::new("span").class("status").text(fixture.status_label()))
        .child(Element::new("div").class("score").text(fixture.score_text()));

    if let Some(outcome) = fixture.outcome() {
        card = card.child(
            Element::new("span")
                .class(format!("result {}", outcome.to_string().to_lowercase()))
                .text(outcome.to_string()),
        );
    }

    card.into()
}

/// Twelve labelled cards in fixed order.
pub fn stat_cards(stats: &MatchStatistics) -> Vec<Node> {
    STAT_LABELS
        .iter()
        .zip(stats.display_values())
        .map(|(label, value)| {
            Element::new("div")
                .class("stat-card")
                .child(Element::new("span").class("stat-label").text(*label))
                .child(Element::new("span").class("stat-value").text(value))
                .into()
        })
        .collect()
}

/// Generic block placeholder used by the match list and statistics panel.
pub fn placeholder(message: &str) -> Node {
    Element::new("p").class("placeholder").text(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_player_row_cells_in_order() {
        let player = TestDataBuilder::player(3, "Bui Tien Dung");
        let row = player_row(&player);
        let row = row.as_element().unwrap();

        let cells: Vec<String> = row.child_elements().map(Element::text_content).collect();
        assert_eq!(
            cells,
            vec!["3", "Bui Tien Dung", "25", "Center Back", "3", "Fit"]
        );
    }

    #[test]
    fn test_completed_match_card() {
        let fixture = TestDataBuilder::completed_match(1, "Hanoi FC", "2024-10-20", 3, 1);
        let node = match_card(&fixture);
        let card = node.as_element().unwrap();

        assert!(card.has_class("completed"));
        assert!(!card.has_class("upcoming"));
        let score = card.child_elements().find(|e| e.has_class("score")).unwrap();
        assert_eq!(score.text_content(), "3 - 1");
        let result = card.child_elements().find(|e| e.has_class("result")).unwrap();
        assert_eq!(result.text_content(), "Win");
    }

    #[test]
    fn test_upcoming_match_card() {
        let fixture = TestDataBuilder::upcoming_match(2, "Viettel", "2025-03-02");
        let node = match_card(&fixture);
        let card = node.as_element().unwrap();

        assert!(card.has_class("upcoming"));
        let score = card.child_elements().find(|e| e.has_class("score")).unwrap();
        assert_eq!(score.text_content(), "vs");
        let status = card.child_elements().find(|e| e.has_class("status")).unwrap();
        assert_eq!(status.text_content(), "Upcoming");
        assert!(card.child_elements().all(|e| !e.has_class("result")));
    }

    #[test]
    fn test_stat_cards_fixed_order() {
        let cards = stat_cards(&TestDataBuilder::statistics());
        assert_eq!(cards.len(), 12);

        let labels: Vec<String> = cards
            .iter()
            .map(|c| {
                c.as_element()
                    .unwrap()
                    .child_elements()
                    .next()
                    .unwrap()
                    .text_content()
            })
            .collect();
        assert_eq!(labels, STAT_LABELS.to_vec());
        assert_eq!(cards[1].text_content(), "Shots on Target6");
    }

    #[test]
    fn test_hostile_opponent_name_rendered_inert() {
        let fixture = TestDataBuilder::upcoming_match(5, "<img src=x onerror=alert(1)>", "2025-04-01");
        let html = match_card(&fixture).render();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
