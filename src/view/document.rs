//! The page the controller renders into
//!
//! A `Document` owns every region the controller writes to. Regions are
//! replaced wholesale on each render pass.

use chrono::NaiveDate;

use super::markup::{Element, Node};
use crate::constants::{placeholders, player_defaults};
use crate::data_fetcher::models::{InjuryStatus, NewPlayer, PlayerPosition};
use crate::error::AppError;

/// A region whose contents are fully replaced on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    id: &'static str,
    tag: &'static str,
    children: Vec<Node>,
}

impl Container {
    pub fn new(id: &'static str, tag: &'static str) -> Self {
        Self {
            id,
            tag,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Clear-and-rebuild.
    pub fn replace(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Child elements carrying `class`.
    pub fn elements_with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(move |e| e.has_class(class))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn to_element(&self) -> Element {
        Element::new(self.tag)
            .id(self.id)
            .children(self.children.iter().cloned())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Selector listing completed matches. The prompt option (value `""`) is
/// always first and is not part of `options`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchSelect {
    options: Vec<SelectOption>,
    selected: String,
}

impl MatchSelect {
    /// Replaces the options. The current selection survives if an option
    /// with the same value is still offered; otherwise it is cleared and
    /// `true` is returned.
    pub fn replace_options(&mut self, options: Vec<SelectOption>) -> bool {
        self.options = options;
        let dropped = !self.selected.is_empty()
            && !self.options.iter().any(|o| o.value == self.selected);
        if dropped {
            self.selected.clear();
        }
        dropped
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn set_selected(&mut self, value: impl Into<String>) {
        self.selected = value.into();
    }

    pub fn to_element(&self) -> Element {
        let prompt = Element::new("option")
            .attr("value", "")
            .text(placeholders::MATCH_SELECT_PROMPT);

        let options = self.options.iter().map(|option| {
            let mut element = Element::new("option").attr("value", option.value.clone());
            if option.value == self.selected {
                element = element.attr("selected", "selected");
            }
            element.text(option.label.clone()).into()
        });

        Element::new("select")
            .id("match-select")
            .attr("name", "match_id")
            .child(prompt)
            .children(options)
    }
}

/// Raw values of the add-player form, as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerForm {
    pub name: String,
    pub age: String,
    pub date_of_birth: String,
    pub position: String,
    pub jersey_number: String,
}

impl PlayerForm {
    pub fn clear(&mut self) {
        *self = PlayerForm::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == PlayerForm::default()
    }

    /// Reads the fields into a creation request, filling the fixed defaults.
    pub fn to_new_player(&self) -> Result<NewPlayer, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Name is required"));
        }

        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::invalid_input("Age must be a whole number"))?;

        let date_of_birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::invalid_input("Date of birth must be in YYYY-MM-DD format"))?;

        let position = self
            .position
            .parse::<PlayerPosition>()
            .map_err(|e| AppError::invalid_input(e))?;

        let jersey_number = self
            .jersey_number
            .trim()
            .parse::<i32>()
            .map_err(|_| AppError::invalid_input("Jersey number must be a whole number"))?;

        Ok(NewPlayer {
            name: name.to_string(),
            age,
            date_of_birth,
            position,
            jersey_number,
            transfer_price_vnd: player_defaults::TRANSFER_PRICE_VND,
            injury_status: InjuryStatus::Fit,
        })
    }

    pub fn to_element(&self) -> Element {
        let field = |label: &str, name: &'static str, kind: &'static str, value: &str| -> Node {
            Element::new("label")
                .text(label)
                .child(
                    Element::new("input")
                        .attr("type", kind)
                        .attr("name", name)
                        .attr("value", value),
                )
                .into()
        };

        let position_options = PlayerPosition::ALL.into_iter().map(|position| {
            let mut option = Element::new("option").attr("value", position.label());
            if self.position.parse::<PlayerPosition>() == Ok(position) {
                option = option.attr("selected", "selected");
            }
            option.text(position.label()).into()
        });

        Element::new("form")
            .id("player-form")
            .child(field("Name", "name", "text", &self.name))
            .child(field("Age", "age", "number", &self.age))
            .child(field("Date of birth", "date_of_birth", "date", &self.date_of_birth))
            .child(
                Element::new("label")
                    .text("Position")
                    .child(Element::new("select").attr("name", "position").children(position_options)),
            )
            .child(field("Jersey number", "jersey_number", "number", &self.jersey_number))
            .child(Element::new("button").attr("type", "submit").text("Add player"))
    }
}

/// Every region of the squad page.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub players: Container,
    pub matches: Container,
    pub match_select: MatchSelect,
    pub stats: Container,
    pub player_form: PlayerForm,
    alerts: Vec<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut stats = Container::new("match-stats", "div");
        stats.replace(vec![super::components::placeholder(
            placeholders::SELECT_MATCH,
        )]);

        Self {
            players: Container::new("player-list", "tbody"),
            matches: Container::new("match-list", "div"),
            match_select: MatchSelect::default(),
            stats,
            player_form: PlayerForm::default(),
            alerts: Vec::new(),
        }
    }

    /// Raises a blocking alert.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Serializes the whole page.
    pub fn render_html(&self) -> String {
        let header_cells = ["ID", "Name", "Age", "Position", "Jersey", "Injury Status"]
            .into_iter()
            .map(|h| Element::new("th").text(h).into());

        let players_section = Element::new("section")
            .id("players")
            .child(Element::new("h2").text("Players"))
            .child(
                Element::new("table")
                    .child(Element::new("thead").child(Element::new("tr").children(header_cells)))
                    .child(self.players.to_element()),
            )
            .child(self.player_form.to_element());

        let matches_section = Element::new("section")
            .id("matches")
            .child(Element::new("h2").text("Matches"))
            .child(self.matches.to_element());

        let stats_section = Element::new("section")
            .id("statistics")
            .child(Element::new("h2").text("Match Statistics"))
            .child(self.match_select.to_element())
            .child(self.stats.to_element());

        let mut body = Element::new("body");
        if !self.alerts.is_empty() {
            body = body.child(
                Element::new("div").id("alerts").children(
                    self.alerts
                        .iter()
                        .map(|a| Element::new("p").class("alert").text(a.clone()).into()),
                ),
            );
        }
        let body = body
            .child(Element::new("h1").text("Squad Board"))
            .child(players_section)
            .child(matches_section)
            .child(stats_section);

        let html = Element::new("html")
            .attr("lang", "en")
            .child(
                Element::new("head")
                    .child(Element::new("meta").attr("charset", "utf-8"))
                    .child(Element::new("title").text("Squad Board")),
            )
            .child(body);

        format!("<!DOCTYPE html>\n{}\n", html.render())
    }
}
