//! Document model and renderers for the squad page

pub mod components;
pub mod document;
pub mod markup;

pub use document::{Container, Document, MatchSelect, PlayerForm, SelectOption};
pub use markup::{Element, Node};
