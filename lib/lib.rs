/// Chess domain types and movement rules.
pub mod chess;
