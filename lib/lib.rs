/// Chess domain types and movement rules.
pub mod chess;
/// Turn taking and piece selection.
pub mod session;
