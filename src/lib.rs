//! draw-poker: Five-card draw poker library
//!
//! Goals:
//! - Deterministic evaluation of closed five-card hands, folded into a
//!   single comparable score (including a house-rule suit tie-break)
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a five-card hand
//! ```
//! use draw_poker::evaluator::{evaluate, Category};
//! use draw_poker::hand::Hand;
//!
//! let hand: Hand = "As Ah Ad Ac 2s".parse().unwrap();
//! let eval = evaluate(&hand);
//! assert_eq!(eval.category, Category::FourOfAKind);
//! ```
//!
//! Hands can also be built from raw deck identifiers (0..52, `suit * 13 + rank`):
//! ```
//! use draw_poker::evaluator::{evaluate_ids, Category};
//!
//! // Spades 2,3,4,5,6
//! let eval = evaluate_ids(&[0, 1, 2, 3, 4]).unwrap();
//! assert_eq!(eval.category, Category::StraightFlush);
//! ```
//!
//! ## TUI
//! Run the interactive hotseat table with:
//! ```sh
//! cargo run --bin draw-poker
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
