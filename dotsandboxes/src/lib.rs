//! Implementation of the board logic for the classic game Dots and Boxes.
//!
//! A board is a rectangular grid of boxes separated by shared lines. Players
//! claim lines one at a time; a box is awarded to the player whose claim
//! completes its last bounding line, and a single claim can capture zero,
//! one, or two boxes at once. Turn order, scoring, and rendering are left to
//! the caller.
//!
//! ```
//! use dotsandboxes::board::{Board, Dimensions, Side};
//!
//! #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
//! enum Player {
//!     One,
//!     Two,
//! }
//!
//! let mut board = Board::generate(Dimensions::new(2, 2));
//!
//! // Lines are shared: the right line of (0, 0) is the left line of (1, 0).
//! let line = board
//!     .get_box((0, 0).into())
//!     .unwrap()
//!     .line(Side::Right)
//!     .unwrap()
//!     .id();
//!
//! let outcome = board.claim(line, Player::One).unwrap();
//! assert!(!outcome.closed_any());
//! assert!(!board.all_boxes_owned());
//! ```

pub mod board;
