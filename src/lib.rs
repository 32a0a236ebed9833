//! A game-session engine for 9×9 shogi.
//!
//! `shogiban` keeps the state a shogi board needs while two people play on it:
//! the grid, the pieces each side has captured, whose turn it is, what is
//! selected and which cells are highlighted. It computes where the selected
//! piece may go, applies moves and drops, transfers captured pieces and runs a
//! two-phase promotion protocol. Rendering and input handling are left to the
//! embedding application, which subscribes to change notifications.
//!
//! # Module Organization
//!
//! - **core**: `Side`, `Square` and the error types
//! - **piece**, **factory**, **movegen**: pieces, their construction and their movement patterns
//! - **cell**, **board**: the grid and the game-session aggregate
//! - **display**, **mediator**, **promotion**: selection, move validation and promotion
//! - **notify**, **stats**, **record**: listeners, win/loss counters and move notation
//!
//! # Examples
//!
//! ```
//! use shogiban::{Board, MoveOutcome, Side, Square};
//!
//! let mut board = Board::new();
//! board.initiate_game();
//!
//! // Selecting a piece highlights its destinations.
//! let moves = board.select_cell(Square::new(6, 2).unwrap()).unwrap();
//! assert_eq!(vec![Square::new(5, 2).unwrap()], moves.destinations);
//!
//! // Moving it passes the turn.
//! let outcome = board.move_figure(Square::new(5, 2).unwrap()).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Completed(_)));
//! assert_eq!(Side::Gote, board.current_turn());
//! ```

pub mod board;
pub mod cell;
pub mod core;
pub mod display;
pub mod factory;
mod mediator;
pub mod movegen;
pub mod notify;
pub mod piece;
pub mod promotion;
pub mod record;
pub mod rules;
pub mod stats;

pub use self::board::{Board, MoveOutcome, Selection, Snapshot};
pub use self::cell::Cell;
pub use self::core::{BoardError, MoveError, ParseSquareError, Side, Square, StatsError};
pub use self::display::{MoveDisplay, MoveSet};
pub use self::factory::PieceFactory;
pub use self::notify::{ListenerId, Notifier};
pub use self::piece::{Piece, PieceId, PieceKind, Promotion};
pub use self::promotion::{
    AlwaysPromote, NeverPromote, PendingPromotion, PromotionDecider, PromotionToken,
};
pub use self::record::MoveRecord;
pub use self::stats::{MemoryStats, Stats, StatsStore};
