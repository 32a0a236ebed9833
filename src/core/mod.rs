//! Core types shared by every part of the engine.
//!
//! These do not depend on piece kinds or on the board aggregate.

pub mod error;
pub mod side;
pub mod square;

pub use error::{BoardError, MoveError, StatsError};
pub use side::{Side, SideIter};
pub use square::{ParseSquareError, Square, SquareIter};
