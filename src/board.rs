//! The game-session aggregate.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::cell::Cell;
use crate::core::{BoardError, MoveError, Side, Square};
use crate::display::{MoveDisplay, MoveSet};
use crate::factory::PieceFactory;
use crate::mediator::{Applied, Mediator, Mover};
use crate::notify::{ListenerId, Notifier};
use crate::piece::{Piece, PieceId, PieceKind, Promotion};
use crate::promotion::{PendingPromotion, PromotionDecider, PromotionToken};
use crate::record::MoveRecord;
use crate::rules::{starting_layout, NUM_CELLS};
use crate::stats::{MemoryStats, Stats, StatsStore};

/// What the player currently holds: nothing, a piece on the board, or a
/// captured piece about to be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Cell(Square),
    Drop(PieceId),
}

/// Result of [`Board::move_figure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Completed(MoveRecord),
    /// The move was applied and a promotion decision is waiting.
    PromotionPending(PromotionToken),
}

impl MoveOutcome {
    pub fn completed(self) -> Option<MoveRecord> {
        match self {
            MoveOutcome::Completed(record) => Some(record),
            MoveOutcome::PromotionPending(_) => None,
        }
    }

    pub fn pending(&self) -> Option<PromotionToken> {
        match *self {
            MoveOutcome::Completed(_) => None,
            MoveOutcome::PromotionPending(token) => Some(token),
        }
    }
}

/// Serializable copy of the observable game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Vec<Cell>,
    pub sente_pool: Vec<Piece>,
    pub gote_pool: Vec<Piece>,
    pub current_turn: Side,
    pub selection: Selection,
    pub cells_to_move_display: Vec<Square>,
    pub is_playing: bool,
    pub winner: Option<Side>,
    pub stats: Stats,
}

/// The game session: grid, capture pools, turn and selection.
///
/// Every mutating call notifies the subscribed listeners once it has
/// completed. Calls that fail leave the board untouched and notify nobody.
pub struct Board {
    cells: Vec<Cell>,
    pools: [Vec<Piece>; 2],
    current_turn: Side,
    selection: Selection,
    kings: [Option<PieceId>; 2],
    cells_to_move_display: Vec<Square>,
    pending: Option<PendingPromotion>,
    promotion_serial: u64,
    is_playing: bool,
    winner: Option<Side>,
    stats: Stats,
    factory: PieceFactory,
    store: Box<dyn StatsStore>,
    notifier: Notifier,
}

impl Board {
    /// Creates an empty board backed by an in-memory stats store.
    ///
    /// No game is in progress until [`Board::initiate_game`] or
    /// [`Board::reset_game_state`] is called.
    pub fn new() -> Board {
        Board::with_stats(MemoryStats::new())
    }

    pub fn with_stats<S>(store: S) -> Board
    where
        S: StatsStore + 'static,
    {
        Board {
            cells: Square::iter().map(Cell::new).collect(),
            pools: [Vec::new(), Vec::new()],
            current_turn: Side::Sente,
            selection: Selection::Idle,
            kings: [None, None],
            cells_to_move_display: Vec::new(),
            pending: None,
            promotion_serial: 0,
            is_playing: false,
            winner: None,
            stats: Stats::default(),
            factory: PieceFactory::new(),
            store: Box::new(store),
            notifier: Notifier::new(),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Game lifecycle
    /////////////////////////////////////////////////////////////////////////

    /// Clears the board, loads the stats and sets up the starting position.
    pub fn initiate_game(&mut self) {
        info!("starting a new game");
        self.reset();

        match self.store.load() {
            Ok(stats) => self.stats = stats,
            Err(e) => warn!("could not load stats: {}", e),
        }

        for (kind, side, row, column) in starting_layout() {
            let placed = Square::checked(row, column)
                .map_err(MoveError::from)
                .and_then(|sq| self.put(kind, side, sq));
            if let Err(e) = placed {
                warn!("skipping {} {} of the starting layout: {}", side, kind, e);
            }
        }

        self.changed();
    }

    /// Empties the grid and both pools and starts a fresh session with sente
    /// to move. A waiting promotion decision is dropped.
    pub fn reset_game_state(&mut self) {
        info!("resetting the board");
        self.reset();
        self.changed();
    }

    fn reset(&mut self) {
        self.abandon();
        for cell in self.cells.iter_mut() {
            cell.clear();
        }
        for pool in self.pools.iter_mut() {
            pool.clear();
        }
        self.current_turn = Side::Sente;
        self.selection = Selection::Idle;
        self.kings = [None, None];
        self.cells_to_move_display.clear();
        self.is_playing = true;
        self.winner = None;
    }

    /// Creates a piece and puts it on an empty cell.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        side: Side,
        sq: Square,
    ) -> Result<PieceId, MoveError> {
        let id = self.put(kind, side, sq)?;
        self.changed();
        Ok(id)
    }

    fn put(&mut self, kind: PieceKind, side: Side, sq: Square) -> Result<PieceId, MoveError> {
        if self.cell_at(sq).is_occupied() {
            return Err(MoveError::Occupied(sq));
        }
        if kind == PieceKind::King && self.kings[side.index()].is_some() {
            return Err(MoveError::KingAlreadyPlaced(side));
        }

        let piece = self.factory.create(kind, sq, Promotion::Default);
        let id = piece.id();
        self.cell_mut(sq).place(piece, side);

        if kind == PieceKind::King {
            self.kings[side.index()] = Some(id);
        }

        Ok(id)
    }

    fn ensure_playing(&self) -> Result<(), MoveError> {
        if self.is_playing {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }

    fn finish(&mut self, winner: Side) {
        self.is_playing = false;
        self.winner = Some(winner);
        self.stats.record(winner);
        info!(
            "{} wins (wins: {}, loses: {})",
            winner, self.stats.wins, self.stats.loses
        );

        if let Err(e) = self.store.save(&self.stats) {
            warn!("could not save stats: {}", e);
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Cells and marks
    /////////////////////////////////////////////////////////////////////////

    /// Returns the cell at (`row`, `column`).
    pub fn cell(&self, row: u8, column: u8) -> Result<&Cell, BoardError> {
        Square::checked(row, column).map(|sq| self.cell_at(sq))
    }

    pub fn cell_at(&self, sq: Square) -> &Cell {
        &self.cells[sq.index()]
    }

    pub(crate) fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.index()]
    }

    /// Iterates over all 81 cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Highlights exactly the given cells. No legality is computed here.
    pub fn display_available_moves(&mut self, squares: &[Square]) {
        self.mark_moves(squares);
        self.changed();
    }

    pub fn display_captures(&mut self, squares: &[Square]) {
        self.mark_captures(squares);
        self.changed();
    }

    pub fn clear_moves(&mut self) {
        self.unmark_moves();
        self.changed();
    }

    pub fn clear_captures_display(&mut self) {
        self.unmark_captures();
        self.changed();
    }

    pub(crate) fn mark_moves(&mut self, squares: &[Square]) {
        self.unmark_moves();
        for &sq in squares {
            self.cell_mut(sq).set_highlighted(true);
        }
        self.cells_to_move_display = squares.to_vec();
    }

    pub(crate) fn mark_captures(&mut self, squares: &[Square]) {
        for &sq in squares {
            self.cell_mut(sq).set_capturable(true);
        }
    }

    fn unmark_moves(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_highlighted(false);
        }
        self.cells_to_move_display.clear();
    }

    pub(crate) fn unmark_captures(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_capturable(false);
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Selection
    /////////////////////////////////////////////////////////////////////////

    /// Selects the piece on `sq` and highlights where it can go.
    pub fn select_cell(&mut self, sq: Square) -> Result<MoveSet, MoveError> {
        self.ensure_playing()?;

        match self.cell_at(sq).side() {
            None => return Err(MoveError::EmptyCell(sq)),
            Some(side) if side != self.current_turn => {
                warn!("{} tried to select a {} piece on {}", self.current_turn, side, sq);
                return Err(MoveError::NotYourTurn(self.current_turn));
            }
            Some(_) => {}
        }

        self.abandon();
        self.selection = Selection::Cell(sq);
        debug!("{} selects {}", self.current_turn, sq);
        MoveDisplay::show_moves(self, sq)
    }

    /// Selects a captured piece of the side to move and highlights the cells
    /// it can be dropped on.
    pub fn select_captured_figure(&mut self, id: PieceId) -> Result<MoveSet, MoveError> {
        self.ensure_playing()?;

        let side = self.current_turn;
        if !self.pool(side).iter().any(|p| p.id() == id) {
            warn!("{} is not in the pool of {}", id, side);
            return Err(MoveError::NotInPool(id, side));
        }

        self.abandon();
        self.selection = Selection::Drop(id);
        debug!("{} selects {} for a drop", side, id);
        MoveDisplay::show_drop_in(self, id)
    }

    /// Drops the selection and all marks.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
        self.unmark_moves();
        self.unmark_captures();
        self.changed();
    }

    /////////////////////////////////////////////////////////////////////////
    // Moves
    /////////////////////////////////////////////////////////////////////////

    /// Moves or drops the selected piece onto `to`.
    ///
    /// On success the marks and the selection are cleared and the turn passes
    /// to the opponent. If the piece lands in its promotion zone the move is
    /// applied anyway and the returned token must be answered with
    /// [`Board::resolve_promotion`].
    pub fn move_figure(&mut self, to: Square) -> Result<MoveOutcome, MoveError> {
        self.ensure_playing()?;

        let mover = match self.selection {
            Selection::Idle => return Err(MoveError::NothingSelected),
            Selection::Cell(from) => Mover::Board(from),
            Selection::Drop(id) => Mover::Drop(id),
        };

        let Applied {
            record,
            promotion_offered,
            captured_king,
        } = Mediator::execute(self, mover, to)?;

        self.unmark_moves();
        self.unmark_captures();
        self.selection = Selection::Idle;
        self.current_turn = self.current_turn.flip();

        if captured_king {
            self.finish(record.side());
        }

        let waiting = if promotion_offered && self.is_playing {
            self.cell_at(to).occupant().map(Piece::id)
        } else {
            None
        };

        let outcome = match waiting {
            Some(id) => {
                self.promotion_serial += 1;
                let token = PromotionToken::new(id, to, self.promotion_serial);
                debug!("promotion of {} on {} is waiting", id, to);
                self.pending = Some(PendingPromotion { token, record });
                MoveOutcome::PromotionPending(token)
            }
            None => MoveOutcome::Completed(record),
        };

        self.changed();
        Ok(outcome)
    }

    /// Same as [`Board::move_figure`], asking `decider` right away when a
    /// promotion is offered.
    pub fn move_figure_with<D>(&mut self, to: Square, decider: &mut D) -> Result<MoveRecord, MoveError>
    where
        D: PromotionDecider + ?Sized,
    {
        match self.move_figure(to)? {
            MoveOutcome::Completed(record) => Ok(record),
            MoveOutcome::PromotionPending(token) => {
                let promote = {
                    let piece = self
                        .cell_at(token.square())
                        .occupant()
                        .ok_or(MoveError::StalePromotion)?;
                    decider.decide(piece, token.square())
                };
                self.resolve_promotion(token, promote)
            }
        }
    }

    /// Answers the waiting promotion decision.
    pub fn resolve_promotion(
        &mut self,
        token: PromotionToken,
        promote: bool,
    ) -> Result<MoveRecord, MoveError> {
        let pending = self.pending.as_ref().ok_or(MoveError::NoPendingPromotion)?;
        if pending.token != token {
            return Err(MoveError::StalePromotion);
        }

        let square = token.square();
        match self.cell_at(square).occupant() {
            Some(piece) if piece.id() == token.piece() => {}
            _ => return Err(MoveError::StalePromotion),
        }

        let mut record = match self.pending.take() {
            Some(pending) => pending.record,
            None => return Err(MoveError::NoPendingPromotion),
        };

        if promote {
            if let Some(piece) = self.cell_mut(square).occupant_mut() {
                piece.promotion = Promotion::Promoted;
            }
            record.set_promoted(true);
        }
        debug!(
            "{} on {} {}",
            token.piece(),
            square,
            if promote { "promotes" } else { "stays unpromoted" }
        );

        self.changed();
        Ok(record)
    }

    /// Gives up the waiting promotion decision. The piece stays unpromoted.
    pub fn abandon_promotion(&mut self) -> Option<PromotionToken> {
        let token = self.abandon();
        if token.is_some() {
            self.changed();
        }
        token
    }

    fn abandon(&mut self) -> Option<PromotionToken> {
        let pending = self.pending.take()?;
        debug!("promotion of {} abandoned", pending.token.piece());
        Some(pending.token)
    }

    /////////////////////////////////////////////////////////////////////////
    // Accessors
    /////////////////////////////////////////////////////////////////////////

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_cell(&self) -> Option<Square> {
        match self.selection {
            Selection::Cell(sq) => Some(sq),
            _ => None,
        }
    }

    /// The captured piece selected for a drop.
    pub fn piece_to_drop(&self) -> Option<&Piece> {
        match self.selection {
            Selection::Drop(id) => self.pool(self.current_turn).iter().find(|p| p.id() == id),
            _ => None,
        }
    }

    /// Pieces captured by `side`, in capture order.
    pub fn pool(&self, side: Side) -> &[Piece] {
        &self.pools[side.index()]
    }

    pub(crate) fn pool_mut(&mut self, side: Side) -> &mut Vec<Piece> {
        &mut self.pools[side.index()]
    }

    pub fn king(&self, side: Side) -> Option<PieceId> {
        self.kings[side.index()]
    }

    /// Square of `side`'s king, or `None` once it has been captured.
    pub fn find_king(&self, side: Side) -> Option<Square> {
        let id = self.king(side)?;
        self.cells
            .iter()
            .find(|cell| cell.occupant().map(Piece::id) == Some(id))
            .map(Cell::square)
    }

    pub fn cells_to_move_display(&self) -> &[Square] {
        &self.cells_to_move_display
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
            sente_pool: self.pool(Side::Sente).to_vec(),
            gote_pool: self.pool(Side::Gote).to_vec(),
            current_turn: self.current_turn,
            selection: self.selection,
            cells_to_move_display: self.cells_to_move_display.clone(),
            is_playing: self.is_playing,
            winner: self.winner,
            stats: self.stats,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Notification
    /////////////////////////////////////////////////////////////////////////

    /// Registers a listener called after every completed mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub(crate) fn changed(&mut self) {
        self.notifier.notify();
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("current_turn", &self.current_turn)
            .field("selection", &self.selection)
            .field("pools", &self.pools)
            .field("kings", &self.kings)
            .field("cells_to_move_display", &self.cells_to_move_display)
            .field("pending", &self.pending)
            .field("is_playing", &self.is_playing)
            .field("winner", &self.winner)
            .field("stats", &self.stats)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        debug_assert_eq!(NUM_CELLS, self.cells.len());

        writeln!(f, "   9   8   7   6   5   4   3   2   1")?;
        writeln!(f, "+---+---+---+---+---+---+---+---+---+")?;

        for (row, cells) in self.cells.chunks(9).enumerate() {
            write!(f, "|")?;
            for cell in cells {
                match (cell.occupant(), cell.side()) {
                    (Some(piece), Some(Side::Gote)) => {
                        write!(f, "{:>3}|", piece.to_string().to_lowercase())?
                    }
                    (Some(piece), _) => write!(f, "{:>3}|", piece.to_string())?,
                    (None, _) => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", (b'a' + row as u8) as char)?;
            writeln!(f, "+---+---+---+---+---+---+---+---+---+")?;
        }

        writeln!(f, "Side to move: {}", self.current_turn)?;
        for side in Side::iter() {
            writeln!(
                f,
                "Pool ({}): {}",
                side,
                self.pool(side).iter().map(|p| p.to_string()).join(" ")
            )?;
        }

        match self.winner {
            Some(winner) => write!(f, "Winner: {winner}"),
            None => write!(f, "Playing: {}", self.is_playing),
        }
    }
}
