//! Move validation.
//!
//! A `Move` checks one proposed origin-to-destination transition against
//! the piece at the origin and the board it sits on. Gates run in a fixed
//! order and the first failure names the rejection. Validation never
//! mutates the board observably: every lift taken while probing is put
//! back before the gate returns.

use std::fmt;

use tracing::debug;

use crate::board::coord::{Coord, CoordError, Direction};
use crate::board::piece::Piece;
use crate::board::state::{trace_path, Board, BoardError, MoveReport};
use crate::board::stone::Player;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The origin footprint is empty, holds opponent stones, or is a lone
    /// center stone.
    IllegalPiece,
    /// The piece has no stone pointing that way, or the move is neither
    /// orthogonal nor a true diagonal.
    InvalidDirection,
    /// The piece has no center stone and the move is longer than three.
    TooFar,
    /// Lifting the piece breaks the mover's last ring.
    RingBrokenByLift,
    /// Another stone stands in the way before the destination.
    PathBlocked,
    /// The mover has no ring once the piece has landed.
    RingLostOnLanding,
}

impl Rejection {
    /// Short token used in protocol responses.
    pub const fn code(self) -> &'static str {
        match self {
            Rejection::IllegalPiece => "piece",
            Rejection::InvalidDirection => "direction",
            Rejection::TooFar => "distance",
            Rejection::RingBrokenByLift => "ring",
            Rejection::PathBlocked => "path",
            Rejection::RingLostOnLanding => "ringlanding",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A proposed move by one player, bound to the board it will be made on.
///
/// The move holds the board exclusively, so the piece it carries cannot be
/// invalidated by another mutation before `commit` consumes it.
pub struct Move<'b> {
    board: &'b mut Board,
    piece: Piece,
    player: Player,
    destination: Coord,
    d_row: i32,
    d_col: i32,
    direction: Option<Direction>,
}

impl<'b> Move<'b> {
    /// Prepares a move of the piece centered on `origin`.
    ///
    /// Both centers must lie in the playable 2..=19 area; anything else is a
    /// contract violation by the caller, not an illegal move.
    pub fn new(
        board: &'b mut Board,
        player: Player,
        origin: Coord,
        destination: Coord,
    ) -> Result<Self, CoordError> {
        let origin = origin.require_playable()?;
        let piece = board.extract_piece(origin);
        Move::bind(board, piece, player, destination)
    }

    /// Prepares a move of an already extracted piece.
    ///
    /// The piece must have been read from the board as it stands now; a
    /// piece taken before any later insert, capture or move is refused with
    /// `BoardError::StalePiece`.
    pub fn with_piece(
        board: &'b mut Board,
        piece: Piece,
        player: Player,
        destination: Coord,
    ) -> Result<Self, BoardError> {
        let origin = piece.center().require_playable()?;
        if piece.generation() != board.stones().generation() {
            return Err(BoardError::StalePiece(origin));
        }
        Ok(Move::bind(board, piece, player, destination)?)
    }

    fn bind(
        board: &'b mut Board,
        piece: Piece,
        player: Player,
        destination: Coord,
    ) -> Result<Self, CoordError> {
        let destination = destination.require_playable()?;
        let (d_row, d_col) = piece.center().displacement_to(destination);
        Ok(Move {
            board,
            piece,
            player,
            destination,
            d_row,
            d_col,
            direction: Direction::from_displacement(d_row, d_col),
        })
    }

    pub fn origin(&self) -> Coord {
        self.piece.center()
    }

    pub fn destination(&self) -> Coord {
        self.destination
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Sign pair of the displacement; `None` for a zero-length move.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_piece_legal(&self) -> bool {
        self.piece.is_legal_for(self.player)
    }

    /// The piece must carry the travel direction, and a move that changes
    /// both row and column must be a true diagonal.
    pub fn is_direction_valid(&self) -> bool {
        let Some(direction) = self.direction else {
            return false;
        };
        if self.d_row != 0 && self.d_col != 0 && self.d_row.abs() != self.d_col.abs() {
            return false;
        }
        self.piece.legal_directions().contains(direction)
    }

    pub fn is_distance_valid(&self) -> bool {
        self.piece.max_distance().allows(self.d_row, self.d_col)
    }

    /// Checks the mover still has a ring with the piece held off the board.
    pub fn is_ring_preserved(&mut self) -> bool {
        let lift = self.piece.lift(self.board.stones_mut());
        lift.stones().has_ring(self.player)
    }

    pub fn is_path_clear(&mut self) -> bool {
        let Some(direction) = self.direction else {
            return false;
        };
        let origin = self.piece.center();
        let lift = self.piece.lift(self.board.stones_mut());
        trace_path(lift.stones(), origin, self.destination, direction)
    }

    /// Runs every gate in order and reports the first failure.
    pub fn validate(&mut self) -> Result<(), Rejection> {
        let outcome = if !self.is_piece_legal() {
            Err(Rejection::IllegalPiece)
        } else if !self.is_direction_valid() {
            Err(Rejection::InvalidDirection)
        } else if !self.is_distance_valid() {
            Err(Rejection::TooFar)
        } else if !self.is_ring_preserved() {
            Err(Rejection::RingBrokenByLift)
        } else if !self.is_path_clear() {
            Err(Rejection::PathBlocked)
        } else {
            Ok(())
        };

        if let Err(rejection) = outcome {
            debug!(
                player = ?self.player,
                from = %self.origin(),
                to = %self.destination,
                %rejection,
                "move rejected"
            );
        }
        outcome
    }

    pub fn is_legal(&mut self) -> bool {
        self.validate().is_ok()
    }

    /// Validates and, if every gate passes, makes the move.
    ///
    /// The landing is played out on a copy of the stones first; if the mover
    /// would be left without a ring the board is left untouched. The piece
    /// is current: the move has held the board exclusively since binding.
    pub fn commit(mut self) -> Result<MoveReport, Rejection> {
        self.validate()?;

        let mut probe = self.board.clone();
        let report = probe.land(&self.piece, self.destination);
        if !probe.has_ring(self.player) {
            debug!(player = ?self.player, to = %self.destination, "landing breaks last ring");
            return Err(Rejection::RingLostOnLanding);
        }

        *self.board = probe;
        Ok(report)
    }
}
