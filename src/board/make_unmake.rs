use crate::zobrist::ZOBRIST;

use super::{Bitboard, Move, PieceKind, Position};

/// Everything `make_move` destroys, so `unmake_move` can restore it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) captured: Bitboard,
    pub(crate) captured_kings: Bitboard,
    pub(crate) promoted: bool,
    pub(crate) previous_reversible_plies: u32,
    pub(crate) previous_hash: u64,
}

impl UnmakeInfo {
    /// Squares of the pieces this move removed.
    #[must_use]
    pub fn captured(&self) -> Bitboard {
        self.captured
    }

    #[must_use]
    pub fn promoted(&self) -> bool {
        self.promoted
    }
}

impl Position {
    /// Play `mv`, which must be legal in this position.
    ///
    /// Captured pieces are removed, a man ending on its last rank is
    /// crowned, and the hash is updated incrementally.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let us = self.side_to_move;
        let them = !us;
        let from = mv.from();
        let dest = mv.destination();
        let mover_is_king = self.kings.contains(from);
        let kind = PieceKind::from_is_king(mover_is_king);

        let mut info = UnmakeInfo {
            captured: Bitboard::EMPTY,
            captured_kings: Bitboard::EMPTY,
            promoted: false,
            previous_reversible_plies: self.reversible_plies,
            previous_hash: self.hash,
        };

        for over in mv.captured_squares() {
            let captured_kind = PieceKind::from_is_king(self.kings.contains(over));
            if captured_kind == PieceKind::King {
                info.captured_kings = info.captured_kings.with(over);
            }
            info.captured = info.captured.with(over);
            self.hash ^= ZOBRIST.piece(them, captured_kind, over);
        }
        self.occupied[them.index()] &= !info.captured;
        self.kings &= !info.captured;

        // A capture ring may end on its own origin; without/with handles that.
        self.occupied[us.index()] = self.occupied[us.index()].without(from).with(dest);
        if mover_is_king {
            self.kings = self.kings.without(from).with(dest);
        }
        self.hash ^= ZOBRIST.piece(us, kind, from) ^ ZOBRIST.piece(us, kind, dest);

        if !mover_is_king && dest.rank() == us.promotion_rank() {
            self.kings = self.kings.with(dest);
            self.hash ^= ZOBRIST.piece(us, PieceKind::Man, dest) ^ ZOBRIST.piece(us, PieceKind::King, dest);
            info.promoted = true;
        }

        if mv.is_capture() {
            self.reversible_plies = 0;
        } else {
            self.reversible_plies += 1;
        }

        self.side_to_move = them;
        self.hash ^= ZOBRIST.black_to_move_key;

        info
    }

    /// Take back `mv`, restoring every field to its state before `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let us = !self.side_to_move;
        let them = self.side_to_move;
        let from = mv.from();
        let dest = mv.destination();

        if info.promoted {
            self.kings = self.kings.without(dest);
        }
        let mover_is_king = self.kings.contains(dest);
        self.occupied[us.index()] = self.occupied[us.index()].without(dest).with(from);
        if mover_is_king {
            self.kings = self.kings.without(dest).with(from);
        }

        self.occupied[them.index()] |= info.captured;
        self.kings |= info.captured_kings;

        self.side_to_move = us;
        self.reversible_plies = info.previous_reversible_plies;
        self.hash = info.previous_hash;
    }

    /// The position after `mv`, leaving `self` untouched.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> Position {
        let mut next = *self;
        next.make_move(mv);
        next
    }
}
