use super::super::{Bitboard, Color, Direction, Move, MoveList, Position};

impl Position {
    /// Pieces of `color` that can make at least one slide.
    #[must_use]
    pub fn sliders(&self, color: Color) -> Bitboard {
        let empty = self.empty_squares();
        Direction::ALL.iter().fold(Bitboard::EMPTY, |acc, &dir| {
            acc | (self.movers(color, dir) & empty.step_back(dir))
        })
    }

    #[must_use]
    pub fn has_quiet_move(&self) -> bool {
        !self.sliders(self.side_to_move).is_empty()
    }

    /// Pieces of `color` allowed to move in `dir`: kings always, men only
    /// forward.
    #[inline]
    pub(crate) fn movers(&self, color: Color, dir: Direction) -> Bitboard {
        if color.forward().contains(&dir) {
            self.pieces(color)
        } else {
            self.kings_of(color)
        }
    }

    pub(crate) fn push_quiet_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let empty = self.empty_squares();
        for dir in Direction::ALL {
            for from in (self.movers(us, dir) & empty.step_back(dir)).iter() {
                if let Some(to) = from.neighbor(dir) {
                    moves.push(Move::quiet(from, to));
                }
            }
        }
    }
}
