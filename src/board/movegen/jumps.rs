use super::super::{Bitboard, Color, Direction, Move, MoveList, Position, Square, MAX_JUMPS};
use super::CaptureRule;

impl Position {
    /// Pieces of the side to move with at least one capture available.
    #[must_use]
    pub fn jumpers(&self) -> Bitboard {
        let us = self.side_to_move;
        let enemy = self.pieces(!us);
        let empty = self.empty_squares();
        Direction::ALL.iter().fold(Bitboard::EMPTY, |acc, &dir| {
            // Enemy pieces with an empty square behind them in `dir`
            let victims = enemy & empty.step_back(dir);
            acc | (self.movers(us, dir) & victims.step_back(dir))
        })
    }

    pub(crate) fn push_captures(&self, rule: CaptureRule, moves: &mut MoveList) {
        let us = self.side_to_move;
        let enemy = self.pieces(!us);
        let empty = self.empty_squares();
        for from in self.jumpers().iter() {
            let walker = ChainWalker {
                from,
                dirs: piece_dirs(us, self.kings.contains(from)),
                rule,
            };
            // The moving piece has left its origin, so a chain may pass it.
            walker.extend(moves, Move::null(), from, 0, enemy, empty.with(from));
        }
    }
}

fn piece_dirs(color: Color, is_king: bool) -> &'static [Direction] {
    if is_king {
        &Direction::ALL
    } else {
        match color {
            Color::White => &Direction::NORTH,
            Color::Black => &Direction::SOUTH,
        }
    }
}

struct ChainWalker {
    from: Square,
    dirs: &'static [Direction],
    rule: CaptureRule,
}

impl ChainWalker {
    /// Extend the chain `mv`, currently `hops` long and standing on `at`.
    ///
    /// `enemy` and `empty` are owned copies, so every branch sees its own
    /// board: a jumped piece is gone and its square open for the rest of the
    /// branch only. A man crowned on the last rank has no forward hop left,
    /// which ends its chain.
    fn extend(
        &self,
        moves: &mut MoveList,
        mv: Move,
        at: Square,
        hops: usize,
        enemy: Bitboard,
        empty: Bitboard,
    ) {
        let mut extended = false;
        if hops < MAX_JUMPS {
            for &dir in self.dirs {
                let Some((over, land)) = at.jump(dir) else {
                    continue;
                };
                if !enemy.contains(over) || !empty.contains(land) {
                    continue;
                }
                extended = true;
                let next = if hops == 0 {
                    Move::jump(self.from, land)
                } else {
                    mv.with_jump_dir(hops - 1, dir).with_jump_len(hops + 1)
                };
                self.extend(
                    moves,
                    next,
                    land,
                    hops + 1,
                    enemy.without(over),
                    empty.with(over).with(at).without(land),
                );
            }
        }

        if hops > 0 && (!extended || self.rule == CaptureRule::Optional) {
            moves.push(mv);
        }
    }
}
