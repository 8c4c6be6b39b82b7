use super::SearchContext;
use crate::board::search::INF;
use crate::board::{ScoredMoveList, MAX_PLY};

impl SearchContext<'_> {
    /// Capture-only search with stand-pat.
    pub(super) fn quiescence(&mut self, mut alpha: i32, beta: i32, ply: usize) -> i32 {
        if self.should_stop() {
            return 0;
        }
        self.nodes += 1;

        let position = *self.game.position();
        if position.is_draw_by_counter() {
            return if position.has_legal_move() {
                0
            } else {
                -INF + ply as i32
            };
        }

        let stand_pat = position.evaluate();
        if ply >= MAX_PLY - 1 {
            return stand_pat;
        }

        let captures = position.generate_captures(self.rule);
        if captures.is_empty() {
            return if position.has_quiet_move() {
                stand_pat
            } else {
                -INF + ply as i32
            };
        }

        if stand_pat >= beta {
            return beta;
        }
        alpha = alpha.max(stand_pat);

        // Longest chains first
        let mut ordered = ScoredMoveList::new();
        for &mv in &captures {
            ordered.push(mv, mv.jump_len() as i32);
        }
        ordered.sort_by_score_desc();

        for scored in ordered.iter() {
            self.game.apply_move(scored.mv);
            let score = -self.quiescence(-beta, -alpha, ply + 1);
            self.game.undo_move();

            if self.should_stop() {
                return 0;
            }

            if score > alpha {
                if score >= beta {
                    return beta;
                }
                alpha = score;
            }
        }

        alpha
    }
}
