use super::{CaptureRule, Move, Position};

impl Position {
    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: usize, rule: CaptureRule) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(rule);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1, rule);
            self.unmake_move(mv, info);
        }

        nodes
    }

    /// Perft split by root move, in generation order.
    pub fn divide(&mut self, depth: usize, rule: CaptureRule) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.generate_moves(rule)
            .into_iter()
            .map(|mv| {
                let info = self.make_move(mv);
                let nodes = self.perft(depth - 1, rule);
                self.unmake_move(mv, info);
                (mv, nodes)
            })
            .collect()
    }
}
