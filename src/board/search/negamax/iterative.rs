use std::sync::atomic::AtomicBool;
use std::time::Instant;

use super::{format_pv, PvLine, SearchContext};
use crate::board::search::{mate_in, SearchConfig, INF, MATE_THRESHOLD};
use crate::board::{Game, Move, SearchIterationInfo, SearchResult, SearchState, MAX_PLY};

impl SearchContext<'_> {
    /// Deepen one ply at a time with a full window, keeping the result of
    /// the last iteration that finished.
    pub fn iterative_deepening(&mut self, max_depth: u32, fallback: Move) -> SearchResult {
        let mut result = SearchResult {
            best_move: Some(fallback),
            pv: vec![fallback],
            score: 0,
            nodes: 0,
            depth: 0,
        };
        let soft_time_ms = self.time_limit_ms * self.state.params.soft_time_percent / 100;
        let mut root_pv = PvLine::new();

        for depth in 1..=max_depth {
            self.root_depth = depth;
            let score = self.negamax(depth, -INF, INF, 0, &mut root_pv);

            if self.stopped {
                log::debug!(
                    "depth {depth} aborted after {} nodes, keeping depth {}",
                    self.nodes,
                    result.depth
                );
                break;
            }

            if let Some(&best) = root_pv.moves().first() {
                result.best_move = Some(best);
                result.pv = root_pv.moves().to_vec();
            }
            result.score = score;
            result.depth = depth;
            self.report(depth, score, &result.pv);

            if score.abs() > MATE_THRESHOLD {
                break;
            }
            if self.time_limit_ms > 0 && self.elapsed_ms() >= soft_time_ms {
                break;
            }
        }

        result.nodes = self.nodes;
        result
    }

    fn report(&self, depth: u32, score: i32, pv: &[Move]) {
        let time_ms = self.elapsed_ms();
        let nps = if time_ms > 0 {
            self.nodes * 1000 / time_ms
        } else {
            0
        };
        let pv_str = format_pv(pv);
        log::info!(
            "depth {depth} score {score} nodes {} nps {nps} time {time_ms}ms pv {pv_str}",
            self.nodes
        );

        if let Some(cb) = &self.info_callback {
            let info = SearchIterationInfo {
                depth,
                nodes: self.nodes,
                nps,
                time_ms,
                score,
                mate_in: mate_in(score),
                pv: pv_str,
                tt_hits: self.state.stats.tt_hits,
                hashfull: self.state.hashfull_per_mille(),
            };
            cb(&info);
        }
    }
}

/// Run the main search algorithm
pub(in crate::board::search) fn run_search(
    game: &mut Game,
    state: &mut SearchState,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchResult {
    state.new_search();

    let rule = config.capture_rule.unwrap_or(game.capture_rule());
    let position = *game.position();
    let moves = position.generate_moves(rule);

    let Some(first) = moves.first() else {
        return SearchResult {
            best_move: None,
            pv: Vec::new(),
            score: -INF,
            nodes: 0,
            depth: 0,
        };
    };
    if moves.len() == 1 {
        return SearchResult {
            best_move: Some(first),
            pv: vec![first],
            score: position.evaluate(),
            nodes: 0,
            depth: 0,
        };
    }

    let max_ply = MAX_PLY as u32 - 1;
    let max_depth = config.max_depth.unwrap_or(max_ply).clamp(1, max_ply);

    let mut ctx = SearchContext {
        game: &mut *game,
        state: &mut *state,
        stop,
        rule,
        use_tt: config.use_tt,
        start_time: Instant::now(),
        time_limit_ms: config.time_limit_ms,
        node_limit: config.node_limit,
        nodes: 0,
        stopped: false,
        root_depth: 0,
        info_callback: config.info_callback.clone(),
    };
    let result = ctx.iterative_deepening(max_depth, first);

    state.stats.nodes = result.nodes;
    state.stats.total_nodes += result.nodes;
    result
}
