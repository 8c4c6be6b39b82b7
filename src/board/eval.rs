//! Static evaluation.
//!
//! Each side is scored on its own terms from White's side of the board:
//! Black's pieces are rotated by 180 degrees first, so a single set of
//! masks and tables covers both colours and the result is exactly
//! colour-symmetric.

use std::ops::{Add, Sub};

use super::masks::{
    CENTER, EAST_WING, PASSED_ZONE, TRAP_A1_GUARDS, TRAP_A1_KING, TRAP_H2_GUARDS, TRAP_H2_KING,
    WEST_WING,
};
use super::{Bitboard, Color, Direction, Position};

pub const MAN_VALUE: i32 = 100;
pub const KING_VALUE: i32 = 150;

/// At or below this many pieces on the board the endgame terms apply.
pub const ENDGAME_PIECES: u32 = 8;

/// Bonus for a man by rank (0 = own back rank).
const ADVANCE_BONUS: [i32; 8] = [0, 2, 4, 7, 10, 14, 19, 0];
/// Bonus for a man with no enemy left in front of it, by rank.
const PASSED_BONUS: [i32; 8] = [0, 8, 12, 18, 26, 36, 48, 0];
const CENTER_BONUS: i32 = 6;
const MOBILITY_BONUS: i32 = 2;
const WING_MAJORITY_BONUS: i32 = 6;
const TRAP_BONUS: i32 = 40;
const KING_CHASE_PENALTY: i32 = 4;
const THREAT_PENALTY: i32 = 12;
const PROTECTED_BONUS: i32 = 3;

/// One side's pieces seen from White's side of the board.
#[derive(Clone, Copy)]
struct Frame {
    own_men: Bitboard,
    own_kings: Bitboard,
    opp_men: Bitboard,
    opp_kings: Bitboard,
}

impl Frame {
    fn of(position: &Position, color: Color) -> Self {
        let frame = Frame {
            own_men: position.men(color),
            own_kings: position.kings_of(color),
            opp_men: position.men(!color),
            opp_kings: position.kings_of(!color),
        };
        match color {
            Color::White => frame,
            Color::Black => Frame {
                own_men: frame.own_men.rotate(),
                own_kings: frame.own_kings.rotate(),
                opp_men: frame.opp_men.rotate(),
                opp_kings: frame.opp_kings.rotate(),
            },
        }
    }

    fn own(&self) -> Bitboard {
        self.own_men | self.own_kings
    }

    fn opp(&self) -> Bitboard {
        self.opp_men | self.opp_kings
    }

    fn empty(&self) -> Bitboard {
        !(self.own() | self.opp())
    }
}

/// Per-term evaluation of one side, or the difference of two sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalTerms {
    pub material: i32,
    pub advancement: i32,
    pub center: i32,
    pub king_chase: i32,
    pub mobility: i32,
    pub passed: i32,
    pub wings: i32,
    pub traps: i32,
    pub safety: i32,
}

impl EvalTerms {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.material
            + self.advancement
            + self.center
            + self.king_chase
            + self.mobility
            + self.passed
            + self.wings
            + self.traps
            + self.safety
    }

    fn zip(self, other: Self, op: fn(i32, i32) -> i32) -> Self {
        EvalTerms {
            material: op(self.material, other.material),
            advancement: op(self.advancement, other.advancement),
            center: op(self.center, other.center),
            king_chase: op(self.king_chase, other.king_chase),
            mobility: op(self.mobility, other.mobility),
            passed: op(self.passed, other.passed),
            wings: op(self.wings, other.wings),
            traps: op(self.traps, other.traps),
            safety: op(self.safety, other.safety),
        }
    }
}

impl Add for EvalTerms {
    type Output = EvalTerms;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for EvalTerms {
    type Output = EvalTerms;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

fn material(count_men: u32, count_kings: u32) -> i32 {
    MAN_VALUE * count_men as i32 + KING_VALUE * count_kings as i32
}

/// Squares reachable by one slide for `men` (moving north) and `kings`.
fn slide_sources(men: Bitboard, kings: Bitboard, empty: Bitboard) -> Bitboard {
    Direction::ALL.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        let movers = if dir.is_north() { men | kings } else { kings };
        acc | (movers & empty.step_back(dir))
    })
}

fn side_terms(frame: &Frame, endgame: bool) -> EvalTerms {
    let own = frame.own();
    let opp = frame.opp();
    let empty = frame.empty();
    let mut terms = EvalTerms {
        material: material(frame.own_men.popcount(), frame.own_kings.popcount()),
        ..EvalTerms::default()
    };

    for man in frame.own_men.iter() {
        if !endgame {
            terms.advancement += ADVANCE_BONUS[man.rank()];
        }
        if (PASSED_ZONE[man.index()] & opp).is_empty() {
            terms.passed += PASSED_BONUS[man.rank()];
        }
    }

    terms.center = CENTER_BONUS * (own & CENTER).popcount() as i32;
    terms.mobility =
        MOBILITY_BONUS * slide_sources(frame.own_men, frame.own_kings, empty).popcount() as i32;

    // Majority of men on a wing
    for wing in [WEST_WING, EAST_WING] {
        if (frame.own_men & wing).popcount() > (frame.opp_men & wing).popcount() {
            terms.wings += WING_MAJORITY_BONUS;
        }
    }

    if !(frame.opp_kings & TRAP_A1_KING).is_empty() && (own & TRAP_A1_GUARDS) == TRAP_A1_GUARDS {
        terms.traps += TRAP_BONUS;
    }
    if !(frame.opp_kings & TRAP_H2_KING).is_empty() && (own & TRAP_H2_GUARDS) == TRAP_H2_GUARDS {
        terms.traps += TRAP_BONUS;
    }

    // When ahead in the endgame, kings close in on the remaining enemy pieces.
    let opp_material = material(frame.opp_men.popcount(), frame.opp_kings.popcount());
    if endgame && terms.material > opp_material && !opp.is_empty() {
        for king in frame.own_kings.iter() {
            let nearest = opp.iter().map(|target| king.distance(target)).min().unwrap_or(0);
            terms.king_chase -= KING_CHASE_PENALTY * nearest as i32;
        }
    }

    // Pieces an enemy could jump right now, against pieces backed up from behind.
    let threatened = Direction::ALL.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        let attackers = if dir.is_north() {
            frame.opp_kings
        } else {
            frame.opp()
        };
        acc | (own & attackers.step(dir) & empty.step_back(dir))
    });
    let backed =
        own & (own.step(Direction::NorthWest) | own.step(Direction::NorthEast));
    terms.safety = PROTECTED_BONUS * backed.popcount() as i32
        - THREAT_PENALTY * threatened.popcount() as i32;

    terms
}

impl Position {
    /// Per-term breakdown from White's point of view.
    #[must_use]
    pub fn eval_terms(&self) -> EvalTerms {
        let endgame = self.occupied().popcount() <= ENDGAME_PIECES;
        side_terms(&Frame::of(self, Color::White), endgame)
            - side_terms(&Frame::of(self, Color::Black), endgame)
    }

    /// Static score from White's point of view.
    #[must_use]
    pub fn evaluate_white(&self) -> i32 {
        self.eval_terms().total()
    }

    /// Static score from the side to move's point of view.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.side_to_move.sign() * self.evaluate_white()
    }
}
