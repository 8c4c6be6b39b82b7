//! Text forms of positions and moves.
//!
//! Positions use the piece-list notation `W:Wa1,c1,Kg3:Bb6,Kd8`: the side
//! to move, then White's and Black's pieces, kings prefixed with `K`.
//! Moves are written `c3-d4` for a slide and `c3xe5` or `c3xe5xc7` for a
//! capture; the full path picks one chain out of several with the same
//! ends.

use std::fmt;
use std::str::FromStr;

use super::error::{MoveParseError, PositionError};
use super::{Bitboard, CaptureRule, Color, Move, PieceKind, Position, Square};

/// Notation of the starting position.
pub const START_POSITION: &str =
    "W:Wa1,c1,e1,g1,b2,d2,f2,h2,a3,c3,e3,g3:Bb6,d6,f6,h6,a7,c7,e7,g7,b8,d8,f8,h8";

fn parse_side(field: &str) -> Result<Color, PositionError> {
    match field.trim() {
        "W" | "w" => Ok(Color::White),
        "B" | "b" => Ok(Color::Black),
        other => Err(PositionError::InvalidSide {
            found: other.to_string(),
        }),
    }
}

/// Parse one `W...` or `B...` piece list into (colour, men and kings, kings).
fn parse_piece_list(field: &str) -> Result<(Color, Bitboard, Bitboard), PositionError> {
    let field = field.trim();
    let mut chars = field.chars();
    let color = match chars.next() {
        Some('W' | 'w') => Color::White,
        Some('B' | 'b') => Color::Black,
        _ => {
            return Err(PositionError::MissingField {
                field: "piece list",
            })
        }
    };

    let mut pieces = Bitboard::EMPTY;
    let mut kings = Bitboard::EMPTY;
    for entry in chars.as_str().split(',').map(str::trim) {
        if entry.is_empty() {
            continue;
        }
        let (is_king, name) = match entry.strip_prefix(|c| c == 'K' || c == 'k') {
            Some(rest) => (true, rest),
            None => (false, entry),
        };
        let sq: Square = name.parse().map_err(|error| PositionError::InvalidSquare {
            entry: entry.to_string(),
            error,
        })?;
        if pieces.contains(sq) {
            return Err(PositionError::Overlap {
                square: sq.to_string(),
            });
        }
        pieces = pieces.with(sq);
        if is_king {
            kings = kings.with(sq);
        }
    }
    Ok((color, pieces, kings))
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().split(':');
        let side = parse_side(fields.next().ok_or(PositionError::MissingField {
            field: "side to move",
        })?)?;

        let mut white = None;
        let mut black = None;
        for field in fields.take(2) {
            let (color, pieces, kings) = parse_piece_list(field)?;
            let slot = match color {
                Color::White => &mut white,
                Color::Black => &mut black,
            };
            if slot.is_some() {
                return Err(PositionError::MissingField {
                    field: match color {
                        Color::White => "black pieces",
                        Color::Black => "white pieces",
                    },
                });
            }
            *slot = Some((pieces, kings));
        }

        let (white, white_kings) = white.ok_or(PositionError::MissingField {
            field: "white pieces",
        })?;
        let (black, black_kings) = black.ok_or(PositionError::MissingField {
            field: "black pieces",
        })?;
        Position::from_parts(white, black, white_kings | black_kings, side)
    }
}

impl Position {
    /// Parse piece-list notation.
    ///
    /// # Errors
    ///
    /// Returns a [`PositionError`] describing the first problem found.
    pub fn from_notation(notation: &str) -> Result<Self, PositionError> {
        notation.parse()
    }

    /// Piece-list notation of this position, squares in index order.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let list = |color: Color| {
            self.pieces(color)
                .iter()
                .map(|sq| {
                    if self.kings.contains(sq) {
                        format!("K{sq}")
                    } else {
                        sq.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        };
        format!("{side}:W{}:B{}", list(Color::White), list(Color::Black))
    }

    /// Find the legal move written as `text`.
    ///
    /// Accepts `c3-d4`, `c3xe5`, `c3xe5xc7` and the bare `c3d4` form, in
    /// any case. When two chains share their end squares the first one
    /// generated is chosen unless the full path is given.
    ///
    /// # Errors
    ///
    /// [`MoveParseError::NoMatch`] when the text is well formed but no
    /// legal move fits it.
    pub fn parse_move(&self, text: &str, rule: CaptureRule) -> Result<Move, MoveParseError> {
        let squares = parse_squares(text)?;
        let from = squares[0];
        let path = &squares[1..];
        let dest = path[path.len() - 1];

        self.generate_moves(rule)
            .into_iter()
            .find(|mv| {
                mv.from() == from
                    && (mv.landings().eq(path.iter().copied())
                        || (path.len() == 1 && mv.destination() == dest))
            })
            .ok_or_else(|| MoveParseError::NoMatch {
                notation: text.to_string(),
            })
    }
}

fn parse_squares(text: &str) -> Result<Vec<Square>, MoveParseError> {
    let trimmed = text.trim();
    let is_separator = |c: char| matches!(c, '-' | 'x' | 'X');
    let parts: Vec<&str> = if trimmed.contains(is_separator) {
        trimmed.split(is_separator).map(str::trim).collect()
    } else if trimmed.len() == 4 && trimmed.is_ascii() {
        vec![&trimmed[..2], &trimmed[2..]]
    } else {
        vec![trimmed]
    };

    if parts.len() < 2 {
        return Err(MoveParseError::InvalidFormat {
            notation: text.to_string(),
        });
    }

    parts
        .into_iter()
        .map(|part| {
            part.parse::<Square>()
                .map_err(|error| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                    error,
                })
        })
        .collect()
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";
        for rank in (0..8).rev() {
            writeln!(f, "{SEPARATOR}")?;
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let cell = Square::from_coords(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', |(color, kind): (Color, PieceKind)| kind.to_char(color));
                write!(f, "| {cell} ")?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{SEPARATOR}")?;
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_notation_round_trips() {
        let start = Position::new();
        assert_eq!(start.to_notation(), START_POSITION);
        assert_eq!(START_POSITION.parse::<Position>(), Ok(start));
    }

    #[test]
    fn kings_and_side_parse() {
        let pos: Position = "B:WKa1,c3:Bb6,Kd8".parse().expect("valid notation");
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(pos.piece_count(Color::White), 2);
        assert_eq!(pos.kings_of(Color::White).popcount(), 1);
        assert_eq!(pos.kings_of(Color::Black).popcount(), 1);
        assert_eq!(pos.to_notation(), "B:WKa1,c3:Bb6,Kd8");
        assert!(pos.is_consistent());
    }

    #[test]
    fn list_order_does_not_matter() {
        let a: Position = "W:Wc3:Bd6".parse().expect("valid notation");
        let b: Position = "W:Bd6:Wc3".parse().expect("valid notation");
        assert_eq!(a, b);
    }

    #[test]
    fn bad_notation_is_rejected() {
        assert!(matches!(
            "X:Wc3:Bd6".parse::<Position>(),
            Err(PositionError::InvalidSide { .. })
        ));
        assert!(matches!(
            "W:Wc3".parse::<Position>(),
            Err(PositionError::MissingField { .. })
        ));
        assert!(matches!(
            "W:Wc4:Bd6".parse::<Position>(),
            Err(PositionError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "W:Wc3:Bc3".parse::<Position>(),
            Err(PositionError::Overlap { .. })
        ));
    }

    #[test]
    fn parse_moves_in_start_position() {
        let pos = Position::new();
        let mv = pos
            .parse_move("c3-d4", CaptureRule::Forced)
            .expect("legal move");
        assert_eq!(mv.to_string(), "c3-d4");
        assert_eq!(pos.parse_move("C3D4", CaptureRule::Forced), Ok(mv));
        assert!(matches!(
            pos.parse_move("c3-c5", CaptureRule::Forced),
            Err(MoveParseError::NoMatch { .. })
        ));
        assert!(matches!(
            pos.parse_move("c3", CaptureRule::Forced),
            Err(MoveParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            pos.parse_move("c3-z9", CaptureRule::Forced),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn full_path_selects_chain() {
        // Two double jumps from c1 end on c5 only through different squares.
        let pos: Position = "W:Wc1:Bd2,d4,b4,b2".parse().expect("valid notation");
        let via_e3 = pos
            .parse_move("c1xe3xc5", CaptureRule::Forced)
            .expect("chain via e3");
        let via_a3 = pos
            .parse_move("c1xa3xc5", CaptureRule::Forced)
            .expect("chain via a3");
        assert_ne!(via_e3, via_a3);
        assert_eq!(via_e3.destination(), via_a3.destination());
        assert!(pos.parse_move("c1xc5", CaptureRule::Forced).is_ok());
    }

    #[test]
    fn board_renders_pieces() {
        let pos: Position = "W:WKa1,c3:Bb6".parse().expect("valid notation");
        let text = pos.to_string();
        assert!(text.starts_with("  +---+"));
        assert!(text.contains("1 | W |"));
        assert!(text.contains("3 |   |   | w |"));
        assert!(text.ends_with("    a   b   c   d   e   f   g   h"));
    }
}
