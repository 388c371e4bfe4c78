//! Parsers for the manager's handshake and status lines.

use crate::board::board_types::Color;
use crate::errors::ProtocolError;
use crate::search::search_config::{Algorithm, SearchConfig};
use crate::search::search_types::DepthLimit;

/// `color,limit,minimax,caching,ordering`, e.g. `1,4,0,1,1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handshake {
    pub color: Color,
    pub config: SearchConfig,
}

impl Handshake {
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::MalformedHandshake(line.trim().to_owned());

        let fields = line
            .trim()
            .split(',')
            .map(|f| f.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;
        let [color, limit, minimax, caching, ordering] = fields[..] else {
            return Err(malformed());
        };

        let color = Color::from_code(color).ok_or(ProtocolError::UnknownColor(color))?;
        let algorithm = if minimax == 1 {
            Algorithm::Minimax
        } else {
            Algorithm::AlphaBeta
        };

        Ok(Self {
            color,
            config: SearchConfig {
                depth_limit: DepthLimit::from_signed(limit),
                algorithm,
                caching: caching == 1,
                ordering: ordering == 1,
            },
        })
    }
}

/// Per-turn status line: `SCORE <first> <second>` or `FINAL <first> <second>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing { first: u32, second: u32 },
    Final { first: u32, second: u32 },
}

impl Status {
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let malformed = || ProtocolError::MalformedStatus(line.trim().to_owned());

        let mut parts = line.split_whitespace();
        let (Some(tag), Some(first), Some(second), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let first = first.parse::<u32>().map_err(|_| malformed())?;
        let second = second.parse::<u32>().map_err(|_| malformed())?;

        if tag.eq_ignore_ascii_case("SCORE") {
            Ok(Status::Ongoing { first, second })
        } else if tag.eq_ignore_ascii_case("FINAL") {
            Ok(Status::Final { first, second })
        } else {
            Err(malformed())
        }
    }
}
