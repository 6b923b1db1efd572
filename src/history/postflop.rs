use super::line::Line;
use super::token::Token;
use crate::Chips;
use crate::COLLAPSE_DEPTH;

/// collapse a full raw history (preflop segment plus one or more streets)
/// into the bounded abstract vocabulary.
///
/// the preflop segment is replayed only to carry its pot total forward: each
/// preflop bet leaves the pot at twice its size once matched. the two blind
/// posts open the output verbatim, then each postflop street is emitted after
/// a separator, with a trailing separator closing the final street.
///
/// postflop bets bucket into BetMin below the running pot and BetMax at or
/// above it; there is no middle bucket after the flop. a raise over BetMin
/// becomes BetMax; a raise over an emitted BetMax rewrites it to BetMin and
/// appends BetMax.
///
/// streets of length >= COLLAPSE_DEPTH whose fourth token is not a call are
/// collapsed to a fixed closing pattern keyed on parity; streets that end in
/// a call additionally reconstruct their opener (check-led versus bet-led).
pub fn abstracted(line: &Line, blind: Chips) -> Line {
    let preflop = line.preflop();
    let mut pot = 2 * blind;
    for token in preflop {
        if let Token::Bet(n) = token {
            pot = 2 * n;
        }
    }
    let blinds = preflop.len().min(2);
    let mut out = preflop[..blinds].to_vec();
    let mut latest: Chips = 0;
    for stage in line.postflop() {
        out.push(Token::Break);
        if stage.len() >= COLLAPSE_DEPTH && stage.get(3) != Some(&Token::Call) {
            match stage.last() {
                Some(Token::Call) => match stage.len() % 2 {
                    0 => out.extend([Token::BetMax, Token::Call]),
                    _ => match stage.first() {
                        Some(Token::Check) => {
                            out.extend([Token::Check, Token::BetMax, Token::Call])
                        }
                        _ => out.extend([Token::BetMin, Token::BetMax, Token::Call]),
                    },
                },
                _ => match stage.len() % 2 {
                    0 => out.push(Token::BetMax),
                    _ => out.extend([Token::BetMin, Token::BetMax]),
                },
            }
        } else {
            for token in stage {
                match *token {
                    Token::Bet(n) => {
                        match out.last() {
                            Some(Token::BetMin) => out.push(Token::BetMax),
                            Some(Token::BetMax) => {
                                let i = out.len() - 1;
                                out[i] = Token::BetMin;
                                out.push(Token::BetMax);
                            }
                            _ => match n >= pot {
                                true => out.push(Token::BetMax),
                                false => out.push(Token::BetMin),
                            },
                        }
                        pot += n;
                        latest = n;
                    }
                    Token::Call => {
                        pot += latest;
                        out.push(Token::Call);
                    }
                    other => {
                        log::trace!("postflop passthrough token: {}", other);
                        out.push(other);
                    }
                }
            }
        }
    }
    out.push(Token::Break);
    Line::from(out)
}
