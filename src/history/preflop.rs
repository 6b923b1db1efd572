use super::line::Line;
use super::token::Token;
use crate::Chips;
use crate::COLLAPSE_DEPTH;

/// collapse a raw preflop sequence into the bounded abstract vocabulary.
///
/// the first two tokens are the blind posts and pass through verbatim.
/// bets are bucketed against the running pot total: BetMin at or below the
/// pot, BetMid at or below twice the pot, BetMax above. re-raises climb the
/// BetMin -> BetMid -> BetMax ladder; a raise over an emitted BetMax rewrites
/// the tail (BetMid before it demotes to BetMin, the BetMax itself to BetMid)
/// so the sequence stays strictly ascending.
///
/// raise wars of length >= COLLAPSE_DEPTH beyond the blinds that do not end
/// in a call skip bucketing entirely and close with a fixed pattern keyed on
/// parity, which is what bounds the abstract space.
pub fn abstracted(line: &Line, blind: Chips) -> Line {
    let stage = line.preflop();
    let blinds = stage.len().min(2);
    let mut out = stage[..blinds].to_vec();
    let rest = &stage[blinds..];
    if rest.len() >= COLLAPSE_DEPTH && rest.last() != Some(&Token::Call) {
        match rest.len() % 2 {
            0 => out.push(Token::BetMax),
            _ => out.extend([Token::BetMin, Token::BetMax]),
        }
    } else {
        let mut bet = blind;
        let mut pot = blind + blind / 2;
        for token in rest {
            match *token {
                Token::Bet(n) => {
                    match out.last() {
                        Some(Token::BetMin) => match n <= 2 * pot {
                            true => out.push(Token::BetMid),
                            false => out.push(Token::BetMax),
                        },
                        Some(Token::BetMid) => out.push(Token::BetMax),
                        Some(Token::BetMax) => {
                            let i = out.len() - 1;
                            if i > 0 && out[i - 1] == Token::BetMid {
                                out[i - 1] = Token::BetMin;
                            }
                            out[i] = Token::BetMid;
                            out.push(Token::BetMax);
                        }
                        _ => match () {
                            _ if n <= pot => out.push(Token::BetMin),
                            _ if n <= 2 * pot => out.push(Token::BetMid),
                            _ => out.push(Token::BetMax),
                        },
                    }
                    pot += n;
                    bet = n;
                }
                Token::Call => {
                    pot = 2 * bet;
                    out.push(Token::Call);
                }
                other => {
                    log::trace!("preflop passthrough token: {}", other);
                    out.push(other);
                }
            }
        }
    }
    Line::from(out)
}
