use super::error::{RoundError, RoundResult};
use crate::model::*;

pub fn tile_type_from_char(ch: char) -> RoundResult<Type> {
    match ch {
        'm' => Ok(TM),
        'p' => Ok(TP),
        's' => Ok(TS),
        _ => Err(RoundError::InvalidInput(format!("invalid tile type char: {}", ch))),
    }
}

// 牌の指定文字列 ("1m", "9p", "ton", "東", ...) を牌に変換
pub fn tile_from_token(token: &str) -> RoundResult<Tile> {
    let honor = match token {
        "東" | "ton" | "dong" => Some(WE),
        "南" | "nan" => Some(WS),
        "西" | "sha" | "sya" | "xi" => Some(WW),
        "北" | "pei" | "pe" | "bei" => Some(WN),
        "白" | "haku" | "bai" => Some(DW),
        "發" | "hatu" | "hatsu" | "fa" => Some(DG),
        "中" | "chun" | "ch" | "zhong" => Some(DR),
        _ => None,
    };
    if let Some(ni) = honor {
        return Ok(Tile(TZ, ni));
    }

    let invalid = || RoundError::InvalidInput(format!("invalid tile token: '{}'", token));
    let mut chars = token.chars();
    let (n, t) = match (chars.next(), chars.next(), chars.next()) {
        (Some(n), Some(t), None) => (n, t),
        _ => return Err(invalid()),
    };
    let ni = match n.to_digit(10) {
        Some(d) if (1..=9).contains(&d) => d as Tnum,
        _ => return Err(invalid()),
    };
    let ti = tile_type_from_char(t).map_err(|_| invalid())?;
    Ok(Tile(ti, ni))
}

// 空白区切りの牌の指定文字列を変換 ("1m 2m 3m ton")
pub fn tiles_from_tokens(exp: &str) -> RoundResult<Vec<Tile>> {
    exp.split_whitespace().map(tile_from_token).collect()
}

// 連続した数字と牌種の省略表記を変換 ("123m456p11z" -> 1m2m3m4p5p6p東東)
pub fn tiles_from_string(exp: &str) -> RoundResult<Vec<Tile>> {
    let mut tiles = vec![];
    let mut nums: Vec<Tnum> = vec![];
    for ch in exp.chars() {
        match ch {
            '1'..='9' => nums.push(ch as usize - '0' as usize),
            'm' | 'p' | 's' | 'z' => {
                if nums.is_empty() {
                    return Err(RoundError::InvalidInput(format!(
                        "tile type without number: '{}'",
                        exp
                    )));
                }
                let ti = if ch == 'z' { TZ } else { tile_type_from_char(ch)? };
                for ni in nums.drain(..) {
                    let t = Tile(ti, ni);
                    if !t.is_valid() {
                        return Err(RoundError::InvalidInput(format!("invalid tile: {}{}", ni, ch)));
                    }
                    tiles.push(t);
                }
            }
            ' ' => {}
            _ => {
                return Err(RoundError::InvalidInput(format!("invalid char: '{}'", ch)));
            }
        }
    }
    if !nums.is_empty() {
        return Err(RoundError::InvalidInput(format!("tile type missing: '{}'", exp)));
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let v: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
    v.join(" ")
}

#[test]
fn test_tile_from_token() {
    assert_eq!(tile_from_token("1m").unwrap(), Tile(TM, 1));
    assert_eq!(tile_from_token("9p").unwrap(), Tile(TP, 9));
    assert_eq!(tile_from_token("5s").unwrap(), Tile(TS, 5));
    assert_eq!(tile_from_token("ton").unwrap(), Tile(TZ, WE));
    assert_eq!(tile_from_token("sya").unwrap(), Tile(TZ, WW));
    assert_eq!(tile_from_token("北").unwrap(), Tile(TZ, WN));
    assert_eq!(tile_from_token("hatu").unwrap(), Tile(TZ, DG));
    assert_eq!(tile_from_token("zhong").unwrap(), Tile(TZ, DR));
    for bad in ["", "0m", "10m", "1z", "m1", "x", "1mm", "TON"] {
        let e = tile_from_token(bad).unwrap_err();
        assert!(e.is_ignorable(), "{}", bad);
    }
}

#[test]
fn test_token_display_roundtrip() {
    for t in Tile::all() {
        assert_eq!(tile_from_token(&t.to_string()).unwrap(), t);
    }
}

#[test]
fn test_tiles_from_string() {
    let tiles = tiles_from_string("123m 9p11z").unwrap();
    assert_eq!(
        tiles,
        vec![Tile(TM, 1), Tile(TM, 2), Tile(TM, 3), Tile(TP, 9), Tile(TZ, WE), Tile(TZ, WE)]
    );
    assert!(tiles_from_string("8z").is_err());
    assert!(tiles_from_string("123").is_err());
    assert!(tiles_from_string("m1").is_err());
    assert_eq!(tiles_to_string(&tiles[..2]), "1m 2m");
    assert_eq!(tiles_from_tokens("1m ton").unwrap(), vec![Tile(TM, 1), Tile(TZ, WE)]);
}
