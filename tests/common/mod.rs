#![allow(dead_code)]

use janbot::control::string::tiles_from_string;
use janbot::control::wall::create_wall_with;
use janbot::model::*;

// 聴牌していない手牌 (ツモ切りを続けても聴牌しない)
pub const NOTEN: &str = "147m147p147s1234z";

pub fn tiles(exp: &str) -> Vec<Tile> {
    tiles_from_string(exp).unwrap()
}

// 各席の配牌とツモ山の先頭を指定した牌山
pub fn wall(hands: [&str; SEAT], draws: &str) -> Vec<Tile> {
    let hands = hands.map(tiles);
    create_wall_with(&hands, &tiles(draws), &[], 0).unwrap()
}

pub fn players(humans: [Option<&str>; SEAT]) -> [Player; SEAT] {
    let mut n = 0;
    humans.map(|h| match h {
        Some(name) => Player::human(name),
        None => {
            n += 1;
            Player::com(&format!("COM_{:02}", n))
        }
    })
}

pub fn assert_wall_invariant(stg: &RoundState) {
    assert!(stg.cursor <= DRAWABLE);
    assert_eq!(stg.remaining, DRAWABLE - stg.cursor);
    assert_eq!(stg.dead_wall.len(), DEAD_WALL_SIZE);
    for w in Wind::ALL {
        assert_eq!(stg.hand(w).size(), HAND_SIZE);
    }
}
