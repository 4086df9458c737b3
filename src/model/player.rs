use super::*;
use crate::control::common::{count_tile, dec_tile, inc_tile, tiles_from_tile_table};
use crate::util::misc::vec_to_string;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerType {
    #[default]
    Human,
    Com, // ツモ切り専用
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub player_type: PlayerType,
}

impl Player {
    pub fn human(name: &str) -> Self {
        Self {
            name: name.to_string(),
            player_type: PlayerType::Human,
        }
    }

    pub fn com(name: &str) -> Self {
        Self {
            name: name.to_string(),
            player_type: PlayerType::Com,
        }
    }

    #[inline]
    pub fn is_com(&self) -> bool {
        self.player_type == PlayerType::Com
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.player_type {
            PlayerType::Human => write!(f, "{}", self.name),
            PlayerType::Com => write!(f, "{}(COM)", self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Chi,    // 順子
    Pon,    // 刻子
    Minkan, // 明槓
    Ankan,  // 暗槓
}

// 副露した面子 (槓子も1面子として数える)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.meld_type == MeldType::Ankan {
            let t = self.tiles[0];
            return write!(f, "[#{}{}#]", t, t);
        }
        let s: Vec<String> = self.tiles.iter().map(|t| t.to_string()).collect();
        write!(f, "[{}]", s.join(""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discard {
    pub tile: Tile,
    pub is_drawn: bool, // ツモ切りフラグ
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tile)
    }
}

// 手牌 (門前の牌 + 副露)
// ツモ牌はRoundState.drawnで別に管理するので門前の牌と副露の合計は常に13枚分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    pub concealed: TileTable,
    pub melds: Vec<Meld>,
}

impl Hand {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut hand = Self::default();
        for &t in tiles {
            hand.add(t);
        }
        hand
    }

    #[inline]
    pub fn count(&self, t: Tile) -> usize {
        count_tile(&self.concealed, t)
    }

    #[inline]
    pub fn add(&mut self, t: Tile) {
        inc_tile(&mut self.concealed, t);
    }

    // 手牌にない牌の場合はfalseを返却して何もしない
    pub fn remove(&mut self, t: Tile) -> bool {
        if self.count(t) == 0 {
            return false;
        }
        dec_tile(&mut self.concealed, t);
        true
    }

    // 門前の牌の枚数
    pub fn len(&self) -> usize {
        self.concealed.iter().map(|tr| tr.iter().sum::<usize>()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // 門前の牌 (昇順)
    pub fn tiles(&self) -> Vec<Tile> {
        tiles_from_tile_table(&self.concealed)
    }

    // 指定牌を加えた門前の牌
    pub fn with(&self, t: Tile) -> TileTable {
        let mut tt = self.concealed;
        inc_tile(&mut tt, t);
        tt
    }

    // 門前の牌 + 3 * 副露数
    pub fn size(&self) -> usize {
        self.len() + 3 * self.melds.len()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles().iter().map(|t| t.to_string()).collect();
        write!(f, "{}", tiles.join(" "))?;
        if !self.melds.is_empty() {
            write!(f, "  {}", vec_to_string(&self.melds))?;
        }
        Ok(())
    }
}

#[test]
fn test_hand_add_remove() {
    let mut h = Hand::from_tiles(&[Tile(TM, 1), Tile(TM, 1), Tile(TZ, DR)]);
    assert_eq!(h.len(), 3);
    assert_eq!(h.count(Tile(TM, 1)), 2);
    assert!(h.remove(Tile(TM, 1)));
    assert!(!h.remove(Tile(TP, 1)));
    assert_eq!(h.tiles(), vec![Tile(TM, 1), Tile(TZ, DR)]);
    assert_eq!(h.with(Tile(TZ, DR))[TZ][DR], 2);
    assert_eq!(h.count(Tile(TZ, DR)), 1);
}

#[test]
fn test_hand_size_with_melds() {
    let mut h = Hand::from_tiles(&[Tile(TS, 2); 10]);
    h.melds.push(Meld {
        meld_type: MeldType::Ankan,
        tiles: vec![Tile(TZ, WE); 4],
    });
    assert_eq!(h.size(), 13);
    assert_eq!(h.melds[0].to_string(), "[#tonton#]");
}
