use serde::{de, ser};

use super::*;
use crate::control::string::tile_from_token;

const HONOR_NAMES: [&str; 8] = ["", "ton", "nan", "sha", "pei", "haku", "hatsu", "chun"];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

impl Tile {
    // 0~33の通し番号から生成 (萬子,筒子,索子,字牌の順)
    #[inline]
    pub fn from_index(i: usize) -> Self {
        assert!(i < KIND, "invalid tile index: {}", i);
        Self(i / 9, i % 9 + 1)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 * 9 + self.1 - 1
    }

    // 34種すべての牌 (昇順)
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..KIND).map(Tile::from_index)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        match self.0 {
            TM | TP | TS => (1..=9).contains(&self.1),
            TZ => (WE..=DR).contains(&self.1),
            _ => false,
        }
    }

    // 字牌
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.0 == TZ
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hornor() {
            write!(f, "{}", HONOR_NAMES.get(self.1).copied().unwrap_or("?"))
        } else {
            let tp = ['m', 'p', 's'].get(self.0).copied().unwrap_or('?');
            write!(f, "{}{}", self.1, tp)
        }
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile token")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        tile_from_token(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
// 牌の種類ごとの枚数 table[type][number] (number=0は未使用)
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[test]
fn test_tile_index() {
    for (i, t) in Tile::all().enumerate() {
        assert!(t.is_valid());
        assert_eq!(t.index(), i);
        assert_eq!(Tile::from_index(i), t);
    }
    assert_eq!(Tile::all().count(), KIND);
    assert_eq!(Tile::from_index(27), Tile(TZ, WE));
    assert_eq!(Tile::from_index(33), Tile(TZ, DR));
    assert!(!Tile(TZ, 8).is_valid());
    assert!(!Tile(TM, 0).is_valid());
}

#[test]
fn test_tile_display() {
    assert_eq!(Tile(TM, 1).to_string(), "1m");
    assert_eq!(Tile(TS, 9).to_string(), "9s");
    assert_eq!(Tile(TZ, WE).to_string(), "ton");
    assert_eq!(Tile(TZ, DG).to_string(), "hatsu");
    assert_eq!(Tile(5, 1).to_string(), "1?");
    assert_eq!(Tile(TZ, 9).to_string(), "?");
    assert!(Tile(TM, 9) < Tile(TP, 1));
    assert!(Tile(TS, 9) < Tile(TZ, WE));
}

#[test]
fn test_tile_serde() {
    let tiles = vec![Tile(TP, 5), Tile(TZ, DR)];
    let s = serde_json::to_string(&tiles).unwrap();
    assert_eq!(s, r#"["5p","chun"]"#);
    let back: Vec<Tile> = serde_json::from_str(&s).unwrap();
    assert_eq!(back, tiles);
    assert!(serde_json::from_str::<Tile>(r#""0z""#).is_err());
}
