use super::*;

// 座席 (=自風)
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Wind {
    #[default]
    East,
    South,
    West,
    North,
}

use Wind::*;

impl Wind {
    pub const ALL: [Wind; SEAT] = [East, South, West, North];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % SEAT]
    }

    // 次の手番 (北の次は東)
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    // 自分を除いた他の3席を手番順に返却
    pub fn others(self) -> impl Iterator<Item = Wind> {
        (1..SEAT).map(move |i| Self::from_index(self.index() + i))
    }

    // 対応する風牌
    #[inline]
    pub fn to_tile(self) -> Tile {
        Tile(TZ, WE + self.index())
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ['E', 'S', 'W', 'N'][self.index()])
    }
}

#[test]
fn test_wind_cycle() {
    assert_eq!(East.next(), South);
    assert_eq!(North.next(), East);
    assert!(East < South && West < North);
    let others: Vec<Wind> = West.others().collect();
    assert_eq!(others, vec![North, East, South]);
    assert_eq!(South.to_tile(), Tile(TZ, WS));
}
