use super::*;
use crate::util::misc::vec_to_string;

// 局の進行状態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase")]
pub enum Phase {
    #[default]
    Idle,
    // ツモ後,打牌待ち
    AwaitingDiscard { seat: Wind },
    // 捨て牌に対する宣言待ち 手番は打牌したプレイヤーのまま
    AwaitingCallDecision {
        discard: Tile,
        from: Wind,
        claims: Vec<CallClaim>,
    },
    RoundOver { end: RoundEnd },
}

impl Phase {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Phase::AwaitingDiscard { .. } | Phase::AwaitingCallDecision { .. }
        )
    }
}

// 王牌 (14枚)
// [0..5]: ドラ表示牌, [5..10]: 裏ドラ表示牌, [10..14]: 嶺上牌
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeadWall {
    tiles: Vec<Tile>,
    n_dora: usize, // 公開されているドラ表示牌の数
}

impl DeadWall {
    pub fn new(tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), DEAD_WALL_SIZE);
        Self { tiles, n_dora: 1 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // 公開済みのドラ表示牌
    pub fn doras(&self) -> &[Tile] {
        if self.tiles.is_empty() {
            return &[];
        }
        &self.tiles[..self.n_dora]
    }

    // 和了時に公開される裏ドラ表示牌
    pub fn ura_doras(&self) -> &[Tile] {
        if self.tiles.is_empty() {
            return &[];
        }
        &self.tiles[DORA_SLOT..DORA_SLOT + self.n_dora]
    }

    pub fn replacements(&self) -> &[Tile] {
        if self.tiles.is_empty() {
            return &[];
        }
        &self.tiles[DORA_SLOT + URA_DORA_SLOT..]
    }
}

// 局の情報
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundState {
    pub wall: Vec<Tile>,            // 牌山全体 (=136) 末尾14枚は王牌
    pub cursor: usize,              // 次にツモる牌のindex
    pub remaining: usize,           // 牌山残り枚数 (= 122 - cursor)
    pub dead_wall: DeadWall,        // 王牌
    pub prevalent_wind: Wind,       // 場風
    pub active: Wind,               // 手番のプレイヤー
    pub players: [Player; SEAT],    // 各席のプレイヤー
    pub hands: [Hand; SEAT],        // 各席の手牌 (ツモ牌は含まない)
    pub rivers: [Vec<Discard>; SEAT], // 各席の捨て牌
    pub waits: [Vec<Tile>; SEAT],   // 各席の和了牌 (手変わりのたびに更新)
    pub drawn: Option<Tile>,        // 手番のプレイヤーのツモ牌
    pub last_discard: Option<(Wind, Tile)>, // 直前の捨て牌
    pub is_first_phase: bool,       // 人間のプレイヤーの初巡
    pub phase: Phase,
}

impl RoundState {
    #[inline]
    pub fn player(&self, seat: Wind) -> &Player {
        &self.players[seat.index()]
    }

    #[inline]
    pub fn hand(&self, seat: Wind) -> &Hand {
        &self.hands[seat.index()]
    }

    #[inline]
    pub fn river(&self, seat: Wind) -> &[Discard] {
        &self.rivers[seat.index()]
    }

    #[inline]
    pub fn waits(&self, seat: Wind) -> &[Tile] {
        &self.waits[seat.index()]
    }

    pub fn seat_of(&self, name: &str) -> Option<Wind> {
        Wind::ALL
            .iter()
            .copied()
            .find(|&w| self.players[w.index()].name == name)
    }

    #[inline]
    pub fn is_on_game(&self) -> bool {
        self.phase.is_active()
    }

    // 自分の捨て牌に含まれているか (フリテン判定用)
    pub fn is_in_river(&self, seat: Wind, t: Tile) -> bool {
        self.river(seat).iter().any(|d| d.tile == t)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "prevalent: {}, active: {}, remaining: {}, doras: {}, phase: {:?}",
            self.prevalent_wind,
            self.active,
            self.remaining,
            vec_to_string(self.dead_wall.doras()),
            self.phase,
        )?;
        let boader = "-".repeat(80);
        write!(f, "{}", boader)?;
        for w in Wind::ALL {
            writeln!(f)?;
            writeln!(f, "{} {}", w, self.player(w))?;
            writeln!(f, "hand: {}", self.hand(w))?;
            writeln!(f, "waits: {}", vec_to_string(self.waits(w)))?;
            writeln!(f, "river: {}", vec_to_string(self.river(w)))?;
            write!(f, "{}", boader)?;
        }
        Ok(())
    }
}

#[test]
fn test_dead_wall_layout() {
    let tiles: Vec<Tile> = (0..DEAD_WALL_SIZE).map(Tile::from_index).collect();
    let dw = DeadWall::new(tiles.clone());
    assert_eq!(dw.len(), 14);
    assert_eq!(dw.doras(), &tiles[0..1]);
    assert_eq!(dw.ura_doras(), &tiles[5..6]);
    assert_eq!(dw.replacements(), &tiles[10..14]);
    assert!(DeadWall::default().doras().is_empty());
}
