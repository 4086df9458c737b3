use super::*;

// 実況タイプ
// エンジンは文字列を生成しない. どの情報が公開されたかをReveals経由で表示側に伝える.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnounceType {
    CompleteRon,    // ロン和了
    CompleteTsumo,  // ツモ和了
    GameOver,       // 流局
    CallableRon,    // ロン可能
    Hand,           // 手牌 (ツモ牌抜き)
    HandTsumo,      // 手牌 (ツモ牌込み)
    HandTsumoField, // 手牌と場情報 (ツモ牌込み)
    Field,          // 場情報
    River,          // 捨て牌
    RiverAll,       // 全員の捨て牌
    FieldRiver,     // 場情報と捨て牌
    FieldRiverAll,  // 場情報と全員の捨て牌
    Ended,          // 強制終了
}

// 公開する情報のフラグ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Reveals {
    pub field: bool,        // 場風,自風,ドラ表示牌,残り枚数
    pub river: bool,        // 対象プレイヤーの捨て牌
    pub river_all: bool,    // 全員の捨て牌
    pub hand: bool,         // 手牌
    pub drawn: bool,        // ツモ牌
    pub last_discard: bool, // 直前の捨て牌 (当たり牌)
    pub ura_dora: bool,     // 裏ドラ表示牌
}

impl AnnounceType {
    pub fn reveals(self) -> Reveals {
        use AnnounceType::*;
        let mut r = Reveals::default();
        match self {
            CompleteRon => {
                r.hand = true;
                r.last_discard = true;
                r.ura_dora = true;
            }
            CompleteTsumo => {
                r.field = true;
                r.river = true;
                r.hand = true;
                r.drawn = true;
                r.ura_dora = true;
            }
            GameOver => {
                r.field = true;
                r.river = true;
                r.hand = true;
            }
            CallableRon => {
                r.field = true;
                r.hand = true;
                r.last_discard = true;
            }
            Hand => r.hand = true,
            HandTsumo => {
                r.hand = true;
                r.drawn = true;
            }
            HandTsumoField => {
                r.field = true;
                r.hand = true;
                r.drawn = true;
            }
            Field => r.field = true,
            River => r.river = true,
            RiverAll => r.river_all = true,
            FieldRiver => {
                r.field = true;
                r.river = true;
            }
            FieldRiverAll => {
                r.field = true;
                r.river_all = true;
            }
            Ended => {}
        }
        r
    }

    // 情報表示要求のフラグから実況タイプを選択
    pub fn from_info(field: bool, river: bool, river_all: bool) -> Option<Self> {
        use AnnounceType::*;
        Some(match (field, river, river_all) {
            (true, _, true) => FieldRiverAll,
            (false, _, true) => RiverAll,
            (true, true, false) => FieldRiver,
            (true, false, false) => Field,
            (false, true, false) => River,
            (false, false, false) => return None,
        })
    }
}

// 実況イベント
// seatは情報の対象となる座席 (手牌,ツモ牌,捨て牌は基本的にこの座席のもの)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Announce {
    pub announce_type: AnnounceType,
    pub seat: Wind,
    pub reveals: Reveals,
}

impl Announce {
    pub fn new(announce_type: AnnounceType, seat: Wind) -> Self {
        Self {
            announce_type,
            seat,
            reveals: announce_type.reveals(),
        }
    }
}

#[test]
fn test_reveals() {
    let r = AnnounceType::HandTsumoField.reveals();
    assert!(r.field && r.hand && r.drawn);
    assert!(!r.river && !r.last_discard);

    let r = AnnounceType::CompleteRon.reveals();
    assert!(r.last_discard && r.ura_dora);
    assert!(!r.drawn);

    assert_eq!(AnnounceType::Ended.reveals(), Reveals::default());
}

#[test]
fn test_from_info() {
    use AnnounceType::*;
    assert_eq!(AnnounceType::from_info(true, false, false), Some(Field));
    assert_eq!(AnnounceType::from_info(true, true, false), Some(FieldRiver));
    assert_eq!(AnnounceType::from_info(false, false, true), Some(RiverAll));
    assert_eq!(AnnounceType::from_info(false, false, false), None);
}
