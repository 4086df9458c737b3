use crate::model::*;

// 捨て牌に対する宣言の判定
// 判定対象はCOM以外かつ打牌者以外のプレイヤー
pub trait CallDetector: Send + Sync {
    fn detect(&self, stg: &RoundState, seat: Wind, tile: Tile) -> Vec<Claim>;
}

// ロンのみを判定 (チー,ポン,カンは未対応)
#[derive(Debug, Default, Clone, Copy)]
pub struct RonDetector;

impl CallDetector for RonDetector {
    fn detect(&self, stg: &RoundState, seat: Wind, tile: Tile) -> Vec<Claim> {
        if stg.waits(seat).contains(&tile) {
            vec![Claim::Ron]
        } else {
            vec![]
        }
    }
}

#[test]
fn test_ron_detector() {
    let mut stg = RoundState::default();
    stg.waits[Wind::South.index()] = vec![Tile(TP, 5)];

    let d = RonDetector;
    assert_eq!(d.detect(&stg, Wind::South, Tile(TP, 5)), vec![Claim::Ron]);
    assert!(d.detect(&stg, Wind::South, Tile(TP, 4)).is_empty());
    assert!(d.detect(&stg, Wind::West, Tile(TP, 5)).is_empty());
}
