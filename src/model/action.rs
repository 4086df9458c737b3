use super::*;

// 他家の捨て牌に対して可能な宣言
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Claim {
    Ron,
    Chi,
    Pon,
    Kan, // 明槓 (大明槓)
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Claim::Ron => "ron",
            Claim::Chi => "chi",
            Claim::Pon => "pon",
            Claim::Kan => "kan",
        };
        write!(f, "{}", s)
    }
}

// 宣言可能な座席と宣言の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallClaim {
    pub seat: Wind,
    pub claim: Claim,
}

impl fmt::Display for CallClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.seat, self.claim)
    }
}

// チョンボの理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FoulReason {
    NotComplete, // 和了形ではない
    Furiten,     // 自分の捨て牌で和了しようとした
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Foul {
    pub seat: Wind,
    pub reason: FoulReason,
}

impl fmt::Display for Foul {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = match self.reason {
            FoulReason::NotComplete => "not completed",
            FoulReason::Furiten => "furiten",
        };
        write!(f, "chombo by {} ({})", self.seat, r)
    }
}

// 局の終了理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundEnd {
    Ron { winner: Wind, from: Wind },
    Tsumo { winner: Wind },
    Exhausted, // 流局 (牌山が尽きた)
}

// 各操作の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TurnOutcome {
    // 人間のプレイヤーのツモ番で停止 (打牌待ち)
    Advanced { announce: Announce },
    // 捨て牌に対して宣言が可能なので手番を進めずに停止
    Suspended {
        discard: Tile,
        claims: Vec<CallClaim>,
        announce: Announce,
    },
    // 和了
    Completed { end: RoundEnd, announce: Announce },
    // 流局
    RoundOver { announce: Announce },
    // チョンボ 局は継続
    Fouled { foul: Foul },
    // 局の強制終了
    Ended { announce: Announce },
    // 状態に変化のない情報の表示
    Info { announce: Announce },
}

impl TurnOutcome {
    pub fn announce(&self) -> Option<&Announce> {
        match self {
            Self::Advanced { announce }
            | Self::Suspended { announce, .. }
            | Self::Completed { announce, .. }
            | Self::RoundOver { announce }
            | Self::Ended { announce }
            | Self::Info { announce } => Some(announce),
            Self::Fouled { .. } => None,
        }
    }

    // 局が終了したかどうか
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed { .. } | Self::RoundOver { .. } | Self::Ended { .. }
        )
    }
}
