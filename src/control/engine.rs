use super::call::{CallDetector, RonDetector};
use super::common::is_full_set;
use super::error::{RoundError, RoundResult};
use crate::hand::{completable_tiles, is_complete};
use crate::model::*;
use crate::util::misc::vec_to_string;
use crate::{debug, info};

use AnnounceType::{CallableRon, CompleteRon, CompleteTsumo, GameOver, HandTsumo, HandTsumoField};
use RoundError::*;

// 局の進行 (ツモ,打牌,手番の移動,宣言の割り込み,和了判定)
// RoundStateの排他制御は呼び出し側(RoundController)で行う
pub struct RoundEngine {
    detector: Box<dyn CallDetector>,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(Box::new(RonDetector))
    }
}

impl std::fmt::Debug for RoundEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEngine").finish_non_exhaustive()
    }
}

impl RoundEngine {
    pub fn new(detector: Box<dyn CallDetector>) -> Self {
        Self { detector }
    }

    // 配牌を行い,最初の人間のプレイヤーのツモ番まで進める
    pub fn start(
        &self,
        stg: &mut RoundState,
        wall: Vec<Tile>,
        players: [Player; SEAT],
    ) -> RoundResult<TurnOutcome> {
        if stg.is_on_game() {
            return Err(AlreadyStarted);
        }
        if wall.len() != WALL_SIZE {
            return Err(Precondition(format!("invalid wall size: {}", wall.len())));
        }
        if !is_full_set(&wall) {
            return Err(Precondition("wall is not a full tile set".to_string()));
        }
        for (i, pl) in players.iter().enumerate() {
            if pl.name.is_empty() {
                return Err(Precondition(format!("empty player name: seat {}", i)));
            }
            if players[..i].iter().any(|p| p.name == pl.name) {
                return Err(Precondition(format!("duplicate player: {}", pl.name)));
            }
        }

        event_new(stg, wall, players);
        info!("round start: {}", vec_to_string(&stg.players));
        Ok(self.on_phase(stg))
    }

    // 打牌 (ツモ切り)
    pub fn discard(&self, stg: &mut RoundState) -> RoundResult<TurnOutcome> {
        let seat = discard_phase_seat(stg)?;
        let t = stg.drawn.take().ok_or(InvalidPhase("no drawn tile"))?;
        stg.is_first_phase = false;
        Ok(self.after_discard(stg, seat, t, true))
    }

    // 打牌 (手出し) ツモ牌が指定された場合はツモ切り
    pub fn discard_tile(&self, stg: &mut RoundState, target: Tile) -> RoundResult<TurnOutcome> {
        let seat = discard_phase_seat(stg)?;
        let drawn = stg.drawn.ok_or(InvalidPhase("no drawn tile"))?;
        if target == drawn {
            return self.discard(stg);
        }

        let s = seat.index();
        if !stg.hands[s].remove(target) {
            return Err(InvalidInput(format!("{} is not in hand", target)));
        }
        stg.hands[s].add(drawn);
        stg.drawn = None;
        stg.is_first_phase = false;

        // 手変わりがあったので聴牌判定 (宣言による中断より先に更新)
        stg.waits[s] = completable_tiles(&stg.hands[s].concealed);
        Ok(self.after_discard(stg, seat, target, false))
    }

    // 和了 (ロン)
    pub fn complete_ron(&self, stg: &mut RoundState, name: &str) -> RoundResult<TurnOutcome> {
        let claimant = stg
            .seat_of(name)
            .ok_or_else(|| Precondition(format!("unknown player: {}", name)))?;
        let (discard, from) = match &stg.phase {
            Phase::AwaitingCallDecision { discard, from, .. } => (*discard, *from),
            Phase::Idle => return Err(NotStarted),
            _ => return Err(InvalidPhase("no discard to claim")),
        };

        // 宣言したプレイヤーを手番にして判定 失敗した場合は打牌したプレイヤーに戻す
        let prev = stg.active;
        stg.active = claimant;
        let reason = if !is_complete(&stg.hand(claimant).with(discard)) {
            Some(FoulReason::NotComplete)
        } else if stg.is_in_river(claimant, discard) {
            Some(FoulReason::Furiten)
        } else {
            None
        };
        if let Some(reason) = reason {
            stg.active = prev;
            return Ok(foul(claimant, reason));
        }

        let end = RoundEnd::Ron {
            winner: claimant,
            from,
        };
        stg.phase = Phase::RoundOver { end };
        info!("ron: {} from {} ({})", claimant, from, discard);
        Ok(TurnOutcome::Completed {
            end,
            announce: Announce::new(CompleteRon, claimant),
        })
    }

    // 和了 (ツモ)
    pub fn complete_tsumo(&self, stg: &mut RoundState) -> RoundResult<TurnOutcome> {
        let seat = discard_phase_seat(stg)?;
        let drawn = stg.drawn.ok_or(InvalidPhase("no drawn tile"))?;
        if !is_complete(&stg.hand(seat).with(drawn)) {
            return Ok(foul(seat, FoulReason::NotComplete));
        }

        let end = RoundEnd::Tsumo { winner: seat };
        stg.phase = Phase::RoundOver { end };
        info!("tsumo: {} ({})", seat, drawn);
        Ok(TurnOutcome::Completed {
            end,
            announce: Announce::new(CompleteTsumo, seat),
        })
    }

    // 宣言せずに次のプレイヤーの手番へ
    pub fn proceed(&self, stg: &mut RoundState) -> RoundResult<TurnOutcome> {
        let from = match &stg.phase {
            Phase::AwaitingCallDecision { from, .. } => *from,
            Phase::Idle => return Err(NotStarted),
            _ => return Err(InvalidPhase("no pending call decision")),
        };
        debug!("pass: discard by {}", from);
        stg.active = from.next();
        Ok(self.on_phase(stg))
    }

    // 局の強制終了 開始されていない場合はNone
    pub fn end(&self, stg: &mut RoundState) -> Option<TurnOutcome> {
        if stg.phase == Phase::Idle {
            return None;
        }
        let seat = stg.active;
        *stg = RoundState::default();
        info!("round end");
        Some(TurnOutcome::Ended {
            announce: Announce::new(AnnounceType::Ended, seat),
        })
    }

    // 場情報,捨て牌の表示 状態は変化しない
    pub fn info(
        &self,
        stg: &RoundState,
        field: bool,
        river: bool,
        river_all: bool,
    ) -> RoundResult<TurnOutcome> {
        if stg.phase == Phase::Idle {
            return Err(NotStarted);
        }
        let tp = AnnounceType::from_info(field, river, river_all)
            .ok_or_else(|| InvalidInput("no information requested".to_string()))?;
        Ok(TurnOutcome::Info {
            announce: Announce::new(tp, stg.active),
        })
    }

    // 指定したプレイヤーの手牌の表示 状態は変化しない
    pub fn hand(&self, stg: &RoundState, name: &str) -> RoundResult<TurnOutcome> {
        if stg.phase == Phase::Idle {
            return Err(NotStarted);
        }
        let seat = stg
            .seat_of(name)
            .ok_or_else(|| Precondition(format!("unknown player: {}", name)))?;
        Ok(TurnOutcome::Info {
            announce: Announce::new(AnnounceType::Hand, seat),
        })
    }

    // 巡目ごとの処理
    // COMはツモ切りして次巡へ. 人間のプレイヤーのツモ番,宣言可能な捨て牌,流局のいずれかで停止
    fn on_phase(&self, stg: &mut RoundState) -> TurnOutcome {
        loop {
            if stg.remaining == 0 {
                let end = RoundEnd::Exhausted;
                stg.phase = Phase::RoundOver { end };
                stg.drawn = None;
                info!("round over: wall exhausted");
                return TurnOutcome::RoundOver {
                    announce: Announce::new(GameOver, stg.active),
                };
            }

            let seat = stg.active;
            let t = event_deal(stg);
            if stg.player(seat).is_com() {
                stg.drawn = None;
                if let Some(o) = self.discard_core(stg, seat, t, true) {
                    return o;
                }
                stg.active = seat.next();
                continue;
            }

            stg.phase = Phase::AwaitingDiscard { seat };
            let tp = if stg.is_first_phase {
                HandTsumoField
            } else {
                HandTsumo
            };
            return TurnOutcome::Advanced {
                announce: Announce::new(tp, seat),
            };
        }
    }

    fn after_discard(
        &self,
        stg: &mut RoundState,
        seat: Wind,
        tile: Tile,
        is_drawn: bool,
    ) -> TurnOutcome {
        if let Some(o) = self.discard_core(stg, seat, tile, is_drawn) {
            return o;
        }
        stg.active = seat.next();
        self.on_phase(stg)
    }

    // 捨て牌を河に置き,他家(COM以外)の宣言を確認
    // 宣言可能なプレイヤーがいる場合は手番を進めずに中断
    fn discard_core(
        &self,
        stg: &mut RoundState,
        seat: Wind,
        tile: Tile,
        is_drawn: bool,
    ) -> Option<TurnOutcome> {
        event_discard(stg, seat, tile, is_drawn);

        let mut claims = vec![];
        for w in seat.others() {
            if stg.player(w).is_com() {
                continue;
            }
            for claim in self.detector.detect(stg, w, tile) {
                claims.push(CallClaim { seat: w, claim });
            }
        }
        if claims.is_empty() {
            return None;
        }

        debug!("callable: {} by {} {}", tile, seat, vec_to_string(&claims));
        let target = claims[0].seat;
        stg.phase = Phase::AwaitingCallDecision {
            discard: tile,
            from: seat,
            claims: claims.clone(),
        };
        Some(TurnOutcome::Suspended {
            discard: tile,
            claims,
            announce: Announce::new(CallableRon, target),
        })
    }
}

fn event_new(stg: &mut RoundState, wall: Vec<Tile>, players: [Player; SEAT]) {
    *stg = RoundState::default();
    stg.dead_wall = DeadWall::new(wall[DRAWABLE..].to_vec());
    for w in Wind::ALL {
        let s = w.index();
        stg.hands[s] = Hand::from_tiles(&wall[s * HAND_SIZE..(s + 1) * HAND_SIZE]);
        // COMはツモ切り専用なので和了牌は計算しない
        if !players[s].is_com() {
            stg.waits[s] = completable_tiles(&stg.hands[s].concealed);
        }
    }
    stg.wall = wall;
    stg.cursor = HAND_SIZE * SEAT;
    stg.remaining = DRAWABLE - stg.cursor;
    stg.players = players;
    stg.prevalent_wind = Wind::East;
    stg.active = Wind::East;
    stg.is_first_phase = true;
}

fn event_deal(stg: &mut RoundState) -> Tile {
    debug_assert!(stg.cursor < DRAWABLE);
    let t = stg.wall[stg.cursor];
    stg.cursor += 1;
    stg.remaining -= 1;
    stg.drawn = Some(t);
    t
}

fn event_discard(stg: &mut RoundState, seat: Wind, tile: Tile, is_drawn: bool) {
    stg.rivers[seat.index()].push(Discard { tile, is_drawn });
    stg.last_discard = Some((seat, tile));
}

fn foul(seat: Wind, reason: FoulReason) -> TurnOutcome {
    let foul = Foul { seat, reason };
    info!("{}", foul);
    TurnOutcome::Fouled { foul }
}

// 打牌待ちの座席
fn discard_phase_seat(stg: &RoundState) -> RoundResult<Wind> {
    match &stg.phase {
        Phase::AwaitingDiscard { seat } => Ok(*seat),
        Phase::Idle => Err(NotStarted),
        Phase::AwaitingCallDecision { .. } => Err(InvalidPhase("call decision is pending")),
        Phase::RoundOver { .. } => Err(InvalidPhase("round is over")),
    }
}
