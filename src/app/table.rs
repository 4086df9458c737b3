use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::prelude::*;

use super::record::{RecordStore, RoundRecord};
use crate::control::string::tile_from_token;
use crate::control::wall::create_wall;
use crate::control::{RoundController, RoundError, RoundResult};
use crate::model::*;
use crate::{debug, warn};

const NPC_NAMES: [&str; SEAT - 1] = ["COM_01", "COM_02", "COM_03"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStatus {
    #[default]
    Idle,
    PlayingSolo,
}

// 卓 (局の開始,リプレイ,入力の変換)
// 状態の確認はRoundControllerに触れる前にstatusで行う
pub struct Table {
    status: Mutex<TableStatus>,
    controller: RoundController,
    store: Box<dyn RecordStore>,
    rng: Mutex<StdRng>,
}

impl Table {
    pub fn new(store: Box<dyn RecordStore>, seed: u64) -> Self {
        Self {
            status: Mutex::new(TableStatus::Idle),
            controller: RoundController::default(),
            store,
            rng: Mutex::new(SeedableRng::seed_from_u64(seed)),
        }
    }

    #[inline]
    pub fn status(&self) -> TableStatus {
        *self.lock_status()
    }

    #[inline]
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    // 開始 (ソロ)
    pub fn on_start_solo(&self, name: &str) -> RoundResult<TurnOutcome> {
        if name.is_empty() {
            return Err(RoundError::Precondition("empty player name".to_string()));
        }
        self.begin()?;

        // 牌山生成と席決め
        let rec = {
            let mut rng = self.lock_rng();
            let wall = create_wall(rng.gen());
            match create_player_table(&[name], &mut *rng) {
                Ok(players) => RoundRecord { wall, players },
                Err(e) => {
                    *self.lock_status() = TableStatus::Idle;
                    return Err(e);
                }
            }
        };

        // リプレイ用に保存
        if let Err(e) = rec.save(self.store.as_ref()) {
            warn!("failed to save record: {}", e);
        }

        self.settle(self.controller.start(rec.wall, rec.players))
    }

    // 直前の局をやり直す
    pub fn on_replay(&self, name: &str) -> RoundResult<TurnOutcome> {
        if name.is_empty() {
            return Err(RoundError::Precondition("empty player name".to_string()));
        }
        self.begin()?;

        let rec = RoundRecord::load(self.store.as_ref()).and_then(|mut rec| {
            rec.reseat(name)?;
            Ok(rec)
        });
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) => {
                *self.lock_status() = TableStatus::Idle;
                return Err(e);
            }
        };

        self.settle(self.controller.start(rec.wall, rec.players))
    }

    // 打牌 tokenがNoneの場合はツモ切り
    // 牌の指定ミスは何もせずにNoneを返却
    pub fn on_discard(&self, token: Option<&str>) -> RoundResult<Option<TurnOutcome>> {
        self.check_playing()?;

        let res = match token {
            None => self.controller.discard(),
            Some("") => return Ok(None),
            Some(token) => {
                tile_from_token(token).and_then(|t| self.controller.discard_tile(t))
            }
        };
        match res {
            Ok(o) => self.settle(Ok(o)).map(Some),
            Err(e) if e.is_ignorable() => {
                debug!("ignored: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn on_ron(&self, name: &str) -> RoundResult<TurnOutcome> {
        self.check_playing()?;
        self.settle(self.controller.complete_ron(name))
    }

    pub fn on_tsumo(&self) -> RoundResult<TurnOutcome> {
        self.check_playing()?;
        self.settle(self.controller.complete_tsumo())
    }

    pub fn on_continue(&self) -> RoundResult<TurnOutcome> {
        self.check_playing()?;
        self.settle(self.controller.on_continue())
    }

    pub fn on_info(&self, field: bool, river: bool, river_all: bool) -> RoundResult<TurnOutcome> {
        self.check_playing()?;
        self.controller.info(field, river, river_all)
    }

    pub fn on_hand(&self, name: &str) -> RoundResult<TurnOutcome> {
        self.check_playing()?;
        self.controller.hand(name)
    }

    // 終了 開始されていない場合はNone
    pub fn on_end(&self) -> Option<TurnOutcome> {
        *self.lock_status() = TableStatus::Idle;
        self.controller.end()
    }

    fn begin(&self) -> RoundResult<()> {
        let mut status = self.lock_status();
        if *status != TableStatus::Idle {
            return Err(RoundError::AlreadyStarted);
        }
        *status = TableStatus::PlayingSolo;
        Ok(())
    }

    fn check_playing(&self) -> RoundResult<()> {
        if self.status() == TableStatus::Idle {
            return Err(RoundError::NotStarted);
        }
        Ok(())
    }

    // 局が終了していればIdleに戻す
    fn settle<T>(&self, res: RoundResult<T>) -> RoundResult<T> {
        if !self.controller.is_active() {
            *self.lock_status() = TableStatus::Idle;
        }
        res
    }

    fn lock_status(&self) -> MutexGuard<'_, TableStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// 席決め 風をシャッフルして参加プレイヤーを座らせ,残りをCOMで埋める
pub fn create_player_table<R: Rng + ?Sized>(
    names: &[&str],
    rng: &mut R,
) -> RoundResult<[Player; SEAT]> {
    if names.is_empty() || names.len() > SEAT {
        return Err(RoundError::Precondition(format!(
            "invalid number of players: {}",
            names.len()
        )));
    }

    let mut winds = Wind::ALL.to_vec();
    winds.shuffle(rng);

    let mut players: [Player; SEAT] = Default::default();
    for (i, w) in winds.into_iter().enumerate() {
        players[w.index()] = match names.get(i) {
            Some(name) => Player::human(name),
            None => Player::com(NPC_NAMES[i - names.len()]),
        };
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::record::MemoryStore;

    fn table() -> Table {
        Table::new(Box::new(MemoryStore::default()), 0)
    }

    #[test]
    fn test_create_player_table() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(0);
        let players = create_player_table(&["alice"], &mut rng).unwrap();
        assert_eq!(players.iter().filter(|p| !p.is_com()).count(), 1);
        assert!(players.contains(&Player::human("alice")));
        for name in NPC_NAMES {
            assert!(players.contains(&Player::com(name)));
        }
        assert!(create_player_table(&[], &mut rng).is_err());
    }

    #[test]
    fn test_not_started() {
        let t = table();
        assert_eq!(t.on_discard(None), Err(RoundError::NotStarted));
        assert_eq!(t.on_tsumo(), Err(RoundError::NotStarted));
        assert_eq!(t.on_info(true, false, false), Err(RoundError::NotStarted));
        assert_eq!(t.on_hand("alice"), Err(RoundError::NotStarted));
        assert!(t.on_end().is_none());
    }

    #[test]
    fn test_start_and_replay() {
        let t = table();
        assert!(matches!(
            t.on_start_solo(""),
            Err(RoundError::Precondition(_))
        ));
        assert!(matches!(t.on_replay("alice"), Err(RoundError::Store(_))));
        assert_eq!(t.status(), TableStatus::Idle);

        // 人間のプレイヤーのツモ番か宣言待ちで停止する
        let o = t.on_start_solo("alice").unwrap();
        assert!(!o.is_terminal());
        assert_eq!(t.status(), TableStatus::PlayingSolo);
        assert_eq!(t.on_start_solo("alice"), Err(RoundError::AlreadyStarted));
        let first = t.controller().view(|stg| stg.wall.clone());
        let seat = t.controller().view(|stg| stg.seat_of("alice")).unwrap();
        t.on_end();
        assert_eq!(t.status(), TableStatus::Idle);

        // 同じ牌山,同じ席で別の名前のプレイヤーが再開
        t.on_replay("bob").unwrap();
        t.controller().view(|stg| {
            assert_eq!(stg.wall, first);
            assert_eq!(stg.seat_of("bob"), Some(seat));
            assert_eq!(stg.seat_of("alice"), None);
        });
        t.on_end();
    }

    #[test]
    fn test_discard_token() {
        let t = table();
        t.on_start_solo("alice").unwrap();
        let before = t.controller().snapshot();
        // 指定ミスは無視
        assert_eq!(t.on_discard(Some("")), Ok(None));
        assert_eq!(t.on_discard(Some("xyz")), Ok(None));
        let after = t.controller().snapshot();
        assert_eq!(before.cursor, after.cursor);
        assert_eq!(before.phase, after.phase);
    }
}
