use std::sync::{Mutex, MutexGuard, PoisonError};

use super::call::CallDetector;
use super::engine::RoundEngine;
use super::error::{RoundError, RoundResult};
use crate::model::*;

// 局の進行を排他制御するオブジェクト
// 全ての操作はCOMの自動打牌を含めて一つのロックの中で同期的に実行される
#[derive(Debug, Default)]
pub struct RoundController {
    active: Mutex<bool>, // 局が進行中かどうか (ロックを取らずに操作を弾くためのフラグ)
    state: Mutex<RoundState>,
    engine: RoundEngine,
}

impl RoundController {
    pub fn new(detector: Box<dyn CallDetector>) -> Self {
        Self {
            active: Mutex::new(false),
            state: Mutex::new(RoundState::default()),
            engine: RoundEngine::new(detector),
        }
    }

    pub fn start(&self, wall: Vec<Tile>, players: [Player; SEAT]) -> RoundResult<TurnOutcome> {
        if self.is_active() {
            return Err(RoundError::AlreadyStarted);
        }
        self.run(|eng, stg| eng.start(stg, wall, players))
    }

    // 打牌 (ツモ切り)
    pub fn discard(&self) -> RoundResult<TurnOutcome> {
        self.run_active(|eng, stg| eng.discard(stg))
    }

    // 打牌 (手出し)
    pub fn discard_tile(&self, target: Tile) -> RoundResult<TurnOutcome> {
        self.run_active(|eng, stg| eng.discard_tile(stg, target))
    }

    pub fn complete_ron(&self, name: &str) -> RoundResult<TurnOutcome> {
        if name.is_empty() {
            return Err(RoundError::Precondition("empty player name".to_string()));
        }
        self.run_active(|eng, stg| eng.complete_ron(stg, name))
    }

    pub fn complete_tsumo(&self) -> RoundResult<TurnOutcome> {
        self.run_active(|eng, stg| eng.complete_tsumo(stg))
    }

    // 捨て牌に対する宣言を見送って次の手番へ
    pub fn on_continue(&self) -> RoundResult<TurnOutcome> {
        self.run_active(|eng, stg| eng.proceed(stg))
    }

    // 局の強制終了 開始されていない場合はNone
    pub fn end(&self) -> Option<TurnOutcome> {
        let mut stg = self.lock_state();
        let res = self.engine.end(&mut stg);
        *self.lock_active() = false;
        res
    }

    pub fn info(&self, field: bool, river: bool, river_all: bool) -> RoundResult<TurnOutcome> {
        self.view(|stg| self.engine.info(stg, field, river, river_all))
    }

    pub fn hand(&self, name: &str) -> RoundResult<TurnOutcome> {
        self.view(|stg| self.engine.hand(stg, name))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        *self.lock_active()
    }

    // 局の状態を参照 (ロック中に実行)
    pub fn view<T>(&self, f: impl FnOnce(&RoundState) -> T) -> T {
        f(&self.lock_state())
    }

    // 局の状態のコピー
    pub fn snapshot(&self) -> RoundState {
        self.lock_state().clone()
    }

    fn run_active(
        &self,
        f: impl FnOnce(&RoundEngine, &mut RoundState) -> RoundResult<TurnOutcome>,
    ) -> RoundResult<TurnOutcome> {
        if !self.is_active() {
            return Err(RoundError::NotStarted);
        }
        self.run(f)
    }

    fn run(
        &self,
        f: impl FnOnce(&RoundEngine, &mut RoundState) -> RoundResult<TurnOutcome>,
    ) -> RoundResult<TurnOutcome> {
        let mut stg = self.lock_state();
        let res = f(&self.engine, &mut stg);
        *self.lock_active() = stg.is_on_game();
        res
    }

    // ロックがpoisonedの場合もそのまま使用する (engineは状態を中途半端に残してpanicしない)
    fn lock_state(&self) -> MutexGuard<'_, RoundState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_active(&self) -> MutexGuard<'_, bool> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::wall::create_wall;

    fn players() -> [Player; SEAT] {
        [
            Player::human("alice"),
            Player::com("COM_01"),
            Player::com("COM_02"),
            Player::com("COM_03"),
        ]
    }

    #[test]
    fn test_not_started() {
        let ctrl = RoundController::default();
        assert_eq!(ctrl.discard(), Err(RoundError::NotStarted));
        assert_eq!(ctrl.complete_tsumo(), Err(RoundError::NotStarted));
        assert_eq!(ctrl.on_continue(), Err(RoundError::NotStarted));
        assert!(ctrl.end().is_none());
        assert!(!ctrl.is_active());
    }

    #[test]
    fn test_start_twice() {
        let ctrl = RoundController::default();
        ctrl.start(create_wall(0), players()).unwrap();
        assert!(ctrl.is_active());
        assert_eq!(
            ctrl.start(create_wall(1), players()),
            Err(RoundError::AlreadyStarted)
        );

        assert!(ctrl.end().is_some());
        assert!(!ctrl.is_active());
        assert!(ctrl.end().is_none());
        assert_eq!(ctrl.view(|stg| stg.phase.clone()), Phase::Idle);
    }

    #[test]
    fn test_empty_name() {
        let ctrl = RoundController::default();
        ctrl.start(create_wall(0), players()).unwrap();
        assert!(matches!(
            ctrl.complete_ron(""),
            Err(RoundError::Precondition(_))
        ));
        assert!(matches!(
            ctrl.complete_ron("bob"),
            Err(RoundError::Precondition(_))
        ));
    }
}
