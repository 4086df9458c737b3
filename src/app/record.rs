use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::control::{RoundError, RoundResult};
use crate::model::*;
use crate::util::misc::write_to_file;

pub const KEY_WALL: &str = "wall";
pub const KEY_PLAYERS: &str = "players";

// 牌譜の保存先 (キーと値の組)
pub trait RecordStore: Send + Sync {
    fn write(&self, key: &str, data: &[u8]) -> RoundResult<()>;
    fn read(&self, key: &str) -> RoundResult<Vec<u8>>;
}

// ディレクトリ以下に"{key}.json"として保存
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl RecordStore for FileStore {
    fn write(&self, key: &str, data: &[u8]) -> RoundResult<()> {
        write_to_file(&self.path(key), data).map_err(|e| RoundError::Store(e.to_string()))
    }

    fn read(&self, key: &str) -> RoundResult<Vec<u8>> {
        Ok(std::fs::read(self.path(key))?)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl RecordStore for MemoryStore {
    fn write(&self, key: &str, data: &[u8]) -> RoundResult<()> {
        let mut m = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        m.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn read(&self, key: &str) -> RoundResult<Vec<u8>> {
        let m = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        m.get(key)
            .cloned()
            .ok_or_else(|| RoundError::Store(format!("record not found: {}", key)))
    }
}

// リプレイ用の記録 (シャッフル済みの牌山と席順)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub wall: Vec<Tile>,
    pub players: [Player; SEAT],
}

impl RoundRecord {
    pub fn save(&self, store: &dyn RecordStore) -> RoundResult<()> {
        store.write(KEY_WALL, &serde_json::to_vec(&self.wall)?)?;
        store.write(KEY_PLAYERS, &serde_json::to_vec(&self.players)?)?;
        Ok(())
    }

    pub fn load(store: &dyn RecordStore) -> RoundResult<Self> {
        let wall = serde_json::from_slice(&store.read(KEY_WALL)?)?;
        let players = serde_json::from_slice(&store.read(KEY_PLAYERS)?)?;
        Ok(Self { wall, players })
    }

    // 人間のプレイヤーの席に指定した名前のプレイヤーを座らせる
    pub fn reseat(&mut self, name: &str) -> RoundResult<Wind> {
        let seat = Wind::ALL
            .iter()
            .copied()
            .find(|w| !self.players[w.index()].is_com())
            .ok_or_else(|| RoundError::Precondition("no human seat in record".to_string()))?;
        self.players[seat.index()] = Player::human(name);
        Ok(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::wall::create_wall;

    fn record() -> RoundRecord {
        RoundRecord {
            wall: create_wall(0),
            players: [
                Player::com("COM_01"),
                Player::human("alice"),
                Player::com("COM_02"),
                Player::com("COM_03"),
            ],
        }
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert!(matches!(
            RoundRecord::load(&store),
            Err(RoundError::Store(_))
        ));

        let rec = record();
        rec.save(&store).unwrap();
        assert_eq!(RoundRecord::load(&store).unwrap(), rec);

        // 牌は文字列で保存される
        let s = String::from_utf8(store.read(KEY_WALL).unwrap()).unwrap();
        assert!(s.starts_with(&format!("[\"{}\"", rec.wall[0])));
    }

    #[test]
    fn test_file_store() {
        let dir = std::env::temp_dir().join(format!("janbot_test_{}", std::process::id()));
        let store = FileStore::new(&dir);
        let rec = record();
        rec.save(&store).unwrap();
        assert!(dir.join("wall.json").exists());
        assert_eq!(RoundRecord::load(&store).unwrap(), rec);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_reseat() {
        let mut rec = record();
        assert_eq!(rec.reseat("bob").unwrap(), Wind::South);
        assert_eq!(rec.players[1], Player::human("bob"));

        for p in rec.players.iter_mut() {
            *p = Player::com("COM");
        }
        assert!(rec.reseat("bob").is_err());
    }
}
