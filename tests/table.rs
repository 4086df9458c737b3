use janbot::app::{MemoryStore, RecordStore, RoundRecord, Table, TableStatus};
use janbot::control::RoundError;
use janbot::model::*;

fn human_seat(t: &Table) -> Wind {
    t.controller()
        .view(|stg| Wind::ALL.into_iter().find(|&w| !stg.player(w).is_com()))
        .unwrap()
}

#[test]
fn test_solo_round_to_the_end() {
    // 人間のプレイヤーはツモ切り,宣言は見送り続けると流局する
    let t = Table::new(Box::new(MemoryStore::default()), 7);
    let mut o = t.on_start_solo("alice").unwrap();
    assert_eq!(t.status(), TableStatus::PlayingSolo);
    let seat = human_seat(&t);

    let mut n = 0;
    while !o.is_terminal() {
        o = match o {
            TurnOutcome::Suspended { claims, .. } => {
                assert!(claims.iter().all(|c| c.seat == seat));
                t.on_continue().unwrap()
            }
            TurnOutcome::Advanced { announce } => {
                assert_eq!(announce.seat, seat);
                t.on_discard(None).unwrap().unwrap()
            }
            o => panic!("unexpected outcome: {:?}", o),
        };
        n += 1;
        assert!(n < 200);
    }

    assert!(matches!(o, TurnOutcome::RoundOver { .. }));
    assert_eq!(t.status(), TableStatus::Idle);
    t.controller().view(|stg| {
        assert_eq!(stg.remaining, 0);
        let discards: usize = stg.rivers.iter().map(|r| r.len()).sum();
        assert_eq!(discards, DRAWABLE - HAND_SIZE * SEAT);
    });
    assert_eq!(t.on_discard(None), Err(RoundError::NotStarted));
}

#[test]
fn test_replay_reproduces_deal() {
    let store = MemoryStore::default();
    let t = Table::new(Box::new(MemoryStore::default()), 11);
    t.on_start_solo("alice").unwrap();
    let stg = t.controller().snapshot();

    // 卓が保存した記録と同じ内容を別の保存先に書き込んで読み直す
    let rec = RoundRecord {
        wall: stg.wall.clone(),
        players: stg.players.clone(),
    };
    rec.save(&store).unwrap();
    let loaded = RoundRecord::load(&store).unwrap();
    assert_eq!(loaded, rec);
    assert!(store.read("wall").is_ok());
    assert!(store.read("players").is_ok());

    t.on_end();
    t.on_replay("alice").unwrap();
    let replayed = t.controller().snapshot();
    assert_eq!(replayed.wall, stg.wall);
    assert_eq!(replayed.players, stg.players);
    assert_eq!(replayed.hands, stg.hands);
    assert_eq!(replayed.cursor, stg.cursor);
}
