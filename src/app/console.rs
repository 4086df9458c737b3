use std::path::PathBuf;

use super::record::{FileStore, MemoryStore, RecordStore};
use super::table::Table;
use crate::control::string::tiles_to_string;
use crate::control::RoundError;
use crate::model::*;
use crate::util::misc::*;
use crate::{error, info};

const HELP: [&str; 5] = [
    "start: 開始   end: 終了   replay: リプレイ",
    "h: 手牌   i: 状態   r: 捨て牌   ra: 全員の捨て牌   i r: 状態と捨て牌",
    "d X: 指定牌(ex. 9p)を切る (X指定無し: ツモ切り)   tsumo: ツモ和了",
    "(宣言待ち) ron: ロン   d: キャンセル",
    "quit: 終了",
];

// [App]
// 標準入力からコマンド(jan ...)を読み込んで局を進行
pub struct ConsoleApp {
    seed: u64,
    name: String,
    record_dir: Option<PathBuf>,
}

impl ConsoleApp {
    pub fn new(args: Vec<String>) -> Self {
        let mut app = Self {
            seed: 0,
            name: "player".to_string(),
            record_dir: None,
        };

        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-s" => app.seed = next_value(&mut it, s),
                "-n" => app.name = next_value(&mut it, s),
                "-d" => app.record_dir = Some(next_value(&mut it, s)),
                opt => {
                    error!("unknown option: {}", opt);
                    std::process::exit(0);
                }
            }
        }

        if app.seed == 0 {
            app.seed = unixtime_now();
            info!(
                "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                app.seed
            );
        }

        app
    }

    pub fn run(self) {
        println!("seed: {}", self.seed);
        let store: Box<dyn RecordStore> = match &self.record_dir {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => Box::new(MemoryStore::default()),
        };
        let table = Table::new(store, self.seed);

        while let Some(line) = prompt() {
            match line.as_str() {
                "quit" | "exit" => break,
                "" => continue,
                _ => {}
            }
            self.handle(&table, &line);
        }
        table.on_end();
    }

    fn handle(&self, table: &Table, line: &str) {
        let args: Vec<&str> = line.split_whitespace().collect();
        if args.first() != Some(&"jan") {
            return;
        }

        let pending = table
            .controller()
            .view(|stg| matches!(stg.phase, Phase::AwaitingCallDecision { .. }));
        let name = self.name.as_str();
        let res = match &args[1..] {
            ["start"] => table.on_start_solo(name).map(Some),
            ["replay"] => table.on_replay(name).map(Some),
            ["end"] => Ok(table.on_end()),
            ["d"] if pending => table.on_continue().map(Some),
            ["d"] => table.on_discard(None),
            ["d", token] => table.on_discard(Some(*token)),
            ["i"] => table.on_info(true, false, false).map(Some),
            ["r"] => table.on_info(false, true, false).map(Some),
            ["ra"] => table.on_info(false, false, true).map(Some),
            ["h"] => table.on_hand(name).map(Some),
            ["i", "r"] | ["r", "i"] => table.on_info(true, true, false).map(Some),
            ["i", "ra"] | ["ra", "i"] => table.on_info(true, false, true).map(Some),
            ["tsumo"] => table.on_tsumo().map(Some),
            ["ron"] => table.on_ron(name).map(Some),
            ["help"] => {
                for l in HELP {
                    println!("{}", l);
                }
                Ok(None)
            }
            _ => Ok(None),
        };

        match res {
            Ok(Some(o)) => self.print_outcome(table, &o),
            Ok(None) => {}
            Err(RoundError::NotStarted) => println!("--- Not started ---"),
            Err(RoundError::AlreadyStarted) => println!("--- Already started ---"),
            Err(e) => error!("{}", e),
        }
    }

    fn print_outcome(&self, table: &Table, o: &TurnOutcome) {
        match o {
            TurnOutcome::Suspended { claims, .. } => {
                println!("callable: {}", vec_to_string(claims));
            }
            TurnOutcome::Completed { end, .. } => match end {
                RoundEnd::Ron { winner, from } => println!("ron: {} <- {}", winner, from),
                RoundEnd::Tsumo { winner } => println!("tsumo: {}", winner),
                RoundEnd::Exhausted => println!("exhausted"),
            },
            TurnOutcome::RoundOver { .. } => println!("--- 流局 ---"),
            TurnOutcome::Fouled { foul } => println!("(  ´∀｀) ＜ チョンボ: {}", foul),
            TurnOutcome::Ended { .. } => println!("--- 終了 ---"),
            TurnOutcome::Advanced { .. } | TurnOutcome::Info { .. } => {}
        }

        if let Some(a) = o.announce() {
            for l in table.controller().view(|stg| render_announce(stg, a)) {
                println!("{}", l);
            }
        }
    }
}

// 実況イベントで公開された情報を文字列に変換
pub fn render_announce(stg: &RoundState, a: &Announce) -> Vec<String> {
    let r = a.reveals;
    let seat = a.seat;
    let mut lines = vec![];

    if r.field {
        lines.push(format!(
            "場風: {}  自風: {}  ドラ表示牌: {}  残り: {}",
            stg.prevalent_wind.to_tile(),
            seat.to_tile(),
            tiles_to_string(stg.dead_wall.doras()),
            stg.remaining,
        ));
    }
    if r.hand {
        let mut s = format!("手牌: {}", stg.hand(seat));
        if r.drawn {
            if let Some(t) = stg.drawn {
                s += &format!("  ツモ: {}", t);
            }
        }
        lines.push(s);
    }
    if r.last_discard {
        if let Some((w, t)) = stg.last_discard {
            lines.push(format!("捨て牌: {} ({})", t, w));
        }
    }
    if r.ura_dora {
        lines.push(format!(
            "裏ドラ表示牌: {}",
            tiles_to_string(stg.dead_wall.ura_doras())
        ));
    }
    if r.river {
        lines.push(format!("河: {}", river_to_string(stg.river(seat))));
    }
    if r.river_all {
        for w in Wind::ALL {
            lines.push(format!(
                "河({}): {}",
                stg.player(w),
                river_to_string(stg.river(w))
            ));
        }
    }
    lines
}

// ツモ切りした牌には*を付ける
fn river_to_string(river: &[Discard]) -> String {
    let v: Vec<String> = river
        .iter()
        .map(|d| {
            if d.is_drawn {
                format!("{}*", d.tile)
            } else {
                d.tile.to_string()
            }
        })
        .collect();
    v.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::wall::create_wall;
    use crate::control::RoundController;

    #[test]
    fn test_render_announce() {
        let ctrl = RoundController::default();
        let players = [
            Player::human("alice"),
            Player::com("COM_01"),
            Player::com("COM_02"),
            Player::com("COM_03"),
        ];
        let o = ctrl.start(create_wall(0), players).unwrap();
        let a = *o.announce().unwrap();
        let lines = ctrl.view(|stg| render_announce(stg, &a));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("残り: 69"));
        assert!(lines[1].starts_with("手牌: "));
        assert!(lines[1].contains("ツモ: "));

        let a = *ctrl.hand("alice").unwrap().announce().unwrap();
        let lines = ctrl.view(|stg| render_announce(stg, &a));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("手牌: "));
        assert!(!lines[0].contains("ツモ: "));

        let a = Announce::new(AnnounceType::RiverAll, Wind::East);
        assert_eq!(ctrl.view(|stg| render_announce(stg, &a)).len(), SEAT);
        let a = Announce::new(AnnounceType::Ended, Wind::East);
        assert!(ctrl.view(|stg| render_announce(stg, &a)).is_empty());
    }
}
