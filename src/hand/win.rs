use crate::control::common::count_total;
use crate::model::*;

// [完成形判定 (面子, 雀頭)]
// 七対子,国士無双は判定しない

// それぞれの牌種について"枚数を3で割った余り"と"余り数の集計"を返却
pub fn calc_mods_cnts(hand: &TileTable) -> ([usize; TYPE], [usize; 3]) {
    let mut mods = [0; TYPE];
    for ti in 0..TYPE {
        mods[ti] = hand[ti][1..TNUM].iter().sum::<usize>() % 3;
    }

    let mut cnts = [0; 3];
    for ti in 0..TYPE {
        cnts[mods[ti]] += 1;
    }

    (mods, cnts)
}

// 面子のみで構成されているかの判定
pub fn is_sets(tr: &TileRow, ti: Type) -> bool {
    let mut tr = *tr;
    remove_sets(&mut tr, ti)
}

// 最も小さい牌から刻子または順子として取り除いていく. 失敗した場合は後戻りして別の取り方を試す.
// trは呼び出し前の状態に戻して返却する
fn remove_sets(tr: &mut TileRow, ti: Type) -> bool {
    let i = match (1..TNUM).find(|&i| tr[i] > 0) {
        Some(i) => i,
        None => return true,
    };

    // 刻子
    if tr[i] >= 3 {
        tr[i] -= 3;
        let ok = remove_sets(tr, ti);
        tr[i] += 3;
        if ok {
            return true;
        }
    }

    // 順子 (字牌は不可)
    if ti != TZ && i <= 7 && tr[i + 1] > 0 && tr[i + 2] > 0 {
        tr[i] -= 1;
        tr[i + 1] -= 1;
        tr[i + 2] -= 1;
        let ok = remove_sets(tr, ti);
        tr[i] += 1;
        tr[i + 1] += 1;
        tr[i + 2] += 1;
        if ok {
            return true;
        }
    }

    false
}

// 和了形である場合,雀頭候補のリストを返却
pub fn calc_possible_pairs(hand: &TileTable) -> Vec<Tile> {
    let n = count_total(hand);
    if n < 2 || n % 3 != 2 {
        return vec![];
    }

    // 雀頭を含む牌種のみ余りが2, それ以外の牌種は余り0
    let (mods, cnts) = calc_mods_cnts(hand);
    if cnts[1] != 0 || cnts[2] != 1 {
        return vec![];
    }

    let mut res = vec![];
    for ti in 0..TYPE {
        if mods[ti] == 2 {
            let mut tr = hand[ti];
            for ni in 1..TNUM {
                if tr[ni] < 2 {
                    continue;
                }
                tr[ni] -= 2;
                if remove_sets(&mut tr, ti) {
                    res.push(Tile(ti, ni));
                }
                tr[ni] += 2;
            }
        } else if !is_sets(&hand[ti], ti) {
            return vec![];
        }
    }

    res
}

// [和了形判定]
// 門前の牌(副露がない場合14枚)が4面子1雀頭に分解できるかどうか
pub fn is_complete(hand: &TileTable) -> bool {
    !calc_possible_pairs(hand).is_empty()
}

// [和了牌判定]
// 1枚加えると和了形になる牌のリストを返却 (昇順)
// 聴牌していない場合は空のリストを返却
pub fn completable_tiles(hand: &TileTable) -> Vec<Tile> {
    if count_total(hand) % 3 != 1 {
        return vec![];
    }

    let mut tt = *hand;
    let mut res = vec![];
    for t in Tile::all() {
        tt[t.0][t.1] += 1;
        if is_complete(&tt) {
            res.push(t);
        }
        tt[t.0][t.1] -= 1;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{common::tiles_to_tile_table, string::tiles_from_string};

    fn tt(exp: &str) -> TileTable {
        tiles_to_tile_table(&tiles_from_string(exp).unwrap())
    }

    #[test]
    fn test_is_sets() {
        assert!(is_sets(&tt("123456789m")[TM], TM));
        assert!(is_sets(&tt("111222333m")[TM], TM));
        assert!(is_sets(&tt("112233m")[TM], TM));
        // 刻子を優先すると失敗する形
        assert!(is_sets(&tt("111234m")[TM], TM));
        assert!(is_sets(&tt("1112223334m")[TM], TM) == false);
        assert!(is_sets(&tt("111z")[TZ], TZ));
        assert!(!is_sets(&tt("123z")[TZ], TZ));
        assert!(!is_sets(&tt("12m")[TM], TM));
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&tt("123456789m123s55s")));
        assert!(is_complete(&tt("55s789m123s456m123m")));
        assert!(is_complete(&tt("111222333m11z555z")));
        assert!(is_complete(&tt("11123456789999m")));
        assert!(is_complete(&tt("22m")));
        assert!(is_complete(&tt("234p55z")));
        // 雀頭なし
        assert!(!is_complete(&tt("123456789m123s56s")));
        assert!(!is_complete(&tt("123m456m789m123s1z2z")));
        // 七対子,国士無双は判定しない
        assert!(!is_complete(&tt("1133m5577p99s1122z")));
        assert!(!is_complete(&tt("19m19p19s12345677z")));
        // 枚数が不正
        assert!(!is_complete(&tt("123456789m123s5s")));
        assert!(!is_complete(&TileTable::default()));
    }

    #[test]
    fn test_calc_possible_pairs() {
        let pairs = calc_possible_pairs(&tt("11123m"));
        assert_eq!(pairs, vec![Tile(TM, 1)]);
        // 雀頭候補が2つある形
        let pairs = calc_possible_pairs(&tt("11223344m"));
        assert_eq!(pairs, vec![Tile(TM, 1), Tile(TM, 4)]);
        // 枚数が不正
        assert!(calc_possible_pairs(&tt("1112m")).is_empty());
    }

    #[test]
    fn test_completable_tiles() {
        // 九蓮宝燈 九面待ち
        let wins = completable_tiles(&tt("1112345678999m"));
        let expected: Vec<Tile> = (1..=9).map(|n| Tile(TM, n)).collect();
        assert_eq!(wins, expected);

        // 単騎待ち
        assert_eq!(
            completable_tiles(&tt("123456789m123p5z")),
            vec![Tile(TZ, DW)]
        );

        // 両面待ち
        assert_eq!(
            completable_tiles(&tt("123456789m23p11z")),
            vec![Tile(TP, 1), Tile(TP, 4)]
        );

        // 嵌張
        assert_eq!(
            completable_tiles(&tt("123456789m13p11z")),
            vec![Tile(TP, 2)]
        );

        // シャンポン
        assert_eq!(
            completable_tiles(&tt("123456789m55p11z")),
            vec![Tile(TP, 5), Tile(TZ, WE)]
        );

        // 聴牌していない
        assert!(completable_tiles(&tt("147m147p147s1234z")).is_empty());
        // 枚数が不正
        assert!(completable_tiles(&tt("1112345678999m1z")).is_empty());
    }
}
