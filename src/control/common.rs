use crate::model::*;

// TileTable
#[inline]
pub fn count_tile(tt: &TileTable, t: Tile) -> usize {
    tt[t.0][t.1]
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    debug_assert!(t.is_valid(), "invalid tile: {:?}", t);
    tt[t.0][t.1] += 1;
}

#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) {
    assert!(tt[t.0][t.1] > 0, "{} not found", t);
    tt[t.0][t.1] -= 1;
}

pub fn count_total(tt: &TileTable) -> usize {
    tt.iter().map(|tr| tr.iter().sum::<usize>()).sum()
}

pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            for _ in 0..tt[ti][ni] {
                tiles.push(Tile(ti, ni));
            }
        }
    }
    tiles
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

// 全136枚が揃っているかどうか (各種4枚)
pub fn is_full_set(tiles: &[Tile]) -> bool {
    if tiles.len() != WALL_SIZE || tiles.iter().any(|t| !t.is_valid()) {
        return false;
    }
    let tt = tiles_to_tile_table(tiles);
    Tile::all().all(|t| count_tile(&tt, t) == TILE)
}

#[test]
fn test_tiletable() {
    let tiles = vec![Tile(TM, 3), Tile(TM, 3), Tile(TP, 7), Tile(TZ, DW)];
    let tt = tiles_to_tile_table(&tiles);
    assert_eq!(count_total(&tt), 4);
    assert_eq!(count_tile(&tt, Tile(TM, 3)), 2);
    assert_eq!(tiles_from_tile_table(&tt), tiles);
}

#[test]
fn test_is_full_set() {
    let mut tiles: Vec<Tile> = Tile::all().flat_map(|t| vec![t; TILE]).collect();
    assert!(is_full_set(&tiles));
    tiles[0] = Tile(TM, 2);
    assert!(!is_full_set(&tiles));
    tiles.pop();
    assert!(!is_full_set(&tiles));
}
