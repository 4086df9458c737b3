use rand::prelude::*;

use super::common::{count_tile, dec_tile, tiles_from_tile_table};
use super::error::{RoundError, RoundResult};
use crate::model::*;

// 136枚の牌山をシード値に従ってシャッフルして生成
pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall: Vec<Tile> = Tile::all().flat_map(|t| [t; TILE]).collect();
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

// 作為的な牌山を生成 指定がない場所はシード値に従ってランダムに生成
// hands: 各席の配牌 (最大13枚, 東南西北の順)
// draws: ツモ山の先頭 (最初の牌は親の14枚目)
// dead: 王牌の先頭 (最大14枚, 最初の牌がドラ表示牌)
pub fn create_wall_with(
    hands: &[Vec<Tile>; SEAT],
    draws: &[Tile],
    dead: &[Tile],
    seed: u64,
) -> RoundResult<Vec<Tile>> {
    if hands.iter().any(|h| h.len() > HAND_SIZE) {
        return Err(RoundError::Precondition("too many tiles in hand".to_string()));
    }
    if draws.len() > DRAWABLE - HAND_SIZE * SEAT {
        return Err(RoundError::Precondition("too many draws".to_string()));
    }
    if dead.len() > DEAD_WALL_SIZE {
        return Err(RoundError::Precondition("too many dead wall tiles".to_string()));
    }

    let mut tt: TileTable = [[0; TNUM]; TYPE];
    for t in Tile::all() {
        tt[t.0][t.1] = TILE;
    }
    for h in hands {
        subtract_tiles(&mut tt, h)?;
    }
    subtract_tiles(&mut tt, draws)?;
    subtract_tiles(&mut tt, dead)?;

    // 余った牌をランダムにシャッフル
    let mut remain = tiles_from_tile_table(&tt);
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    remain.shuffle(&mut rng);

    let mut wall = Vec::with_capacity(WALL_SIZE);
    for h in hands {
        wall.extend_from_slice(h);
        move_tiles(&mut remain, &mut wall, HAND_SIZE - h.len());
    }
    wall.extend_from_slice(draws);
    let n = DRAWABLE - wall.len();
    move_tiles(&mut remain, &mut wall, n);
    wall.extend_from_slice(dead);
    move_tiles(&mut remain, &mut wall, DEAD_WALL_SIZE - dead.len());

    debug_assert!(remain.is_empty());
    Ok(wall)
}

fn subtract_tiles(tt: &mut TileTable, tiles: &[Tile]) -> RoundResult<()> {
    for &t in tiles {
        if !t.is_valid() || count_tile(tt, t) == 0 {
            return Err(RoundError::Precondition(format!("more than 4 tiles: {}", t)));
        }
        dec_tile(tt, t);
    }
    Ok(())
}

fn move_tiles(source: &mut Vec<Tile>, target: &mut Vec<Tile>, count: usize) {
    let at = source.len() - count;
    target.extend(source.drain(at..));
}
