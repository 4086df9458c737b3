// 手牌の和了形判定を行うモジュール
mod win;

pub use self::win::{calc_mods_cnts, calc_possible_pairs, completable_tiles, is_complete, is_sets};
