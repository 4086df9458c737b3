// 型エイリアス
pub type Type = usize; // 牌の種別部分 (萬子,筒子,索子,字牌)
pub type Tnum = usize; // 牌の数字部分 (1~9)

// Number
pub const SEAT: usize = 4; // 座席の数
pub const TYPE: usize = 4; // 牌の種別部分の数 (萬子,筒子,索子,字牌)
pub const TNUM: usize = 10; // 牌の数字部分の数 (0は未使用, 1~9)
pub const TILE: usize = 4; // 同種の牌の数
pub const KIND: usize = 34; // 牌の種類の数

// 牌山
pub const WALL_SIZE: usize = KIND * TILE; // 136
pub const DEAD_WALL_SIZE: usize = DORA_SLOT + URA_DORA_SLOT + REPLACEMENT_SLOT; // 14 王牌
pub const DRAWABLE: usize = WALL_SIZE - DEAD_WALL_SIZE; // 122 通常のツモで引ける上限
pub const HAND_SIZE: usize = 13; // 配牌の枚数
pub const DORA_SLOT: usize = 5; // ドラ表示牌
pub const URA_DORA_SLOT: usize = 5; // 裏ドラ表示牌
pub const REPLACEMENT_SLOT: usize = 4; // 嶺上牌

// Type Index
pub const TM: usize = 0; // Type: Manzu (萬子)
pub const TP: usize = 1; // Type: Pinzu (筒子)
pub const TS: usize = 2; // Type: Souzu (索子)
pub const TZ: usize = 3; // Type: Zihai (字牌)

// Tnum Index
pub const WE: usize = 1; // Wind:    East  (東)
pub const WS: usize = 2; // Wind:    South (南)
pub const WW: usize = 3; // Wind:    West  (西)
pub const WN: usize = 4; // Wind:    North (北)
pub const DW: usize = 5; // Doragon: White (白)
pub const DG: usize = 6; // Doragon: Green (發)
pub const DR: usize = 7; // Doragon: Red   (中)
