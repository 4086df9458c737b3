// 麻雀のデータモデル
mod action;
mod announce;
mod define;
mod player;
mod round;
mod tile;
mod wind;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::{action::*, announce::*, define::*, player::*, round::*, tile::*, wind::*};
