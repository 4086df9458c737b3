// 局の進行と牌の入出力を行うモジュール
pub mod call;
pub mod common;
pub mod controller;
pub mod engine;
pub mod error;
pub mod string;
pub mod wall;

pub use self::{
    call::{CallDetector, RonDetector},
    controller::RoundController,
    engine::RoundEngine,
    error::{RoundError, RoundResult},
};
