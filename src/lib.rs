pub mod core;
pub mod printer;
pub mod reader;
pub mod types;

use crate::core::eval;
use crate::reader::read_expr;
use crate::types::CalcResult;

// 一行の式を読み込んで評価する
pub fn evaluate(input: &str) -> CalcResult {
    eval(read_expr(input)?)
}
