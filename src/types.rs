use std::fmt::Display;
use std::num::ParseFloatError;

// 二項式。読み込みが成功した時点で被演算子は数値化済み
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub left: f64,
    pub op: String,
    pub right: f64,
}

impl Expr {
    pub fn new<T: Into<String>>(left: f64, op: T, right: f64) -> Self {
        Expr {
            left,
            op: op.into(),
            right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    WrongTokenCount(usize),                  // トークン数が3でない
    InvalidOperand(String, ParseFloatError), // 数値として読めないトークン
    UnsupportedOperator(String),             // 対応表にない演算子
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    Format(FormatError),
    DivisionByZero,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::WrongTokenCount(_) => write!(
                f,
                "Invalid input format. Use format: <operand> <operator> <operand>"
            ),
            FormatError::InvalidOperand(token, _) => {
                write!(f, "could not convert string to float: '{}'", token)
            }
            FormatError::UnsupportedOperator(symbol) => {
                write!(f, "Unsupported operator: {}", symbol)
            }
        }
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // 書式の誤りはすべて入力エラーとして接頭辞を付けて表示する
            CalcError::Format(e) => write!(f, "Input error: {}", e),
            CalcError::DivisionByZero => write!(f, "Division by zero is not allowed."),
        }
    }
}

pub type CalcResult = Result<f64, CalcError>;
