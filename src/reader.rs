use itertools::Itertools;

use crate::types::{CalcError, Expr, FormatError};

macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

// 入力行を二項式として読み込む
// トークン数 -> 左被演算子 -> 右被演算子 の順に検査する
// 演算子記号の解決はeval側なので、未知の記号はここでは素通しする
pub fn read_expr(input: &str) -> Result<Expr, CalcError> {
    let tokens = tokenize(input);
    let count = tokens.len();
    let Some((left, op, right)) = tokens.into_iter().collect_tuple() else {
        return Err(CalcError::Format(FormatError::WrongTokenCount(count)));
    };

    let left = read_number(&left)?;
    let right = read_number(&right)?;
    Ok(Expr::new(left, op, right))
}

// 空白(Unicode)で区切られた非空白文字の並びをトークンとする
fn tokenize(input: &str) -> Vec<String> {
    regex!(r"\S+")
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn read_number(token: &str) -> Result<f64, CalcError> {
    token
        .parse()
        .map_err(|e| CalcError::Format(FormatError::InvalidOperand(token.to_string(), e)))
}
