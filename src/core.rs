use std::sync::OnceLock;

use fnv::FnvHashMap;

use crate::types::{CalcError, CalcResult, Expr, FormatError};

pub type BinOp = fn(f64, f64) -> CalcResult;

macro_rules! arith_op {
    ($op:tt) => {
        |a, b| Ok(a $op b)
    };
}

// 演算子の対応表。プロセス内で一度だけ構築され、以後は不変
pub fn operators() -> &'static FnvHashMap<&'static str, BinOp> {
    static OPERATORS: OnceLock<FnvHashMap<&'static str, BinOp>> = OnceLock::new();
    OPERATORS.get_or_init(|| {
        let mut ops: FnvHashMap<&'static str, BinOp> = FnvHashMap::default();
        ops.insert("+", arith_op!(+));
        ops.insert("-", arith_op!(-));
        ops.insert("*", arith_op!(*));
        // f64の除算は0除算でも失敗しないため、適用前に検査する。-0.0も0として扱う
        ops.insert("/", |a, b| {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        });
        ops
    })
}

pub fn eval(expr: Expr) -> CalcResult {
    match operators().get(expr.op.as_str()) {
        Some(op) => op(expr.left, expr.right),
        None => Err(CalcError::Format(FormatError::UnsupportedOperator(expr.op))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_table() {
        let ops = operators();
        assert_eq!(ops.len(), 4);
        for symbol in ["+", "-", "*", "/"] {
            assert!(ops.contains_key(symbol), "missing operator: {}", symbol);
        }
    }

    #[test]
    fn test_eval_applies_operator() {
        assert_eq!(eval(Expr::new(10.0, "+", 3.0)), Ok(13.0));
        assert_eq!(eval(Expr::new(10.0, "-", 3.0)), Ok(7.0));
        assert_eq!(eval(Expr::new(10.0, "*", 3.0)), Ok(30.0));
        assert_eq!(eval(Expr::new(10.0, "/", 4.0)), Ok(2.5));
    }

    #[test]
    fn test_eval_division_by_zero() {
        assert_eq!(eval(Expr::new(4.0, "/", 0.0)), Err(CalcError::DivisionByZero));
        assert_eq!(eval(Expr::new(4.0, "/", -0.0)), Err(CalcError::DivisionByZero));
        assert_eq!(eval(Expr::new(0.0, "/", 0.0)), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_eval_division_by_nan_is_not_an_error() {
        // NaNは0ではないので除算自体は行われ、結果がNaNになる
        let result = eval(Expr::new(4.0, "/", f64::NAN)).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_eval_unknown_operator() {
        assert!(matches!(
            eval(Expr::new(2.0, "^", 3.0)),
            Err(CalcError::Format(FormatError::UnsupportedOperator(s))) if s == "^"
        ));
        assert!(matches!(
            eval(Expr::new(2.0, "%", 3.0)),
            Err(CalcError::Format(FormatError::UnsupportedOperator(s))) if s == "%"
        ));
    }
}
