// 計算結果の表示形式。整数値でも"2.0"のように小数点以下を保つ
pub fn pr_str(value: f64) -> String {
    format!("{:?}", value)
}
