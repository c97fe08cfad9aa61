//! 分かち書きの精度評価
//!
//! 正解のトークン列とシステムのトークン列を境界位置で整列させ、
//! 適合率（Precision）、再現率（Recall）、F1スコアを計算します。
//!
//! 整列した境界でのトークン一致は **バイト長の一致** のみで判定し、
//! バイト内容は比較しません。両者が同じ文を分割したものであることが前提です。

use std::fmt;

/// 境界の揃ったトークンの数を数えます。
///
/// 正解側とシステム側の累積バイトオフセットを進めながら、両者が揃った位置で
/// 始まるトークン同士のバイト長が等しければ正解として数えます。
/// どちらかの列が尽きた時点で終了します。
///
/// # 引数
///
/// * `reference` - 正解のトークン列
/// * `system` - システムのトークン列
///
/// # 戻り値
///
/// 正解として数えられたトークン数
///
/// # 例
///
/// ```
/// use trieseg::evaluation::count_aligned_matches;
///
/// assert_eq!(count_aligned_matches(&["ab", "cd"], &["ab", "cd"]), 2);
/// assert_eq!(count_aligned_matches(&["ab", "cd"], &["abcd"]), 0);
/// ```
pub fn count_aligned_matches<R, S>(reference: &[R], system: &[S]) -> usize
where
    R: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    let mut num_correct = 0;
    let (mut i, mut j) = (0, 0);
    let (mut l1, mut l2) = (0, 0);
    while i < reference.len() && j < system.len() {
        let ref_len = reference[i].as_ref().len();
        let sys_len = system[j].as_ref().len();
        if l1 == l2 {
            if ref_len == sys_len {
                num_correct += 1;
            }
            l1 += ref_len;
            l2 += sys_len;
            i += 1;
            j += 1;
        } else if l1 > l2 {
            l2 += sys_len;
            j += 1;
        } else {
            l1 += ref_len;
            i += 1;
        }
    }
    num_correct
}

/// 適合率、再現率、F1スコアの組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prf {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Prf {
    /// 個数から評価値を計算します。
    ///
    /// 分母が0になる値（トークン列が空の場合や、適合率と再現率がともに0の場合のF1）は
    /// 非有限値ではなく `0.0` とします。
    ///
    /// # 引数
    ///
    /// * `num_correct` - 正解と数えられたトークン数
    /// * `num_system` - システムのトークン数
    /// * `num_reference` - 正解のトークン数
    pub fn from_counts(num_correct: usize, num_system: usize, num_reference: usize) -> Self {
        let precision = ratio(num_correct as f64, num_system as f64);
        let recall = ratio(num_correct as f64, num_reference as f64);
        let f1 = ratio(2.0 * precision * recall, precision + recall);
        Self {
            precision,
            recall,
            f1,
        }
    }

    /// 1文分のトークン列を評価します。
    pub fn evaluate<R, S>(reference: &[R], system: &[S]) -> Self
    where
        R: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let num_correct = count_aligned_matches(reference, system);
        Self::from_counts(num_correct, system.len(), reference.len())
    }
}

#[inline(always)]
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.3}, {:.3}, {:.3}", self.precision, self.recall, self.f1)
    }
}

/// コーパス全体の評価値を集計する構造体
///
/// 文ごとの個数を合算し、マイクロ平均の評価値を求めます。
#[derive(Default, Debug, Clone)]
pub struct Evaluator {
    num_sentences: usize,
    num_reference: usize,
    num_system: usize,
    num_correct: usize,
}

impl Evaluator {
    /// 新しいインスタンスを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 1文分のトークン列を評価し、集計に加えます。
    ///
    /// # 戻り値
    ///
    /// その文の評価値
    pub fn add<R, S>(&mut self, reference: &[R], system: &[S]) -> Prf
    where
        R: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        let num_correct = count_aligned_matches(reference, system);
        self.num_sentences += 1;
        self.num_reference += reference.len();
        self.num_system += system.len();
        self.num_correct += num_correct;
        Prf::from_counts(num_correct, system.len(), reference.len())
    }

    /// 集計済みの文数を返します。
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// コーパス全体の評価値を返します。
    pub fn total(&self) -> Prf {
        Prf::from_counts(self.num_correct, self.num_system, self.num_reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences() {
        let tokens = ["自然", "言語", "処理"];
        let prf = Prf::evaluate(&tokens, &tokens);
        assert_eq!(prf.precision, 1.0);
        assert_eq!(prf.recall, 1.0);
        assert_eq!(prf.f1, 1.0);
        assert_eq!(prf.to_string(), "1.000, 1.000, 1.000");
    }

    #[test]
    fn test_merged_tokens() {
        let reference = ["ab", "cd"];
        let system = ["abcd"];
        assert_eq!(count_aligned_matches(&reference, &system), 0);

        let prf = Prf::evaluate(&reference, &system);
        assert_eq!(prf.precision, 0.0);
        assert_eq!(prf.recall, 0.0);
        assert_eq!(prf.f1, 0.0);
        assert_eq!(prf.to_string(), "0.000, 0.000, 0.000");
    }

    #[test]
    fn test_partial_alignment() {
        // 自然|言語処理 vs 自然|言語|処理
        let reference = ["自然", "言語処理"];
        let system = ["自然", "言語", "処理"];
        assert_eq!(count_aligned_matches(&reference, &system), 1);

        let prf = Prf::evaluate(&reference, &system);
        assert_eq!(prf.to_string(), "0.333, 0.500, 0.400");
    }

    #[test]
    fn test_realigned_after_mismatch() {
        let reference = ["a", "bc", "d"];
        let system = ["ab", "c", "d"];
        assert_eq!(count_aligned_matches(&reference, &system), 1);
    }

    #[test]
    fn test_length_based_matching() {
        // 内容は比較しない
        let reference = ["ab", "cd"];
        let system = ["xy", "zw"];
        assert_eq!(count_aligned_matches(&reference, &system), 2);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [&str; 0] = [];
        let prf = Prf::evaluate(&empty, &["a"]);
        assert_eq!(prf, Prf { precision: 0.0, recall: 0.0, f1: 0.0 });

        let prf = Prf::evaluate(&["a"], &empty);
        assert_eq!(prf, Prf { precision: 0.0, recall: 0.0, f1: 0.0 });

        let prf = Prf::evaluate(&empty, &empty);
        assert!(prf.f1.is_finite());
    }

    #[test]
    fn test_evaluator() {
        let mut evaluator = Evaluator::new();
        let prf = evaluator.add(&["ab", "cd"], &["ab", "cd"]);
        assert_eq!(prf.f1, 1.0);
        let prf = evaluator.add(&["ab", "cd"], &["abcd"]);
        assert_eq!(prf.f1, 0.0);

        assert_eq!(evaluator.num_sentences(), 2);
        let total = evaluator.total();
        // correct = 2, system = 3, reference = 4
        assert_eq!(total.to_string(), "0.667, 0.500, 0.571");
    }
}
