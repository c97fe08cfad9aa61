//! # trieseg
//!
//! 辞書に基づく前方最長一致法で、単語間に空白を持たないテキスト（中国語の文など）を
//! 分かち書きし、その結果を正解データと比較して適合率・再現率・F1スコアで評価します。
//!
//! ## 概要
//!
//! - **辞書**: バイト単位で分岐するトライ。ヘッダで宣言された単語数と最大文字数に従って構築されます
//! - **分かち書き**: 各位置から始まる最長の辞書語を貪欲に切り出し、一致しない位置は1文字の未知語とします
//! - **評価**: トークン境界を整列させて一致数を数え、文ごとの評価値を計算します
//!
//! 入力はすべてバイト列として扱われ、UTF-8 の検証は先頭バイトと継続バイトの
//! 構造的な検査に限られます。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use trieseg::evaluation::Prf;
//! use trieseg::{Dictionary, Tokenizer};
//!
//! let dict = Dictionary::from_reader("3\t4\nab\ncd\nabcd\n".as_bytes())?;
//! let tokenizer = Tokenizer::new(dict);
//!
//! let tokens = tokenizer.tokenize(b"abcdxy")?;
//! assert_eq!(tokens, vec![b"abcd".to_vec(), b"x".to_vec(), b"y".to_vec()]);
//!
//! let prf = Prf::evaluate(&["abcd", "xy"], &tokens);
//! assert_eq!(prf.to_string(), "0.333, 0.500, 0.400");
//! # Ok(())
//! # }
//! ```

/// コーパスの行単位の入出力
pub mod corpus;

/// 辞書データ構造
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 分かち書きの評価
pub mod evaluation;

/// 一括処理
pub mod pipeline;

/// トークン型の定義
pub mod token;

/// トークナイザーの実装
pub mod tokenizer;

/// UTF-8 の文字境界の判定
pub mod utf8;

#[cfg(test)]
mod tests;

// Re-exports
pub use dictionary::Dictionary;
pub use tokenizer::Tokenizer;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
