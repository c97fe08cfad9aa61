//! trieseg のテストモジュール群
//!
//! 辞書の読み込み、分かち書き、評価を組み合わせた動作を検証します。
