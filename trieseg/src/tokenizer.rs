//! 前方最長一致法に基づくトークナイザー。
//!
//! 文の先頭から順に、現在位置から始まる辞書語のうち最長のものを貪欲に切り出します。
//! どの辞書語も始まらない位置では1文字を未知語として切り出します。
//! 結果のトークン列は隙間なく連結すると元の文のバイト列に一致します。
//!
//! # 主要な構造体
//!
//! - [`Tokenizer`]: 辞書を保持するトークナイザー
//! - [`Worker`]: 文ごとの作業領域を保持し、実際の分割処理を行う
//!
//! # 例
//!
//! ```
//! use trieseg::{Dictionary, Tokenizer};
//!
//! let dict = Dictionary::from_reader("3\t4\n自然\n言語\n言語処理\n".as_bytes())?;
//! let tokenizer = Tokenizer::new(dict);
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("自然言語処理です".as_bytes());
//! worker.tokenize()?;
//!
//! let surfaces: Vec<&[u8]> = worker.token_iter().map(|t| t.surface()).collect();
//! assert_eq!(
//!     surfaces,
//!     vec![
//!         "自然".as_bytes(),
//!         "言語処理".as_bytes(),
//!         "で".as_bytes(),
//!         "す".as_bytes(),
//!     ]
//! );
//! # Ok::<(), trieseg::errors::SegmentError>(())
//! ```
pub mod worker;

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::errors::Result;
use crate::tokenizer::worker::{Span, Worker};
use crate::utf8;

/// 前方最長一致法による分かち書きを行うトークナイザー。
///
/// 辞書は構築後に変更されないため、[`Arc`] で複数のトークナイザー間で共有できます。
#[derive(Clone)]
pub struct Tokenizer {
    dict: Arc<Dictionary>,
}

impl Tokenizer {
    /// 新しいトークナイザーを作成します。
    ///
    /// # 引数
    ///
    /// * `dict` - 分かち書きに使用する辞書
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict: Arc::new(dict),
        }
    }

    /// 共有された辞書から新しいトークナイザーを作成します。
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self { dict }
    }

    /// 辞書への参照を返します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 新しいワーカーを作成します。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// 1文を分割し、各トークンのバイト列を返します。
    ///
    /// 複数の文を処理する場合は [`Worker`] を再利用する方が効率的です。
    ///
    /// # エラー
    ///
    /// 文が UTF-8 として不正な場合、[`SegmentError::Utf8Format`](crate::errors::SegmentError::Utf8Format)を返します。
    pub fn tokenize(&self, sentence: &[u8]) -> Result<Vec<Vec<u8>>> {
        let mut spans = vec![];
        self.segment(sentence, &mut spans)?;
        Ok(spans
            .into_iter()
            .map(|span| sentence[span.start..span.end].to_vec())
            .collect())
    }

    /// 文全体を分割し、トークンの範囲を `spans` に追加します。
    pub(crate) fn segment(&self, sentence: &[u8], spans: &mut Vec<Span>) -> Result<()> {
        let mut i = 0;
        while i < sentence.len() {
            let span = match self.longest_match(sentence, i)? {
                Some(end) => Span::known(i, end),
                None => Span::unknown(i, utf8::char_end(sentence, i)?),
            };
            i = span.end;
            spans.push(span);
        }
        Ok(())
    }

    /// `start` から始まる最長の辞書語の終端位置を求めます。
    ///
    /// トライを根から1文字ずつ辿り、終端印の付いたノードに到達するたびに
    /// その位置を記録します。次のバイトに対応する子が存在しない場合か、
    /// 辿った文字数が最大文字数を超えた場合に探索を終えます。
    ///
    /// # 戻り値
    ///
    /// 辞書語が見つからなかった場合は `None`
    fn longest_match(&self, sentence: &[u8], start: usize) -> Result<Option<usize>> {
        let max_len = self.dict.max_len();
        let mut node = self.dict.root();
        let mut last_end = None;
        let mut j = start;
        let mut num_chars = 0;
        while j < sentence.len() {
            if num_chars > max_len {
                break;
            }
            let Some(mut next) = node.child(sentence[j]) else {
                break;
            };
            let len = utf8::char_byte_len_at(sentence, j)?;
            if len > 1 {
                utf8::validate_continuation_bytes(sentence, j, len)?;
            }
            for &b in &sentence[j + 1..j + len] {
                match next.child(b) {
                    Some(child) => next = child,
                    None => return Ok(last_end),
                }
            }
            node = next;
            j += len;
            if node.is_end() {
                last_end = Some(j);
            }
            num_chars += 1;
        }
        Ok(last_end)
    }
}
