//! 文ごとの分割処理を行うワーカー
//!
//! ワーカーは入力文とトークン境界のバッファを保持し、再利用することで
//! 文ごとのメモリ再割り当てを回避します。
use crate::errors::Result;
use crate::token::{Token, TokenIter};
use crate::tokenizer::Tokenizer;

/// トークンのバイト範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) known: bool,
}

impl Span {
    #[inline(always)]
    pub(crate) const fn known(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            known: true,
        }
    }

    #[inline(always)]
    pub(crate) const fn unknown(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            known: false,
        }
    }
}

/// 分割処理のためのルーチンを提供する構造体。
///
/// # 例
///
/// ```
/// use trieseg::{Dictionary, Tokenizer};
///
/// let dict = Dictionary::from_reader("1\t2\nab\n".as_bytes())?;
/// let mut worker = Tokenizer::new(dict).new_worker();
///
/// worker.reset_sentence(b"abxy");
/// worker.tokenize()?;
/// assert_eq!(worker.num_tokens(), 3);
/// assert!(worker.token(0).is_known());
/// assert!(!worker.token(1).is_known());
/// # Ok::<(), trieseg::errors::SegmentError>(())
/// ```
pub struct Worker {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) sent: Vec<u8>,
    pub(crate) spans: Vec<Span>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `tokenizer` - 使用するトークナイザー
    pub(crate) fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            sent: vec![],
            spans: vec![],
        }
    }

    /// 分割する入力文をリセットします。
    ///
    /// 以前の文と分割結果は破棄されます。
    ///
    /// # 引数
    ///
    /// * `input` - 分割する文のバイト列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<[u8]>,
    {
        self.sent.clear();
        self.spans.clear();
        self.sent.extend_from_slice(input.as_ref());
    }

    /// 設定された入力文を分割します。
    ///
    /// 分割結果は内部状態に保存され、[`token_iter()`](Self::token_iter)や
    /// [`token()`](Self::token)でアクセスできます。
    ///
    /// # エラー
    ///
    /// 文が UTF-8 として不正な場合、[`SegmentError::Utf8Format`](crate::errors::SegmentError::Utf8Format)を返します。
    /// このときトークン列は空になります。
    pub fn tokenize(&mut self) -> Result<()> {
        self.spans.clear();
        let result = self.tokenizer.segment(&self.sent, &mut self.spans);
        if result.is_err() {
            self.spans.clear();
        }
        result
    }

    /// 入力文のバイト列を返します。
    #[inline(always)]
    pub fn sentence(&self) -> &[u8] {
        &self.sent
    }

    /// 分割結果のトークン数を返します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.spans.len()
    }

    /// `i` 番目のトークンを返します。
    ///
    /// # パニック
    ///
    /// `i` がトークン数以上の場合
    #[inline(always)]
    pub fn token<'w>(&'w self, i: usize) -> Token<'w> {
        assert!(i < self.num_tokens());
        Token::new(self, i)
    }

    /// トークンのイテレータを返します。
    #[inline(always)]
    pub fn token_iter<'w>(&'w self) -> TokenIter<'w> {
        TokenIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dictionary::Dictionary;
    use crate::errors::SegmentError;

    fn build_worker() -> Worker {
        let dict = Dictionary::from_reader("3\t4\nab\ncd\nabcd\n".as_bytes()).unwrap();
        Tokenizer::new(dict).new_worker()
    }

    #[test]
    fn test_reuse() {
        let mut worker = build_worker();

        worker.reset_sentence(b"abcdab");
        worker.tokenize().unwrap();
        let spans: Vec<_> = worker.token_iter().map(|t| t.range_byte()).collect();
        assert_eq!(spans, vec![0..4, 4..6]);

        worker.reset_sentence(b"cdx");
        worker.tokenize().unwrap();
        let spans: Vec<_> = worker.token_iter().map(|t| t.range_byte()).collect();
        assert_eq!(spans, vec![0..2, 2..3]);
        assert!(worker.token(0).is_known());
        assert!(!worker.token(1).is_known());

        // 2回呼んでも結果は変わらない
        worker.tokenize().unwrap();
        assert_eq!(worker.num_tokens(), 2);
    }

    #[test]
    fn test_error_clears_tokens() {
        let mut worker = build_worker();
        worker.reset_sentence([b'a', b'b', 0xC3]);
        assert!(matches!(
            worker.tokenize(),
            Err(SegmentError::Utf8Format(_))
        ));
        assert_eq!(worker.num_tokens(), 0);
    }

    #[test]
    fn test_empty_sentence() {
        let mut worker = build_worker();
        worker.reset_sentence(b"");
        worker.tokenize().unwrap();
        assert_eq!(worker.num_tokens(), 0);
        assert_eq!(worker.token_iter().count(), 0);
    }
}
