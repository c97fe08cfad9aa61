//! トークンの結果コンテナ
//!
//! トークンは[`Worker`]への軽量な参照であり、実際のデータはWorkerが保持しています。

use std::iter::FusedIterator;
use std::ops::Range;

use crate::tokenizer::worker::Worker;

/// 分かち書きの結果トークン
///
/// トークンはWorkerが生存している間のみ有効です。
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    /// トークンのバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let span = &self.worker.spans[self.index];
        span.start..span.end
    }

    /// トークンの表層形（元の文中のバイト列）を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &'w [u8] {
        let span = &self.worker.spans[self.index];
        &self.worker.sent[span.start..span.end]
    }

    /// 辞書語であれば `true`、未知語として切り出された1文字であれば `false` を返します。
    #[inline(always)]
    pub fn is_known(&self) -> bool {
        self.worker.spans[self.index].known
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("surface", &String::from_utf8_lossy(self.surface()))
            .field("range_byte", &self.range_byte())
            .field("is_known", &self.is_known())
            .finish()
    }
}

/// トークンのイテレータ
pub struct TokenIter<'w> {
    worker: &'w Worker,
    i: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker) -> Self {
        Self { worker, i: 0 }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.i < self.worker.num_tokens() {
            let t = self.worker.token(self.i);
            self.i += 1;
            Some(t)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.worker.num_tokens() - self.i;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for TokenIter<'_> {}

impl FusedIterator for TokenIter<'_> {}

#[cfg(test)]
mod tests {
    use crate::dictionary::Dictionary;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn test_token() {
        let dict = Dictionary::from_reader("2\t4\n自然\n言語\n".as_bytes()).unwrap();
        let tokenizer = Tokenizer::new(dict);
        let mut worker = tokenizer.new_worker();
        worker.reset_sentence("自然の言語".as_bytes());
        worker.tokenize().unwrap();

        let mut it = worker.token_iter();
        assert_eq!(it.len(), 3);
        {
            let t = it.next().unwrap();
            assert_eq!(t.surface(), "自然".as_bytes());
            assert_eq!(t.range_byte(), 0..6);
            assert!(t.is_known());
        }
        {
            let t = it.next().unwrap();
            assert_eq!(t.surface(), "の".as_bytes());
            assert_eq!(t.range_byte(), 6..9);
            assert!(!t.is_known());
        }
        {
            let t = it.next().unwrap();
            assert_eq!(t.surface(), "言語".as_bytes());
            assert_eq!(t.range_byte(), 9..15);
            assert!(t.is_known());
        }
        assert!(it.next().is_none());
    }
}
