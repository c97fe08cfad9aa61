//! 辞書の構築
//!
//! 辞書ファイルは以下の形式のテキストです。
//!
//! ```text
//! <単語数>\t<最大文字数>
//! <単語1>
//! <単語2>
//! ...
//! ```
//!
//! ヘッダで宣言された単語数だけ行を読み込み、各単語のバイト列をトライへ挿入します。
//! 構築後の辞書は読み取り専用です。
pub mod trie;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::corpus::LineReader;
use crate::errors::{Result, SegmentError};
use crate::utf8;

pub use trie::TrieNode;

/// ヘッダの数値フィールドが取り得る最大値
const MAX_HEADER_VALUE: u32 = i32::MAX as u32;

/// 辞書
///
/// トライの根と、ヘッダで宣言された単語数および最大文字数を保持します。
/// 最大文字数はバイト数ではなく文字数で、辞書の読み込みと分かち書きの
/// 両方の反復回数を制限します。
///
/// # 例
///
/// ```
/// use trieseg::Dictionary;
///
/// let dict = Dictionary::from_reader("2\t4\n自然\n言語\n".as_bytes())?;
/// assert_eq!(dict.num_words(), 2);
/// assert!(dict.contains("自然".as_bytes()));
/// assert!(!dict.contains("自".as_bytes()));
/// # Ok::<(), trieseg::errors::SegmentError>(())
/// ```
///
/// 読み込み後に単語を追加することはできません。
///
/// ```compile_fail
/// let mut dict = trieseg::Dictionary::from_reader("0\t4\n".as_bytes()).unwrap();
/// dict.insert(b"ab");
/// ```
#[derive(Debug)]
pub struct Dictionary {
    root: TrieNode,
    declared_word_count: usize,
    max_len: usize,
    num_words: usize,
}

impl Dictionary {
    /// 空の辞書を作成します。
    ///
    /// # 引数
    ///
    /// * `declared_word_count` - 読み込む単語数の上限
    /// * `max_len` - 単語の最大文字数
    pub(crate) fn new(declared_word_count: usize, max_len: usize) -> Self {
        Self {
            root: TrieNode::new(),
            declared_word_count,
            max_len,
            num_words: 0,
        }
    }

    /// 辞書ファイルを読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合は [`SegmentError::IoError`]、内容が不正な場合は
    /// [`Dictionary::from_reader`] と同じエラーを返します。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// リーダーから辞書を読み込みます。
    ///
    /// # 引数
    ///
    /// * `rdr` - 辞書ファイルのリーダー
    ///
    /// # エラー
    ///
    /// 以下の場合にエラーを返します。
    ///
    /// * ヘッダ行が存在しないか形式が不正な場合 ([`SegmentError::InvalidFormat`])
    /// * ヘッダの数値が `i32::MAX` を超える場合 ([`SegmentError::NumberOverflow`])
    /// * 単語が UTF-8 として不正な場合 ([`SegmentError::Utf8Format`])
    /// * 単語が最大文字数を超える場合 ([`SegmentError::WordLengthOverflow`])
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut lines = LineReader::new(BufReader::new(rdr));
        let header = lines.next_line()?.ok_or_else(|| {
            SegmentError::invalid_format("header", "the header line is missing")
        })?;
        let (declared_word_count, max_len) = parse_header(header)?;

        let mut dict = Self::new(declared_word_count, max_len);
        dict.load_words(&mut lines)?;
        log::debug!(
            "Loaded {} words ({} trie nodes, max length {})",
            dict.num_words,
            dict.num_nodes(),
            dict.max_len,
        );
        Ok(dict)
    }

    /// 宣言された単語数を上限として行を読み込み、トライへ挿入します。
    ///
    /// 宣言数より先に入力が尽きた場合はエラーにせず終了します。
    /// 単語の UTF-8 エラーには、ヘッダ行を1行目とする行番号が付与されます。
    pub(crate) fn load_words<R>(&mut self, lines: &mut LineReader<R>) -> Result<()>
    where
        R: std::io::BufRead,
    {
        for _ in 0..self.declared_word_count {
            let Some(word) = lines.next_line()? else {
                log::warn!(
                    "The dictionary declares {} words but only {} were found",
                    self.declared_word_count,
                    self.num_words,
                );
                break;
            };
            let line_no = self.num_words + 2;
            self.insert(word).map_err(|e| e.at_line(line_no))?;
        }
        Ok(())
    }

    /// 1単語をトライへ挿入します。
    ///
    /// 文字ごとにバイト長を求め、多バイト文字は継続バイトを検証してから
    /// その文字の全バイトを連結します。文字数の検査は各文字を読む前に行われ、
    /// それまでに数えた文字数が最大文字数を超えていればエラーとなります。
    /// そのため最大文字数より1文字長い単語までは受理されます。
    ///
    /// # エラー
    ///
    /// [`SegmentError::Utf8Format`] または [`SegmentError::WordLengthOverflow`]
    pub(crate) fn insert(&mut self, word: &[u8]) -> Result<()> {
        let word_idx = self.num_words;
        let max_len = self.max_len;
        let mut node = &mut self.root;
        let mut pos = 0;
        let mut num_chars = 0;
        while pos < word.len() {
            if num_chars > max_len {
                return Err(SegmentError::word_length_overflow(word_idx, max_len));
            }
            let end = utf8::char_end(word, pos)?;
            for &b in &word[pos..end] {
                node = node.get_or_create_child(b);
            }
            pos = end;
            num_chars += 1;
        }
        node.mark_end();
        self.num_words += 1;
        Ok(())
    }

    /// 単語が辞書に登録されているかを返します。
    pub fn contains(&self, word: &[u8]) -> bool {
        self.root.walk(word).is_some_and(TrieNode::is_end)
    }

    /// トライの根を返します。
    #[inline(always)]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// ヘッダで宣言された単語数を返します。
    #[inline(always)]
    pub fn declared_word_count(&self) -> usize {
        self.declared_word_count
    }

    /// 単語の最大文字数を返します。
    #[inline(always)]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// 実際に読み込まれた単語数（重複を含む）を返します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// トライのノード数を返します。
    pub fn num_nodes(&self) -> usize {
        self.root.num_nodes()
    }
}

/// ヘッダ行を解析し、`(単語数, 最大文字数)` を返します。
///
/// 最初のタブ文字で行を分割し、前後をそれぞれ10進数として解釈します。
///
/// # 引数
///
/// * `line` - 改行を取り除いたヘッダ行
///
/// # エラー
///
/// タブが存在しない、先頭にある、または末尾にある場合と、数字以外のバイトを
/// 含む場合は [`SegmentError::InvalidFormat`] を返します。
/// 数値が `i32::MAX` を超える場合は [`SegmentError::NumberOverflow`] を返します。
///
/// # 例
///
/// ```
/// use trieseg::dictionary::parse_header;
///
/// assert_eq!(parse_header(b"12\t4").unwrap(), (12, 4));
/// assert!(parse_header(b"\t4").is_err());
/// ```
pub fn parse_header(line: &[u8]) -> Result<(usize, usize)> {
    let gap = match line.iter().position(|&b| b == b'\t') {
        Some(gap) if gap != 0 && gap != line.len() - 1 => gap,
        _ => {
            return Err(SegmentError::invalid_format(
                "header",
                "the header must be `<word count>\\t<max length>`",
            ));
        }
    };
    let word_count = parse_decimal("word_count", &line[..gap])?;
    let max_len = parse_decimal("max_len", &line[gap + 1..])?;
    Ok((word_count as usize, max_len as usize))
}

/// 符号なし10進数を解釈します。値は `i32::MAX` 以下に制限されます。
fn parse_decimal(arg: &'static str, digits: &[u8]) -> Result<u32> {
    let mut num: u32 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return Err(SegmentError::invalid_format(
                arg,
                format!("non-digit byte 0x{b:02x}"),
            ));
        }
        let d = u32::from(b - b'0');
        if num > MAX_HEADER_VALUE / 10 || (num == MAX_HEADER_VALUE / 10 && d > MAX_HEADER_VALUE % 10)
        {
            return Err(SegmentError::number_overflow(arg, digits));
        }
        num = num * 10 + d;
    }
    Ok(num)
}
