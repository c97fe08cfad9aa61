//! エラー型の定義
//!
//! このモジュールは、trieseg ライブラリで使用されるすべてのエラー型を定義します。
//! どのエラーも内部で回復されることはなく、呼び出し元へそのまま伝播します。

use std::error::Error;
use std::fmt;

/// trieseg 専用のResult型
///
/// エラー型としてデフォルトで[`SegmentError`]を使用します。
pub type Result<T, E = SegmentError> = std::result::Result<T, E>;

/// trieseg のエラー型
///
/// 辞書の読み込み、分かち書き、評価の各段階で発生し得るエラーを表現します。
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。辞書ヘッダの形式不正などで発生します。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// 数値オーバーフローエラー
    ///
    /// [`NumberOverflowError`]のエラーバリアント。
    #[error(transparent)]
    NumberOverflow(NumberOverflowError),

    /// UTF-8 構造エラー
    ///
    /// [`Utf8FormatError`]のエラーバリアント。
    #[error(transparent)]
    Utf8Format(Utf8FormatError),

    /// 単語長超過エラー
    ///
    /// [`WordLengthOverflowError`]のエラーバリアント。
    #[error(transparent)]
    WordLengthOverflow(WordLengthOverflowError),

    /// 無効な状態エラー
    ///
    /// [`InvalidStateError`]のエラーバリアント。
    #[error(transparent)]
    InvalidState(InvalidStateError),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl SegmentError {
    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// 数値オーバーフローエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 数値フィールドの名前
    /// * `digits` - オーバーフローした数字列
    pub(crate) fn number_overflow(arg: &'static str, digits: &[u8]) -> Self {
        Self::NumberOverflow(NumberOverflowError {
            arg,
            digits: String::from_utf8_lossy(digits).into_owned(),
        })
    }

    /// UTF-8 構造エラーを生成します
    ///
    /// # 引数
    ///
    /// * `pos` - 問題のあるバイトの位置
    /// * `msg` - エラーメッセージ
    pub(crate) fn utf8_format<S>(pos: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Utf8Format(Utf8FormatError {
            line: None,
            pos,
            msg: msg.into(),
        })
    }

    /// UTF-8 構造エラーに1始まりの行番号を付与します。
    ///
    /// その他のエラーはそのまま返します。
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Utf8Format(e) => Self::Utf8Format(Utf8FormatError {
                line: Some(line),
                ..e
            }),
            e => e,
        }
    }

    pub(crate) fn word_length_overflow(word_idx: usize, max_len: usize) -> Self {
        Self::WordLengthOverflow(WordLengthOverflowError { word_idx, max_len })
    }

    /// 無効な状態エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn invalid_state<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::InvalidState(InvalidStateError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }
}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// 数値が符号付き32ビット整数の最大値を超えた場合に使用されるエラー
#[derive(Debug)]
pub struct NumberOverflowError {
    /// 数値フィールドの名前
    pub(crate) arg: &'static str,

    /// 入力された数字列
    pub(crate) digits: String,
}

impl fmt::Display for NumberOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NumberOverflowError: {}: {} exceeds {}",
            self.arg,
            self.digits,
            i32::MAX
        )
    }
}

impl Error for NumberOverflowError {}

/// UTF-8 の先頭バイトまたは継続バイトが不正な場合に使用されるエラー
#[derive(Debug)]
pub struct Utf8FormatError {
    /// 1始まりの行番号
    pub(crate) line: Option<usize>,

    /// 行頭からのバイト位置
    pub(crate) pos: usize,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl Utf8FormatError {
    /// 問題のあるバイトの位置を返します。
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 問題のある行の番号を返します。行が特定されていない場合は `None` です。
    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl fmt::Display for Utf8FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "Utf8FormatError: line {}, byte {}: {}",
                line, self.pos, self.msg
            ),
            None => write!(f, "Utf8FormatError: byte {}: {}", self.pos, self.msg),
        }
    }
}

impl Error for Utf8FormatError {}

/// 辞書の単語が宣言された最大文字数を超えた場合に使用されるエラー
#[derive(Debug)]
pub struct WordLengthOverflowError {
    /// ヘッダ行を除いた0始まりの単語番号
    pub(crate) word_idx: usize,

    /// ヘッダで宣言された最大文字数
    pub(crate) max_len: usize,
}

impl WordLengthOverflowError {
    /// 問題のある単語の番号を返します。
    pub fn word_idx(&self) -> usize {
        self.word_idx
    }
}

impl fmt::Display for WordLengthOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "WordLengthOverflowError: word {} exceeds the maximum length {}",
            self.word_idx, self.max_len
        )
    }
}

impl Error for WordLengthOverflowError {}

/// 状態が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidStateError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}: {}", self.msg, self.cause)
    }
}

impl Error for InvalidStateError {}
