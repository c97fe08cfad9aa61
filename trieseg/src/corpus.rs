//! 行単位のコーパス入出力
//!
//! 辞書ファイル、文ファイル、正解ファイルはいずれも改行（`0x0A`）で終端された
//! 行の列として読み込みます。分かち書き結果と評価結果の書き出しもこのモジュールが担います。

use std::io::{BufRead, Write};

use crate::errors::Result;
use crate::evaluation::Prf;

/// 改行で終端された行を読み込むリーダー
///
/// 各行は改行を取り除いたバイト列として返されます。最後の改行の後に残る
/// 終端されていない断片は入力の終わりとして扱われ、返されません。
///
/// # 例
///
/// ```
/// use trieseg::corpus::LineReader;
///
/// let lines: Vec<Vec<u8>> = LineReader::new("自然\n言語\n処理".as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec!["自然".as_bytes(), "言語".as_bytes()]);
/// ```
pub struct LineReader<R> {
    rdr: R,
    buf: Vec<u8>,
}

impl<R> LineReader<R>
where
    R: BufRead,
{
    /// 新しいリーダーを作成します。
    pub fn new(rdr: R) -> Self {
        Self { rdr, buf: vec![] }
    }

    /// 次の行を読み込み、内部バッファへの参照を返します。
    ///
    /// # 戻り値
    ///
    /// 入力が尽きた場合は `Ok(None)`
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、[`SegmentError::IoError`](crate::errors::SegmentError::IoError)を返します。
    pub fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        let n = self.rdr.read_until(b'\n', &mut self.buf)?;
        if n == 0 || self.buf.last() != Some(&b'\n') {
            return Ok(None);
        }
        self.buf.pop();
        Ok(Some(&self.buf))
    }
}

impl<R> Iterator for LineReader<R>
where
    R: BufRead,
{
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().map(|line| line.map(<[u8]>::to_vec)).transpose()
    }
}

/// 空白区切りの正解行をトークンに分割します。
///
/// Unicode の空白を区切りとし、空のフィールドは取り除かれます。UTF-8 として
/// 不正なバイトは空白ではない文字として扱われるため、行の一部が不正であっても
/// 残りの部分は同じ規則で区切られます。
pub fn split_reference(line: &[u8]) -> Vec<&[u8]> {
    let mut tokens = vec![];
    let mut start = None;
    let mut pos = 0;
    for chunk in line.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    tokens.push(&line[s..pos + i]);
                }
            } else if start.is_none() {
                start = Some(pos + i);
            }
        }
        pos += chunk.valid().len();
        if !chunk.invalid().is_empty() && start.is_none() {
            start = Some(pos);
        }
        pos += chunk.invalid().len();
    }
    if let Some(s) = start {
        tokens.push(&line[s..]);
    }
    tokens
}

/// 1文分の分かち書き結果を書き出します。
///
/// トークンを半角空白1つで連結し、末尾に `" \n"` を付けます。
/// トークンが1つもない場合は `" \n"` のみを書き出します。
pub fn write_segmentation<W, I, T>(mut wtr: W, tokens: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    for (i, token) in tokens.into_iter().enumerate() {
        if i != 0 {
            wtr.write_all(b" ")?;
        }
        wtr.write_all(token.as_ref())?;
    }
    wtr.write_all(b" \n")?;
    Ok(())
}

/// 1文分の評価結果を `"<P>, <R>, <F>\n"` の形式で書き出します。
pub fn write_prf<W>(mut wtr: W, prf: &Prf) -> Result<()>
where
    W: Write,
{
    writeln!(wtr, "{prf}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_reader() {
        let mut rdr = LineReader::new("a\n\nb\r\nc".as_bytes());
        assert_eq!(rdr.next_line().unwrap(), Some(&b"a"[..]));
        assert_eq!(rdr.next_line().unwrap(), Some(&b""[..]));
        assert_eq!(rdr.next_line().unwrap(), Some(&b"b\r"[..]));
        // 終端されていない断片は読まれない
        assert_eq!(rdr.next_line().unwrap(), None);
        assert_eq!(rdr.next_line().unwrap(), None);
    }

    #[test]
    fn test_line_reader_raw_bytes() {
        let data = [0xE8, 0x87, 0xAA, 0xFF, b'\n'];
        let lines: Vec<Vec<u8>> = LineReader::new(&data[..])
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec![vec![0xE8, 0x87, 0xAA, 0xFF]]);
    }

    #[test]
    fn test_split_reference() {
        assert_eq!(
            split_reference("自然  言語\t処理 ".as_bytes()),
            vec!["自然".as_bytes(), "言語".as_bytes(), "処理".as_bytes()]
        );
        // 全角空白も区切りとして扱う
        assert_eq!(
            split_reference("自然\u{3000}言語".as_bytes()),
            vec!["自然".as_bytes(), "言語".as_bytes()]
        );
        assert_eq!(
            split_reference(&[0xFF, b' ', b' ', b'a']),
            vec![&[0xFF][..], &b"a"[..]]
        );
        assert!(split_reference(b"   ").is_empty());
    }

    #[test]
    fn test_split_reference_invalid_utf8() {
        // 不正なバイトを含む行でも全角空白で区切る
        let mut line = "自然\u{3000}".as_bytes().to_vec();
        line.extend_from_slice(&[0xFF, b'a', 0xE8]);
        line.extend_from_slice("\u{3000}言語 ".as_bytes());
        assert_eq!(
            split_reference(&line),
            vec!["自然".as_bytes(), &[0xFF, b'a', 0xE8][..], "言語".as_bytes()]
        );
        assert_eq!(split_reference(&[0x80]), vec![&[0x80][..]]);
    }

    #[test]
    fn test_write_segmentation() {
        let mut out = vec![];
        write_segmentation(&mut out, ["自然", "言語処理"]).unwrap();
        write_segmentation(&mut out, Vec::<&[u8]>::new()).unwrap();
        assert_eq!(out, "自然 言語処理 \n \n".as_bytes());
    }

    #[test]
    fn test_write_prf() {
        let mut out = vec![];
        write_prf(&mut out, &Prf::from_counts(1, 3, 2)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.333, 0.500, 0.400\n");
    }
}
