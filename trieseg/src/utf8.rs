//! UTF-8 の文字境界の判定
//!
//! 辞書の読み込みと分かち書きの両方がこのモジュールの関数を通して文字境界を求めます。
//! 検証は先頭バイトのビット数と継続バイトの範囲のみを対象とする構造的なもので、
//! 冗長表現やサロゲートの検出は行いません。

use crate::errors::{Result, SegmentError};

/// 先頭バイトから文字のバイト長を求めます。
///
/// 最上位ビットが0であれば1（ASCII）を返します。それ以外の場合は最上位ビットから
/// 連続する1の数をバイト長とします。
///
/// # 引数
///
/// * `lead` - 文字の先頭バイト
///
/// # エラー
///
/// 連続する1の数が2から4の範囲外の場合、[`SegmentError::Utf8Format`]を返します。
/// このとき位置は0として報告されるため、位置を伴うエラーが必要な場合は
/// [`char_byte_len_at`] を使用してください。
#[inline(always)]
pub fn char_byte_len(lead: u8) -> Result<usize> {
    if lead & 0x80 == 0 {
        return Ok(1);
    }
    let len = lead.leading_ones() as usize;
    if !(2..=4).contains(&len) {
        return Err(SegmentError::utf8_format(
            0,
            format!("invalid leading byte 0x{lead:02x}"),
        ));
    }
    Ok(len)
}

/// `buf[pos]` を先頭バイトとする文字のバイト長を求めます。
///
/// エラーにはバイト位置が付与されます。
#[inline(always)]
pub fn char_byte_len_at(buf: &[u8], pos: usize) -> Result<usize> {
    char_byte_len(buf[pos]).map_err(|_| {
        SegmentError::utf8_format(pos, format!("invalid leading byte 0x{:02x}", buf[pos]))
    })
}

/// 継続バイトを検証します。
///
/// `pos` からの相対位置 `1..len` の各バイトが範囲内に存在し、かつ
/// `0x80..=0xBF`（上位2ビットが `10`）であることを確認します。
///
/// # 引数
///
/// * `buf` - 検証対象のバイト列
/// * `pos` - 文字の先頭バイトの位置
/// * `len` - 文字のバイト長
///
/// # エラー
///
/// 継続バイトが欠けているか範囲外の場合、[`SegmentError::Utf8Format`]を返します。
pub fn validate_continuation_bytes(buf: &[u8], pos: usize, len: usize) -> Result<()> {
    for k in 1..len {
        match buf.get(pos + k) {
            Some(0x80..=0xBF) => {}
            Some(b) => {
                return Err(SegmentError::utf8_format(
                    pos + k,
                    format!("invalid continuation byte 0x{b:02x}"),
                ));
            }
            None => {
                return Err(SegmentError::utf8_format(
                    pos + k,
                    "truncated multi-byte character",
                ));
            }
        }
    }
    Ok(())
}

/// `buf[pos]` から始まる1文字を検証し、その直後の位置を返します。
///
/// # 戻り値
///
/// 文字の終端（排他的）のバイト位置
#[inline(always)]
pub fn char_end(buf: &[u8], pos: usize) -> Result<usize> {
    let len = char_byte_len_at(buf, pos)?;
    if len > 1 {
        validate_continuation_bytes(buf, pos, len)?;
    }
    Ok(pos + len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_len() {
        assert_eq!(char_byte_len(b'a').unwrap(), 1);
        assert_eq!(char_byte_len(0x00).unwrap(), 1);
        assert_eq!(char_byte_len(0xC3).unwrap(), 2);
        assert_eq!(char_byte_len("自".as_bytes()[0]).unwrap(), 3);
        assert_eq!(char_byte_len("😀".as_bytes()[0]).unwrap(), 4);
    }

    #[test]
    fn test_char_byte_len_invalid() {
        // 継続バイトは先頭バイトになれない
        assert!(matches!(
            char_byte_len(0x80),
            Err(SegmentError::Utf8Format(_))
        ));
        assert!(matches!(
            char_byte_len(0xF8),
            Err(SegmentError::Utf8Format(_))
        ));
        assert!(matches!(
            char_byte_len(0xFF),
            Err(SegmentError::Utf8Format(_))
        ));
    }

    #[test]
    fn test_validate_continuation_bytes() {
        let buf = "自然".as_bytes();
        validate_continuation_bytes(buf, 0, 3).unwrap();
        validate_continuation_bytes(buf, 3, 3).unwrap();

        let truncated = &buf[..5];
        match validate_continuation_bytes(truncated, 3, 3) {
            Err(SegmentError::Utf8Format(e)) => assert_eq!(e.pos(), 5),
            _ => panic!("expected a Utf8Format error"),
        }

        let broken = [0xE8, 0x87, b'a'];
        match validate_continuation_bytes(&broken, 0, 3) {
            Err(SegmentError::Utf8Format(e)) => assert_eq!(e.pos(), 2),
            _ => panic!("expected a Utf8Format error"),
        }
    }

    #[test]
    fn test_char_end() {
        let buf = "a自b".as_bytes();
        assert_eq!(char_end(buf, 0).unwrap(), 1);
        assert_eq!(char_end(buf, 1).unwrap(), 4);
        assert_eq!(char_end(buf, 4).unwrap(), 5);

        match char_end(&[b'a', 0xBF], 1) {
            Err(SegmentError::Utf8Format(e)) => assert_eq!(e.pos(), 1),
            _ => panic!("expected a Utf8Format error"),
        }
    }
}
