//! 辞書の読み込みから評価結果の出力までの一括処理
//!
//! 処理は次の順に逐次実行されます。
//!
//! 1. 辞書ファイルを読み込み、トライを構築する
//! 2. 文ファイルの全行を分割し、結果をメモリに保持する
//! 3. 正解ファイルの各行を同じ位置の文の分割結果と比較し、評価ファイルへ書き出す
//! 4. 分割結果を出力ファイルへ書き出す
//!
//! 最初に検出されたエラーで処理全体が中断されます。

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::corpus::{self, LineReader};
use crate::dictionary::Dictionary;
use crate::errors::{Result, SegmentError};
use crate::evaluation::{Evaluator, Prf};
use crate::tokenizer::Tokenizer;

/// 既定の辞書ファイル名
pub const DEFAULT_DICT_PATH: &str = "corpus.dict.txt";
/// 既定の文ファイル名
pub const DEFAULT_SENTENCE_PATH: &str = "corpus.sentence.txt";
/// 既定の正解ファイル名
pub const DEFAULT_ANSWER_PATH: &str = "corpus.answer.txt";
/// 既定の分割結果ファイル名
pub const DEFAULT_OUTPUT_PATH: &str = "corpus.output.txt";
/// 既定の評価結果ファイル名
pub const DEFAULT_EVALUATION_PATH: &str = "corpus.evaluation.txt";

/// 一括処理で使用するファイルパスの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// 辞書ファイル
    pub dict: PathBuf,
    /// 文ファイル
    pub sentence: PathBuf,
    /// 正解ファイル
    pub answer: PathBuf,
    /// 分割結果の出力先
    pub output: PathBuf,
    /// 評価結果の出力先
    pub evaluation: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dict: PathBuf::from(DEFAULT_DICT_PATH),
            sentence: PathBuf::from(DEFAULT_SENTENCE_PATH),
            answer: PathBuf::from(DEFAULT_ANSWER_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            evaluation: PathBuf::from(DEFAULT_EVALUATION_PATH),
        }
    }
}

impl RunConfig {
    /// すべてのファイルを指定したディレクトリ内の既定のファイル名とする設定を作成します。
    pub fn in_dir<P>(dir: P) -> Self
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        Self {
            dict: dir.join(DEFAULT_DICT_PATH),
            sentence: dir.join(DEFAULT_SENTENCE_PATH),
            answer: dir.join(DEFAULT_ANSWER_PATH),
            output: dir.join(DEFAULT_OUTPUT_PATH),
            evaluation: dir.join(DEFAULT_EVALUATION_PATH),
        }
    }
}

/// 一括処理の結果の概要
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// 辞書に読み込まれた単語数
    pub num_words: usize,
    /// 分割した文の数
    pub num_sentences: usize,
    /// 評価した正解行の数
    pub num_references: usize,
    /// コーパス全体の評価値
    pub total: Prf,
}

/// 設定に従って一括処理を実行します。
///
/// # エラー
///
/// 各段階で最初に検出されたエラーを返します。正解ファイルの行数が文の数を
/// 超える場合は [`SegmentError::InvalidState`] を返します。
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let dict = Dictionary::from_path(&config.dict)?;
    let num_words = dict.num_words();
    let tokenizer = Tokenizer::new(dict);

    let segmented = segment_file(&tokenizer, &config.sentence)?;
    log::debug!("Segmented {} sentences", segmented.len());

    let mut evaluator = Evaluator::new();
    {
        let answer = File::open(&config.answer)?;
        let mut wtr = BufWriter::new(File::create(&config.evaluation)?);
        evaluate_lines(
            LineReader::new(BufReader::new(answer)),
            &segmented,
            &mut evaluator,
            &mut wtr,
        )?;
        wtr.flush()?;
    }

    {
        let mut wtr = BufWriter::new(File::create(&config.output)?);
        for tokens in &segmented {
            corpus::write_segmentation(&mut wtr, tokens)?;
        }
        wtr.flush()?;
    }

    Ok(RunSummary {
        num_words,
        num_sentences: segmented.len(),
        num_references: evaluator.num_sentences(),
        total: evaluator.total(),
    })
}

/// 文ファイルの全行を分割します。
///
/// # 戻り値
///
/// 文ごとのトークン列
///
/// # エラー
///
/// 文が UTF-8 として不正な場合、1始まりの行番号を付与した
/// [`SegmentError::Utf8Format`] を返します。
pub fn segment_file<P>(tokenizer: &Tokenizer, path: P) -> Result<Vec<Vec<Vec<u8>>>>
where
    P: AsRef<Path>,
{
    let rdr = BufReader::new(File::open(path)?);
    let mut lines = LineReader::new(rdr);
    let mut worker = tokenizer.new_worker();
    let mut segmented = vec![];
    while let Some(line) = lines.next_line()? {
        worker.reset_sentence(line);
        worker
            .tokenize()
            .map_err(|e| e.at_line(segmented.len() + 1))?;
        segmented.push(worker.token_iter().map(|t| t.surface().to_vec()).collect());
    }
    Ok(segmented)
}

/// 正解行を順に読み、同じ位置のシステム出力と比較して評価行を書き出します。
///
/// # 引数
///
/// * `answers` - 正解ファイルの行
/// * `system` - 文ごとのシステムのトークン列
/// * `evaluator` - 評価値の集計先
/// * `wtr` - 評価結果の書き込み先
///
/// # エラー
///
/// 正解行が `system` の文数より多い場合は [`SegmentError::InvalidState`] を返します。
pub fn evaluate_lines<R, T, W>(
    answers: LineReader<R>,
    system: &[Vec<T>],
    evaluator: &mut Evaluator,
    mut wtr: W,
) -> Result<()>
where
    R: std::io::BufRead,
    T: AsRef<[u8]>,
    W: Write,
{
    for (i, answer) in answers.enumerate() {
        let answer = answer?;
        let Some(tokens) = system.get(i) else {
            return Err(SegmentError::invalid_state(
                "the answer file has more lines than the segmented sentences",
                format!("line {} has no counterpart in {} sentences", i + 1, system.len()),
            ));
        };
        let reference = corpus::split_reference(&answer);
        let prf = evaluator.add(&reference, tokens);
        corpus::write_prf(&mut wtr, &prf)?;
    }
    Ok(())
}

/// 書き出し済みの分割結果ファイルを正解ファイルと比較し、評価結果を書き出します。
///
/// 分割結果ファイルの各行は空白区切りのトークン列として読み込まれます。
///
/// # 戻り値
///
/// コーパス全体の評価値
pub fn evaluate_files<P, Q, S>(answer: P, output: Q, evaluation: S) -> Result<Prf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    let system = {
        let rdr = BufReader::new(File::open(output)?);
        let mut system = vec![];
        for line in LineReader::new(rdr) {
            let line = line?;
            let tokens: Vec<Vec<u8>> = corpus::split_reference(&line)
                .into_iter()
                .map(<[u8]>::to_vec)
                .collect();
            system.push(tokens);
        }
        system
    };

    let mut evaluator = Evaluator::new();
    let answer = BufReader::new(File::open(answer)?);
    let mut wtr = BufWriter::new(File::create(evaluation)?);
    evaluate_lines(LineReader::new(answer), &system, &mut evaluator, &mut wtr)?;
    wtr.flush()?;
    Ok(evaluator.total())
}
