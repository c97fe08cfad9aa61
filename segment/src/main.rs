//! 分かち書きと評価を一括で実行するユーティリティ
//!
//! 辞書ファイルを読み込んで文ファイルの各行を前方最長一致法で分割し、
//! 正解ファイルと比較した評価結果と分割結果をそれぞれファイルへ書き出します。
//! 引数を省略した場合は作業ディレクトリ内の既定のファイル名を使用します。

use std::path::PathBuf;
use std::time::Instant;

use trieseg::errors::SegmentError;
use trieseg::pipeline::{self, RunConfig};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "segment", about = "Segments sentences and evaluates the result")]
struct Args {
    /// Dictionary file.
    #[clap(short = 'd', long, default_value = pipeline::DEFAULT_DICT_PATH)]
    dict_in: PathBuf,

    /// Sentence file, one sentence per line.
    #[clap(short = 's', long, default_value = pipeline::DEFAULT_SENTENCE_PATH)]
    sentence_in: PathBuf,

    /// Reference answer file, whitespace-separated tokens per line.
    #[clap(short = 'a', long, default_value = pipeline::DEFAULT_ANSWER_PATH)]
    answer_in: PathBuf,

    /// File to which the segmentation is output.
    #[clap(short = 'o', long, default_value = pipeline::DEFAULT_OUTPUT_PATH)]
    output_out: PathBuf,

    /// File to which the per-sentence precision, recall, and F1 are output.
    #[clap(short = 'e', long, default_value = pipeline::DEFAULT_EVALUATION_PATH)]
    evaluation_out: PathBuf,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            dict: args.dict_in,
            sentence: args.sentence_in,
            answer: args.answer_in,
            output: args.output_out,
            evaluation: args.evaluation_out,
        }
    }
}

/// 実行中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
enum RunError {
    /// 分かち書きまたは評価のエラー
    #[error(transparent)]
    Segment(#[from] SegmentError),
}

/// メイン関数
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = RunConfig::from(args);
    log::debug!("{config:?}");

    let start = Instant::now();
    eprintln!("Segmenting and evaluating...");
    let summary = pipeline::run(&config)?;

    eprintln!(
        "{} words, {} sentences, {} references",
        summary.num_words, summary.num_sentences, summary.num_references
    );
    eprintln!("Precision = {}", summary.total.precision);
    eprintln!("Recall = {}", summary.total.recall);
    eprintln!("F1 = {}", summary.total.f1);
    println!("Elapsed: {:?}", start.elapsed());

    Ok(())
}
