//! 分かち書き結果の精度を評価するユーティリティ
//!
//! 書き出し済みの分割結果ファイルと正解ファイルを行ごとに比較し、
//! 文ごとの適合率（Precision）、再現率（Recall）、F1スコアを評価ファイルへ書き出します。
//! コーパス全体の評価値は標準出力に表示します。

use std::error::Error;
use std::path::PathBuf;

use trieseg::pipeline;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "evaluate", about = "Evaluate the segmentation accuracy")]
struct Args {
    /// Reference answer file, whitespace-separated tokens per line.
    #[clap(short = 'a', long, default_value = pipeline::DEFAULT_ANSWER_PATH)]
    answer_in: PathBuf,

    /// Segmentation output to be evaluated.
    #[clap(short = 'i', long, default_value = pipeline::DEFAULT_OUTPUT_PATH)]
    output_in: PathBuf,

    /// File to which the per-sentence precision, recall, and F1 are output.
    #[clap(short = 'e', long, default_value = pipeline::DEFAULT_EVALUATION_PATH)]
    evaluation_out: PathBuf,
}

/// メイン関数
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("Evaluating...");
    let total = pipeline::evaluate_files(&args.answer_in, &args.output_in, &args.evaluation_out)?;
    log::debug!("Wrote {}", args.evaluation_out.display());

    println!("Precision = {}", total.precision);
    println!("Recall = {}", total.recall);
    println!("F1 = {}", total.f1);

    Ok(())
}
