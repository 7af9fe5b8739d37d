// src/args.rs
use crate::options::{MatchModeArg, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "linecount",
    version = crate::VERSION,
    about = "ソース/リソースディレクトリのファイル数と行数を拡張子別に集計するツール"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// ビルド設定マニフェスト (.yaml / .yml / .json)
    #[arg(long, short = 'm')]
    pub manifest: Option<PathBuf>,

    /// ソースディレクトリ (マニフェストの値を上書き)
    #[arg(long, short = 's')]
    pub source: Option<PathBuf>,

    /// リソースディレクトリ (複数可, マニフェストの値に追加)
    #[arg(long = "resource", short = 'r')]
    pub resources: Vec<PathBuf>,

    /// 集計する拡張子 (複数可, カンマ区切り可)
    #[arg(long = "ext", short = 'e', value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// ソースディレクトリを走査しない (パスの表示のみ)
    #[arg(long)]
    pub no_source: bool,

    /// 拡張子の照合方法
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// シンボリックリンクを辿らない
    #[arg(long)]
    pub no_follow: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "log")]
    pub format: OutputFormat,

    /// 表/JSON の出力先ファイル (省略時は標準出力)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// デバッグログを出力
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
