// src/options.rs
use clap::ValueEnum;
use linecount_engine::MatchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ログ出力のみ
    #[default]
    Log,
    /// 拡張子別の表
    Table,
    Json,
}

/// 拡張子の照合方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum MatchModeArg {
    /// 単純な後方一致 (`Xjava` も `java` に一致)
    Suffix,
    /// `.` の直後から一致する場合のみ
    Dotted,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(MatchModeArg, MatchMode, Suffix, Dotted);
