//! 日志初始化
//!
//! 终端处于备用屏幕时不能写 stderr，日志写入缓存目录下的文件。
//! 拿不到缓存目录或无法打开文件时不记录日志，程序照常运行。

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// 在缓存目录下打开日志文件 (<cache>/simple-counter/simple-counter.log)
fn open_log_file(cache_dir: Option<PathBuf>) -> io::Result<Option<(PathBuf, File)>> {
    let Some(cache_dir) = cache_dir else {
        return Ok(None);
    };

    let dir = cache_dir.join("simple-counter");
    fs::create_dir_all(&dir)?;

    let path = dir.join("simple-counter.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(Some((path, file)))
}

/// 初始化 env_logger，RUST_LOG 优先于配置中的级别
///
/// 返回日志文件路径；没有启用日志时返回 None。
pub fn init(default_level: &str) -> Option<PathBuf> {
    let (path, file) = match open_log_file(dirs::cache_dir()) {
        Ok(Some(opened)) => opened,
        Ok(None) => return None,
        Err(e) => {
            eprintln!("无法打开日志文件，日志已禁用: {}", e);
            return None;
        }
    };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    Some(path)
}
