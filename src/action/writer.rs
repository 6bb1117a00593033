//! # action 文件写出
//!
//! 分阶段提交，失败时不留下截断的输出文件：
//! 1. 检查所有目标：已存在的目录不能作为输出
//! 2. 所有内容先写到目标旁边的临时文件 `.<name>.tmp`
//! 3. 全部写成功后再逐个 rename 到目标路径
//!
//! 任一步失败都会清理已写出的临时文件。rename 本身只对单个文件是原子的：
//! 前两步通过后，第 3 步仍可能在中途失败（如目标被并发替换为目录）。

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// 待写出的文件
#[derive(Debug, Clone)]
pub struct RenderedAction {
    pub path: PathBuf,
    pub content: String,
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

fn cleanup(staged: &[PathBuf]) {
    for tmp in staged {
        if let Err(e) = fs::remove_file(tmp) {
            debug!("failed to remove {}: {}", tmp.display(), e);
        }
    }
}

/// rename 无法覆盖目录，提前拒绝
fn check_target(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::Write {
            path: path.to_path_buf(),
            source: io::Error::other("target is a directory"),
        });
    }
    Ok(())
}

/// 写出全部文件
pub fn write_all(actions: &[RenderedAction]) -> Result<()> {
    for action in actions {
        check_target(&action.path)?;
    }

    let mut staged = Vec::with_capacity(actions.len());

    for action in actions {
        let tmp = staging_path(&action.path);
        if let Err(source) = fs::write(&tmp, &action.content) {
            cleanup(&staged);
            return Err(Error::Write {
                path: action.path.clone(),
                source,
            });
        }
        staged.push(tmp);
    }

    for (i, (action, tmp)) in actions.iter().zip(&staged).enumerate() {
        if let Err(source) = fs::rename(tmp, &action.path) {
            cleanup(&staged[i..]);
            return Err(Error::Write {
                path: action.path.clone(),
                source,
            });
        }
        info!("Wrote {}", action.path.display());
    }

    Ok(())
}

// ========================================
// 测试模块
// ========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path() {
        assert_eq!(
            staging_path(Path::new("/etc/privoxy/gfwlist.action")),
            PathBuf::from("/etc/privoxy/.gfwlist.action.tmp")
        );
        assert_eq!(
            staging_path(Path::new("white.action")),
            PathBuf::from(".white.action.tmp")
        );
    }

    #[test]
    fn test_write_all() {
        let dir = tempfile::tempdir().unwrap();
        let actions = vec![
            RenderedAction {
                path: dir.path().join("gfwlist.action"),
                content: ".example.com\n".to_string(),
            },
            RenderedAction {
                path: dir.path().join("white.action"),
                content: ".example.org\n".to_string(),
            },
        ];

        write_all(&actions).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("gfwlist.action")).unwrap(),
            ".example.com\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("white.action")).unwrap(),
            ".example.org\n"
        );
        assert!(!dir.path().join(".gfwlist.action.tmp").exists());
    }

    #[test]
    fn test_failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let actions = vec![
            RenderedAction {
                path: dir.path().join("gfwlist.action"),
                content: ".example.com\n".to_string(),
            },
            RenderedAction {
                path: dir.path().join("missing-dir").join("white.action"),
                content: ".example.org\n".to_string(),
            },
        ];

        let err = write_all(&actions).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));

        let leftover: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftover.is_empty());
    }

    #[test]
    fn test_directory_target_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let block = dir.path().join("gfwlist.action");
        let white = dir.path().join("white.action");
        fs::write(&block, "old\n").unwrap();
        fs::create_dir(&white).unwrap();

        let actions = vec![
            RenderedAction {
                path: block.clone(),
                content: ".example.com\n".to_string(),
            },
            RenderedAction {
                path: white.clone(),
                content: ".example.org\n".to_string(),
            },
        ];

        let err = write_all(&actions).unwrap_err();
        assert!(matches!(err, Error::Write { ref path, .. } if path == &white));
        assert_eq!(fs::read_to_string(&block).unwrap(), "old\n");
        assert!(!dir.path().join(".gfwlist.action.tmp").exists());
        assert!(!dir.path().join(".white.action.tmp").exists());
    }
}
