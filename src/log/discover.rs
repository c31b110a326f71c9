use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// One discovered server log, identified by the node label embedded in its
/// file name.
///
/// Example: logs/latest/kvsserver-eu-3.log  =>  node "eu-3"
#[derive(Debug, Clone)]
pub struct LogFile {
    pub node: String,
    pub path: PathBuf,
}

/// Find all `kvsserver-<node>.log` files in `dir`, sorted by full path.
///
/// The node label is the captured middle segment, taken verbatim; the only
/// constraint is that it is non-empty. A missing or unreadable directory
/// yields an empty list; the caller reports "no files" and exits cleanly.
pub fn discover_log_files(dir: &Path) -> anyhow::Result<Vec<LogFile>> {
    let re = Regex::new(r"^kvsserver-(.+)\.log$")?;

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut files: Vec<LogFile> = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(caps) = re.captures(&name) {
            files.push(LogFile {
                node: caps[1].to_string(),
                path: entry.path(),
            });
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
