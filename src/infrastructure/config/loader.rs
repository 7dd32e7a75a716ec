//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

/// 명시 설정 파일 경로를 지정하는 환경변수.
pub const CONFIG_PATH_ENV: &str = "CODECHECK_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 낮은 우선순위부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    // 설정 파일이 하나도 없어도 기본값(+환경변수 키)으로 기동할 수 있다.
    tracing::debug!(loaded = loaded_paths.len(), "config files merged");

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/codecheck/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("codecheck").join("config.json"));
    }

    paths.push(PathBuf::from(".codecheck/config.json"));

    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn merges_existing_files_in_order_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let low = write(
            dir.path(),
            "low.json",
            r#"{"server":{"port":9000},"provider":{"model":"low","max_tokens":50}}"#,
        );
        let missing = dir.path().join("missing.json");
        let high = write(dir.path(), "high.json", r#"{"provider":{"model":"high"}}"#);

        let loaded = load_from_paths(vec![low.clone(), missing, high.clone()]).unwrap();

        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.config.port(), 9000);
        let settings = loaded.config.review_settings();
        assert_eq!(settings.model, "high");
        assert_eq!(settings.max_tokens, 50);
    }

    #[test]
    fn no_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_paths(vec![dir.path().join("nope.json")]).unwrap();

        assert!(loaded.loaded_paths.is_empty());
        assert_eq!(loaded.config.port(), 8000);
    }

    #[test]
    fn malformed_file_is_an_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.json", "{ not json");

        let err = load_from_paths(vec![bad.clone()]).unwrap_err();
        assert!(err.to_string().contains(&bad.display().to_string()));
    }

    #[test]
    fn duplicate_paths_are_collapsed() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }
}
