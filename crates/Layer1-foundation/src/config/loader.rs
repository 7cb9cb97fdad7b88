//! Configuration Loader
//!
//! rio-deploy 전용 설정 로더 (`.rio-deploy` 폴더만 지원)
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.rio-deploy/settings.json`
//! 2. Project-level: `.rio-deploy/settings.json`
//! 3. Local (gitignored): `.rio-deploy/settings.local.json`
//!
//! 각 레벨의 설정이 이전 레벨을 필드 단위로 오버라이드합니다.

use super::deploy::DeployConfig;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 설정 폴더 이름
pub const CONFIG_DIR_NAME: &str = ".rio-deploy";

// ============================================================================
// ConfigLoader - 설정 로더
// ============================================================================

/// 설정 로더
pub struct ConfigLoader {
    /// 검색 경로
    search_paths: Vec<ConfigPath>,
}

/// 설정 파일 경로 정보
#[derive(Debug, Clone)]
struct ConfigPath {
    /// 경로
    path: PathBuf,
    /// 우선순위 (높을수록 우선)
    priority: u8,
    /// 설명
    description: &'static str,
}

impl ConfigLoader {
    /// 새 로더 생성 (기본 검색 경로)
    pub fn new(working_dir: &Path) -> Self {
        let mut paths = Vec::new();

        // 1. User-level (가장 낮은 우선순위)
        if let Some(home) = dirs::home_dir() {
            paths.push(ConfigPath {
                path: home.join(CONFIG_DIR_NAME).join("settings.json"),
                priority: 10,
                description: "User settings",
            });
        }

        // 2. Project-level
        paths.push(ConfigPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.json"),
            priority: 20,
            description: "Project settings",
        });

        // 3. Local (gitignored, 가장 높은 우선순위)
        paths.push(ConfigPath {
            path: working_dir.join(CONFIG_DIR_NAME).join("settings.local.json"),
            priority: 30,
            description: "Local settings",
        });

        paths.sort_by_key(|p| p.priority);

        Self { search_paths: paths }
    }

    /// 커스텀 검색 경로로 생성 (뒤에 오는 경로가 우선)
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let search_paths = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| ConfigPath {
                path,
                priority: i as u8,
                description: "Custom",
            })
            .collect();

        Self { search_paths }
    }

    /// 모든 경로에서 설정 로드하여 병합
    ///
    /// 읽을 수 없는 파일은 경고만 남기고 건너뜀
    pub fn load_all(&self) -> DeployConfig {
        let mut merged = DeployConfig::new();

        for config_path in &self.search_paths {
            if !config_path.path.exists() {
                continue;
            }
            match load_config_from_file(&config_path.path) {
                Ok(config) => {
                    info!(
                        "Loaded {} from: {}",
                        config_path.description,
                        config_path.path.display()
                    );
                    merged.merge(config);
                }
                Err(e) => {
                    warn!(
                        "Failed to load settings from {}: {}",
                        config_path.path.display(),
                        e
                    );
                }
            }
        }

        merged
    }

    /// 존재하는 설정 파일 목록
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter(|p| p.path.exists())
            .map(|p| p.path.clone())
            .collect()
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 파일에서 설정 로드
pub fn load_config_from_file(path: &Path) -> Result<DeployConfig> {
    let content = std::fs::read_to_string(path)?;

    // JSONC 파일일 수 있음 (주석 제거)
    let content = strip_json_comments(&content);

    let config: DeployConfig = serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Invalid settings.json at {}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded config from {}: team {:?}, wrapper {:?}",
        path.display(),
        config.team_number,
        config.gradle_wrapper
    );

    Ok(config)
}

/// JSON 주석 제거 (`//` 라인 주석, `/* */` 블록 주석)
pub fn strip_json_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(c) = chars.next() {
        if escape_next {
            output.push(c);
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            output.push(c);
            escape_next = true;
            continue;
        }

        if c == '"' {
            in_string = !in_string;
            output.push(c);
            continue;
        }

        if !in_string && c == '/' {
            match chars.peek() {
                Some('/') => {
                    // 라인 주석 스킵
                    for c in chars.by_ref() {
                        if c == '\n' {
                            output.push(c);
                            break;
                        }
                    }
                    continue;
                }
                Some('*') => {
                    // 블록 주석 스킵
                    chars.next();
                    while let Some(c) = chars.next() {
                        if c == '*' && chars.peek() == Some(&'/') {
                            chars.next();
                            break;
                        }
                    }
                    continue;
                }
                _ => {}
            }
        }

        output.push(c);
    }

    output
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_config_loader_new() {
        let loader = ConfigLoader::new(Path::new("."));
        assert!(loader.search_paths.len() >= 2);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_file = dir.path().join("settings.json");

        let content = r#"{
            // team 190
            "teamNumber": 190,
            "gradleWrapper": "gradlew.bat", /* windows */
            "debug": { "address": "10.1.90.2" }
        }"#;

        fs::write(&config_file, content).unwrap();

        let config = load_config_from_file(&config_file).unwrap();
        assert_eq!(config.team_number, Some(190));
        assert_eq!(config.gradle_wrapper(), "gradlew.bat");
        assert_eq!(config.debug_endpoint().address, "10.1.90.2");
    }

    #[test]
    fn test_later_paths_override() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        fs::write(&first, r#"{ "teamNumber": 1, "outputChannel": "first" }"#).unwrap();
        fs::write(&second, r#"{ "teamNumber": 2 }"#).unwrap();

        let config = ConfigLoader::with_paths(vec![first, second]).load_all();
        assert_eq!(config.team_number, Some(2));
        assert_eq!(config.output_channel(), "first");
    }

    #[test]
    fn test_invalid_file_is_skipped() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        let good = dir.path().join("good.json");
        fs::write(&broken, "{ not json").unwrap();
        fs::write(&good, r#"{ "teamNumber": 3 }"#).unwrap();

        let loader = ConfigLoader::with_paths(vec![broken, good]);
        assert_eq!(loader.existing_files().len(), 2);
        assert_eq!(loader.load_all().team_number, Some(3));
    }

    #[test]
    fn test_strip_json_comments_keeps_strings() {
        let input = r#"{ "url": "http://example.com/*x*/", // trailing
            "a": 1 }"#;
        let stripped = strip_json_comments(input);
        assert!(stripped.contains("http://example.com/*x*/"));
        assert!(!stripped.contains("trailing"));
        let value: serde_json::Value = serde_json::from_str(&stripped).unwrap();
        assert_eq!(value["a"], 1);
    }
}
