//! Config - 배포 설정
//!
//! - `deploy.rs` - DeployConfig (팀 번호, Gradle wrapper, 디버그 엔드포인트)
//! - `loader.rs` - 계층형 settings.json 로더

mod deploy;
mod loader;

pub use deploy::{
    DebugConfig, DeployConfig, DEFAULT_GRADLE_WRAPPER, DEFAULT_OUTPUT_CHANNEL,
};
pub use loader::{load_config_from_file, strip_json_comments, ConfigLoader, CONFIG_DIR_NAME};
