//! Deploy Config - 배포/디버그 설정
//!
//! 모든 필드가 Optional이라 레벨별로 부분 오버라이드가 가능하다.
//! 실제 값은 accessor가 기본값과 합쳐서 돌려준다.

use crate::core::DebugEndpoint;
use serde::{Deserialize, Serialize};

/// Gradle wrapper 기본 실행 파일
pub const DEFAULT_GRADLE_WRAPPER: &str = if cfg!(windows) { "gradlew" } else { "./gradlew" };

/// 빌드 출력 채널 기본 이름
pub const DEFAULT_OUTPUT_CHANNEL: &str = "gradleJava";

// ============================================================================
// DeployConfig
// ============================================================================

/// rio-deploy 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployConfig {
    /// 기본 팀 번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_number: Option<u32>,

    /// Gradle wrapper 경로 또는 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradle_wrapper: Option<String>,

    /// 출력 채널 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_channel: Option<String>,

    /// 원격 디버그 엔드포인트
    #[serde(default)]
    pub debug: DebugConfig,
}

/// 디버그 엔드포인트 오버라이드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl DeployConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors (기본값 적용)
    // ========================================================================

    pub fn gradle_wrapper(&self) -> &str {
        self.gradle_wrapper
            .as_deref()
            .unwrap_or(DEFAULT_GRADLE_WRAPPER)
    }

    pub fn output_channel(&self) -> &str {
        self.output_channel
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_CHANNEL)
    }

    pub fn debug_endpoint(&self) -> DebugEndpoint {
        let default = DebugEndpoint::default();
        DebugEndpoint {
            address: self.debug.address.clone().unwrap_or(default.address),
            port: self.debug.port.unwrap_or(default.port),
        }
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정 병합 (other가 우선)
    pub fn merge(&mut self, other: DeployConfig) {
        if other.team_number.is_some() {
            self.team_number = other.team_number;
        }
        if other.gradle_wrapper.is_some() {
            self.gradle_wrapper = other.gradle_wrapper;
        }
        if other.output_channel.is_some() {
            self.output_channel = other.output_channel;
        }
        if other.debug.address.is_some() {
            self.debug.address = other.debug.address;
        }
        if other.debug.port.is_some() {
            self.debug.port = other.debug.port;
        }
    }
}
