//! Error types for rio-deploy
//!
//! 모든 에러를 중앙에서 관리

use std::fmt;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// rio-deploy 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 활성화 관련
    // ========================================================================
    /// 필수 확장이 없거나 capability surface를 얻지 못함 (활성화 중단)
    #[error("Precondition failed: {0}")]
    Precondition(String),

    // ========================================================================
    // Action 관련
    // ========================================================================
    #[error("{0}")]
    NoWorkspace(NoWorkspaceReason),

    #[error("Process error: {0}")]
    Process(Box<ProcessError>),

    #[error("Debug attach failed: {0}")]
    Attach(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // 기타
    // ========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::Precondition(_)
                | Error::NoWorkspace(_)
                | Error::Process(_)
                | Error::Attach(_)
                | Error::InvalidInput(_)
        )
    }

    /// 프로세스 에러면 내부 값 반환
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Error::Process(e) => Some(e),
            _ => None,
        }
    }

    /// Attach 에러 생성 헬퍼
    pub fn attach(message: impl Into<String>) -> Self {
        Error::Attach(message.into())
    }
}

impl From<ProcessError> for Error {
    fn from(e: ProcessError) -> Self {
        Error::Process(Box::new(e))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Internal(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Internal(s.to_string())
    }
}

// ============================================================================
// NoWorkspace
// ============================================================================

/// 워크스페이스를 결정하지 못한 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoWorkspaceReason {
    /// 후보가 하나도 없음
    Empty,
    /// 선택 프롬프트가 닫힘
    Dismissed,
}

impl fmt::Display for NoWorkspaceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No workspace folder is open"),
            Self::Dismissed => write!(f, "No workspace folder was selected"),
        }
    }
}

// ============================================================================
// ProcessError
// ============================================================================

/// External command failure with whatever output was captured before it
#[derive(Error, Debug)]
#[error("`{command}` {failure}")]
pub struct ProcessError {
    /// Command line as passed to the shell
    pub command: String,

    /// Native cause
    #[source]
    pub failure: ProcessFailure,

    /// Partial stdout
    pub stdout: String,

    /// Partial stderr
    pub stderr: String,
}

impl ProcessError {
    pub fn new(command: impl Into<String>, failure: ProcessFailure) -> Self {
        Self {
            command: command.into(),
            failure,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn with_output(mut self, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self.stderr = stderr.into();
        self
    }

    /// Exit code, if the process ran to completion
    pub fn exit_code(&self) -> Option<i32> {
        match self.failure {
            ProcessFailure::Exit(code) => Some(code),
            _ => None,
        }
    }
}

/// Why an external command failed
#[derive(Error, Debug)]
pub enum ProcessFailure {
    #[error("failed to spawn: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed while running: {0}")]
    Wait(#[source] std::io::Error),

    #[error("exited with code {0}")]
    Exit(i32),

    #[error("was terminated by a signal")]
    Signal,
}
