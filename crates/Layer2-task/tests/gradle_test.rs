//! Gradle 통합 테스트 - 가짜 wrapper 스크립트로 실제 프로세스 실행 검증
//!
//! `cargo test -p rio-task --test gradle_test -- --nocapture`

#![cfg(unix)]

use rio_task::{debug_deploy_args, deploy_args, BuildTool, Gradle, OutputBuffer, OutputStream};
use std::path::Path;

/// 인자를 그대로 출력하고 `exit_code`로 종료하는 wrapper 작성
///
/// 실행 권한 대신 `sh ./gradlew`로 호출해서 ETXTBSY 경합을 피한다
fn write_fake_wrapper(dir: &Path, exit_code: i32) {
    let script = format!(
        "#!/bin/sh\necho \"gradle $@\"\necho \"warning: offline\" 1>&2\nexit {}\n",
        exit_code
    );
    let path = dir.join("gradlew");
    std::fs::write(&path, script).unwrap();
}

#[tokio::test]
async fn test_deploy_streams_wrapper_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fake_wrapper(dir.path(), 0);

    let gradle = Gradle::with_wrapper("sh ./gradlew");
    let sink = OutputBuffer::new();

    let result = gradle
        .run(&deploy_args(190), dir.path(), Some(&sink))
        .await
        .expect("deploy failed");

    assert_eq!(result.stdout, "gradle deploy --offline -PteamNumber=190\n");
    assert_eq!(result.stderr, "warning: offline\n");
    assert_eq!(sink.text(OutputStream::Stdout), result.stdout);
    assert_eq!(sink.text(OutputStream::Stderr), result.stderr);
}

#[tokio::test]
async fn test_failed_build_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fake_wrapper(dir.path(), 1);

    let gradle = Gradle::with_wrapper("sh ./gradlew");
    let err = gradle
        .run(&debug_deploy_args(190), dir.path(), None)
        .await
        .unwrap_err();

    let process = err.as_process().expect("process error");
    assert_eq!(process.exit_code(), Some(1));
    assert!(process.stdout.contains("-PdebugMode -PteamNumber=190"));
    assert!(process
        .command
        .ends_with("deploy --offline -PdebugMode -PteamNumber=190"));
}

#[tokio::test]
async fn test_missing_wrapper_fails() {
    let dir = tempfile::tempdir().unwrap();

    let gradle = Gradle::with_wrapper("./gradlew");
    let err = gradle.run(&deploy_args(1), dir.path(), None).await.unwrap_err();

    // sh reports "not found" and exits 127
    assert_eq!(err.as_process().and_then(|p| p.exit_code()), Some(127));
}
