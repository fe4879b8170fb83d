//! End-to-end run of a real child process standing in for the primary tool.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::sync::Arc;

use tempfile::TempDir;
use vidgrab_core::{NoopStatusSink, RunFailure, RunOutcome, RunRequest, ToolManifest};
use vidgrab_runtime::{ExecutionSupervisor, SystemExecutor};

fn install_script(path: &std::path::Path, body: &str) {
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn primary_tool_receives_arguments_and_exit_code_is_honored() {
    let dir = TempDir::new().unwrap();
    let bin = dir.path().join("bin");
    fs::create_dir_all(&bin).unwrap();
    let args_file = dir.path().join("args.txt");

    let manifest = ToolManifest::default_tools();
    let tools = manifest.resolve(&bin);
    install_script(
        &tools.primary,
        &format!(
            "for a in \"$@\"; do echo \"$a\" >> '{}'; done\nexit 0",
            args_file.display()
        ),
    );

    let supervisor = ExecutionSupervisor::new(tools.clone(), Arc::new(SystemExecutor));
    let request = RunRequest::parse("https://example.com/video").unwrap();
    let outcome = supervisor.run(&request, &NoopStatusSink);
    assert_eq!(outcome, RunOutcome::Success);

    let recorded = fs::read_to_string(&args_file).unwrap();
    let lines: Vec<_> = recorded.lines().collect();
    assert_eq!(
        lines,
        [
            "--ffmpeg-location".to_string(),
            tools.auxiliary.display().to_string(),
            "--js-runtimes".to_string(),
            format!("node:{}", tools.runtime.display()),
            "https://example.com/video".to_string(),
        ]
    );

    install_script(&tools.primary, "exit 2");
    let outcome = supervisor.run(&request, &NoopStatusSink);
    assert_eq!(outcome, RunOutcome::Failure(RunFailure::Exit { code: Some(2) }));
}
