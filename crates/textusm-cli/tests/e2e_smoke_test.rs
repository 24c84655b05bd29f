use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use textusm::{TextUsmError, indent::IndentUnit};
use textusm_cli::{Args, Command, IoArgs, run};

/// Collects all files with the given extension from a directory
fn collect_files(dir: PathBuf, extension: &str) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Demos are at workspace root, relative to workspace not the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn io(input: &Path, output: &Path) -> IoArgs {
    IoArgs {
        input: input.to_string_lossy().to_string(),
        output: Some(output.to_string_lossy().to_string()),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_files(demos_dir(), "txt");

    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_path = temp_dir
            .path()
            .join(demo_path.file_name().unwrap());

        let validate = args(Command::Validate {
            io: io(demo_path, &output_path),
        });
        let parse = args(Command::Parse {
            io: io(demo_path, &output_path),
            diagram: "usm".to_string(),
            strict: true,
        });

        if let Err(e) = run(&validate).and_then(|()| run(&parse)) {
            failed_demos.push((demo_path.clone(), e));
            continue;
        }

        // The normalized output must be stable under another strict parse.
        let normalized = fs::read_to_string(&output_path).expect("Failed to read output");
        let source = fs::read_to_string(demo_path).expect("Failed to read demo");
        assert_eq!(
            textusm_parser::parse(&normalized, IndentUnit::default()),
            textusm_parser::parse(&source, IndentUnit::default()),
            "normalized output of {} differs",
            demo_path.display()
        );
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_files(demos_dir().join("errors"), "txt");

    assert!(
        !error_demos.is_empty(),
        "No error demos found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}",
            demo_path.file_name().unwrap().to_string_lossy()
        ));

        let validate = args(Command::Validate {
            io: io(demo_path, &output_path),
        });
        let strict_parse = args(Command::Parse {
            io: io(demo_path, &output_path),
            diagram: "usm".to_string(),
            strict: true,
        });

        match (run(&validate), run(&strict_parse)) {
            (Err(TextUsmError::Parse { .. }), Err(TextUsmError::Parse { .. })) => {}
            _ => unexpectedly_succeeded.push(demo_path.clone()),
        }

        // The lenient parse always succeeds.
        let lenient_parse = args(Command::Parse {
            io: io(demo_path, &output_path),
            diagram: "usm".to_string(),
            strict: false,
        });
        assert!(
            run(&lenient_parse).is_ok(),
            "lenient parse of {} failed",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error demos failed as expected", error_demos.len());
}

#[test]
fn e2e_format_markdown_answer() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("markdown").join("chat_answer.md");
    let output = temp_dir.path().join("formatted.txt");

    run(&args(Command::Format { io: io(&input, &output) })).expect("format failed");

    let formatted = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(formatted, "Home\nCatalog\nCart\nAccount\nOrders");
}

#[test]
fn e2e_extract_canvas() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = demos_dir().join("markdown").join("hypothesis_canvas.md");
    let output = temp_dir.path().join("canvas.txt");

    run(&args(Command::Canvas { io: io(&input, &output) })).expect("canvas failed");

    let canvas = fs::read_to_string(&output).expect("Failed to read output");
    assert!(canvas.starts_with("🎯 目的\n  Make grocery shopping effortless\n🔭 ビジョン"));
    assert_eq!(canvas.matches("Weekly basket suggestions").count(), 1);
    assert!(canvas.contains("👥 状況\n  Busy parents with no time to plan"));
    assert!(canvas.contains("💰 収益モデル\n  Monthly subscription"));
    assert!(!canvas.contains("ignored inside code"));
    assert!(textusm_parser::is_valid(&canvas, IndentUnit::default()));
}

#[test]
fn e2e_template_and_unknown_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("template.txt");

    run(&args(Command::Template {
        diagram: "site_map".to_string(),
        output: Some(output.to_string_lossy().to_string()),
    }))
    .expect("template failed");
    let template = fs::read_to_string(&output).expect("Failed to read output");
    assert!(template.starts_with("Home\n    About"));

    let result = run(&args(Command::Template {
        diagram: "flowchart".to_string(),
        output: None,
    }));
    assert!(matches!(result, Err(TextUsmError::UnknownDiagram(_))));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let result = run(&args(Command::Validate {
        io: IoArgs {
            input: "does/not/exist.txt".to_string(),
            output: None,
        },
    }));

    assert!(matches!(result, Err(TextUsmError::Io(_))));
}
