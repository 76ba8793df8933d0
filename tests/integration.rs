//! Integration tests for sapling


use harness::{TestDir, header, output_path, read_output, run_sapling};

#[test]
fn test_basic_structure_output() {
    let dir = TestDir::new();
    dir.add_file("src/index.ts", "export {};");
    dir.add_file("src/node_modules/pkg/index.ts", "export {};");
    dir.add_file("readme.md", "# readme");

    let (_stdout, stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success, "sapling should succeed: {}", stderr);

    let expected = format!("{}\n+-- src/\n    |-- index.ts", header(dir.path()));
    assert_eq!(read_output(dir.path()), expected);
}

#[test]
fn test_confirmation_line_names_output_path() {
    let dir = TestDir::new();
    dir.add_file("main.ts", "");

    let (stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        stdout,
        format!(
            "Project structure written to {}\n",
            output_path(dir.path()).display()
        )
    );
}

#[test]
fn test_only_excluded_children_renders_header_only() {
    let dir = TestDir::new();
    dir.add_file("node_modules/react/index.ts", "");
    dir.add_file(".git/hooks/pre-commit.ts", "");
    dir.add_file("dist/bundle.ts", "");

    let (_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);
    assert_eq!(read_output(dir.path()), header(dir.path()));
}

#[test]
fn test_mixed_extensions_sorted() {
    let dir = TestDir::new();
    dir.add_file("zeta.ts", "");
    dir.add_file("alpha.tsx", "");
    dir.add_file("styles.css", "");
    dir.add_file("beta.ts", "");
    dir.add_file("config.json", "");

    let (_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);

    let output = read_output(dir.path());
    let lines: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(lines, vec!["|-- alpha.tsx", "|-- beta.ts", "|-- zeta.ts"]);
    assert!(!output.contains("styles.css"));
    assert!(!output.contains("config.json"));
}

#[test]
fn test_nested_directories_indent() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/x.ts", "");

    let (_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);

    let output = read_output(dir.path());
    let lines: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "+-- a/",
            "    +-- b/",
            "        +-- c/",
            "            |-- x.ts",
        ]
    );
}

#[test]
fn test_files_and_directories_share_one_order() {
    let dir = TestDir::new();
    dir.add_file("zoo.ts", "");
    dir.add_file("api/client.ts", "");
    dir.add_file("main.ts", "");
    dir.add_file("utils/format.ts", "");
    dir.add_file("App.tsx", "");
    dir.add_file("_layout.tsx", "");

    let (_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);

    let output = read_output(dir.path());
    let lines: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec![
            "|-- App.tsx",
            "|-- _layout.tsx",
            "+-- api/",
            "    |-- client.ts",
            "|-- main.ts",
            "+-- utils/",
            "    |-- format.ts",
            "|-- zoo.ts",
        ]
    );
}

#[test]
fn test_second_run_is_identical() {
    let dir = TestDir::new();
    dir.add_file("app/(tabs)/index.tsx", "");
    dir.add_file("components/ui/button/index.tsx", "");
    dir.add_file("hooks/useMeals.ts", "");

    let (first_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);
    let first = read_output(dir.path());

    let (second_stdout, _stderr, success) = run_sapling(dir.path(), &[]);
    assert!(success);
    let second = read_output(dir.path());

    assert_eq!(first, second);
    assert_eq!(first_stdout, second_stdout);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = TestDir::new();
    dir.add_file("src/index.ts", "");
    dir.add_file("node_modules/pkg/index.ts", "");

    let (stdout, stderr, success) = run_sapling(dir.path(), &["--verbose"]);
    assert!(success);
    assert_eq!(stdout.lines().count(), 1, "stdout: {}", stdout);
    assert!(
        stderr.contains("skipping excluded directory"),
        "stderr should log pruned dirs: {}",
        stderr
    );
}
