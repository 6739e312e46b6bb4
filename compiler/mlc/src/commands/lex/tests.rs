use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|&s| s.to_owned()).collect()
}

fn parsed(list: &[&str]) -> LexOptions {
    match parse_lex_options(&args(list)) {
        Ok(options) => options,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

/// Write `contents` to a fresh file under the temp directory.
fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mlc-{}-{name}.ml", std::process::id()));
    if let Err(err) = std::fs::write(&path, contents) {
        panic!("cannot write {}: {err}", path.display());
    }
    path
}

fn run(options: &LexOptions) -> (LexSummary, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let summary = match lex_file(options, &mut out, &mut diag) {
        Ok(summary) => summary,
        Err(err) => panic!("lex failed: {err}"),
    };
    (
        summary,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&diag).into_owned(),
    )
}

// === Argument parsing ===

#[test]
fn path_only() {
    let options = parsed(&["main.ml"]);
    assert_eq!(options.path, PathBuf::from("main.ml"));
    assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(options.comments);
    assert_eq!(options.file_name, None);
}

#[test]
fn flags_before_and_after_path() {
    let options = parsed(&["--chunk", "7", "main.ml", "--no-comments", "--file-name=x.ml"]);
    assert_eq!(options.chunk_size, 7);
    assert!(!options.comments);
    assert_eq!(options.file_name.as_deref(), Some("x.ml"));
}

#[test]
fn no_color_overrides_terminal_detection() {
    assert!(!parsed(&["--no-color", "a.ml"]).color);
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(matches!(
        parse_lex_options(&args(&[])),
        Err(CliError::MissingPath)
    ));
    assert!(matches!(
        parse_lex_options(&args(&["a.ml", "--chunk"])),
        Err(CliError::MissingValue("--chunk"))
    ));
    assert!(matches!(
        parse_lex_options(&args(&["a.ml", "--chunk=0"])),
        Err(CliError::InvalidChunkSize(v)) if v == "0"
    ));
    assert!(matches!(
        parse_lex_options(&args(&["a.ml", "--verbose"])),
        Err(CliError::UnknownOption(v)) if v == "--verbose"
    ));
    assert!(matches!(
        parse_lex_options(&args(&["a.ml", "b.ml"])),
        Err(CliError::UnknownOption(v)) if v == "b.ml"
    ));
}

// === Lexing files ===

#[test]
fn dumps_tokens_in_small_chunks() {
    let path = scratch_file("dump", b"let x = (* c *) 1\n");
    let mut options = LexOptions::new(&path);
    options.chunk_size = 2;
    options.file_name = Some("dump.ml".to_owned());
    let (summary, out, diag) = run(&options);
    assert_eq!(
        summary,
        LexSummary {
            tokens: 6,
            warnings: 0,
            failed: false,
        }
    );
    assert!(out.starts_with("Tokens for 'dump.ml':\n"), "{out}");
    assert!(out.contains("  Let @ dump.ml:1:0-3\n"), "{out}");
    assert!(out.contains("Comment(\" c \")"), "{out}");
    assert!(diag.is_empty(), "{diag}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn comments_can_be_dropped() {
    let path = scratch_file("nocomment", b"(* a *) x");
    let mut options = LexOptions::new(&path);
    options.comments = false;
    let (summary, out, _) = run(&options);
    assert_eq!(summary.tokens, 2);
    assert!(!out.contains("Comment"), "{out}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn errors_and_warnings_are_rendered() {
    let path = scratch_file("diag", b"x *) \"never closed");
    let mut options = LexOptions::new(&path);
    options.color = false;
    let (summary, _, diag) = run(&options);
    assert!(summary.failed);
    assert_eq!(summary.warnings, 1);
    assert!(diag.contains("this is not the end of a comment"), "{diag}");
    assert!(diag.contains("string literal not terminated"), "{diag}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_reported() {
    let options = LexOptions::new("/definitely/not/here.ml");
    let mut sink = Vec::new();
    let mut diag = Vec::new();
    assert!(matches!(
        lex_file(&options, &mut sink, &mut diag),
        Err(CliError::NotFound(_))
    ));
}
