use super::*;
use ml_ir::TokenKind;
use pretty_assertions::assert_eq;

fn chunks(parts: &[&str]) -> IterSource<std::vec::IntoIter<Vec<u8>>> {
    IterSource::new(parts.iter().map(|p| p.as_bytes().to_vec()).collect::<Vec<_>>())
}

fn kinds<S: ChunkSource>(stream: TokenStream<S>) -> Vec<TokenKind> {
    stream
        .map(|item| match item {
            Ok(token) => token.kind,
            Err(err) => panic!("unexpected error: {err}"),
        })
        .collect()
}

// === Iterator sources ===

#[test]
fn yields_tokens_then_eof() {
    let stream = TokenStream::new(LexerConfig::default(), chunks(&["let x", " = 1"]));
    assert_eq!(
        kinds(stream),
        vec![
            TokenKind::Let,
            TokenKind::Lident("x".to_owned()),
            TokenKind::Equal,
            TokenKind::Int(1),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn empty_source_is_just_eof() {
    let stream = TokenStream::new(LexerConfig::default(), chunks(&[]));
    assert_eq!(kinds(stream), vec![TokenKind::Eof]);
}

#[test]
fn empty_chunks_are_harmless() {
    let stream = TokenStream::new(LexerConfig::default(), chunks(&["", "a", "", "b", ""]));
    assert_eq!(
        kinds(stream),
        vec![TokenKind::Lident("ab".to_owned()), TokenKind::Eof]
    );
}

#[test]
fn skip_comments_filters_only_comments() {
    let stream = TokenStream::new(
        LexerConfig::default(),
        chunks(&["(* a *) x (*", " b *) y"]),
    )
    .skip_comments();
    assert_eq!(
        kinds(stream),
        vec![
            TokenKind::Lident("x".to_owned()),
            TokenKind::Lident("y".to_owned()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn stops_after_first_error() {
    let mut stream = TokenStream::new(LexerConfig::default(), chunks(&["a (* open"]));
    assert!(matches!(stream.next(), Some(Ok(_))));
    match stream.next() {
        Some(Err(StreamError::Lex(err))) => {
            assert_eq!(err.kind, crate::LexErrorKind::UnterminatedComment);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(stream.next().is_none());
}

#[test]
fn warnings_are_visible_through_the_stream() {
    let mut stream = TokenStream::new(LexerConfig::default(), chunks(&["*", ")"]));
    assert!(matches!(stream.next(), Some(Ok(t)) if t.kind == TokenKind::Star));
    assert_eq!(stream.lexer().warnings().len(), 1);
}

// === Readers ===

#[test]
fn read_source_chunks_a_reader() {
    let src = "let rec f x = f (x + 1)";
    let stream = TokenStream::new(
        LexerConfig::default(),
        ReadSource::with_chunk_size(src.as_bytes(), 3),
    );
    let tokens = kinds(stream);
    assert_eq!(tokens.len(), 12);
    assert_eq!(tokens[1], TokenKind::Rec);
    assert_eq!(tokens[8], TokenKind::Plus);
}

#[test]
fn zero_chunk_size_is_clamped() {
    let mut source = ReadSource::with_chunk_size(&b"ab"[..], 0);
    match source.next_chunk() {
        Ok(Some(chunk)) => assert_eq!(chunk, b"a"),
        other => panic!("unexpected {other:?}"),
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk on fire"))
    }
}

#[test]
fn io_errors_end_the_stream() {
    let mut stream = TokenStream::new(LexerConfig::default(), ReadSource::new(Broken));
    match stream.next() {
        Some(Err(StreamError::Io(err))) => assert_eq!(err.to_string(), "disk on fire"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(stream.next().is_none());
}
