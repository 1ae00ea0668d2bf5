//! Scanner integration tests.
//!
//! Verifies that the lexer correctly tokenizes various TypeScript constructs.

use tslex_core::text::Position;
use tslex_scanner::{
    tokenize, EscapeError, LexError, NumericLiteralError, Token, TokenFlags, TokenKind,
    PUNCTUATION_KINDS,
};

/// Helper: tokenize source, dropping the end-of-file token.
fn scan_all(source: &str) -> Vec<Token> {
    let mut tokens = tokenize(source).unwrap_or_else(|e| panic!("{source:?}: {e}"));
    assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::EndOfFileToken));
    tokens
}

/// Helper: scan all token kinds.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|t| t.kind).collect()
}

/// Helper: assert that `source` is exactly one token of `kind`.
fn assert_single(source: &str, kind: TokenKind) {
    let tokens = scan_all(source);
    assert_eq!(tokens.len(), 1, "{source:?} gave {tokens:?}");
    assert_eq!(tokens[0].kind, kind, "{source:?}");
    assert_eq!(tokens[0].lexeme, source);
}

fn scan_error(source: &str) -> LexError {
    match tokenize(source) {
        Ok(tokens) => panic!("{source:?} should fail, got {tokens:?}"),
        Err(e) => e,
    }
}

fn numeric_error(line: u32, column: u32, reason: NumericLiteralError) -> LexError {
    LexError::InvalidNumericLiteral {
        position: Position::new(line, column),
        reason,
    }
}

// ============================================================================
// Basic literals
// ============================================================================

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfFileToken);
    assert_eq!(tokens[0].position(), Position::new(1, 1));
    assert!(tokens[0].is_empty());
}

#[test]
fn test_numeric_literals() {
    for source in [
        "42",
        "0",
        "123456789",
        "3.14",
        "0.5",
        ".5",
        "1e10",
        "1e-10",
        "1.5e10",
        "1E+3",
        "0xFF",
        "0xDEADBEEF",
        "0b1010",
        "0o755",
        "1_000_000",
        "0xFF_FF",
        "123n",
        "0x1Fn",
        "1.",
    ] {
        assert_single(source, TokenKind::NumericLiteral);
    }
}

#[test]
fn test_member_access_on_numbers() {
    assert_eq!(
        scan_kinds("1..toString()"),
        vec![
            TokenKind::NumericLiteral,
            TokenKind::DotToken,
            TokenKind::Identifier,
            TokenKind::OpenParenToken,
            TokenKind::CloseParenToken,
        ]
    );
    let tokens = scan_all("1.5.toFixed");
    assert_eq!(tokens[0].lexeme, "1.5");
    assert_eq!(tokens[1].kind, TokenKind::DotToken);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_string_literals() {
    for source in [
        r#""hello""#,
        r#""hello world""#,
        r#""""#,
        "'hello'",
        "'hello world'",
        "''",
        r#""hello\nworld""#,
        r#""tab\there""#,
        r#""quote\"here""#,
        r"'it\'s'",
        r#""\u0041""#,
        r#""\u{1F600}""#,
        r#""\x41\0\\""#,
        "'line\\\ncontinued'",
        "'line\\\r\ncontinued'",
        "\"a\u{2028}b\"",
    ] {
        assert_single(source, TokenKind::StringLiteral);
    }
}

#[test]
fn test_string_escape_flags() {
    let tokens = scan_all(r#""\u0041" "\u{41}""#);
    assert!(tokens[0].flags.contains(TokenFlags::UNICODE_ESCAPE));
    assert!(tokens[2].flags.contains(TokenFlags::EXTENDED_UNICODE_ESCAPE));
}

#[test]
fn test_template_literals() {
    for source in [
        "`hello`",
        "`hello world`",
        "``",
        "`hello ${name}`",
        "`${x} + ${y} = ${x + y}`",
        "`line1\nline2`",
        r"`escaped \` backtick`",
        r"`not a hole \${x}`",
        "`$notAHole {x}`",
    ] {
        assert_single(source, TokenKind::TemplateLiteral);
    }
}

#[test]
fn test_template_nesting() {
    assert_single("`outer ${ `inner ${x}` } end`", TokenKind::TemplateLiteral);
    assert_single("`${ {a: 1}.a }`", TokenKind::TemplateLiteral);
    assert_single("`${ fn({ b: { c } }) }`", TokenKind::TemplateLiteral);
    assert_single("`${ '}' }`", TokenKind::TemplateLiteral);
    assert_single("`${ `${ `${deep}` }` }`", TokenKind::TemplateLiteral);
}

#[test]
fn test_template_substitution_flag() {
    let tokens = scan_all("`a` `${b}`");
    assert!(!tokens[0].flags.contains(TokenFlags::HAS_SUBSTITUTIONS));
    assert!(tokens[2].flags.contains(TokenFlags::HAS_SUBSTITUTIONS));
}

#[test]
fn test_template_followed_by_code() {
    assert_eq!(
        scan_kinds("`${a}`;b"),
        vec![
            TokenKind::TemplateLiteral,
            TokenKind::SemicolonToken,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_boolean_null_undefined() {
    assert_single("true", TokenKind::BooleanLiteral);
    assert_single("false", TokenKind::BooleanLiteral);
    assert_single("null", TokenKind::NullLiteral);
    assert_single("undefined", TokenKind::UndefinedLiteral);
}

#[test]
fn test_regex_literals() {
    for source in [
        "/test/",
        "/test/g",
        "/test/gi",
        "/[a-z]+/i",
        r"/\d{3}-\d{4}/",
        r"/a\/b/",
        "/[/]/",
    ] {
        assert_single(source, TokenKind::RegexLiteral);
    }
}

#[test]
fn test_regex_versus_division() {
    assert_eq!(
        scan_kinds("x / y"),
        vec![
            TokenKind::Identifier,
            TokenKind::WhitespaceTrivia,
            TokenKind::SlashToken,
            TokenKind::WhitespaceTrivia,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(scan_kinds("a = b / c / d")[6], TokenKind::SlashToken);
    assert_eq!(scan_kinds("x[0] / 2")[5], TokenKind::SlashToken);
    assert_eq!(scan_kinds("i++ / 2")[3], TokenKind::SlashToken);
    assert_eq!(scan_kinds("\"s\" / 2")[2], TokenKind::SlashToken);
    assert_eq!(scan_kinds("type / 2")[2], TokenKind::SlashToken);
    assert_eq!(scan_kinds("x = /ab+c/")[4], TokenKind::RegexLiteral);
    assert_eq!(scan_kinds("f(a, /b/)")[5], TokenKind::RegexLiteral);
    assert_eq!(scan_kinds("typeof /x/")[2], TokenKind::RegexLiteral);
    assert_eq!(scan_kinds("await /x/")[2], TokenKind::RegexLiteral);
    // Comments between the operand and the slash do not count.
    assert_eq!(scan_kinds("a /* c */ / b")[4], TokenKind::SlashToken);
}

#[test]
fn test_keyword_property_name_before_division() {
    for source in ["obj.default / 2", "x.delete / y", "a.new / b", "a?.new / b", "p.in / q"] {
        let kinds = scan_kinds(source);
        assert!(kinds.contains(&TokenKind::SlashToken), "{source}: {kinds:?}");
        assert!(!kinds.contains(&TokenKind::RegexLiteral), "{source}: {kinds:?}");
    }
    // Still a keyword token, only the slash decision changes.
    assert_eq!(scan_kinds("obj.default / 2")[2], TokenKind::DefaultKeyword);
    // Outside member access the keyword still starts an expression.
    assert_eq!(scan_kinds("return /x/")[2], TokenKind::RegexLiteral);
    assert_eq!(scan_kinds("x.y; typeof /z/")[7], TokenKind::RegexLiteral);
}

#[test]
fn test_keyword_property_name_in_template_hole() {
    assert_eq!(
        scan_kinds("`${o.default / 2}`"),
        vec![TokenKind::TemplateLiteral]
    );
    assert!(tokenize("`${a.delete / b} ${c}`").is_ok());
}

// ============================================================================
// Identifiers and keywords
// ============================================================================

#[test]
fn test_identifiers() {
    for source in [
        "x",
        "myVar",
        "_private",
        "$jquery",
        "camelCase",
        "PascalCase",
        "snake_case",
        "CONSTANT_CASE",
        "var123",
        "café",
        "日本語",
        "a\u{200C}b",
        "True",
        "nullish",
    ] {
        assert_single(source, TokenKind::Identifier);
    }
}

#[test]
fn test_javascript_keywords() {
    let keywords = [
        ("break", TokenKind::BreakKeyword),
        ("case", TokenKind::CaseKeyword),
        ("catch", TokenKind::CatchKeyword),
        ("class", TokenKind::ClassKeyword),
        ("const", TokenKind::ConstKeyword),
        ("continue", TokenKind::ContinueKeyword),
        ("debugger", TokenKind::DebuggerKeyword),
        ("default", TokenKind::DefaultKeyword),
        ("delete", TokenKind::DeleteKeyword),
        ("do", TokenKind::DoKeyword),
        ("else", TokenKind::ElseKeyword),
        ("export", TokenKind::ExportKeyword),
        ("extends", TokenKind::ExtendsKeyword),
        ("finally", TokenKind::FinallyKeyword),
        ("for", TokenKind::ForKeyword),
        ("function", TokenKind::FunctionKeyword),
        ("if", TokenKind::IfKeyword),
        ("import", TokenKind::ImportKeyword),
        ("in", TokenKind::InKeyword),
        ("instanceof", TokenKind::InstanceOfKeyword),
        ("let", TokenKind::LetKeyword),
        ("new", TokenKind::NewKeyword),
        ("return", TokenKind::ReturnKeyword),
        ("super", TokenKind::SuperKeyword),
        ("switch", TokenKind::SwitchKeyword),
        ("this", TokenKind::ThisKeyword),
        ("throw", TokenKind::ThrowKeyword),
        ("try", TokenKind::TryKeyword),
        ("typeof", TokenKind::TypeOfKeyword),
        ("var", TokenKind::VarKeyword),
        ("void", TokenKind::VoidKeyword),
        ("while", TokenKind::WhileKeyword),
        ("with", TokenKind::WithKeyword),
        ("yield", TokenKind::YieldKeyword),
    ];
    for (keyword, kind) in keywords {
        assert_single(keyword, kind);
        assert!(kind.is_keyword());
        assert!(!kind.is_contextual_keyword());
    }
}

#[test]
fn test_typescript_keywords() {
    let keywords = [
        ("as", TokenKind::AsKeyword),
        ("async", TokenKind::AsyncKeyword),
        ("await", TokenKind::AwaitKeyword),
        ("declare", TokenKind::DeclareKeyword),
        ("enum", TokenKind::EnumKeyword),
        ("implements", TokenKind::ImplementsKeyword),
        ("interface", TokenKind::InterfaceKeyword),
        ("namespace", TokenKind::NamespaceKeyword),
        ("private", TokenKind::PrivateKeyword),
        ("protected", TokenKind::ProtectedKeyword),
        ("public", TokenKind::PublicKeyword),
        ("readonly", TokenKind::ReadonlyKeyword),
        ("static", TokenKind::StaticKeyword),
        ("type", TokenKind::TypeKeyword),
    ];
    for (keyword, kind) in keywords {
        assert_single(keyword, kind);
        assert!(kind.is_contextual_keyword());
    }
}

// ============================================================================
// Operators and punctuation
// ============================================================================

#[test]
fn test_every_punctuation_alone() {
    for &kind in PUNCTUATION_KINDS {
        let text = kind.punctuation_text().unwrap();
        assert_single(text, kind);
    }
}

#[test]
fn test_operator_maximal_munch() {
    assert_eq!(
        scan_kinds("x>>y"),
        vec![
            TokenKind::Identifier,
            TokenKind::GreaterThanGreaterThanToken,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("x>>>y"),
        vec![
            TokenKind::Identifier,
            TokenKind::GreaterThanGreaterThanGreaterThanToken,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("++x--"),
        vec![
            TokenKind::PlusPlusToken,
            TokenKind::Identifier,
            TokenKind::MinusMinusToken,
        ]
    );
    assert_eq!(
        scan_kinds("a&&=b"),
        vec![
            TokenKind::Identifier,
            TokenKind::AmpersandAmpersandEqualsToken,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("...."),
        vec![TokenKind::DotDotDotToken, TokenKind::DotToken]
    );
}

#[test]
fn test_optional_chaining() {
    assert_eq!(
        scan_kinds("obj?.prop"),
        vec![
            TokenKind::Identifier,
            TokenKind::QuestionDotToken,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(
        scan_kinds("a?.5:b"),
        vec![
            TokenKind::Identifier,
            TokenKind::QuestionToken,
            TokenKind::NumericLiteral,
            TokenKind::ColonToken,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_nullish_coalescing() {
    assert_eq!(
        scan_kinds("x ?? 0"),
        vec![
            TokenKind::Identifier,
            TokenKind::WhitespaceTrivia,
            TokenKind::QuestionQuestionToken,
            TokenKind::WhitespaceTrivia,
            TokenKind::NumericLiteral,
        ]
    );
}

#[test]
fn test_spread_operator() {
    assert_eq!(
        scan_kinds("...args"),
        vec![TokenKind::DotDotDotToken, TokenKind::Identifier]
    );
}

// ============================================================================
// Trivia
// ============================================================================

#[test]
fn test_single_line_comments() {
    assert_single("// comment", TokenKind::CommentTrivia);
    assert_single("//", TokenKind::CommentTrivia);
    assert_single("// comment with symbols !@#$%", TokenKind::CommentTrivia);
}

#[test]
fn test_multi_line_comments() {
    assert_single("/* comment */", TokenKind::CommentTrivia);
    assert_single("/**/", TokenKind::CommentTrivia);
    assert_single("/* multi\nline\ncomment */", TokenKind::CommentTrivia);
    assert_single("/** @param x */", TokenKind::CommentTrivia);
}

#[test]
fn test_comments_do_not_nest() {
    let tokens = scan_all("/* comment with */ symbols */");
    assert_eq!(tokens[0].kind, TokenKind::CommentTrivia);
    assert_eq!(tokens[0].lexeme, "/* comment with */");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::AsteriskToken);
    assert_eq!(tokens[5].kind, TokenKind::SlashToken);
}

#[test]
fn test_comments_with_code() {
    assert_eq!(
        scan_kinds("x // comment\ny"),
        vec![
            TokenKind::Identifier,
            TokenKind::WhitespaceTrivia,
            TokenKind::CommentTrivia,
            TokenKind::NewLineTrivia,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_whitespace() {
    assert_single(" ", TokenKind::WhitespaceTrivia);
    assert_single("   ", TokenKind::WhitespaceTrivia);
    assert_single("\t", TokenKind::WhitespaceTrivia);
    assert_single("\t\t", TokenKind::WhitespaceTrivia);
    assert_single("\u{000B}", TokenKind::WhitespaceTrivia);
    assert_single("\u{000C}", TokenKind::WhitespaceTrivia);
    assert_single("\u{00A0}\u{00A0}", TokenKind::WhitespaceTrivia);
    assert_single("\u{FEFF}", TokenKind::WhitespaceTrivia);
    assert_single("\u{3000}", TokenKind::WhitespaceTrivia);
}

#[test]
fn test_whitespace_runs_split_by_character() {
    let tokens = scan_all("  \t\t ");
    let lexemes: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::WhitespaceTrivia)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(lexemes, vec!["  ", "\t\t", " "]);
    assert_eq!(scan_kinds("\u{00A0} ").len(), 2);
}

#[test]
fn test_newlines() {
    assert_single("\n", TokenKind::NewLineTrivia);
    assert_single("\r\n", TokenKind::NewLineTrivia);
    assert_single("\r", TokenKind::NewLineTrivia);
    assert_single("\u{2028}", TokenKind::NewLineTrivia);
    assert_single("\u{2029}", TokenKind::NewLineTrivia);
    assert_eq!(
        scan_kinds("\n\n"),
        vec![TokenKind::NewLineTrivia, TokenKind::NewLineTrivia]
    );
    assert_eq!(
        scan_kinds("\n\r"),
        vec![TokenKind::NewLineTrivia, TokenKind::NewLineTrivia]
    );
}

#[test]
fn test_only_whitespace() {
    assert_eq!(
        scan_kinds("   \t\n  "),
        vec![
            TokenKind::WhitespaceTrivia,
            TokenKind::WhitespaceTrivia,
            TokenKind::NewLineTrivia,
            TokenKind::WhitespaceTrivia,
        ]
    );
}

// ============================================================================
// Complex expressions
// ============================================================================

#[test]
fn test_variable_declaration() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("const x = 42;"),
        vec![
            ConstKeyword, WhitespaceTrivia, Identifier, WhitespaceTrivia, EqualsToken,
            WhitespaceTrivia, NumericLiteral, SemicolonToken,
        ]
    );
}

#[test]
fn test_function_declaration() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("function add(a, b) { return a + b; }"),
        vec![
            FunctionKeyword, WhitespaceTrivia, Identifier, OpenParenToken, Identifier,
            CommaToken, WhitespaceTrivia, Identifier, CloseParenToken, WhitespaceTrivia,
            OpenBraceToken, WhitespaceTrivia, ReturnKeyword, WhitespaceTrivia, Identifier,
            WhitespaceTrivia, PlusToken, WhitespaceTrivia, Identifier, SemicolonToken,
            WhitespaceTrivia, CloseBraceToken,
        ]
    );
}

#[test]
fn test_arrow_function() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("(x) => x * 2"),
        vec![
            OpenParenToken, Identifier, CloseParenToken, WhitespaceTrivia,
            EqualsGreaterThanToken, WhitespaceTrivia, Identifier, WhitespaceTrivia,
            AsteriskToken, WhitespaceTrivia, NumericLiteral,
        ]
    );
}

#[test]
fn test_class_declaration() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("class Person { constructor(name) { this.name = name; } }"),
        vec![
            ClassKeyword, WhitespaceTrivia, Identifier, WhitespaceTrivia, OpenBraceToken,
            WhitespaceTrivia, Identifier, OpenParenToken, Identifier, CloseParenToken,
            WhitespaceTrivia, OpenBraceToken, WhitespaceTrivia, ThisKeyword, DotToken,
            Identifier, WhitespaceTrivia, EqualsToken, WhitespaceTrivia, Identifier,
            SemicolonToken, WhitespaceTrivia, CloseBraceToken, WhitespaceTrivia,
            CloseBraceToken,
        ]
    );
}

#[test]
fn test_type_annotation() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("let x: number = 5;"),
        vec![
            LetKeyword, WhitespaceTrivia, Identifier, ColonToken, WhitespaceTrivia,
            Identifier, WhitespaceTrivia, EqualsToken, WhitespaceTrivia, NumericLiteral,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_interface_declaration() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("interface User { name: string; age: number; }"),
        vec![
            InterfaceKeyword, WhitespaceTrivia, Identifier, WhitespaceTrivia,
            OpenBraceToken, WhitespaceTrivia, Identifier, ColonToken, WhitespaceTrivia,
            Identifier, SemicolonToken, WhitespaceTrivia, Identifier, ColonToken,
            WhitespaceTrivia, Identifier, SemicolonToken, WhitespaceTrivia,
            CloseBraceToken,
        ]
    );
}

#[test]
fn test_async_await() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("async function fetch() { await getData(); }"),
        vec![
            AsyncKeyword, WhitespaceTrivia, FunctionKeyword, WhitespaceTrivia, Identifier,
            OpenParenToken, CloseParenToken, WhitespaceTrivia, OpenBraceToken,
            WhitespaceTrivia, AwaitKeyword, WhitespaceTrivia, Identifier, OpenParenToken,
            CloseParenToken, SemicolonToken, WhitespaceTrivia, CloseBraceToken,
        ]
    );
}

#[test]
fn test_destructuring() {
    use TokenKind::*;
    assert_eq!(
        scan_kinds("const { x, y } = obj;"),
        vec![
            ConstKeyword, WhitespaceTrivia, OpenBraceToken, WhitespaceTrivia, Identifier,
            CommaToken, WhitespaceTrivia, Identifier, WhitespaceTrivia, CloseBraceToken,
            WhitespaceTrivia, EqualsToken, WhitespaceTrivia, Identifier, SemicolonToken,
        ]
    );
}

#[test]
fn test_unknown_characters_continue() {
    assert_eq!(
        scan_kinds("@dec #priv"),
        vec![
            TokenKind::Unknown,
            TokenKind::Identifier,
            TokenKind::WhitespaceTrivia,
            TokenKind::Unknown,
            TokenKind::Identifier,
        ]
    );
}

// ============================================================================
// Positions and losslessness
// ============================================================================

#[test]
fn test_token_positions() {
    let tokens = scan_all("let\n  x = 'é';\r\ny");
    let x = tokens.iter().find(|t| t.lexeme == "x").unwrap();
    assert_eq!(x.position(), Position::new(2, 3));
    let s = tokens.iter().find(|t| t.kind == TokenKind::StringLiteral).unwrap();
    assert_eq!(s.position(), Position::new(2, 7));
    assert_eq!(s.len(), 3);
    let y = tokens.last().unwrap();
    assert_eq!(y.position(), Position::new(3, 1));
    assert!(y.has_preceding_line_break());
}

#[test]
fn test_end_of_file_position() {
    let tokens = tokenize("a\nbc").unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::EndOfFileToken);
    assert_eq!(eof.position(), Position::new(2, 3));
    assert_eq!(eof.span.start, 4);
}

#[test]
fn test_lossless_program() {
    let source = "#!/usr/bin/env node\r\n\
        import { readFile } from 'fs';\n\
        /** Doc */\n\
        export async function main(args: string[]): Promise<void> {\n\
        \tconst re = /^--(\\w+)=(.*)$/u, n = 0x1F_FFn;\n\
        \tfor (const a of args) console.log(`arg ${a.match(re)?.[1] ?? `none`}`);\n\
        \treturn void (n >>>= 2) / 1;\n\
        }\n";
    let tokens = tokenize(source).unwrap();
    let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(joined, source);

    // Spans are contiguous.
    let mut offset = 0;
    for token in &tokens {
        assert_eq!(token.span.start, offset);
        offset = token.span.end();
    }
    assert_eq!(offset as usize, source.chars().count());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unterminated_literals() {
    assert_eq!(
        scan_error("\"abc"),
        LexError::UnterminatedString {
            position: Position::new(1, 1)
        }
    );
    assert_eq!(
        scan_error("let s = 'abc\n';"),
        LexError::UnterminatedString {
            position: Position::new(1, 9)
        }
    );
    assert_eq!(
        scan_error("`abc"),
        LexError::UnterminatedTemplateLiteral {
            position: Position::new(1, 1)
        }
    );
    assert_eq!(
        scan_error("x\n`a ${b"),
        LexError::UnterminatedTemplateLiteral {
            position: Position::new(2, 1)
        }
    );
    assert_eq!(
        scan_error("/* abc"),
        LexError::UnterminatedComment {
            position: Position::new(1, 1)
        }
    );
    assert_eq!(
        scan_error("x = /abc\n/"),
        LexError::UnterminatedRegex {
            position: Position::new(1, 5)
        }
    );
}

#[test]
fn test_error_inside_template_hole() {
    assert_eq!(
        scan_error("`a ${ 'x }`"),
        LexError::UnterminatedString {
            position: Position::new(1, 7)
        }
    );
}

#[test]
fn test_lone_slash_at_line_end_is_division() {
    assert_eq!(
        scan_kinds("/\n"),
        vec![TokenKind::SlashToken, TokenKind::NewLineTrivia]
    );
    assert_eq!(scan_kinds("x = /="), {
        use TokenKind::*;
        vec![Identifier, WhitespaceTrivia, EqualsToken, WhitespaceTrivia, SlashEqualsToken]
    });
}

#[test]
fn test_invalid_numeric_literals() {
    use NumericLiteralError::*;
    assert_eq!(scan_error("1__0"), numeric_error(1, 3, ConsecutiveSeparators));
    assert_eq!(scan_error("1_"), numeric_error(1, 2, SeparatorNotAllowed));
    assert_eq!(scan_error("0x_1"), numeric_error(1, 3, SeparatorNotAllowed));
    assert_eq!(scan_error("1._5"), numeric_error(1, 3, SeparatorNotAllowed));
    assert_eq!(scan_error("1e_5"), numeric_error(1, 3, SeparatorNotAllowed));
    assert_eq!(scan_error("0x"), numeric_error(1, 3, HexDigitExpected));
    assert_eq!(scan_error("0b"), numeric_error(1, 3, BinaryDigitExpected));
    assert_eq!(scan_error("0o9"), numeric_error(1, 3, OctalDigitExpected));
    assert_eq!(scan_error("0b12"), numeric_error(1, 4, BinaryDigitExpected));
    assert_eq!(scan_error("1e"), numeric_error(1, 3, DigitExpected));
    assert_eq!(scan_error("1e+"), numeric_error(1, 4, DigitExpected));
    assert_eq!(scan_error("1.2.3"), numeric_error(1, 4, MultipleDecimalPoints));
    assert_eq!(scan_error("3in"), numeric_error(1, 2, IdentifierAfterLiteral));
    assert_eq!(scan_error("1.5n"), numeric_error(1, 4, IdentifierAfterLiteral));
}

#[test]
fn test_invalid_escape_sequences() {
    let escape_error = |reason| LexError::InvalidEscapeSequence {
        position: Position::new(1, 3),
        reason,
    };
    assert_eq!(scan_error(r#""a\x4""#), escape_error(EscapeError::HexDigitExpected));
    assert_eq!(scan_error(r#""a\u00G0""#), escape_error(EscapeError::HexDigitExpected));
    assert_eq!(scan_error(r#""a\u{}""#), escape_error(EscapeError::HexDigitExpected));
    assert_eq!(
        scan_error(r#""a\u{110000}""#),
        escape_error(EscapeError::CodePointOutOfRange)
    );
    assert_eq!(
        scan_error(r#""a\u{41""#),
        escape_error(EscapeError::UnterminatedUnicodeEscape)
    );
}

#[test]
fn test_error_diagnostic_codes() {
    assert_eq!(scan_error("'abc").message().code, 1002);
    assert_eq!(scan_error("/* abc").message().code, 1010);
    assert_eq!(scan_error("`abc").message().code, 1160);
    assert_eq!(scan_error("/abc").message().code, 1161);
    assert_eq!(scan_error("1__0").message().code, 6189);
    let diag = scan_error("let x = 3in;").to_diagnostic(Some("a.ts"));
    assert_eq!(
        diag.to_string(),
        "a.ts(1,10): error TS1351: An identifier or keyword cannot immediately follow a numeric literal."
    );
}
