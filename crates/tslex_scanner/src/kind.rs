//! TokenKind enum - every token kind the scanner can produce.
//!
//! The enum is closed: every input character ends up in a token of exactly
//! one of these kinds, with [`TokenKind::Unknown`] covering anything that
//! matches no lexical rule. Variants are grouped in contiguous ranges so the
//! classification helpers are simple range checks.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    Unknown,
    EndOfFileToken,

    // Trivia
    WhitespaceTrivia,
    NewLineTrivia,
    CommentTrivia,

    // Literals
    Identifier,
    StringLiteral,
    NumericLiteral,
    BooleanLiteral,
    NullLiteral,
    UndefinedLiteral,
    TemplateLiteral,
    RegexLiteral,

    // Punctuation
    OpenParenToken,
    CloseParenToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    SemicolonToken,
    CommaToken,
    DotToken,
    DotDotDotToken,
    ColonToken,

    // Operators
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    AsteriskAsteriskToken,
    PlusPlusToken,
    MinusMinusToken,
    EqualsEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsToken,
    ExclamationEqualsEqualsToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    TildeToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandAmpersandToken,
    BarBarToken,
    ExclamationToken,
    QuestionToken,
    QuestionQuestionToken,
    QuestionDotToken,
    EqualsGreaterThanToken,
    // Assignment operators
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    AsteriskAsteriskEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    ExportKeyword,
    ExtendsKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    ImportKeyword,
    InKeyword,
    InstanceOfKeyword,
    LetKeyword,
    NewKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,
    YieldKeyword,

    // TypeScript contextual keywords
    AsKeyword,
    AsyncKeyword,
    AwaitKeyword,
    DeclareKeyword,
    EnumKeyword,
    ImplementsKeyword,
    InterfaceKeyword,
    NamespaceKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    StaticKeyword,
    TypeKeyword,
}

/// Every punctuation and operator kind, in declaration order.
pub const PUNCTUATION_KINDS: &[TokenKind] = &[
    TokenKind::OpenParenToken,
    TokenKind::CloseParenToken,
    TokenKind::OpenBraceToken,
    TokenKind::CloseBraceToken,
    TokenKind::OpenBracketToken,
    TokenKind::CloseBracketToken,
    TokenKind::SemicolonToken,
    TokenKind::CommaToken,
    TokenKind::DotToken,
    TokenKind::DotDotDotToken,
    TokenKind::ColonToken,
    TokenKind::PlusToken,
    TokenKind::MinusToken,
    TokenKind::AsteriskToken,
    TokenKind::SlashToken,
    TokenKind::PercentToken,
    TokenKind::AsteriskAsteriskToken,
    TokenKind::PlusPlusToken,
    TokenKind::MinusMinusToken,
    TokenKind::EqualsEqualsToken,
    TokenKind::EqualsEqualsEqualsToken,
    TokenKind::ExclamationEqualsToken,
    TokenKind::ExclamationEqualsEqualsToken,
    TokenKind::LessThanToken,
    TokenKind::GreaterThanToken,
    TokenKind::LessThanEqualsToken,
    TokenKind::GreaterThanEqualsToken,
    TokenKind::AmpersandToken,
    TokenKind::BarToken,
    TokenKind::CaretToken,
    TokenKind::TildeToken,
    TokenKind::LessThanLessThanToken,
    TokenKind::GreaterThanGreaterThanToken,
    TokenKind::GreaterThanGreaterThanGreaterThanToken,
    TokenKind::AmpersandAmpersandToken,
    TokenKind::BarBarToken,
    TokenKind::ExclamationToken,
    TokenKind::QuestionToken,
    TokenKind::QuestionQuestionToken,
    TokenKind::QuestionDotToken,
    TokenKind::EqualsGreaterThanToken,
    TokenKind::EqualsToken,
    TokenKind::PlusEqualsToken,
    TokenKind::MinusEqualsToken,
    TokenKind::AsteriskEqualsToken,
    TokenKind::SlashEqualsToken,
    TokenKind::PercentEqualsToken,
    TokenKind::AsteriskAsteriskEqualsToken,
    TokenKind::AmpersandEqualsToken,
    TokenKind::BarEqualsToken,
    TokenKind::CaretEqualsToken,
    TokenKind::LessThanLessThanEqualsToken,
    TokenKind::GreaterThanGreaterThanEqualsToken,
    TokenKind::GreaterThanGreaterThanGreaterThanEqualsToken,
    TokenKind::AmpersandAmpersandEqualsToken,
    TokenKind::BarBarEqualsToken,
    TokenKind::QuestionQuestionEqualsToken,
];

impl TokenKind {
    /// Whether this kind is whitespace, a newline, or a comment.
    #[inline]
    pub fn is_trivia(self) -> bool {
        let v = self as u16;
        v >= TokenKind::WhitespaceTrivia as u16 && v <= TokenKind::CommentTrivia as u16
    }

    /// Whether this kind is an identifier or a literal.
    #[inline]
    pub fn is_literal(self) -> bool {
        let v = self as u16;
        v >= TokenKind::Identifier as u16 && v <= TokenKind::RegexLiteral as u16
    }

    /// Whether this kind is a bracket, separator, or the ellipsis.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u16;
        v >= TokenKind::OpenParenToken as u16 && v <= TokenKind::ColonToken as u16
    }

    #[inline]
    pub fn is_operator(self) -> bool {
        let v = self as u16;
        v >= TokenKind::PlusToken as u16 && v <= TokenKind::QuestionQuestionEqualsToken as u16
    }

    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        let v = self as u16;
        v >= TokenKind::EqualsToken as u16 && v <= TokenKind::QuestionQuestionEqualsToken as u16
    }

    /// Whether this kind is a JS reserved word or a TS contextual keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u16;
        v >= TokenKind::BreakKeyword as u16 && v <= TokenKind::TypeKeyword as u16
    }

    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        let v = self as u16;
        v >= TokenKind::AsKeyword as u16 && v <= TokenKind::TypeKeyword as u16
    }

    /// Whether a token of this kind updates the "previous significant token"
    /// used for regex disambiguation.
    #[inline]
    pub fn is_significant(self) -> bool {
        !self.is_trivia() && self != TokenKind::EndOfFileToken
    }

    /// Whether a token of this kind can be the last token of an expression.
    /// A `/` after such a token is division; after anything else it starts
    /// a regular expression literal.
    pub fn can_end_expression(self) -> bool {
        if self.is_literal() {
            return true;
        }
        match self {
            TokenKind::ThisKeyword
            | TokenKind::SuperKeyword
            | TokenKind::CloseParenToken
            | TokenKind::CloseBracketToken
            | TokenKind::CloseBraceToken
            | TokenKind::PlusPlusToken
            | TokenKind::MinusMinusToken => true,
            // Contextual keywords double as plain identifiers, except the
            // operand-taking ones.
            TokenKind::AwaitKeyword | TokenKind::EnumKeyword => false,
            _ => self.is_contextual_keyword(),
        }
    }

    /// Look up a word in the reserved-word table. Exact, case-sensitive match.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "true" | "false" => Some(TokenKind::BooleanLiteral),
            "null" => Some(TokenKind::NullLiteral),
            "undefined" => Some(TokenKind::UndefinedLiteral),
            "break" => Some(TokenKind::BreakKeyword),
            "case" => Some(TokenKind::CaseKeyword),
            "catch" => Some(TokenKind::CatchKeyword),
            "class" => Some(TokenKind::ClassKeyword),
            "const" => Some(TokenKind::ConstKeyword),
            "continue" => Some(TokenKind::ContinueKeyword),
            "debugger" => Some(TokenKind::DebuggerKeyword),
            "default" => Some(TokenKind::DefaultKeyword),
            "delete" => Some(TokenKind::DeleteKeyword),
            "do" => Some(TokenKind::DoKeyword),
            "else" => Some(TokenKind::ElseKeyword),
            "export" => Some(TokenKind::ExportKeyword),
            "extends" => Some(TokenKind::ExtendsKeyword),
            "finally" => Some(TokenKind::FinallyKeyword),
            "for" => Some(TokenKind::ForKeyword),
            "function" => Some(TokenKind::FunctionKeyword),
            "if" => Some(TokenKind::IfKeyword),
            "import" => Some(TokenKind::ImportKeyword),
            "in" => Some(TokenKind::InKeyword),
            "instanceof" => Some(TokenKind::InstanceOfKeyword),
            "let" => Some(TokenKind::LetKeyword),
            "new" => Some(TokenKind::NewKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "super" => Some(TokenKind::SuperKeyword),
            "switch" => Some(TokenKind::SwitchKeyword),
            "this" => Some(TokenKind::ThisKeyword),
            "throw" => Some(TokenKind::ThrowKeyword),
            "try" => Some(TokenKind::TryKeyword),
            "typeof" => Some(TokenKind::TypeOfKeyword),
            "var" => Some(TokenKind::VarKeyword),
            "void" => Some(TokenKind::VoidKeyword),
            "while" => Some(TokenKind::WhileKeyword),
            "with" => Some(TokenKind::WithKeyword),
            "yield" => Some(TokenKind::YieldKeyword),
            "as" => Some(TokenKind::AsKeyword),
            "async" => Some(TokenKind::AsyncKeyword),
            "await" => Some(TokenKind::AwaitKeyword),
            "declare" => Some(TokenKind::DeclareKeyword),
            "enum" => Some(TokenKind::EnumKeyword),
            "implements" => Some(TokenKind::ImplementsKeyword),
            "interface" => Some(TokenKind::InterfaceKeyword),
            "namespace" => Some(TokenKind::NamespaceKeyword),
            "private" => Some(TokenKind::PrivateKeyword),
            "protected" => Some(TokenKind::ProtectedKeyword),
            "public" => Some(TokenKind::PublicKeyword),
            "readonly" => Some(TokenKind::ReadonlyKeyword),
            "static" => Some(TokenKind::StaticKeyword),
            "type" => Some(TokenKind::TypeKeyword),
            _ => None,
        }
    }

    /// Get the source text of a keyword kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::BreakKeyword => Some("break"),
            TokenKind::CaseKeyword => Some("case"),
            TokenKind::CatchKeyword => Some("catch"),
            TokenKind::ClassKeyword => Some("class"),
            TokenKind::ConstKeyword => Some("const"),
            TokenKind::ContinueKeyword => Some("continue"),
            TokenKind::DebuggerKeyword => Some("debugger"),
            TokenKind::DefaultKeyword => Some("default"),
            TokenKind::DeleteKeyword => Some("delete"),
            TokenKind::DoKeyword => Some("do"),
            TokenKind::ElseKeyword => Some("else"),
            TokenKind::ExportKeyword => Some("export"),
            TokenKind::ExtendsKeyword => Some("extends"),
            TokenKind::FinallyKeyword => Some("finally"),
            TokenKind::ForKeyword => Some("for"),
            TokenKind::FunctionKeyword => Some("function"),
            TokenKind::IfKeyword => Some("if"),
            TokenKind::ImportKeyword => Some("import"),
            TokenKind::InKeyword => Some("in"),
            TokenKind::InstanceOfKeyword => Some("instanceof"),
            TokenKind::LetKeyword => Some("let"),
            TokenKind::NewKeyword => Some("new"),
            TokenKind::ReturnKeyword => Some("return"),
            TokenKind::SuperKeyword => Some("super"),
            TokenKind::SwitchKeyword => Some("switch"),
            TokenKind::ThisKeyword => Some("this"),
            TokenKind::ThrowKeyword => Some("throw"),
            TokenKind::TryKeyword => Some("try"),
            TokenKind::TypeOfKeyword => Some("typeof"),
            TokenKind::VarKeyword => Some("var"),
            TokenKind::VoidKeyword => Some("void"),
            TokenKind::WhileKeyword => Some("while"),
            TokenKind::WithKeyword => Some("with"),
            TokenKind::YieldKeyword => Some("yield"),
            TokenKind::AsKeyword => Some("as"),
            TokenKind::AsyncKeyword => Some("async"),
            TokenKind::AwaitKeyword => Some("await"),
            TokenKind::DeclareKeyword => Some("declare"),
            TokenKind::EnumKeyword => Some("enum"),
            TokenKind::ImplementsKeyword => Some("implements"),
            TokenKind::InterfaceKeyword => Some("interface"),
            TokenKind::NamespaceKeyword => Some("namespace"),
            TokenKind::PrivateKeyword => Some("private"),
            TokenKind::ProtectedKeyword => Some("protected"),
            TokenKind::PublicKeyword => Some("public"),
            TokenKind::ReadonlyKeyword => Some("readonly"),
            TokenKind::StaticKeyword => Some("static"),
            TokenKind::TypeKeyword => Some("type"),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation or operator kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::OpenParenToken => Some("("),
            TokenKind::CloseParenToken => Some(")"),
            TokenKind::OpenBraceToken => Some("{"),
            TokenKind::CloseBraceToken => Some("}"),
            TokenKind::OpenBracketToken => Some("["),
            TokenKind::CloseBracketToken => Some("]"),
            TokenKind::SemicolonToken => Some(";"),
            TokenKind::CommaToken => Some(","),
            TokenKind::DotToken => Some("."),
            TokenKind::DotDotDotToken => Some("..."),
            TokenKind::ColonToken => Some(":"),
            TokenKind::PlusToken => Some("+"),
            TokenKind::MinusToken => Some("-"),
            TokenKind::AsteriskToken => Some("*"),
            TokenKind::SlashToken => Some("/"),
            TokenKind::PercentToken => Some("%"),
            TokenKind::AsteriskAsteriskToken => Some("**"),
            TokenKind::PlusPlusToken => Some("++"),
            TokenKind::MinusMinusToken => Some("--"),
            TokenKind::EqualsEqualsToken => Some("=="),
            TokenKind::EqualsEqualsEqualsToken => Some("==="),
            TokenKind::ExclamationEqualsToken => Some("!="),
            TokenKind::ExclamationEqualsEqualsToken => Some("!=="),
            TokenKind::LessThanToken => Some("<"),
            TokenKind::GreaterThanToken => Some(">"),
            TokenKind::LessThanEqualsToken => Some("<="),
            TokenKind::GreaterThanEqualsToken => Some(">="),
            TokenKind::AmpersandToken => Some("&"),
            TokenKind::BarToken => Some("|"),
            TokenKind::CaretToken => Some("^"),
            TokenKind::TildeToken => Some("~"),
            TokenKind::LessThanLessThanToken => Some("<<"),
            TokenKind::GreaterThanGreaterThanToken => Some(">>"),
            TokenKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            TokenKind::AmpersandAmpersandToken => Some("&&"),
            TokenKind::BarBarToken => Some("||"),
            TokenKind::ExclamationToken => Some("!"),
            TokenKind::QuestionToken => Some("?"),
            TokenKind::QuestionQuestionToken => Some("??"),
            TokenKind::QuestionDotToken => Some("?."),
            TokenKind::EqualsGreaterThanToken => Some("=>"),
            TokenKind::EqualsToken => Some("="),
            TokenKind::PlusEqualsToken => Some("+="),
            TokenKind::MinusEqualsToken => Some("-="),
            TokenKind::AsteriskEqualsToken => Some("*="),
            TokenKind::SlashEqualsToken => Some("/="),
            TokenKind::PercentEqualsToken => Some("%="),
            TokenKind::AsteriskAsteriskEqualsToken => Some("**="),
            TokenKind::AmpersandEqualsToken => Some("&="),
            TokenKind::BarEqualsToken => Some("|="),
            TokenKind::CaretEqualsToken => Some("^="),
            TokenKind::LessThanLessThanEqualsToken => Some("<<="),
            TokenKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            TokenKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            TokenKind::AmpersandAmpersandEqualsToken => Some("&&="),
            TokenKind::BarBarEqualsToken => Some("||="),
            TokenKind::QuestionQuestionEqualsToken => Some("??="),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
