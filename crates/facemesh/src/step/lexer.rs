//! Tokenizer for exchange-file text.
//!
//! Comments (`/* ... */` and `--` to end of line) are dropped here, outside of
//! string literals only. Every token remembers the line it started on so that
//! parse errors can point at the input.

use crate::error::{MeshError, Result};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Tok {
    /// `#123`
    Ref(u64),
    /// Entity type names and typed-parameter names (`CARTESIAN_POINT`).
    Keyword(String),
    /// `.T.` is stored as `"T"`.
    Enum(String),
    Str(String),
    Num(f64),
    Eq,
    LParen,
    RParen,
    Comma,
    Semi,
    /// `*` (derived attribute)
    Star,
    /// `$` (omitted attribute)
    Dollar,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub tok: Tok,
    pub line: usize,
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    out: Vec<Token>,
}

pub(crate) fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut lx = Lexer {
        chars: text.chars().peekable(),
        line: 1,
        out: Vec::new(),
    };
    lx.run()?;
    Ok(lx.out)
}

fn syntax(line: usize, message: impl Into<String>) -> MeshError {
    MeshError::Syntax {
        line,
        message: message.into(),
    }
}

impl<'a> Lexer<'a> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn push(&mut self, tok: Tok, line: usize) {
        self.out.push(Token { tok, line });
    }

    fn run(&mut self) -> Result<()> {
        while let Some(&c) = self.chars.peek() {
            let line = self.line;
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '/' => {
                    self.bump();
                    if self.chars.peek() != Some(&'*') {
                        return Err(syntax(line, "stray '/'"));
                    }
                    self.bump();
                    self.block_comment(line)?;
                }
                '-' => {
                    self.bump();
                    match self.chars.peek() {
                        Some('-') => self.line_comment(),
                        Some(d) if d.is_ascii_digit() || *d == '.' => {
                            let tok = self.number(String::from("-"), line)?;
                            self.push(tok, line);
                        }
                        _ => return Err(syntax(line, "stray '-'")),
                    }
                }
                '\'' => {
                    self.bump();
                    let s = self.string(line)?;
                    self.push(Tok::Str(s), line);
                }
                '#' => {
                    self.bump();
                    let digits = self.take_while(|c| c.is_ascii_digit());
                    let id = digits
                        .parse::<u64>()
                        .map_err(|_| syntax(line, "expected digits after '#'"))?;
                    self.push(Tok::Ref(id), line);
                }
                '.' => {
                    self.bump();
                    match self.chars.peek() {
                        Some(d) if d.is_ascii_digit() => {
                            let tok = self.number(String::from("."), line)?;
                            self.push(tok, line);
                        }
                        _ => {
                            let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
                            if name.is_empty() || self.bump() != Some('.') {
                                return Err(syntax(line, "malformed enumeration literal"));
                            }
                            self.push(Tok::Enum(name.to_ascii_uppercase()), line);
                        }
                    }
                }
                '+' => {
                    self.bump();
                    let tok = self.number(String::new(), line)?;
                    self.push(tok, line);
                }
                c if c.is_ascii_digit() => {
                    let tok = self.number(String::new(), line)?;
                    self.push(tok, line);
                }
                c if c.is_ascii_alphabetic() || c == '_' || c == '!' => {
                    // `-` appears inside section keywords such as `END-ISO-10303-21`.
                    let name = self.take_while(|c| {
                        c.is_ascii_alphanumeric() || c == '_' || c == '!' || c == '-'
                    });
                    self.push(Tok::Keyword(name.to_ascii_uppercase()), line);
                }
                '=' | '(' | ')' | ',' | ';' | '*' | '$' => {
                    self.bump();
                    let tok = match c {
                        '=' => Tok::Eq,
                        '(' => Tok::LParen,
                        ')' => Tok::RParen,
                        ',' => Tok::Comma,
                        ';' => Tok::Semi,
                        '*' => Tok::Star,
                        _ => Tok::Dollar,
                    };
                    self.push(tok, line);
                }
                other => return Err(syntax(line, format!("unexpected character {other:?}"))),
            }
        }
        Ok(())
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            s.push(c);
            self.bump();
        }
        s
    }

    fn block_comment(&mut self, start: usize) -> Result<()> {
        let mut star = false;
        while let Some(c) = self.bump() {
            if star && c == '/' {
                return Ok(());
            }
            star = c == '*';
        }
        Err(syntax(start, "unterminated block comment"))
    }

    fn line_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Body of a quoted string; the opening quote is already consumed.
    /// A doubled quote (`''`) stands for one literal quote.
    fn string(&mut self, start: usize) -> Result<String> {
        let mut s = String::new();
        loop {
            match self.bump() {
                None => return Err(syntax(start, "unterminated string")),
                Some('\'') => {
                    if self.chars.peek() == Some(&'\'') {
                        self.bump();
                        s.push('\'');
                    } else {
                        return Ok(s);
                    }
                }
                Some(c) => s.push(c),
            }
        }
    }

    fn number(&mut self, mut lit: String, line: usize) -> Result<Tok> {
        let mut prev = lit.chars().last().unwrap_or(' ');
        while let Some(&c) = self.chars.peek() {
            let sign_in_exponent = (c == '+' || c == '-') && (prev == 'e' || prev == 'E');
            if !(c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || sign_in_exponent) {
                break;
            }
            lit.push(c);
            prev = c;
            self.bump();
        }
        lit.parse::<f64>()
            .map(Tok::Num)
            .map_err(|_| syntax(line, format!("invalid number {lit:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(text: &str) -> Vec<Tok> {
        tokenize(text).unwrap().into_iter().map(|t| t.tok).collect()
    }

    #[test]
    fn entity_line() {
        assert_eq!(
            toks("#12 = VERTEX_POINT('', #3);"),
            vec![
                Tok::Ref(12),
                Tok::Eq,
                Tok::Keyword("VERTEX_POINT".into()),
                Tok::LParen,
                Tok::Str(String::new()),
                Tok::Comma,
                Tok::Ref(3),
                Tok::RParen,
                Tok::Semi,
            ]
        );
    }

    #[test]
    fn numbers_and_enums() {
        assert_eq!(
            toks("(-1.5, 2., 3.0E-1, 1e+2) .T. .f. * $"),
            vec![
                Tok::LParen,
                Tok::Num(-1.5),
                Tok::Comma,
                Tok::Num(2.0),
                Tok::Comma,
                Tok::Num(0.3),
                Tok::Comma,
                Tok::Num(100.0),
                Tok::RParen,
                Tok::Enum("T".into()),
                Tok::Enum("F".into()),
                Tok::Star,
                Tok::Dollar,
            ]
        );
    }

    #[test]
    fn comments_are_stripped_outside_strings() {
        let text = "/* header\n comment */ #1 = A('x -- y /* z */'); -- trailing\n#2 = B();";
        let out = tokenize(text).unwrap();
        assert_eq!(out[0].tok, Tok::Ref(1));
        assert_eq!(out[0].line, 2);
        assert!(out
            .iter()
            .any(|t| t.tok == Tok::Str("x -- y /* z */".into())));
        let last_ref = out.iter().rev().find(|t| matches!(t.tok, Tok::Ref(_))).unwrap();
        assert_eq!(last_ref.tok, Tok::Ref(2));
        assert_eq!(last_ref.line, 3);
    }

    #[test]
    fn section_keywords_with_dashes() {
        assert_eq!(
            toks("ISO-10303-21; END-ISO-10303-21;"),
            vec![
                Tok::Keyword("ISO-10303-21".into()),
                Tok::Semi,
                Tok::Keyword("END-ISO-10303-21".into()),
                Tok::Semi,
            ]
        );
    }

    #[test]
    fn doubled_quote_escape() {
        assert_eq!(toks("'it''s'"), vec![Tok::Str("it's".into())]);
    }

    #[test]
    fn unterminated_inputs_report_line() {
        let err = tokenize("#1 = A(\n'open").unwrap_err();
        assert!(matches!(err, MeshError::Syntax { line: 2, .. }));
        let err = tokenize("/* never closed").unwrap_err();
        assert!(matches!(err, MeshError::Syntax { line: 1, .. }));
        assert!(tokenize("#1 = A(&);").is_err());
    }
}
