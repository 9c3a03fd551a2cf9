//! Instance parser: token stream → `#id = KEYWORD(params);` records.
//!
//! Anything that is not an instance (header section, section keywords) is
//! skipped token by token. Complex instances `#id = (A() B());` are kept with
//! no keyword so the caller can ignore them.

use super::lexer::{Tok, Token};
use crate::error::{MeshError, Result};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Param {
    Ref(u64),
    Num(f64),
    Str(String),
    Enum(String),
    List(Vec<Param>),
    /// Typed parameter such as `LENGTH_MEASURE(1.0)`.
    Typed(String, Vec<Param>),
    /// `$`
    Omitted,
    /// `*`
    Derived,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RawInstance {
    pub id: u64,
    pub keyword: Option<String>,
    pub params: Vec<Param>,
    pub line: usize,
}

struct Parser<'t> {
    toks: &'t [Token],
    pos: usize,
}

pub(crate) fn parse_instances(toks: &[Token]) -> Result<Vec<RawInstance>> {
    let mut p = Parser { toks, pos: 0 };
    let mut out = Vec::new();
    while p.pos < toks.len() {
        let is_instance = matches!(p.peek(), Some(Tok::Ref(_))) && matches!(p.peek_at(1), Some(Tok::Eq));
        if is_instance {
            out.push(p.instance()?);
        } else {
            p.pos += 1;
        }
    }
    Ok(out)
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&Tok> {
        self.peek_at(0)
    }

    fn peek_at(&self, k: usize) -> Option<&Tok> {
        self.toks.get(self.pos + k).map(|t| &t.tok)
    }

    fn line(&self) -> usize {
        self.toks
            .get(self.pos)
            .or_else(|| self.toks.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    fn error(&self, message: impl Into<String>) -> MeshError {
        MeshError::Syntax {
            line: self.line(),
            message: message.into(),
        }
    }

    fn next(&mut self) -> Result<Tok> {
        let tok = self
            .toks
            .get(self.pos)
            .map(|t| t.tok.clone())
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(tok)
    }

    fn expect(&mut self, want: Tok) -> Result<()> {
        let got = self.next()?;
        if got != want {
            self.pos -= 1;
            return Err(self.error(format!("expected {want:?}, found {got:?}")));
        }
        Ok(())
    }

    fn instance(&mut self) -> Result<RawInstance> {
        let line = self.line();
        let Tok::Ref(id) = self.next()? else {
            unreachable!("caller checked for a reference")
        };
        self.expect(Tok::Eq)?;
        let (keyword, params) = match self.next()? {
            Tok::Keyword(k) => {
                self.expect(Tok::LParen)?;
                (Some(k), self.items()?)
            }
            Tok::LParen => {
                self.complex_parts()?;
                (None, Vec::new())
            }
            other => return Err(self.error(format!("expected entity type after '#{id} =', found {other:?}"))),
        };
        if matches!(self.peek(), Some(Tok::Semi)) {
            self.pos += 1;
        }
        Ok(RawInstance {
            id,
            keyword,
            params,
            line,
        })
    }

    /// Comma-separated parameters; the opening paren is already consumed.
    fn items(&mut self) -> Result<Vec<Param>> {
        let mut items = Vec::new();
        if matches!(self.peek(), Some(Tok::RParen)) {
            self.pos += 1;
            return Ok(items);
        }
        loop {
            items.push(self.param()?);
            match self.next()? {
                Tok::Comma => continue,
                Tok::RParen => return Ok(items),
                other => {
                    self.pos -= 1;
                    return Err(self.error(format!("expected ',' or ')', found {other:?}")));
                }
            }
        }
    }

    /// `A(...) B(...) )` inside a complex instance.
    fn complex_parts(&mut self) -> Result<()> {
        loop {
            match self.next()? {
                Tok::RParen => return Ok(()),
                Tok::Keyword(_) => {
                    self.expect(Tok::LParen)?;
                    self.items()?;
                }
                other => {
                    self.pos -= 1;
                    return Err(self.error(format!("unexpected {other:?} in complex instance")));
                }
            }
        }
    }

    fn param(&mut self) -> Result<Param> {
        Ok(match self.next()? {
            Tok::Ref(id) => Param::Ref(id),
            Tok::Num(v) => Param::Num(v),
            Tok::Str(s) => Param::Str(s),
            Tok::Enum(e) => Param::Enum(e),
            Tok::Star => Param::Derived,
            Tok::Dollar => Param::Omitted,
            Tok::LParen => Param::List(self.items()?),
            Tok::Keyword(k) => {
                self.expect(Tok::LParen)?;
                Param::Typed(k, self.items()?)
            }
            other => {
                self.pos -= 1;
                return Err(self.error(format!("unexpected {other:?} in parameter list")));
            }
        })
    }
}
