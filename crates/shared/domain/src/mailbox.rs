//! RFC 5322 mailbox syntax.
//!
//! Accepts exactly one `mailbox`: a bare `addr-spec` (`local@domain`) or a
//! `name-addr` (`[display-name] <addr-spec>`). Leading and trailing
//! whitespace is allowed. Address lists, groups and comments are not.

/// Check that `input` holds one syntactically valid mailbox.
pub fn is_single_mailbox(input: &str) -> bool {
    is_bare_addr_spec(input) || is_name_addr(input)
}

fn is_bare_addr_spec(input: &str) -> bool {
    let mut cursor = Cursor::new(input);
    cursor.skip_wsp();
    cursor.addr_spec() && cursor.at_end()
}

fn is_name_addr(input: &str) -> bool {
    let mut cursor = Cursor::new(input);
    cursor.display_name()
        && cursor.eat('<')
        && cursor.addr_spec()
        && cursor.eat('>')
        && cursor.at_end()
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Printable ASCII, or any non-control UTF-8 character
fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || (!c.is_ascii() && !c.is_control())
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || "!#$%&'*+-/=?^_`{|}~".contains(c)
        || (!c.is_ascii() && !c.is_control())
}

fn is_qtext(c: char) -> bool {
    is_vchar(c) && c != '"' && c != '\\'
}

fn is_dtext(c: char) -> bool {
    is_vchar(c) && !matches!(c, '[' | ']' | '\\')
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the longest prefix matching `pred`; true if non-empty
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let len = self
            .rest
            .find(|c: char| !pred(c))
            .unwrap_or(self.rest.len());
        self.rest = &self.rest[len..];
        len > 0
    }

    fn skip_wsp(&mut self) {
        self.rest = self.rest.trim_start_matches(is_wsp);
    }

    fn at_end(&mut self) -> bool {
        self.skip_wsp();
        self.rest.is_empty()
    }

    /// `local-part "@" domain`
    fn addr_spec(&mut self) -> bool {
        let local = if self.peek() == Some('"') {
            self.quoted_string()
        } else {
            self.dot_atom()
        };
        local && self.eat('@') && self.domain()
    }

    fn domain(&mut self) -> bool {
        if self.peek() == Some('[') {
            self.domain_literal()
        } else {
            self.dot_atom()
        }
    }

    /// `atom *("." atom)`
    fn dot_atom(&mut self) -> bool {
        loop {
            if !self.take_while(is_atext) {
                return false;
            }
            if !self.eat('.') {
                return true;
            }
        }
    }

    /// `DQUOTE *(qtext / quoted-pair / WSP) DQUOTE`
    fn quoted_string(&mut self) -> bool {
        if !self.eat('"') {
            return false;
        }
        while let Some(c) = self.bump() {
            match c {
                '"' => return true,
                '\\' => match self.bump() {
                    Some(q) if is_vchar(q) || is_wsp(q) => {}
                    _ => return false,
                },
                c if is_qtext(c) || is_wsp(c) => {}
                _ => return false,
            }
        }
        false
    }

    /// `"[" *(dtext / WSP) "]"`
    fn domain_literal(&mut self) -> bool {
        if !self.eat('[') {
            return false;
        }
        while let Some(c) = self.bump() {
            match c {
                ']' => return true,
                c if is_dtext(c) || is_wsp(c) => {}
                _ => return false,
            }
        }
        false
    }

    /// Zero or more words (atoms, dots allowed, or quoted strings) up to the `<`.
    ///
    /// False if a word is malformed.
    fn display_name(&mut self) -> bool {
        loop {
            self.skip_wsp();
            match self.peek() {
                Some('"') => {
                    if !self.quoted_string() {
                        return false;
                    }
                }
                Some(c) if is_atext(c) || c == '.' => {
                    self.take_while(|c| is_atext(c) || c == '.');
                }
                _ => return true,
            }
        }
    }
}
