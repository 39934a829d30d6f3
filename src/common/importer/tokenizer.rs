use super::LoadError;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Word(String),
    Str(String),
    Number(f64),
    Punct(char),
    Eof,
}

impl Token {
    pub fn is_punct(&self, c: char) -> bool {
        *self == Token::Punct(c)
    }

    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Word(w) if w == word)
    }
}

/// Splits the data file into words, quoted strings, numbers and single
/// punctuation characters. `//` and `/* */` comments are dropped.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    /// Line the tokenizer is currently on, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next token and the line it starts on.
    pub fn next_token(&mut self) -> Result<(Token, usize), LoadError> {
        self.skip_blanks();
        let line = self.line;
        let c = match self.chars.peek() {
            Some(&c) => c,
            None => return Ok((Token::Eof, line)),
        };

        let token = if c == '"' || c == '\'' {
            self.chars.next();
            Token::Str(self.string(c, line)?)
        } else if self.starts_number() {
            Token::Number(self.number())
        } else if c.is_alphabetic() || c == '_' {
            Token::Word(self.word())
        } else {
            self.chars.next();
            Token::Punct(c)
        };
        Ok((token, line))
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next()
    }

    fn skip_blanks(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                self.line += 1;
                self.chars.next();
            } else if c.is_whitespace() {
                self.chars.next();
            } else if c == '/' && self.peek_second() == Some('/') {
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.chars.next();
                }
            } else if c == '/' && self.peek_second() == Some('*') {
                self.chars.next();
                self.chars.next();
                let mut star = false;
                while let Some(c) = self.chars.next() {
                    if c == '\n' {
                        self.line += 1;
                    }
                    if star && c == '/' {
                        break;
                    }
                    star = c == '*';
                }
            } else {
                break;
            }
        }
    }

    fn starts_number(&self) -> bool {
        let mut ahead = self.chars.clone();
        match ahead.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => ahead.next().map_or(false, |c| c.is_ascii_digit()),
            Some('-') => match ahead.next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('.') => ahead.next().map_or(false, |c| c.is_ascii_digit()),
                _ => false,
            },
            _ => false,
        }
    }

    fn number(&mut self) -> f64 {
        let mut text = String::new();
        if self.chars.peek() == Some(&'-') {
            text.push('-');
            self.chars.next();
        }
        let mut seen_point = false;
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_point) {
                seen_point |= c == '.';
                text.push(c);
                self.chars.next();
            } else {
                break;
            }
        }

        if matches!(self.chars.peek(), Some(&'e') | Some(&'E')) {
            let mut ahead = self.chars.clone();
            let mut exponent = String::from("e");
            ahead.next();
            if let Some(&sign) = ahead.peek() {
                if sign == '+' || sign == '-' {
                    exponent.push(sign);
                    ahead.next();
                }
            }
            if ahead.peek().map_or(false, |c| c.is_ascii_digit()) {
                while let Some(&d) = ahead.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    exponent.push(d);
                    ahead.next();
                }
                text.push_str(&exponent);
                self.chars = ahead;
            }
        }

        text.parse().unwrap_or_default()
    }

    fn word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' || c == '-' {
                word.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        word
    }

    fn string(&mut self, quote: char, line: usize) -> Result<String, LoadError> {
        let mut text = String::new();
        loop {
            match self.chars.next() {
                None | Some('\n') => return Err(LoadError::UnterminatedString { line }),
                Some(c) if c == quote => return Ok(text),
                Some('\\') => match self.chars.next() {
                    None | Some('\n') => return Err(LoadError::UnterminatedString { line }),
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(c) => text.push(c),
                },
                Some(c) => text.push(c),
            }
        }
    }
}
