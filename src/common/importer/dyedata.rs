use super::tokenizer::{Token, Tokenizer};
use super::LoadError;
use crate::common::spectrum::{EvenlySampledSpectrum, Spectrum};

pub const DEFAULT_START: f64 = 350.0;
pub const DEFAULT_STEP: f64 = 5.0;

const RECORD_KEYWORDS: &str = r#"one of {"canvas", "light", "dye"}"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Light,
    Canvas,
    Dye,
}

impl RecordKind {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "light" => Some(RecordKind::Light),
            "canvas" => Some(RecordKind::Canvas),
            "dye" => Some(RecordKind::Dye),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpectrumData {
    /// Samples at `start + i * step`.
    Even(Vec<f64>),
    /// Flat `wavelength, value` pairs.
    Uneven(Vec<f64>),
}

/// One `light;`, `canvas;` or `dye;` block as written in the file.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub kind: RecordKind,
    pub name: String,
    pub category: String,
    pub ci: String,
    pub mixture: String,
    pub number: i32,
    pub start: f64,
    pub step: f64,
    pub default: bool,
    pub data: Option<SpectrumData>,
}

impl Record {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            name: "?".into(),
            category: "?".into(),
            ci: "?".into(),
            mixture: "?".into(),
            number: 0,
            start: DEFAULT_START,
            step: DEFAULT_STEP,
            default: false,
            data: None,
        }
    }

    /// Display name: dyes go by their bare name, everything else is
    /// prefixed with its category.
    pub fn display_name(&self) -> String {
        match self.kind {
            RecordKind::Dye => self.name.clone(),
            _ => format!("{}, {}", self.category, self.name),
        }
    }

    pub fn spectrum(&self) -> Option<Spectrum> {
        match &self.data {
            Some(SpectrumData::Even(samples)) => Some(Spectrum::Even(EvenlySampledSpectrum::new(
                samples.clone(),
                self.start,
                self.step,
            ))),
            Some(SpectrumData::Uneven(pairs)) => Some(Spectrum::from_pairs(pairs)),
            None => None,
        }
    }
}

/// Streams records out of the data file. Each completed record is handed to
/// `on_record` with the line that completed it; the first error from either
/// side aborts parsing.
pub struct Parser<'a> {
    tokens: Tokenizer<'a>,
    token: Token,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            token: Token::Eof,
            line: 1,
        }
    }

    pub fn parse<F>(mut self, mut on_record: F) -> Result<(), LoadError>
    where
        F: FnMut(Record, usize) -> Result<(), LoadError>,
    {
        let mut record: Option<Record> = None;
        self.advance()?;
        loop {
            // "break" abandons the record in progress
            if self.token.is_word("break") {
                return Ok(());
            }
            if self.token == Token::Eof {
                if let Some(done) = record.take() {
                    self.complete(done, &mut on_record)?;
                }
                return Ok(());
            }

            if let Token::Word(word) = &self.token {
                if let Some(kind) = RecordKind::from_keyword(word) {
                    if let Some(done) = record.take() {
                        self.complete(done, &mut on_record)?;
                    }
                    self.advance()?;
                    self.expect(';', r#"";""#)?;
                    record = Some(Record::new(kind));
                    continue;
                }
            }

            match record.as_mut() {
                Some(current) => self.field(current)?,
                None => {
                    return Err(LoadError::Unexpected {
                        expected: RECORD_KEYWORDS.into(),
                        line: self.line,
                    })
                }
            }
        }
    }

    fn advance(&mut self) -> Result<(), LoadError> {
        let (token, line) = self.tokens.next_token()?;
        self.token = token;
        self.line = line;
        Ok(())
    }

    fn unexpected(&self, expected: &str) -> LoadError {
        LoadError::Unexpected {
            expected: expected.into(),
            line: self.line,
        }
    }

    /// Requires the current token to be `c` and moves past it.
    fn expect(&mut self, c: char, expected: &str) -> Result<(), LoadError> {
        if !self.token.is_punct(c) {
            return Err(self.unexpected(expected));
        }
        self.advance()
    }

    fn string_value(&mut self, expected: &str) -> Result<String, LoadError> {
        self.expect('=', r#""=""#)?;
        let value = match &self.token {
            Token::Str(text) => text.clone(),
            _ => return Err(self.unexpected(expected)),
        };
        self.advance()?;
        self.expect(';', r#"";""#)?;
        Ok(value)
    }

    fn number_value(&mut self) -> Result<(f64, usize), LoadError> {
        self.expect('=', r#""=""#)?;
        let value = match self.token {
            Token::Number(value) => (value, self.line),
            _ => return Err(self.unexpected("numerical value")),
        };
        self.advance()?;
        self.expect(';', r#"";""#)?;
        Ok(value)
    }

    /// `= NUMBER ("," NUMBER)* ";"`, returning the values and the line of the
    /// closing `;`.
    fn number_list(&mut self) -> Result<(Vec<f64>, usize), LoadError> {
        self.expect('=', r#""=""#)?;
        let mut values = Vec::new();
        loop {
            match self.token {
                Token::Number(value) => values.push(value),
                _ => return Err(self.unexpected("numerical value")),
            }
            self.advance()?;
            if self.token.is_punct(';') {
                let line = self.line;
                self.advance()?;
                return Ok((values, line));
            }
            self.expect(',', r#""," or ";""#)?;
        }
    }

    fn field(&mut self, record: &mut Record) -> Result<(), LoadError> {
        let word = match &self.token {
            Token::Word(word) => word.clone(),
            // stray tokens between fields are ignored
            _ => return self.advance(),
        };
        let keyword_line = self.line;

        match word.as_str() {
            "name" => {
                self.advance()?;
                record.name = self.string_value("name in double quotes")?;
            }
            "category" => {
                self.advance()?;
                record.category = self.string_value("category name in double quotes")?;
            }
            "ci" => {
                self.advance()?;
                record.ci = self.string_value("color index (c.i.) in double quotes")?;
            }
            "mixture" => {
                self.advance()?;
                record.mixture =
                    self.string_value(r#"either "mixture" or "pure" in double quotes"#)?;
            }
            "number" => {
                self.advance()?;
                record.number = self.number_value()?.0 as i32;
            }
            "start" => {
                self.advance()?;
                record.start = self.number_value()?.0;
            }
            "step" => {
                self.advance()?;
                let (step, line) = self.number_value()?;
                if step <= 0.0 {
                    return Err(LoadError::NonPositiveStep { line });
                }
                record.step = step;
            }
            "default" => {
                self.advance()?;
                self.expect(';', r#"";""#)?;
                record.default = true;
            }
            "evendata" | "unevendata" => {
                if record.data.is_some() {
                    return Err(LoadError::DuplicateSpectrum { line: keyword_line });
                }
                self.advance()?;
                let (values, line) = self.number_list()?;
                record.data = Some(if word == "evendata" {
                    SpectrumData::Even(values)
                } else {
                    if values.len() % 2 != 0 {
                        return Err(LoadError::OddUnevenData { line });
                    }
                    SpectrumData::Uneven(values)
                });
            }
            _ => self.advance()?,
        }
        Ok(())
    }

    fn complete<F>(&self, record: Record, on_record: &mut F) -> Result<(), LoadError>
    where
        F: FnMut(Record, usize) -> Result<(), LoadError>,
    {
        if record.data.is_none() {
            return Err(LoadError::MissingSpectrum { line: self.line });
        }
        on_record(record, self.line)
    }
}

/// Parses `source` completely, collecting every record.
pub fn parse_records(source: &str) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();
    Parser::new(source).parse(|record, _| {
        records.push(record);
        Ok(())
    })?;
    Ok(records)
}
