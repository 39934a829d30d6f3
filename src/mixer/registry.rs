use super::absorber::{Canvas, Dye, BLACK_DYE, BLANK_CANVAS, BLANK_DYE};
use super::light::{Light, BUILTIN_LIGHTS};
use std::cell::Cell;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Entities with a stable id and a display name.
pub trait Numbered {
    fn number(&self) -> i32;
    fn name(&self) -> &str;
}

/// An ordered collection searchable by entity number.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    items: Vec<T>,
    // Where the previous successful lookup landed. Only a starting point.
    index_cache: Cell<usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index_cache: Cell::new(0),
        }
    }
}

impl<T: Numbered> Registry<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index_cache: Cell::new(0),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Swaps in `item` at `index`, handing back the entry it displaced.
    pub fn replace(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self.items[index], item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Position of the entity numbered `number`. Scans every entry once,
    /// wrapping around from just before the previous hit.
    pub fn find_index_by_number(&self, number: i32) -> Option<usize> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let mut i = self.index_cache.get().saturating_sub(1);
        if i >= n {
            i = 0;
        }
        for _ in 0..n {
            if self.items[i].number() == number {
                self.index_cache.set(i);
                return Some(i);
            }
            i += 1;
            if i >= n {
                i = 0;
            }
        }
        None
    }

    pub fn find_by_number(&self, number: i32) -> Option<&T> {
        self.find_index_by_number(number).map(|i| &self.items[i])
    }

    /// Puts the entries in display order.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| natural_cmp(a.name(), b.name()));
        self.index_cache.set(0);
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Numbers of the entities selected before the user picks anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Defaults {
    pub light: i32,
    pub canvas: i32,
    pub dye: i32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            light: 1,
            canvas: 1,
            dye: 1,
        }
    }
}

/// Every light, canvas and dye available to the mixer.
#[derive(Clone, Debug)]
pub struct Registries {
    pub lights: Registry<Light>,
    pub canvases: Registry<Canvas>,
    pub dyes: Registry<Dye>,
    pub defaults: Defaults,
}

impl Registries {
    /// Just the synthetic entries that exist regardless of loaded data.
    pub fn with_builtins() -> Self {
        Self {
            lights: Registry::new(BUILTIN_LIGHTS.clone()),
            canvases: Registry::new(vec![BLANK_CANVAS.clone()]),
            dyes: Registry::new(vec![BLANK_DYE.clone(), BLACK_DYE.clone()]),
            defaults: Defaults::default(),
        }
    }

    pub fn sort(&mut self) {
        self.lights.sort();
        self.canvases.sort();
        self.dyes.sort();
    }

    /// Refills any empty collection with its built-in entries and returns the
    /// kinds that were refilled.
    pub fn restore_empty(&mut self) -> Vec<&'static str> {
        let builtins = Self::with_builtins();
        let mut restored = Vec::new();
        if self.lights.is_empty() {
            self.lights = builtins.lights;
            restored.push("lights");
        }
        if self.canvases.is_empty() {
            self.canvases = builtins.canvases;
            restored.push("canvases");
        }
        if self.dyes.is_empty() {
            self.dyes = builtins.dyes;
            restored.push("dyes");
        }
        restored
    }
}

#[derive(Debug, PartialEq)]
enum NameToken {
    Number(f64),
    Word(String),
}

struct NameTokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> NameTokens<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            chars: name.chars().peekable(),
        }
    }

    /// Whether a number starts at `c`: a digit, or a sign or decimal point
    /// with a digit after it.
    fn number_starts(&self, c: char) -> bool {
        let mut ahead = self.chars.clone();
        ahead.next();
        match c {
            '0'..='9' => true,
            '-' => match ahead.next() {
                Some(d) if d.is_ascii_digit() => true,
                Some('.') => ahead.next().map_or(false, |d| d.is_ascii_digit()),
                _ => false,
            },
            '.' => ahead.next().map_or(false, |d| d.is_ascii_digit()),
            _ => false,
        }
    }
}

impl<'a> Iterator for NameTokens<'a> {
    type Item = NameToken;

    fn next(&mut self) -> Option<NameToken> {
        while let Some(&c) = self.chars.peek() {
            if self.number_starts(c) {
                let negative = c == '-';
                if negative {
                    self.chars.next();
                }
                let mut text = String::new();
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
                let value: f64 = text.trim_end_matches('.').parse().unwrap_or(0.0);
                return Some(NameToken::Number(if negative { -value } else { value }));
            }
            if c.is_alphabetic() {
                let mut word = String::new();
                while let Some(&c) = self.chars.peek() {
                    if c.is_alphanumeric() || c == '-' || c == '.' {
                        word.extend(c.to_lowercase());
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                return Some(NameToken::Word(word));
            }
            self.chars.next();
        }
        None
    }
}

// Words that always lead their position, highest priority first.
const LEADING_WORDS: [&str; 3] = ["blank", "reference", "standard"];

fn word_rank(word: &str) -> usize {
    LEADING_WORDS
        .iter()
        .position(|w| *w == word)
        .unwrap_or(LEADING_WORDS.len())
}

fn token_cmp(a: &NameToken, b: &NameToken) -> Ordering {
    match (a, b) {
        (NameToken::Number(x), NameToken::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (NameToken::Number(_), NameToken::Word(_)) => Ordering::Less,
        (NameToken::Word(_), NameToken::Number(_)) => Ordering::Greater,
        (NameToken::Word(x), NameToken::Word(y)) => word_rank(x)
            .cmp(&word_rank(y))
            .then_with(|| x.cmp(y)),
    }
}

/// Orders display names the way a person would: embedded numbers compare by
/// value, case is ignored, punctuation separates words, and "blank",
/// "reference" and "standard" lead whatever position they appear in.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = NameTokens::new(a);
    let mut b = NameTokens::new(b);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match token_cmp(&x, &y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    struct Entry(i32, &'static str);

    impl Numbered for Entry {
        fn number(&self) -> i32 {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }
    }

    fn sample_registry() -> Registry<Entry> {
        Registry::new(vec![
            Entry(17, "Dye 10"),
            Entry(4, "Dye 2"),
            Entry(-3, "blank"),
            Entry(99, "Acid Red 1"),
            Entry(5, "reference, black"),
        ])
    }

    #[test]
    fn test_find_index_by_number() {
        let registry = sample_registry();
        for (i, entry) in registry.iter().enumerate() {
            assert_eq!(registry.find_index_by_number(entry.number()), Some(i));
        }
        assert_eq!(registry.find_index_by_number(1234), None);
        assert_eq!(Registry::<Entry>::default().find_index_by_number(1), None);
    }

    #[test]
    fn test_find_is_independent_of_cache() {
        let registry = sample_registry();
        for start in 0..registry.len() + 2 {
            for (i, entry) in registry.iter().enumerate() {
                registry.index_cache.set(start);
                assert_eq!(registry.find_index_by_number(entry.number()), Some(i));
                registry.index_cache.set(start);
                assert_eq!(registry.find_index_by_number(0), None);
            }
        }
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("Dye 2", "Dye 10"), Ordering::Less);
        assert_eq!(natural_cmp("blank", "Acid Red 1"), Ordering::Less);
        assert_eq!(natural_cmp("Acid Red 1", "blank"), Ordering::Greater);
        assert_eq!(natural_cmp("reference, black", "Acid Red 1"), Ordering::Less);
        assert_eq!(natural_cmp("blank", "reference, black"), Ordering::Less);
        assert_eq!(natural_cmp("standard", "reference"), Ordering::Greater);
        assert_eq!(natural_cmp("daylight, standard, CIE D 65", "daylight, north sky"), Ordering::Less);
        assert_eq!(natural_cmp("Dye", "Dye 1"), Ordering::Less);
        assert_eq!(natural_cmp("dye 1", "DYE 1"), Ordering::Equal);
        assert_eq!(natural_cmp("3000 K", "kelvin"), Ordering::Less);
        // underscores separate words; a minus sign or point before digits is part of the number
        assert_eq!(natural_cmp("Dye_2", "Dye 10"), Ordering::Less);
        assert_eq!(natural_cmp("offset -5", "offset 2"), Ordering::Less);
        assert_eq!(natural_cmp("size .5", "size 0.5"), Ordering::Equal);
        assert_eq!(natural_cmp("Acid-Red", "acid red"), Ordering::Greater);
        assert_eq!(
            natural_cmp("reference, blackbody, 900 K", "reference, blackbody, 10000 K"),
            Ordering::Less
        );
    }

    #[test]
    fn test_natural_cmp_is_a_total_order() {
        let names = [
            "blank",
            "blank (perfect white)",
            "reference, black",
            "reference, blackbody, 800 K",
            "reference, blackbody, 6500 K",
            "reference, flat over wavelen",
            "standard",
            "Acid Red 1",
            "Acid Red 18",
            "acid red 2",
            "Dye 2",
            "Dye 10",
            "Dye",
            "daylight, standard, CIE D 65",
            "paper, cotton rag",
            "2.5 mm",
            "10 mm",
            "Dye_2",
            "offset -5",
            "offset .5",
            "x-ray",
            "",
        ];
        for (a, b) in names.iter().cartesian_product(names.iter()) {
            assert_eq!(natural_cmp(a, b), natural_cmp(b, a).reverse(), "{} vs {}", a, b);
        }
        for ((a, b), c) in names
            .iter()
            .cartesian_product(names.iter())
            .cartesian_product(names.iter())
        {
            if natural_cmp(a, b) != Ordering::Greater && natural_cmp(b, c) != Ordering::Greater {
                assert_ne!(natural_cmp(a, c), Ordering::Greater, "{} {} {}", a, b, c);
            }
        }
    }

    #[test]
    fn test_sort() {
        let mut registry = sample_registry();
        registry.sort();
        let names = registry.iter().map(|e| e.name()).collect_vec();
        assert_eq!(
            names,
            vec!["blank", "reference, black", "Acid Red 1", "Dye 2", "Dye 10"]
        );
        assert_eq!(registry.find_index_by_number(17), Some(4));
    }

    #[test]
    fn test_replace() {
        let mut registry = sample_registry();
        let old = registry.replace(1, Entry(4, "Dye 2b"));
        assert_eq!(old.name(), "Dye 2");
        assert_eq!(registry.find_by_number(4).map(|e| e.name()), Some("Dye 2b"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_registries_builtins() {
        let registries = Registries::with_builtins();
        assert!(registries.lights.find_by_number(1).is_some());
        assert!(registries.canvases.find_by_number(1).is_some());
        assert_eq!(registries.dyes.len(), 2);
        assert_eq!(registries.defaults, Defaults::default());
    }

    #[test]
    fn test_restore_empty() {
        let mut registries = Registries::with_builtins();
        assert!(registries.restore_empty().is_empty());

        registries.canvases = Registry::default();
        registries.dyes = Registry::default();
        assert_eq!(registries.restore_empty(), vec!["canvases", "dyes"]);
        assert_eq!(registries.canvases.len(), 1);
        assert_eq!(registries.dyes.len(), 2);
    }
}
