//! Token recognizers and the scanning cursor.
//!
//! Recognizers are plain `nom` functions anchored at the start of their
//! input. [`Scanner`] owns the cursor for one parse and is the only place
//! it advances.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while},
    character::complete::{alpha1, char, digit0, digit1, hex_digit1, multispace1, satisfy},
    combinator::{map, not, opt, recognize},
    error::{Error, ErrorKind},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use swatch_core::{
    ExtentKeyword, GradientKind, Length, ParseError, PositionKeyword, RawNumber, Side,
    SideOrCorner, SyntaxError, VendorPrefix,
};

/// Characters that continue an identifier, used to reject partial keyword matches.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Match `word` case-insensitively, only as a whole word.
pub fn keyword<'a>(word: &'static str, input: &'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(word), not(satisfy(is_ident_char)))(input)
}

/// Match the first keyword in `options` whose text is present.
fn one_of<'a, K: Copy>(
    options: &[K],
    text: fn(K) -> &'static str,
    input: &'a str,
) -> IResult<&'a str, K> {
    for &option in options {
        if let Ok((rest, _)) = keyword(text(option), input) {
            return Ok((rest, option));
        }
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
}

/// Unsigned decimal: `12`, `12.`, `.5`, `1.25`.
pub fn number(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((digit0, char('.'), digit1))),
        recognize(pair(digit1, opt(char('.')))),
    ))(input)
}

fn signed_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), number))(input)
}

pub fn percentage(input: &str) -> IResult<&str, RawNumber> {
    map(terminated(signed_number, char('%')), |n: &str| RawNumber::from(n))(input)
}

pub fn angle(input: &str) -> IResult<&str, RawNumber> {
    map(terminated(signed_number, tag("deg")), |n: &str| RawNumber::from(n))(input)
}

/// `px` or `em` length.
pub fn length(input: &str) -> IResult<&str, Length> {
    alt((
        map(terminated(signed_number, tag("px")), |n: &str| Length::Px(n.into())),
        map(terminated(signed_number, tag("em")), |n: &str| Length::Em(n.into())),
    ))(input)
}

pub fn position_keyword(input: &str) -> IResult<&str, PositionKeyword> {
    one_of(&PositionKeyword::ALL, PositionKeyword::as_str, input)
}

pub fn extent_keyword(input: &str) -> IResult<&str, ExtentKeyword> {
    one_of(&ExtentKeyword::ALL, ExtentKeyword::as_str, input)
}

fn side(input: &str) -> IResult<&str, Side> {
    one_of(&Side::ALL, Side::as_str, input)
}

fn to_keyword(input: &str) -> IResult<&str, &str> {
    terminated(tag_no_case("to"), multispace1)(input)
}

/// `to <side>` or `to <side> <side>`; corners may name either axis first.
pub fn side_or_corner(input: &str) -> IResult<&str, SideOrCorner> {
    let (input, _) = to_keyword(input)?;
    let (after_first, first) = side(input)?;

    if let Ok((rest, second)) = preceded(multispace1, side)(after_first) {
        if let Some(corner) = SideOrCorner::corner(first, second) {
            return Ok((rest, corner));
        }
    }

    Ok((after_first, first.into()))
}

fn vendor_prefix(input: &str) -> IResult<&str, VendorPrefix> {
    delimited(
        char('-'),
        alt((
            map(tag_no_case("webkit"), |_| VendorPrefix::Webkit),
            map(tag_no_case("moz"), |_| VendorPrefix::Moz),
            map(tag_no_case("ms"), |_| VendorPrefix::Ms),
            map(tag_no_case("o"), |_| VendorPrefix::O),
        )),
        char('-'),
    )(input)
}

/// Gradient function name with optional vendor prefix, e.g. `-webkit-linear-gradient`.
pub fn gradient_function(kind: GradientKind, input: &str) -> IResult<&str, Option<VendorPrefix>> {
    terminated(opt(vendor_prefix), tag_no_case(kind.name()))(input)
}

/// `#` followed by hex digits; yields the digits only.
pub fn hex_color(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), hex_digit1)(input)
}

pub fn literal_color(input: &str) -> IResult<&str, &str> {
    alpha1(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

/// Cursor over the unconsumed part of one parse's input.
///
/// Each parse owns its scanner, so parses never share state.
pub struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, rest: input }
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// Whether only whitespace remains.
    pub fn is_at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.rest.is_empty()
    }

    fn skip_whitespace(&mut self) {
        if let Ok((rest, _)) = whitespace(self.rest) {
            self.rest = rest;
        }
    }

    /// Skip leading whitespace, then try `pattern` at the cursor.
    ///
    /// On a match the cursor moves past it; otherwise it stays put
    /// (after the skipped whitespace).
    pub fn scan<O, P>(&mut self, mut pattern: P) -> Option<O>
    where
        P: FnMut(&'a str) -> IResult<&'a str, O>,
    {
        self.skip_whitespace();
        match pattern(self.rest) {
            Ok((rest, output)) => {
                self.rest = rest;
                Some(output)
            }
            Err(_) => None,
        }
    }

    /// Scan a single punctuation character.
    pub fn punct(&mut self, c: char) -> bool {
        self.scan(char(c)).is_some()
    }

    /// Match a function-call shaped rule: `start`, then `(`, the body, and `)`.
    ///
    /// Returns `Ok(None)` when `start` does not match. Once it does, a
    /// missing parenthesis is a hard error.
    pub fn match_call<O, T, P, F>(&mut self, start: P, body: F) -> Result<Option<T>, ParseError>
    where
        P: FnMut(&'a str) -> IResult<&'a str, O>,
        F: FnOnce(&mut Self, O) -> Result<T, ParseError>,
    {
        let Some(captured) = self.scan(start) else {
            return Ok(None);
        };

        if !self.punct('(') {
            return Err(self.error(SyntaxError::MissingOpenParen));
        }

        let result = body(self, captured)?;

        if !self.punct(')') {
            return Err(self.error(SyntaxError::MissingCloseParen));
        }

        Ok(Some(result))
    }

    /// Match a comma-separated list of `matcher` results.
    ///
    /// An absent first item yields an empty list. A comma that is not
    /// followed by an item is an error.
    pub fn match_listing<T, F>(&mut self, mut matcher: F) -> Result<Vec<T>, ParseError>
    where
        F: FnMut(&mut Self) -> Result<Option<T>, ParseError>,
    {
        let mut items = Vec::new();

        if let Some(first) = matcher(self)? {
            items.push(first);
            while self.punct(',') {
                match matcher(self)? {
                    Some(item) => items.push(item),
                    None => return Err(self.error(SyntaxError::ExtraComma)),
                }
            }
        }

        Ok(items)
    }

    /// Saved cursor position for a bounded lookahead.
    pub fn checkpoint(&self) -> &'a str {
        self.rest
    }

    pub fn restore(&mut self, checkpoint: &'a str) {
        self.rest = checkpoint;
    }

    pub fn error(&self, kind: SyntaxError) -> ParseError {
        ParseError::new(kind, self.input, self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_forms() {
        assert_eq!(number("12px"), Ok(("px", "12")));
        assert_eq!(number("1.25)"), Ok((")", "1.25")));
        assert_eq!(number(".5,"), Ok((",", ".5")));
        assert_eq!(number("5."), Ok(("", "5.")));
        assert!(number("-1").is_err());
    }

    #[test]
    fn test_units() {
        assert_eq!(percentage("-10.5%"), Ok(("", RawNumber::from("-10.5"))));
        assert_eq!(angle("45deg,"), Ok((",", RawNumber::from("45"))));
        assert_eq!(length("2em"), Ok(("", Length::Em("2".into()))));
        assert_eq!(length("-3px"), Ok(("", Length::Px("-3".into()))));
        assert!(length("3%").is_err());
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        assert_eq!(keyword("at", "at center"), Ok((" center", "at")));
        assert!(keyword("at", "atomic").is_err());
        assert_eq!(position_keyword("Center,"), Ok((",", PositionKeyword::Center)));
        assert!(position_keyword("topaz").is_err());
        assert_eq!(
            extent_keyword("closest-corner at"),
            Ok((" at", ExtentKeyword::ClosestCorner))
        );
    }

    #[test]
    fn test_side_or_corner() {
        assert_eq!(side_or_corner("to right,"), Ok((",", SideOrCorner::Right)));
        assert_eq!(side_or_corner("to left top,"), Ok((",", SideOrCorner::LeftTop)));
        assert_eq!(side_or_corner("TO Top Left"), Ok(("", SideOrCorner::LeftTop)));
        assert_eq!(side_or_corner("to left right"), Ok((" right", SideOrCorner::Left)));
        assert!(side_or_corner("to center").is_err());
    }

    #[test]
    fn test_gradient_function_prefixes() {
        assert_eq!(
            gradient_function(GradientKind::LinearGradient, "linear-gradient("),
            Ok(("(", None))
        );
        assert_eq!(
            gradient_function(GradientKind::RadialGradient, "-WEBKIT-radial-gradient("),
            Ok(("(", Some(VendorPrefix::Webkit)))
        );
        assert_eq!(
            gradient_function(GradientKind::LinearGradient, "-ms-linear-gradient("),
            Ok(("(", Some(VendorPrefix::Ms)))
        );
        assert!(
            gradient_function(GradientKind::LinearGradient, "repeating-linear-gradient(").is_err()
        );
    }

    #[test]
    fn test_scan_skips_whitespace_and_advances() {
        let mut scanner = Scanner::new("  \n\t#fff 10%");
        assert_eq!(scanner.scan(hex_color), Some("fff"));
        assert_eq!(scanner.rest(), " 10%");
        assert_eq!(scanner.scan(hex_color), None);
        assert_eq!(scanner.rest(), "10%");
        assert_eq!(scanner.scan(percentage), Some(RawNumber::from("10")));
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_match_listing() {
        let mut scanner = Scanner::new("1, 2 ,3");
        let items = scanner.match_listing(|s| Ok(s.scan(number))).unwrap();
        assert_eq!(items, vec!["1", "2", "3"]);

        let mut scanner = Scanner::new("");
        let items = scanner.match_listing(|s| Ok(s.scan(number))).unwrap();
        assert!(items.is_empty());

        let mut scanner = Scanner::new("1, 2,");
        let err = scanner.match_listing(|s| Ok(s.scan(number))).unwrap_err();
        assert_eq!(err.kind, SyntaxError::ExtraComma);
    }

    #[test]
    fn test_match_call_requires_parens() {
        let mut scanner = Scanner::new("rgb(1)");
        let value = scanner
            .match_call(|i| tag("rgb")(i), |s, _| Ok(s.scan(number)))
            .unwrap();
        assert_eq!(value, Some(Some("1")));

        let mut scanner = Scanner::new("rgb 1");
        let err = scanner
            .match_call(|i| tag("rgb")(i), |s, _| Ok(s.scan(number)))
            .unwrap_err();
        assert_eq!(err.kind, SyntaxError::MissingOpenParen);
        assert_eq!(err.remaining, "1");

        let mut scanner = Scanner::new("rgb(1");
        let err = scanner
            .match_call(|i| tag("rgb")(i), |s, _| Ok(s.scan(number)))
            .unwrap_err();
        assert_eq!(err.kind, SyntaxError::MissingCloseParen);

        let mut scanner = Scanner::new("hsl(1)");
        let value = scanner
            .match_call(|i| tag("rgb")(i), |s, _| Ok(s.scan(number)))
            .unwrap();
        assert_eq!(value, None);
        assert_eq!(scanner.rest(), "hsl(1)");
    }
}
