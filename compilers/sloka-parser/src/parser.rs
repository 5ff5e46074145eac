use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{multispace0, one_of},
    combinator::map,
    IResult,
};
use crate::token::Span;

/// Devanāgarī sentence punctuation: daṇḍa and double daṇḍa.
pub const DANDA: char = '।';
pub const DOUBLE_DANDA: char = '॥';

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != DANDA && c != DOUBLE_DANDA
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Danda(char),
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken<'_>)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Word or punctuation
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_word_char), RawToken::Word),
            map(one_of("।॥"), RawToken::Danda),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

/// Removes daṇḍas wherever they occur and collapses whitespace runs to a
/// single space. Word pieces separated only by a daṇḍa are rejoined.
pub fn clean(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut prev_end: Option<usize> = None;

    for (span, token) in parse_with_spans(text) {
        if let RawToken::Word(word) = token {
            if let Some(end) = prev_end {
                if text[end..span.start].chars().any(char::is_whitespace) {
                    cleaned.push(' ');
                }
            }
            cleaned.push_str(word);
            prev_end = Some(span.end);
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_cover_words_and_dandas() {
        let input = "रामः वनम् गच्छति।";
        let tokens = parse_with_spans(input);

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].1, RawToken::Word("रामः"));
        assert_eq!(&input[tokens[1].0.start..tokens[1].0.end], "वनम्");
        assert_eq!(tokens[3].1, RawToken::Danda('।'));
    }

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(clean("  सत्यं   शिवं सुन्दरम् ॥ "), "सत्यं शिवं सुन्दरम्");
        assert_eq!(clean("रामः।\nगच्छति।"), "रामः गच्छति");
    }

    #[test]
    fn test_clean_rejoins_across_inner_danda() {
        assert_eq!(clean("राम।ः"), "रामः");
    }

    #[test]
    fn test_clean_only_punctuation() {
        assert_eq!(clean("॥ । ॥"), "");
    }
}
