use crate::entity::Inline;
use crate::entity::Line;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until, take_while1},
    character::complete::anychar,
    combinator::{eof, iterator, map, not, recognize, rest, verify},
    multi::many1,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn parse_line_ending(i: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\n"), tag("\r")))(i)
}

// a final line without a terminator still counts, an empty tail does not
fn parse_raw_line(i: &str) -> IResult<&str, &str> {
    alt((
        terminated(take_till(is_line_break), parse_line_ending),
        terminated(take_till1(is_line_break), eof),
    ))(i)
}

/// Splits a document on `\n`, `\r\n` and lone `\r`, dropping the terminators.
pub fn split_lines(i: &str) -> Vec<&str> {
    let mut lines = iterator(i, parse_raw_line);
    let collected = (&mut lines).collect();
    collected
}

/// Classifies one input line. A trailing `\n` or `\r\n` is ignored.
pub fn parse_line(i: &str) -> Line<'_> {
    let i = i.trim_end_matches(['\n', '\r']);
    match parse_block_marker(i) {
        Ok((_, line)) => line,
        Err(_) => Line::Text(i.trim()),
    }
}

fn parse_block_marker(i: &str) -> IResult<&str, Line<'_>> {
    alt((
        map(parse_header, |(level, content)| {
            Line::Heading(level, content.trim())
        }),
        map(parse_unordered_list_element, |content| {
            Line::ListItem(content.trim())
        }),
        map(parse_blank, |_| Line::Blank),
    ))(i)
}

fn parse_blank(i: &str) -> IResult<&str, &str> {
    verify(rest, |s: &str| s.trim().is_empty())(i)
}

// this guy matches the literal character #
fn parse_header_tag(i: &str) -> IResult<&str, usize> {
    map(
        terminated(take_while1(|c| c == '#'), tag(" ")),
        |s: &str| s.len(),
    )(i)
}

fn parse_header(i: &str) -> IResult<&str, (usize, &str)> {
    pair(parse_header_tag, rest)(i)
}

fn parse_unordered_list_tag(i: &str) -> IResult<&str, &str> {
    terminated(tag("-"), tag(" "))(i)
}

fn parse_unordered_list_element(i: &str) -> IResult<&str, &str> {
    preceded(parse_unordered_list_tag, rest)(i)
}

fn parse_hash_directive(i: &str) -> IResult<&str, &str> {
    delimited(tag("[["), take_until("]]"), tag("]]"))(i)
}

fn parse_strip_directive(i: &str) -> IResult<&str, &str> {
    delimited(tag("(("), take_until("))"), tag("))"))(i)
}

// consume one char at a time until `directive` would match here,
// an opener with no closer on the rest of the line is plain text
fn parse_plaintext<'a, F>(directive: F) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str>
where
    F: FnMut(&'a str) -> IResult<&'a str, &'a str>,
{
    recognize(many1(preceded(not(directive), anychar)))
}

/// Splits a line into `[[...]]` directives and the text between them.
pub fn parse_hash_pass(i: &str) -> Vec<Inline<'_>> {
    let mut tokens = iterator(
        i,
        alt((
            map(parse_hash_directive, Inline::Digest),
            map(parse_plaintext(parse_hash_directive), Inline::Plaintext),
        )),
    );
    let collected = (&mut tokens).collect();
    collected
}

/// Splits a line into `((...))` directives and the text between them.
pub fn parse_strip_pass(i: &str) -> Vec<Inline<'_>> {
    let mut tokens = iterator(
        i,
        alt((
            map(parse_strip_directive, Inline::Strip),
            map(parse_plaintext(parse_strip_directive), Inline::Plaintext),
        )),
    );
    let collected = (&mut tokens).collect();
    collected
}
