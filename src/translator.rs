use crate::digest::Digester;
use crate::entity::BlockState;
use crate::entity::Inline;
use crate::entity::Line;
use crate::parser;

/// Applies the `[[...]]` pass, then the `((...))` pass over its output.
pub fn format_inline<D: Digester + ?Sized>(text: &str, digester: &D) -> String {
    let hashed = translate_inline(parser::parse_hash_pass(text), digester);
    translate_inline(parser::parse_strip_pass(&hashed), digester)
}

fn translate_inline<D: Digester + ?Sized>(tokens: Vec<Inline>, digester: &D) -> String {
    tokens
        .into_iter()
        .map(|token| match token {
            Inline::Digest(content) => digester.digest(content),
            Inline::Strip(content) => content.replace(['c', 'C'], ""),
            Inline::Plaintext(text) => text.to_string(),
        })
        .collect()
}

fn close(state: BlockState) -> Option<String> {
    match state {
        BlockState::List => Some(String::from("</ul>\n")),
        BlockState::Paragraph => Some(String::from("</p>\n")),
        BlockState::Closed => None,
    }
}

/// Advances the block state by one classified line.
///
/// Headings close any open block. List items close a paragraph and paragraph
/// text closes a list, so a list and a paragraph are never open together.
/// Blank lines close paragraphs but leave lists open.
pub fn step<D: Digester + ?Sized>(
    state: BlockState,
    line: &Line,
    digester: &D,
) -> (BlockState, Vec<String>) {
    let mut fragments = Vec::new();
    let next = match *line {
        Line::Heading(level, content) => {
            fragments.extend(close(state));
            fragments.push(format!("<h{level}>{content}</h{level}>\n"));
            BlockState::Closed
        }
        Line::ListItem(content) => {
            if state.in_paragraph() {
                fragments.extend(close(state));
            }
            if !state.in_list() {
                fragments.push(String::from("<ul>\n"));
            }
            fragments.push(format!("<li>{}</li>\n", format_inline(content, digester)));
            BlockState::List
        }
        Line::Blank => {
            if state.in_paragraph() {
                fragments.extend(close(state));
                BlockState::Closed
            } else {
                state
            }
        }
        Line::Text(content) => {
            if state.in_list() {
                fragments.extend(close(state));
            }
            if !state.in_paragraph() {
                fragments.push(String::from("<p>\n"));
            }
            let formatted = format_inline(content, digester);
            if !formatted.is_empty() {
                fragments.push(format!("{formatted}<br/>\n"));
            }
            BlockState::Paragraph
        }
    };
    (next, fragments)
}

/// Closes whatever is still open at end of document.
pub fn finish(state: BlockState) -> Vec<String> {
    close(state).into_iter().collect()
}

pub fn convert<'a, I, D>(lines: I, digester: &D) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    D: Digester + ?Sized,
{
    let mut fragments = Vec::new();
    let state = lines
        .into_iter()
        .map(parser::parse_line)
        .fold(BlockState::default(), |state, line| {
            let (next, emitted) = step(state, &line, digester);
            fragments.extend(emitted);
            next
        });
    fragments.extend(finish(state));
    fragments
}

pub fn translate<D: Digester + ?Sized>(text: &str, digester: &D) -> String {
    convert(parser::split_lines(text), digester).concat()
}
