/// One input line after classification.
#[derive(Clone, Debug, PartialEq)]
pub enum Line<'a> {
    Heading(usize, &'a str),
    ListItem(&'a str),
    Blank,
    Text(&'a str),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Inline<'a> {
    Digest(&'a str),
    Strip(&'a str),
    Plaintext(&'a str),
}

/// The container element currently open in the output.
///
/// A list and a paragraph are never open at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    Closed,
    List,
    Paragraph,
}

impl BlockState {
    pub fn in_list(self) -> bool {
        self == BlockState::List
    }

    pub fn in_paragraph(self) -> bool {
        self == BlockState::Paragraph
    }
}
