pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Path data contains no command letters")]
    EmptyPath,

    #[error("Text before the first command: {text:?}")]
    LeadingText { text: String },

    #[error("Unknown path command '{letter}' at offset {offset}")]
    UnknownCommand { letter: char, offset: usize },

    #[error("Malformed number {token:?} in command #{index} ('{command}') at offset {offset}")]
    MalformedNumber {
        index: usize,
        command: char,
        token: String,
        offset: usize,
    },

    #[error("Command #{index} ('{command}') takes no arguments, found {text:?} at offset {offset}")]
    UnexpectedArguments {
        index: usize,
        command: char,
        text: String,
        offset: usize,
    },

    #[error(
        "Command #{index} ('{command}') has {found} argument(s); expected a positive multiple of {arity}"
    )]
    ArgumentCount {
        index: usize,
        command: char,
        found: usize,
        arity: usize,
    },

    #[error("Path has no coordinates to compute a bounding box from")]
    EmptyBoundingBox,

    #[error("Command #{index} overflowed to a non-finite value")]
    NonFinite { index: usize },

    #[error("Invalid normalize options: {message}")]
    InvalidOptions { message: String },

    #[error("Invalid SVG document: {message}")]
    Svg { message: String },

    #[error("SVG document contains no <path> element with a `d` attribute")]
    NoPathElement,
}
