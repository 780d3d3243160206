use owo_colors::Style;

/// Styles applied to the front-end's output
///
/// Constructed once per command; the plain variant keeps the same shape
/// with every style disabled, for `--no-colors`.
#[derive(Debug, Clone, Copy)]
pub struct Stylesheet {
    pub error: Style,
    pub note: Style,
    pub help: Style,
    pub source_annotation: Style,
    pub emphasis: Style,
    pub heading: Style,
    pub value: Style,
}

const COLOR: Stylesheet = Stylesheet {
    error: Style::new().red(),
    note: Style::new().blue(),
    help: Style::new().blue(),
    source_annotation: Style::new().blue().bold(),
    emphasis: Style::new().bold(),
    heading: Style::new().bold(),
    value: Style::new().green(),
};

const PLAIN: Stylesheet = Stylesheet {
    error: Style::new(),
    note: Style::new(),
    help: Style::new(),
    source_annotation: Style::new(),
    emphasis: Style::new(),
    heading: Style::new(),
    value: Style::new(),
};

impl Stylesheet {
    /// Returns the colored stylesheet, or the plain one when colors are
    /// disabled
    pub const fn new(use_colors: bool) -> Self {
        if use_colors { COLOR } else { PLAIN }
    }
}
