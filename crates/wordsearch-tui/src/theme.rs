use crossterm::style::Color;

/// Number of distinct found-word colors; words share colors modulo this.
pub const WORD_COLOR_COUNT: usize = 8;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name, for the config file and the theme-cycling message
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid letter color
    pub letter: Color,
    /// Cursor cell background
    pub cursor_bg: Color,
    /// Live-selection cell background
    pub selection_bg: Color,
    /// Hint flash background
    pub hint_bg: Color,
    /// Per-word backgrounds for found words, keyed by word index
    pub word_colors: [Color; WORD_COLOR_COUNT],
    /// Timer/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Error/warning message color
    pub error: Color,
    /// Success/completion color
    pub success: Color,
    /// Input buffer text color
    pub input: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            letter: Color::Rgb { r: 215, g: 218, b: 230 },
            cursor_bg: Color::Rgb { r: 70, g: 90, b: 140 },
            selection_bg: Color::Rgb { r: 95, g: 120, b: 185 },
            hint_bg: Color::Rgb { r: 215, g: 190, b: 60 },
            word_colors: Self::word_palette(),
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            input: Color::Rgb { r: 140, g: 210, b: 255 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            letter: Color::Rgb { r: 40, g: 40, b: 55 },
            cursor_bg: Color::Rgb { r: 180, g: 200, b: 255 },
            selection_bg: Color::Rgb { r: 150, g: 175, b: 240 },
            hint_bg: Color::Rgb { r: 250, g: 220, b: 100 },
            word_colors: Self::word_palette(),
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            input: Color::Rgb { r: 30, g: 100, b: 200 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            bg: Color::Black,
            fg: Color::White,
            letter: Color::White,
            cursor_bg: Color::Blue,
            selection_bg: Color::DarkBlue,
            hint_bg: Color::Yellow,
            word_colors: [
                Color::DarkRed,
                Color::DarkBlue,
                Color::DarkGreen,
                Color::DarkYellow,
                Color::DarkMagenta,
                Color::Magenta,
                Color::Blue,
                Color::DarkCyan,
            ],
            info: Color::Grey,
            key: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            input: Color::Cyan,
        }
    }

    /// Red, blue, green, yellow, purple, pink, indigo, teal.
    fn word_palette() -> [Color; WORD_COLOR_COUNT] {
        [
            Color::Rgb { r: 239, g: 68, b: 68 },
            Color::Rgb { r: 59, g: 130, b: 246 },
            Color::Rgb { r: 34, g: 197, b: 94 },
            Color::Rgb { r: 202, g: 168, b: 4 },
            Color::Rgb { r: 168, g: 85, b: 247 },
            Color::Rgb { r: 236, g: 72, b: 153 },
            Color::Rgb { r: 99, g: 102, b: 241 },
            Color::Rgb { r: 20, g: 184, b: 166 },
        ]
    }

    /// Look up a theme by config/CLI name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// The next theme in the cycling order.
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Background color for a found word, keyed by its index in the list.
    pub fn word_color(&self, word_index: usize) -> Color {
        self.word_colors[word_index % WORD_COLOR_COUNT]
    }
}
