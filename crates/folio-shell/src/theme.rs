//! Colour themes cycled by the `theme` command

/// 24-bit colour
pub type Rgb = (u8, u8, u8);

/// A named palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Rgb,
    pub text: Rgb,
    pub cursor: Rgb,
    pub command: Rgb,
}

/// Palette in cycling order; index 0 is active when a session starts
pub static THEMES: [Theme; 4] = [
    Theme {
        name: "default",
        bg: (0x1c, 0x19, 0x17),
        text: (0xe7, 0xe5, 0xe4),
        cursor: (0xfb, 0x92, 0x3c),
        command: (0xfd, 0xba, 0x74),
    },
    Theme {
        name: "matrix",
        bg: (0x00, 0x00, 0x00),
        text: (0x00, 0xff, 0x00),
        cursor: (0x00, 0xff, 0x00),
        command: (0x00, 0xff, 0x00),
    },
    Theme {
        name: "retro",
        bg: (0x1a, 0x1a, 0x2e),
        text: (0xee, 0xee, 0xee),
        cursor: (0xff, 0x6b, 0x6b),
        command: (0x4e, 0xcd, 0xc4),
    },
    Theme {
        name: "ocean",
        bg: (0x0f, 0x34, 0x60),
        text: (0xe9, 0x45, 0x60),
        cursor: (0xf5, 0xf5, 0xf5),
        command: (0x16, 0x21, 0x3e),
    },
];

/// Index after `index`, wrapping at the end of the palette
pub fn next_index(index: usize) -> usize {
    (index + 1) % THEMES.len()
}
