//! Mana amounts: costs, pools and what permanents produce.
//!
//! A single `Mana` type is used for all three. In a cost the `colorless`
//! field is the generic part, payable with mana of any color.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One of the five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [Color::White, Color::Blue, Color::Black, Color::Red, Color::Green];

    fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// An amount of mana, split by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mana {
    pub colorless: u32,
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
}

impl Mana {
    /// No mana at all.
    pub const ZERO: Mana = Mana {
        colorless: 0,
        white: 0,
        blue: 0,
        black: 0,
        red: 0,
        green: 0,
    };

    /// `amount` generic (or colorless) mana.
    #[must_use]
    pub const fn colorless(amount: u32) -> Self {
        Mana { colorless: amount, ..Mana::ZERO }
    }

    /// `amount` mana of one color.
    #[must_use]
    pub fn of(color: Color, amount: u32) -> Self {
        let mut mana = Mana::ZERO;
        *mana.color_mut(color) = amount;
        mana
    }

    /// Shorthand for `Mana::of(Color::Red, amount)`.
    #[must_use]
    pub fn red(amount: u32) -> Self {
        Self::of(Color::Red, amount)
    }

    /// Shorthand for `Mana::of(Color::Blue, amount)`.
    #[must_use]
    pub fn blue(amount: u32) -> Self {
        Self::of(Color::Blue, amount)
    }

    /// Parse a cost such as `"1R"`, `"{2}{U}{U}"` or `""`.
    ///
    /// Digits form the generic part, `W U B R G` add colored symbols and
    /// `C` adds one colorless symbol. Braces are ignored.
    ///
    /// ```
    /// use mtg_minimax::core::Mana;
    ///
    /// let cost = Mana::parse("{1}{R}").unwrap();
    /// assert_eq!(cost.colorless, 1);
    /// assert_eq!(cost.red, 1);
    /// assert_eq!(cost.converted(), 2);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut mana = Mana::ZERO;
        let mut generic: Option<u32> = None;

        for ch in text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                generic = Some(generic.unwrap_or(0) * 10 + digit);
                continue;
            }
            if let Some(amount) = generic.take() {
                mana.colorless += amount;
            }
            match ch.to_ascii_uppercase() {
                '{' | '}' | ' ' => {}
                'C' => mana.colorless += 1,
                'W' => mana.white += 1,
                'U' => mana.blue += 1,
                'B' => mana.black += 1,
                'R' => mana.red += 1,
                'G' => mana.green += 1,
                _ => return Err(EngineError::InvalidManaCost(text.to_string())),
            }
        }
        if let Some(amount) = generic {
            mana.colorless += amount;
        }

        Ok(mana)
    }

    /// Amount of a single color.
    #[must_use]
    pub fn color(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Black => self.black,
            Color::Red => self.red,
            Color::Green => self.green,
        }
    }

    fn color_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Blue => &mut self.blue,
            Color::Black => &mut self.black,
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
        }
    }

    /// Total amount regardless of color (converted mana cost).
    #[must_use]
    pub fn converted(&self) -> u32 {
        self.colorless + self.white + self.blue + self.black + self.red + self.green
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.converted() == 0
    }

    /// Pay `cost` out of this amount, returning what is left.
    ///
    /// Colored requirements must be met by the same color. The generic part
    /// is taken from colorless mana first, then from colors in WUBRG order.
    /// Returns `None` when the cost cannot be covered.
    #[must_use]
    pub fn pay(self, cost: Mana) -> Option<Mana> {
        let mut rest = self;

        for color in Color::ALL {
            let need = cost.color(color);
            let have = rest.color_mut(color);
            if *have < need {
                return None;
            }
            *have -= need;
        }

        let mut generic = cost.colorless;
        let from_colorless = generic.min(rest.colorless);
        rest.colorless -= from_colorless;
        generic -= from_colorless;

        for color in Color::ALL {
            if generic == 0 {
                break;
            }
            let have = rest.color_mut(color);
            let taken = generic.min(*have);
            *have -= taken;
            generic -= taken;
        }

        (generic == 0).then_some(rest)
    }

    /// Can this amount pay for `cost`?
    #[must_use]
    pub fn covers(&self, cost: Mana) -> bool {
        self.pay(cost).is_some()
    }
}

impl Add for Mana {
    type Output = Mana;

    fn add(self, other: Mana) -> Mana {
        Mana {
            colorless: self.colorless + other.colorless,
            white: self.white + other.white,
            blue: self.blue + other.blue,
            black: self.black + other.black,
            red: self.red + other.red,
            green: self.green + other.green,
        }
    }
}

impl fmt::Display for Mana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.colorless > 0 {
            write!(f, "{}", self.colorless)?;
        }
        for color in Color::ALL {
            for _ in 0..self.color(color) {
                write!(f, "{}", color.symbol())?;
            }
        }
        Ok(())
    }
}
